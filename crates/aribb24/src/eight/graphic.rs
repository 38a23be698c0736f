//! 文字符号集合の符号表を引いて図形文字をデコードする。

use super::decode::{Area, ReadResult, Text};
use super::set::GraphicSet;
use super::{table, DecodeError};

/// JIS X 0201片仮名の`bytes`の先頭2バイトが、濁点または半濁点付きの1文字に結合できる場合はその文字を返す。
///
/// 2バイトが同じ領域（GLまたはGR）にない場合は結合しない。
pub(super) fn compose_voiced(bytes: &[u8]) -> Option<&'static str> {
    let [c1, c2, ..] = *bytes else {
        return None;
    };
    if Area::of(c1) == Area::Control || Area::of(c1) != Area::of(c2) {
        return None;
    }
    table::jis_x_kata_voiced(c1 & 0x7F, c2 & 0x7F)
}

/// 漢字集合の区から、実際に文字を引く符号集合を決める。
///
/// 追加記号が割り当てられている区以外は`None`を返す。
/// それ以外の区はEUC-JPの変換表で扱われているはずである。
fn resolve_kanji(code: u16) -> Option<GraphicSet> {
    match code >> 8 {
        0x75 | 0x76 | 0x7A..=0x7E => Some(GraphicSet::ExtraSymbols),
        _ => None,
    }
}

/// 符号集合`set`から`code`の文字列を引く。
fn lookup(set: GraphicSet, code: u16, pos: usize) -> Result<Option<&'static str>, DecodeError> {
    let s = match set {
        GraphicSet::Kanji => return Err(DecodeError::UnresolvedKanji { pos }),
        GraphicSet::JisKanjiPlane1 => table::jis_kanji_plane1(code),
        GraphicSet::JisKanjiPlane2 => table::jis_kanji_plane2(code),
        GraphicSet::ExtraSymbols => table::extra_symbols(code),

        GraphicSet::Alnum | GraphicSet::PropAlnum => table::alnum(code as u8),
        GraphicSet::Hira | GraphicSet::PropHira => table::hira(code as u8),
        GraphicSet::Kata | GraphicSet::PropKata => table::kata(code as u8),
        GraphicSet::JisXKata => table::jis_x_kata(code as u8),

        GraphicSet::MosaicA
        | GraphicSet::MosaicB
        | GraphicSet::MosaicC
        | GraphicSet::MosaicD
        | GraphicSet::Drcs(_)
        | GraphicSet::Macro
        | GraphicSet::Unknown { .. } => None,
    };
    Ok(s)
}

/// 半角であれば`s`を半角に揃える。
#[inline]
fn fold_halfwidth(s: &'static str, halfwidth: bool) -> &'static str {
    if halfwidth {
        table::to_halfwidth(s).unwrap_or(s)
    } else {
        s
    }
}

/// `bytes`の先頭の単位を符号集合`set`の図形文字としてデコードする。
///
/// `pos`は入力における`bytes`の位置で、エラーの報告に使う。
pub(super) fn read(
    set: GraphicSet,
    bytes: &[u8],
    pos: usize,
    halfwidth: bool,
) -> Result<ReadResult<'static>, DecodeError> {
    let Some(&c1) = bytes.first() else {
        return Ok(ReadResult::Eof);
    };

    let (code, len) = if set.is_double() {
        let Some(&c2) = bytes.get(1) else {
            return Ok(ReadResult::Eof);
        };
        if Area::of(c1) != Area::of(c2) {
            return Err(DecodeError::MixedHalves { pos });
        }
        ((u16::from(c1 & 0x7F) << 8) | u16::from(c2 & 0x7F), 2)
    } else {
        (u16::from(c1 & 0x7F), 1)
    };

    if set == GraphicSet::JisXKata && !halfwidth {
        if let Some(s) = compose_voiced(bytes) {
            return Ok(ReadResult::emit(s, 2));
        }
    }

    // 解決できなければ漢字集合のまま引いてエラーにする
    let set = match set {
        GraphicSet::Kanji => resolve_kanji(code).unwrap_or(GraphicSet::Kanji),
        set => set,
    };

    let text = match lookup(set, code, pos)? {
        Some(s) => Text::from(fold_halfwidth(s, halfwidth)),
        None => {
            log::trace!("no character for {:?} {:04X}", set, code);
            Text::REPLACEMENT
        }
    };
    Ok(ReadResult::emit(text, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use hex_literal::hex;

    fn text(r: Result<ReadResult, DecodeError>) -> (String, usize) {
        match r {
            Ok(ReadResult::Unit { text, len }) => {
                let mut buf = String::new();
                text.push_to(&mut buf);
                (buf, len)
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_single_byte_sets() {
        assert_eq!(text(read(GraphicSet::Hira, &hex!("A2"), 0, false)), ("あ".into(), 1));
        assert_eq!(text(read(GraphicSet::Kata, &hex!("22"), 0, false)), ("ア".into(), 1));
        assert_eq!(text(read(GraphicSet::Kata, &hex!("22"), 0, true)), ("ｱ".into(), 1));
        assert_eq!(text(read(GraphicSet::PropAlnum, &hex!("41"), 0, true)), ("A".into(), 1));
        assert_eq!(text(read(GraphicSet::JisXKata, &hex!("B1"), 0, false)), ("ア".into(), 1));
    }

    #[test]
    fn test_undefined_sets() {
        for set in [
            GraphicSet::MosaicA,
            GraphicSet::Drcs(1),
            GraphicSet::Macro,
            GraphicSet::from_final(0x7A),
        ] {
            assert_eq!(text(read(set, &hex!("21 21"), 0, false)), ("\u{FFFD}".into(), 1));
        }
        assert_eq!(
            text(read(GraphicSet::Drcs(0), &hex!("21 21"), 0, false)),
            ("\u{FFFD}".into(), 2)
        );
        assert_eq!(
            text(read(GraphicSet::from_double_final(0x7A), &hex!("21 21"), 0, false)),
            ("\u{FFFD}".into(), 2)
        );
    }

    #[test]
    fn test_unassigned_codes() {
        assert_eq!(text(read(GraphicSet::Hira, &hex!("74"), 0, false)), ("\u{FFFD}".into(), 1));
        assert_eq!(text(read(GraphicSet::JisXKata, &hex!("60"), 0, false)), ("\u{FFFD}".into(), 1));
        assert_eq!(
            text(read(GraphicSet::ExtraSymbols, &hex!("7B 21"), 0, false)),
            ("\u{FFFD}".into(), 2)
        );
    }

    #[test]
    fn test_double_byte_sets() {
        assert_eq!(
            text(read(GraphicSet::JisKanjiPlane2, &hex!("21 21"), 0, false)),
            ("𠂉".into(), 2)
        );
        assert_eq!(
            text(read(GraphicSet::ExtraSymbols, &hex!("FA D0"), 0, false)),
            ("[HV]".into(), 2)
        );
        assert_eq!(
            text(read(GraphicSet::JisKanjiPlane1, &hex!("21 41"), 0, true)),
            ("~".into(), 2)
        );
    }

    #[test]
    fn test_kanji_resolution() {
        assert_eq!(text(read(GraphicSet::Kanji, &hex!("7A 50"), 0, false)), ("[HV]".into(), 2));
        assert_eq!(text(read(GraphicSet::Kanji, &hex!("75 21"), 0, false)), ("㐂".into(), 2));
        assert_matches!(
            read(GraphicSet::Kanji, &hex!("2D 21"), 5, false),
            Err(DecodeError::UnresolvedKanji { pos: 5 })
        );
        assert_matches!(
            read(GraphicSet::Kanji, &hex!("F7 21"), 0, false),
            Err(DecodeError::UnresolvedKanji { pos: 0 })
        );
        assert_matches!(
            lookup(GraphicSet::Kanji, 0x3021, 7),
            Err(DecodeError::UnresolvedKanji { pos: 7 })
        );
    }

    #[test]
    fn test_mixed_halves() {
        assert_matches!(
            read(GraphicSet::JisKanjiPlane1, &hex!("30 A1"), 3, false),
            Err(DecodeError::MixedHalves { pos: 3 })
        );
        assert_matches!(
            read(GraphicSet::JisKanjiPlane1, &hex!("B0 89"), 0, false),
            Err(DecodeError::MixedHalves { pos: 0 })
        );
        assert_matches!(read(GraphicSet::JisKanjiPlane1, &hex!("30"), 0, false), Ok(ReadResult::Eof));
    }

    #[test]
    fn test_compose_voiced() {
        assert_eq!(compose_voiced(&hex!("36 5E")), Some("ガ"));
        assert_eq!(compose_voiced(&hex!("CE DF")), Some("ポ"));
        assert_eq!(compose_voiced(&hex!("36 DE")), None);
        assert_eq!(compose_voiced(&hex!("36")), None);

        assert_eq!(text(read(GraphicSet::JisXKata, &hex!("B6 DE"), 0, false)), ("ガ".into(), 2));
        assert_eq!(text(read(GraphicSet::JisXKata, &hex!("B6 DE"), 0, true)), ("ｶ".into(), 1));
    }
}
