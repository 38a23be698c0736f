//! 既存の日本語符号化方式（EUC-JP、Shift_JIS）の変換表を流用したデコード。
//!
//! 英数やJIS X 0208の範囲に収まる漢字はEUC-JPとして、JIS X 0201片仮名はShift_JISとして
//! そのままデコードできる。どちらで扱えるかは呼び出し中の符号集合と入力から判定する。

use std::borrow::Cow;

use encoding_rs::{Encoding, EUC_JP, SHIFT_JIS};

use super::control;
use super::decode::{Area, ReadResult, Text};
use super::graphic;
use super::set::{Category, GraphicSet};
use super::table;

/// 既存の符号化方式でデコードするために必要なバイトの変換。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeCondition {
    /// 既存の符号化方式ではデコードできない。
    Never,
    /// 変換なしでデコードできる。
    RequireNoConversion,
    /// 最上位ビットを落とせばデコードできる。
    RequireClearHighBit,
    /// 最上位ビットを立てればデコードできる。
    RequireSetHighBit,
}

impl DecodeCondition {
    /// 既存の符号化方式でデコードできる場合は`true`を返す。
    #[inline]
    pub fn is_eligible(self) -> bool {
        self != DecodeCondition::Never
    }

    /// `b`に変換を施す。`Never`であれば`b`をそのまま返す。
    #[inline]
    pub fn apply(self, b: u8) -> u8 {
        match self {
            DecodeCondition::Never | DecodeCondition::RequireNoConversion => b,
            DecodeCondition::RequireClearHighBit => b & 0x7F,
            DecodeCondition::RequireSetHighBit => b | 0x80,
        }
    }
}

/// `bytes`を置換なしでデコードする。
#[inline]
fn decode_strict<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
    encoding.decode_without_bom_handling_and_without_replacement(bytes)
}

/// EUC-JPの変換表がJIS X 0213と同じ文字を割り当てている区点であれば`true`を返す。
fn covered_by_euc_jp(ku: u8, ten: u8) -> bool {
    // 0x75以降の区にはIBM拡張文字が、13区の一部にはJIS X 0213にないNEC特殊文字が割り当てられている
    (0x21..=0x74).contains(&ku)
        && (0x21..=0x7E).contains(&ten)
        && table::jis_kanji_plane1(u16::from_be_bytes([ku, ten])).is_some()
        && decode_strict(EUC_JP, &[ku | 0x80, ten | 0x80]).is_some()
}

/// 先頭のバイトが属する領域で有効な符号集合を返す。
#[inline]
fn active_set(gl_set: GraphicSet, gr_set: GraphicSet, area: Area) -> Option<GraphicSet> {
    match area {
        Area::Gl => Some(gl_set),
        Area::Gr => Some(gr_set),
        Area::Control => None,
    }
}

/// `bytes`の先頭の単位をEUC-JPとしてデコードできるか判定する。
pub fn classify_euc_jp(gl_set: GraphicSet, gr_set: GraphicSet, bytes: &[u8]) -> DecodeCondition {
    let Some(&c1) = bytes.first() else {
        return DecodeCondition::Never;
    };

    match c1 {
        0x20 | 0x7F => return DecodeCondition::RequireNoConversion,
        0xA0 | 0xFF => return DecodeCondition::RequireClearHighBit,
        _ => {}
    }

    let area = Area::of(c1);
    let Some(set) = active_set(gl_set, gr_set, area) else {
        return DecodeCondition::Never;
    };

    if set.category() == Category::Alnum {
        return if area == Area::Gl {
            DecodeCondition::RequireNoConversion
        } else {
            DecodeCondition::RequireClearHighBit
        };
    }

    if !matches!(set, GraphicSet::Kanji | GraphicSet::JisKanjiPlane1) {
        return DecodeCondition::Never;
    }
    let Some(&c2) = bytes.get(1) else {
        return DecodeCondition::Never;
    };
    if Area::of(c2) != area {
        return DecodeCondition::Never;
    }

    let (ku, ten) = (c1 & 0x7F, c2 & 0x7F);
    // 漢字集合の13区はJIS X 0208と異なる
    if set == GraphicSet::Kanji && ku == 0x2D {
        return DecodeCondition::Never;
    }
    if !covered_by_euc_jp(ku, ten) {
        return DecodeCondition::Never;
    }

    if area == Area::Gl {
        DecodeCondition::RequireSetHighBit
    } else {
        DecodeCondition::RequireNoConversion
    }
}

/// `bytes`の先頭の単位をShift_JISとしてデコードできるか判定する。
///
/// 全角時に濁点・半濁点が続いて1文字に結合できる場合は、結合させるためデコードできないとする。
pub fn classify_shift_jis(
    gl_set: GraphicSet,
    gr_set: GraphicSet,
    halfwidth: bool,
    bytes: &[u8],
) -> DecodeCondition {
    let Some(&c1) = bytes.first() else {
        return DecodeCondition::Never;
    };

    let area = Area::of(c1);
    if active_set(gl_set, gr_set, area) != Some(GraphicSet::JisXKata) {
        return DecodeCondition::Never;
    }
    if !(0x21..=0x5F).contains(&(c1 & 0x7F)) {
        return DecodeCondition::Never;
    }
    if !halfwidth && graphic::compose_voiced(bytes).is_some() {
        return DecodeCondition::Never;
    }

    if area == Area::Gl {
        DecodeCondition::RequireSetHighBit
    } else {
        DecodeCondition::RequireNoConversion
    }
}

/// 円記号を返す。
#[inline]
fn yen(halfwidth: bool) -> char {
    if halfwidth {
        '\u{A5}'
    } else {
        '\u{FFE5}'
    }
}

/// 文字幅に合わせて`s`を全角または半角に揃える。
fn fold(s: Cow<'_, str>, halfwidth: bool) -> Text<'_> {
    let folded = if halfwidth {
        table::to_halfwidth(&s)
    } else {
        table::to_fullwidth(&s)
    };
    Text::Str(folded.map_or(s, Cow::Borrowed))
}

/// [`classify_euc_jp`]の判定に従い、`bytes`の先頭の単位をEUC-JPとしてデコードする。
pub(super) fn decode_euc_jp(
    bytes: &[u8],
    cond: DecodeCondition,
    halfwidth: bool,
) -> ReadResult<'_> {
    let Some(&c1) = bytes.first() else {
        return ReadResult::Eof;
    };

    let single = match cond {
        DecodeCondition::RequireClearHighBit => true,
        DecodeCondition::RequireNoConversion => Area::of(c1) != Area::Gr,
        _ => false,
    };
    if single {
        let text = match cond.apply(c1) {
            0x20 => Text::Char(control::space(halfwidth)),
            0x5C => Text::Char(yen(halfwidth)),
            _ if Area::of(c1) == Area::Gl => match decode_strict(EUC_JP, &bytes[..1]) {
                Some(s) => fold(s, halfwidth),
                None => Text::REPLACEMENT,
            },
            b => match decode_strict(EUC_JP, &[b]) {
                Some(s) => fold(Cow::Owned(s.into_owned()), halfwidth),
                None => Text::REPLACEMENT,
            },
        };
        return ReadResult::emit(text, 1);
    }

    let Some(&c2) = bytes.get(1) else {
        return ReadResult::Eof;
    };
    let text = match decode_strict(EUC_JP, &[cond.apply(c1), cond.apply(c2)]) {
        Some(s) => fold(Cow::Owned(s.into_owned()), halfwidth),
        None => Text::REPLACEMENT,
    };
    ReadResult::emit(text, 2)
}

/// [`classify_shift_jis`]の判定に従い、`bytes`の先頭の単位をShift_JISとしてデコードする。
pub(super) fn decode_shift_jis(
    bytes: &[u8],
    cond: DecodeCondition,
    halfwidth: bool,
) -> ReadResult<'_> {
    let Some(&c1) = bytes.first() else {
        return ReadResult::Eof;
    };

    let text = match decode_strict(SHIFT_JIS, &[cond.apply(c1)]) {
        Some(s) => fold(Cow::Owned(s.into_owned()), halfwidth),
        None => Text::REPLACEMENT,
    };
    ReadResult::emit(text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const KANJI: GraphicSet = GraphicSet::Kanji;
    const PLANE1: GraphicSet = GraphicSet::JisKanjiPlane1;
    const ALNUM: GraphicSet = GraphicSet::Alnum;
    const HIRA: GraphicSet = GraphicSet::Hira;
    const JISX: GraphicSet = GraphicSet::JisXKata;

    fn text(r: ReadResult) -> (String, usize) {
        match r {
            ReadResult::Unit { text, len } => {
                let mut buf = String::new();
                text.push_to(&mut buf);
                (buf, len)
            }
            ReadResult::Eof => panic!("unexpected EOF"),
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(DecodeCondition::RequireNoConversion.apply(0xB0), 0xB0);
        assert_eq!(DecodeCondition::RequireClearHighBit.apply(0xC1), 0x41);
        assert_eq!(DecodeCondition::RequireSetHighBit.apply(0x30), 0xB0);
        assert!(!DecodeCondition::Never.is_eligible());
        assert!(DecodeCondition::RequireSetHighBit.is_eligible());
    }

    #[test]
    fn test_classify_euc_jp_space_and_delete() {
        for set in [PLANE1, HIRA, JISX] {
            assert_eq!(classify_euc_jp(set, set, &hex!("20")), DecodeCondition::RequireNoConversion);
            assert_eq!(classify_euc_jp(set, set, &hex!("7F")), DecodeCondition::RequireNoConversion);
            assert_eq!(classify_euc_jp(set, set, &hex!("A0")), DecodeCondition::RequireClearHighBit);
            assert_eq!(classify_euc_jp(set, set, &hex!("FF")), DecodeCondition::RequireClearHighBit);
        }
    }

    #[test]
    fn test_classify_euc_jp() {
        assert_eq!(classify_euc_jp(ALNUM, HIRA, &hex!("41")), DecodeCondition::RequireNoConversion);
        assert_eq!(classify_euc_jp(HIRA, ALNUM, &hex!("C1")), DecodeCondition::RequireClearHighBit);
        assert_eq!(classify_euc_jp(HIRA, HIRA, &hex!("41")), DecodeCondition::Never);
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("30 21")), DecodeCondition::RequireSetHighBit);
        assert_eq!(classify_euc_jp(HIRA, KANJI, &hex!("B0 A1")), DecodeCondition::RequireNoConversion);
        assert_eq!(classify_euc_jp(ALNUM, HIRA, &hex!("0E")), DecodeCondition::Never);
    }

    #[test]
    fn test_classify_euc_jp_kanji_limits() {
        // 2バイト目がない
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("30")), DecodeCondition::Never);
        // GLとGRの混在
        assert_eq!(classify_euc_jp(PLANE1, PLANE1, &hex!("30 A1")), DecodeCondition::Never);
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("30 89")), DecodeCondition::Never);
        // 漢字集合の13区
        assert_eq!(classify_euc_jp(KANJI, HIRA, &hex!("2D 21")), DecodeCondition::Never);
        // JIS X 0213の拡張部分
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("7A 21")), DecodeCondition::Never);
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("75 21")), DecodeCondition::Never);
        // JIS X 0208で未割り当て
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("22 2F")), DecodeCondition::Never);
        // NEC特殊文字の重複符号
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("2D 70")), DecodeCondition::Never);
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("2D 7C")), DecodeCondition::Never);
        // 13区でもJIS X 0213と同じ文字
        assert_eq!(classify_euc_jp(PLANE1, HIRA, &hex!("2D 21")), DecodeCondition::RequireSetHighBit);
    }

    #[test]
    fn test_covered_by_euc_jp_matches_plane1() {
        for ku in 0x21..=0x7E_u8 {
            for ten in 0x21..=0x7E_u8 {
                if !covered_by_euc_jp(ku, ten) {
                    continue;
                }
                let code = u16::from_be_bytes([ku, ten]);
                let bytes = [ku | 0x80, ten | 0x80];
                let decoded = decode_strict(EUC_JP, &bytes);
                assert_eq!(decoded.as_deref(), table::jis_kanji_plane1(code), "{:04X}", code);
            }
        }
    }

    #[test]
    fn test_classify_shift_jis() {
        assert_eq!(
            classify_shift_jis(JISX, HIRA, false, &hex!("31")),
            DecodeCondition::RequireSetHighBit
        );
        assert_eq!(
            classify_shift_jis(HIRA, JISX, false, &hex!("B1")),
            DecodeCondition::RequireNoConversion
        );
        assert_eq!(classify_shift_jis(JISX, HIRA, false, &hex!("60")), DecodeCondition::Never);
        assert_eq!(classify_shift_jis(HIRA, HIRA, false, &hex!("31")), DecodeCondition::Never);

        // 全角時は濁点と結合させる
        assert_eq!(classify_shift_jis(JISX, HIRA, false, &hex!("36 5E")), DecodeCondition::Never);
        assert_eq!(
            classify_shift_jis(JISX, HIRA, true, &hex!("36 5E")),
            DecodeCondition::RequireSetHighBit
        );
        // 結合できない組み合わせ
        assert_eq!(
            classify_shift_jis(JISX, HIRA, false, &hex!("31 5E")),
            DecodeCondition::RequireSetHighBit
        );
    }

    #[test]
    fn test_decode_euc_jp_single() {
        let cond = DecodeCondition::RequireNoConversion;
        assert_eq!(text(decode_euc_jp(&hex!("41"), cond, false)), ("Ａ".into(), 1));
        assert_eq!(text(decode_euc_jp(&hex!("41"), cond, true)), ("A".into(), 1));
        assert_eq!(text(decode_euc_jp(&hex!("20"), cond, false)), ("\u{3000}".into(), 1));
        assert_eq!(text(decode_euc_jp(&hex!("5C"), cond, false)), ("\u{FFE5}".into(), 1));
        assert_eq!(text(decode_euc_jp(&hex!("5C"), cond, true)), ("\u{A5}".into(), 1));
        assert_eq!(text(decode_euc_jp(&hex!("7E"), cond, false)), ("～".into(), 1));

        let cond = DecodeCondition::RequireClearHighBit;
        assert_eq!(text(decode_euc_jp(&hex!("C1"), cond, true)), ("A".into(), 1));
        assert_eq!(text(decode_euc_jp(&hex!("A0"), cond, true)), (" ".into(), 1));
    }

    #[test]
    fn test_decode_euc_jp_double() {
        let cond = DecodeCondition::RequireSetHighBit;
        assert_eq!(text(decode_euc_jp(&hex!("30 21"), cond, false)), ("亜".into(), 2));
        assert_eq!(text(decode_euc_jp(&hex!("23 41"), cond, true)), ("A".into(), 2));
        assert_eq!(text(decode_euc_jp(&hex!("25 2C"), cond, true)), ("ｶﾞ".into(), 2));

        let cond = DecodeCondition::RequireNoConversion;
        assert_eq!(text(decode_euc_jp(&hex!("A4 A2"), cond, false)), ("あ".into(), 2));
        assert_eq!(decode_euc_jp(&hex!("A4"), cond, false), ReadResult::Eof);
    }

    #[test]
    fn test_decode_shift_jis() {
        let cond = DecodeCondition::RequireSetHighBit;
        assert_eq!(text(decode_shift_jis(&hex!("31"), cond, false)), ("ア".into(), 1));
        assert_eq!(text(decode_shift_jis(&hex!("31"), cond, true)), ("ｱ".into(), 1));

        let cond = DecodeCondition::RequireNoConversion;
        assert_eq!(text(decode_shift_jis(&hex!("DE"), cond, true)), ("ﾞ".into(), 1));
        assert_eq!(text(decode_shift_jis(&hex!("DE"), cond, false)), ("゛".into(), 1));
    }
}
