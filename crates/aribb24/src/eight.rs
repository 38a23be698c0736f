//! ARIB STD-B24で規定される8単位符号のデコード。
//!
//! 8単位符号はISO/IEC 2022に倣った符号拡張法を用いる文字符号で、
//! G0～G3に指示した文字符号集合をGL・GRに呼び出して図形文字を表す。
//! このモジュールは8単位符号の符号列を、状態を持たない1回の呼び出しでUnicodeの文字列に変換する。
//!
//! # 例
//!
//! ```
//! // LS1 ESC 7C（LS3R） GR:ア イ MSZ GR:ウ エ GL:A B NSZ GL:C D
//! let bytes = b"\x0E\x1B\x7C\xA2\xA4\x89\xA6\xA8\x41\x42\x8A\x43\x44";
//! assert_eq!(aribb24::decode(bytes).unwrap(), "アイｳｴABＣＤ");
//! ```
//!
//! # 文字幅
//!
//! MSZ（中型サイズ）で半角、NSZ（標準サイズ）で全角となり、
//! 全角・半角の両方が存在する文字は現在の文字幅に揃えて出力される。
//!
//! # 途中で終わる符号列
//!
//! 文字や制御符号の途中で入力が終わった場合、そこまでにデコードした文字列を返す。
//! これはエラーではない。

use thiserror::Error;

mod control;
mod decode;
mod graphic;
mod legacy;
pub mod set;
pub mod state;
pub mod str;
pub mod table;

pub use self::legacy::DecodeCondition;
pub use self::set::{Designator, GraphicSet};
pub use self::state::DecodingState;

/// 8単位符号のデコードで発生するエラー。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// [`decode_range`]に与えられた範囲が入力の外にある。
    #[error("range {offset}+{len} is out of bounds of {available} bytes")]
    OutOfRange {
        /// 範囲の開始位置。
        offset: usize,
        /// 範囲の長さ。
        len: usize,
        /// 入力の長さ。
        available: usize,
    },

    /// 2バイト文字の1バイト目と2バイト目がGLとGRにまたがっている。
    #[error("2-byte character at {pos} spans GL and GR")]
    MixedHalves {
        /// デコード対象の先頭からの文字の位置。
        pos: usize,
    },

    /// 漢字集合の文字を具体的な符号表に対応付けられなかった。
    #[error("unresolved kanji at {pos}")]
    UnresolvedKanji {
        /// デコード対象の先頭からの文字の位置。
        pos: usize,
    },
}

/// 8単位符号の`bytes`を初期状態からデコードする。
///
/// 途中で入力が終わった場合はそこまでの文字列を返す。
pub fn decode(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut buf = String::with_capacity(bytes.len() * 2);
    decode::Decoder::new(bytes).decode_to(&mut buf)?;
    Ok(buf)
}

/// `bytes`のうち`offset`から`len`バイトの範囲を初期状態からデコードする。
///
/// 範囲が`bytes`に収まらない場合は[`DecodeError::OutOfRange`]を返す。
/// エラーで報告される位置は`offset`からの相対位置となる。
pub fn decode_range(bytes: &[u8], offset: usize, len: usize) -> Result<String, DecodeError> {
    let range = offset
        .checked_add(len)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(DecodeError::OutOfRange {
            offset,
            len,
            available: bytes.len(),
        })?;
    decode(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use hex_literal::hex;

    #[test]
    fn test_locking_shifts_and_width() {
        let bytes = hex!("0E 1B 7C A2 A4 89 A6 A8 41 42 8A 43 44");
        assert_eq!(decode(&bytes).unwrap(), "アイｳｴABＣＤ");
    }

    #[test]
    fn test_default_state() {
        assert_eq!(decode(b"").unwrap(), "");
        // G0: JIS互換漢字1面、GR: 平仮名
        assert_eq!(decode(&hex!("30 21 A2 A4")).unwrap(), "亜あい");
        assert_eq!(decode(&hex!("0E 41 0F 30 21")).unwrap(), "Ａ亜");
    }

    #[test]
    fn test_kana_sets() {
        const HIRA: &str = concat!(
            "ぁあぃいぅうぇえぉおかがきぎくぐけげこごさざしじすずせぜそぞただちぢっつづてでとどなにぬねのはばぱひびぴふぶぷへべぺほぼぽまみむめもゃやゅゆょよらりるれろゎわゐゑをん",
            "\u{FFFD}\u{FFFD}\u{FFFD}",
            "ゝゞー。「」、・",
        );
        const KATA: &str = concat!(
            "ァアィイゥウェエォオカガキギクグケゲコゴサザシジスズセゼソゾタダチヂッツヅテデトドナニヌネノハバパヒビピフブプヘベペホボポマミムメモャヤュユョヨラリルレロヮワヰヱヲンヴヵヶ",
            "ヽヾー。「」、・",
        );
        // ヮ、ヰ、ヱ、ヵ、ヶ、ヽ、ヾには半角がない
        const HALF_KATA: &str = concat!(
            "ｧｱｨｲｩｳｪｴｫｵｶｶﾞｷｷﾞｸｸﾞｹｹﾞｺｺﾞｻｻﾞｼｼﾞｽｽﾞｾｾﾞｿｿﾞﾀﾀﾞﾁﾁﾞｯﾂﾂﾞﾃﾃﾞﾄﾄﾞﾅﾆﾇﾈﾉﾊﾊﾞﾊﾟﾋﾋﾞﾋﾟﾌﾌﾞﾌﾟﾍﾍﾞﾍﾟﾎﾎﾞﾎﾟﾏﾐﾑﾒﾓｬﾔｭﾕｮﾖﾗﾘﾙﾚﾛヮﾜヰヱｦﾝｳﾞヵヶ",
            "ヽヾｰ｡｢｣､･",
        );

        // G0に片仮名を指示する
        let designate = hex!("1B 28 31");

        // GRの平仮名
        let mut bytes = designate.to_vec();
        bytes.extend(0xA1..=0xFE_u8);
        assert_eq!(decode(&bytes).unwrap(), HIRA);

        // GLの片仮名
        let mut bytes = designate.to_vec();
        bytes.extend(0x21..=0x7E_u8);
        assert_eq!(decode(&bytes).unwrap(), KATA);

        // 半角の片仮名
        let mut bytes = designate.to_vec();
        bytes.push(0x89);
        bytes.extend(0x21..=0x7E_u8);
        assert_eq!(decode(&bytes).unwrap(), HALF_KATA);
    }

    #[test]
    fn test_halfwidth_kana_samples() {
        assert_eq!(decode(&hex!("1B 28 31 AC 2C 89 2C")).unwrap(), "がガｶﾞ");
        // 小書きのワには半角がない
        assert_eq!(decode(&hex!("1B 28 31 EE 6E 89 6E")).unwrap(), "ゎヮヮ");
    }

    #[test]
    fn test_jis_kanji_plane1_width() {
        // 0x2141: ～
        assert_eq!(decode(&hex!("21 41 89 21 41")).unwrap(), "～~");
        assert_eq!(decode(&hex!("1B 24 39 21 41 89 21 41")).unwrap(), "～~");
    }

    #[test]
    fn test_jis_x_kata() {
        // G0にJIS X 0201片仮名
        assert_eq!(decode(&hex!("1B 28 49 31 32 33")).unwrap(), "アイウ");
        assert_eq!(decode(&hex!("89 1B 28 49 31 32 33")).unwrap(), "ｱｲｳ");
        // 濁点・半濁点の結合
        assert_eq!(decode(&hex!("1B 28 49 36 5E 4E 5F 33 5E")).unwrap(), "ガポヴ");
        assert_eq!(decode(&hex!("89 1B 28 49 36 5E 4E 5F")).unwrap(), "ｶﾞﾎﾟ");
        // 結合できない濁点
        assert_eq!(decode(&hex!("1B 28 49 31 5E")).unwrap(), "ア゛");
        // GRからの呼び出し
        assert_eq!(decode(&hex!("1B 2A 49 B6 DE")).unwrap(), "ガ");
    }

    #[test]
    fn test_single_shift() {
        // SS2はGLの次の1文字のみG2（平仮名）を呼び出す
        assert_eq!(decode(&hex!("0E 19 22 41")).unwrap(), "あＡ");
        // SS3
        assert_eq!(decode(&hex!("0E 1D 22 41")).unwrap(), "アＡ");
        // 制御符号を挟んでも解除されない
        assert_eq!(decode(&hex!("0E 19 89 22 41")).unwrap(), "あA");
        // GRの文字では解除されない
        assert_eq!(decode(&hex!("0E 19 A4 22 41")).unwrap(), "いあＡ");
        // 空白で解除される
        assert_eq!(decode(&hex!("0E 19 20 22")).unwrap(), "\u{3000}＂");
    }

    #[test]
    fn test_space() {
        assert_eq!(decode(&hex!("20 89 20 A0 8A A0")).unwrap(), "\u{3000}  \u{3000}");
    }

    #[test]
    fn test_yen_sign() {
        assert_eq!(decode(&hex!("0E 5C 89 5C")).unwrap(), "\u{FFE5}\u{A5}");
    }

    #[test]
    fn test_extra_symbols() {
        // G0に漢字
        assert_eq!(decode(&hex!("1B 24 42 7A 50 30 21")).unwrap(), "[HV]亜");
        assert_eq!(decode(&hex!("1B 24 3B 7A 50 7C 21")).unwrap(), "[HV]→");
        assert_eq!(decode(&hex!("89 1B 24 3B 7A 50")).unwrap(), "[HV]");
    }

    #[test]
    fn test_jis_kanji_plane2() {
        assert_eq!(decode(&hex!("1B 24 3A 21 21")).unwrap(), "𠂉");
        assert_eq!(decode(&hex!("1B 24 3A 22 21")).unwrap(), "\u{FFFD}");
    }

    /// `designate`で指示した区点表の全符号を全角・半角でデコードし、符号表と一致することを確かめる。
    fn assert_plane(designate: &[u8], lookup: fn(u16) -> Option<&'static str>) {
        for ku in 0x21..=0x7E_u8 {
            for ten in 0x21..=0x7E_u8 {
                let code = u16::from_be_bytes([ku, ten]);
                let (full, half) = match lookup(code) {
                    Some(s) => (s, table::to_halfwidth(s).unwrap_or(s)),
                    None => ("\u{FFFD}", "\u{FFFD}"),
                };

                let mut bytes = designate.to_vec();
                bytes.extend_from_slice(&[ku, ten]);
                assert_eq!(decode(&bytes).unwrap(), full, "{:04X}", code);

                let mut bytes = designate.to_vec();
                bytes.extend_from_slice(&[0x89, ku, ten]);
                assert_eq!(decode(&bytes).unwrap(), half, "MSZ {:04X}", code);
            }
        }
    }

    #[test]
    fn test_jis_kanji_plane1_all_codes() {
        // EUC-JPで扱える符号も符号表と同じ文字になる
        assert_plane(&hex!("1B 24 39"), table::jis_kanji_plane1);
        // 13区のうちJIS X 0213にない符号
        assert_eq!(decode(&hex!("2D 70 2D 7C")).unwrap(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_jis_kanji_plane2_all_codes() {
        assert_plane(&hex!("1B 24 3A"), table::jis_kanji_plane2);
    }

    #[test]
    fn test_unresolved_kanji() {
        // 漢字集合の13区
        assert_eq!(
            decode(&hex!("1B 24 42 2D 21")),
            Err(DecodeError::UnresolvedKanji { pos: 3 })
        );
        // JIS X 0208で未割り当て
        assert_eq!(
            decode(&hex!("1B 24 42 22 2F")),
            Err(DecodeError::UnresolvedKanji { pos: 3 })
        );
        // GRから呼び出しても同じ
        assert_eq!(
            decode(&hex!("1B 24 2A 42 A2 A4 AD A1")),
            Err(DecodeError::UnresolvedKanji { pos: 6 })
        );
        // 位置は範囲の先頭から数える
        let bytes = hex!("0E 41 1B 24 42 2D 21");
        assert_eq!(
            decode_range(&bytes, 2, 5),
            Err(DecodeError::UnresolvedKanji { pos: 3 })
        );
    }

    #[test]
    fn test_controls() {
        assert_eq!(decode(&hex!("0E 41 0D 42 0A 43 09 44 08")).unwrap(), "Ａ\nＢ\nＣ\tＤ\u{8}");
        // パラメータを取る制御符号は出力しない
        assert_eq!(
            decode(&hex!("0E 90 20 48 41 9B 35 20 53 42 9D 29 31 20 40 43")).unwrap(),
            "ＡＢＣ"
        );
        assert_eq!(decode(&hex!("0E 95 40 21 41 95 4F 42")).unwrap(), "Ｂ");
    }

    #[test]
    fn test_undefined_sets() {
        // G0にモザイクA
        assert_eq!(decode(&hex!("1B 28 32 21 22")).unwrap(), "\u{FFFD}\u{FFFD}");
        // G0にDRCS-0
        assert_eq!(decode(&hex!("1B 24 28 20 40 21 22")).unwrap(), "\u{FFFD}");
        // G0にDRCS-1
        assert_eq!(decode(&hex!("1B 28 20 41 21 22")).unwrap(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_truncation() {
        // 2バイト文字の途中
        assert_eq!(decode(&hex!("30 21 30")).unwrap(), "亜");
        // GRにJIS互換漢字1面
        assert_eq!(decode(&hex!("1B 24 2A 39 B0 A1 B0")).unwrap(), "亜");
        // エスケープシーケンスの途中
        assert_eq!(decode(&hex!("A2 1B 24")).unwrap(), "あ");
        assert_eq!(decode(&hex!("A2 1B")).unwrap(), "あ");
        // パラメータの途中
        assert_eq!(decode(&hex!("A2 90 20")).unwrap(), "あ");
        assert_eq!(decode(&hex!("A2 9B 35 36")).unwrap(), "あ");
        assert_eq!(decode(&hex!("A2 95 40 21")).unwrap(), "あ");
        // DRCS-0の途中
        assert_eq!(decode(&hex!("1B 24 28 20 40 21")).unwrap(), "");
    }

    #[test]
    fn test_mixed_halves() {
        assert_matches!(
            decode(&hex!("A2 1B 24 3A 21 A1")),
            Err(DecodeError::MixedHalves { pos: 4 })
        );
        assert_matches!(decode(&hex!("1B 24 3B 7A 89")), Err(DecodeError::MixedHalves { pos: 3 }));
        // JIS X 0208の範囲でもGLとGRの混在は既存の変換表では扱わない
        assert_matches!(decode(&hex!("30 A1")), Err(DecodeError::MixedHalves { pos: 0 }));
    }

    #[test]
    fn test_decode_range() {
        let bytes = hex!("0E 41 42 43");
        assert_eq!(decode_range(&bytes, 0, 4).unwrap(), "ＡＢＣ");
        // 範囲ごとに初期状態からデコードする
        assert_eq!(decode_range(&bytes, 1, 2).unwrap(), decode(&bytes[1..3]).unwrap());
        assert_ne!(decode_range(&bytes, 1, 2).unwrap(), "ＡＢ");
        assert_eq!(decode_range(&bytes, 4, 0).unwrap(), "");
        assert_eq!(decode_range(&bytes, 0, 0).unwrap(), "");
        assert_eq!(
            decode_range(&bytes, 3, 2),
            Err(DecodeError::OutOfRange {
                offset: 3,
                len: 2,
                available: 4
            })
        );
        assert_matches!(
            decode_range(&bytes, usize::MAX, 2),
            Err(DecodeError::OutOfRange { .. })
        );
        assert_matches!(decode_range(&bytes, 5, 0), Err(DecodeError::OutOfRange { .. }));
    }
}
