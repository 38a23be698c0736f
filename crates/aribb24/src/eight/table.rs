//! 文字符号集合ごとの符号表と、全角・半角の対応表。
//!
//! いずれもプロセス中で不変であり、複数のスレッドから同時に参照してよい。

mod extra_symbols;
mod jis_kanji_plane1;
mod jis_kanji_plane2;
mod width;

use std::sync::OnceLock;

use fxhash::FxHashMap;

use self::extra_symbols::EXTRA_SYMBOLS;
use self::jis_kanji_plane1::JIS_KANJI_PLANE1;
use self::jis_kanji_plane2::JIS_KANJI_PLANE2;
use self::width::WIDTH_PAIRS;

/// 英数集合（全角）。0x5Cは円記号、0x7Eは上線。
#[rustfmt::skip]
static ALNUM: [&str; 94] = [
         "！", "＂", "＃", "＄", "％", "＆", "＇", "（", "）", "＊", "＋", "，", "－", "．", "／",
    "０", "１", "２", "３", "４", "５", "６", "７", "８", "９", "：", "；", "＜", "＝", "＞", "？",
    "＠", "Ａ", "Ｂ", "Ｃ", "Ｄ", "Ｅ", "Ｆ", "Ｇ", "Ｈ", "Ｉ", "Ｊ", "Ｋ", "Ｌ", "Ｍ", "Ｎ", "Ｏ",
    "Ｐ", "Ｑ", "Ｒ", "Ｓ", "Ｔ", "Ｕ", "Ｖ", "Ｗ", "Ｘ", "Ｙ", "Ｚ", "［", "￥", "］", "＾", "＿",
    "｀", "ａ", "ｂ", "ｃ", "ｄ", "ｅ", "ｆ", "ｇ", "ｈ", "ｉ", "ｊ", "ｋ", "ｌ", "ｍ", "ｎ", "ｏ",
    "ｐ", "ｑ", "ｒ", "ｓ", "ｔ", "ｕ", "ｖ", "ｗ", "ｘ", "ｙ", "ｚ", "｛", "｜", "｝", "￣",
];

/// 平仮名集合。0x74～0x76は未割り当て。
#[rustfmt::skip]
static HIRA: [&str; 94] = [
         "ぁ", "あ", "ぃ", "い", "ぅ", "う", "ぇ", "え", "ぉ", "お", "か", "が", "き", "ぎ", "く",
    "ぐ", "け", "げ", "こ", "ご", "さ", "ざ", "し", "じ", "す", "ず", "せ", "ぜ", "そ", "ぞ", "た",
    "だ", "ち", "ぢ", "っ", "つ", "づ", "て", "で", "と", "ど", "な", "に", "ぬ", "ね", "の", "は",
    "ば", "ぱ", "ひ", "び", "ぴ", "ふ", "ぶ", "ぷ", "へ", "べ", "ぺ", "ほ", "ぼ", "ぽ", "ま", "み",
    "む", "め", "も", "ゃ", "や", "ゅ", "ゆ", "ょ", "よ", "ら", "り", "る", "れ", "ろ", "ゎ", "わ",
    "ゐ", "ゑ", "を", "ん", "",   "",   "",   "ゝ", "ゞ", "ー", "。", "「", "」", "、", "・",
];

/// 片仮名集合。
#[rustfmt::skip]
static KATA: [&str; 94] = [
         "ァ", "ア", "ィ", "イ", "ゥ", "ウ", "ェ", "エ", "ォ", "オ", "カ", "ガ", "キ", "ギ", "ク",
    "グ", "ケ", "ゲ", "コ", "ゴ", "サ", "ザ", "シ", "ジ", "ス", "ズ", "セ", "ゼ", "ソ", "ゾ", "タ",
    "ダ", "チ", "ヂ", "ッ", "ツ", "ヅ", "テ", "デ", "ト", "ド", "ナ", "ニ", "ヌ", "ネ", "ノ", "ハ",
    "バ", "パ", "ヒ", "ビ", "ピ", "フ", "ブ", "プ", "ヘ", "ベ", "ペ", "ホ", "ボ", "ポ", "マ", "ミ",
    "ム", "メ", "モ", "ャ", "ヤ", "ュ", "ユ", "ョ", "ヨ", "ラ", "リ", "ル", "レ", "ロ", "ヮ", "ワ",
    "ヰ", "ヱ", "ヲ", "ン", "ヴ", "ヵ", "ヶ", "ヽ", "ヾ", "ー", "。", "「", "」", "、", "・",
];

/// JIS X 0201片仮名集合（全角）。0x60以降は未割り当て。
#[rustfmt::skip]
static JIS_X_KATA: [&str; 63] = [
         "。", "「", "」", "、", "・", "ヲ", "ァ", "ィ", "ゥ", "ェ", "ォ", "ャ", "ュ", "ョ", "ッ",
    "ー", "ア", "イ", "ウ", "エ", "オ", "カ", "キ", "ク", "ケ", "コ", "サ", "シ", "ス", "セ", "ソ",
    "タ", "チ", "ツ", "テ", "ト", "ナ", "ニ", "ヌ", "ネ", "ノ", "ハ", "ヒ", "フ", "ヘ", "ホ", "マ",
    "ミ", "ム", "メ", "モ", "ヤ", "ユ", "ヨ", "ラ", "リ", "ル", "レ", "ロ", "ワ", "ン", "゛", "゜",
];

/// JIS X 0201片仮名のカ～ト（0x36..=0x44）に濁点を付けた文字。
#[rustfmt::skip]
static JIS_X_KATA_DAKUTEN_KA: [&str; 15] = [
    "ガ", "ギ", "グ", "ゲ", "ゴ", "ザ", "ジ", "ズ", "ゼ", "ゾ", "ダ", "ヂ", "ヅ", "デ", "ド",
];

/// JIS X 0201片仮名のハ～ホ（0x4A..=0x4E）に濁点を付けた文字。
static JIS_X_KATA_DAKUTEN_HA: [&str; 5] = ["バ", "ビ", "ブ", "ベ", "ボ"];

/// JIS X 0201片仮名のハ～ホ（0x4A..=0x4E）に半濁点を付けた文字。
static JIS_X_KATA_HANDAKUTEN_HA: [&str; 5] = ["パ", "ピ", "プ", "ペ", "ポ"];

/// 0x21から始まる表から`code`の文字列を引く。空文字列は未割り当て。
#[inline]
fn get(table: &'static [&'static str], code: u8) -> Option<&'static str> {
    let s = *table.get(usize::from(code.checked_sub(0x21)?))?;
    (!s.is_empty()).then_some(s)
}

/// 区点の表から`code`の文字列を引く。
#[inline]
fn get_double(table: &'static [[&'static str; 94]; 94], code: u16) -> Option<&'static str> {
    let [ku, ten] = code.to_be_bytes();
    let row = table.get(usize::from(ku.checked_sub(0x21)?))?;
    get(row, ten)
}

/// 英数集合の`code`に対応する文字列を返す。
pub fn alnum(code: u8) -> Option<&'static str> {
    get(&ALNUM, code)
}

/// 平仮名集合の`code`に対応する文字列を返す。
pub fn hira(code: u8) -> Option<&'static str> {
    get(&HIRA, code)
}

/// 片仮名集合の`code`に対応する文字列を返す。
pub fn kata(code: u8) -> Option<&'static str> {
    get(&KATA, code)
}

/// JIS X 0201片仮名集合の`code`に対応する全角の文字列を返す。
pub fn jis_x_kata(code: u8) -> Option<&'static str> {
    get(&JIS_X_KATA, code)
}

/// JIS X 0201片仮名の`base`に濁点（0x5E）または半濁点（0x5F）の`mark`を結合した文字を返す。
///
/// 結合できない組み合わせの場合は`None`を返す。
pub fn jis_x_kata_voiced(base: u8, mark: u8) -> Option<&'static str> {
    match (base, mark) {
        // ウ
        (0x33, 0x5E) => Some("ヴ"),
        (0x36..=0x44, 0x5E) => Some(JIS_X_KATA_DAKUTEN_KA[usize::from(base - 0x36)]),
        (0x4A..=0x4E, 0x5E) => Some(JIS_X_KATA_DAKUTEN_HA[usize::from(base - 0x4A)]),
        (0x4A..=0x4E, 0x5F) => Some(JIS_X_KATA_HANDAKUTEN_HA[usize::from(base - 0x4A)]),
        _ => None,
    }
}

/// JIS互換漢字1面の区点`code`に対応する文字列を返す。
pub fn jis_kanji_plane1(code: u16) -> Option<&'static str> {
    get_double(&JIS_KANJI_PLANE1, code)
}

/// JIS互換漢字2面の区点`code`に対応する文字列を返す。
pub fn jis_kanji_plane2(code: u16) -> Option<&'static str> {
    get_double(&JIS_KANJI_PLANE2, code)
}

/// 追加記号集合の`code`に対応する文字列を返す。
pub fn extra_symbols(code: u16) -> Option<&'static str> {
    EXTRA_SYMBOLS
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| EXTRA_SYMBOLS[i].1)
}

struct WidthMaps {
    full_to_half: FxHashMap<&'static str, &'static str>,
    half_to_full: FxHashMap<&'static str, &'static str>,
}

fn width_maps() -> &'static WidthMaps {
    static MAPS: OnceLock<WidthMaps> = OnceLock::new();

    MAPS.get_or_init(|| {
        log::trace!("building width maps: {} pairs", WIDTH_PAIRS.len());
        WidthMaps {
            full_to_half: WIDTH_PAIRS.iter().copied().collect(),
            half_to_full: WIDTH_PAIRS.iter().map(|&(full, half)| (half, full)).collect(),
        }
    })
}

/// 全角の`s`に対応する半角の文字列を返す。
pub fn to_halfwidth(s: &str) -> Option<&'static str> {
    width_maps().full_to_half.get(s).copied()
}

/// 半角の`s`に対応する全角の文字列を返す。
pub fn to_fullwidth(s: &str) -> Option<&'static str> {
    width_maps().half_to_full.get(s).copied()
}

/// 全角と半角の対応を`(全角, 半角)`の組で返す。
pub fn width_pairs() -> &'static [(&'static str, &'static str)] {
    &WIDTH_PAIRS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_maps_are_bijective() {
        for &(full, half) in width_pairs() {
            assert_eq!(to_halfwidth(full), Some(half), "{full}");
            assert_eq!(to_fullwidth(half), Some(full), "{half}");
        }
        assert_eq!(width_maps().full_to_half.len(), width_pairs().len());
        assert_eq!(width_maps().half_to_full.len(), width_pairs().len());
    }

    #[test]
    fn test_width_maps() {
        assert_eq!(to_halfwidth("Ａ"), Some("A"));
        assert_eq!(to_halfwidth("～"), Some("~"));
        assert_eq!(to_halfwidth("ガ"), Some("ｶﾞ"));
        assert_eq!(to_halfwidth("ポ"), Some("ﾎﾟ"));
        assert_eq!(to_halfwidth("ヮ"), None);
        assert_eq!(to_halfwidth("あ"), None);
        assert_eq!(to_fullwidth("ｳﾞ"), Some("ヴ"));
        assert_eq!(to_fullwidth("¥"), Some("￥"));
    }

    #[test]
    fn test_single_byte_tables() {
        assert_eq!(alnum(0x41), Some("Ａ"));
        assert_eq!(alnum(0x5C), Some("￥"));
        assert_eq!(alnum(0x20), None);
        assert_eq!(alnum(0x7F), None);
        assert_eq!(hira(0x22), Some("あ"));
        assert_eq!(hira(0x74), None);
        assert_eq!(kata(0x74), Some("ヴ"));
        assert_eq!(kata(0x7E), Some("・"));
        assert_eq!(jis_x_kata(0x31), Some("ア"));
        assert_eq!(jis_x_kata(0x5F), Some("゜"));
        assert_eq!(jis_x_kata(0x60), None);
    }

    #[test]
    fn test_jis_x_kata_voiced() {
        assert_eq!(jis_x_kata_voiced(0x36, 0x5E), Some("ガ"));
        assert_eq!(jis_x_kata_voiced(0x44, 0x5E), Some("ド"));
        assert_eq!(jis_x_kata_voiced(0x4E, 0x5F), Some("ポ"));
        assert_eq!(jis_x_kata_voiced(0x33, 0x5E), Some("ヴ"));
        assert_eq!(jis_x_kata_voiced(0x31, 0x5E), None);
        assert_eq!(jis_x_kata_voiced(0x36, 0x5F), None);
        assert_eq!(jis_x_kata_voiced(0x36, 0x41), None);
    }

    #[test]
    fn test_double_byte_tables() {
        assert_eq!(jis_kanji_plane1(0x2422), Some("あ"));
        assert_eq!(jis_kanji_plane1(0x3021), Some("亜"));
        // JIS X 0208にない文字
        assert_eq!(jis_kanji_plane1(0x2D21), Some("①"));
        assert_eq!(jis_kanji_plane1(0x2020), None);
        assert_eq!(jis_kanji_plane1(0x7F21), None);
        assert_eq!(jis_kanji_plane2(0x2121), Some("𠂉"));
        assert_eq!(jis_kanji_plane2(0x2221), None);
        assert_eq!(extra_symbols(0x7A50), Some("[HV]"));
        assert_eq!(extra_symbols(0x7C21), Some("→"));
        assert_eq!(extra_symbols(0x7521), Some("㐂"));
        assert_eq!(extra_symbols(0x7B21), None);
    }
}
