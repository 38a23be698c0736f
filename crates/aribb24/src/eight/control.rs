//! 制御符号の解釈。

use super::decode::ReadResult;
use super::set::{Designator, GraphicSet};
use super::state::DecodingState;

/// 文字サイズに応じた空白を返す。
#[inline]
pub(super) fn space(halfwidth: bool) -> char {
    if halfwidth {
        ' '
    } else {
        '\u{3000}'
    }
}

/// `n`バイトの制御符号（パラメータを含む）を読み飛ばす。
#[inline]
fn skip_params<'a>(bytes: &[u8], n: usize) -> ReadResult<'a> {
    if bytes.len() < n {
        ReadResult::Eof
    } else {
        ReadResult::skip(n)
    }
}

/// `bytes`の先頭にある制御符号を解釈し、`state`に反映する。
pub(super) fn interpret<'a>(state: &mut DecodingState, bytes: &[u8]) -> ReadResult<'a> {
    let Some((&c, rest)) = bytes.split_first() else {
        return ReadResult::Eof;
    };

    match c {
        // APB
        0x08 => ReadResult::emit('\u{8}', 1),
        // APF
        0x09 => ReadResult::emit('\t', 1),
        // APD、APR
        0x0A | 0x0D => ReadResult::emit('\n', 1),

        // LS1
        0x0E => {
            state.invoke_gl(Designator::G1);
            ReadResult::skip(1)
        }
        // LS0
        0x0F => {
            state.invoke_gl(Designator::G0);
            ReadResult::skip(1)
        }
        // SS2
        0x19 => {
            state.arm_single_shift(Designator::G2);
            ReadResult::skip(1)
        }
        // SS3
        0x1D => {
            state.arm_single_shift(Designator::G3);
            ReadResult::skip(1)
        }
        // ESC
        0x1B => read_esc(state, rest),

        // PAPF（パラメータ1つ）
        0x16 => skip_params(bytes, 2),
        // APS（パラメータ2つ）
        0x1C => skip_params(bytes, 3),

        // SP
        0x20 | 0xA0 => ReadResult::emit(space(state.is_halfwidth()), 1),

        // MSZ
        0x89 => {
            state.set_halfwidth(true);
            ReadResult::skip(1)
        }
        // NSZ
        0x8A => {
            state.set_halfwidth(false);
            ReadResult::skip(1)
        }

        // SZX/FLC/POL/WMM/HLC/RPC（パラメータ1つ）
        0x8B | 0x91 | 0x93 | 0x94 | 0x97 | 0x98 => skip_params(bytes, 2),

        // COL/CDC
        0x90 | 0x92 => match *rest {
            [] => ReadResult::Eof,
            [0x20, ..] => skip_params(bytes, 3),
            [_, ..] => ReadResult::skip(2),
        },

        // MACRO
        0x95 => read_macro(rest),
        // CSI
        0x9B => read_csi(rest),
        // TIME
        0x9D => read_time(rest),

        _ => {
            log::trace!("ignored control code: {:02X}", c);
            ReadResult::skip(1)
        }
    }
}

/// ESCに続く符号を読み取る。戻り値の長さはESCを含む。
fn read_esc<'a>(state: &mut DecodingState, bytes: &[u8]) -> ReadResult<'a> {
    let len = match *bytes {
        [] => return ReadResult::Eof,

        // 符号の呼び出し

        // LS2
        [0x6E, ..] => {
            state.invoke_gl(Designator::G2);
            1
        }
        // LS3
        [0x6F, ..] => {
            state.invoke_gl(Designator::G3);
            1
        }
        // LS1R
        [0x7E, ..] => {
            state.invoke_gr(Designator::G1);
            1
        }
        // LS2R
        [0x7D, ..] => {
            state.invoke_gr(Designator::G2);
            1
        }
        // LS3R
        [0x7C, ..] => {
            state.invoke_gr(Designator::G3);
            1
        }

        // 符号の指示

        // 2バイトDRCS
        [0x24, 0x28, _, _, ..] => {
            state.designate(Designator::G0, GraphicSet::Drcs(0));
            4
        }
        [0x24, g @ 0x29..=0x2B, 0x20, _, ..] => {
            state.designate(Designator::from_low_bits(g), GraphicSet::Drcs(0));
            4
        }
        // 2バイトGセット
        [0x24, g @ 0x29..=0x2B, f, ..] if f != 0x20 => {
            state.designate(Designator::from_low_bits(g), GraphicSet::from_double_final(f));
            3
        }
        [0x24, f, ..] if !(0x28..=0x2B).contains(&f) => {
            state.designate(Designator::G0, GraphicSet::from_double_final(f));
            2
        }
        [0x24, ..] => return ReadResult::Eof,

        // 1バイトDRCS
        [g @ 0x28..=0x2B, 0x20, f, ..] => {
            state.designate(Designator::from_low_bits(g), GraphicSet::from_drcs_final(f));
            3
        }
        // 1バイトGセット
        [g @ 0x28..=0x2B, f, ..] if f != 0x20 => {
            state.designate(Designator::from_low_bits(g), GraphicSet::from_final(f));
            2
        }
        [0x28..=0x2B, ..] => return ReadResult::Eof,

        // 変な値は無視
        [b, ..] => {
            log::trace!("unknown escape sequence: ESC {:02X}", b);
            1
        }
    };

    ReadResult::skip(1 + len)
}

/// MACROに続く符号を読み飛ばす。
///
/// マクロ定義は本体の符号をパラメータごと読み進め、終端（MACRO 0x4F）までを読み飛ばす。
/// マクロは実行しない。
fn read_macro<'a>(bytes: &[u8]) -> ReadResult<'a> {
    let body = match *bytes {
        [] | [0x40 | 0x41] => return ReadResult::Eof,
        // マクロ定義の開始（0x40：定義のみ、0x41：定義して実行）とマクロ符号
        [0x40 | 0x41, 0x21..=0x7E, ref body @ ..] => body,
        // 不正なマクロ符号
        [0x40 | 0x41, _, ..] => return ReadResult::skip(3),
        // マクロ定義の終了または未知
        [_, ..] => return ReadResult::skip(2),
    };

    // 本体の制御符号は現在の状態に作用させない
    let mut scratch = DecodingState::new();
    let mut i = 0;
    loop {
        let Some(rest) = body.get(i..) else {
            return ReadResult::Eof;
        };
        let len = match *rest {
            [] | [0x95] => return ReadResult::Eof,

            // MACRO -> マクロ終了
            // MACRO -> マクロ開始：マクロはネストできないので定義を打ち切る
            [0x95, 0x4F | 0x40 | 0x41, ..] => return ReadResult::skip(1 + 2 + i + 2),
            // MACRO -> 不明
            [0x95, _, ..] => 2,

            // GL/GR：2バイト文字の2バイト目は次のループで読み飛ばす
            [0x21..=0x7E | 0xA1..=0xFE, ..] => 1,

            _ => match interpret(&mut scratch, rest) {
                ReadResult::Unit { len, .. } => len,
                ReadResult::Eof => return ReadResult::Eof,
            },
        };
        i += len;
    }
}

/// CSIに続く符号を読み飛ばす。
fn read_csi<'a>(bytes: &[u8]) -> ReadResult<'a> {
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            // 中間文字の後に終端文字
            0x20 => {
                return if i + 1 < bytes.len() {
                    ReadResult::skip(1 + i + 2)
                } else {
                    ReadResult::Eof
                };
            }
            // PLD/PLU/SCS（パラメータなし）
            0x5B | 0x5C | 0x6F => return ReadResult::skip(1 + i + 1),
            _ => {}
        }
    }

    ReadResult::Eof
}

/// TIMEに続く符号を読み飛ばす。
fn read_time<'a>(bytes: &[u8]) -> ReadResult<'a> {
    match *bytes {
        [] => ReadResult::Eof,
        [0x20 | 0x28, _, ..] => ReadResult::skip(3),
        [0x20 | 0x28] => ReadResult::Eof,
        [0x29, ref rest @ ..] => match memchr::memchr(0x20, rest) {
            // 中間文字の後に終端文字
            Some(i) if i + 1 < rest.len() => ReadResult::skip(1 + 1 + i + 2),
            _ => ReadResult::Eof,
        },
        [_, ..] => ReadResult::skip(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eight::decode::Text;
    use assert_matches::assert_matches;
    use hex_literal::hex;

    fn run(bytes: &[u8]) -> (DecodingState, ReadResult<'static>) {
        let mut state = DecodingState::new();
        let r = interpret(&mut state, bytes);
        (state, r)
    }

    fn skipped(bytes: &[u8]) -> usize {
        match run(bytes).1 {
            ReadResult::Unit {
                text: Text::None,
                len,
            } => len,
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_emitting_controls() {
        assert_eq!(run(&hex!("08")).1, ReadResult::emit('\u{8}', 1));
        assert_eq!(run(&hex!("09")).1, ReadResult::emit('\t', 1));
        assert_eq!(run(&hex!("0A")).1, ReadResult::emit('\n', 1));
        assert_eq!(run(&hex!("0D")).1, ReadResult::emit('\n', 1));
        assert_eq!(run(&hex!("20")).1, ReadResult::emit('\u{3000}', 1));

        let mut state = DecodingState::new();
        state.set_halfwidth(true);
        assert_eq!(interpret(&mut state, &hex!("A0")), ReadResult::emit(' ', 1));
    }

    #[test]
    fn test_shifts() {
        let (state, _) = run(&hex!("0E"));
        assert_eq!(state.gl_set(), GraphicSet::Alnum);

        let mut state = DecodingState::new();
        interpret(&mut state, &hex!("0E"));
        interpret(&mut state, &hex!("0F"));
        assert_eq!(state.gl_set(), GraphicSet::JisKanjiPlane1);

        let (state, _) = run(&hex!("19"));
        assert_eq!(state.single_shift(), Some(Designator::G2));
        let (state, _) = run(&hex!("1D"));
        assert_eq!(state.single_shift(), Some(Designator::G3));
    }

    #[test]
    fn test_size_controls() {
        let mut state = DecodingState::new();
        assert_eq!(interpret(&mut state, &hex!("89")), ReadResult::skip(1));
        assert!(state.is_halfwidth());
        assert_eq!(interpret(&mut state, &hex!("8A")), ReadResult::skip(1));
        assert!(!state.is_halfwidth());

        // SSZは文字幅を変えない
        assert_eq!(interpret(&mut state, &hex!("88")), ReadResult::skip(1));
        assert!(!state.is_halfwidth());
        assert_eq!(interpret(&mut state, &hex!("8B 60")), ReadResult::skip(2));
        assert!(!state.is_halfwidth());
    }

    #[test]
    fn test_invocations() {
        let (state, r) = run(&hex!("1B 6E"));
        assert_eq!(r, ReadResult::skip(2));
        assert_eq!(state.gl_set(), GraphicSet::Hira);

        let (state, _) = run(&hex!("1B 6F"));
        assert_eq!(state.gl_set(), GraphicSet::Kata);
        let (state, _) = run(&hex!("1B 7E"));
        assert_eq!(state.gr_set(), GraphicSet::Alnum);
        let (state, _) = run(&hex!("1B 7D"));
        assert_eq!(state.gr_set(), GraphicSet::Hira);
        let (state, _) = run(&hex!("1B 7C"));
        assert_eq!(state.gr_set(), GraphicSet::Kata);
    }

    #[test]
    fn test_designations() {
        let (state, r) = run(&hex!("1B 29 49"));
        assert_eq!(r, ReadResult::skip(3));
        assert_eq!(state.graphic_set(Designator::G1), GraphicSet::JisXKata);

        let (state, r) = run(&hex!("1B 24 42"));
        assert_eq!(r, ReadResult::skip(3));
        assert_eq!(state.graphic_set(Designator::G0), GraphicSet::Kanji);

        let (state, r) = run(&hex!("1B 24 2B 3B"));
        assert_eq!(r, ReadResult::skip(4));
        assert_eq!(state.graphic_set(Designator::G3), GraphicSet::ExtraSymbols);

        let (state, r) = run(&hex!("1B 2A 20 41"));
        assert_eq!(r, ReadResult::skip(4));
        assert_eq!(state.graphic_set(Designator::G2), GraphicSet::Drcs(1));

        let (state, r) = run(&hex!("1B 2B 20 70"));
        assert_eq!(r, ReadResult::skip(4));
        assert_eq!(state.graphic_set(Designator::G3), GraphicSet::Macro);

        let (state, r) = run(&hex!("1B 24 28 20 40"));
        assert_eq!(r, ReadResult::skip(5));
        assert_eq!(state.graphic_set(Designator::G0), GraphicSet::Drcs(0));

        let (state, r) = run(&hex!("1B 24 29 20 40"));
        assert_eq!(r, ReadResult::skip(5));
        assert_eq!(state.graphic_set(Designator::G1), GraphicSet::Drcs(0));

        let (state, r) = run(&hex!("1B 28 7A"));
        assert_eq!(r, ReadResult::skip(3));
        assert_eq!(
            state.graphic_set(Designator::G0),
            GraphicSet::Unknown {
                final_byte: 0x7A,
                double: false
            }
        );
    }

    #[test]
    fn test_unknown_escape_is_absorbed() {
        let (state, r) = run(&hex!("1B 40 41"));
        assert_eq!(r, ReadResult::skip(2));
        assert_eq!(state, DecodingState::new());
    }

    #[test]
    fn test_truncated_escapes() {
        for bytes in [
            &hex!("1B")[..],
            &hex!("1B 24")[..],
            &hex!("1B 24 29")[..],
            &hex!("1B 24 29 20")[..],
            &hex!("1B 24 28 20")[..],
            &hex!("1B 28")[..],
            &hex!("1B 2B 20")[..],
        ] {
            let (state, r) = run(bytes);
            assert_matches!(r, ReadResult::Eof, "{:02X?}", bytes);
            assert_eq!(state, DecodingState::new());
        }
    }

    #[test]
    fn test_parameters() {
        assert_eq!(skipped(&hex!("16 41")), 2);
        assert_eq!(skipped(&hex!("1C 41 42")), 3);
        assert_eq!(skipped(&hex!("91 40")), 2);
        assert_eq!(skipped(&hex!("90 48")), 2);
        assert_eq!(skipped(&hex!("90 20 48")), 3);
        assert_eq!(skipped(&hex!("92 20 40")), 3);
        assert_eq!(skipped(&hex!("80")), 1);
        assert_eq!(skipped(&hex!("07")), 1);

        assert_matches!(run(&hex!("16")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("1C 41")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("90 20")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("8B")).1, ReadResult::Eof);
    }

    #[test]
    fn test_csi() {
        // SWF: CSI 5 SP S
        assert_eq!(skipped(&hex!("9B 35 20 53 41")), 4);
        // SDF: CSI 960;540 SP V
        assert_eq!(skipped(&hex!("9B 39 36 30 3B 35 34 30 20 56")), 10);
        // PLD
        assert_eq!(skipped(&hex!("9B 5B 41")), 2);

        assert_matches!(run(&hex!("9B 35 20")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("9B 35 36")).1, ReadResult::Eof);
    }

    #[test]
    fn test_time() {
        assert_eq!(skipped(&hex!("9D 20 41")), 3);
        assert_eq!(skipped(&hex!("9D 28 41")), 3);
        assert_eq!(skipped(&hex!("9D 29 31 32 20 40")), 6);
        assert_eq!(skipped(&hex!("9D 30")), 2);

        assert_matches!(run(&hex!("9D")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("9D 20")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("9D 29 31 20")).1, ReadResult::Eof);
    }

    #[test]
    fn test_macro() {
        assert_eq!(skipped(&hex!("95 40 21 1B 28 4A 95 4F 41")), 8);
        assert_eq!(skipped(&hex!("95 4F")), 2);
        // 不正なマクロ符号
        assert_eq!(skipped(&hex!("95 40 10 41")), 3);
        assert_matches!(run(&hex!("95")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("95 40")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("95 41 21 41 42")).1, ReadResult::Eof);
        assert_matches!(run(&hex!("95 41 21 41 95")).1, ReadResult::Eof);
    }

    #[test]
    fn test_macro_body() {
        // パラメータ中の0x95 0x4Fでは終了しない
        assert_eq!(skipped(&hex!("95 40 21 9D 29 95 4F 20 40 95 4F 41")), 11);
        assert_eq!(skipped(&hex!("95 40 21 90 20 95 4F 41 95 4F")), 10);
        // 本体の符号は状態に作用しない
        let (state, r) = run(&hex!("95 41 21 0E 1B 7C 89 95 4F"));
        assert_eq!(r, ReadResult::skip(9));
        assert_eq!(state, DecodingState::new());
        // 入れ子のマクロ定義で打ち切る
        assert_eq!(skipped(&hex!("95 40 21 41 95 40 22 42 95 4F")), 6);
        // 途中で終わる制御符号
        assert_matches!(run(&hex!("95 40 21 9B 35 20")).1, ReadResult::Eof);
    }
}
