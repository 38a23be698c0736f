//! 8単位符号のデコード。

use std::borrow::Cow;

use super::state::DecodingState;
use super::{control, graphic, legacy, DecodeError};

/// 1バイトの符号が属する領域。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Area {
    /// C0またはC1制御符号（`0x00..=0x1F`、`0x80..=0x9F`）。
    Control,
    /// GL（`0x20..=0x7F`）。
    Gl,
    /// GR（`0xA0..=0xFF`）。
    Gr,
}

impl Area {
    /// `b`の属する領域を返す。
    #[inline]
    pub fn of(b: u8) -> Area {
        if b & 0x60 == 0 {
            Area::Control
        } else if b & 0x80 == 0 {
            Area::Gl
        } else {
            Area::Gr
        }
    }
}

/// 1単位の読み取りで得られた文字列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Text<'a> {
    /// 出力なし。
    None,
    /// 1文字。
    Char(char),
    /// 文字列。
    Str(Cow<'a, str>),
}

impl<'a> Text<'a> {
    /// 代替文字（U+FFFD）。
    pub const REPLACEMENT: Text<'static> = Text::Char(char::REPLACEMENT_CHARACTER);

    /// `buf`の末尾に文字列を追加する。
    #[inline]
    pub fn push_to(&self, buf: &mut String) {
        match self {
            Text::None => {}
            Text::Char(c) => buf.push(*c),
            Text::Str(s) => buf.push_str(s),
        }
    }
}

impl From<&'static str> for Text<'_> {
    #[inline]
    fn from(s: &'static str) -> Self {
        Text::Str(Cow::Borrowed(s))
    }
}

/// 1単位の読み取り結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ReadResult<'a> {
    /// `len`バイトを消費して`text`を得た。
    Unit {
        /// 得られた文字列。
        text: Text<'a>,
        /// 消費したバイト数。
        len: usize,
    },

    /// 単位の途中で入力が終わった。
    Eof,
}

impl<'a> ReadResult<'a> {
    /// `len`バイトを消費して`text`を得たことを表す。
    #[inline]
    pub fn emit(text: impl Into<Text<'a>>, len: usize) -> ReadResult<'a> {
        ReadResult::Unit {
            text: text.into(),
            len,
        }
    }

    /// 出力なしで`len`バイトを消費したことを表す。
    #[inline]
    pub fn skip(len: usize) -> ReadResult<'a> {
        ReadResult::Unit {
            text: Text::None,
            len,
        }
    }
}

impl From<char> for Text<'_> {
    #[inline]
    fn from(c: char) -> Self {
        Text::Char(c)
    }
}

/// ARIB STD-B24の8単位符号をデコードする。
#[derive(Debug, Clone)]
pub(super) struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: DecodingState,
}

impl<'a> Decoder<'a> {
    /// 初期状態から`bytes`をデコードする`Decoder`を生成する。
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Decoder<'a> {
        Decoder {
            bytes,
            pos: 0,
            state: DecodingState::new(),
        }
    }

    /// 現在位置から1単位を読み取る。
    fn next_unit(&mut self) -> Result<ReadResult<'a>, DecodeError> {
        let all = self.bytes;
        let bytes = &all[self.pos..];
        let Some(&c) = bytes.first() else {
            return Ok(ReadResult::Eof);
        };

        let gl_set = self.state.gl_set();
        let gr_set = self.state.gr_set();
        let halfwidth = self.state.is_halfwidth();

        let cond = legacy::classify_euc_jp(gl_set, gr_set, bytes);
        if cond.is_eligible() {
            return Ok(legacy::decode_euc_jp(bytes, cond, halfwidth));
        }
        let cond = legacy::classify_shift_jis(gl_set, gr_set, halfwidth, bytes);
        if cond.is_eligible() {
            return Ok(legacy::decode_shift_jis(bytes, cond, halfwidth));
        }

        match Area::of(c) {
            Area::Gl => graphic::read(gl_set, bytes, self.pos, halfwidth),
            Area::Gr => graphic::read(gr_set, bytes, self.pos, halfwidth),
            Area::Control => Ok(control::interpret(&mut self.state, bytes)),
        }
    }

    /// 入力の終わりまでデコードし、結果を`buf`に追加する。
    ///
    /// 単位の途中で入力が終わった場合はそこまでの結果で終了する。
    pub fn decode_to(mut self, buf: &mut String) -> Result<(), DecodeError> {
        while let Some(&c) = self.bytes.get(self.pos) {
            // シングルシフトはGLの1単位にのみ作用する
            let single_shifted = self.state.single_shift().is_some() && Area::of(c) == Area::Gl;

            match self.next_unit()? {
                ReadResult::Unit { text, len } => {
                    debug_assert!(len > 0);
                    text.push_to(buf);
                    if single_shifted {
                        self.state.clear_single_shift();
                    }
                    self.pos += len;
                }
                ReadResult::Eof => {
                    log::debug!(
                        "truncated at {} ({} bytes left)",
                        self.pos,
                        self.bytes.len() - self.pos
                    );
                    break;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert_eq!(Area::of(0x00), Area::Control);
        assert_eq!(Area::of(0x1F), Area::Control);
        assert_eq!(Area::of(0x20), Area::Gl);
        assert_eq!(Area::of(0x7F), Area::Gl);
        assert_eq!(Area::of(0x80), Area::Control);
        assert_eq!(Area::of(0x9F), Area::Control);
        assert_eq!(Area::of(0xA0), Area::Gr);
        assert_eq!(Area::of(0xFF), Area::Gr);
    }

    #[test]
    fn test_text_push_to() {
        let mut buf = String::new();
        Text::None.push_to(&mut buf);
        Text::Char('あ').push_to(&mut buf);
        Text::from("[HV]").push_to(&mut buf);
        Text::REPLACEMENT.push_to(&mut buf);
        assert_eq!(buf, "あ[HV]\u{FFFD}");
    }
}
