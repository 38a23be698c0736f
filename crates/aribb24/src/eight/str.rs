//! 8単位符号の文字列表現。

use std::borrow::Borrow;
use std::fmt;
use std::ops;

use super::DecodeError;

/// 借用された8単位符号を表す型。
///
/// `AribStr`と[`AribString`]は、<code>&[str]</code>と[`String`]の関係と相似しており、
/// 前者は借用された参照、後者は所有権を持つ符号列である。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AribStr([u8]);

impl AribStr {
    /// バイト列から`AribStr`を生成する。
    #[must_use]
    #[inline]
    pub const fn from_bytes(bytes: &[u8]) -> &AribStr {
        // Safety: AribStrは[u8]と同じ表現
        unsafe { &*(bytes as *const [u8] as *const AribStr) }
    }

    /// 符号列のバイト数を返す。
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// 符号列が空であるかどうかを返す。
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 符号列をバイトスライスとして返す。
    #[must_use]
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 符号列全体を初期状態からデコードする。
    ///
    /// 詳細は[`decode()`][super::decode()]を参照。
    #[inline]
    pub fn decode(&self) -> Result<String, DecodeError> {
        super::decode(self.as_bytes())
    }

    /// 符号列のうち`offset`から`len`バイトの範囲を初期状態からデコードする。
    ///
    /// 詳細は[`decode_range()`][super::decode_range()]を参照。
    #[inline]
    pub fn decode_range(&self, offset: usize, len: usize) -> Result<String, DecodeError> {
        super::decode_range(self.as_bytes(), offset, len)
    }
}

impl Default for &AribStr {
    #[inline]
    fn default() -> Self {
        AribStr::from_bytes(&[])
    }
}

impl fmt::Debug for AribStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AribStr(")?;
        f.debug_list()
            .entries(self.0.iter().map(crate::utils::UpperHex))
            .finish()?;
        f.write_str(")")
    }
}

impl<'a> From<&'a [u8]> for &'a AribStr {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        AribStr::from_bytes(bytes)
    }
}

impl AsRef<AribStr> for AribStr {
    #[inline]
    fn as_ref(&self) -> &AribStr {
        self
    }
}

impl AsRef<[u8]> for AribStr {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// 所有権を持つ8単位符号を表す型。
///
/// `AribString`と<code>&[AribStr]</code>は、[`String`]と<code>&[str]</code>の関係と相似しており、
/// 前者は所有権を持つ符号列、後者は借用された参照である。
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AribString(Vec<u8>);

impl AribString {
    /// 空の`AribString`を生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> AribString {
        AribString(Vec::new())
    }

    /// `AribString`をバイトのベクタに変換する。
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// 符号列全体を含む[`AribStr`]スライスを返す。
    #[inline]
    #[must_use]
    pub fn as_arib_str(&self) -> &AribStr {
        AribStr::from_bytes(&self.0)
    }

    /// 全内容を削除する。
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// 末尾に`string`を追記する。
    #[inline]
    pub fn push_str(&mut self, string: &AribStr) {
        self.0.extend_from_slice(string.as_bytes());
    }
}

impl ops::Deref for AribString {
    type Target = AribStr;

    #[inline]
    fn deref(&self) -> &AribStr {
        self.as_arib_str()
    }
}

impl fmt::Debug for AribString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self.as_arib_str(), f)
    }
}

impl AsRef<AribStr> for AribString {
    #[inline]
    fn as_ref(&self) -> &AribStr {
        self.as_arib_str()
    }
}

impl Borrow<AribStr> for AribString {
    #[inline]
    fn borrow(&self) -> &AribStr {
        self.as_arib_str()
    }
}

impl ToOwned for AribStr {
    type Owned = AribString;

    #[inline]
    fn to_owned(&self) -> AribString {
        AribString(self.0.to_vec())
    }
}

impl From<Vec<u8>> for AribString {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        AribString(bytes)
    }
}

impl From<&AribStr> for AribString {
    #[inline]
    fn from(s: &AribStr) -> Self {
        s.to_owned()
    }
}

impl From<AribString> for Vec<u8> {
    #[inline]
    fn from(s: AribString) -> Self {
        s.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use hex_literal::hex;

    #[test]
    fn test_decode() {
        let bytes = hex!("0E 41 42 89 43");
        let s = AribStr::from_bytes(&bytes);
        assert_eq!(s.len(), 5);
        assert_eq!(s.decode().unwrap(), "ＡＢC");
        assert_eq!(s.decode_range(0, 2).unwrap(), "Ａ");
        assert_matches!(s.decode_range(4, 2), Err(DecodeError::OutOfRange { .. }));
        assert_eq!(<&AribStr>::default().decode().unwrap(), "");
    }

    #[test]
    fn test_owned() {
        let mut s = AribString::new();
        assert!(s.is_empty());
        s.push_str(AribStr::from_bytes(&hex!("A2")));
        s.push_str(AribStr::from_bytes(&hex!("A4")));
        assert_eq!(s.as_bytes(), &hex!("A2 A4"));
        assert_eq!(s.decode().unwrap(), "あい");
        assert_eq!(&*s, s.as_arib_str().to_owned().as_arib_str());

        s.clear();
        assert_eq!(s.into_bytes(), Vec::<u8>::new());
    }

    #[test]
    fn test_debug() {
        let s = AribString::from(hex!("0E 41").to_vec());
        assert_eq!(format!("{:?}", s), "AribStr([0E, 41])");
    }
}
