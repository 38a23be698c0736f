use std::fmt;

/// `Debug`で値を大文字の16進数として表示するためのラッパー。
pub struct UpperHex<T>(pub T);

impl<T: fmt::UpperHex> fmt::Debug for UpperHex<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_hex() {
        assert_eq!(format!("{:?}", UpperHex(0x0Eu8)), "0E");
        assert_eq!(format!("{:?}", UpperHex(&0xA2u8)), "A2");
        assert_eq!(format!("{:?}", [UpperHex(1u8), UpperHex(0xFF)]), "[01, FF]");
    }
}
