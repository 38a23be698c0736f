//! 符号の指示と文字符号集合。

/// 符号の指示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Designator {
    /// G0に対する指示。
    G0 = 0,
    /// G1に対する指示。
    G1 = 1,
    /// G2に対する指示。
    G2 = 2,
    /// G3に対する指示。
    G3 = 3,
}

impl Designator {
    /// 値の下位2ビットから`Designator`を得る。
    ///
    /// 中間文字`0x28..=0x2B`はそれぞれG0～G3に対応するため、そのまま渡せばよい。
    #[inline]
    pub fn from_low_bits(n: u8) -> Designator {
        match n & 0x03 {
            0 => Designator::G0,
            1 => Designator::G1,
            2 => Designator::G2,
            _ => Designator::G3,
        }
    }

    /// 符号の指示を`usize`として返す。
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// 文字符号集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GraphicSet {
    /// 漢字、2バイト符号。
    Kanji,
    /// 英数、1バイト符号。
    Alnum,
    /// 平仮名、1バイト符号。
    Hira,
    /// 片仮名、1バイト符号。
    Kata,
    /// モザイクA、1バイト符号。
    MosaicA,
    /// モザイクB、1バイト符号。
    MosaicB,
    /// モザイクC、1バイト符号。
    MosaicC,
    /// モザイクD、1バイト符号。
    MosaicD,
    /// プロポーショナル英数、1バイト符号。
    PropAlnum,
    /// プロポーショナル平仮名、1バイト符号。
    PropHira,
    /// プロポーショナル片仮名、1バイト符号。
    PropKata,
    /// JIS X 0201 片仮名、1バイト符号。
    JisXKata,
    /// JIS互換漢字1面、2バイト符号。
    JisKanjiPlane1,
    /// JIS互換漢字2面、2バイト符号。
    JisKanjiPlane2,
    /// 追加記号、2バイト符号。
    ExtraSymbols,
    /// DRCS-0～DRCS-15。DRCS-0のみ2バイト符号で、それ以外は1バイト符号。
    Drcs(u8),
    /// マクロ、1バイト符号。
    Macro,
    /// 規格にない終端符号で指示された集合。
    Unknown {
        /// 指示に使われた終端符号。
        final_byte: u8,
        /// 2バイトGセットとして指示されたかどうか。
        double: bool,
    },
}

/// 文字符号集合の分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 英数およびプロポーショナル英数。
    Alnum,
    /// 平仮名およびプロポーショナル平仮名。
    Hira,
    /// 片仮名およびプロポーショナル片仮名。
    Kata,
    /// 漢字、JIS互換漢字、追加記号。
    KanjiLike,
    /// 上記以外。
    Other,
}

impl GraphicSet {
    /// 1バイトGセットの終端符号から文字符号集合を得る。
    pub fn from_final(f: u8) -> GraphicSet {
        Self::from_final_with(f, false)
    }

    /// 2バイトGセットの終端符号から文字符号集合を得る。
    ///
    /// 既知の終端符号であれば指示の形式にかかわらず同じ集合となる。
    pub fn from_double_final(f: u8) -> GraphicSet {
        Self::from_final_with(f, true)
    }

    fn from_final_with(f: u8, double: bool) -> GraphicSet {
        match f {
            0x42 => GraphicSet::Kanji,
            0x4A => GraphicSet::Alnum,
            0x30 => GraphicSet::Hira,
            0x31 => GraphicSet::Kata,
            0x32 => GraphicSet::MosaicA,
            0x33 => GraphicSet::MosaicB,
            0x34 => GraphicSet::MosaicC,
            0x35 => GraphicSet::MosaicD,
            0x36 => GraphicSet::PropAlnum,
            0x37 => GraphicSet::PropHira,
            0x38 => GraphicSet::PropKata,
            0x49 => GraphicSet::JisXKata,
            0x39 => GraphicSet::JisKanjiPlane1,
            0x3A => GraphicSet::JisKanjiPlane2,
            0x3B => GraphicSet::ExtraSymbols,
            final_byte => GraphicSet::Unknown { final_byte, double },
        }
    }

    /// 1バイトDRCSの終端符号から文字符号集合を得る。
    pub fn from_drcs_final(f: u8) -> GraphicSet {
        match f {
            0x40..=0x4F => GraphicSet::Drcs(f - 0x40),
            0x70 => GraphicSet::Macro,
            final_byte => GraphicSet::Unknown {
                final_byte,
                double: false,
            },
        }
    }

    /// 1文字を表すのに必要なバイト数を返す。
    #[inline]
    pub fn bytes(self) -> usize {
        match self {
            GraphicSet::Kanji
            | GraphicSet::JisKanjiPlane1
            | GraphicSet::JisKanjiPlane2
            | GraphicSet::ExtraSymbols
            | GraphicSet::Drcs(0)
            | GraphicSet::Unknown { double: true, .. } => 2,
            _ => 1,
        }
    }

    /// 2バイト符号の集合であれば`true`を返す。
    #[inline]
    pub fn is_double(self) -> bool {
        self.bytes() == 2
    }

    /// 文字符号集合の分類を返す。
    pub fn category(self) -> Category {
        match self {
            GraphicSet::Alnum | GraphicSet::PropAlnum => Category::Alnum,
            GraphicSet::Hira | GraphicSet::PropHira => Category::Hira,
            GraphicSet::Kata | GraphicSet::PropKata => Category::Kata,
            GraphicSet::Kanji
            | GraphicSet::JisKanjiPlane1
            | GraphicSet::JisKanjiPlane2
            | GraphicSet::ExtraSymbols => Category::KanjiLike,
            _ => Category::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designator_from_low_bits() {
        assert_eq!(Designator::from_low_bits(0x28), Designator::G0);
        assert_eq!(Designator::from_low_bits(0x29), Designator::G1);
        assert_eq!(Designator::from_low_bits(0x2A), Designator::G2);
        assert_eq!(Designator::from_low_bits(0x2B), Designator::G3);
    }

    #[test]
    fn test_graphic_set_from_final() {
        assert_eq!(GraphicSet::from_final(0x42), GraphicSet::Kanji);
        assert_eq!(GraphicSet::from_final(0x49), GraphicSet::JisXKata);
        assert_eq!(GraphicSet::from_double_final(0x3B), GraphicSet::ExtraSymbols);
        assert_eq!(
            GraphicSet::from_final(0x7A),
            GraphicSet::Unknown {
                final_byte: 0x7A,
                double: false
            },
        );
        assert_eq!(GraphicSet::from_drcs_final(0x40), GraphicSet::Drcs(0));
        assert_eq!(GraphicSet::from_drcs_final(0x4F), GraphicSet::Drcs(15));
        assert_eq!(GraphicSet::from_drcs_final(0x70), GraphicSet::Macro);
    }

    #[test]
    fn test_graphic_set_bytes() {
        assert_eq!(GraphicSet::Kanji.bytes(), 2);
        assert_eq!(GraphicSet::ExtraSymbols.bytes(), 2);
        assert_eq!(GraphicSet::Drcs(0).bytes(), 2);
        assert_eq!(GraphicSet::Drcs(1).bytes(), 1);
        assert_eq!(GraphicSet::Alnum.bytes(), 1);
        assert_eq!(GraphicSet::Macro.bytes(), 1);
        assert_eq!(GraphicSet::from_double_final(0x7A).bytes(), 2);
        assert_eq!(GraphicSet::from_final(0x7A).bytes(), 1);
    }

    #[test]
    fn test_graphic_set_category() {
        assert_eq!(GraphicSet::PropAlnum.category(), Category::Alnum);
        assert_eq!(GraphicSet::PropHira.category(), Category::Hira);
        assert_eq!(GraphicSet::Kata.category(), Category::Kata);
        assert_eq!(GraphicSet::JisKanjiPlane2.category(), Category::KanjiLike);
        assert_eq!(GraphicSet::JisXKata.category(), Category::Other);
        assert_eq!(GraphicSet::Drcs(3).category(), Category::Other);
    }
}
