//! 符号の指示・呼び出し状態。

use super::set::{Designator, GraphicSet};

/// 初期状態でG0～G3に指示される符号集合。
const DEFAULT_GRAPHIC_SETS: [GraphicSet; 4] = [
    GraphicSet::JisKanjiPlane1,
    GraphicSet::Alnum,
    GraphicSet::Hira,
    GraphicSet::Kata,
];

/// デコード中の符号の指示・呼び出し状態。
///
/// デコードの呼び出しごとに生成され、呼び出しをまたいで保持されることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingState {
    graphic_sets: [GraphicSet; 4],
    gl: Designator,
    gr: Designator,
    single_shift: Option<Designator>,
    halfwidth: bool,
}

impl DecodingState {
    /// 初期状態の`DecodingState`を生成する。
    ///
    /// G0～G3にはJIS互換漢字1面、英数、平仮名、片仮名が指示され、
    /// GLにはG0、GRにはG2が呼び出される。
    #[inline]
    pub fn new() -> DecodingState {
        DecodingState {
            graphic_sets: DEFAULT_GRAPHIC_SETS,
            gl: Designator::G0,
            gr: Designator::G2,
            single_shift: None,
            halfwidth: false,
        }
    }

    /// 状態を初期状態に戻す。
    #[inline]
    pub fn reset(&mut self) {
        *self = DecodingState::new();
    }

    /// `g`に符号集合`set`を指示する。
    #[inline]
    pub fn designate(&mut self, g: Designator, set: GraphicSet) {
        self.graphic_sets[g.index()] = set;
    }

    /// GLに`g`を呼び出す（ロッキングシフト）。
    #[inline]
    pub fn invoke_gl(&mut self, g: Designator) {
        self.gl = g;
    }

    /// GRに`g`を呼び出す（ロッキングシフト）。
    #[inline]
    pub fn invoke_gr(&mut self, g: Designator) {
        self.gr = g;
    }

    /// 次のGLの図形文字1つに限り`g`を呼び出す（シングルシフト）。
    #[inline]
    pub fn arm_single_shift(&mut self, g: Designator) {
        self.single_shift = Some(g);
    }

    /// シングルシフトを解除する。
    #[inline]
    pub fn clear_single_shift(&mut self) {
        self.single_shift = None;
    }

    /// 有効なシングルシフトを返す。
    #[inline]
    pub fn single_shift(&self) -> Option<Designator> {
        self.single_shift
    }

    /// `g`に指示されている符号集合を返す。
    #[inline]
    pub fn graphic_set(&self, g: Designator) -> GraphicSet {
        self.graphic_sets[g.index()]
    }

    /// GLで有効な符号集合を返す。シングルシフトが有効であればそちらを優先する。
    #[inline]
    pub fn gl_set(&self) -> GraphicSet {
        self.graphic_set(self.single_shift.unwrap_or(self.gl))
    }

    /// GRに呼び出されている符号集合を返す。
    #[inline]
    pub fn gr_set(&self) -> GraphicSet {
        self.graphic_set(self.gr)
    }

    /// 中型サイズ（半角）が指定されていれば`true`を返す。
    #[inline]
    pub fn is_halfwidth(&self) -> bool {
        self.halfwidth
    }

    /// 中型サイズ（半角）かどうかを設定する。
    #[inline]
    pub fn set_halfwidth(&mut self, halfwidth: bool) {
        self.halfwidth = halfwidth;
    }
}

impl Default for DecodingState {
    #[inline]
    fn default() -> Self {
        DecodingState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DecodingState::new();
        assert_eq!(state.graphic_set(Designator::G0), GraphicSet::JisKanjiPlane1);
        assert_eq!(state.graphic_set(Designator::G1), GraphicSet::Alnum);
        assert_eq!(state.graphic_set(Designator::G2), GraphicSet::Hira);
        assert_eq!(state.graphic_set(Designator::G3), GraphicSet::Kata);
        assert_eq!(state.gl_set(), GraphicSet::JisKanjiPlane1);
        assert_eq!(state.gr_set(), GraphicSet::Hira);
        assert_eq!(state.single_shift(), None);
        assert!(!state.is_halfwidth());
    }

    #[test]
    fn test_single_shift_overrides_gl() {
        let mut state = DecodingState::new();
        state.invoke_gl(Designator::G1);
        assert_eq!(state.gl_set(), GraphicSet::Alnum);

        state.arm_single_shift(Designator::G3);
        assert_eq!(state.gl_set(), GraphicSet::Kata);
        // GRには影響しない
        assert_eq!(state.gr_set(), GraphicSet::Hira);

        state.clear_single_shift();
        assert_eq!(state.gl_set(), GraphicSet::Alnum);
    }

    #[test]
    fn test_reset() {
        let mut state = DecodingState::new();
        state.designate(Designator::G0, GraphicSet::Drcs(1));
        state.invoke_gl(Designator::G2);
        state.invoke_gr(Designator::G3);
        state.arm_single_shift(Designator::G2);
        state.set_halfwidth(true);
        assert_ne!(state, DecodingState::new());

        state.reset();
        assert_eq!(state, DecodingState::new());
    }
}
