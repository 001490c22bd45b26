//! The layout table: which arrangements are available and in what order.
//!
//! The arrangement algorithms themselves live in the engine; this table only
//! names them, fixes their cycle order and carries the shared main-area
//! parameters. Declaration order is the cycle order and the index space used
//! by direct-select bindings.
use crate::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The tiled arrangements an engine is expected to implement.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arrange {
    /// Main area on the left, remaining clients stacked on the right
    Tile,
    /// Main area on top, remaining clients stacked below
    BottomStack,
    /// Fullscreen stacking: only the focused client is visible
    Monocle,
}

/// One entry in the layout table: a bar symbol plus the arrangement to run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Short symbol shown in the bar while this layout is active
    pub symbol: String,
    /// Arrangement to run, or None for floating mode (no arrangement at all)
    pub arrange: Option<Arrange>,
}

impl Layout {
    /// A tiled layout entry
    pub fn tiled(symbol: impl Into<String>, arrange: Arrange) -> Self {
        Self {
            symbol: symbol.into(),
            arrange: Some(arrange),
        }
    }

    /// A floating layout entry: the engine leaves windows where they are
    pub fn floating(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            arrange: None,
        }
    }

    /// True if this entry is floating mode
    pub fn is_floating(&self) -> bool {
        self.arrange.is_none()
    }
}

/// The ordered layout table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layouts(Vec<Layout>);

impl Layouts {
    /// Construct a layout table; declaration order is cycle order
    pub fn new(layouts: Vec<Layout>) -> Self {
        Self(layouts)
    }

    /// The number of layouts in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no layouts
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the layouts in cycle order
    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.0.iter()
    }

    /// Direct-select lookup as used by `SetLayout(Some(index))` bindings.
    ///
    /// # Errors
    /// Fails with [Error::InvalidLayoutIndex] when the index is outside the
    /// table, so a bad binding surfaces at validation time rather than as a
    /// silent fallback.
    pub fn get(&self, index: usize) -> Result<&Layout> {
        self.0.get(index).ok_or(Error::InvalidLayoutIndex {
            index,
            n_layouts: self.0.len(),
        })
    }

    /// The index `step` positions away from `from` in cycle order, wrapping
    /// at both ends.
    pub fn cycled_index(&self, from: usize, step: i32) -> usize {
        if self.0.is_empty() {
            return 0;
        }

        let n = self.0.len() as i32;
        (((from as i32 + step) % n + n) % n) as usize
    }
}

impl FromIterator<Layout> for Layouts {
    fn from_iter<T: IntoIterator<Item = Layout>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parameters shared by the tiled arrangements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutParams {
    /// Fraction of the screen given to the main area
    pub main_factor: f32,
    /// Number of clients in the main area
    pub main_count: u32,
    /// Delta applied per `SetMainRatio` step
    pub factor_step: f32,
    /// Respect client size hints in tiled resizals
    pub respect_resize_hints: bool,
    /// Keep focus on a fullscreen window
    pub lock_fullscreen: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            main_factor: 0.55,
            main_count: 1,
            factor_step: 0.05,
            respect_resize_hints: false,
            lock_fullscreen: true,
        }
    }
}

impl LayoutParams {
    /// The main factor after applying `delta`, unchanged if the result would
    /// leave the `0.05..=0.95` range.
    pub fn bumped_factor(&self, delta: f32) -> f32 {
        let factor = self.main_factor + delta;

        if (0.05..=0.95).contains(&factor) {
            factor
        } else {
            self.main_factor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    fn layouts() -> Layouts {
        Layouts::new(vec![
            Layout::tiled("[]=", Arrange::Tile),
            Layout::tiled("TTT", Arrange::BottomStack),
            Layout::tiled("[M]", Arrange::Monocle),
            Layout::floating("><>"),
        ])
    }

    #[test]
    fn direct_select_is_bounds_checked() {
        let layouts = layouts();

        assert_eq!(layouts.get(2).unwrap().symbol, "[M]");
        assert!(matches!(
            layouts.get(4),
            Err(Error::InvalidLayoutIndex {
                index: 4,
                n_layouts: 4
            })
        ));
    }

    #[test_case(0, 1, 1; "forward")]
    #[test_case(3, 1, 0; "forward wraps")]
    #[test_case(0, -1, 3; "backward wraps")]
    #[test_case(2, -6, 0; "large backward step")]
    #[test_case(1, 0, 1; "no step")]
    #[test]
    fn cycling_wraps_in_declaration_order(from: usize, step: i32, expected: usize) {
        assert_eq!(layouts().cycled_index(from, step), expected);
    }

    #[test]
    fn floating_mode_has_no_arrangement() {
        let layouts = layouts();

        assert!(layouts.get(3).unwrap().is_floating());
        assert!(!layouts.get(0).unwrap().is_floating());
    }

    #[test_case(0.05, 0.6; "step up")]
    #[test_case(-0.05, 0.5; "step down")]
    #[test_case(0.9, 0.55; "overshoot is ignored")]
    #[test_case(-0.9, 0.55; "undershoot is ignored")]
    #[test]
    fn factor_bumps_are_clamped(delta: f32, expected: f32) {
        let params = LayoutParams::default();

        assert!((params.bumped_factor(delta) - expected).abs() < 1e-6);
    }
}
