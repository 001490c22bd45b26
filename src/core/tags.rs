//! Workspace tags and the bitmasks used to address them.
use crate::{
    core::{
        actions::{Action, TagSelection},
        bindings::{CodeMap, KeyBinding, KeyBindings},
    },
    Error, Result,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
};

/// Bit width of [TagMask]: the hard upper bound on addressable tags.
pub const TAG_MASK_WIDTH: u32 = u32::BITS;

/// A set of tags encoded as bits, in tag declaration order from the least
/// significant bit.
///
/// Bits above the named tag list are reserved for scratchpads (see
/// [Tags::scratchpad_mask]). An empty mask carries meaning in several places
/// (a [Rule][crate::core::rules::Rule] with no tags places the window on the
/// currently viewed tags) so it is a valid value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagMask(u32);

impl TagMask {
    /// The empty tag set
    pub const EMPTY: Self = Self(0);

    /// Wrap a raw bit pattern as a tag mask
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// The mask selecting only the tag at the given declaration index
    pub const fn for_index(index: usize) -> Self {
        Self(1 << index)
    }

    /// The raw bit pattern of this mask
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if no tags are selected
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every tag in `other` is also in this mask
    pub const fn contains(self, other: TagMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if this mask and `other` share at least one tag
    pub const fn intersects(self, other: TagMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for TagMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TagMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for TagMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for TagMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

/// The ordered list of named workspace tags, plus the tag bits reserved for
/// scratchpads directly above them.
///
/// The list is fixed at construction: tag position determines the bit used to
/// address it everywhere else in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tags {
    names: Vec<String>,
    n_reserved: usize,
}

impl Tags {
    /// Create a new tag list with `n_reserved` scratchpad bits reserved above
    /// the named tags.
    ///
    /// # Errors
    /// Fails with [Error::TagMaskOverflow] if the names and reserved bits do
    /// not fit in a [TagMask].
    pub fn new<I, S>(names: I, n_reserved: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() + n_reserved > TAG_MASK_WIDTH as usize {
            return Err(Error::TagMaskOverflow {
                n_tags: names.len(),
                n_reserved,
                width: TAG_MASK_WIDTH,
            });
        }

        Ok(Self { names, n_reserved })
    }

    /// The number of named, user visible tags
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if there are no named tags
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The number of tag bits reserved for scratchpads
    pub fn n_reserved(&self) -> usize {
        self.n_reserved
    }

    /// The tag names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The name of the tag at the given index, if there is one
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The mask selecting the named tag at the given index, if there is one
    pub fn mask_for(&self, index: usize) -> Option<TagMask> {
        (index < self.names.len()).then(|| TagMask::for_index(index))
    }

    /// The mask selecting every named tag (dwm's `~0` view-all argument,
    /// trimmed to the declared tags)
    pub fn view_all(&self) -> TagMask {
        TagMask::new((1_u64.wrapping_shl(self.names.len() as u32) - 1) as u32)
    }

    /// The reserved mask for the scratchpad at the given index, if one was
    /// reserved
    pub fn scratchpad_mask(&self, index: usize) -> Option<TagMask> {
        (index < self.n_reserved).then(|| TagMask::for_index(self.names.len() + index))
    }

    /// Every addressable tag bit: named tags plus reserved scratchpad bits.
    ///
    /// Masks coming from rules are trimmed to this before being applied.
    pub fn valid_mask(&self) -> TagMask {
        TagMask::new((1_u64.wrapping_shl((self.names.len() + self.n_reserved) as u32) - 1) as u32)
    }
}

/// Generate the standard per-tag key binding quadruplet for each named tag:
/// view (`M-n`), toggle view (`M-C-n`), move to tag (`M-S-n`) and toggle tag
/// (`M-C-S-n`), where `n` cycles `1..9, 0` through the first ten tags.
///
/// This is the table-construction replacement for hand-duplicating four rows
/// per tag. Tags beyond the tenth get no direct bindings: there are only ten
/// number keys.
pub fn tag_key_bindings(tags: &Tags, codes: &CodeMap) -> Result<KeyBindings> {
    let mut bindings = KeyBindings::default();

    for index in 0..tags.len().min(10) {
        let key = (index + 1) % 10; // tags 1-9 then 0 for the tenth
        let mask = TagMask::for_index(index);

        for (prefix, action) in [
            ("M", Action::View(TagSelection::Mask(mask))),
            ("M-C", Action::ToggleView(TagSelection::Mask(mask))),
            ("M-S", Action::MoveToTag(TagSelection::Mask(mask))),
            ("M-C-S", Action::ToggleTag(TagSelection::Mask(mask))),
        ] {
            bindings.push(KeyBinding::parse(format!("{prefix}-{key}"), action, codes)?);
        }
    }

    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    fn test_codes() -> CodeMap {
        ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"]
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), 10 + i as u8))
            .collect()
    }

    #[test]
    fn too_many_tags_is_an_error() {
        let names = (0..30).map(|n| n.to_string());
        let res = Tags::new(names, 3);

        assert!(matches!(
            res,
            Err(Error::TagMaskOverflow {
                n_tags: 30,
                n_reserved: 3,
                ..
            })
        ));
    }

    #[test]
    fn ten_tags_and_a_scratchpad_fit() {
        let tags = Tags::new((1..=10).map(|n| n.to_string()), 1).unwrap();

        assert_eq!(tags.len(), 10);
        assert_eq!(tags.view_all(), TagMask::new(0b11_1111_1111));
        assert_eq!(tags.valid_mask(), TagMask::new(0b111_1111_1111));
        assert_eq!(tags.scratchpad_mask(0), Some(TagMask::for_index(10)));
        assert_eq!(tags.scratchpad_mask(1), None);
    }

    #[test_case(0, Some(TagMask::new(0b1)); "first tag")]
    #[test_case(3, Some(TagMask::new(0b1000)); "fourth tag")]
    #[test_case(4, None; "out of range")]
    #[test]
    fn mask_for_index(index: usize, expected: Option<TagMask>) {
        let tags = Tags::new(["a", "b", "c", "d"], 0).unwrap();

        assert_eq!(tags.mask_for(index), expected);
    }

    #[test]
    fn full_width_tag_list_has_a_full_mask() {
        let tags = Tags::new((0..32).map(|n| n.to_string()), 0).unwrap();

        assert_eq!(tags.valid_mask(), TagMask::new(u32::MAX));
    }

    #[test]
    fn tag_keys_generate_a_quadruplet_per_tag() {
        let tags = Tags::new((1..=10).map(|n| n.to_string()), 0).unwrap();
        let bindings = tag_key_bindings(&tags, &test_codes()).unwrap();

        assert_eq!(bindings.len(), 40);

        // the tenth tag binds the 0 key
        let patterns: Vec<&str> = bindings.iter().map(|b| b.pattern.as_str()).collect();
        assert!(patterns.contains(&"M-0"));
        assert!(patterns.contains(&"M-C-S-0"));

        let mask = TagMask::for_index(9);
        let views: Vec<_> = bindings
            .iter()
            .filter(|b| b.action == Action::View(TagSelection::Mask(mask)))
            .collect();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].pattern, "M-0");
    }

    #[test]
    fn generated_tag_keys_are_disjoint() {
        let tags = Tags::new((1..=10).map(|n| n.to_string()), 0).unwrap();
        let bindings = tag_key_bindings(&tags, &test_codes()).unwrap();

        assert!(bindings.shadowed().is_empty());
    }
}
