//! User defined key and mouse button bindings and their resolution.
//!
//! Both tables are ordered: resolution is a linear scan in declaration order
//! and the first row whose trigger matches the event exactly wins. A trigger
//! matches only on mask equality, not subset: `M-q` does not fire for
//! `M-S-q`. An event that matches no row resolves to `None` and the engine
//! does nothing.
use crate::core::{actions::Action, helpers};
use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter};

/// Key-name to keycode lookup table for the active keymap.
///
/// Usually built from `xmodmap -pke` output via
/// [keycodes_from_xmodmap][crate::core::helpers::keycodes_from_xmodmap], but
/// an engine with its own keymap handling can supply one directly.
pub type CodeMap = HashMap<String, u8>;

bitflags! {
    /// Held modifier keys, using the X11 modifier mask bit layout.
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModMask: u16 {
        /// Shift
        const SHIFT = 1 << 0;
        /// Control
        const CTRL = 1 << 2;
        /// Alt (Mod1)
        const ALT = 1 << 3;
        /// Meta / super / windows (Mod4)
        const SUPER = 1 << 6;
    }
}

/// Known modifier keys for bindings
#[derive(Debug, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModifierKey {
    /// Control
    Ctrl,
    /// Alt
    Alt,
    /// Shift
    Shift,
    /// Meta / super / windows
    Meta,
}

impl From<ModifierKey> for ModMask {
    fn from(m: ModifierKey) -> ModMask {
        match m {
            ModifierKey::Ctrl => ModMask::CTRL,
            ModifierKey::Alt => ModMask::ALT,
            ModifierKey::Shift => ModMask::SHIFT,
            ModifierKey::Meta => ModMask::SUPER,
        }
    }
}

impl TryFrom<&str> for ModifierKey {
    type Error = crate::Error;

    fn try_from(s: &str) -> crate::Result<Self> {
        match s {
            "C" => Ok(Self::Ctrl),
            "A" => Ok(Self::Alt),
            "S" => Ok(Self::Shift),
            "M" => Ok(Self::Meta),
            _ => Err(crate::Error::UnknownModifier(s.to_string())),
        }
    }
}

/// A concrete key press: held modifier mask plus keycode, as delivered by the
/// engine after keysym translation.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyCode {
    /// The held modifier mask
    pub mask: ModMask,
    /// The key code that was held
    pub code: u8,
}

impl KeyCode {
    /// Create a new KeyCode from a modifier mask and keycode
    pub fn new(mask: ModMask, code: u8) -> Self {
        Self { mask, code }
    }

    /// Create a new KeyCode from this one, removing the given modifier mask.
    ///
    /// Engines use this to strip ignored modifiers (num lock and friends)
    /// before resolving the event against the table.
    pub fn ignoring_modifier(&self, mask: ModMask) -> KeyCode {
        KeyCode {
            mask: self.mask & !mask,
            code: self.code,
        }
    }
}

/// Known mouse buttons for binding actions
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MouseButton {
    /// 1
    Left,
    /// 2
    Middle,
    /// 3
    Right,
    /// 4
    ScrollUp,
    /// 5
    ScrollDown,
}

impl From<MouseButton> for u8 {
    fn from(b: MouseButton) -> u8 {
        match b {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::ScrollUp => 4,
            MouseButton::ScrollDown => 5,
        }
    }
}

/// The UI region a button press landed in.
///
/// Button bindings are resolved per region so that, for example, a plain left
/// click means "view this tag" on the tag bar but nothing on a client window.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClickContext {
    /// The per-tag boxes at the left of the bar
    TagBar,
    /// The current layout symbol in the bar
    LayoutSymbol,
    /// The focused window title section of the bar
    WindowTitle,
    /// The status text section of the bar
    StatusText,
    /// A managed client window
    ClientWindow,
    /// The root window
    RootWindow,
}

/// One row of the key binding table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyBinding {
    /// The resolved trigger for this binding
    pub code: KeyCode,
    /// The pattern the trigger was parsed from, kept for diagnostics
    pub pattern: String,
    /// The action to run when the trigger fires
    pub action: Action,
}

impl KeyBinding {
    /// Parse a `"M-S-q"` style pattern into a binding for the given action.
    ///
    /// # Errors
    /// Fails if the pattern is malformed, names an unknown modifier or names
    /// a key not present in `codes`.
    pub fn parse(
        pattern: impl Into<String>,
        action: Action,
        codes: &CodeMap,
    ) -> crate::Result<Self> {
        let pattern = pattern.into();
        let code = helpers::parse_key_pattern(&pattern, codes)?;

        Ok(Self {
            code,
            pattern,
            action,
        })
    }
}

/// The ordered key binding table
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyBindings(Vec<KeyBinding>);

impl KeyBindings {
    /// Append a binding to the end of the table
    pub fn push(&mut self, binding: KeyBinding) {
        self.0.push(binding);
    }

    /// Append all bindings from `other` to the end of the table, preserving
    /// their order
    pub fn append(&mut self, other: KeyBindings) {
        self.0.extend(other.0);
    }

    /// The number of bindings in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no bindings
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the bindings in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &KeyBinding> {
        self.0.iter()
    }

    /// Every distinct trigger in the table, for the engine to grab
    pub fn codes(&self) -> Vec<KeyCode> {
        let mut codes: Vec<KeyCode> = Vec::with_capacity(self.0.len());
        for b in self.0.iter() {
            if !codes.contains(&b.code) {
                codes.push(b.code);
            }
        }

        codes
    }

    /// Resolve a key event to an action: first declared binding with an
    /// exactly equal trigger wins, no match is a no-op.
    pub fn action_for(&self, code: KeyCode) -> Option<&Action> {
        self.0.iter().find(|b| b.code == code).map(|b| &b.action)
    }

    /// Bindings that can never fire because an earlier row claims the same
    /// trigger, paired with the row that shadows them.
    pub fn shadowed(&self) -> Vec<(&KeyBinding, &KeyBinding)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, b)| {
                self.0[..i]
                    .iter()
                    .find(|earlier| earlier.code == b.code)
                    .map(|earlier| (earlier, b))
            })
            .collect()
    }
}

impl FromIterator<KeyBinding> for KeyBindings {
    fn from_iter<T: IntoIterator<Item = KeyBinding>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One row of the button binding table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonBinding {
    /// The UI region this binding applies to
    pub context: ClickContext,
    /// The modifier mask that must be held exactly
    pub mask: ModMask,
    /// The button that must be pressed
    pub button: MouseButton,
    /// The action to run when the trigger fires
    pub action: Action,
}

impl ButtonBinding {
    /// Construct a new button binding row
    pub fn new(context: ClickContext, mask: ModMask, button: MouseButton, action: Action) -> Self {
        Self {
            context,
            mask,
            button,
            action,
        }
    }
}

/// The ordered button binding table
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonBindings(Vec<ButtonBinding>);

impl ButtonBindings {
    /// Construct a table from rows in declaration order
    pub fn new(bindings: Vec<ButtonBinding>) -> Self {
        Self(bindings)
    }

    /// The number of bindings in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no bindings
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the bindings in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ButtonBinding> {
        self.0.iter()
    }

    /// Resolve a button event to an action using the same first-match-wins
    /// exact scan as key bindings, additionally keyed on the click context.
    pub fn action_for(
        &self,
        context: ClickContext,
        mask: ModMask,
        button: MouseButton,
    ) -> Option<&Action> {
        self.0
            .iter()
            .find(|b| b.context == context && b.mask == mask && b.button == button)
            .map(|b| &b.action)
    }

    /// Bindings that can never fire because an earlier row claims the same
    /// (context, mask, button) trigger, paired with the row that shadows them.
    pub fn shadowed(&self) -> Vec<(&ButtonBinding, &ButtonBinding)> {
        let same = |a: &ButtonBinding, b: &ButtonBinding| {
            a.context == b.context && a.mask == b.mask && a.button == b.button
        };

        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, b)| {
                self.0[..i]
                    .iter()
                    .find(|earlier| same(earlier, b))
                    .map(|earlier| (earlier, b))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    fn test_codes() -> CodeMap {
        [("q", 24), ("j", 44), ("k", 45)]
            .into_iter()
            .map(|(name, code)| (name.to_string(), code))
            .collect()
    }

    fn test_bindings() -> KeyBindings {
        key_bindings! {
            &test_codes();
            "M-q" => Action::KillClient,
            "M-j" => Action::FocusStack(1),
            "M-k" => Action::FocusStack(-1),
            "M-S-q" => Action::Quit { restart: false },
        }
        .unwrap()
    }

    #[test_case(ModMask::SUPER, 24, Some(Action::KillClient); "exact match")]
    #[test_case(
        ModMask::SUPER | ModMask::SHIFT, 24,
        Some(Action::Quit { restart: false });
        "superset mask matches the distinct binding"
    )]
    #[test_case(ModMask::SUPER | ModMask::CTRL, 24, None; "unbound mask")]
    #[test_case(ModMask::SUPER, 99, None; "unbound key")]
    #[test_case(ModMask::empty(), 24, None; "no modifiers")]
    #[test]
    fn key_resolution_requires_an_exact_mask(mask: ModMask, code: u8, expected: Option<Action>) {
        let bindings = test_bindings();

        assert_eq!(
            bindings.action_for(KeyCode::new(mask, code)),
            expected.as_ref()
        );
    }

    #[test]
    fn first_declared_binding_wins() {
        let mut bindings = test_bindings();
        bindings.push(KeyBinding::parse("M-q", Action::Zoom, &test_codes()).unwrap());

        let resolved = bindings.action_for(KeyCode::new(ModMask::SUPER, 24));

        assert_eq!(resolved, Some(&Action::KillClient));
    }

    #[test]
    fn shadowed_reports_unreachable_bindings() {
        let mut bindings = test_bindings();
        assert!(bindings.shadowed().is_empty());

        bindings.push(KeyBinding::parse("M-q", Action::Zoom, &test_codes()).unwrap());
        let shadowed = bindings.shadowed();

        assert_eq!(shadowed.len(), 1);
        assert_eq!(shadowed[0].0.action, Action::KillClient);
        assert_eq!(shadowed[0].1.action, Action::Zoom);
    }

    #[test]
    fn codes_deduplicates_triggers_for_grabbing() {
        let mut bindings = test_bindings();
        bindings.push(KeyBinding::parse("M-q", Action::Zoom, &test_codes()).unwrap());

        assert_eq!(bindings.codes().len(), 4);
    }

    #[test]
    fn ignoring_modifier_strips_the_given_mask() {
        let code = KeyCode::new(ModMask::SUPER | ModMask::SHIFT, 24);

        assert_eq!(
            code.ignoring_modifier(ModMask::SHIFT),
            KeyCode::new(ModMask::SUPER, 24)
        );
    }

    fn test_buttons() -> ButtonBindings {
        ButtonBindings::new(vec![
            ButtonBinding::new(
                ClickContext::ClientWindow,
                ModMask::SUPER,
                MouseButton::Left,
                Action::MoveMouse,
            ),
            ButtonBinding::new(
                ClickContext::LayoutSymbol,
                ModMask::empty(),
                MouseButton::Left,
                Action::SetLayout(None),
            ),
        ])
    }

    #[test_case(
        ClickContext::ClientWindow, ModMask::SUPER, MouseButton::Left,
        Some(Action::MoveMouse);
        "client window with modifier"
    )]
    #[test_case(
        ClickContext::LayoutSymbol, ModMask::empty(), MouseButton::Left,
        Some(Action::SetLayout(None));
        "layout symbol unmodified"
    )]
    #[test_case(
        ClickContext::ClientWindow, ModMask::empty(), MouseButton::Left,
        None;
        "same region without the modifier"
    )]
    #[test_case(
        ClickContext::RootWindow, ModMask::SUPER, MouseButton::Left,
        None;
        "same trigger in an unbound region"
    )]
    #[test]
    fn button_resolution_is_keyed_on_context(
        context: ClickContext,
        mask: ModMask,
        button: MouseButton,
        expected: Option<Action>,
    ) {
        let bindings = test_buttons();

        assert_eq!(
            bindings.action_for(context, mask, button),
            expected.as_ref()
        );
    }

    #[test]
    fn duplicate_button_rows_are_reported_as_shadowed() {
        let mut rows: Vec<ButtonBinding> = test_buttons().iter().cloned().collect();
        rows.push(ButtonBinding::new(
            ClickContext::ClientWindow,
            ModMask::SUPER,
            MouseButton::Left,
            Action::ResizeMouse,
        ));

        let bindings = ButtonBindings::new(rows);

        assert_eq!(bindings.shadowed().len(), 1);
    }

    #[test]
    fn modifier_parsing_rejects_unknown_prefixes() {
        assert!(ModifierKey::try_from("M").is_ok());
        assert!(matches!(
            ModifierKey::try_from("W"),
            Err(crate::Error::UnknownModifier(_))
        ));
    }
}
