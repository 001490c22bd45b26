//! Core configuration tables and their resolution operations.
pub mod actions;
pub mod appearance;
pub mod bindings;
pub mod helpers;
pub mod layout;
pub mod rules;
pub mod scratchpad;
pub mod tags;

use crate::{
    core::{
        actions::Action,
        appearance::{Appearance, ColorScheme, UiState},
        bindings::{ButtonBindings, ClickContext, KeyBindings, KeyCode, ModMask, MouseButton},
        layout::{Layout, LayoutParams, Layouts},
        rules::{ClientProps, Placement, Rules},
        scratchpad::ScratchpadEntry,
        tags::Tags,
    },
    Error, Result,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The full configuration table set consumed by the engine.
///
/// Built once at startup and read-only from then on: every field is plain
/// data and there is no mutation API. Event-time access goes through the
/// resolution methods, all of which degrade to "no action" on a miss rather
/// than erroring (see the crate level docs).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Visual constants
    pub appearance: Appearance,
    /// Named workspace tags and reserved scratchpad bits
    pub tags: Tags,
    /// Window placement rules
    pub rules: Rules,
    /// The layout table
    pub layouts: Layouts,
    /// Shared tiled-layout parameters
    pub layout_params: LayoutParams,
    /// The key binding table
    pub keys: KeyBindings,
    /// The button binding table
    pub buttons: ButtonBindings,
    /// Scratchpad definitions, in reserved-tag-bit order
    pub scratchpads: Vec<ScratchpadEntry>,
    /// Command to spawn once at startup, if any
    pub autostart: Option<Vec<String>>,
}

impl Config {
    /// Check the cross-table invariants that the type system cannot.
    ///
    /// - one tag bit is reserved per scratchpad (mask width itself is
    ///   enforced when the [Tags] list is built)
    /// - every `SetLayout(Some(i))` binding selects an existing layout
    /// - every `ToggleScratchpad(i)` binding names a defined scratchpad
    /// - no binding is shadowed by an earlier binding to a different action
    ///   (identical duplicates are only warned about: they are redundant but
    ///   behave as written)
    ///
    /// Run this once after constructing a configuration; the resolution
    /// methods themselves stay fail-open and do no validation.
    pub fn validate(&self) -> Result<()> {
        if self.tags.n_reserved() != self.scratchpads.len() {
            return Err(Error::ScratchpadTagMismatch {
                n_reserved: self.tags.n_reserved(),
                n_scratchpads: self.scratchpads.len(),
            });
        }

        for action in self.actions() {
            match *action {
                Action::SetLayout(Some(index)) => {
                    self.layouts.get(index)?;
                }
                Action::ToggleScratchpad(index) if index >= self.scratchpads.len() => {
                    return Err(Error::InvalidScratchpadIndex {
                        index,
                        n_scratchpads: self.scratchpads.len(),
                    });
                }
                _ => (),
            }
        }

        for (earlier, shadowed) in self.keys.shadowed() {
            if earlier.action != shadowed.action {
                return Err(Error::ShadowedBinding {
                    pattern: shadowed.pattern.clone(),
                });
            }

            warn!(pattern = %shadowed.pattern, "duplicate key binding is redundant");
        }

        for (earlier, shadowed) in self.buttons.shadowed() {
            if earlier.action != shadowed.action {
                return Err(Error::ShadowedBinding {
                    pattern: format!("{} {:?} {:?}", shadowed.context, shadowed.mask, shadowed.button),
                });
            }

            warn!(context = %shadowed.context, "duplicate button binding is redundant");
        }

        Ok(())
    }

    /// Resolve a key event to its bound action, if any
    pub fn action_for_key(&self, code: KeyCode) -> Option<&Action> {
        self.keys.action_for(code)
    }

    /// Resolve a button event to its bound action, if any
    pub fn action_for_button(
        &self,
        context: ClickContext,
        mask: ModMask,
        button: MouseButton,
    ) -> Option<&Action> {
        self.buttons.action_for(context, mask, button)
    }

    /// Resolve a newly managed window to its placement
    pub fn placement(&self, props: &ClientProps) -> Placement {
        self.rules.placement(props, self.tags.valid_mask())
    }

    /// Resolve the color scheme for a UI state
    pub fn scheme(&self, state: UiState) -> &ColorScheme {
        self.appearance.schemes.scheme(state)
    }

    /// Direct-select lookup into the layout table
    pub fn layout(&self, index: usize) -> Result<&Layout> {
        self.layouts.get(index)
    }

    fn actions(&self) -> impl Iterator<Item = &Action> {
        self.keys
            .iter()
            .map(|b| &b.action)
            .chain(self.buttons.iter().map(|b| &b.action))
    }
}
