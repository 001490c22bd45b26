//! Girih is the configuration layer of a dwm-style X11 window manager: the
//! static tables (key bindings, mouse bindings, window placement rules, tags,
//! layouts, color schemes, scratchpads) that the hosting engine loads once at
//! startup and dispatches into for every input event.
//!
//! The engine itself is deliberately out of scope. There is no event loop, no
//! X protocol handling and no tiling algorithm here: the engine hands us an
//! event (a key press, a button press, a newly mapped window) and we resolve
//! it against the tables to a typed [Action] or [Placement][1] that the engine
//! then carries out. Lookups that find no match resolve to "do nothing" rather
//! than an error: a bad binding should never take down the session.
//!
//! All tables are immutable once constructed. The only mutable runtime state
//! in this crate is the scratchpad registry, which tracks which window (if
//! any) currently claims each scratchpad.
//!
//! [1]: crate::core::rules::Placement
#[macro_use]
pub mod macros;

pub mod builtin;
pub mod core;
pub mod util;

// top level re-exports
pub use crate::core::{
    actions::{Action, TagSelection},
    appearance::{Appearance, Color, ColorScheme, ColorSchemes, UiState},
    bindings::{
        ButtonBinding, ButtonBindings, ClickContext, CodeMap, KeyBinding, KeyBindings, KeyCode,
        ModMask, ModifierKey, MouseButton,
    },
    helpers::{keycodes_from_xmodmap, parse_key_pattern},
    layout::{Arrange, Layout, LayoutParams, Layouts},
    rules::{ClientProps, Placement, Rule, Rules},
    scratchpad::{ScratchpadAction, ScratchpadEntry, Scratchpads},
    tags::{TagMask, Tags},
    Config,
};

/// Enum to store the various ways that building or querying configuration can fail
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An external command vector was empty
    #[error("external command vectors require at least a program name")]
    EmptyCommand,

    /// A color string could not be parsed
    #[error("'{0}' is not a valid #rrggbb hex color")]
    InvalidHexColor(String),

    /// A key binding pattern was malformed
    #[error("'{0}' is not a valid key binding pattern")]
    InvalidKeyPattern(String),

    /// A layout direct-select index was out of range for the layout table
    #[error("layout index {index} is out of range: {n_layouts} layouts are defined")]
    InvalidLayoutIndex {
        /// The requested index
        index: usize,
        /// The number of layouts in the table
        n_layouts: usize,
    },

    /// A scratchpad index was out of range for the scratchpad list
    #[error("scratchpad index {index} is out of range: {n_scratchpads} scratchpads are defined")]
    InvalidScratchpadIndex {
        /// The requested index
        index: usize,
        /// The number of scratchpads defined
        n_scratchpads: usize,
    },

    /// A binding can never fire because an earlier one claims the same trigger
    #[error("binding '{pattern}' is shadowed by an earlier binding to a different action")]
    ShadowedBinding {
        /// The user-facing pattern of the unreachable binding
        pattern: String,
    },

    /// The reserved tag bits and the scratchpad list disagree
    #[error("{n_reserved} reserved scratchpad tags for {n_scratchpads} scratchpads")]
    ScratchpadTagMismatch {
        /// Tag bits reserved above the named tags
        n_reserved: usize,
        /// Number of scratchpads defined
        n_scratchpads: usize,
    },

    /// Spawning an external process failed
    #[error("unable to spawn external process: {0}")]
    Spawn(#[from] std::io::Error),

    /// The tag list and reserved scratchpad tags do not fit in the tag mask
    #[error("{n_tags} tags + {n_reserved} reserved scratchpad tags exceed the {width} bit tag mask")]
    TagMaskOverflow {
        /// Number of named, user visible tags
        n_tags: usize,
        /// Number of tag bits reserved for scratchpads
        n_reserved: usize,
        /// Bit width of the tag mask
        width: u32,
    },

    /// A key name that is not present in the active keymap
    #[error("'{0}' is not a key name known to the current keymap")]
    UnknownKeyName(String),

    /// A modifier prefix other than M / A / C / S was used in a binding pattern
    #[error("'{0}' is not a known modifier (expected M, A, C or S)")]
    UnknownModifier(String),

    /// Captured output from a spawned process was invalid
    #[error("invalid utf8 from spawned process: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A Result where the error type is a girih [Error]
pub type Result<T> = std::result::Result<T, Error>;
