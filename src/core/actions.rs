//! The actions that key and button bindings can resolve to.
//!
//! In dwm these are function pointers paired with an untyped argument union.
//! Here each action carries its argument as a typed payload so that the
//! engine can dispatch on a single enum without any unsafe reinterpretation.
use crate::core::tags::TagMask;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The tag set a view / tag action applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TagSelection {
    /// An explicit set of tags
    Mask(TagMask),
    /// Every named tag (dwm's `~0` argument)
    All,
    /// The previously viewed tag set.
    ///
    /// For bindings in the tag bar click context the engine substitutes the
    /// clicked tag before dispatch, matching dwm's handling of a zero tag
    /// argument on `ClkTagBar` buttons.
    Previous,
}

/// A typed action for the engine to run in response to a matched binding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Spawn an external command as a fire-and-forget child process
    Spawn(Vec<String>),
    /// Close the focused client
    KillClient,
    /// Toggle fullscreen on the focused client
    FullScreen,
    /// Toggle floating / tiled state of the focused client
    ToggleFloating,
    /// Toggle bar visibility on the focused monitor
    ToggleBar,
    /// Toggle all window gaps on and off
    ToggleGaps,
    /// Grow (positive) or shrink (negative) all gaps by the given amount
    IncGaps(i32),
    /// Move focus forward (positive) or backward (negative) through the stack
    FocusStack(i32),
    /// Move the focused client forward or backward through the stack
    MoveStack(i32),
    /// Jump to the layout at the given index in the layout table, or toggle
    /// back to the previously selected layout when `None`
    SetLayout(Option<usize>),
    /// Step forward or backward through the layout table in declaration order
    CycleLayout(i32),
    /// Adjust the main area size factor by the given delta
    SetMainRatio(f32),
    /// View the selected tags
    View(TagSelection),
    /// Toggle the selected tags in and out of the current view
    ToggleView(TagSelection),
    /// Move the focused client to the selected tags
    MoveToTag(TagSelection),
    /// Toggle the selected tags on the focused client
    ToggleTag(TagSelection),
    /// Show or hide the scratchpad at the given index
    ToggleScratchpad(usize),
    /// Swap the focused client with the main client
    Zoom,
    /// Start an interactive mouse move of the focused client
    MoveMouse,
    /// Start an interactive mouse resize of the focused client
    ResizeMouse,
    /// Exit the window manager, optionally asking the session to restart it
    Quit {
        /// Restart in place rather than ending the session
        restart: bool,
    },
}
