//! Toggleable floating scratchpad programs.
//!
//! A scratchpad is a named command (typically a terminal) that can be shown
//! and hidden with a single binding. The configuration side is just the name
//! and command vector; [Scratchpads] is the small piece of runtime state that
//! tracks which window currently claims each scratchpad, so that toggling
//! twice shows then hides the same window rather than spawning a second
//! process.
use crate::core::rules::ClientProps;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A named toggleable scratchpad program.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScratchpadEntry {
    /// Name used to recognise the scratchpad's window when it is managed.
    ///
    /// The spawned command must produce a window whose title or instance
    /// contains this name: for a terminal that means passing it as the window
    /// title (`st -t <name>`) or instance (`st -n <name>`).
    pub name: String,
    /// The command vector to spawn when no window claims this scratchpad
    pub cmd: Vec<String>,
}

impl ScratchpadEntry {
    /// Define a scratchpad by name and spawn command
    pub fn new(name: impl Into<String>, cmd: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cmd,
        }
    }
}

/// What the engine should do in response to a scratchpad toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScratchpadAction<W> {
    /// No window claims the scratchpad: spawn this command. The window it
    /// maps will be claimed via [Scratchpads::on_manage].
    Spawn(Vec<String>),
    /// This window claims the scratchpad: toggle its visibility.
    Toggle(W),
}

/// Runtime registry tracking which window claims each scratchpad.
///
/// Generic over the engine's window id type. The entries themselves are
/// immutable; only the claims change, driven by the engine's manage / unmap
/// notifications.
#[derive(Debug, Clone)]
pub struct Scratchpads<W> {
    entries: Vec<ScratchpadEntry>,
    clients: Vec<Option<W>>,
}

impl<W: Copy + PartialEq> Scratchpads<W> {
    /// Build a registry for the given entries, with nothing claimed yet
    pub fn new(entries: Vec<ScratchpadEntry>) -> Self {
        let clients = vec![None; entries.len()];

        Self { entries, clients }
    }

    /// The number of scratchpads defined
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no scratchpads are defined
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the scratchpad entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ScratchpadEntry> {
        self.entries.iter()
    }

    /// The window currently claiming the scratchpad at `index`, if any
    pub fn client(&self, index: usize) -> Option<W> {
        self.clients.get(index).copied().flatten()
    }

    /// Resolve a toggle of the scratchpad at `index`.
    ///
    /// An unknown index is ignored with a warning rather than treated as an
    /// error: it means a stale binding, which should never take down the
    /// session.
    pub fn toggle(&self, index: usize) -> Option<ScratchpadAction<W>> {
        let entry = match self.entries.get(index) {
            Some(entry) => entry,
            None => {
                warn!(index, "toggle called for unknown scratchpad");
                return None;
            }
        };

        match self.clients[index] {
            Some(id) => Some(ScratchpadAction::Toggle(id)),
            None => Some(ScratchpadAction::Spawn(entry.cmd.clone())),
        }
    }

    /// Offer a newly managed window to the registry.
    ///
    /// The first unclaimed scratchpad whose name appears in the window's
    /// title or instance claims it; returns the claiming index so the engine
    /// can tag the window with the scratchpad's reserved tag bit.
    pub fn on_manage(&mut self, id: W, props: &ClientProps) -> Option<usize> {
        for (index, entry) in self.entries.iter().enumerate() {
            if self.clients[index].is_some() {
                continue;
            }

            if props.title.contains(&entry.name) || props.instance.contains(&entry.name) {
                debug!(name = %entry.name, index, "window claimed scratchpad");
                self.clients[index] = Some(id);
                return Some(index);
            }
        }

        None
    }

    /// Release any claim held by a window that is going away
    pub fn on_unmap(&mut self, id: W) {
        for client in self.clients.iter_mut() {
            if *client == Some(id) {
                *client = None;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pads() -> Scratchpads<u32> {
        Scratchpads::new(vec![ScratchpadEntry::new(
            "scratchpad",
            cmd!["st", "-t", "scratchpad", "-g", "120x34"],
        )])
    }

    fn scratch_props() -> ClientProps {
        ClientProps::new("St", "st", "scratchpad")
    }

    #[test]
    fn first_toggle_spawns() {
        let pads = pads();

        assert_eq!(
            pads.toggle(0),
            Some(ScratchpadAction::Spawn(cmd![
                "st",
                "-t",
                "scratchpad",
                "-g",
                "120x34"
            ]))
        );
    }

    #[test]
    fn toggling_twice_reuses_the_same_window() {
        let mut pads = pads();

        assert!(matches!(pads.toggle(0), Some(ScratchpadAction::Spawn(_))));
        assert_eq!(pads.on_manage(42, &scratch_props()), Some(0));

        // both subsequent toggles address the window we claimed, not a new spawn
        assert_eq!(pads.toggle(0), Some(ScratchpadAction::Toggle(42)));
        assert_eq!(pads.toggle(0), Some(ScratchpadAction::Toggle(42)));
    }

    #[test]
    fn unrelated_windows_are_not_claimed() {
        let mut pads = pads();

        assert_eq!(
            pads.on_manage(7, &ClientProps::new("mpv", "gl", "a film")),
            None
        );
        assert_eq!(pads.client(0), None);
    }

    #[test]
    fn unmap_releases_the_claim() {
        let mut pads = pads();

        pads.on_manage(42, &scratch_props());
        pads.on_unmap(42);

        assert_eq!(pads.client(0), None);
        assert!(matches!(pads.toggle(0), Some(ScratchpadAction::Spawn(_))));
    }

    #[test]
    fn a_claimed_scratchpad_ignores_further_candidates() {
        let mut pads = pads();

        pads.on_manage(42, &scratch_props());

        assert_eq!(pads.on_manage(43, &scratch_props()), None);
        assert_eq!(pads.client(0), Some(42));
    }

    #[test]
    fn unknown_indices_are_a_no_op() {
        assert_eq!(pads().toggle(5), None);
    }
}
