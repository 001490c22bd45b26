//! The built-in default configuration.
//!
//! This is the girih equivalent of dwm's `config.def.h`: a complete, working
//! table set to start from. Engines are expected to copy this function into
//! their own tree and edit it rather than configure around it.
use crate::{
    core::{
        actions::{Action, TagSelection},
        appearance::Appearance,
        bindings::{
            ButtonBinding, ButtonBindings, ClickContext, CodeMap, ModMask, MouseButton,
        },
        layout::{Arrange, Layout, LayoutParams, Layouts},
        rules::{Rule, Rules},
        scratchpad::ScratchpadEntry,
        tags::{tag_key_bindings, TagMask, Tags},
        Config,
    },
    Result,
};

/// The modifier all default bindings hang off: Super (Mod4)
pub const MODKEY: ModMask = ModMask::SUPER;

/// Build the default configuration against the given keymap.
///
/// A [CodeMap] is required because key binding patterns can only be resolved
/// against the active keymap; see
/// [keycodes_from_xmodmap][crate::core::helpers::keycodes_from_xmodmap].
///
/// The returned [Config] has already been validated.
pub fn default_config(codes: &CodeMap) -> Result<Config> {
    let scratchpads = vec![ScratchpadEntry::new(
        "scratchpad",
        cmd!["st", "-t", "scratchpad", "-g", "120x34"],
    )];

    let tags = Tags::new(
        ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
        scratchpads.len(),
    )?;

    let rules = Rules::new(vec![
        Rule::new().class("Thunar"),
        Rule::new().class("mpv").tags(TagMask::for_index(3)).floating(),
        Rule::new().title("scratchpad").floating(),
    ]);

    let layouts = Layouts::new(vec![
        Layout::tiled("[]=", Arrange::Tile),
        Layout::tiled("TTT", Arrange::BottomStack),
        Layout::tiled("[M]", Arrange::Monocle),
        Layout::floating("><>"),
    ]);

    let mut keys = key_bindings! {
        codes;

        // window management
        "M-q" => Action::KillClient,
        "M-f" => Action::FullScreen,
        "M-S-space" => Action::ToggleFloating,

        // focus and movement, vi style on h/j/k/l
        "M-h" => Action::FocusStack(-1),
        "M-l" => Action::FocusStack(1),
        "M-j" => Action::FocusStack(1),
        "M-k" => Action::FocusStack(-1),
        "M-S-h" => Action::MoveStack(-1),
        "M-S-l" => Action::MoveStack(1),
        "M-S-j" => Action::MoveStack(1),
        "M-S-k" => Action::MoveStack(-1),

        // layout control
        "M-z" => Action::SetLayout(Some(0)),
        "M-v" => Action::SetLayout(Some(1)),
        "M-s" => Action::SetLayout(Some(2)),
        "M-w" => Action::SetLayout(Some(2)),
        "M-e" => Action::SetLayout(None),

        // main area factor
        "M-C-h" => Action::SetMainRatio(-0.05),
        "M-C-l" => Action::SetMainRatio(0.05),

        // scratchpad
        "M-n" => Action::ToggleScratchpad(0),
        "M-S-n" => Action::ToggleScratchpad(0),

        // bar, gaps, last-viewed tags
        "M-C-b" => Action::ToggleBar,
        "M-Tab" => Action::View(TagSelection::Previous),
        "M-A-0" => Action::ToggleGaps,
        "M-A-u" => Action::IncGaps(1),
        "M-A-S-u" => Action::IncGaps(-1),

        // session control
        "M-S-c" => Action::Quit { restart: true },
        "M-S-q" => Action::Quit { restart: false },
    }?;

    keys.append(tag_key_bindings(&tags, codes)?);

    let buttons = ButtonBindings::new(vec![
        ButtonBinding::new(
            ClickContext::LayoutSymbol,
            ModMask::empty(),
            MouseButton::Left,
            Action::SetLayout(None),
        ),
        ButtonBinding::new(
            ClickContext::WindowTitle,
            ModMask::empty(),
            MouseButton::Middle,
            Action::Zoom,
        ),
        ButtonBinding::new(
            ClickContext::ClientWindow,
            MODKEY,
            MouseButton::Left,
            Action::MoveMouse,
        ),
        ButtonBinding::new(
            ClickContext::ClientWindow,
            MODKEY,
            MouseButton::Middle,
            Action::ToggleFloating,
        ),
        ButtonBinding::new(
            ClickContext::ClientWindow,
            MODKEY,
            MouseButton::Right,
            Action::ResizeMouse,
        ),
        ButtonBinding::new(
            ClickContext::TagBar,
            ModMask::empty(),
            MouseButton::Left,
            Action::View(TagSelection::Previous),
        ),
        ButtonBinding::new(
            ClickContext::TagBar,
            ModMask::empty(),
            MouseButton::Right,
            Action::ToggleView(TagSelection::Previous),
        ),
        ButtonBinding::new(
            ClickContext::TagBar,
            MODKEY,
            MouseButton::Left,
            Action::MoveToTag(TagSelection::Previous),
        ),
        ButtonBinding::new(
            ClickContext::TagBar,
            MODKEY,
            MouseButton::Right,
            Action::ToggleTag(TagSelection::Previous),
        ),
    ]);

    let config = Config {
        appearance: Appearance::default(),
        tags,
        rules,
        layouts,
        layout_params: LayoutParams::default(),
        keys,
        buttons,
        scratchpads,
        autostart: Some(shcmd!("~/.config/scripts/autostart.sh")),
    };

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bindings::KeyCode;

    fn test_codes() -> CodeMap {
        [
            "q", "f", "space", "h", "j", "k", "l", "z", "v", "s", "w", "e", "n", "b", "u", "c",
            "Tab", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), i as u8 + 10))
        .collect()
    }

    #[test]
    fn the_default_config_validates() {
        // default_config validates internally; this also pins the table sizes
        let config = default_config(&test_codes()).unwrap();

        assert_eq!(config.keys.len(), 27 + 40);
        assert_eq!(config.buttons.len(), 9);
        assert_eq!(config.layouts.len(), 4);
        assert_eq!(config.tags.len(), 10);
    }

    #[test]
    fn duplicate_scratch_bindings_resolve_to_the_same_action() {
        let config = default_config(&test_codes()).unwrap();
        let codes = test_codes();
        let n = codes["n"];

        let plain = config.action_for_key(KeyCode::new(ModMask::SUPER, n));
        let shifted = config.action_for_key(KeyCode::new(ModMask::SUPER | ModMask::SHIFT, n));

        assert_eq!(plain, Some(&Action::ToggleScratchpad(0)));
        assert_eq!(shifted, Some(&Action::ToggleScratchpad(0)));
    }

    #[test]
    fn quit_and_restart_are_distinct_bindings() {
        let config = default_config(&test_codes()).unwrap();
        let codes = test_codes();

        let quit = config.action_for_key(KeyCode::new(
            ModMask::SUPER | ModMask::SHIFT,
            codes["q"],
        ));
        let restart = config.action_for_key(KeyCode::new(
            ModMask::SUPER | ModMask::SHIFT,
            codes["c"],
        ));

        assert_eq!(quit, Some(&Action::Quit { restart: false }));
        assert_eq!(restart, Some(&Action::Quit { restart: true }));
    }
}
