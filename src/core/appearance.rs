//! Colors, gaps, fonts and the other visual constants the engine draws with.
use crate::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{Display, EnumIter};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(u32);

impl Color {
    /// Construct a color from a packed `0xRRGGBB` value
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    /// The packed `0xRRGGBB` value of this color
    pub const fn rgb_u32(self) -> u32 {
        self.0
    }

    /// The (red, green, blue) channels of this color
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
        )
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a `#rrggbb` hex color string
    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidHexColor(s.to_string()))?;

        if hex.len() != 6 {
            return Err(Error::InvalidHexColor(s.to_string()));
        }

        u32::from_str_radix(hex, 16)
            .map(Self::new)
            .map_err(|_| Error::InvalidHexColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// The UI states a color scheme can be resolved for.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UiState {
    /// Unfocused windows and inactive bar sections
    Normal,
    /// The focused window and active bar sections
    Selected,
}

/// A color scheme is simply a foreground, background and border color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorScheme {
    /// Foreground (text) color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Window border color
    pub border: Color,
}

/// Exactly one [ColorScheme] per [UiState].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorSchemes {
    /// Scheme for [UiState::Normal]
    pub normal: ColorScheme,
    /// Scheme for [UiState::Selected]
    pub selected: ColorScheme,
}

impl ColorSchemes {
    /// Resolve the scheme for a UI state
    pub fn scheme(&self, state: UiState) -> &ColorScheme {
        match state {
            UiState::Normal => &self.normal,
            UiState::Selected => &self.selected,
        }
    }
}

impl Default for ColorSchemes {
    // Doom One
    fn default() -> Self {
        let bg = Color::new(0x282c34);
        let fg = Color::new(0xbbc2cf);
        let gray = Color::new(0x5b6268);
        let blue = Color::new(0x51afef);
        let green = Color::new(0x98be65);

        Self {
            normal: ColorScheme {
                fg,
                bg,
                border: gray,
            },
            selected: ColorScheme {
                fg,
                bg: blue,
                border: green,
            },
        }
    }
}

/// Gap sizes between windows and around the screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gaps {
    /// Horizontal inner gap between windows (px)
    pub inner_h: u32,
    /// Vertical inner gap between windows (px)
    pub inner_v: u32,
    /// Horizontal outer gap between windows and screen edge (px)
    pub outer_h: u32,
    /// Vertical outer gap between windows and screen edge (px)
    pub outer_v: u32,
    /// Drop the outer gap when only one window is visible
    pub smart: bool,
}

impl Default for Gaps {
    fn default() -> Self {
        Self {
            inner_h: 10,
            inner_v: 10,
            outer_h: 10,
            outer_v: 10,
            smart: true,
        }
    }
}

/// Bar placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bar {
    /// Show the bar at all
    pub show: bool,
    /// Place the bar at the top of the screen rather than the bottom
    pub top: bool,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            show: true,
            top: true,
        }
    }
}

/// System tray placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Systray {
    /// Show the systray at all
    pub show: bool,
    /// Pin the systray to a specific monitor (None = follow the focused
    /// monitor)
    pub pinned_monitor: Option<usize>,
    /// Fall back to the first monitor when the pinned one is missing, rather
    /// than the last
    pub pinning_fail_first: bool,
    /// Place the systray on the left end of the bar rather than the right
    pub on_left: bool,
    /// Spacing between systray icons (px)
    pub spacing: u32,
}

impl Default for Systray {
    fn default() -> Self {
        Self {
            show: true,
            pinned_monitor: None,
            pinning_fail_first: true,
            on_left: false,
            spacing: 2,
        }
    }
}

/// The full set of visual constants for the engine.
///
/// Defaults reproduce the stock configuration; engines embedding this crate
/// usually take `Appearance::default()` and override a field or two.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Appearance {
    /// Window border width (px)
    pub border_px: u32,
    /// Snap distance for floating window moves (px)
    pub snap: u32,
    /// Gap sizes
    pub gaps: Gaps,
    /// Ordered font fallback chain, in fontconfig pattern syntax
    pub fonts: Vec<String>,
    /// The per-state color schemes
    pub schemes: ColorSchemes,
    /// Bar placement
    pub bar: Bar,
    /// Systray placement
    pub systray: Systray,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            border_px: 2,
            snap: 32,
            gaps: Gaps::default(),
            fonts: vec![
                "DejaVu Sans Mono:size=11".to_string(),
                "JetBrainsMono Nerd Font:size=12".to_string(),
            ],
            schemes: ColorSchemes::default(),
            bar: Bar::default(),
            systray: Systray::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case("#282c34", 0x282c34; "doom one background")]
    #[test_case("#000000", 0; "black")]
    #[test_case("#FFFFFF", 0xffffff; "uppercase white")]
    #[test]
    fn valid_hex_colors_parse(s: &str, rgb: u32) {
        assert_eq!(s.parse::<Color>().unwrap(), Color::new(rgb));
    }

    #[test_case("282c34"; "missing hash")]
    #[test_case("#282c3"; "too short")]
    #[test_case("#282c344"; "too long")]
    #[test_case("#28zc34"; "invalid digit")]
    #[test_case(""; "empty")]
    #[test]
    fn invalid_hex_colors_error(s: &str) {
        assert!(matches!(
            s.parse::<Color>(),
            Err(Error::InvalidHexColor(raw)) if raw == s
        ));
    }

    #[test]
    fn colors_display_as_lowercase_hex() {
        assert_eq!(Color::new(0x51AFEF).to_string(), "#51afef");
    }

    #[test]
    fn channel_accessors_unpack_the_color() {
        assert_eq!(Color::new(0x51afef).rgb(), (0x51, 0xaf, 0xef));
    }

    #[test]
    fn each_ui_state_has_its_own_scheme() {
        let schemes = ColorSchemes::default();

        assert_eq!(schemes.scheme(UiState::Normal).bg, Color::new(0x282c34));
        assert_eq!(schemes.scheme(UiState::Selected).bg, Color::new(0x51afef));
        assert_ne!(
            schemes.scheme(UiState::Normal).border,
            schemes.scheme(UiState::Selected).border
        );
    }
}
