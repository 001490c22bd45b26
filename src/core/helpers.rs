//! Resolving user facing key binding patterns against the active keymap.
use crate::{
    core::bindings::{CodeMap, KeyCode, ModMask, ModifierKey},
    Error, Result,
};
use std::process::Command;
use tracing::trace;

/// Run `xmodmap -pke` to dump the system keymap table in a form that we can
/// load in and convert back to key codes.
///
/// This lets bindings be declared against the key names the user already
/// knows from their keymap, and makes odd binding behaviour debuggable by
/// diffing against the same xmodmap output.
pub fn keycodes_from_xmodmap() -> Result<CodeMap> {
    let output = Command::new("xmodmap").arg("-pke").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    Ok(parse_xmodmap_output(&stdout))
}

/// Parse the output of `xmodmap -pke` into a key-name to keycode map.
///
/// Lines are of the form `keycode <code> = <name> <name> ...`; malformed
/// lines are skipped rather than treated as fatal.
pub fn parse_xmodmap_output(raw: &str) -> CodeMap {
    raw.lines()
        .flat_map(|line| {
            let mut words = line.split_whitespace();
            let code: Option<u8> = words.nth(1).and_then(|w| w.parse().ok());

            words
                .skip(1) // the '='
                .filter_map(move |name| code.map(|c| (name.to_string(), c)))
        })
        .collect()
}

/// Parse a `"M-S-q"` style binding pattern into a concrete [KeyCode].
///
/// The final `-` separated element is the key name, resolved through the
/// given [CodeMap]; everything before it is a modifier prefix:
///
/// - `M` - Super
/// - `A` - Alt
/// - `C` - Ctrl
/// - `S` - Shift
///
/// Key names should match those output by `xmodmap -pke`.
pub fn parse_key_pattern(pattern: &str, known_codes: &CodeMap) -> Result<KeyCode> {
    let mut parts: Vec<&str> = pattern.split('-').collect();
    let name = match parts.pop() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Error::InvalidKeyPattern(pattern.to_string())),
    };

    let code = *known_codes
        .get(name)
        .ok_or_else(|| Error::UnknownKeyName(name.to_string()))?;

    let mut mask = ModMask::empty();
    for part in parts {
        mask |= ModMask::from(ModifierKey::try_from(part)?);
    }

    trace!(%pattern, ?mask, code, "parsed key binding pattern");

    Ok(KeyCode { mask, code })
}
