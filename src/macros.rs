//! Utility macros for constructing configuration tables.

/// Build an owned command vector for use with [spawn_cmd][crate::util::spawn_cmd],
/// [ScratchpadEntry][crate::core::scratchpad::ScratchpadEntry] or
/// [Action::Spawn][crate::core::actions::Action].
///
/// ```
/// # #[macro_use] extern crate girih;
/// let term = cmd!["st", "-t", "scratchpad", "-g", "120x34"];
/// assert_eq!(term[0], "st");
/// ```
#[macro_export]
macro_rules! cmd {
    [$($arg:expr),+ $(,)?] => {
        vec![$($arg.to_string()),+]
    };
}

/// Build a command vector that runs a string through `/bin/sh -c`, for
/// commands that need shell expansion.
///
/// ```
/// # #[macro_use] extern crate girih;
/// let c = shcmd!("pamixer -i 5 && pkill -RTMIN+10 dwmblocks");
/// assert_eq!(c[0], "/bin/sh");
/// ```
#[macro_export]
macro_rules! shcmd {
    ($cmd:expr) => {
        vec![
            "/bin/sh".to_string(),
            "-c".to_string(),
            $cmd.to_string(),
        ]
    };
}

/// Construct an ordered [KeyBindings][crate::core::bindings::KeyBindings]
/// table from `"M-S-q"` style patterns.
///
/// Declaration order is preserved: when two rows share a trigger, only the
/// first is ever reachable. Patterns are resolved against the given
/// [CodeMap][crate::core::bindings::CodeMap] and the whole table evaluates to
/// a `Result`, failing on the first pattern that references an unknown
/// modifier or key name.
///
/// ```
/// # #[macro_use] extern crate girih;
/// use girih::{Action, CodeMap};
///
/// let codes: CodeMap = [("Return".to_string(), 36)].into_iter().collect();
/// let keys = key_bindings! {
///     &codes;
///     "M-Return" => Action::Spawn(cmd!["st"]),
/// }
/// .unwrap();
///
/// assert_eq!(keys.len(), 1);
/// ```
#[macro_export]
macro_rules! key_bindings {
    {
        $codes:expr;
        $($pattern:expr => $action:expr),+ $(,)?
    } => {{
        let codes: &$crate::core::bindings::CodeMap = $codes;
        let build = || -> $crate::Result<$crate::core::bindings::KeyBindings> {
            let mut bindings = $crate::core::bindings::KeyBindings::default();
            $(
              bindings.push($crate::core::bindings::KeyBinding::parse($pattern, $action, codes)?);
            )+
            Ok(bindings)
        };

        build()
    }};
}
