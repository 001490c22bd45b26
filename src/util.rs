//! Utility functions for use by engines embedding this crate.
use crate::{Error, Result};
use std::process::{Command, Stdio};
use tracing::info;

/// Spawn an external command vector as a fire-and-forget child process.
///
/// The first element is the program, the rest its arguments; stdout and
/// stderr are redirected to /dev/null and the child is never waited on.
/// This is what `Action::Spawn`, scratchpad commands and the autostart
/// command are run with.
pub fn spawn_cmd(cmd: &[String]) -> Result<()> {
    let (prog, args) = cmd.split_first().ok_or(Error::EmptyCommand)?;

    info!(%prog, ?args, "spawning external command");
    Command::new(prog)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}

/// Spawn a whitespace separated command string as a fire-and-forget child
/// process.
///
/// Convenience wrapper over [spawn_cmd] for commands that need no quoting;
/// anything with shell-significant arguments should build a vector with
/// [cmd!][crate::cmd] or [shcmd!][crate::shcmd] instead.
pub fn spawn<S: Into<String>>(cmd: S) -> Result<()> {
    let s = cmd.into();
    let parts: Vec<String> = s.split_whitespace().map(String::from).collect();

    spawn_cmd(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_commands_are_rejected() {
        assert!(matches!(spawn_cmd(&[]), Err(Error::EmptyCommand)));
        assert!(matches!(spawn(""), Err(Error::EmptyCommand)));
    }

    #[test]
    fn shcmd_builds_a_shell_invocation() {
        let cmd = shcmd!("echo hi && echo bye");

        assert_eq!(
            cmd,
            vec!["/bin/sh".to_string(), "-c".into(), "echo hi && echo bye".into()]
        );
    }

    #[test]
    fn spawning_a_real_command_detaches() {
        // `true` exits immediately; we only assert that spawning does not
        // error or block
        spawn("true").unwrap();
    }
}
