//! Hands the generated script to a shell.
//!
//! The calling process is replaced outright, so an attach command at the end
//! of the script leaves the user inside tmux with no muxup process behind it.

use crate::error::{MuxupError, Result};
use std::os::unix::process::CommandExt;
use std::process::Command;

/// Replace the current process with `sh -e -c <script>`.
///
/// With `debug` set the shell also gets `-x`, echoing each command before
/// running it. `-e` aborts the script on the first failing tmux command.
///
/// On success this function does not return. It only returns when the
/// `exec` itself fails, always with [`MuxupError::ExecError`].
pub fn replace_with_shell(script: &str, debug: bool) -> Result<()> {
    let opts = if debug { "-xe" } else { "-e" };
    let err = Command::new("sh").args([opts, "-c", script]).exec();
    Err(MuxupError::ExecError(err))
}
