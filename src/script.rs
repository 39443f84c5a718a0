//! Layout-to-shell-script compilation.
//!
//! Turns a fully resolved [`Layout`] into a newline-joined script of tmux
//! commands. Identifiers produced by one command are threaded into the next
//! through shell variables: `SESSION_NO`, `WINDOW_NO`, and `PANE_NO` hold the
//! targets printed by `new-session -P`, `new-window -P`, and
//! `split-window -P`.
//!
//! Compilation is a pure string-building function: no I/O, deterministic for
//! identical input. Whether the script is printed or executed is the
//! caller's business.
//!
//! # First-window/first-pane binding
//!
//! `tmux new-session` implicitly creates one window, and window creation
//! implicitly creates one pane. The compiler therefore binds the first
//! window's variable straight to the session id and the first pane's
//! variable straight to the window id instead of issuing creation commands.
//! Always issuing a creation command would double the window and pane count.

use crate::config::{Layout, Pane, Window};
use crate::shell;

/// Compile a layout into a shell script that recreates it in tmux.
///
/// The script creates the session detached, builds every window and pane in
/// declaration order, sends each non-empty pane command followed by a
/// carriage return, and finishes by either attaching to the session
/// (`attach` unset or true) or echoing the session id (`attach: false`).
pub fn render(layout: &Layout) -> String {
    let mut script = String::new();

    if let Some(root) = layout.root.as_deref().filter(|r| !r.is_empty()) {
        script.push_str(&format!("cd {}\n", root));
    }

    match layout.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => {
            script.push_str(&format!("SESSION_NO=`tmux new-session -dP -s {}`\n", name));
        }
        None => script.push_str("SESSION_NO=`tmux new-session -dP`\n"),
    }

    for (key, value) in &layout.env {
        script.push_str(&format!(
            "tmux set-environment -t $SESSION_NO {} {}\n",
            key,
            shell::escape(value)
        ));
    }
    script.push('\n');

    for (idx, window) in layout.windows.iter().enumerate() {
        render_window(&mut script, window, idx == 0);
    }

    match layout.attach {
        Some(false) => script.push_str("echo $SESSION_NO\n"),
        _ => script.push_str("tmux attach-session -t $SESSION_NO\n"),
    }

    script
}

fn render_window(script: &mut String, window: &Window, is_first: bool) {
    if is_first {
        // The session's implicit first window.
        script.push_str("WINDOW_NO=$SESSION_NO\n");
    } else {
        script.push_str("WINDOW_NO=`tmux new-window -t $SESSION_NO -a -P`\n");
    }

    for (idx, pane) in window.panes.iter().enumerate() {
        render_pane(script, pane, idx == 0);
    }

    script.push('\n');
}

fn render_pane(script: &mut String, pane: &Pane, is_first: bool) {
    if is_first {
        // The window's implicit first pane.
        script.push_str("PANE_NO=$WINDOW_NO\n");
    } else {
        script.push_str("PANE_NO=`tmux split-window -t $WINDOW_NO -P`\n");
    }

    if !pane.command.is_empty() {
        script.push_str(&format!(
            "tmux send-keys -t $PANE_NO {} C-m\n",
            shell::escape(&pane.command)
        ));
    }
}
