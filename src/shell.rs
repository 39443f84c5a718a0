//! Shell escaping for pane commands.
//!
//! Pane commands are delivered to the target shell via `tmux send-keys`, so
//! every command string passes through one more round of shell parsing than
//! the user wrote. Escaping here guarantees the command arrives byte-for-byte.

/// Quote `s` so a POSIX shell treats it as a single literal word.
///
/// Strings made entirely of safe characters pass through untouched.
/// Everything else is wrapped in single quotes, with embedded single
/// quotes rewritten as `'\''`.
pub fn escape(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s.bytes().all(is_safe) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

fn is_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'/' | b':' | b'=' | b'@' | b'%' | b'+' | b',')
}
