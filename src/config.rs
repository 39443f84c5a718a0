//! Profile data structures for muxup.
//!
//! This module defines the types that a profile file deserializes into.
//! A profile describes one tmux session: where it starts, what it's called,
//! and a list of windows each containing panes with commands.
//!
//! # Profile Format
//!
//! ```yaml
//! root: ~/src/myapp
//! name: myapp
//! attach: false
//! inherit_from: base
//! env:
//!   RAILS_ENV: development
//! windows:
//!   - panes:
//!       - command: bin/rails s
//!       - command: bundle exec sidekiq
//!   - panes:
//!       - command: gvim
//! ```
//!
//! Every field is optional. Window and pane order is meaningful: it maps
//! directly to tmux window indices and pane split order.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A fully described tmux session layout, as deserialized from a profile file.
///
/// Constructed once per invocation, optionally merged with a parent profile
/// (see [`Layout::merge_onto`]), compiled to a script, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Layout {
    /// Directory to `cd` into before creating the session.
    #[serde(default)]
    pub root: Option<String>,
    /// Session name, passed to `tmux new-session -s`.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether to attach after creation. Unset and `true` both attach;
    /// explicit `false` prints the session id instead.
    #[serde(default)]
    pub attach: Option<bool>,
    /// Windows in declaration order. Order maps to tmux window indices.
    #[serde(default)]
    pub windows: Vec<Window>,
    /// Name of a parent profile to merge underneath this one.
    #[serde(default)]
    pub inherit_from: Option<String>,
    /// Environment variables to set on the session.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// A single tmux window containing panes in split order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Window {
    /// Panes in declaration order. The first pane is the window's implicit
    /// pane; each subsequent pane is created with `split-window`.
    #[serde(default)]
    pub panes: Vec<Pane>,
}

/// A single pane running one command.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pane {
    /// Command to type into the pane. Empty means the pane is left at its
    /// default shell with nothing sent.
    #[serde(default)]
    pub command: String,
}

impl Layout {
    /// Merge this layout over a parent `base`, consuming both.
    ///
    /// Scalar fields (`root`, `name`) override the base when set to a
    /// non-empty string; `attach` overrides when present at all. Window
    /// lists are concatenated, base windows first: inheriting a profile
    /// adds windows on top of the parent's rather than replacing them.
    /// Environment maps are unioned with this layout's entries winning.
    pub fn merge_onto(self, mut base: Layout) -> Layout {
        let Layout {
            root,
            name,
            attach,
            windows,
            inherit_from,
            env,
        } = self;

        if root.as_deref().is_some_and(|r| !r.is_empty()) {
            base.root = root;
        }
        if name.as_deref().is_some_and(|n| !n.is_empty()) {
            base.name = name;
        }
        if attach.is_some() {
            base.attach = attach;
        }
        base.windows.extend(windows);
        base.env.extend(env);
        base.inherit_from = inherit_from;
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(commands: &[&str]) -> Window {
        Window {
            panes: commands
                .iter()
                .map(|c| Pane {
                    command: c.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_merge_empty_child_keeps_base_scalars() {
        let base = Layout {
            root: Some("~/src".to_string()),
            name: Some("dev".to_string()),
            attach: Some(false),
            ..Default::default()
        };
        let child = Layout::default();

        let merged = child.merge_onto(base);
        assert_eq!(merged.root.as_deref(), Some("~/src"));
        assert_eq!(merged.name.as_deref(), Some("dev"));
        assert_eq!(merged.attach, Some(false));
    }

    #[test]
    fn test_merge_child_scalars_win() {
        let base = Layout {
            root: Some("~/src".to_string()),
            name: Some("dev".to_string()),
            attach: Some(true),
            ..Default::default()
        };
        let child = Layout {
            root: Some("~/work".to_string()),
            name: Some("work".to_string()),
            attach: Some(false),
            ..Default::default()
        };

        let merged = child.merge_onto(base);
        assert_eq!(merged.root.as_deref(), Some("~/work"));
        assert_eq!(merged.name.as_deref(), Some("work"));
        assert_eq!(merged.attach, Some(false));
    }

    #[test]
    fn test_merge_empty_string_does_not_override() {
        let base = Layout {
            name: Some("dev".to_string()),
            ..Default::default()
        };
        let child = Layout {
            name: Some(String::new()),
            ..Default::default()
        };

        let merged = child.merge_onto(base);
        assert_eq!(merged.name.as_deref(), Some("dev"));
    }

    #[test]
    fn test_merge_windows_concatenate_base_first() {
        let base = Layout {
            windows: vec![window(&["vim"]), window(&["cargo watch"])],
            ..Default::default()
        };
        let child = Layout {
            windows: vec![window(&["htop"])],
            ..Default::default()
        };

        let merged = child.merge_onto(base.clone());
        assert_eq!(merged.windows.len(), 3);
        assert_eq!(merged.windows[0], base.windows[0]);
        assert_eq!(merged.windows[1], base.windows[1]);
        assert_eq!(merged.windows[2], window(&["htop"]));
    }

    #[test]
    fn test_merge_env_child_wins_per_key() {
        let base = Layout {
            env: BTreeMap::from([
                ("RAILS_ENV".to_string(), "production".to_string()),
                ("EDITOR".to_string(), "vim".to_string()),
            ]),
            ..Default::default()
        };
        let child = Layout {
            env: BTreeMap::from([("RAILS_ENV".to_string(), "development".to_string())]),
            ..Default::default()
        };

        let merged = child.merge_onto(base);
        assert_eq!(merged.env["RAILS_ENV"], "development");
        assert_eq!(merged.env["EDITOR"], "vim");
    }
}
