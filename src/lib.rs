//! # Muxup
//!
//! A declarative tmux session bootstrapper. Describe a session as a profile
//! file (windows, panes, commands), and muxup compiles it into a shell script
//! of tmux commands that recreates the layout, then runs it.
//!
//! Muxup automates the "open six panes and start everything" ritual of
//! development workflows. Profiles live in `~/.config/muxup/` and may be
//! written in YAML or JSON; a profile can inherit from another profile to
//! layer project-specific windows on top of a shared base.
//!
//! ## Quick Example
//!
//! ```yaml
//! # ~/.config/muxup/rails.yaml
//!
//! root: ~/src/myapp
//! name: myapp
//! windows:
//!   - panes:
//!       - command: bin/rails s
//!       - command: bundle exec sidekiq
//!   - panes:
//!       - command: gvim
//! ```
//!
//! Running `muxup rails` creates the session and attaches to it. Pass
//! `--print-commands` to inspect the generated script instead.
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`config`]: Profile data structures (layout, windows, panes) and merging
//! - [`cli`]: Command-line argument parsing with clap
//! - [`loader`]: Profile file discovery, parsing, and inheritance resolution
//! - [`script`]: Layout-to-shell-script compilation
//! - [`shell`]: Shell escaping for pane commands
//! - [`exec`]: Handing the script off to a shell
//! - [`error`]: Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod loader;
pub mod script;
pub mod shell;

pub use config::{Layout, Pane, Window};
pub use error::{MuxupError, Result};
