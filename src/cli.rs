//! Command-line interface for muxup.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use clap::Parser;

/// Command-line arguments for muxup.
///
/// # Examples
///
/// ```bash
/// # Build the session described by ~/.config/muxup/rails.{yaml,yml,json}
/// muxup rails
///
/// # Print the generated tmux commands without running them
/// muxup rails -p
///
/// # Trace the script as the shell executes it
/// muxup rails -d
/// ```
#[derive(Parser, Debug)]
#[command(name = "muxup")]
#[command(version)]
#[command(about = "Declarative tmux session bootstrapper - build sessions from config")]
#[command(long_about = "Muxup reads a session profile (YAML or JSON) from your config\n\
    directory, compiles it into a script of tmux commands, and executes it.\n\n\
    Profiles describe windows and panes with the commands to run in each, and\n\
    can inherit from other profiles.")]
pub struct Cli {
    /// Profile name, resolved to <config-dir>/<name>.{yaml,yml,json}.
    #[arg(value_name = "PROFILE")]
    pub profile: String,

    /// Print the generated shell commands instead of executing them.
    #[arg(short = 'p', long)]
    pub print_commands: bool,

    /// Print each command as the shell runs it (passes -x to the shell).
    #[arg(short, long)]
    pub debug: bool,
}
