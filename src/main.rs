//! Muxup CLI entry point.
//!
//! This binary provides the `muxup` command for creating tmux sessions
//! from declarative profile files.

use clap::Parser;
use muxup::cli::Cli;
use muxup::error::Result;
use muxup::{exec, loader, script};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let layout = loader::load_profile(&cli.profile)?;
    let commands = script::render(&layout);

    if cli.print_commands {
        println!("{}", commands);
        return Ok(());
    }

    exec::replace_with_shell(&commands, cli.debug)
}
