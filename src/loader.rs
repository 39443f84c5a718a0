//! Profile file discovery, parsing, and inheritance resolution.
//!
//! Profiles live in a single config directory and are located by probing a
//! fixed table of extensions. For a profile named `rails` the candidates are
//! checked in order:
//!
//! 1. `<config-dir>/rails.yaml`
//! 2. `<config-dir>/rails.yml`
//! 3. `<config-dir>/rails.json`
//!
//! The first existing file wins. The config directory is
//! `$XDG_CONFIG_HOME/muxup` when `XDG_CONFIG_HOME` is set, otherwise
//! `~/.config/muxup`.

use crate::config::Layout;
use crate::error::{MuxupError, Result};
use std::path::{Path, PathBuf};

/// File format a profile can be written in.
#[derive(Debug, Clone, Copy)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn parse(self, contents: &str) -> std::result::Result<Layout, String> {
        match self {
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// Extension probe table. Fixed order; first existing file wins.
const FORMATS: [(&str, Format); 3] = [
    ("yaml", Format::Yaml),
    ("yml", Format::Yaml),
    ("json", Format::Json),
];

/// Determine the profile directory.
///
/// Checks `$XDG_CONFIG_HOME/muxup` first, then `~/.config/muxup`.
///
/// # Errors
///
/// Returns [`MuxupError::NoConfigDir`] if the home directory cannot be
/// determined.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("muxup"));
    }

    dirs::home_dir()
        .map(|home| home.join(".config").join("muxup"))
        .ok_or(MuxupError::NoConfigDir)
}

/// Load a profile from the default config directory.
///
/// Convenience wrapper that combines [`config_dir`] and [`load_profile_from`].
pub fn load_profile(name: &str) -> Result<Layout> {
    let dir = config_dir()?;
    load_profile_from(&dir, name)
}

/// Load and fully resolve a profile from the given directory.
///
/// After deserialization, a non-empty `inherit_from` field triggers a
/// recursive load of the named parent profile (which resolves its own
/// inheritance in turn); the child is then merged over the parent per
/// [`Layout::merge_onto`]. Cycles in the inheritance chain are not
/// detected and will recurse until the stack runs out.
///
/// # Errors
///
/// - [`MuxupError::ProfileNotFound`] if no candidate file exists
/// - [`MuxupError::IoError`] if reading an existing file fails
/// - [`MuxupError::ParseError`] if deserialization fails
pub fn load_profile_from(dir: &Path, name: &str) -> Result<Layout> {
    let layout = read_layout(dir, name)?;

    let parent = match layout.inherit_from.as_deref().filter(|p| !p.is_empty()) {
        Some(p) => p.to_string(),
        None => return Ok(layout),
    };

    let base = load_profile_from(dir, &parent)?;
    Ok(layout.merge_onto(base))
}

/// Locate and deserialize a single profile file, without resolving
/// inheritance.
fn read_layout(dir: &Path, name: &str) -> Result<Layout> {
    for (ext, format) in FORMATS {
        let path = dir.join(format!("{}.{}", name, ext));
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            return format
                .parse(&contents)
                .map_err(|message| MuxupError::ParseError { path, message });
        }
    }

    Err(MuxupError::ProfileNotFound(name.to_string()))
}
