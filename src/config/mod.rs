//! User-level settings stored in `~/.config/open-assets/config.toml`.

mod ops;


use serde::{Deserialize, Serialize};

use crate::launcher::DEFAULT_EDITOR;

/// Top-level settings file. Every section is optional on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which editor to launch.
    pub editor: EditorConfig,
    /// How the editor process is started.
    pub launch: LaunchConfig,
}

/// `[editor]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor entry point run with `.` appended, e.g. "code" or "codium"
    pub command: String,
}

/// `[launch]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Append Homebrew and `/usr/local/bin` to the editor's `PATH` on Unix.
    pub augment_path: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_EDITOR.to_string(),
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self { augment_path: true }
    }
}
