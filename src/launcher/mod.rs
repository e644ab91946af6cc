//! Start the editor on a directory through the platform shell.
//!
//! The invocation is fire-and-forget: a successful spawn is the only outcome
//! observed, no process handle is kept.

mod shell;

#[cfg(test)]
mod tests;

pub use shell::{augmented_path, ProcessSpawner};

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AssetsError;

/// Editor entry point used when nothing else is configured.
pub const DEFAULT_EDITOR: &str = "code";

/// Shell family used to run the editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// `cmd /C`.
    Windows,
    /// `sh -c` on Linux and macOS.
    Unix,
    /// Any other OS, named as reported by `std::env::consts::OS`.
    Unsupported(String),
}

impl Platform {
    /// Platform of the running process.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS name (as in `std::env::consts::OS`) to a shell family.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "linux" | "macos" => Self::Unix,
            other => Self::Unsupported(other.to_string()),
        }
    }
}

/// Fully determined process invocation, built before anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Shell executable.
    pub program: String,
    /// Arguments handed to the shell.
    pub args: Vec<String>,
    /// Working directory of the child, i.e. the assets directory.
    pub working_dir: PathBuf,
    /// Arguments are already a finished command line and must reach the OS
    /// without further quoting (`cmd /C` parses its own quotes).
    pub verbatim: bool,
}

impl LaunchPlan {
    /// Build the invocation of `editor .` in `target_dir` for `platform`.
    ///
    /// `editor` may carry extra arguments (`"code --new-window"`) and quoted
    /// paths. On Windows the whole command goes to `cmd /C` as one string,
    /// wrapped in an extra pair of quotes when it contains any, so cmd's
    /// quote stripping leaves the inner quotes intact.
    ///
    /// # Errors
    ///
    /// [`AssetsError::UnsupportedPlatform`] when `platform` has no shell.
    pub fn new(platform: &Platform, editor: &str, target_dir: &Path) -> Result<Self, AssetsError> {
        let editor = editor.trim();
        let editor = if editor.is_empty() { DEFAULT_EDITOR } else { editor };

        let command = format!("{editor} .");
        let (program, args, verbatim) = match platform {
            Platform::Windows => {
                let command = if command.contains('"') {
                    format!("\"{command}\"")
                } else {
                    command
                };
                ("cmd", vec!["/C".to_string(), command], true)
            }
            Platform::Unix => ("sh", vec!["-c".to_string(), command], false),
            Platform::Unsupported(os) => {
                return Err(AssetsError::UnsupportedPlatform(os.clone()));
            }
        };

        Ok(Self {
            program: program.to_string(),
            args,
            working_dir: target_dir.to_path_buf(),
            verbatim,
        })
    }
}

impl fmt::Display for LaunchPlan {
    /// Renders the command line the way a user would type it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if !self.verbatim && arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Starts a planned process. Implementations must not wait for it to exit.
pub trait Spawner {
    /// Start `plan`, returning once the OS has accepted the process.
    fn spawn(&self, plan: &LaunchPlan) -> io::Result<()>;
}

/// Launch `editor` on `target_dir` for the running platform.
///
/// # Errors
///
/// See [`launch_on`].
pub fn launch(target_dir: &Path, editor: &str, spawner: &impl Spawner) -> Result<(), AssetsError> {
    launch_on(&Platform::current(), target_dir, editor, spawner)
}

/// Launch `editor` on `target_dir` using the shell of `platform`.
///
/// On an unsupported platform the spawner is never called.
///
/// # Errors
///
/// [`AssetsError::UnsupportedPlatform`] without spawning, or
/// [`AssetsError::Launch`] carrying the OS error when the spawn fails.
pub fn launch_on(
    platform: &Platform,
    target_dir: &Path,
    editor: &str,
    spawner: &impl Spawner,
) -> Result<(), AssetsError> {
    let plan = LaunchPlan::new(platform, editor, target_dir)?;
    tracing::info!(command = %plan, cwd = %plan.working_dir.display(), "launching editor");
    spawner
        .spawn(&plan)
        .map_err(|source| AssetsError::Launch {
            program: plan.program.clone(),
            source,
        })
}
