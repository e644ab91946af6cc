use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{LaunchPlan, Spawner};

/// Hides the console window `cmd.exe` would otherwise open.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Directories GUI-launched processes on macOS commonly miss from `PATH`.
const EXTRA_PATH_DIRS: &[&str] = &["/usr/local/bin", "/opt/homebrew/bin", "/opt/homebrew/sbin"];

/// The caller's `PATH` with [`EXTRA_PATH_DIRS`] appended when absent.
/// The user's own entries keep precedence.
#[must_use]
pub fn augmented_path() -> OsString {
    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut parts: Vec<PathBuf> = std::env::split_paths(&current)
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    for extra in EXTRA_PATH_DIRS {
        let extra = PathBuf::from(extra);
        if !parts.contains(&extra) {
            parts.push(extra);
        }
    }
    std::env::join_paths(parts).unwrap_or(current)
}

/// Spawns the plan as a real detached child process.
#[derive(Debug, Clone, Copy)]
pub struct ProcessSpawner {
    /// Append [`EXTRA_PATH_DIRS`] to the child's `PATH` (Unix only).
    pub augment_path: bool,
}

impl Default for ProcessSpawner {
    fn default() -> Self {
        Self { augment_path: true }
    }
}

impl Spawner for ProcessSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> io::Result<()> {
        let mut cmd = Command::new(&plan.program);
        push_args(&mut cmd, plan);
        cmd.current_dir(&plan.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        if self.augment_path && cfg!(unix) {
            cmd.env("PATH", augmented_path());
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        // The child is not waited on; dropping the handle leaves it running.
        let child = cmd.spawn()?;
        tracing::debug!(pid = child.id(), "editor process started");
        Ok(())
    }
}

#[cfg(windows)]
fn push_args(cmd: &mut Command, plan: &LaunchPlan) {
    use std::os::windows::process::CommandExt;
    for arg in &plan.args {
        if plan.verbatim {
            cmd.raw_arg(arg);
        } else {
            cmd.arg(arg);
        }
    }
}

#[cfg(not(windows))]
fn push_args(cmd: &mut Command, plan: &LaunchPlan) {
    cmd.args(&plan.args);
}
