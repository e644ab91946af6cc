//! Sources of the root directory the resolver works on.

use std::path::{Path, PathBuf};

use crate::error::AssetsError;

/// Supplies the root directory of the current project or solution.
pub trait RootProvider {
    /// The absolute root directory.
    ///
    /// # Errors
    ///
    /// [`AssetsError::RootUnavailable`] when no usable root exists.
    fn root_dir(&self) -> Result<PathBuf, AssetsError>;
}

/// A root given directly, e.g. on the command line.
#[derive(Debug, Clone)]
pub struct ExplicitRoot(pub PathBuf);

impl RootProvider for ExplicitRoot {
    fn root_dir(&self) -> Result<PathBuf, AssetsError> {
        if self.0.as_os_str().is_empty() {
            return Err(AssetsError::RootUnavailable("empty root path".into()));
        }
        absolute(&self.0)
    }
}

/// The directory containing a solution or project file.
#[derive(Debug, Clone)]
pub struct SolutionFileRoot(pub PathBuf);

impl RootProvider for SolutionFileRoot {
    fn root_dir(&self) -> Result<PathBuf, AssetsError> {
        if self.0.as_os_str().is_empty() {
            return Err(AssetsError::RootUnavailable("no solution is open".into()));
        }
        let file = absolute(&self.0)?;
        file.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                AssetsError::RootUnavailable(format!(
                    "{} has no parent directory",
                    self.0.display()
                ))
            })
    }
}

/// The process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentDirRoot;

impl RootProvider for CurrentDirRoot {
    fn root_dir(&self) -> Result<PathBuf, AssetsError> {
        std::env::current_dir().map_err(|e| AssetsError::RootUnavailable(e.to_string()))
    }
}

fn absolute(path: &Path) -> Result<PathBuf, AssetsError> {
    std::path::absolute(path).map_err(|e| {
        AssetsError::RootUnavailable(format!("{}: {e}", path.display()))
    })
}
