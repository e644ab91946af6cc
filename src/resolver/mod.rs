//! Locate the assets directory under a root directory.
//!
//! `assetsconfig.json` at the root wins when present; otherwise the immediate
//! subdirectories are scanned in lexicographic order for a name containing
//! `Assets`.

mod config_file;
mod pattern;


pub use config_file::{AssetsConfigFile, CONFIG_FILE_NAME};
pub use pattern::is_assets_dir_name;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::AssetsError;

/// Where a resolved directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// `customAssetDirPath` in `assetsconfig.json`.
    Config,
    /// Name-pattern scan of the root's subdirectories.
    Scan,
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "{CONFIG_FILE_NAME}"),
            Self::Scan => write!(f, "directory scan"),
        }
    }
}

/// Outcome of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An assets directory was determined.
    Found {
        /// Root joined with the configured or matched directory.
        path: PathBuf,
        /// How `path` was determined.
        source: ResolutionSource,
    },
    /// Neither the config nor the scan produced a directory.
    NotFound,
}

impl Resolution {
    /// The resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound => None,
        }
    }

    /// Turn `NotFound` into [`AssetsError::NotFound`] for `root`.
    ///
    /// # Errors
    ///
    /// [`AssetsError::NotFound`] when nothing was resolved.
    pub fn require(self, root: &Path) -> Result<PathBuf, AssetsError> {
        match self {
            Self::Found { path, .. } => Ok(path),
            Self::NotFound => Err(AssetsError::NotFound {
                root: root.to_path_buf(),
            }),
        }
    }
}

/// Resolve the assets directory for `root`.
///
/// The configured path is returned without checking that it exists. A config
/// file that is present but unparsable is an error and the scan is skipped.
///
/// # Errors
///
/// [`AssetsError::Filesystem`] when `root` is missing, not a directory or
/// unreadable, and [`AssetsError::ConfigParse`] for an invalid config file.
pub fn resolve(root: &Path) -> Result<Resolution, AssetsError> {
    let meta = std::fs::metadata(root).map_err(|e| AssetsError::filesystem(root, e))?;
    if !meta.is_dir() {
        return Err(AssetsError::filesystem(
            root,
            std::io::Error::other("not a directory"),
        ));
    }

    if let Some(config) = AssetsConfigFile::load(root)? {
        tracing::debug!(root = %root.display(), "found {CONFIG_FILE_NAME}");
        if let Some(path) = config.target(root) {
            tracing::info!(path = %path.display(), "assets directory from config");
            return Ok(Resolution::Found {
                path,
                source: ResolutionSource::Config,
            });
        }
        tracing::debug!("config sets no customAssetDirPath, scanning subdirectories");
    }

    let mut candidates = subdirectory_names(root)?
        .into_iter()
        .filter_map(|name| name.into_string().ok())
        .filter(|name| is_assets_dir_name(name));

    let Some(first) = candidates.next() else {
        tracing::info!(root = %root.display(), "no assets directory found");
        return Ok(Resolution::NotFound);
    };
    for skipped in candidates {
        tracing::debug!(name = %skipped, "ignoring additional assets candidate");
    }

    let path = root.join(first);
    tracing::info!(path = %path.display(), "assets directory from scan");
    Ok(Resolution::Found {
        path,
        source: ResolutionSource::Scan,
    })
}

/// Names of the immediate subdirectories of `root`, sorted. Symlinks are
/// skipped, not followed.
fn subdirectory_names(root: &Path) -> Result<Vec<OsString>, AssetsError> {
    let entries = std::fs::read_dir(root).map_err(|e| AssetsError::filesystem(root, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AssetsError::filesystem(root, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| AssetsError::filesystem(entry.path(), e))?;
        if file_type.is_dir() {
            names.push(entry.file_name());
        }
    }
    names.sort();
    Ok(names)
}
