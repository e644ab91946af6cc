//! Error taxonomy for a single resolve-then-launch invocation.
//!
//! Every variant is terminal: the invocation reports it and stops.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Message shown when neither the config file nor the scan yields a directory.
pub const NOT_FOUND_MESSAGE: &str = "Can't find any assets folder in solution directory";

/// Errors raised while resolving the assets directory or launching the editor.
#[derive(Error, Debug)]
pub enum AssetsError {
    /// The host could not supply a usable root directory.
    #[error("Can't determine the solution directory: {0}")]
    RootUnavailable(String),

    /// `assetsconfig.json` exists but is not valid JSON for the expected shape.
    #[error("Failed to parse {}: {source}", .path.display())]
    ConfigParse {
        /// Location of the offending config file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The root or the config file could not be accessed.
    #[error("Cannot access {}: {source}", .path.display())]
    Filesystem {
        /// Path that failed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The scan completed without a matching subdirectory.
    #[error("Can't find any assets folder in solution directory")]
    NotFound {
        /// Root directory that was scanned.
        root: PathBuf,
    },

    /// The editor process could not be started.
    #[error("Failed to start {program}: {source}")]
    Launch {
        /// Program handed to the OS.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The running OS has no known shell invocation.
    #[error("Launching an editor is not supported on {0}")]
    UnsupportedPlatform(String),
}

impl AssetsError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
