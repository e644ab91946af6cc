use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AssetsError;

/// File name looked up directly under the root directory.
pub const CONFIG_FILE_NAME: &str = "assetsconfig.json";

/// Contents of `assetsconfig.json`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssetsConfigFile {
    /// Assets directory relative to the root, e.g. `"Art/Assets"`.
    #[serde(rename = "customAssetDirPath", alias = "CustomAssetDirPath", default)]
    pub custom_asset_dir_path: Option<String>,
}

impl AssetsConfigFile {
    /// Read and parse the config under `root`.
    ///
    /// Returns `Ok(None)` when there is no regular file by that name; a
    /// directory called `assetsconfig.json` is not a config file. A file that
    /// exists but does not parse is an error; it never degrades to "no config".
    ///
    /// # Errors
    ///
    /// [`AssetsError::Filesystem`] when the file cannot be inspected or read,
    /// [`AssetsError::ConfigParse`] when its contents are not valid.
    pub fn load(root: &Path) -> Result<Option<Self>, AssetsError> {
        let path = root.join(CONFIG_FILE_NAME);
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                tracing::debug!(path = %path.display(), "not a regular file, ignoring");
                return Ok(None);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AssetsError::filesystem(&path, e)),
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| AssetsError::filesystem(&path, e))?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| AssetsError::ConfigParse { path, source })
    }

    /// The configured directory joined onto `root`, if one is set.
    /// An empty string counts as unset.
    #[must_use]
    pub fn target(&self, root: &Path) -> Option<PathBuf> {
        self.custom_asset_dir_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| root.join(p))
    }
}
