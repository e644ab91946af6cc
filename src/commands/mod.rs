pub mod config;
pub mod open;
pub mod resolve;
pub mod setup;

use clap::Args;
use std::path::PathBuf;

use open_assets::{
    root::{CurrentDirRoot, ExplicitRoot, RootProvider, SolutionFileRoot},
    AssetsError,
};

/// Where to look for the assets directory. Defaults to the working directory.
#[derive(Args, Debug, Default)]
pub struct RootArgs {
    /// Project root directory
    #[arg(long, value_name = "DIR", conflicts_with = "solution")]
    pub root: Option<PathBuf>,

    /// Solution or project file; its directory is the root
    #[arg(long, value_name = "FILE")]
    pub solution: Option<PathBuf>,
}

impl RootProvider for RootArgs {
    fn root_dir(&self) -> Result<PathBuf, AssetsError> {
        match (&self.root, &self.solution) {
            (Some(dir), _) => ExplicitRoot(dir.clone()).root_dir(),
            (None, Some(file)) => SolutionFileRoot(file.clone()).root_dir(),
            (None, None) => CurrentDirRoot.root_dir(),
        }
    }
}
