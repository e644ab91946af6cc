//! One resolve-then-launch action.

use std::path::PathBuf;

use crate::error::AssetsError;
use crate::launcher::{self, Spawner};
use crate::resolver::{self, Resolution};
use crate::root::RootProvider;

/// Ask `roots` for the root directory and resolve the assets directory under it.
///
/// Returns the root alongside the resolution so callers can report against it.
///
/// # Errors
///
/// Whatever the provider or [`resolver::resolve`] reports.
pub fn resolve_from(roots: &impl RootProvider) -> Result<(PathBuf, Resolution), AssetsError> {
    let root = roots.root_dir()?;
    tracing::debug!(root = %root.display(), "resolving assets directory");
    let resolution = resolver::resolve(&root)?;
    Ok((root, resolution))
}

/// Resolve the assets directory and start `editor` on it.
///
/// Returns the directory the editor was started in. Nothing is spawned when
/// any earlier step fails.
///
/// # Errors
///
/// [`AssetsError::RootUnavailable`], [`AssetsError::Filesystem`],
/// [`AssetsError::ConfigParse`] or [`AssetsError::NotFound`] before launch;
/// [`AssetsError::UnsupportedPlatform`] or [`AssetsError::Launch`] from it.
pub fn open_assets(
    roots: &impl RootProvider,
    editor: &str,
    spawner: &impl Spawner,
) -> Result<PathBuf, AssetsError> {
    let (root, resolution) = resolve_from(roots)?;
    let dir = resolution.require(&root)?;
    launcher::launch(&dir, editor, spawner)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::LaunchPlan;
    use crate::root::{ExplicitRoot, SolutionFileRoot};
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingSpawner {
        plans: RefCell<Vec<LaunchPlan>>,
    }

    impl Spawner for RecordingSpawner {
        fn spawn(&self, plan: &LaunchPlan) -> std::io::Result<()> {
            self.plans.borrow_mut().push(plan.clone());
            Ok(())
        }
    }

    struct NoRoot;

    impl RootProvider for NoRoot {
        fn root_dir(&self) -> Result<PathBuf, AssetsError> {
            Err(AssetsError::RootUnavailable("no solution is open".into()))
        }
    }

    fn project(dirs: &[&str]) -> tempfile::TempDir {
        let tmp = tempfile::TempDir::new().unwrap();
        for d in dirs {
            std::fs::create_dir_all(tmp.path().join(d)).unwrap();
        }
        tmp
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn test_open_launches_in_scanned_dir() {
        let tmp = project(&["Scripts", "GameAssets", "Docs"]);
        let spawner = RecordingSpawner::default();

        let dir = open_assets(&ExplicitRoot(tmp.path().into()), "code", &spawner).unwrap();

        assert_eq!(dir, tmp.path().join("GameAssets"));
        let plans = spawner.plans.borrow();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].working_dir, dir);
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn test_open_via_solution_file() {
        let tmp = project(&["Art/Assets"]);
        std::fs::write(
            tmp.path().join("assetsconfig.json"),
            r#"{"customAssetDirPath": "Art/Assets"}"#,
        )
        .unwrap();
        let spawner = RecordingSpawner::default();

        let dir = open_assets(
            &SolutionFileRoot(tmp.path().join("Game.sln")),
            "code",
            &spawner,
        )
        .unwrap();

        assert_eq!(dir, tmp.path().join("Art/Assets"));
    }

    #[test]
    fn test_not_found_spawns_nothing() {
        let tmp = project(&["Scripts", "Docs"]);
        let spawner = RecordingSpawner::default();

        let err = open_assets(&ExplicitRoot(tmp.path().into()), "code", &spawner).unwrap_err();

        assert!(matches!(err, AssetsError::NotFound { ref root } if root == tmp.path()));
        assert!(spawner.plans.borrow().is_empty());
    }

    #[test]
    fn test_root_unavailable_skips_resolution() {
        let spawner = RecordingSpawner::default();

        let err = open_assets(&NoRoot, "code", &spawner).unwrap_err();

        assert!(matches!(err, AssetsError::RootUnavailable(_)));
        assert!(spawner.plans.borrow().is_empty());
    }

    #[test]
    fn test_resolve_from_returns_root() {
        let tmp = project(&["UiAssets"]);
        let (root, resolution) = resolve_from(&ExplicitRoot(tmp.path().into())).unwrap();
        assert_eq!(root, tmp.path());
        assert_eq!(resolution.path(), Some(Path::new(&tmp.path().join("UiAssets"))));
    }
}
