use super::*;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingSpawner {
    plans: RefCell<Vec<LaunchPlan>>,
}

impl Spawner for RecordingSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> io::Result<()> {
        self.plans.borrow_mut().push(plan.clone());
        Ok(())
    }
}

struct FailingSpawner;

impl Spawner for FailingSpawner {
    fn spawn(&self, _plan: &LaunchPlan) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, "program not found"))
    }
}

#[test]
fn test_platform_from_os() {
    assert_eq!(Platform::from_os("windows"), Platform::Windows);
    assert_eq!(Platform::from_os("linux"), Platform::Unix);
    assert_eq!(Platform::from_os("macos"), Platform::Unix);
    assert_eq!(
        Platform::from_os("haiku"),
        Platform::Unsupported("haiku".into())
    );
}

#[test]
fn test_windows_plan() {
    let dir = Path::new(r"C:\proj\GameAssets");
    let plan = LaunchPlan::new(&Platform::Windows, "code", dir).unwrap();
    assert_eq!(plan.program, "cmd");
    assert_eq!(plan.args, ["/C", "code ."]);
    assert!(plan.verbatim);
    assert_eq!(plan.working_dir, dir);
    insta::assert_snapshot!(plan.to_string(), @"cmd /C code .");
}

#[test]
fn test_unix_plan() {
    let dir = Path::new("/proj/GameAssets");
    let plan = LaunchPlan::new(&Platform::Unix, "code", dir).unwrap();
    assert_eq!(plan.program, "sh");
    assert_eq!(plan.args, ["-c", "code ."]);
    assert!(!plan.verbatim);
    assert_eq!(plan.working_dir, dir);
    insta::assert_snapshot!(plan.to_string(), @r#"sh -c "code .""#);
}

#[test]
fn test_blank_editor_uses_default() {
    let plan = LaunchPlan::new(&Platform::Unix, "  ", Path::new("/a")).unwrap();
    assert_eq!(plan.args, ["-c", "code ."]);
}

#[test]
fn test_editor_with_arguments() {
    let dir = Path::new("/a");
    let unix = LaunchPlan::new(&Platform::Unix, "code --new-window", dir).unwrap();
    assert_eq!(unix.args, ["-c", "code --new-window ."]);

    let win = LaunchPlan::new(&Platform::Windows, "code --new-window", dir).unwrap();
    assert_eq!(win.args, ["/C", "code --new-window ."]);
}

#[test]
fn test_windows_quoted_editor_kept_as_one_command() {
    let dir = Path::new(r"C:\proj\GameAssets");
    let plan = LaunchPlan::new(&Platform::Windows, r#""C:\My Tools\ed.exe" -n"#, dir).unwrap();
    assert_eq!(plan.args, ["/C", r#"""C:\My Tools\ed.exe" -n .""#]);
    insta::assert_snapshot!(plan.to_string(), @r#"cmd /C ""C:\My Tools\ed.exe" -n .""#);
}

#[test]
fn test_launch_hands_plan_to_spawner() {
    let spawner = RecordingSpawner::default();
    let dir = Path::new("/proj/Art/Assets");

    launch_on(&Platform::Unix, dir, "code", &spawner).unwrap();

    let plans = spawner.plans.borrow();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].working_dir, dir);
    assert_eq!(plans[0].to_string(), r#"sh -c "code .""#);
}

#[test]
fn test_unsupported_platform_never_spawns() {
    let spawner = RecordingSpawner::default();

    let err = launch_on(
        &Platform::Unsupported("plan9".into()),
        Path::new("/a"),
        "code",
        &spawner,
    )
    .unwrap_err();

    assert!(matches!(err, AssetsError::UnsupportedPlatform(ref os) if os == "plan9"));
    assert!(spawner.plans.borrow().is_empty());
}

#[test]
fn test_spawn_failure_keeps_os_error() {
    let err = launch_on(&Platform::Windows, Path::new("/a"), "code", &FailingSpawner).unwrap_err();
    match err {
        AssetsError::Launch { program, source } => {
            assert_eq!(program, "cmd");
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected Launch, got {other:?}"),
    }
}

#[test]
fn test_augmented_path_contains_extras() {
    let path = augmented_path();
    let parts: Vec<_> = std::env::split_paths(&path).collect();
    assert!(parts.contains(&PathBuf::from("/usr/local/bin")));
    assert!(parts.contains(&PathBuf::from("/opt/homebrew/bin")));
}

#[cfg(unix)]
#[test]
fn test_process_spawner_starts_in_target_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    launch_on(&Platform::Unix, tmp.path(), "true", &ProcessSpawner::default()).unwrap();
}

#[cfg(unix)]
#[test]
fn test_process_spawner_missing_dir_is_launch_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let missing = tmp.path().join("Art/Assets");

    let err = launch_on(&Platform::Unix, &missing, "true", &ProcessSpawner::default()).unwrap_err();
    assert!(matches!(err, AssetsError::Launch { .. }));
}
