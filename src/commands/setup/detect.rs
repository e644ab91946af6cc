/// Editors of the VS Code family that accept a directory as `<cli> .`.
const CANDIDATES: &[(&str, &str)] = &[
    ("VS Code",          "code"),
    ("VS Code Insiders", "code-insiders"),
    ("VSCodium",         "codium"),
    ("Cursor",           "cursor"),
];

/// Probe PATH for every known editor. Returns (display name, command) for each found.
pub(super) fn detect_all_editors() -> Vec<(&'static str, &'static str)> {
    CANDIDATES
        .iter()
        .filter(|&&(name, cmd)| match which::which(cmd) {
            Ok(path) => {
                tracing::debug!(editor = name, path = %path.display(), "editor found");
                true
            }
            Err(_) => false,
        })
        .copied()
        .collect()
}
