/// Map a symbolic editor name to its CLI entry point, or return the value
/// as-is when it is not a known symbol (treating it as a raw command).
pub(super) fn resolve_editor_command(name: &str) -> String {
    let candidates: &[(&str, &str)] = &[
        ("code",          "code"),
        ("vscode",        "code"),
        ("insiders",      "code-insiders"),
        ("code-insiders", "code-insiders"),
        ("codium",        "codium"),
        ("vscodium",      "codium"),
        ("cursor",        "cursor"),
    ];
    for &(sym, cmd) in candidates {
        if name.eq_ignore_ascii_case(sym) {
            return cmd.to_string();
        }
    }
    name.trim().to_string()
}
