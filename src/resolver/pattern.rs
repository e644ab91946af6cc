/// Literal that marks a directory as holding assets. Case-sensitive.
const MARKER: &str = "Assets";

/// Whether a directory base name looks like an assets directory: it starts
/// with an ASCII letter and contains `Assets` somewhere.
///
/// `GameAssets`, `Assets` and `ArtAssetsRaw` match; `_Assets`, `2Assets`
/// and `gameassets` do not.
#[must_use]
pub fn is_assets_dir_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) && name.contains(MARKER)
}
