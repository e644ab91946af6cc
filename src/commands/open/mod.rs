mod editor;

use anyhow::Result;
use open_assets::{config::Config, invocation, launcher::ProcessSpawner};

use super::RootArgs;

pub fn cmd_open(roots: &RootArgs, editor_override: Option<&str>, print_path: bool) -> Result<()> {
    if print_path {
        let (root, resolution) = invocation::resolve_from(roots)?;
        println!("{}", resolution.require(&root)?.display());
        return Ok(());
    }

    let config = Config::load()?;
    // --editor takes precedence over config
    let editor_cmd = editor_override.map_or_else(
        || config.editor.command.clone(),
        editor::resolve_editor_command,
    );
    let spawner = ProcessSpawner {
        augment_path: config.launch.augment_path,
    };

    let dir = invocation::open_assets(roots, &editor_cmd, &spawner)?;
    eprintln!("Opening {} in {editor_cmd}", dir.display());
    Ok(())
}
