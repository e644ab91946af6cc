mod detect;
mod prompt;

use anyhow::Result;
use open_assets::config::Config;

pub fn cmd_setup() -> Result<()> {
    let path = Config::path()?;
    let mut config = Config::load_from(&path)?;

    let detected = detect::detect_all_editors();
    if detected.is_empty() {
        eprintln!("No VS Code-family editor found on PATH.");
    }
    match prompt::prompt_editor(&detected) {
        Ok(Some(cmd)) => config.editor.command = cmd,
        Ok(None) => {}
        Err(e) => eprintln!("Warning: could not read editor choice: {e}"),
    }

    config.save_to(&path)?;
    eprintln!(
        "Saved {} (editor: {})",
        path.display(),
        config.editor.command
    );
    eprintln!("\nRun `open-assets` from a project directory to open its assets.");
    Ok(())
}
