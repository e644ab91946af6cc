use anyhow::{bail, Result};
use clap::Subcommand;
use std::path::Path;

use open_assets::{
    config::Config,
    launcher::{LaunchPlan, Platform},
};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective settings, where they come from and the launch command
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default settings (refuses to overwrite an existing file)
    Init {
        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Change one setting (editor.command, launch.augment_path)
    Set { key: String, value: String },
    /// Print one setting
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    let path = Config::path()?;
    match action {
        ConfigAction::Show => {
            let config = Config::load_from(&path)?;
            print!("{}", describe(&config, &path, &Platform::current()));
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            init(&path, force)?;
            eprintln!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(&path)?;
            config.set_value(&key, &value)?;
            config.save_to(&path)?;
            eprintln!("{key} = {}", config.get_value(&key)?);
        }
        ConfigAction::Get { key } => {
            println!("{}", Config::load_from(&path)?.get_value(&key)?);
        }
    }
    Ok(())
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to overwrite it", path.display());
    }
    Config::default().save_to(path)
}

/// Human-readable summary of what `open-assets open` would do with `config`.
fn describe(config: &Config, path: &Path, platform: &Platform) -> String {
    let origin = if path.exists() {
        path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };

    let program = config.editor.command.split_whitespace().next().unwrap_or_default();
    let located = which::which(program).map_or_else(
        |_| "not found on PATH".to_string(),
        |p| p.display().to_string(),
    );

    let launch = LaunchPlan::new(platform, &config.editor.command, Path::new("."))
        .map_or_else(|e| e.to_string(), |plan| plan.to_string());

    format!(
        "settings:           {origin}\n\
         editor.command      {} ({located})\n\
         launch.augment_path {}\n\
         launch command:     {launch}\n",
        config.editor.command, config.launch.augment_path,
    )
}
