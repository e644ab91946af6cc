//! `open-assets`: open the current project's assets directory in VS Code.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{config::ConfigAction, RootArgs};

#[derive(Parser)]
#[command(
    name = "open-assets",
    version,
    about = "Open a project's assets directory in VS Code"
)]
struct Cli {
    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate the assets directory and open it in the editor (default)
    Open {
        #[command(flatten)]
        roots: RootArgs,

        /// Editor to launch: code, insiders, codium, cursor, or a raw command
        #[arg(long)]
        editor: Option<String>,

        /// Print the assets directory and exit without launching anything
        #[arg(long)]
        print_path: bool,
    },

    /// Print the assets directory and how it was found
    Resolve {
        #[command(flatten)]
        roots: RootArgs,
    },

    /// Manage open-assets configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Detect installed editors and write the configuration
    Setup,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    open_assets::logging::init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Open {
        roots: RootArgs::default(),
        editor: None,
        print_path: false,
    });

    match command {
        Commands::Open {
            roots,
            editor,
            print_path,
        } => commands::open::cmd_open(&roots, editor.as_deref(), print_path)?,

        Commands::Resolve { roots } => commands::resolve::cmd_resolve(&roots)?,

        Commands::Config { action } => commands::config::cmd_config(action)?,

        Commands::Setup => commands::setup::cmd_setup()?,
    }

    Ok(())
}
