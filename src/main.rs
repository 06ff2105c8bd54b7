use clap::{Parser, Subcommand};
use colored::*;
use std::process;

use fledge::error::ToolExit;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Platform scaffolding for Flutter projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh the generated android/ios glue for a project
    Prepare {
        /// Project directory (defaults to the working directory)
        dir: Option<String>,
    },

    /// Show how a project is classified and what would be touched
    Inspect {
        /// Project directory (defaults to the working directory)
        dir: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List organizations declared in existing platform files
    Orgs {
        /// Project directory (defaults to the working directory)
        dir: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // Manifest problems are the user's to fix; print those without the
        // error-chain noise.
        match err.downcast_ref::<ToolExit>() {
            Some(exit) => eprintln!("{}", exit.to_string().red()),
            None => eprintln!("{} {:#}", "Error:".red(), err),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Prepare { dir } => commands::prepare::execute(dir.as_deref()),
        Commands::Inspect { dir, json } => commands::inspect::execute(dir.as_deref(), json),
        Commands::Orgs { dir, json } => commands::orgs::execute(dir.as_deref(), json),
    }
}
