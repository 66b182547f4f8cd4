use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod storage;

use commands::{
    CopyCommand, DayCommand, ExportCommand, GoalsCommand, ImportCommand, LogCommand, PlanCommand,
    RemoveCommand,
};
use config::Config;

#[derive(Parser)]
#[command(name = "mtrack")]
#[command(version)]
#[command(about = "A diet diary CLI application", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a food against a date and meal slot
    Log(LogCommand),

    /// Remove a logged entry from a date
    Remove(RemoveCommand),

    /// Show a day's resolved content, totals, and goal progress
    Day(DayCommand),

    /// Copy one day's content onto another day
    Copy(CopyCommand),

    /// Show or edit the base plan
    Plan(PlanCommand),

    /// Show or set daily nutrition goals
    Goals(GoalsCommand),

    /// Export the diary as a JSON bundle
    Export(ExportCommand),

    /// Import a JSON bundle, replacing the diary wholesale
    Import(ImportCommand),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config)?;

    match &cli.command {
        Commands::Log(cmd) => cmd.run(&config),
        Commands::Remove(cmd) => cmd.run(&config),
        Commands::Day(cmd) => cmd.run(&config),
        Commands::Copy(cmd) => cmd.run(&config),
        Commands::Plan(cmd) => cmd.run(&config),
        Commands::Goals(cmd) => cmd.run(&config),
        Commands::Export(cmd) => cmd.run(&config),
        Commands::Import(cmd) => cmd.run(&config),
    }
}
