//! gradecast CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradecast", version, about = "Student exam score prediction form")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a score from the default record plus overrides
    Predict {
        /// Field overrides (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        sets: Vec<String>,

        /// Model artifact path
        #[arg(long)]
        model: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Do not echo the input record
        #[arg(long)]
        quiet: bool,
    },

    /// Interactive form session
    Session {
        /// Model artifact path
        #[arg(long)]
        model: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List form fields, domains, and defaults
    Fields,

    /// Validate a model artifact against the form schema
    Validate {
        /// Model artifact path
        #[arg(long)]
        model: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and a demo model artifact
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradecast=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            sets,
            model,
            config,
            quiet,
        } => commands::predict::execute(sets, model, config, quiet),
        Commands::Session { model, config } => commands::session::execute(model, config),
        Commands::Fields => commands::fields::execute(),
        Commands::Validate { model, config } => commands::validate::execute(model, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
