//! quizmark CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizmark", version, about = "Markdown exam engine and grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the client-facing exam configuration (answers stripped) as JSON
    Exam {
        /// Path to the markdown question file
        #[arg(long)]
        source: Option<PathBuf>,

        /// Exam duration in seconds
        #[arg(long)]
        duration: Option<u32>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a submitted answer file against the question document
    Grade {
        /// Path to the markdown question file
        #[arg(long)]
        source: Option<PathBuf>,

        /// Path to the submission JSON ({"responses": ..., "timeLog": ...})
        #[arg(long)]
        submission: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Directory to save the attempt record and HTML review report
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question document for structural problems
    Validate {
        /// Path to the markdown question file
        #[arg(long)]
        source: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example question document
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmark=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Exam {
            source,
            duration,
            config,
        } => commands::exam::execute(source, duration, config),
        Commands::Grade {
            source,
            submission,
            format,
            output,
            config,
        } => commands::grade::execute(source, submission, format, output, config),
        Commands::Validate { source, config } => commands::validate::execute(source, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
