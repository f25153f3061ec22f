//! adaptest CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "adaptest", version, about = "Rasch adaptive-assessment scoring engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score recorded sessions
    Score {
        /// Path to a .toml session file or directory
        #[arg(long)]
        session: PathBuf,

        /// Directory to write JSON reports into
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: table, json, markdown
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Replay a session question by question with the stopping rule
    Replay {
        /// Path to a .toml session file
        #[arg(long)]
        session: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Analyze item discrimination from top/bottom group scores
    Analyze {
        /// Top-group binary scores (comma-separated, e.g. "1,1,0,1")
        #[arg(long)]
        top: String,

        /// Bottom-group binary scores (comma-separated, e.g. "0,1,0,0")
        #[arg(long)]
        bottom: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate session TOML files
    Validate {
        /// Path to a session file or directory
        #[arg(long)]
        session: PathBuf,
    },

    /// Create starter config and example session
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("adaptest_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            session,
            output,
            format,
            config,
        } => commands::score::execute(session, output, format, config),
        Commands::Replay { session, config } => commands::replay::execute(session, config),
        Commands::Analyze {
            top,
            bottom,
            config,
        } => commands::analyze::execute(top, bottom, config),
        Commands::Validate { session } => commands::validate::execute(session),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
