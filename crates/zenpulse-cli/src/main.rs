use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "zenpulse-cli", version, about = "ZenPulse CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Meditation catalog and lock state
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Generate an affirmation for a mood
    Affirm(commands::affirm::AffirmArgs),
    /// Subscription plans shown on the paywall
    Plans {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay an interaction script against a fresh session
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("ZENPULSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Affirm(args) => commands::affirm::run(args),
        Commands::Plans { json } => commands::plans::run(json),
        Commands::Session { action } => commands::session::run(action),
        Commands::Config { action } => commands::config::run(action).map_err(Into::into),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "zenpulse-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
