//! HEXFUEL CLI - Command-line interface
//!
//! Commands:
//! - play: Play against the AI in the terminal
//! - serve: Start the web server for the browser front end
//! - selfplay: Let the AI play both sides

mod play;
mod selfplay;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexfuel")]
#[command(about = "HEXFUEL hex-grid fuel game", version)]
struct Cli {
    /// Seed for board generation (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the AI in the terminal
    Play,
    /// Start the web server
    Serve(server::ServeArgs),
    /// Run AI-vs-AI games and report statistics
    Selfplay(selfplay::SelfplayArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play => play::run(cli.seed),
        Commands::Serve(args) => server::run(args, cli.seed),
        Commands::Selfplay(args) => selfplay::run(args, cli.seed),
    }
}
