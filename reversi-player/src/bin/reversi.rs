use clap::Parser;
use reversi_player::{Console, Controller, Mode};
use std::io;
use tracing_subscriber::EnvFilter;

/// Play Reversi on the console, against a friend or the computer.
#[derive(Parser, Debug)]
#[command(name = "reversi", version)]
struct Cli {
    /// Log filter directives; logs go to stderr
    #[arg(long, env = "REVERSI_LOG", default_value = "warn")]
    log: String,

    /// Answer the first menu prompt with this mode (player, easy, medium or best)
    #[arg(long)]
    mode: Option<Mode>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut controller = Controller::new(Console::new(stdin.lock(), io::stdout()));
    if let Err(e) = controller.run(cli.mode) {
        tracing::error!(error = %e, "console session failed");
    }
}
