// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, set up logging, run the command.
// - Any error is printed once on stderr, with the command it interrupted and
//   its causes, and the process exits with status 1.

use anyhow::Context as _;
use clap::Parser;
use crossterm::tty::IsTty;
use food_cli::cli::{Cli, Commands};
use food_cli::commands::{self, Context};
use food_cli::config::Config;
use food_cli::ui;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        // Use RUST_LOG if set, otherwise stay quiet unless something is wrong
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::new(Config::from_env());
    let doing = describe(&cli.command);
    commands::run(&ctx, cli.command).with_context(|| doing)
}

fn describe(command: &Commands) -> String {
    match command {
        Commands::Search(args) => format!("searching for '{}'", args.query),
        Commands::Log(args) => format!("logging food {}", args.fdc_id),
        Commands::Quick(args) => format!("quick-logging '{}'", args.query),
        Commands::Today(_) => "reading the food log".into(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let msg = format!("Error: {:#}", e);
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", ui::error(&msg, std::io::stderr().is_tty()));
            ExitCode::FAILURE
        }
    }
}
