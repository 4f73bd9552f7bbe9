//! gloam - command-line view of GL entry point resolution

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use gloam_core::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Info => commands::info::run(),
        Commands::List(args) => commands::list::run(&args),
        Commands::Resolve(args) => commands::resolve::run(&args),
        Commands::Parse(args) => commands::parse::run(&args),
    }
}

/// `RUST_LOG` wins; otherwise warnings, raised by each `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
