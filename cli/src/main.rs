//! Unionname CLI - names for union alternatives, from the command line.

use clap::Parser;
use unionname_cli::cli::{Cli, Command};
use unionname_cli::{commands, common};

fn main() {
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level; WARN when unset.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let options = cli.signature.to_options();

    let result = match cli.command {
        Command::Names(args) => commands::names::run(args, &options, cli.no_color),
        Command::Members(args) => commands::members::run(args, &options, cli.no_color),
        Command::Fix(args) => commands::fix::run(args, &options),
        Command::Completions(args) => {
            commands::completions::run(args);
            Ok(())
        }
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}
