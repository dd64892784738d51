use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use modcommons_cli::cli::Cli;
use modcommons_cli::error::CliError;
use modcommons_cli::{dispatch, output};

fn main() {
    let cli = Cli::parse();

    if cli.verbose || std::env::var("RUST_LOG").is_ok() {
        let mut filter = EnvFilter::from_default_env();
        if cli.verbose {
            for directive in [
                "modcommons_cli=debug",
                "modcommons_ops=debug",
                "modcommons_sdk=debug",
            ] {
                filter = filter.add_directive(directive.parse().unwrap());
            }
        }
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    if let Err(err) = dispatch::run(cli) {
        print_error(&err);
        std::process::exit(err.exit_code());
    }
}

fn print_error(err: &CliError) {
    match err {
        CliError::Aborted => eprintln!("{}", "Aborted".dimmed()),
        _ => eprintln!("{} {}", output::CROSS.red().bold(), err),
    }
}
