use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use appcast_clean::cli::{commands, Cli, USAGE};

fn main() -> ExitCode {
    // Logs go to stderr; stdout only carries the result line.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let Some(cli) = Cli::from_env() else {
        println!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    commands::run(&cli)
}
