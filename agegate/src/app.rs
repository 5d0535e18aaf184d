use crate::cli::Cli;
use agegate_lib::evaluate;
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

pub fn run() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let Ok(Cli { name, age, rest: _ }) = Cli::try_parse() else {
        return print_usage();
    };

    let verdict = evaluate(&name, &age);
    log::debug!("Decision for {name}: {:?}", verdict.decision);

    let mut stdout = io::stdout().lock();
    stdout.write_all(verdict.message.as_bytes())?;
    stdout.flush()?;

    Ok(if verdict.decision.is_admitted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Intake failures report a usage line on stdout, naming the program as it
/// was invoked, and exit with status 1.
fn print_usage() -> anyhow::Result<ExitCode> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let mut stdout = io::stdout().lock();
    write!(stdout, "Usage: {program} <name> <age>")?;
    stdout.flush()?;

    Ok(ExitCode::FAILURE)
}
