use std::io::Write;

use anyhow::Context;
use clap::Parser;

/// Print a sample computation from the calculator library
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();
    log::debug!("parsed arguments: {args:?}");

    let x = 5;
    let y = 3;
    let result = calculator::add(x, y);
    log::debug!("add({x}, {y}) returned {result}");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Adding {x} + {y} = {result}").context("failed to write to stdout")?;
    Ok(())
}
