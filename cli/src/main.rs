mod cli;
mod commands;

#[cfg(test)]
mod tests;

use blcore::{config, init_tracing};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli::CliArgs {
        print_config,
        command,
    } = cli::CliArgs::parse();

    if print_config {
        println!("{}", serde_json::to_string_pretty(config())?);
        return Ok(());
    }

    let rule = config().version.trim;
    let command = command.unwrap_or_default();
    tracing::debug!(?command, ?rule, "dispatching");
    let output = commands::execute(command, rule)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
