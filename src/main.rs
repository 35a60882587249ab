use anyhow::Result;
use clap::Parser;
use tiredness::cli::Cli;
use tiredness::commands;

fn main() -> Result<()> {
    let _cli = Cli::parse();
    commands::ask::run()
}
