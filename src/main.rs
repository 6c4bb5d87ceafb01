use anyhow::Result;
use clap::Parser;

use fuzzdup::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
