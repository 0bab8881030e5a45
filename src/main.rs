//! CLI entry point for the block automaton simulator

use blocklife::io::cli::{Cli, SimulationRunner};
use clap::Parser;

fn main() -> blocklife::Result<()> {
    let cli = Cli::parse();
    let runner = SimulationRunner::new(cli);
    runner.run()
}
