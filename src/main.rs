//! CLI entry point for the tile reconstruction tool

use clap::Parser;
use tilestitch::io::cli::{Cli, ReconstructionDriver};

fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    let mut driver = ReconstructionDriver::new(cli);
    driver.run()
}
