//! Faky CLI — manage blog content and drive the terminal showcase.
//!
//! Lists and renders front-matter markdown entries, exports them as a
//! static site, and runs command lines through the showcase interpreter.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
