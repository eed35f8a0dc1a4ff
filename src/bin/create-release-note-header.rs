use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::debug;

use release_notes_tools::cli::HeaderArgs;
use release_notes_tools::{logging, ui};

fn main() {
    let args = HeaderArgs::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error_chain(&e);
        std::process::exit(1);
    }
}

fn run(args: &HeaderArgs) -> Result<()> {
    let header = args.header();
    debug!(compare_url = %header.compare_url(), version = %header.version(), "rendering header");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", header.render_today()).context("Failed to write header to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
