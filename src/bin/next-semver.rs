use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use release_notes_tools::cli::NextSemverArgs;
use release_notes_tools::next_semver::bump_lines;
use release_notes_tools::{logging, ui};

fn main() {
    let args = NextSemverArgs::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error_chain(&e);
        std::process::exit(1);
    }
}

fn run(args: &NextSemverArgs) -> Result<()> {
    let bump = args.bump_type();
    debug!(arg = ?args.bump, ?bump, "reading versions from stdin");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let written = bump_lines(stdin, stdout, bump).context("Failed to compute next version")?;

    debug!(written, "done");
    Ok(())
}
