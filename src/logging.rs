use tracing::Level;

use crate::ui;

/// Installs the stderr `tracing` subscriber.
///
/// `WARN` by default, `DEBUG` with `verbose`. Colors follow
/// [`ui::stderr_color`]. Calling it again once a global
/// subscriber exists does nothing.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(ui::stderr_color())
        .with_target(false)
        .try_init();
}

pub fn max_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}
