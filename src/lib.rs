pub mod cli;
pub mod error;
pub mod logging;
pub mod next_semver;
pub mod release_note;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
