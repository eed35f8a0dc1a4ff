//! Streaming version bumper used by the `next-semver` binary.

use std::io::{BufRead, Write};

use regex::Regex;
use semver::Version;
use tracing::debug;

use crate::error::Result;
use crate::version::{bump_version, parse_version, VersionBump};

/// Greedy `.*` keeps the capture on the right-most dotted triple of a line.
const VERSION_PATTERN: &str = r"^.*v?(\d+\.\d+\.\d+)";

/// Pulls a `major.minor.patch` substring out of free-form lines.
#[derive(Debug, Clone)]
pub struct VersionExtractor {
    re: Regex,
}

impl VersionExtractor {
    pub fn new() -> Result<Self> {
        Ok(VersionExtractor {
            re: Regex::new(VERSION_PATTERN)?,
        })
    }

    /// Returns the captured version text, or `None` if the line has no triple.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.re
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}

/// Computes the bumped version for a single line.
///
/// Lines without a version yield `Ok(None)`. A captured version that does
/// not parse is an error.
pub fn next_version(
    extractor: &VersionExtractor,
    line: &str,
    bump: VersionBump,
) -> Result<Option<Version>> {
    let Some(text) = extractor.extract(line) else {
        debug!(line, "no version found, skipping");
        return Ok(None);
    };

    let current = parse_version(text)?;
    let next = bump_version(&current, bump)?;
    debug!(%current, %next, ?bump, "bumped version");
    Ok(Some(next))
}

/// Reads `reader` to the end and writes one bumped version per matching line.
///
/// Returns how many versions were written. Output for earlier lines is
/// already written when a later line fails.
pub fn bump_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    bump: VersionBump,
) -> Result<usize> {
    let extractor = VersionExtractor::new()?;
    let mut written = 0;

    for line in reader.lines() {
        let line = line?;
        if let Some(next) = next_version(&extractor, &line, bump)? {
            writeln!(writer, "{}", next)?;
            written += 1;
        }
    }

    writer.flush()?;
    Ok(written)
}
