use semver::Version;

use crate::error::{ReleaseError, Result};

/// Represents the type of semantic version bump to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Decides the bump from the raw command-line value.
    ///
    /// Only the exact strings `major` and `minor` select those bumps. Any
    /// other value, including no value at all, means a patch bump.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("major") => VersionBump::Major,
            Some("minor") => VersionBump::Minor,
            _ => VersionBump::Patch,
        }
    }
}

/// Parses a bare `major.minor.patch` string.
pub fn parse_version(text: &str) -> Result<Version> {
    Version::parse(text)
        .map_err(|e| ReleaseError::version(format!("Invalid version '{}': {}", text, e)))
}

/// Bumps a version according to the specified bump type.
///
/// Increments the appropriate component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// Pre-release and build metadata are dropped from the result.
///
/// # Example
/// ```
/// use release_notes_tools::version::{bump_version, VersionBump};
/// use semver::Version;
///
/// let v = Version::new(2, 3, 4);
/// assert_eq!(bump_version(&v, VersionBump::Major).unwrap(), Version::new(3, 0, 0));
/// assert_eq!(bump_version(&v, VersionBump::Minor).unwrap(), Version::new(2, 4, 0));
/// assert_eq!(bump_version(&v, VersionBump::Patch).unwrap(), Version::new(2, 3, 5));
/// ```
pub fn bump_version(version: &Version, bump_type: VersionBump) -> Result<Version> {
    let overflow = || ReleaseError::version(format!("Cannot bump {}: component overflow", version));

    let next = match bump_type {
        VersionBump::Major => {
            Version::new(version.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
        }
        VersionBump::Minor => Version::new(
            version.major,
            version.minor.checked_add(1).ok_or_else(overflow)?,
            0,
        ),
        VersionBump::Patch => Version::new(
            version.major,
            version.minor,
            version.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };
    Ok(next)
}
