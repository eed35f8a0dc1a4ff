//! Command-line arguments for both binaries.

use clap::Parser;

use crate::release_note::ReleaseNoteHeader;
use crate::version::VersionBump;

#[derive(Parser, Debug)]
#[command(
    name = "create-release-note-header",
    version,
    about = "Print the markdown header for a changelog entry"
)]
pub struct HeaderArgs {
    #[arg(help = "Server URL, e.g. https://github.com")]
    pub server_url: String,

    #[arg(help = "Repository name, e.g. org/repo")]
    pub repo_name: String,

    #[arg(help = "Tag of the previous release")]
    pub previous_tag: String,

    #[arg(help = "Tag of the release being described")]
    pub next_tag: String,

    /// Anything after the fourth positional is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    #[arg(short, long, help = "Log debug details to stderr")]
    pub verbose: bool,
}

impl HeaderArgs {
    pub fn header(&self) -> ReleaseNoteHeader {
        ReleaseNoteHeader::new(
            self.server_url.as_str(),
            self.repo_name.as_str(),
            self.previous_tag.as_str(),
            self.next_tag.as_str(),
        )
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "next-semver",
    version,
    about = "Bump every version read from stdin and print the result"
)]
pub struct NextSemverArgs {
    /// Unknown values, hyphen-leading ones included, fall back to a patch
    /// bump instead of a usage error.
    #[arg(
        allow_hyphen_values = true,
        help = "Bump type: major, minor, or anything else for patch"
    )]
    pub bump: Option<String>,

    /// Arguments after the bump type are ignored. Flags only apply before it.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    #[arg(short, long, help = "Log debug details to stderr")]
    pub verbose: bool,
}

impl NextSemverArgs {
    pub fn bump_type(&self) -> VersionBump {
        VersionBump::from_arg(self.bump.as_deref())
    }
}
