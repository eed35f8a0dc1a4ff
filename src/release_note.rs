use chrono::{NaiveDate, Utc};

/// Inputs for a changelog entry header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNoteHeader {
    pub server_url: String,
    pub repo_name: String,
    pub previous_tag: String,
    pub next_tag: String,
}

impl ReleaseNoteHeader {
    pub fn new(
        server_url: impl Into<String>,
        repo_name: impl Into<String>,
        previous_tag: impl Into<String>,
        next_tag: impl Into<String>,
    ) -> Self {
        ReleaseNoteHeader {
            server_url: server_url.into(),
            repo_name: repo_name.into(),
            previous_tag: previous_tag.into(),
            next_tag: next_tag.into(),
        }
    }

    pub fn repo_url(&self) -> String {
        format!("{}/{}", self.server_url, self.repo_name)
    }

    /// Link comparing the two tags, e.g. `https://github.com/org/repo/compare/v1.2.0...v1.3.0`
    pub fn compare_url(&self) -> String {
        format!(
            "{}/compare/{}...{}",
            self.repo_url(),
            self.previous_tag,
            self.next_tag
        )
    }

    /// Version shown in the heading.
    ///
    /// Every lowercase `v` in the next tag is removed, not only a leading
    /// prefix: `v1.3.0-dev` becomes `1.3.0-de`.
    pub fn version(&self) -> String {
        self.next_tag.replace('v', "")
    }

    /// Renders the markdown block for `date`.
    ///
    /// The block starts with a newline and ends with a blank line:
    /// `"\n### [1.3.0](<compare url>) (2024-01-01)\n\n"`.
    pub fn render(&self, date: NaiveDate) -> String {
        format!(
            "\n### [{}]({}) ({})\n\n",
            self.version(),
            self.compare_url(),
            date.format("%Y-%m-%d")
        )
    }

    /// Renders with the current UTC date.
    pub fn render_today(&self) -> String {
        self.render(today_utc())
    }
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
