use assert_cmd::Command;

pub fn header_cmd() -> Command {
    Command::cargo_bin("create-release-note-header").unwrap()
}

pub fn next_semver_cmd() -> Command {
    Command::cargo_bin("next-semver").unwrap()
}
