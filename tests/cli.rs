use assert_cmd::Command;
use predicates::prelude::*;

fn squiggles_cmd() -> Command {
    Command::cargo_bin("squiggles").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    squiggles_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand and shape drawing canvas for Wayland",
        ));
}

#[test]
fn help_lists_both_options() {
    squiggles_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--portrait"))
        .stdout(predicate::str::contains("--image"));
}

#[test]
fn running_requires_wayland_env() {
    squiggles_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wayland environment required"));
}

#[test]
fn image_option_requires_a_path() {
    squiggles_cmd()
        .arg("--image")
        .assert()
        .failure()
        .stderr(predicate::str::contains("a value is required"));
}
