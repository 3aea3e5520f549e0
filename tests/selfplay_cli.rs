use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn selfplay_plays_until_exhaustion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dict = dir.path().join("words.txt");
    // Exactly one reachable move: СТОЛ -> СТОЛБ; afterwards the computer concedes
    fs::write(&dict, "СТОЛ\nСТОЛБ\n").expect("write dict");

    let mut cmd = Command::cargo_bin("selfplay").expect("binary exists");
    cmd.args([
        "--dict",
        dict.to_str().expect("utf8 path"),
        "--word",
        "СТОЛ",
        "--seed",
        "7",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("СТОЛБ"))
        .stdout(predicate::str::contains("no legal move available"))
        .stdout(predicate::str::contains("Final scores"));
}

#[test]
fn selfplay_fails_cleanly_on_missing_dictionary() {
    let mut cmd = Command::cargo_bin("selfplay").expect("binary exists");
    cmd.args(["--dict", "definitely-not-here.txt"]);
    cmd.assert().failure();
}
