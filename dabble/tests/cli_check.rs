//! CLI tests for `dabble check`, `dabble init`, and `dabble stats`.
//!
//! Spawns the dabble binary and verifies exit codes for won, unwon, and
//! malformed boards.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use dabble::exit_codes;
use dabble::io::init::{InitOptions, init_dabble};

const CAT_BOARD: &str = "\
..........
..........
..........
..........
..CAT.....
..........
..........
..........
..........
..........
";

fn dabble(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dabble"))
        .current_dir(root)
        .args(args)
        .output()
        .expect("run dabble")
}

fn game_root() -> tempfile::TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("words.txt"), "cat\ndog\n").expect("write words");
    fs::write(temp.path().join("board.txt"), CAT_BOARD).expect("write board");
    temp
}

#[test]
fn won_board_exits_ok() {
    let temp = game_root();
    let output = dabble(temp.path(), &["check", "board.txt", "--demo"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 ..CAT....."));
    assert!(stdout.contains("won=true"));
    assert!(stdout.contains("words=CAT"));
}

#[test]
fn unwon_board_exits_not_won() {
    let temp = game_root();
    let output = dabble(temp.path(), &["check", "board.txt"]);

    assert_eq!(output.status.code(), Some(exit_codes::NOT_WON));
    assert!(String::from_utf8_lossy(&output.stdout).contains("tiles=3/12"));
}

#[test]
fn config_rules_apply_to_check() {
    let temp = game_root();
    init_dabble(temp.path(), &InitOptions { force: false }).expect("init");
    fs::write(
        temp.path().join(".dabble/config.toml"),
        "min_word_length = 2\nwin_tile_count = 3\ndictionary_path = \"words.txt\"\n",
    )
    .expect("write config");

    let output = dabble(temp.path(), &["check", "board.txt"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
}

#[test]
fn missing_dictionary_still_checks() {
    let temp = game_root();
    let output = dabble(
        temp.path(),
        &["check", "board.txt", "--demo", "--dictionary", "nope.txt"],
    );

    assert_eq!(output.status.code(), Some(exit_codes::NOT_WON));
    assert!(String::from_utf8_lossy(&output.stdout).contains("4 ..cat....."));
}

#[test]
fn malformed_board_exits_invalid() {
    let temp = game_root();
    fs::write(temp.path().join("short.txt"), "CAT\n").expect("write board");
    let output = dabble(temp.path(), &["check", "short.txt"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("parse board layout"));
}

#[test]
fn init_twice_without_force_fails() {
    let temp = game_root();
    assert_eq!(
        dabble(temp.path(), &["init"]).status.code(),
        Some(exit_codes::OK)
    );
    assert_eq!(
        dabble(temp.path(), &["init"]).status.code(),
        Some(exit_codes::INVALID)
    );
    assert_eq!(
        dabble(temp.path(), &["init", "--force"]).status.code(),
        Some(exit_codes::OK)
    );
}

#[test]
fn stats_reports_zero_after_init() {
    let temp = game_root();
    dabble(temp.path(), &["init"]);
    let output = dabble(temp.path(), &["stats"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "played=0 won=0 win%=0\n"
    );
}
