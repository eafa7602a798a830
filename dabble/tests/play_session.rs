//! Scripted `run_play` sessions against a temporary game root.

use std::io::Cursor;

use dabble::core::types::{MinWordLength, Rules};
use dabble::io::config::load_config;
use dabble::io::paths::DabblePaths;
use dabble::io::stats::load_stats;
use dabble::play::{PlayOptions, PlaySummary, run_play};
use dabble::test_support::dictionary;

fn options(root: &std::path::Path, letters: &str) -> PlayOptions {
    PlayOptions {
        seed: None,
        letters: Some(letters.to_string()),
        paths: DabblePaths::new(root),
    }
}

fn play(options: &PlayOptions, words: &[&str], script: &str) -> (PlaySummary, String) {
    let mut output = Vec::new();
    let summary = run_play(
        dictionary(words),
        Rules::demo(MinWordLength::Two),
        options,
        Cursor::new(script.to_string()),
        &mut output,
    )
    .expect("play");
    (summary, String::from_utf8(output).expect("utf8"))
}

#[test]
fn scripted_demo_round_wins_and_records_stats() {
    let temp = tempfile::tempdir().expect("tempdir");
    let options = options(temp.path(), "CAT");
    let script = "place 1 4 2\nplace 1 4 3\nplace 1 4 4\nremove 4 2\nstats\nquit\n";

    let (summary, output) = play(&options, &["CAT"], script);

    assert_eq!(summary, PlaySummary { rounds: 1, wins: 1 });
    assert!(output.starts_with("tray: 1:C 2:A 3:T\n"));
    assert!(output.contains("4 ..CAT.....\n"));
    assert!(output.contains("word found: CAT\n"));
    assert!(output.contains("solved! time "));
    assert!(output.contains("error: round already won"));
    assert!(output.contains("played=1 won=1 win%=100\n"));

    let stats = load_stats(&options.paths.stats_path).expect("stats");
    assert_eq!((stats.played, stats.won), (1, 1));
}

#[test]
fn bad_commands_do_not_end_the_session() {
    let temp = tempfile::tempdir().expect("tempdir");
    let options = options(temp.path(), "AB");
    let script = "dance\nplace 9 0 0\nremove 3 3\nplace 1 0 0\nplace 1 0 0\nshow\n";

    let (summary, output) = play(&options, &[], script);

    assert_eq!(summary, PlaySummary { rounds: 1, wins: 0 });
    assert!(output.contains("error: unknown command"));
    assert!(output.contains("error: no die in tray slot 9"));
    assert!(output.contains("error: no die at cell 33"));
    assert!(output.contains("placed A at 0 0\n"));
    assert!(output.contains("placed B at 0 1\n"));
    assert!(output.contains("0 ab........\n"));
}

#[test]
fn min_command_persists_and_new_round_counts_as_played() {
    let temp = tempfile::tempdir().expect("tempdir");
    let options = options(temp.path(), "AT");
    let script = "place 1 0 0\nplace 1 0 1\nmin 3\nnew\nstats\n";

    let (summary, output) = play(&options, &["AT"], script);

    assert_eq!(summary.rounds, 2);
    assert!(output.contains("0 AT........\n"));
    assert!(output.contains("minimum word length is now 3\n"));
    assert!(output.contains("0 at........\n"));
    assert!(output.contains("round 2\n"));
    assert!(output.contains("played=2 won=0 win%=0\n"));

    let cfg = load_config(&options.paths.config_path).expect("config");
    assert_eq!(cfg.min_word_length, MinWordLength::Three);
}

#[test]
fn tray_too_small_for_the_rules_is_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let options = options(temp.path(), "CAT");

    let err = run_play(
        dictionary(&["CAT"]),
        Rules::full(MinWordLength::Two),
        &options,
        Cursor::new(String::new()),
        Vec::new(),
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("tray has 3 dice but a win needs 12 tiles"));
    assert!(!options.paths.stats_path.exists());
}
