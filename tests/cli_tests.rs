// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use budgetlens::{cli, commands};
use tempfile::NamedTempFile;

fn dataset_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(
        br#"{
            "meta": { "total_budget": 2000000000 },
            "data": [
                { "l": "Zuschuss an Vivantes Hospitals", "v": 1500000000 },
                { "l": "S-Bahn Ausbau", "v": 500000000 }
            ]
        }"#,
    )
    .unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn annotate_command_runs_against_builtin_table() {
    let f = dataset_file();
    let matches = cli::build_cli().get_matches_from([
        "budgetlens",
        "annotate",
        "--dataset",
        f.path().to_str().unwrap(),
        "--json",
    ]);
    if let Some(("annotate", sub)) = matches.subcommand() {
        commands::annotate::handle(sub).unwrap();
    } else {
        panic!("annotate command not parsed");
    }
}

#[test]
fn annotate_command_fails_on_missing_dataset() {
    let matches = cli::build_cli().get_matches_from([
        "budgetlens",
        "annotate",
        "--dataset",
        "/nonexistent/budget.json",
    ]);
    if let Some(("annotate", sub)) = matches.subcommand() {
        let err = commands::annotate::handle(sub).unwrap_err();
        assert!(err.to_string().contains("Load budget dataset"));
    } else {
        panic!("annotate command not parsed");
    }
}

#[test]
fn check_command_reports_cleanly() {
    let f = dataset_file();
    let matches = cli::build_cli().get_matches_from([
        "budgetlens",
        "check",
        "--dataset",
        f.path().to_str().unwrap(),
    ]);
    if let Some(("check", sub)) = matches.subcommand() {
        commands::check::handle(sub).unwrap();
    } else {
        panic!("check command not parsed");
    }
}

#[test]
fn trivia_list_accepts_external_table() {
    let mut t = NamedTempFile::new().unwrap();
    t.write_all(r#"[{"search": "S-Bahn", "name": "the S-Bahn", "icon": "🚆"}]"#.as_bytes())
        .unwrap();
    t.flush().unwrap();

    let matches = cli::build_cli().get_matches_from([
        "budgetlens",
        "trivia",
        "list",
        "--trivia",
        t.path().to_str().unwrap(),
        "--jsonl",
    ]);
    if let Some(("trivia", trivia_m)) = matches.subcommand() {
        commands::trivia::handle(trivia_m).unwrap();
    } else {
        panic!("trivia command not parsed");
    }
}
