// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .value_name("FILE")
        .help("JSON trivia table to use instead of the built-in one")
}

pub fn build_cli() -> Command {
    Command::new("budgetlens")
        .about("Explore a hierarchical public budget with human-relatable trivia annotations")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(
            json_flags(
                Command::new("annotate")
                    .about("Annotate a budget dataset against the trivia table")
                    .arg(
                        Arg::new("dataset")
                            .long("dataset")
                            .value_name("FILE")
                            .required(true)
                            .help("Budget dataset JSON file"),
                    )
                    .arg(trivia_arg())
                    .arg(
                        Arg::new("ignore_case")
                            .long("ignore-case")
                            .action(ArgAction::SetTrue)
                            .help("Match labels case-insensitively"),
                    ),
            ),
        )
        .subcommand(
            Command::new("check")
                .about("Run only the data-quality checks on a budget dataset")
                .arg(
                    Arg::new("dataset")
                        .long("dataset")
                        .value_name("FILE")
                        .required(true)
                        .help("Budget dataset JSON file"),
                ),
        )
        .subcommand(
            Command::new("trivia").about("Inspect the annotation table").subcommand(
                json_flags(
                    Command::new("list")
                        .about("List the active trivia entries in match order")
                        .arg(trivia_arg()),
                ),
            ),
        )
}
