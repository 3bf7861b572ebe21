// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::trivia;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub),
        _ => Ok(()),
    }
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let table = match sub.get_one::<String>("trivia") {
        Some(p) => trivia::load_table(p).with_context(|| format!("Load trivia table {}", p))?,
        None => trivia::builtin_table().to_vec(),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &table)? {
        let rows = table
            .iter()
            .enumerate()
            .map(|(i, e)| {
                vec![
                    (i + 1).to_string(),
                    e.search.clone(),
                    e.name.clone(),
                    e.icon.clone(),
                    e.question.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "Search", "Name", "Icon", "Question"], rows)
        );
    }
    Ok(())
}
