// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::annotate::{annotate_with, load_dataset};
use crate::matcher::MatchPolicy;
use crate::models::AnnotatedBudgetItem;
use crate::trivia;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let path = m.get_one::<String>("dataset").unwrap();

    let dataset = load_dataset(path).with_context(|| format!("Load budget dataset {}", path))?;
    let table = match m.get_one::<String>("trivia") {
        Some(p) => trivia::load_table(p).with_context(|| format!("Load trivia table {}", p))?,
        None => trivia::builtin_table().to_vec(),
    };
    let policy = MatchPolicy {
        case_sensitive: !m.get_flag("ignore_case"),
    };

    let (items, warnings) = annotate_with(&dataset, &table, &policy);

    // Advisory only; keep them off stdout so piped JSON stays clean.
    for w in &warnings {
        eprintln!("warning: {}", w);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let mut rows = Vec::new();
        collect_matched(&items, &mut rows);
        if rows.is_empty() {
            println!("No trivia matches in {}", path);
        } else {
            println!("{}", pretty_table(&["Line Item", "Value", "Known As", "Icon"], rows));
        }
    }
    Ok(())
}

fn collect_matched(items: &[AnnotatedBudgetItem], rows: &mut Vec<Vec<String>>) {
    for item in items {
        if let (Some(name), Some(icon)) = (&item.matched_name, &item.matched_icon) {
            rows.push(vec![
                item.label.clone(),
                fmt_amount(&item.value),
                name.clone(),
                icon.clone(),
            ]);
        }
        collect_matched(&item.children, rows);
    }
}
