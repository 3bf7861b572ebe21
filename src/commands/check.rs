// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::annotate::{check_sums, load_dataset};
use crate::models::DataQualityWarning;
use crate::utils::{fmt_amount, pretty_table};
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("dataset").unwrap();
    let dataset = load_dataset(path).with_context(|| format!("Load budget dataset {}", path))?;

    let warnings = check_sums(&dataset);

    if warnings.is_empty() {
        println!("✅ check: no data-quality issues found");
        return Ok(());
    }

    let mut rows = Vec::new();
    for w in &warnings {
        match w {
            DataQualityWarning::NodeSum {
                label,
                code,
                value,
                children_sum,
                discrepancy,
            } => rows.push(vec![
                "node_sum".into(),
                match code {
                    Some(c) => format!("{} [{}]", label, c),
                    None => label.clone(),
                },
                fmt_amount(value),
                fmt_amount(children_sum),
                fmt_amount(discrepancy),
            ]),
            DataQualityWarning::TotalMismatch {
                total_budget,
                items_sum,
                discrepancy,
            } => rows.push(vec![
                "total_mismatch".into(),
                "(declared total budget)".into(),
                fmt_amount(total_budget),
                fmt_amount(items_sum),
                fmt_amount(discrepancy),
            ]),
        }
    }
    println!(
        "{}",
        pretty_table(&["Issue", "Item", "Declared", "Sum", "Off By"], rows)
    );
    Ok(())
}
