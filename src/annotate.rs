// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::DatasetError;
use crate::matcher::{self, MatchPolicy};
use crate::models::{AnnotatedBudgetItem, BudgetDataset, BudgetItem, DataQualityWarning, TriviaEntry};

/// Relative tolerance for parent/child and root/total sum checks. The source
/// government datasets carry minor rounding inconsistencies, so anything
/// within 1% passes silently.
const SUM_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// Defensive cap on nesting. Real budget trees are at most a handful of
/// levels deep; anything past this is not tree-shaped data.
const MAX_DEPTH: usize = 32;

/// Read and deserialize a budget dataset from a JSON file. Shape violations
/// (missing label or value, non-numeric value, over-deep nesting, negative
/// amounts) are fatal; no partial tree is produced.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<BudgetDataset, DatasetError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let dataset: BudgetDataset = serde_json::from_str(&raw)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Structural validation of an already-deserialized dataset.
pub fn validate_dataset(dataset: &BudgetDataset) -> Result<(), DatasetError> {
    for item in &dataset.items {
        check_item(item, 1)?;
    }
    Ok(())
}

fn check_item(item: &BudgetItem, depth: usize) -> Result<(), DatasetError> {
    if depth > MAX_DEPTH {
        return Err(DatasetError::DepthExceeded(MAX_DEPTH));
    }
    if item.value.is_sign_negative() && !item.value.is_zero() {
        return Err(DatasetError::NegativeValue {
            label: item.label.clone(),
            value: item.value,
        });
    }
    for child in item.children() {
        check_item(child, depth + 1)?;
    }
    Ok(())
}

/// Run only the advisory value-sum checks: the root total cross-check, then
/// every node in pre-order. No matching is performed and no tree is built.
pub fn check_sums(dataset: &BudgetDataset) -> Vec<DataQualityWarning> {
    let mut warnings = Vec::new();
    if let Some(w) = total_warning(dataset) {
        warnings.push(w);
    }
    for item in &dataset.items {
        check_item_sums(item, &mut warnings);
    }
    warnings
}

fn check_item_sums(item: &BudgetItem, warnings: &mut Vec<DataQualityWarning>) {
    if let Some(w) = node_sum_warning(item) {
        warnings.push(w);
    }
    for child in item.children() {
        check_item_sums(child, warnings);
    }
}

fn total_warning(dataset: &BudgetDataset) -> Option<DataQualityWarning> {
    let items_sum: Decimal = dataset.items.iter().map(|i| i.value).sum();
    if exceeds_tolerance(dataset.meta.total_budget, items_sum) {
        Some(DataQualityWarning::TotalMismatch {
            total_budget: dataset.meta.total_budget,
            items_sum,
            discrepancy: items_sum - dataset.meta.total_budget,
        })
    } else {
        None
    }
}

fn node_sum_warning(item: &BudgetItem) -> Option<DataQualityWarning> {
    if item.is_leaf() {
        return None;
    }
    let children_sum: Decimal = item.children().iter().map(|c| c.value).sum();
    if exceeds_tolerance(item.value, children_sum) {
        Some(DataQualityWarning::NodeSum {
            label: item.label.clone(),
            code: item.code.clone(),
            value: item.value,
            children_sum,
            discrepancy: children_sum - item.value,
        })
    } else {
        None
    }
}

/// Annotate every node of the dataset against the trivia table and run the
/// advisory value-sum checks. Returns the decorated tree (siblings in input
/// order, core fields untouched) and the collected warnings. Pure over its
/// inputs; the dataset is not retained or mutated.
pub fn annotate(
    dataset: &BudgetDataset,
    table: &[TriviaEntry],
) -> (Vec<AnnotatedBudgetItem>, Vec<DataQualityWarning>) {
    annotate_with(dataset, table, &MatchPolicy::default())
}

pub fn annotate_with(
    dataset: &BudgetDataset,
    table: &[TriviaEntry],
    policy: &MatchPolicy,
) -> (Vec<AnnotatedBudgetItem>, Vec<DataQualityWarning>) {
    let mut warnings = Vec::new();
    if let Some(w) = total_warning(dataset) {
        warnings.push(w);
    }

    let annotated = dataset
        .items
        .iter()
        .map(|item| annotate_item(item, table, policy, &mut warnings))
        .collect();
    (annotated, warnings)
}

// Pre-order: the parent is decorated and checked before its children so a
// consumer can stream the output top-down.
fn annotate_item(
    item: &BudgetItem,
    table: &[TriviaEntry],
    policy: &MatchPolicy,
    warnings: &mut Vec<DataQualityWarning>,
) -> AnnotatedBudgetItem {
    let matched = matcher::find_match_with(&item.label, table, policy);

    if let Some(w) = node_sum_warning(item) {
        warnings.push(w);
    }

    AnnotatedBudgetItem {
        label: item.label.clone(),
        value: item.value,
        code: item.code.clone(),
        matched_name: matched.map(|e| e.name.clone()),
        matched_icon: matched.map(|e| e.icon.clone()),
        matched_question: matched.and_then(|e| e.question.clone()),
        children: item
            .children()
            .iter()
            .map(|c| annotate_item(c, table, policy, warnings))
            .collect(),
    }
}

fn exceeds_tolerance(declared: Decimal, sum: Decimal) -> bool {
    sum > declared + declared.abs() * SUM_TOLERANCE
}
