// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item of a government budget: a category or subcategory with a
/// monetary value and optional subcategories. The wire format uses the
/// published dataset's compact keys (`l`, `v`, `c`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    #[serde(rename = "l")]
    pub label: String,
    #[serde(rename = "v")]
    pub value: Decimal,
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BudgetItem>>,
    /// Administrative classification code. Traceability only, never matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl BudgetItem {
    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().is_none_or(|c| c.is_empty())
    }

    pub fn children(&self) -> &[BudgetItem] {
        self.children.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetMeta {
    pub total_budget: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetDataset {
    pub meta: BudgetMeta,
    #[serde(rename = "data")]
    pub items: Vec<BudgetItem>,
}

/// A curated annotation rule: the first table entry whose `search` string is
/// contained in a budget item's label wins. Table order is a contract, not an
/// implementation detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaEntry {
    pub search: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

/// A budget item decorated with the display fields of its trivia match, if
/// any. Core fields are copied unchanged; annotation is additive.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedBudgetItem {
    pub label: String,
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
    pub children: Vec<AnnotatedBudgetItem>,
}

impl AnnotatedBudgetItem {
    pub fn is_matched(&self) -> bool {
        self.matched_name.is_some()
    }
}

/// Advisory diagnostic raised when aggregated values disagree beyond the
/// rounding tolerance. Never fatal; collected on a side channel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    /// A node's children sum to more than the node's own value.
    NodeSum {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        value: Decimal,
        children_sum: Decimal,
        discrepancy: Decimal,
    },
    /// The top-level items disagree with the declared grand total.
    TotalMismatch {
        total_budget: Decimal,
        items_sum: Decimal,
        discrepancy: Decimal,
    },
}

impl std::fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataQualityWarning::NodeSum {
                label,
                code,
                value,
                children_sum,
                discrepancy,
            } => {
                write!(
                    f,
                    "children of '{}' sum to {} but parent value is {} (off by {})",
                    label, children_sum, value, discrepancy
                )?;
                if let Some(code) = code {
                    write!(f, " [code {}]", code)?;
                }
                Ok(())
            }
            DataQualityWarning::TotalMismatch {
                total_budget,
                items_sum,
                discrepancy,
            } => write!(
                f,
                "top-level items sum to {} but declared total budget is {} (off by {})",
                items_sum, total_budget, discrepancy
            ),
        }
    }
}
