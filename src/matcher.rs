// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TriviaEntry;

/// How labels are compared against the table's `search` strings. The
/// current table is authored case-sensitively; looser deployments can opt
/// into case-insensitive containment without changing the contract.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    pub case_sensitive: bool,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy {
            case_sensitive: true,
        }
    }
}

/// Return the first entry whose `search` string is contained anywhere in
/// `label`, scanning the table in its declared order. No scoring, no
/// longest-match preference: table order is the tie-break.
pub fn find_match<'a>(label: &str, table: &'a [TriviaEntry]) -> Option<&'a TriviaEntry> {
    find_match_with(label, table, &MatchPolicy::default())
}

pub fn find_match_with<'a>(
    label: &str,
    table: &'a [TriviaEntry],
    policy: &MatchPolicy,
) -> Option<&'a TriviaEntry> {
    if label.is_empty() {
        return None;
    }
    if policy.case_sensitive {
        table.iter().find(|e| label.contains(&e.search))
    } else {
        let label = label.to_lowercase();
        table
            .iter()
            .find(|e| label.contains(&e.search.to_lowercase()))
    }
}
