// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Fatal load-time failures. Shape violations refuse to produce a tree;
/// value-sum inconsistencies are NOT errors (see
/// [`DataQualityWarning`](crate::models::DataQualityWarning)).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("negative value {value} for budget item '{label}'")]
    NegativeValue { label: String, value: Decimal },

    #[error("budget tree nested deeper than {0} levels, refusing non-tree-shaped input")]
    DepthExceeded(usize),

    #[error("trivia entry '{name}' has an empty search string")]
    EmptySearch { name: String },
}
