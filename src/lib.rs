// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod annotate;
pub mod cli;
pub mod commands;
pub mod error;
pub mod matcher;
pub mod models;
pub mod trivia;
pub mod utils;
