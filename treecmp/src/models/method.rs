// src/models/method.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which metric a comparison reports as its primary value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Normalised similarity in `[0, 1]`.
    #[default]
    Ratio,
    /// Raw edit distance in characters.
    Distance,
}

/// What to do with a path that exists in only one of the two trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OneSidedPolicy {
    /// Compare against empty content, so the file shows up as fully different.
    #[default]
    Empty,
    /// Leave the file out of the rows and the total.
    Skip,
}
