// src/models.rs
mod aggregate_result;
mod comparison_pair;
mod file_entry;
mod file_result;
mod method;

pub use aggregate_result::AggregateResult;
pub use comparison_pair::{ComparisonPair, PairKind};
pub use file_entry::FileEntry;
pub use file_result::FileResult;
pub use method::{Method, OneSidedPolicy};
