//! Sales data cleaning.
//!
//! - **normalization**: per-cell parsing of dates, numbers and status
//! - **cleaner**: the ordered cleaning pass with its [`CleaningReport`]
//! - **dedupe**: first-occurrence de-duplication by key

pub mod cleaner;
pub mod dedupe;
pub mod normalization;

pub use cleaner::{
    CleanOutcome, CleaningReport, CoercionField, CoercionSummary, clean_records,
};
pub use dedupe::dedupe_by_key;
