//! Session Store
//!
//! Append-only prediction history scoped to one session, with summary
//! statistics and CSV export.

mod export;
mod history;

pub use export::export_csv;
pub use history::{HistorySummary, PredictionRecord, SessionHistory};

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Lock error: {0}")]
    Lock(String),
    #[error("CSV export failed: {0}")]
    Csv(String),
}
