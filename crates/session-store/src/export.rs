//! CSV Export

use crate::history::PredictionRecord;
use crate::StoreError;
use tracing::debug;

/// Column headers of the export, fixed and unversioned
const EXPORT_COLUMNS: [&str; 5] = [
    "timestamp",
    "prediction",
    "total_spend",
    "engagement_score",
    "recency",
];

/// Serialize records to CSV in chronological order.
///
/// Timestamps are formatted as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn export_csv(records: &[PredictionRecord]) -> Result<String, StoreError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(EXPORT_COLUMNS)
        .map_err(|e| StoreError::Csv(e.to_string()))?;

    for record in records {
        writer
            .write_record(&[
                record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                record.predicted_value.to_string(),
                record.total_spend.to_string(),
                record.engagement_score.to_string(),
                record.recency_days.to_string(),
            ])
            .map_err(|e| StoreError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::Csv(e.to_string()))?;
    let csv = String::from_utf8(bytes).map_err(|e| StoreError::Csv(e.to_string()))?;

    debug!(rows = records.len(), "exported history to CSV");
    Ok(csv)
}
