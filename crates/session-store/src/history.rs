//! Session History Implementation

use crate::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// One stored prediction. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// When the prediction was made
    pub timestamp: DateTime<Utc>,
    /// Model output (12-month CLV, currency units)
    pub predicted_value: f64,
    /// Total spend at prediction time
    pub total_spend: f64,
    /// Engagement score at prediction time
    pub engagement_score: f64,
    /// Recency at prediction time (days)
    pub recency_days: u32,
}

/// Summary statistics over the stored predictions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    pub count: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Append-only prediction log for one session.
///
/// Cleared only on session teardown; there is no retention cap because the
/// log lives and dies with the session.
pub struct SessionHistory {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    records: Mutex<Vec<PredictionRecord>>,
}

impl SessionHistory {
    /// Start a fresh session
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        info!(%session_id, "starting prediction session");
        Self {
            session_id,
            started_at: Utc::now(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Session identifier
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Session start time
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append a record, returning the new history length
    pub fn append(&self, record: PredictionRecord) -> Result<usize, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        records.push(record);
        debug!(count = records.len(), "prediction recorded");
        Ok(records.len())
    }

    /// All records in chronological insertion order
    pub fn all(&self) -> Result<Vec<PredictionRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records.clone())
    }

    /// Most recent records, newest first
    pub fn recent(&self, limit: usize) -> Result<Vec<PredictionRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records.iter().rev().take(limit).cloned().collect())
    }

    /// Summary statistics of the predicted values, `None` while empty
    pub fn summary(&self) -> Result<Option<HistorySummary>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        if records.is_empty() {
            return Ok(None);
        }

        let count = records.len();
        let sum: f64 = records.iter().map(|r| r.predicted_value).sum();
        let max = records
            .iter()
            .map(|r| r.predicted_value)
            .fold(f64::MIN, f64::max);
        let min = records
            .iter()
            .map(|r| r.predicted_value)
            .fold(f64::MAX, f64::min);

        Ok(Some(HistorySummary {
            count,
            mean: sum / count as f64,
            max,
            min,
        }))
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all records (session teardown)
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            info!(session_id = %self.session_id, dropped = records.len(), "clearing session history");
            records.clear();
        }
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(predicted_value: f64) -> PredictionRecord {
        PredictionRecord {
            timestamp: Utc::now(),
            predicted_value,
            total_spend: 1000.0,
            engagement_score: 0.5,
            recency_days: 30,
        }
    }

    #[test]
    fn test_append_and_order() {
        let history = SessionHistory::new();
        for i in 0..5 {
            history.append(record(i as f64 * 100.0)).unwrap();
        }

        assert_eq!(history.len(), 5);
        let all = history.all().unwrap();
        let values: Vec<f64> = all.iter().map(|r| r.predicted_value).collect();
        assert_eq!(values, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let history = SessionHistory::new();
        for i in 0..5 {
            history.append(record(i as f64)).unwrap();
        }

        let recent = history.recent(3).unwrap();
        let values: Vec<f64> = recent.iter().map(|r| r.predicted_value).collect();
        assert_eq!(values, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_summary_statistics() {
        let history = SessionHistory::new();
        for value in [1200.0, 800.0, 4000.0] {
            history.append(record(value)).unwrap();
        }

        let summary = history.summary().unwrap().unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.mean - 2000.0).abs() < 1e-9);
        assert_eq!(summary.max, 4000.0);
        assert_eq!(summary.min, 800.0);
    }

    #[test]
    fn test_empty_summary_is_none() {
        let history = SessionHistory::new();
        assert!(history.summary().unwrap().is_none());
    }

    #[test]
    fn test_clear() {
        let history = SessionHistory::new();
        history.append(record(100.0)).unwrap();
        history.clear();
        assert!(history.is_empty());
        assert!(history.summary().unwrap().is_none());
    }
}
