use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{EmissionEstimate, HistoryRecord, PurchaseInput};

/// Append-only ledger of this session's calculations.
///
/// Insertion order is significant and records are never mutated or removed;
/// the store lives and dies with its owning session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    records: Vec<HistoryRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        SessionHistory::default()
    }

    /// Append one record and return a reference to it.
    pub fn record(&mut self, input: PurchaseInput, estimate: EmissionEstimate) -> &HistoryRecord {
        let seq = self.records.len() as u64;
        debug!(seq, kg_co2e = estimate.kg_co2e, "recording purchase in session history");
        self.records.push(HistoryRecord {
            seq,
            recorded_at: Utc::now(),
            input,
            estimate,
        });
        &self.records[self.records.len() - 1]
    }

    /// Full history in insertion order.
    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, DeliverySpeed};

    fn purchase(name: &str) -> PurchaseInput {
        PurchaseInput {
            name: name.into(),
            category: Category::BooksMedia,
            price_usd: 12.0,
            quantity: 1,
            weight_kg: 0.4,
            distance_km: 300.0,
            speed: DeliverySpeed::Standard,
            donate_offset: false,
        }
    }

    fn est(kg_co2e: f64) -> EmissionEstimate {
        EmissionEstimate {
            kg_co2e,
            category: Category::BooksMedia,
        }
    }

    #[test]
    fn test_record_appends_exactly_one() {
        let mut history = SessionHistory::new();
        assert!(history.is_empty());

        history.record(purchase("first"), est(1.0));
        assert_eq!(history.len(), 1);

        history.record(purchase("second"), est(2.0));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_last_record_matches_input_and_estimate() {
        let mut history = SessionHistory::new();
        let input = purchase("paperback");
        let estimate = est(1.32);
        history.record(input.clone(), estimate.clone());

        let last = &history.all()[history.len() - 1];
        assert_eq!(last.input, input);
        assert_eq!(last.estimate, estimate);
    }

    #[test]
    fn test_insertion_order_and_sequence_indices() {
        let mut history = SessionHistory::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            let record = history.record(purchase(name), est(i as f64));
            assert_eq!(record.seq, i as u64);
        }
        let names: Vec<&str> = history.all().iter().map(|r| r.input.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
