use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::commentary::{comment_with, Commentary, SeverityThresholds};
use crate::equivalence::{equivalents, EmissionEquivalents};
use crate::estimator::estimate_with_model;
use crate::factors::EmissionModel;
use crate::guards::{InputGuard, ValidationError};
use crate::history::SessionHistory;
use crate::types::{EmissionEstimate, HistoryRecord, PurchaseInput};

/// Everything the form layer renders after one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub estimate: EmissionEstimate,
    pub commentary: Commentary,
    pub equivalents: EmissionEquivalents,
    pub record: HistoryRecord,
}

/// Per-session interaction handler.
///
/// Owns the session's history exclusively; construct one per user session
/// and drop it at session end. Never share a session across users.
#[derive(Debug)]
pub struct PurchaseSession {
    session_id: Uuid,
    model: EmissionModel,
    thresholds: SeverityThresholds,
    history: SessionHistory,
}

impl PurchaseSession {
    pub fn new() -> Self {
        PurchaseSession::with_model(EmissionModel::default(), SeverityThresholds::default())
    }

    pub fn with_model(model: EmissionModel, thresholds: SeverityThresholds) -> Self {
        PurchaseSession {
            session_id: Uuid::new_v4(),
            model,
            thresholds,
            history: SessionHistory::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Run one submission with a thread-local RNG.
    pub fn submit(&mut self, input: PurchaseInput) -> Result<PurchaseOutcome, ValidationError> {
        self.submit_with(input, &mut rand::thread_rng())
    }

    /// Run one submission: validate, estimate, comment, translate, record.
    /// The chain is synchronous; either it completes and the history grows by
    /// one, or validation rejects the input and the session is untouched.
    pub fn submit_with<R: Rng + ?Sized>(
        &mut self,
        input: PurchaseInput,
        rng: &mut R,
    ) -> Result<PurchaseOutcome, ValidationError> {
        InputGuard::validate_purchase(&input)?;

        let estimate = estimate_with_model(&input, &self.model);
        let commentary = comment_with(&estimate, &input, &self.model, &self.thresholds, rng);
        let equivalents = equivalents(&estimate);
        let record = self.history.record(input, estimate.clone()).clone();

        info!(
            session_id = %self.session_id,
            seq = record.seq,
            kg_co2e = estimate.kg_co2e,
            "purchase submitted"
        );

        Ok(PurchaseOutcome {
            estimate,
            commentary,
            equivalents,
            record,
        })
    }
}

impl Default for PurchaseSession {
    fn default() -> Self {
        PurchaseSession::new()
    }
}
