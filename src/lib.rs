#![forbid(unsafe_code)]

//! carbonledger: a satirical CO2e calculator for online purchases.
//!
//! The core exposes a deterministic estimator, a randomized commentary
//! generator, fixed equivalence conversions, and an append-only per-session
//! history. The interactive form layer lives elsewhere and consumes these
//! entry points directly.

pub mod commentary;
pub mod equivalence;
pub mod estimator;
pub mod factors;
pub mod guards;
pub mod history;
pub mod session;
pub mod types;

// Re-export the surface the form layer consumes.
pub use commentary::{comment, comment_with, Commentary, SeverityBand, SeverityThresholds};
pub use equivalence::{equivalents, format_kg, format_tonnes, EmissionEquivalents};
pub use estimator::{estimate, estimate_with_model};
pub use factors::{DistanceBand, EmissionModel};
pub use guards::{InputGuard, ValidationError};
pub use history::SessionHistory;
pub use session::{PurchaseOutcome, PurchaseSession};
pub use types::{Category, DeliverySpeed, EmissionEstimate, HistoryRecord, PurchaseInput};
