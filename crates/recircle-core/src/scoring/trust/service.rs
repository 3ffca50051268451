use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::compose::{RatingInput, TrustBreakdown, TrustComposer};
use super::repository::{SellerStore, StoreError};
use super::seller::{Seller, TrustChange};

/// Review payload consumed to update a seller; not persisted as its own
/// entity.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSubmission {
    #[serde(default)]
    pub review: String,
    pub rating: RatingInput,
    #[serde(default = "default_delivery", alias = "deliveryExperience")]
    pub delivery: String,
    #[serde(default = "default_recommend")]
    pub recommend: String,
    #[serde(default, rename = "sellerName")]
    pub seller_name: Option<String>,
    #[serde(default, rename = "from")]
    pub reviewer: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
}

fn default_delivery() -> String {
    "average".to_string()
}

fn default_recommend() -> String {
    "Yes".to_string()
}

/// Result of a review submission. `seller` and `trust_change` are absent
/// when the store failed and no record was read or written; reporting a
/// blend against state that may not match the stored record would be a lie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewOutcome {
    pub status: ReviewStatus,
    pub breakdown: TrustBreakdown,
    pub seller: Option<Seller>,
    pub trust_change: Option<TrustChange>,
}

/// Recorded, or scored but not persisted (store failed after computation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Recorded,
    ScoredOnly,
}

/// Service applying reviews to seller reputation records.
///
/// Sentiment and composition run before the write gate is taken; only the
/// seller read-modify-write happens under it, so concurrent submissions for
/// any seller serialize without holding the lock through CPU-bound scoring.
pub struct ReviewService<S> {
    store: Arc<S>,
    composer: TrustComposer,
    write_gate: Mutex<()>,
}

impl<S> ReviewService<S>
where
    S: SellerStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            composer: TrustComposer::default(),
            write_gate: Mutex::new(()),
        }
    }

    pub fn seller(&self, seller_id: &str) -> Result<Option<Seller>, ReviewServiceError> {
        Ok(self.store.fetch(seller_id)?)
    }

    pub fn submit_review(
        &self,
        seller_id: &str,
        submission: ReviewSubmission,
    ) -> Result<ReviewOutcome, ReviewServiceError> {
        if seller_id.trim().is_empty() {
            return Err(ReviewServiceError::MissingSellerId);
        }
        let Some(rating) = submission.rating.as_f64() else {
            return Err(ReviewServiceError::InvalidRating(format!(
                "{:?}",
                submission.rating
            )));
        };

        let breakdown = self.composer.compose(
            &submission.review,
            &submission.rating,
            &submission.delivery,
            &submission.recommend,
        );
        let recommended = submission.recommend.trim().eq_ignore_ascii_case("yes");
        let clamped_rating = rating.clamp(1.0, 5.0);

        let _gate = self.write_gate.lock().expect("review write gate poisoned");
        let now = Utc::now();
        let mut seller = match self.store.fetch(seller_id) {
            Ok(Some(existing)) => existing,
            Ok(None) => {
                let name = submission
                    .seller_name
                    .clone()
                    .unwrap_or_else(|| format!("Seller {seller_id}"));
                info!(seller = seller_id, "creating seller with neutral prior");
                Seller::with_neutral_prior(seller_id.to_string(), name, now)
            }
            Err(err) => return self.scored_only(seller_id, breakdown, err),
        };

        let trust_change = seller.apply_review(breakdown.final_score, clamped_rating, recommended, now);
        info!(
            seller = seller_id,
            old = trust_change.old,
            new = trust_change.new,
            "trust score updated"
        );

        if let Err(err) = self.store.upsert(seller.clone()) {
            return self.scored_only(seller_id, breakdown, err);
        }

        Ok(ReviewOutcome {
            status: ReviewStatus::Recorded,
            breakdown,
            seller: Some(seller),
            trust_change: Some(trust_change),
        })
    }

    /// The composite was computed but the store failed: hand the caller the
    /// scores with a partial-success status instead of dropping the review.
    /// No seller view is attached; the stored record was not updated.
    fn scored_only(
        &self,
        seller_id: &str,
        breakdown: TrustBreakdown,
        err: StoreError,
    ) -> Result<ReviewOutcome, ReviewServiceError> {
        warn!(seller = seller_id, error = %err, "trust computed but store failed");
        Ok(ReviewOutcome {
            status: ReviewStatus::ScoredOnly,
            breakdown,
            seller: None,
            trust_change: None,
        })
    }
}

/// Error raised by the review service.
#[derive(Debug, thiserror::Error)]
pub enum ReviewServiceError {
    #[error("seller id must not be empty")]
    MissingSellerId,
    #[error("rating must be numeric, got {0}")]
    InvalidRating(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
