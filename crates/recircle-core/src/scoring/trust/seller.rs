use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decay factor of the reputation EWMA. A new review moves the trust score
/// 30% of the way toward its composite, so no single review can swing a
/// seller's standing.
pub const EWMA_ALPHA: f64 = 0.3;

/// Neutral prior assigned to a seller before their first review.
pub const NEUTRAL_TRUST: f64 = 50.0;

/// Reputation record for one seller. Created lazily on first review, mutated
/// by every accepted review, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
    #[serde(rename = "trustScore")]
    pub trust_score: f64,
    #[serde(rename = "totalReviews")]
    pub total_reviews: u64,
    #[serde(rename = "totalRating")]
    pub total_rating: f64,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "recommendedCount")]
    pub recommended_count: u64,
    #[serde(rename = "recommendRate")]
    pub recommend_rate: u32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Before/after view of one EWMA update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustChange {
    pub old: f64,
    pub new: f64,
    pub difference: f64,
}

impl Seller {
    /// Fresh record with the neutral prior, so the first review blends
    /// against 50.0 instead of adopting its own composite outright.
    pub fn with_neutral_prior(id: String, name: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            trust_score: NEUTRAL_TRUST,
            total_reviews: 0,
            total_rating: 0.0,
            average_rating: 0.0,
            recommended_count: 0,
            recommend_rate: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fold one accepted review into the record: EWMA-blend the trust score
    /// and refresh the counters.
    pub fn apply_review(
        &mut self,
        composite_score: f64,
        rating: f64,
        recommended: bool,
        now: DateTime<Utc>,
    ) -> TrustChange {
        let old = self.trust_score;
        let new = round2(old * (1.0 - EWMA_ALPHA) + composite_score * EWMA_ALPHA);
        self.trust_score = new;

        self.total_reviews += 1;
        self.total_rating += rating;
        if recommended {
            self.recommended_count += 1;
        }
        self.average_rating = round1(self.total_rating / self.total_reviews as f64);
        self.recommend_rate =
            ((self.recommended_count as f64 / self.total_reviews as f64) * 100.0).round() as u32;
        self.updated_at = now;

        TrustChange {
            old,
            new,
            difference: round2(new - old),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
