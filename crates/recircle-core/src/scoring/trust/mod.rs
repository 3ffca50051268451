//! Seller-trust scoring for marketplace reviews.
//!
//! A review's free text is split into sentences and scored by a
//! lexicon-and-rule sentiment model; the resulting sentiment aggregate is
//! blended with the structured signals (star rating, delivery experience,
//! recommendation) into a composite trust score, which feeds an EWMA update
//! of the seller's reputation record.

mod compose;
mod lexicon;
pub mod repository;
mod router;
mod seller;
mod sentences;
mod sentiment;
mod service;

pub use compose::{
    ComponentScores, ComputationStatus, RatingInput, TrustBreakdown, TrustComposer, TrustWeights,
};
pub use repository::{SellerStore, StoreError};
pub use router::trust_router;
pub use seller::{Seller, TrustChange, EWMA_ALPHA};
pub use sentences::split_sentences;
pub use sentiment::{Polarity, SentenceAnalysis, SentimentClassifier, SentimentOutcome};
pub use service::{ReviewOutcome, ReviewService, ReviewServiceError, ReviewStatus, ReviewSubmission};
