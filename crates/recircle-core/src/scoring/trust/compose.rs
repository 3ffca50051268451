use super::sentiment::{SentenceAnalysis, SentimentClassifier, SentimentOutcome};
use serde::{Deserialize, Serialize};

/// Blend weights for the four trust components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustWeights {
    pub sentiment: f64,
    pub rating: f64,
    pub delivery: f64,
    pub recommend: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.4,
            rating: 0.3,
            delivery: 0.2,
            recommend: 0.1,
        }
    }
}

/// Star rating as submitted by the client: a number, or a string that may or
/// may not parse as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Number(f64),
    Text(String),
}

impl RatingInput {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RatingInput::Number(value) => Some(*value),
            RatingInput::Text(raw) => raw.trim().parse::<f64>().ok(),
        }
    }
}

/// Fixed phrase table for the delivery-experience signal. Unmatched phrases
/// score the 60-point midpoint.
const DELIVERY_SCORES: [(&str, f64); 15] = [
    ("excellent", 100.0),
    ("good", 80.0),
    ("average", 60.0),
    ("poor", 40.0),
    ("bad", 20.0),
    ("fast", 90.0),
    ("slow", 30.0),
    ("quick", 90.0),
    ("delayed", 30.0),
    ("ontime", 80.0),
    ("great", 90.0),
    ("awesome", 95.0),
    ("perfect", 100.0),
    ("terrible", 20.0),
    ("horrible", 10.0),
];

const DEFAULT_DELIVERY_SCORE: f64 = 60.0;
const MIDPOINT_RATING_SCORE: f64 = 50.0;

/// The four component scores feeding the composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub sentiment: f64,
    pub rating: f64,
    pub delivery: f64,
    pub recommend: f64,
}

/// Whether the breakdown came from a real computation or the neutral
/// fallback that keeps reviews flowing when scoring misbehaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationStatus {
    Computed,
    DegradedDefault,
}

/// Composite trust score with its component and sentence breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustBreakdown {
    pub final_score: f64,
    pub component_scores: ComponentScores,
    pub sentence_analysis: Vec<SentenceAnalysis>,
    pub status: ComputationStatus,
}

impl TrustBreakdown {
    /// Neutral stand-in used when a scoring fault would otherwise reject the
    /// review. Availability over precision.
    pub fn neutral_default() -> Self {
        Self {
            final_score: 50.0,
            component_scores: ComponentScores {
                sentiment: 50.0,
                rating: MIDPOINT_RATING_SCORE,
                delivery: DEFAULT_DELIVERY_SCORE,
                recommend: 40.0,
            },
            sentence_analysis: Vec::new(),
            status: ComputationStatus::DegradedDefault,
        }
    }
}

/// Combines sentence sentiment with the structured review signals.
#[derive(Debug, Clone)]
pub struct TrustComposer {
    classifier: SentimentClassifier,
    weights: TrustWeights,
}

impl Default for TrustComposer {
    fn default() -> Self {
        Self::new(TrustWeights::default())
    }
}

impl TrustComposer {
    pub fn new(weights: TrustWeights) -> Self {
        Self {
            classifier: SentimentClassifier::new(),
            weights,
        }
    }

    pub fn compose(
        &self,
        review_text: &str,
        rating: &RatingInput,
        delivery_experience: &str,
        recommend: &str,
    ) -> TrustBreakdown {
        let sentiment = self.classifier.analyze(review_text);
        let sentiment_score = sentiment.aggregate_trust();

        let rating_score = match rating.as_f64() {
            Some(value) => (value.clamp(1.0, 5.0) / 5.0) * 100.0,
            None => MIDPOINT_RATING_SCORE,
        };

        let delivery_score = delivery_score(delivery_experience);
        let recommend_score = recommend_score(recommend);

        let composite = sentiment_score * self.weights.sentiment
            + rating_score * self.weights.rating
            + delivery_score * self.weights.delivery
            + recommend_score * self.weights.recommend;

        if !composite.is_finite() {
            return TrustBreakdown::neutral_default();
        }

        let sentence_analysis = match sentiment {
            SentimentOutcome::Analyzed { sentences, .. } => sentences,
            SentimentOutcome::NeutralDefault { .. } => Vec::new(),
        };

        TrustBreakdown {
            final_score: round2(composite.clamp(0.0, 100.0)),
            component_scores: ComponentScores {
                sentiment: round2(sentiment_score),
                rating: round2(rating_score),
                delivery: delivery_score,
                recommend: recommend_score,
            },
            sentence_analysis,
            status: ComputationStatus::Computed,
        }
    }
}

fn delivery_score(experience: &str) -> f64 {
    let normalized = experience.trim().to_ascii_lowercase();
    DELIVERY_SCORES
        .iter()
        .find(|(phrase, _)| *phrase == normalized)
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_DELIVERY_SCORE)
}

fn recommend_score(recommend: &str) -> f64 {
    if recommend.trim().eq_ignore_ascii_case("yes") {
        100.0
    } else {
        40.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_review_low_rating_unrecommended() {
        // sentiment sentinel 50, rating 1 -> 20, "terrible" -> 20, "No" -> 40
        let composer = TrustComposer::default();
        let breakdown = composer.compose("", &RatingInput::Number(1.0), "terrible", "No");
        assert_eq!(breakdown.component_scores.sentiment, 50.0);
        assert_eq!(breakdown.component_scores.rating, 20.0);
        assert_eq!(breakdown.component_scores.delivery, 20.0);
        assert_eq!(breakdown.component_scores.recommend, 40.0);
        assert_eq!(breakdown.final_score, 34.0);
        assert!(breakdown.sentence_analysis.is_empty());
        assert_eq!(breakdown.status, ComputationStatus::Computed);
    }

    #[test]
    fn rating_accepts_numeric_strings_and_defaults_otherwise() {
        assert_eq!(RatingInput::Text("4".to_string()).as_f64(), Some(4.0));
        assert_eq!(RatingInput::Text(" 3.5 ".to_string()).as_f64(), Some(3.5));
        assert_eq!(RatingInput::Text("five".to_string()).as_f64(), None);

        let composer = TrustComposer::default();
        let breakdown =
            composer.compose("", &RatingInput::Text("five".to_string()), "average", "Yes");
        assert_eq!(breakdown.component_scores.rating, 50.0);
    }

    #[test]
    fn rating_is_clamped_to_the_star_range() {
        let composer = TrustComposer::default();
        let low = composer.compose("", &RatingInput::Number(0.0), "average", "Yes");
        let high = composer.compose("", &RatingInput::Number(9.0), "average", "Yes");
        assert_eq!(low.component_scores.rating, 20.0);
        assert_eq!(high.component_scores.rating, 100.0);
    }

    #[test]
    fn delivery_phrases_match_case_insensitively() {
        assert_eq!(delivery_score("  Excellent "), 100.0);
        assert_eq!(delivery_score("HORRIBLE"), 10.0);
        assert_eq!(delivery_score("next-day courier"), 60.0);
    }

    #[test]
    fn recommend_is_yes_or_everything_else() {
        assert_eq!(recommend_score("YES"), 100.0);
        assert_eq!(recommend_score(" yes "), 100.0);
        assert_eq!(recommend_score("No"), 40.0);
        assert_eq!(recommend_score("maybe"), 40.0);
    }

    #[test]
    fn composite_stays_within_bounds() {
        let composer = TrustComposer::default();
        let best = composer.compose(
            "Absolutely amazing seller! Perfect condition.",
            &RatingInput::Number(5.0),
            "perfect",
            "Yes",
        );
        assert!(best.final_score <= 100.0 && best.final_score > 80.0);

        let worst = composer.compose(
            "Horrible scam. The item was broken and the seller lied.",
            &RatingInput::Number(1.0),
            "horrible",
            "no",
        );
        assert!(worst.final_score >= 0.0 && worst.final_score < 40.0);
    }

    #[test]
    fn neutral_default_has_empty_breakdown() {
        let breakdown = TrustBreakdown::neutral_default();
        assert_eq!(breakdown.final_score, 50.0);
        assert!(breakdown.sentence_analysis.is_empty());
        assert_eq!(breakdown.status, ComputationStatus::DegradedDefault);
    }
}
