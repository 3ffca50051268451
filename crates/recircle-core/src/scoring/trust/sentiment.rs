use super::lexicon::{BOOSTERS, CAPS_EMPHASIS, NEGATION_SCALAR, NEGATORS, VALENCE};
use super::sentences::split_sentences;
use serde::{Deserialize, Serialize};

/// Compound thresholds separating the three polarity classes.
const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Polarity class of a single sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

/// Per-sentence result kept for response auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub sentence: String,
    pub sentiment: Polarity,
    pub compound: f64,
    pub trust_score: f64,
    pub weight: f64,
}

/// Review-level sentiment result. `NeutralDefault` marks the sentinel for
/// empty or "no comment" reviews so callers can tell a real analysis from
/// the fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SentimentOutcome {
    Analyzed {
        aggregate_trust: f64,
        sentences: Vec<SentenceAnalysis>,
    },
    NeutralDefault {
        aggregate_trust: f64,
    },
}

impl SentimentOutcome {
    pub fn aggregate_trust(&self) -> f64 {
        match self {
            SentimentOutcome::Analyzed { aggregate_trust, .. } => *aggregate_trust,
            SentimentOutcome::NeutralDefault { aggregate_trust } => *aggregate_trust,
        }
    }

    pub fn sentences(&self) -> &[SentenceAnalysis] {
        match self {
            SentimentOutcome::Analyzed { sentences, .. } => sentences,
            SentimentOutcome::NeutralDefault { .. } => &[],
        }
    }
}

/// Lexicon-and-rule sentiment model over sentence-split review text.
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier;

impl SentimentClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, review_text: &str) -> SentimentOutcome {
        let trimmed = review_text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("no comment") {
            return SentimentOutcome::NeutralDefault { aggregate_trust: 50.0 };
        }

        let mut sentences = Vec::new();
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for sentence in split_sentences(trimmed) {
            let compound = compound_polarity(&sentence);

            // Negative sentences weigh heaviest: one bad experience says more
            // about a seller than one pleasant sentence.
            let (polarity, trust, weight) = if compound >= POSITIVE_THRESHOLD {
                (Polarity::Positive, 80.0 + compound * 20.0, 1.0)
            } else if compound <= NEGATIVE_THRESHOLD {
                (Polarity::Negative, (50.0 + compound * 50.0).max(0.0), 1.5)
            } else {
                (Polarity::Neutral, 50.0 + compound * 10.0, 0.7)
            };

            weighted_sum += trust * weight;
            total_weight += weight;
            sentences.push(SentenceAnalysis {
                sentence,
                sentiment: polarity,
                compound: round3(compound),
                trust_score: round2(trust),
                weight,
            });
        }

        if total_weight == 0.0 {
            return SentimentOutcome::NeutralDefault { aggregate_trust: 50.0 };
        }

        SentimentOutcome::Analyzed {
            aggregate_trust: round2(weighted_sum / total_weight),
            sentences,
        }
    }
}

/// Normalized sentiment intensity of one sentence, in [-1, 1].
fn compound_polarity(sentence: &str) -> f64 {
    let raw_tokens: Vec<&str> = sentence.split_whitespace().collect();
    let keys: Vec<String> = raw_tokens.iter().map(|token| clean_token(token)).collect();
    let caps_matter = has_mixed_case_emphasis(&raw_tokens);

    let mut sum = 0.0;
    for (index, key) in keys.iter().enumerate() {
        let Some(&base) = VALENCE.get(key.as_str()) else {
            continue;
        };
        let mut valence = base;

        if caps_matter && is_shouted(raw_tokens[index]) {
            valence += CAPS_EMPHASIS * base.signum();
        }

        // Boosters lose strength with distance from the word they modify.
        for (offset, distance_scale) in [(1usize, 1.0), (2, 0.95), (3, 0.9)] {
            if index >= offset {
                if let Some(&boost) = BOOSTERS.get(keys[index - offset].as_str()) {
                    valence += boost * distance_scale * base.signum();
                }
            }
        }

        let negated = (1..=3).any(|offset| {
            index >= offset && NEGATORS.contains(keys[index - offset].as_str())
        });
        if negated {
            valence *= NEGATION_SCALAR;
        }

        sum += valence;
    }

    if sum != 0.0 {
        let emphasis = exclamation_emphasis(sentence) + question_emphasis(sentence);
        sum += emphasis * sum.signum();
    }

    normalize(sum)
}

fn clean_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_ascii_lowercase()
}

fn is_shouted(token: &str) -> bool {
    let letters: Vec<char> = token.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}

fn has_mixed_case_emphasis(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|token| is_shouted(token)).count();
    shouted > 0 && shouted < tokens.len()
}

fn exclamation_emphasis(sentence: &str) -> f64 {
    let count = sentence.chars().filter(|c| *c == '!').count().min(4);
    count as f64 * 0.292
}

fn question_emphasis(sentence: &str) -> f64 {
    match sentence.chars().filter(|c| *c == '?').count() {
        0 | 1 => 0.0,
        count @ 2..=3 => count as f64 * 0.18,
        _ => 0.96,
    }
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + 15.0).sqrt()).clamp(-1.0, 1.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzed(text: &str) -> (f64, Vec<SentenceAnalysis>) {
        match SentimentClassifier::new().analyze(text) {
            SentimentOutcome::Analyzed { aggregate_trust, sentences } => {
                (aggregate_trust, sentences)
            }
            SentimentOutcome::NeutralDefault { .. } => panic!("expected full analysis"),
        }
    }

    #[test]
    fn empty_and_no_comment_hit_the_sentinel() {
        let classifier = SentimentClassifier::new();
        for text in ["", "   ", "no comment", "No Comment", " NO COMMENT "] {
            let outcome = classifier.analyze(text);
            assert_eq!(outcome.aggregate_trust(), 50.0);
            assert!(outcome.sentences().is_empty());
        }
    }

    #[test]
    fn positive_sentence_maps_into_the_high_band() {
        let (aggregate, sentences) = analyzed("Great seller with excellent packaging.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].sentiment, Polarity::Positive);
        assert!(sentences[0].compound >= 0.05);
        assert!(aggregate > 80.0 && aggregate <= 100.0);
    }

    #[test]
    fn negative_sentence_maps_into_the_low_band() {
        let (aggregate, sentences) = analyzed("Terrible experience, the item was broken.");
        assert_eq!(sentences[0].sentiment, Polarity::Negative);
        assert!(sentences[0].compound <= -0.05);
        assert!(aggregate < 50.0);
    }

    #[test]
    fn lexicon_free_sentence_is_neutral_at_exactly_fifty() {
        let (aggregate, sentences) = analyzed("The parcel arrived on a tuesday");
        assert_eq!(sentences[0].sentiment, Polarity::Neutral);
        assert_eq!(sentences[0].compound, 0.0);
        assert_eq!(sentences[0].trust_score, 50.0);
        assert_eq!(sentences[0].weight, 0.7);
        assert_eq!(aggregate, 50.0);
    }

    #[test]
    fn negation_flips_polarity() {
        let (_, positive) = analyzed("The seller was helpful");
        let (_, negated) = analyzed("The seller was not helpful");
        assert_eq!(positive[0].sentiment, Polarity::Positive);
        assert_eq!(negated[0].sentiment, Polarity::Negative);
    }

    #[test]
    fn boosters_raise_intensity() {
        let (_, plain) = analyzed("The item was good");
        let (_, boosted) = analyzed("The item was really good");
        assert!(boosted[0].compound > plain[0].compound);
    }

    #[test]
    fn exclamations_amplify_the_existing_direction() {
        let (_, calm) = analyzed("Fantastic service");
        let (_, loud) = analyzed("Fantastic service!!!");
        assert!(loud[0].compound > calm[0].compound);

        let (_, calm_neg) = analyzed("Horrible service");
        let (_, loud_neg) = analyzed("Horrible service!!!");
        assert!(loud_neg[0].compound < calm_neg[0].compound);
    }

    #[test]
    fn negative_sentences_outweigh_positive_ones() {
        // One positive and one negative sentence of similar magnitude: the
        // 1.5 weight pulls the aggregate below the unweighted midpoint.
        let (aggregate, sentences) = analyzed("Great product. Horrible delivery.");
        assert_eq!(sentences.len(), 2);
        let unweighted =
            (sentences[0].trust_score + sentences[1].trust_score) / 2.0;
        assert!(aggregate < unweighted);
    }

    #[test]
    fn mixed_review_aggregates_with_weights() {
        let (aggregate, sentences) = analyzed("Good seller. The box arrived on a monday.");
        let expected: f64 = {
            let weighted: f64 = sentences
                .iter()
                .map(|s| s.trust_score * s.weight)
                .sum();
            let weights: f64 = sentences.iter().map(|s| s.weight).sum();
            (weighted / weights * 100.0).round() / 100.0
        };
        assert!((aggregate - expected).abs() < 0.02);
    }
}
