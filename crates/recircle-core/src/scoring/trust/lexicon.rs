//! Valence lexicon and modifier tables for the rule-based sentiment model.
//!
//! Valences follow the usual [-4, 4] convention for human-rated sentiment
//! intensity; the list is trimmed to vocabulary that actually shows up in
//! marketplace reviews. Boosters shift the intensity of the word they
//! precede, negators flip its direction.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Scalar applied to a valence when a negator precedes the token.
pub(crate) const NEGATION_SCALAR: f64 = -0.74;

/// Intensity shift contributed by an ALL-CAPS token.
pub(crate) const CAPS_EMPHASIS: f64 = 0.733;

/// Base intensity shift of a booster or dampener word.
pub(crate) const BOOSTER_STEP: f64 = 0.293;

pub(crate) static VALENCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("good", 1.9),
        ("great", 3.1),
        ("excellent", 2.7),
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("fantastic", 2.6),
        ("wonderful", 2.7),
        ("superb", 3.0),
        ("outstanding", 2.8),
        ("brilliant", 2.8),
        ("perfect", 2.7),
        ("perfectly", 2.6),
        ("love", 3.2),
        ("loved", 2.9),
        ("lovely", 2.8),
        ("like", 1.5),
        ("liked", 1.8),
        ("best", 3.2),
        ("better", 1.9),
        ("nice", 1.8),
        ("happy", 2.7),
        ("pleased", 2.3),
        ("satisfied", 2.0),
        ("satisfying", 2.1),
        ("recommend", 1.5),
        ("recommended", 1.6),
        ("impressive", 2.3),
        ("impressed", 2.2),
        ("reliable", 1.7),
        ("trustworthy", 2.2),
        ("trusted", 1.9),
        ("honest", 2.2),
        ("helpful", 1.8),
        ("friendly", 2.2),
        ("polite", 1.9),
        ("responsive", 1.6),
        ("smooth", 1.4),
        ("easy", 1.5),
        ("quick", 1.3),
        ("fast", 1.2),
        ("prompt", 1.5),
        ("ontime", 1.2),
        ("punctual", 1.4),
        ("fresh", 1.3),
        ("clean", 1.5),
        ("quality", 1.4),
        ("value", 1.3),
        ("worth", 1.7),
        ("bargain", 1.8),
        ("genuine", 1.6),
        ("authentic", 1.5),
        ("accurate", 1.5),
        ("careful", 1.4),
        ("carefully", 1.4),
        ("professional", 1.7),
        ("thanks", 1.9),
        ("thank", 1.7),
        ("grateful", 2.3),
        ("glad", 2.0),
        ("delighted", 2.9),
        ("fine", 0.8),
        ("ok", 0.9),
        ("okay", 0.9),
        ("decent", 1.2),
        ("works", 1.1),
        ("working", 1.0),
        // negative
        ("bad", -2.5),
        ("terrible", -2.1),
        ("awful", -2.0),
        ("horrible", -2.5),
        ("horrendous", -2.6),
        ("poor", -2.1),
        ("worst", -3.1),
        ("worse", -2.1),
        ("hate", -2.7),
        ("hated", -2.4),
        ("dislike", -1.6),
        ("disliked", -1.7),
        ("disappointed", -2.0),
        ("disappointing", -2.2),
        ("disappointment", -2.3),
        ("unhappy", -1.9),
        ("unsatisfied", -1.9),
        ("dissatisfied", -2.0),
        ("upset", -1.8),
        ("angry", -2.3),
        ("furious", -2.7),
        ("annoyed", -1.8),
        ("annoying", -1.8),
        ("frustrated", -2.1),
        ("frustrating", -2.1),
        ("scam", -2.6),
        ("scammer", -2.8),
        ("fraud", -2.8),
        ("fake", -1.9),
        ("counterfeit", -2.2),
        ("broken", -2.1),
        ("damaged", -1.9),
        ("defective", -2.2),
        ("faulty", -2.0),
        ("useless", -1.8),
        ("worthless", -2.3),
        ("waste", -1.8),
        ("wasted", -1.9),
        ("slow", -1.2),
        ("late", -1.1),
        ("delayed", -1.3),
        ("delay", -1.1),
        ("missing", -1.4),
        ("lost", -1.3),
        ("rude", -2.1),
        ("unprofessional", -2.0),
        ("dishonest", -2.4),
        ("lying", -2.4),
        ("lied", -2.3),
        ("liar", -2.7),
        ("misleading", -2.0),
        ("problem", -1.5),
        ("problems", -1.6),
        ("issue", -1.1),
        ("issues", -1.2),
        ("wrong", -1.6),
        ("error", -1.4),
        ("mistake", -1.5),
        ("mistakes", -1.6),
        ("dirty", -1.8),
        ("smelly", -1.7),
        ("stained", -1.4),
        ("torn", -1.5),
        ("cracked", -1.6),
        ("dead", -2.0),
        ("refused", -1.5),
        ("ignored", -1.7),
        ("unresponsive", -1.8),
        ("overpriced", -1.6),
        ("ripoff", -2.4),
        ("avoid", -1.7),
        ("beware", -1.9),
        ("regret", -2.0),
        ("cheated", -2.3),
        ("unreliable", -1.9),
        ("unusable", -2.1),
        ("garbage", -2.2),
        ("trash", -2.1),
        ("junk", -1.9),
    ]
    .into_iter()
    .collect()
});

pub(crate) static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("absolutely", BOOSTER_STEP),
        ("amazingly", BOOSTER_STEP),
        ("completely", BOOSTER_STEP),
        ("considerably", BOOSTER_STEP),
        ("deeply", BOOSTER_STEP),
        ("enormously", BOOSTER_STEP),
        ("entirely", BOOSTER_STEP),
        ("especially", BOOSTER_STEP),
        ("exceptionally", BOOSTER_STEP),
        ("extremely", BOOSTER_STEP),
        ("highly", BOOSTER_STEP),
        ("hugely", BOOSTER_STEP),
        ("incredibly", BOOSTER_STEP),
        ("really", BOOSTER_STEP),
        ("remarkably", BOOSTER_STEP),
        ("so", BOOSTER_STEP),
        ("super", BOOSTER_STEP),
        ("totally", BOOSTER_STEP),
        ("truly", BOOSTER_STEP),
        ("utterly", BOOSTER_STEP),
        ("very", BOOSTER_STEP),
        ("almost", -BOOSTER_STEP),
        ("barely", -BOOSTER_STEP),
        ("hardly", -BOOSTER_STEP),
        ("kinda", -BOOSTER_STEP),
        ("marginally", -BOOSTER_STEP),
        ("occasionally", -BOOSTER_STEP),
        ("partly", -BOOSTER_STEP),
        ("scarcely", -BOOSTER_STEP),
        ("slightly", -BOOSTER_STEP),
        ("somewhat", -BOOSTER_STEP),
    ]
    .into_iter()
    .collect()
});

pub(crate) static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "without",
        "rarely", "seldom", "isnt", "isn't", "aint", "ain't", "arent", "aren't", "cant", "can't",
        "cannot", "couldnt", "couldn't", "didnt", "didn't", "doesnt", "doesn't", "dont", "don't",
        "hasnt", "hasn't", "havent", "haven't", "shouldnt", "shouldn't", "wasnt", "wasn't",
        "werent", "weren't", "wont", "won't", "wouldnt", "wouldn't",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_directions_are_sane() {
        assert!(VALENCE["great"] > 0.0);
        assert!(VALENCE["terrible"] < 0.0);
        assert!(BOOSTERS["very"] > 0.0);
        assert!(BOOSTERS["slightly"] < 0.0);
        assert!(NEGATORS.contains("not"));
    }

    #[test]
    fn no_word_is_both_valenced_and_a_modifier() {
        for word in BOOSTERS.keys() {
            assert!(!VALENCE.contains_key(word), "{word} in both tables");
        }
        for word in NEGATORS.iter() {
            assert!(!VALENCE.contains_key(word), "{word} in both tables");
        }
    }
}
