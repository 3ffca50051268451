use super::category::Category;
use serde::{Deserialize, Serialize};

/// Blend weights and bonus controls for the composite impact score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub co2_weight: f64,
    pub water_weight: f64,
    pub waste_weight: f64,
    pub social_weight: f64,
    pub base_multiplier: f64,
    pub diminishing_returns: f64,
    pub max_quantity_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            co2_weight: 0.35,
            water_weight: 0.30,
            waste_weight: 0.25,
            social_weight: 0.10,
            base_multiplier: 5.0,
            diminishing_returns: 0.8,
            max_quantity_bonus: 50.0,
        }
    }
}

/// Saved-resource inputs to the scorer, all non-negative.
#[derive(Debug, Clone, Copy)]
pub struct SavedResources {
    pub co2e_saved_kg: f64,
    pub water_saved_l: f64,
    pub waste_diverted_kg: f64,
    pub social_value: f64,
}

/// Stateless scorer producing a bounded [15, 800] impact score.
#[derive(Debug, Clone)]
pub struct ImpactScorer {
    weights: ScoreWeights,
}

impl Default for ImpactScorer {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

impl ImpactScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, category: Category, quantity_kg: f64, saved: &SavedResources) -> u32 {
        let weights = &self.weights;

        // Capped sub-scores keep a single huge report from dominating.
        let co2_score = (saved.co2e_saved_kg * 8.0).min(200.0);
        let water_score = (saved.water_saved_l * 0.15).min(150.0);
        let waste_score = (saved.waste_diverted_kg * 12.0).min(150.0);
        let social_score = (saved.social_value * 0.15).min(100.0);

        let weighted = co2_score * weights.co2_weight
            + water_score * weights.water_weight
            + waste_score * weights.waste_weight
            + social_score * weights.social_weight;

        let category_weight = category.emission_factor().impact_weight;
        let mut final_score = weighted * category_weight * weights.base_multiplier;

        let any_savings = saved.co2e_saved_kg > 0.0
            || saved.water_saved_l > 0.0
            || saved.waste_diverted_kg > 0.0;
        if final_score < 15.0 && any_savings {
            final_score = 15.0;
        }

        // Both thresholds compound for quantities above 10 kg.
        let mut quantity_bonus = (quantity_kg * 3.0).min(weights.max_quantity_bonus);
        if quantity_kg > 5.0 {
            quantity_bonus *= weights.diminishing_returns;
        }
        if quantity_kg > 10.0 {
            quantity_bonus *= weights.diminishing_returns;
        }

        final_score += quantity_bonus;
        (final_score.round()).clamp(15.0, 800.0) as u32
    }
}

/// Seven-tier gamified ladder shown to end users. The labels, emoji included,
/// are part of the observable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    #[serde(rename = "Environmental Champion 🌟")]
    EnvironmentalChampion,
    #[serde(rename = "Eco Warrior 🦸‍♂️")]
    EcoWarrior,
    #[serde(rename = "Green Guardian 🌿")]
    GreenGuardian,
    #[serde(rename = "Planet Protector 🌎")]
    PlanetProtector,
    #[serde(rename = "Eco Beginner 🌱")]
    EcoBeginner,
    #[serde(rename = "Eco Starter 🌿")]
    EcoStarter,
    #[serde(rename = "Getting Started 🚀")]
    GettingStarted,
}

impl ImpactLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 600.0 {
            ImpactLevel::EnvironmentalChampion
        } else if score >= 450.0 {
            ImpactLevel::EcoWarrior
        } else if score >= 300.0 {
            ImpactLevel::GreenGuardian
        } else if score >= 200.0 {
            ImpactLevel::PlanetProtector
        } else if score >= 100.0 {
            ImpactLevel::EcoBeginner
        } else if score >= 50.0 {
            ImpactLevel::EcoStarter
        } else {
            ImpactLevel::GettingStarted
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactLevel::EnvironmentalChampion => "Environmental Champion 🌟",
            ImpactLevel::EcoWarrior => "Eco Warrior 🦸‍♂️",
            ImpactLevel::GreenGuardian => "Green Guardian 🌿",
            ImpactLevel::PlanetProtector => "Planet Protector 🌎",
            ImpactLevel::EcoBeginner => "Eco Beginner 🌱",
            ImpactLevel::EcoStarter => "Eco Starter 🌿",
            ImpactLevel::GettingStarted => "Getting Started 🚀",
        }
    }
}

/// Coarser rating used on the CSR summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceRating {
    #[serde(rename = "Exceptional 🌟")]
    Exceptional,
    #[serde(rename = "Excellent ⭐")]
    Excellent,
    #[serde(rename = "Very Good 👍")]
    VeryGood,
    #[serde(rename = "Good ✅")]
    Good,
    #[serde(rename = "Developing 📈")]
    Developing,
}

impl PerformanceRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 600.0 {
            PerformanceRating::Exceptional
        } else if score >= 450.0 {
            PerformanceRating::Excellent
        } else if score >= 300.0 {
            PerformanceRating::VeryGood
        } else if score >= 200.0 {
            PerformanceRating::Good
        } else {
            PerformanceRating::Developing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceRating::Exceptional => "Exceptional 🌟",
            PerformanceRating::Excellent => "Excellent ⭐",
            PerformanceRating::VeryGood => "Very Good 👍",
            PerformanceRating::Good => "Good ✅",
            PerformanceRating::Developing => "Developing 📈",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(co2e: f64, water: f64, waste: f64, social: f64) -> SavedResources {
        SavedResources {
            co2e_saved_kg: co2e,
            water_saved_l: water,
            waste_diverted_kg: waste,
            social_value: social,
        }
    }

    #[test]
    fn score_stays_within_bounds() {
        let scorer = ImpactScorer::default();
        let tiny = scorer.score(Category::Books, 0.1, &saved(0.01, 0.1, 0.01, 0.1));
        assert_eq!(tiny, 15);

        let huge = scorer.score(Category::Electronics, 100.0, &saved(5000.0, 9000.0, 150.0, 90000.0));
        assert_eq!(huge, 800);
    }

    #[test]
    fn floor_applies_only_when_something_was_saved() {
        let scorer = ImpactScorer::default();
        let score = scorer.score(Category::Books, 0.1, &saved(0.05, 0.0, 0.0, 0.0));
        assert!(score >= 15);
    }

    #[test]
    fn quantity_bonus_compounds_past_both_thresholds() {
        // quantity 12: min(36, 50) = 36, then x0.8 (>5) and x0.8 (>10) = 23.04
        let weights = ScoreWeights::default();
        let mut bonus = (12.0f64 * 3.0).min(weights.max_quantity_bonus);
        bonus *= weights.diminishing_returns;
        bonus *= weights.diminishing_returns;
        assert!((bonus - 23.04).abs() < 1e-9);

        let scorer = ImpactScorer::default();
        let without = scorer.score(Category::Food, 4.0, &saved(8.0, 60.0, 1.2, 480.0));
        let with = scorer.score(Category::Food, 12.0, &saved(8.0, 60.0, 1.2, 480.0));
        // Same savings, bigger quantity: only the bonus differs (12 vs 23.04).
        assert_eq!(with - without, 11);
    }

    #[test]
    fn impact_level_ladder_is_monotone() {
        let cuts = [
            (650.0, ImpactLevel::EnvironmentalChampion),
            (450.0, ImpactLevel::EcoWarrior),
            (300.0, ImpactLevel::GreenGuardian),
            (200.0, ImpactLevel::PlanetProtector),
            (100.0, ImpactLevel::EcoBeginner),
            (50.0, ImpactLevel::EcoStarter),
            (15.0, ImpactLevel::GettingStarted),
        ];
        for (score, expected) in cuts {
            assert_eq!(ImpactLevel::from_score(score), expected);
        }
    }

    #[test]
    fn performance_rating_defaults_to_developing() {
        assert_eq!(PerformanceRating::from_score(0.0), PerformanceRating::Developing);
        assert_eq!(PerformanceRating::from_score(600.0), PerformanceRating::Exceptional);
        assert_eq!(PerformanceRating::from_score(459.9), PerformanceRating::Excellent);
    }
}
