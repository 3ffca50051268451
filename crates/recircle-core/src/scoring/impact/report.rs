use super::category::Category;
use super::circular::CircularityAssessment;
use super::ghg::{round2, GhgAssessment};
use super::score::{ImpactLevel, ImpactScorer, SavedResources};
use super::COMPLIANCE_STANDARDS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable record of one scored transaction. Appended to the report log,
/// never mutated, removed only by a full reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub transaction_id: String,
    pub category: Category,
    pub quantity_kg: f64,
    pub distance_km: f64,
    pub co2_saved_kg: f64,
    pub co2e_saved_kg: f64,
    pub water_saved_l: f64,
    pub waste_diverted_kg: f64,
    pub social_value: f64,
    pub carbon_footprint_reduction: f64,
    pub impact_score: u32,
    pub impact_level: ImpactLevel,
    pub compliance: ComplianceBreakdown,
    pub created_at: DateTime<Utc>,
}

/// Standards annotations attached to every report for CSR auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceBreakdown {
    pub ghg_protocol: GhgAssessment,
    pub circular_economy: CircularityAssessment,
    pub iso_14040: LcaInfo,
    pub standards: Vec<String>,
}

/// ISO 14040 boundary metadata from the category's emission factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcaInfo {
    pub lca_boundary: String,
    pub ghg_scope: String,
    pub impact_categories: Vec<String>,
    pub data_quality: String,
}

impl ImpactReport {
    /// Score a transaction against the static factor tables. Pure: the
    /// caller supplies identity and clock, persistence happens elsewhere.
    pub fn compute(
        transaction_id: String,
        category: Category,
        quantity_kg: f64,
        distance_km: f64,
        scorer: &ImpactScorer,
        created_at: DateTime<Utc>,
    ) -> Self {
        let factor = category.emission_factor();

        let ghg = GhgAssessment::compute(category, quantity_kg, distance_km);
        let circular = CircularityAssessment::compute(category, quantity_kg);

        let water_saved_l = round2(quantity_kg * factor.water_factor);
        let waste_diverted_kg = round2(quantity_kg * factor.waste_factor);
        let social_value = round2(ghg.total_co2e_saved_kg * factor.social_multiplier);

        let saved = SavedResources {
            co2e_saved_kg: ghg.total_co2e_saved_kg,
            water_saved_l,
            waste_diverted_kg,
            social_value,
        };
        let impact_score = scorer.score(category, quantity_kg, &saved);

        Self {
            transaction_id,
            category,
            quantity_kg,
            distance_km,
            co2_saved_kg: ghg.total_co2_saved_kg,
            co2e_saved_kg: ghg.total_co2e_saved_kg,
            water_saved_l,
            waste_diverted_kg,
            social_value,
            carbon_footprint_reduction: ghg.total_co2e_saved_kg,
            impact_score,
            impact_level: ImpactLevel::from_score(impact_score as f64),
            compliance: ComplianceBreakdown {
                ghg_protocol: ghg,
                circular_economy: circular,
                iso_14040: LcaInfo {
                    lca_boundary: factor.lca_boundary.to_string(),
                    ghg_scope: factor.ghg_scope.to_string(),
                    impact_categories: vec![
                        "climate_change".to_string(),
                        "water_use".to_string(),
                        "resource_depletion".to_string(),
                    ],
                    data_quality: "industry_average".to_string(),
                },
                standards: COMPLIANCE_STANDARDS
                    .iter()
                    .map(|standard| standard.to_string())
                    .collect(),
            },
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(category: Category, quantity: f64, distance: f64) -> ImpactReport {
        ImpactReport::compute(
            "txn-test".to_string(),
            category,
            quantity,
            distance,
            &ImpactScorer::default(),
            Utc::now(),
        )
    }

    #[test]
    fn derived_metrics_come_from_the_emission_factor() {
        let food = report(Category::Food, 1.0, 0.0);
        assert_eq!(food.co2_saved_kg, 3.5);
        assert_eq!(food.co2e_saved_kg, 8.0);
        assert_eq!(food.water_saved_l, 60.0);
        assert_eq!(food.waste_diverted_kg, 1.2);
        // social value = co2e * social multiplier
        assert_eq!(food.social_value, 480.0);
    }

    #[test]
    fn score_and_level_agree_for_every_category() {
        for category in Category::ALL {
            let report = report(category, 2.0, 5.0);
            assert!((15..=800).contains(&report.impact_score));
            assert_eq!(
                report.impact_level,
                ImpactLevel::from_score(report.impact_score as f64)
            );
        }
    }

    #[test]
    fn compliance_breakdown_names_all_three_standards() {
        let report = report(Category::Clothes, 1.5, 2.0);
        assert_eq!(report.compliance.standards.len(), 3);
        assert_eq!(report.compliance.iso_14040.lca_boundary, "cradle-to-grave");
        assert_eq!(report.compliance.ghg_protocol.total_co2e_saved_kg, report.co2e_saved_kg);
    }
}
