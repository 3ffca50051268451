use super::category::Category;
use serde::{Deserialize, Serialize};

/// Global-warming potential of methane relative to CO2.
const METHANE_GWP: f64 = 25.0;

/// GHG Protocol Scope 3 assessment of a single reused transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhgAssessment {
    pub total_co2_saved_kg: f64,
    pub total_co2e_saved_kg: f64,
    pub breakdown: GhgBreakdown,
}

/// Avoided-emission components, each rounded to 2 decimals for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhgBreakdown {
    pub avoided_production: f64,
    pub avoided_methane_co2e: f64,
    pub avoided_processing: f64,
    pub avoided_transport: f64,
}

impl GhgAssessment {
    /// Compute avoided emissions for `quantity_kg` of reused goods moved
    /// `distance_km`. Sums are taken at full precision and rounded only at
    /// the edges of the result.
    pub fn compute(category: Category, quantity_kg: f64, distance_km: f64) -> Self {
        let factor = category.ghg_factor();

        let avoided_production = quantity_kg * factor.production;
        let methane_kg = quantity_kg * factor.landfill_methane;
        let avoided_methane_co2e = methane_kg * METHANE_GWP;
        let avoided_processing = quantity_kg * factor.avoided.processing_factor();
        let avoided_transport = distance_km * factor.transportation;

        let total_co2 = avoided_production + avoided_processing + avoided_transport;
        let total_co2e = total_co2 + avoided_methane_co2e;

        Self {
            total_co2_saved_kg: round2(total_co2),
            total_co2e_saved_kg: round2(total_co2e),
            breakdown: GhgBreakdown {
                avoided_production: round2(avoided_production),
                avoided_methane_co2e: round2(avoided_methane_co2e),
                avoided_processing: round2(avoided_processing),
                avoided_transport: round2(avoided_transport),
            },
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
