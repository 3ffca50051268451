use super::category::Category;
use super::ghg::round2;
use serde::{Deserialize, Serialize};

/// The three UNEP circular-economy principles echoed on every assessment.
pub const CIRCULAR_ECONOMY_PRINCIPLES: [&str; 3] = [
    "Design out waste and pollution",
    "Keep products and materials in use",
    "Regenerate natural systems",
];

/// Circularity benefits of keeping a product in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularityAssessment {
    pub material_circularity: f64,
    pub lifetime_extension_years: f64,
    pub value_retention_rate: f64,
    pub circular_economy_principles: Vec<String>,
    pub unep_alignment: String,
}

impl CircularityAssessment {
    pub fn compute(category: Category, quantity_kg: f64) -> Self {
        let factor = category.circularity_factor();

        Self {
            material_circularity: round2(quantity_kg * factor.material_reuse),
            lifetime_extension_years: factor.lifetime_extension_years,
            value_retention_rate: factor.value_retention,
            circular_economy_principles: CIRCULAR_ECONOMY_PRINCIPLES
                .iter()
                .map(|principle| principle.to_string())
                .collect(),
            unep_alignment: "Circularity Gap Reporting Framework".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn books_retain_most_material() {
        let assessment = CircularityAssessment::compute(Category::Books, 2.0);
        assert_eq!(assessment.material_circularity, 1.9);
        assert_eq!(assessment.lifetime_extension_years, 10.0);
        assert_eq!(assessment.value_retention_rate, 0.80);
        assert_eq!(assessment.circular_economy_principles.len(), 3);
    }

    #[test]
    fn circularity_scales_linearly_with_quantity() {
        let single = CircularityAssessment::compute(Category::Furniture, 1.0);
        let triple = CircularityAssessment::compute(Category::Furniture, 3.0);
        assert_eq!(single.material_circularity, 0.9);
        assert_eq!(triple.material_circularity, 2.7);
    }
}
