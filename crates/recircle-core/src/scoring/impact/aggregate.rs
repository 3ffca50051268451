use super::category::Category;
use super::ghg::round2;
use super::report::ImpactReport;
use super::score::{ImpactLevel, PerformanceRating};
use super::COMPLIANCE_STANDARDS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rolling CSR aggregate over the report log.
///
/// Maintained incrementally via [`CsrSummary::absorb`]; at any point it must
/// equal [`CsrSummary::fold`] over the full log (the service enforces this
/// by updating log and summary under one write gate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrSummary {
    pub total_co2_saved: f64,
    pub total_co2e_saved: f64,
    pub total_water_saved: f64,
    pub total_waste_diverted: f64,
    pub total_social_value: f64,
    pub total_impact_score: u64,
    pub total_impacts: usize,
    pub average_impact_score: f64,
    pub impact_level: ImpactLevel,
    pub performance_rating: PerformanceRating,
    pub last_updated: NaiveDate,
    pub compliance_standards: Vec<String>,
}

impl CsrSummary {
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            total_co2_saved: 0.0,
            total_co2e_saved: 0.0,
            total_water_saved: 0.0,
            total_waste_diverted: 0.0,
            total_social_value: 0.0,
            total_impact_score: 0,
            total_impacts: 0,
            average_impact_score: 0.0,
            impact_level: ImpactLevel::GettingStarted,
            performance_rating: PerformanceRating::Developing,
            last_updated: today,
            compliance_standards: COMPLIANCE_STANDARDS
                .iter()
                .map(|standard| standard.to_string())
                .collect(),
        }
    }

    /// Fold one report into the running totals and re-derive the averages.
    pub fn absorb(&mut self, report: &ImpactReport, today: NaiveDate) {
        self.total_co2_saved += report.co2_saved_kg;
        self.total_co2e_saved += report.co2e_saved_kg;
        self.total_water_saved += report.water_saved_l;
        self.total_waste_diverted += report.waste_diverted_kg;
        self.total_social_value += report.social_value;
        self.total_impact_score += u64::from(report.impact_score);
        self.total_impacts += 1;
        self.last_updated = today;

        let average = self.total_impact_score as f64 / self.total_impacts as f64;
        self.average_impact_score = round2(average);
        self.impact_level = ImpactLevel::from_score(average);
        self.performance_rating = PerformanceRating::from_score(average);
    }

    /// Recompute the aggregate from scratch. Used by tests and the reset
    /// path to check fold-consistency against the incremental summary.
    pub fn fold<'a>(reports: impl IntoIterator<Item = &'a ImpactReport>, today: NaiveDate) -> Self {
        let mut summary = Self::empty(today);
        for report in reports {
            summary.absorb(report, today);
        }
        summary
    }
}

/// Per-category totals and averages for the analytics view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub count: usize,
    pub total_score: u64,
    pub total_co2: f64,
    pub total_co2e: f64,
    pub total_water: f64,
    pub total_waste: f64,
    pub average_score: f64,
    pub average_co2: f64,
    pub average_co2e: f64,
    pub average_water: f64,
    pub average_waste: f64,
}

/// Count of reports per impact-score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub champion: usize,
    pub warrior: usize,
    pub guardian: usize,
    pub protector: usize,
    pub beginner: usize,
    pub starter: usize,
}

impl ScoreDistribution {
    fn bucket(&mut self, score: u32) {
        if score >= 600 {
            self.champion += 1;
        } else if score >= 450 {
            self.warrior += 1;
        } else if score >= 300 {
            self.guardian += 1;
        } else if score >= 200 {
            self.protector += 1;
        } else if score >= 100 {
            self.beginner += 1;
        } else {
            self.starter += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.champion + self.warrior + self.guardian + self.protector + self.beginner + self.starter
    }
}

/// Analytics view over the full report log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAnalytics {
    pub total_impacts: usize,
    pub average_score: f64,
    pub impact_level: ImpactLevel,
    pub category_breakdown: BTreeMap<Category, CategoryBreakdown>,
    pub score_distribution: ScoreDistribution,
    pub total_co2_saved: f64,
    pub total_co2e_saved: f64,
    pub total_water_saved: f64,
    pub total_waste_diverted: f64,
    pub total_social_value: f64,
    pub compliance_standards: Vec<String>,
}

impl ImpactAnalytics {
    pub fn from_reports(reports: &[ImpactReport], summary: &CsrSummary) -> Self {
        let mut category_breakdown: BTreeMap<Category, CategoryBreakdown> = BTreeMap::new();
        let mut score_distribution = ScoreDistribution::default();

        for report in reports {
            let entry = category_breakdown
                .entry(report.category)
                .or_insert_with(|| CategoryBreakdown {
                    count: 0,
                    total_score: 0,
                    total_co2: 0.0,
                    total_co2e: 0.0,
                    total_water: 0.0,
                    total_waste: 0.0,
                    average_score: 0.0,
                    average_co2: 0.0,
                    average_co2e: 0.0,
                    average_water: 0.0,
                    average_waste: 0.0,
                });
            entry.count += 1;
            entry.total_score += u64::from(report.impact_score);
            entry.total_co2 += report.co2_saved_kg;
            entry.total_co2e += report.co2e_saved_kg;
            entry.total_water += report.water_saved_l;
            entry.total_waste += report.waste_diverted_kg;

            score_distribution.bucket(report.impact_score);
        }

        for breakdown in category_breakdown.values_mut() {
            let count = breakdown.count as f64;
            breakdown.average_score = round2(breakdown.total_score as f64 / count);
            breakdown.average_co2 = round2(breakdown.total_co2 / count);
            breakdown.average_co2e = round2(breakdown.total_co2e / count);
            breakdown.average_water = round2(breakdown.total_water / count);
            breakdown.average_waste = round2(breakdown.total_waste / count);
        }

        Self {
            total_impacts: reports.len(),
            average_score: summary.average_impact_score,
            impact_level: summary.impact_level,
            category_breakdown,
            score_distribution,
            total_co2_saved: summary.total_co2_saved,
            total_co2e_saved: summary.total_co2e_saved,
            total_water_saved: summary.total_water_saved,
            total_waste_diverted: summary.total_waste_diverted,
            total_social_value: summary.total_social_value,
            compliance_standards: summary.compliance_standards.clone(),
        }
    }
}
