use crate::infra::{InMemoryReportLog, InMemorySellerStore};
use clap::Args;
use recircle_core::error::AppError;
use recircle_core::scoring::impact::{ImpactRequest, ImpactService};
use recircle_core::scoring::trust::{RatingInput, ReviewService, ReviewSubmission};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Category for the custom transaction (defaults to Electronics)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Weight in kilograms for the custom transaction
    #[arg(long)]
    pub(crate) quantity_kg: Option<f64>,
    /// Transport distance in kilometers for the custom transaction
    #[arg(long)]
    pub(crate) distance_km: Option<f64>,
    /// Skip the seller-review portion of the demo
    #[arg(long)]
    pub(crate) skip_review: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        category,
        quantity_kg,
        distance_km,
        skip_review,
    } = args;

    println!("Recircle scoring demo");
    println!("\nImpact pipeline");

    let impact = ImpactService::new(Arc::new(InMemoryReportLog::default()));
    let mut samples = vec![
        ("Food".to_string(), 2.5, 3.0),
        ("Clothes".to_string(), 1.2, 8.0),
        ("Electronics".to_string(), 4.0, 15.0),
        ("Books".to_string(), 0.8, 0.0),
    ];
    samples.push((
        category.unwrap_or_else(|| "Electronics".to_string()),
        quantity_kg.unwrap_or(2.0),
        distance_km.unwrap_or(5.0),
    ));

    for (category, quantity_kg, distance_km) in samples {
        let submission = match impact.submit(ImpactRequest {
            category: category.clone(),
            quantity_kg,
            distance_km: Some(distance_km),
        }) {
            Ok(submission) => submission,
            Err(err) => {
                println!("- {category} {quantity_kg}kg rejected: {err}");
                continue;
            }
        };
        let report = submission.report;
        println!(
            "- {} {}kg over {}km -> score {} ({}) | {} kg CO2e | {} L water | {} kg waste diverted",
            report.category.label(),
            report.quantity_kg,
            report.distance_km,
            report.impact_score,
            report.impact_level.label(),
            report.co2e_saved_kg,
            report.water_saved_l,
            report.waste_diverted_kg,
        );
    }

    let summary = impact.summary();
    println!(
        "CSR summary: {} impacts | avg score {} | {} | rated {}",
        summary.total_impacts,
        summary.average_impact_score,
        summary.impact_level.label(),
        summary.performance_rating.label(),
    );

    if skip_review {
        return Ok(());
    }

    println!("\nTrust pipeline");
    let trust = ReviewService::new(Arc::new(InMemorySellerStore::default()));
    let reviews = [
        (
            "Great product, excellent packaging! Seller was very helpful.",
            5.0,
            "fast",
            "Yes",
        ),
        ("Item arrived late and the box was damaged.", 2.0, "delayed", "No"),
        ("Decent quality for the price.", 4.0, "average", "Yes"),
    ];

    for (text, rating, delivery, recommend) in reviews {
        let outcome = match trust.submit_review(
            "demo-seller",
            ReviewSubmission {
                review: text.to_string(),
                rating: RatingInput::Number(rating),
                delivery: delivery.to_string(),
                recommend: recommend.to_string(),
                seller_name: Some("Demo Seller".to_string()),
                reviewer: None,
                product: None,
            },
        ) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("- review rejected: {err}");
                continue;
            }
        };
        match outcome.trust_change {
            Some(change) => println!(
                "- \"{}\" -> composite {} | trust {} -> {}",
                text, outcome.breakdown.final_score, change.old, change.new,
            ),
            None => println!(
                "- \"{}\" -> composite {} (seller record not updated)",
                text, outcome.breakdown.final_score,
            ),
        }
        for sentence in &outcome.breakdown.sentence_analysis {
            println!(
                "    {:?} ({:+.3}): {}",
                sentence.sentiment, sentence.compound, sentence.sentence
            );
        }
    }

    match trust.seller("demo-seller") {
        Ok(Some(seller)) => println!(
            "Seller record: trust {} | {} reviews | avg rating {} | {}% recommend",
            seller.trust_score, seller.total_reviews, seller.average_rating, seller.recommend_rate
        ),
        Ok(None) => println!("Seller record missing after reviews"),
        Err(err) => println!("Seller lookup failed: {err}"),
    }

    Ok(())
}
