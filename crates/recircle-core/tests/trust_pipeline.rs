//! End-to-end scenarios for the trust pipeline: review submission through
//! the service facade and HTTP router, EWMA blending, and seller lookup.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use recircle_core::scoring::trust::{
        RatingInput, ReviewService, ReviewSubmission, Seller, SellerStore, StoreError,
    };

    #[derive(Default)]
    pub(super) struct InMemorySellerStore {
        sellers: Mutex<HashMap<String, Seller>>,
    }

    impl SellerStore for InMemorySellerStore {
        fn fetch(&self, seller_id: &str) -> Result<Option<Seller>, StoreError> {
            Ok(self
                .sellers
                .lock()
                .expect("store mutex poisoned")
                .get(seller_id)
                .cloned())
        }

        fn upsert(&self, seller: Seller) -> Result<(), StoreError> {
            self.sellers
                .lock()
                .expect("store mutex poisoned")
                .insert(seller.id.clone(), seller);
            Ok(())
        }
    }

    /// Store that accepts nothing, for partial-success scenarios.
    #[derive(Default)]
    pub(super) struct RejectingStore;

    impl SellerStore for RejectingStore {
        fn fetch(&self, _seller_id: &str) -> Result<Option<Seller>, StoreError> {
            Err(StoreError::Unavailable("store offline".to_string()))
        }

        fn upsert(&self, _seller: Seller) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("store offline".to_string()))
        }
    }

    pub(super) fn service() -> (Arc<InMemorySellerStore>, ReviewService<InMemorySellerStore>) {
        let store = Arc::new(InMemorySellerStore::default());
        (store.clone(), ReviewService::new(store))
    }

    pub(super) fn submission(
        review: &str,
        rating: f64,
        delivery: &str,
        recommend: &str,
    ) -> ReviewSubmission {
        ReviewSubmission {
            review: review.to_string(),
            rating: RatingInput::Number(rating),
            delivery: delivery.to_string(),
            recommend: recommend.to_string(),
            seller_name: None,
            reviewer: None,
            product: None,
        }
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use recircle_core::scoring::trust::{
    trust_router, ComputationStatus, Polarity, RatingInput, ReviewService, ReviewServiceError,
    ReviewStatus, SellerStore,
};
use tower::util::ServiceExt;

use common::{service, submission, RejectingStore};

#[test]
fn first_review_blends_against_the_neutral_prior() {
    let (store, service) = service();
    let outcome = service
        .submit_review("seller-1", submission("", 1.0, "terrible", "No"))
        .expect("review accepted");

    // Empty text takes the neutral sentiment sentinel.
    assert_eq!(outcome.status, ReviewStatus::Recorded);
    assert_eq!(outcome.breakdown.status, ComputationStatus::Computed);
    assert_eq!(outcome.breakdown.component_scores.sentiment, 50.0);
    assert_eq!(outcome.breakdown.component_scores.rating, 20.0);
    assert_eq!(outcome.breakdown.component_scores.delivery, 20.0);
    assert_eq!(outcome.breakdown.component_scores.recommend, 40.0);
    assert!(outcome.breakdown.sentence_analysis.is_empty());
    assert_eq!(outcome.breakdown.final_score, 34.0);

    // 50 * 0.7 + 34 * 0.3
    let change = outcome.trust_change.expect("review was recorded");
    assert_eq!(change.old, 50.0);
    assert_eq!(change.new, 45.2);
    assert_eq!(change.difference, -4.8);

    let seller = store
        .fetch("seller-1")
        .expect("store readable")
        .expect("seller created");
    assert_eq!(seller.trust_score, 45.2);
    assert_eq!(seller.total_reviews, 1);
    assert_eq!(seller.average_rating, 1.0);
    assert_eq!(seller.recommend_rate, 0);
}

#[test]
fn second_review_blends_from_the_stored_score() {
    let (_, service) = service();
    service
        .submit_review("seller-1", submission("", 1.0, "terrible", "No"))
        .expect("first review accepted");
    let outcome = service
        .submit_review("seller-1", submission("", 1.0, "terrible", "No"))
        .expect("second review accepted");

    // 45.2 * 0.7 + 34 * 0.3
    let change = outcome.trust_change.expect("review was recorded");
    assert_eq!(change.old, 45.2);
    assert_eq!(change.new, 41.84);
    let seller = outcome.seller.expect("seller persisted");
    assert_eq!(seller.total_reviews, 2);
    assert_eq!(seller.recommend_rate, 0);
}

#[test]
fn glowing_review_lifts_trust_above_the_prior() {
    let (_, service) = service();
    let outcome = service
        .submit_review(
            "seller-2",
            submission("Great product, excellent service!", 5.0, "excellent", "Yes"),
        )
        .expect("review accepted");

    assert!(outcome.breakdown.final_score > 90.0);
    assert!(!outcome.breakdown.sentence_analysis.is_empty());
    assert!(outcome
        .breakdown
        .sentence_analysis
        .iter()
        .all(|analysis| analysis.sentiment == Polarity::Positive));
    let change = outcome.trust_change.expect("review was recorded");
    assert!(change.new > 50.0);
    let seller = outcome.seller.expect("seller persisted");
    assert_eq!(seller.recommend_rate, 100);
}

#[test]
fn out_of_range_rating_is_clamped_before_the_counters() {
    let (_, service) = service();
    let outcome = service
        .submit_review("seller-3", submission("Fine.", 9.0, "average", "Yes"))
        .expect("review accepted");
    assert_eq!(outcome.breakdown.component_scores.rating, 100.0);
    let seller = outcome.seller.expect("seller persisted");
    assert_eq!(seller.average_rating, 5.0);
}

#[test]
fn non_numeric_rating_is_rejected_without_creating_the_seller() {
    let (store, service) = service();
    let mut bad = submission("Nice.", 4.0, "good", "Yes");
    bad.rating = RatingInput::Text("five".to_string());

    let err = service
        .submit_review("seller-4", bad)
        .expect_err("non-numeric rating rejected");
    assert!(matches!(err, ReviewServiceError::InvalidRating(_)));
    assert!(store.fetch("seller-4").expect("store readable").is_none());
}

#[test]
fn blank_seller_id_is_rejected() {
    let (_, service) = service();
    let err = service
        .submit_review("   ", submission("Nice.", 4.0, "good", "Yes"))
        .expect_err("blank seller id rejected");
    assert!(matches!(err, ReviewServiceError::MissingSellerId));
}

#[test]
fn store_failure_still_returns_the_scored_review() {
    let service = ReviewService::new(Arc::new(RejectingStore));
    let outcome = service
        .submit_review("seller-5", submission("", 1.0, "terrible", "No"))
        .expect("scoring survives store failure");

    assert_eq!(outcome.status, ReviewStatus::ScoredOnly);
    assert_eq!(outcome.breakdown.final_score, 34.0);
    // No record was read or written, so no seller state is invented.
    assert!(outcome.seller.is_none());
    assert!(outcome.trust_change.is_none());
}

#[tokio::test]
async fn seller_lookup_before_and_after_the_first_review() {
    let (_, service) = service();
    let service = Arc::new(service);

    let missing = trust_router(service.clone())
        .oneshot(
            Request::builder()
                .uri("/seller/ravi")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(missing.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(payload["exists"], false);

    let review = trust_router(service.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/seller/ravi/review")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"review":"Great product!","rating":5,"deliveryExperience":"fast","recommend":"Yes","sellerName":"Ravi Kumar"}"#,
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(review.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(review.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["seller"]["name"], "Ravi Kumar");
    assert!(payload["trust_score_change"]["new"].as_f64().expect("new score") > 50.0);

    let found = trust_router(service)
        .oneshot(
            Request::builder()
                .uri("/seller/ravi")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(found.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(found.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(payload["exists"], true);
    assert_eq!(payload["totalReviews"], 1);
}

#[tokio::test]
async fn review_endpoint_rejects_non_numeric_rating() {
    let (_, service) = service();
    let response = trust_router(Arc::new(service))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/seller/ravi/review")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"review":"Nice.","rating":"five"}"#))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
