use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::repository::SellerStore;
use super::service::{ReviewService, ReviewServiceError, ReviewStatus, ReviewSubmission};

/// Router exposing the trust pipeline to the transport layer.
pub fn trust_router<S>(service: Arc<ReviewService<S>>) -> Router
where
    S: SellerStore + 'static,
{
    Router::new()
        .route("/seller/:seller_id", get(seller_handler::<S>))
        .route("/seller/:seller_id/review", post(review_handler::<S>))
        .with_state(service)
}

pub(crate) async fn seller_handler<S>(
    State(service): State<Arc<ReviewService<S>>>,
    Path(seller_id): Path<String>,
) -> Response
where
    S: SellerStore + 'static,
{
    match service.seller(&seller_id) {
        Ok(Some(seller)) => {
            let payload = json!({
                "id": seller.id,
                "name": seller.name,
                "trustScore": seller.trust_score,
                "totalReviews": seller.total_reviews,
                "averageRating": seller.average_rating,
                "recommendRate": seller.recommend_rate,
                "exists": true,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Ok(None) => {
            let payload = json!({
                "error": "Seller not found",
                "exists": false,
                "message": "Seller will be created when first review is submitted",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn review_handler<S>(
    State(service): State<Arc<ReviewService<S>>>,
    Path(seller_id): Path<String>,
    Json(submission): Json<ReviewSubmission>,
) -> Response
where
    S: SellerStore + 'static,
{
    let reviewer = submission.reviewer.clone().unwrap_or_else(|| "Anonymous".to_string());
    let product = submission.product.clone().unwrap_or_else(|| "Unknown".to_string());
    let comment = submission.review.clone();
    let recommend = submission.recommend.clone();
    let delivery = submission.delivery.clone();

    match service.submit_review(&seller_id, submission) {
        Ok(outcome) => {
            let message = match outcome.status {
                ReviewStatus::Recorded => "Review submitted successfully!",
                ReviewStatus::ScoredOnly => "Review scored but seller update failed",
            };
            let seller_view = outcome.seller.as_ref().map(|seller| {
                json!({
                    "id": seller.id,
                    "name": seller.name,
                    "trustScore": seller.trust_score,
                    "totalReviews": seller.total_reviews,
                    "averageRating": seller.average_rating,
                    "recommendRate": seller.recommend_rate,
                })
            });
            let payload = json!({
                "status": match outcome.status {
                    ReviewStatus::Recorded => "success",
                    ReviewStatus::ScoredOnly => "partial_success",
                },
                "message": message,
                "review": {
                    "from": reviewer,
                    "product": product,
                    "comment": comment,
                    "deliveryExperience": delivery,
                    "recommend": recommend,
                    "score": outcome.breakdown.final_score,
                },
                "seller": seller_view,
                "trust_score_change": outcome.trust_change,
                "analysis": outcome.breakdown,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err @ ReviewServiceError::MissingSellerId)
        | Err(err @ ReviewServiceError::InvalidRating(_)) => {
            let payload = json!({ "status": "error", "message": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "status": "error", "message": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
