//! Recircle scoring engine.
//!
//! Two independent pipelines: environmental-impact scoring for reported
//! second-hand transactions (GHG assessment, circularity metrics, CSR
//! aggregation) and seller-trust scoring for free-text reviews (sentence
//! sentiment, composite trust, EWMA reputation updates). Transport, storage,
//! and telemetry live at the edges; everything under [`scoring`] is
//! deterministic and independently testable.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
