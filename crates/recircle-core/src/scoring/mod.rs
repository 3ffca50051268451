//! Deterministic scoring pipelines.
//!
//! [`impact`] folds reported transactions into standards-aligned impact
//! scores and a rolling CSR aggregate; [`trust`] turns reviews into
//! composite trust scores and EWMA reputation updates. The two pipelines do
//! not depend on each other.

pub mod impact;
pub mod trust;
