//! Admission document-evaluation scoring.
//!
//! [`scoring`] holds the pure calculation engine; [`applications`] stores
//! per-applicant results and exposes them over HTTP.

pub mod applications;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
