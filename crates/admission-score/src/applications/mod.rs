//! Stored document scores and the second-stage lifecycle around them.
//!
//! Submissions are scored by the shared [`ScoreEngine`](crate::scoring::ScoreEngine)
//! and kept per applicant; competency and interview scores are attached later
//! and the composite is derived on read. Recording a test result freezes the
//! inputs that fed it.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantId, CompetencyScoreUpdate, InterviewScoreUpdate, ListQuery, TestResultUpdate,
    TestStage,
};
pub use repository::{RepositoryError, ScoreRecord, ScoreRepository, StoredScoreView};
pub use router::score_router;
pub use service::{AdmissionScoreService, ApplicationServiceError};
