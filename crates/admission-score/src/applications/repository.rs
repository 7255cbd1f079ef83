use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::ApplicantId;
use crate::scoring::{
    composite_score, CalculatedScoreView, CompositeScore, ScoreError, ScoreOutcome,
};

/// Latest document evaluation of one applicant plus the second-stage inputs
/// entered since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub applicant_id: ApplicantId,
    pub outcome: ScoreOutcome,
    pub competency_evaluation_score: Option<Decimal>,
    pub interview_score: Option<Decimal>,
    pub first_test_passed: Option<bool>,
    pub second_test_passed: Option<bool>,
    pub computed_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(
        applicant_id: ApplicantId,
        outcome: ScoreOutcome,
        computed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            applicant_id,
            outcome,
            competency_evaluation_score: None,
            interview_score: None,
            first_test_passed: None,
            second_test_passed: None,
            computed_at,
        }
    }

    /// Composite over the stored inputs; `None` until all three exist.
    pub fn composite(&self) -> Result<Option<CompositeScore>, ScoreError> {
        composite_score(
            self.outcome.document_score(),
            self.competency_evaluation_score,
            self.interview_score,
        )
    }

    pub fn score_view(&self) -> Result<StoredScoreView, ScoreError> {
        Ok(StoredScoreView {
            applicant_id: self.applicant_id.clone(),
            document_evaluation: self.outcome.view(),
            competency_evaluation_score: self.competency_evaluation_score,
            interview_score: self.interview_score,
            composite: self.composite()?,
            first_test_passed: self.first_test_passed,
            second_test_passed: self.second_test_passed,
            computed_at: self.computed_at,
        })
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait ScoreRepository: Send + Sync {
    /// Insert or replace; the last writer wins.
    fn upsert(&self, record: ScoreRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicantId) -> Result<Option<ScoreRecord>, RepositoryError>;
    fn list(&self, limit: usize) -> Result<Vec<ScoreRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Response shape for a stored score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredScoreView {
    pub applicant_id: ApplicantId,
    pub document_evaluation: CalculatedScoreView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competency_evaluation_score: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_score: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_test_passed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_test_passed: Option<bool>,
    pub computed_at: DateTime<Utc>,
}
