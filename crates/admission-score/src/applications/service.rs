use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::domain::{ApplicantId, TestStage};
use super::repository::{RepositoryError, ScoreRecord, ScoreRepository};
use crate::scoring::validation::{check_second_stage_score, SecondStageComponent};
use crate::scoring::{AchievementRecord, CompositeScore, ScoreEngine, ScoreError, ScoreOutcome};

/// Service composing the scoring engine with per-applicant storage.
pub struct AdmissionScoreService<R> {
    repository: Arc<R>,
    engine: ScoreEngine,
}

impl<R> AdmissionScoreService<R>
where
    R: ScoreRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            engine: ScoreEngine::new(),
        }
    }

    /// Score a record without storing anything.
    pub fn calculate(
        &self,
        record: &AchievementRecord,
    ) -> Result<ScoreOutcome, ApplicationServiceError> {
        self.engine.calculate(record).map_err(|error| {
            debug!(code = error.code(), %error, "calculation rejected");
            ApplicationServiceError::from(error)
        })
    }

    /// Recompute and replace the applicant's document score.
    ///
    /// Competency and interview scores entered earlier are carried over.
    pub fn submit(
        &self,
        applicant_id: ApplicantId,
        record: &AchievementRecord,
    ) -> Result<ScoreRecord, ApplicationServiceError> {
        let existing = self.repository.fetch(&applicant_id)?;
        if let Some(existing) = &existing {
            ensure_open(existing, TestStage::FirstTest)?;
        }

        let outcome = self.calculate(record)?;
        let mut stored = ScoreRecord::new(applicant_id, outcome, Utc::now());
        if let Some(existing) = existing {
            stored.competency_evaluation_score = existing.competency_evaluation_score;
            stored.interview_score = existing.interview_score;
        }

        self.repository.upsert(stored.clone())?;
        info!(
            applicant_id = %stored.applicant_id,
            graduation_type = %stored.outcome.graduation_type(),
            document_score = ?stored.outcome.document_score(),
            "document score stored"
        );
        Ok(stored)
    }

    pub fn record_competency_score(
        &self,
        applicant_id: &ApplicantId,
        score: Decimal,
    ) -> Result<ScoreRecord, ApplicationServiceError> {
        self.record_second_stage(applicant_id, SecondStageComponent::Competency, score)
    }

    pub fn record_interview_score(
        &self,
        applicant_id: &ApplicantId,
        score: Decimal,
    ) -> Result<ScoreRecord, ApplicationServiceError> {
        self.record_second_stage(applicant_id, SecondStageComponent::Interview, score)
    }

    fn record_second_stage(
        &self,
        applicant_id: &ApplicantId,
        component: SecondStageComponent,
        score: Decimal,
    ) -> Result<ScoreRecord, ApplicationServiceError> {
        let mut record = self.get(applicant_id)?;
        ensure_open(&record, TestStage::SecondTest)?;
        let score = check_second_stage_score(component, score)?;

        match component {
            SecondStageComponent::Competency => record.competency_evaluation_score = Some(score),
            SecondStageComponent::Interview => record.interview_score = Some(score),
        }

        self.repository.upsert(record.clone())?;
        info!(applicant_id = %applicant_id, %component, %score, "second-stage score recorded");
        Ok(record)
    }

    /// Publishing the first-test result freezes the achievement record.
    pub fn record_first_test_result(
        &self,
        applicant_id: &ApplicantId,
        passed: bool,
    ) -> Result<ScoreRecord, ApplicationServiceError> {
        self.record_result(applicant_id, TestStage::FirstTest, passed)
    }

    /// Publishing the second-test result freezes competency and interview scores.
    ///
    /// The first-test result has to be published beforehand.
    pub fn record_second_test_result(
        &self,
        applicant_id: &ApplicantId,
        passed: bool,
    ) -> Result<ScoreRecord, ApplicationServiceError> {
        self.record_result(applicant_id, TestStage::SecondTest, passed)
    }

    fn record_result(
        &self,
        applicant_id: &ApplicantId,
        stage: TestStage,
        passed: bool,
    ) -> Result<ScoreRecord, ApplicationServiceError> {
        let mut record = self.get(applicant_id)?;
        match stage {
            TestStage::FirstTest => record.first_test_passed = Some(passed),
            TestStage::SecondTest => {
                if record.first_test_passed.is_none() {
                    debug!(applicant_id = %applicant_id, "second-test result before first");
                    return Err(ApplicationServiceError::ResultPending(TestStage::FirstTest));
                }
                record.second_test_passed = Some(passed);
            }
        }

        self.repository.upsert(record.clone())?;
        info!(applicant_id = %applicant_id, %stage, passed, "test result recorded");
        Ok(record)
    }

    pub fn get(&self, applicant_id: &ApplicantId) -> Result<ScoreRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(applicant_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn composite(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Option<CompositeScore>, ApplicationServiceError> {
        Ok(self.get(applicant_id)?.composite()?)
    }

    /// Stored records, at most `limit` of them.
    pub fn list(&self, limit: usize) -> Result<Vec<ScoreRecord>, ApplicationServiceError> {
        Ok(self.repository.list(limit)?)
    }
}

fn ensure_open(record: &ScoreRecord, stage: TestStage) -> Result<(), ApplicationServiceError> {
    let published = match stage {
        TestStage::FirstTest => record.first_test_passed,
        TestStage::SecondTest => record.second_test_passed,
    };

    match published {
        Some(_) => {
            debug!(applicant_id = %record.applicant_id, %stage, "edit after result publication");
            Err(ApplicationServiceError::ResultsFinalized(stage))
        }
        None => Ok(()),
    }
}

/// Error raised by the score service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoreError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("{0} results are already published")]
    ResultsFinalized(TestStage),
    #[error("{0} results have not been published yet")]
    ResultPending(TestStage),
}

impl ApplicationServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationServiceError::Scoring(error) => error.code(),
            ApplicationServiceError::Repository(RepositoryError::NotFound) => "APPLICANT_NOT_FOUND",
            ApplicationServiceError::Repository(RepositoryError::Unavailable(_)) => {
                "REPOSITORY_UNAVAILABLE"
            }
            ApplicationServiceError::ResultsFinalized(_) => "RESULTS_FINALIZED",
            ApplicationServiceError::ResultPending(_) => "RESULT_NOT_PUBLISHED",
        }
    }
}
