use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

use super::domain::{
    ApplicantId, CompetencyScoreUpdate, InterviewScoreUpdate, ListQuery, TestResultUpdate,
    TestStage,
};
use super::repository::{RepositoryError, ScoreRecord, ScoreRepository};
use super::service::{AdmissionScoreService, ApplicationServiceError};
use crate::scoring::AchievementRecord;

const DEFAULT_LIST_LIMIT: usize = 50;
const MAX_LIST_LIMIT: usize = 500;

/// Router exposing stateless calculation and the stored-score lifecycle.
pub fn score_router<R>(service: Arc<AdmissionScoreService<R>>) -> Router
where
    R: ScoreRepository + 'static,
{
    Router::new()
        .route("/api/v1/scores/calculate", post(calculate_handler::<R>))
        .route(
            "/api/v1/applicants/:applicant_id/achievement",
            put(submit_handler::<R>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/competency-score",
            put(competency_handler::<R>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/interview-score",
            put(interview_handler::<R>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/first-test-result",
            put(first_result_handler::<R>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/second-test-result",
            put(second_result_handler::<R>),
        )
        .route(
            "/api/v1/applicants/:applicant_id/score",
            get(score_handler::<R>),
        )
        .route("/api/v1/applicants", get(list_handler::<R>))
        .with_state(service)
}

pub(crate) async fn calculate_handler<R>(
    State(service): State<Arc<AdmissionScoreService<R>>>,
    Json(record): Json<AchievementRecord>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    match service.calculate(&record) {
        Ok(outcome) => (StatusCode::OK, Json(outcome.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AdmissionScoreService<R>>>,
    Path(applicant_id): Path<String>,
    Json(record): Json<AchievementRecord>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    stored_response(service.submit(ApplicantId(applicant_id), &record))
}

pub(crate) async fn competency_handler<R>(
    State(service): State<Arc<AdmissionScoreService<R>>>,
    Path(applicant_id): Path<String>,
    Json(update): Json<CompetencyScoreUpdate>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let id = ApplicantId(applicant_id);
    stored_response(service.record_competency_score(&id, update.competency_evaluation_score))
}

pub(crate) async fn interview_handler<R>(
    State(service): State<Arc<AdmissionScoreService<R>>>,
    Path(applicant_id): Path<String>,
    Json(update): Json<InterviewScoreUpdate>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let id = ApplicantId(applicant_id);
    stored_response(service.record_interview_score(&id, update.interview_score))
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AdmissionScoreService<R>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    stored_response(service.get(&ApplicantId(applicant_id)))
}

pub(crate) async fn first_result_handler<R>(
    State(service): State<Arc<AdmissionScoreService<R>>>,
    Path(applicant_id): Path<String>,
    Json(update): Json<TestResultUpdate>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let id = ApplicantId(applicant_id);
    result_response(&service, &id, TestStage::FirstTest, update.passed)
}

pub(crate) async fn second_result_handler<R>(
    State(service): State<Arc<AdmissionScoreService<R>>>,
    Path(applicant_id): Path<String>,
    Json(update): Json<TestResultUpdate>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let id = ApplicantId(applicant_id);
    result_response(&service, &id, TestStage::SecondTest, update.passed)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<AdmissionScoreService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .min(MAX_LIST_LIMIT);

    let views = service.list(limit).and_then(|records| {
        records
            .iter()
            .map(|record| record.score_view().map_err(ApplicationServiceError::from))
            .collect::<Result<Vec<_>, _>>()
    });

    match views {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

fn result_response<R>(
    service: &AdmissionScoreService<R>,
    applicant_id: &ApplicantId,
    stage: TestStage,
    passed: bool,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let result = match stage {
        TestStage::FirstTest => service.record_first_test_result(applicant_id, passed),
        TestStage::SecondTest => service.record_second_test_result(applicant_id, passed),
    };
    stored_response(result)
}

fn stored_response(result: Result<ScoreRecord, ApplicationServiceError>) -> Response {
    match result.and_then(|record| Ok(record.score_view()?)) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::Scoring(_) => StatusCode::BAD_REQUEST,
        ApplicationServiceError::ResultsFinalized(_) => StatusCode::FORBIDDEN,
        ApplicationServiceError::ResultPending(_) => StatusCode::CONFLICT,
        ApplicationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
        "code": error.code(),
    });
    (status, Json(payload)).into_response()
}
