use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::applications::domain::ApplicantId;
use crate::applications::repository::{RepositoryError, ScoreRecord, ScoreRepository};
use crate::applications::{score_router, AdmissionScoreService};
use crate::scoring::AchievementRecord;

/// Candidate transcript worth 235.900 document points.
pub(super) fn achievement() -> AchievementRecord {
    AchievementRecord {
        graduation_type: "CANDIDATE".to_string(),
        achievement_1_2: Some(vec![5, 4, 3, 0, 5]),
        achievement_2_1: Some(vec![5, 5, 5, 5]),
        achievement_2_2: Some(vec![4, 4, 4, 4, 4]),
        achievement_3_1: Some(vec![3, 4, 5, 2, 1]),
        arts_physical_achievement: Some(vec![5, 5, 4, 4, 3, 0]),
        absent_days: Some(vec![1, 0, 0]),
        attendance_days: Some(vec![0, 1, 0, 0, 2, 0, 0, 0, 0]),
        volunteer_time: Some(vec![7, 6, 4]),
        liberal_system: Some("자유학년제".to_string()),
        ..AchievementRecord::default()
    }
}

pub(super) fn invalid_achievement() -> AchievementRecord {
    let mut record = achievement();
    record.achievement_2_2 = Some(vec![4, 6]);
    record
}

pub(super) fn applicant(id: &str) -> ApplicantId {
    ApplicantId(id.to_string())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<ApplicantId, ScoreRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ScoreRepository for MemoryRepository {
    fn upsert(&self, record: ScoreRecord) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(record.applicant_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().take(limit).cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl ScoreRepository for UnavailableRepository {
    fn upsert(&self, _record: ScoreRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicantId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _limit: usize) -> Result<Vec<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (AdmissionScoreService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = AdmissionScoreService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(
    service: AdmissionScoreService<MemoryRepository>,
) -> axum::Router {
    score_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
