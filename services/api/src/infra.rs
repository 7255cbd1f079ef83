use admission_score::applications::{ApplicantId, RepositoryError, ScoreRecord, ScoreRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store; records are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScoreRepository {
    records: Arc<Mutex<HashMap<ApplicantId, ScoreRecord>>>,
}

impl InMemoryScoreRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ApplicantId, ScoreRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("score store lock poisoned".to_string()))
    }
}

impl ScoreRepository for InMemoryScoreRepository {
    fn upsert(&self, record: ScoreRecord) -> Result<(), RepositoryError> {
        self.lock()?.insert(record.applicant_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<ScoreRecord>, RepositoryError> {
        let guard = self.lock()?;
        let mut records: Vec<ScoreRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.applicant_id.cmp(&b.applicant_id));
        records.truncate(limit);
        Ok(records)
    }
}
