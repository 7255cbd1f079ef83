//! Document-evaluation scoring engine.
//!
//! A raw [`AchievementRecord`] is validated, normalized per graduation track,
//! scored by four independent scorers and aggregated into a fixed-point
//! [`ScoreBreakdown`]. Every step is pure; identical input yields identical
//! output down to the decimal scale.

pub mod aggregate;
pub mod arts;
pub mod attendance;
pub mod decimal;
pub mod domain;
pub mod normalizer;
pub mod rubric;
pub mod subjects;
pub mod validation;
pub mod volunteer;

#[cfg(test)]
mod tests;

pub use aggregate::{composite_score, document_totals, CompositeScore, DocumentTotals};
pub use domain::{
    AchievementRecord, GraduationType, LiberalCurriculum, Semester, SemesterGrades,
    TranscriptInput, TranscriptTrack, ValidatedRecord,
};
pub use normalizer::{normalize, NormalizedAchievement};
pub use subjects::SemesterScores;
pub use validation::{validate_record, ScoreError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use decimal::to_score;

/// Stateless calculator shared by the in-process service and the HTTP adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, record: &AchievementRecord) -> Result<ScoreOutcome, ScoreError> {
        let outcome = match validate_record(record)? {
            ValidatedRecord::Ged { average } => ScoreOutcome::Ged(GedOutcome {
                average_score: to_score(average),
            }),
            ValidatedRecord::Transcript(input) => {
                ScoreOutcome::Transcript(Box::new(score_transcript(&input)?))
            }
        };

        debug!(
            graduation_type = %outcome.graduation_type(),
            document_score = ?outcome.document_score(),
            "document evaluation scored"
        );

        Ok(outcome)
    }
}

fn score_transcript(input: &TranscriptInput) -> Result<ScoreBreakdown, ScoreError> {
    let normalized = normalize(input.track, &input.semesters);

    let general = subjects::score_general_subjects(&normalized)?;
    let arts_physical_score = arts::score_arts_physical(Some(input.arts_physical.as_slice()))?;
    let attendance_score = attendance::score_attendance(
        Some(input.absent_days.as_slice()),
        Some(input.attendance_days.as_slice()),
    )?;
    let volunteer_score = volunteer::score_volunteer(Some(input.volunteer_hours.as_slice()))?;

    let totals = document_totals(
        general.total,
        arts_physical_score,
        attendance_score,
        volunteer_score,
    );
    let absence_days_count = attendance::absence_days_count(
        Some(input.absent_days.as_slice()),
        Some(input.attendance_days.as_slice()),
    )
    .unwrap_or_default();

    Ok(ScoreBreakdown {
        graduation_type: input.track.graduation_type(),
        semester_scores: general.semesters,
        general_subjects_score: general.total,
        arts_physical_subjects_score: arts_physical_score,
        total_subjects_score: totals.total_subjects_score,
        attendance_score,
        volunteer_score,
        total_non_subjects_score: totals.total_non_subjects_score,
        total_score: totals.total_score,
        absence_days_count,
    })
}

/// Full breakdown of a transcript-based document evaluation. Every decimal
/// carries exactly three fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub graduation_type: GraduationType,
    pub semester_scores: SemesterScores,
    pub general_subjects_score: Decimal,
    pub arts_physical_subjects_score: Decimal,
    pub total_subjects_score: Decimal,
    pub attendance_score: Decimal,
    pub volunteer_score: Decimal,
    pub total_non_subjects_score: Decimal,
    pub total_score: Decimal,
    /// Reporting counter, not part of the score.
    pub absence_days_count: i64,
}

/// GED applicants carry their examination average and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GedOutcome {
    pub average_score: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreOutcome {
    Transcript(Box<ScoreBreakdown>),
    Ged(GedOutcome),
}

impl ScoreOutcome {
    pub fn graduation_type(&self) -> GraduationType {
        match self {
            ScoreOutcome::Transcript(breakdown) => breakdown.graduation_type,
            ScoreOutcome::Ged(_) => GraduationType::Ged,
        }
    }

    /// Document evaluation total; GED outcomes have none.
    pub fn document_score(&self) -> Option<Decimal> {
        match self {
            ScoreOutcome::Transcript(breakdown) => Some(breakdown.total_score),
            ScoreOutcome::Ged(_) => None,
        }
    }

    pub fn breakdown(&self) -> Option<&ScoreBreakdown> {
        match self {
            ScoreOutcome::Transcript(breakdown) => Some(breakdown.as_ref()),
            ScoreOutcome::Ged(_) => None,
        }
    }

    /// Flat response shape; fields that were not computed are omitted.
    pub fn view(&self) -> CalculatedScoreView {
        match self {
            ScoreOutcome::Transcript(breakdown) => CalculatedScoreView {
                graduation_type: breakdown.graduation_type,
                general_subjects_score: Some(breakdown.general_subjects_score),
                general_subjects_score_detail: Some(breakdown.semester_scores.clone()),
                arts_physical_subjects_score: Some(breakdown.arts_physical_subjects_score),
                total_subjects_score: Some(breakdown.total_subjects_score),
                attendance_score: Some(breakdown.attendance_score),
                volunteer_score: Some(breakdown.volunteer_score),
                total_non_subjects_score: Some(breakdown.total_non_subjects_score),
                total_score: Some(breakdown.total_score),
                absence_days_count: Some(breakdown.absence_days_count),
                ged_avg_score: None,
            },
            ScoreOutcome::Ged(ged) => CalculatedScoreView {
                graduation_type: GraduationType::Ged,
                general_subjects_score: None,
                general_subjects_score_detail: None,
                arts_physical_subjects_score: None,
                total_subjects_score: None,
                attendance_score: None,
                volunteer_score: None,
                total_non_subjects_score: None,
                total_score: None,
                absence_days_count: None,
                ged_avg_score: Some(ged.average_score),
            },
        }
    }
}

/// Wire shape shared by the CLI and HTTP adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedScoreView {
    pub graduation_type: GraduationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_subjects_score: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_subjects_score_detail: Option<SemesterScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arts_physical_subjects_score: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_subjects_score: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_score: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer_score: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_non_subjects_score: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_days_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ged_avg_score: Option<Decimal>,
}
