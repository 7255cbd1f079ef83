use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{divide_half_up, to_score, zero_score, AVERAGE_SCALE};
use super::domain::Semester;
use super::normalizer::NormalizedAchievement;
use super::rubric::TrackRubric;
use super::validation::{check_subject_grades, ScoreError};

const MAX_LEVEL: u32 = 5;

/// Weighted score of each scored semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterScores {
    #[serde(rename = "score1_2")]
    pub score_1_2: Decimal,
    #[serde(rename = "score2_1")]
    pub score_2_1: Decimal,
    #[serde(rename = "score2_2")]
    pub score_2_2: Decimal,
    #[serde(rename = "score3_1")]
    pub score_3_1: Decimal,
    #[serde(rename = "score3_2")]
    pub score_3_2: Decimal,
}

impl SemesterScores {
    pub fn get(&self, semester: Semester) -> Option<Decimal> {
        match semester {
            Semester::Y1S1 => None,
            Semester::Y1S2 => Some(self.score_1_2),
            Semester::Y2S1 => Some(self.score_2_1),
            Semester::Y2S2 => Some(self.score_2_2),
            Semester::Y3S1 => Some(self.score_3_1),
            Semester::Y3S2 => Some(self.score_3_2),
        }
    }

    pub fn total(&self) -> Decimal {
        to_score(
            self.score_1_2 + self.score_2_1 + self.score_2_2 + self.score_3_1 + self.score_3_2,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralSubjectsScore {
    pub semesters: SemesterScores,
    /// Out of 180.
    pub total: Decimal,
}

/// Score one semester against its weight.
///
/// Subjects recorded as 0 were not taken and are left out of the average.
/// The average is kept to 5 digits before weighting.
pub fn score_semester(
    semester: Semester,
    grades: &[i32],
    weight: Decimal,
) -> Result<Decimal, ScoreError> {
    check_subject_grades(semester, grades)?;

    if grades.is_empty() || weight.is_zero() {
        return Ok(zero_score());
    }

    let taken: Vec<i32> = grades.iter().copied().filter(|grade| *grade != 0).collect();
    if taken.is_empty() {
        return Ok(zero_score());
    }

    let sum: i64 = taken.iter().map(|grade| i64::from(*grade)).sum();
    let max_points = Decimal::from(taken.len()) * Decimal::from(MAX_LEVEL);
    let average = divide_half_up(Decimal::from(sum), max_points, AVERAGE_SCALE);

    Ok(to_score(average * weight))
}

pub fn score_general_subjects(
    normalized: &NormalizedAchievement,
) -> Result<GeneralSubjectsScore, ScoreError> {
    let rubric = TrackRubric::for_track(normalized.track);
    let score = |semester: Semester| {
        score_semester(
            semester,
            normalized.grades(semester),
            rubric.weight(semester),
        )
    };

    let semesters = SemesterScores {
        score_1_2: score(Semester::Y1S2)?,
        score_2_1: score(Semester::Y2S1)?,
        score_2_2: score(Semester::Y2S2)?,
        score_3_1: score(Semester::Y3S1)?,
        score_3_2: score(Semester::Y3S2)?,
    };
    let total = semesters.total();

    Ok(GeneralSubjectsScore { semesters, total })
}
