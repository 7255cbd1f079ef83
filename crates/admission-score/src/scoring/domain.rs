use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::ScoreError;

/// Applicant's standing relative to middle-school graduation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GraduationType {
    /// Third-year student expected to graduate this year.
    Candidate,
    /// Already graduated from middle school.
    Graduate,
    /// Sat the equivalency examination instead of a transcript.
    Ged,
}

impl GraduationType {
    pub const fn as_str(self) -> &'static str {
        match self {
            GraduationType::Candidate => "CANDIDATE",
            GraduationType::Graduate => "GRADUATE",
            GraduationType::Ged => "GED",
        }
    }
}

impl fmt::Display for GraduationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraduationType {
    type Err = ScoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CANDIDATE" => Ok(GraduationType::Candidate),
            "GRADUATE" => Ok(GraduationType::Graduate),
            "GED" => Ok(GraduationType::Ged),
            _ => Err(ScoreError::UnsupportedGraduationType(value.to_string())),
        }
    }
}

/// Middle-school semester, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    Y1S1,
    Y1S2,
    Y2S1,
    Y2S2,
    Y3S1,
    Y3S2,
}

impl Semester {
    pub const ALL: [Semester; 6] = [
        Semester::Y1S1,
        Semester::Y1S2,
        Semester::Y2S1,
        Semester::Y2S2,
        Semester::Y3S1,
        Semester::Y3S2,
    ];

    /// Semesters that carry a weight in the general-subject formula. 1-1 only
    /// ever serves as a substitution source.
    pub const SCORED: [Semester; 5] = [
        Semester::Y1S2,
        Semester::Y2S1,
        Semester::Y2S2,
        Semester::Y3S1,
        Semester::Y3S2,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Semester::Y1S1 => "1-1",
            Semester::Y1S2 => "1-2",
            Semester::Y2S1 => "2-1",
            Semester::Y2S2 => "2-2",
            Semester::Y3S1 => "3-1",
            Semester::Y3S2 => "3-2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Semester::ALL
            .into_iter()
            .find(|semester| semester.code() == code)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw academic record exactly as submitted. Nothing here is trusted until the
/// validator has turned it into a [`ValidatedRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub graduation_type: String,
    #[serde(default, rename = "achievement1_1")]
    pub achievement_1_1: Option<Vec<i32>>,
    #[serde(default, rename = "achievement1_2")]
    pub achievement_1_2: Option<Vec<i32>>,
    #[serde(default, rename = "achievement2_1")]
    pub achievement_2_1: Option<Vec<i32>>,
    #[serde(default, rename = "achievement2_2")]
    pub achievement_2_2: Option<Vec<i32>>,
    #[serde(default, rename = "achievement3_1")]
    pub achievement_3_1: Option<Vec<i32>>,
    #[serde(default, rename = "achievement3_2")]
    pub achievement_3_2: Option<Vec<i32>>,
    #[serde(default)]
    pub arts_physical_achievement: Option<Vec<i32>>,
    #[serde(default)]
    pub absent_days: Option<Vec<i32>>,
    #[serde(default)]
    pub attendance_days: Option<Vec<i32>>,
    #[serde(default)]
    pub volunteer_time: Option<Vec<i32>>,
    #[serde(default)]
    pub liberal_system: Option<String>,
    #[serde(default)]
    pub free_semester: Option<String>,
    #[serde(default)]
    pub ged_avg_score: Option<Decimal>,
}

impl AchievementRecord {
    pub fn semester(&self, semester: Semester) -> Option<&[i32]> {
        let grades = match semester {
            Semester::Y1S1 => &self.achievement_1_1,
            Semester::Y1S2 => &self.achievement_1_2,
            Semester::Y2S1 => &self.achievement_2_1,
            Semester::Y2S2 => &self.achievement_2_2,
            Semester::Y3S1 => &self.achievement_3_1,
            Semester::Y3S2 => &self.achievement_3_2,
        };
        grades.as_deref()
    }
}

/// Curriculum policy the applicant's middle school ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiberalCurriculum {
    /// A single free semester; `None` when it fell outside the submitted
    /// transcript window.
    FreeSemester { semester: Option<Semester> },
    FreeYear,
}

/// Tracks that are scored from a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranscriptTrack {
    Candidate,
    Graduate,
}

impl TranscriptTrack {
    pub const fn graduation_type(self) -> GraduationType {
        match self {
            TranscriptTrack::Candidate => GraduationType::Candidate,
            TranscriptTrack::Graduate => GraduationType::Graduate,
        }
    }
}

/// Transcript data that passed every range and shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptInput {
    pub track: TranscriptTrack,
    pub curriculum: LiberalCurriculum,
    pub semesters: SemesterGrades,
    pub arts_physical: Vec<i32>,
    pub absent_days: [i32; 3],
    pub attendance_days: [i32; 9],
    pub volunteer_hours: [i32; 3],
}

/// Output of validation: either a transcript to normalize and score, or a GED
/// average carried forward untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedRecord {
    Transcript(TranscriptInput),
    Ged { average: Decimal },
}

/// Per-semester subject grades; a missing key means the semester was not
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemesterGrades {
    grades: std::collections::BTreeMap<Semester, Vec<i32>>,
}

impl SemesterGrades {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: &AchievementRecord) -> Self {
        let grades = Semester::ALL
            .into_iter()
            .filter_map(|semester| {
                record
                    .semester(semester)
                    .map(|grades| (semester, grades.to_vec()))
            })
            .collect();
        Self { grades }
    }

    pub fn with(mut self, semester: Semester, grades: Vec<i32>) -> Self {
        self.grades.insert(semester, grades);
        self
    }

    pub fn get(&self, semester: Semester) -> Option<&[i32]> {
        self.grades.get(&semester).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Semester, &[i32])> {
        self.grades
            .iter()
            .map(|(semester, grades)| (*semester, grades.as_slice()))
    }
}
