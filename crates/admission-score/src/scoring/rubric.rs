use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::domain::{Semester, SemesterGrades, TranscriptTrack};
use super::normalizer::{substitute_candidate, substitute_graduate};

type SubstitutionRule = fn(&SemesterGrades) -> BTreeMap<Semester, Vec<i32>>;

/// Everything that differs between transcript tracks: the substitution rule
/// used by the normalizer and the per-semester weights used by the scorer.
pub struct TrackRubric {
    pub track: TranscriptTrack,
    /// Weights for 1-2, 2-1, 2-2, 3-1, 3-2; each track sums to 180.
    weights: [u32; 5],
    pub(crate) substitute: SubstitutionRule,
}

static CANDIDATE_RUBRIC: TrackRubric = TrackRubric {
    track: TranscriptTrack::Candidate,
    weights: [18, 45, 45, 72, 0],
    substitute: substitute_candidate,
};

static GRADUATE_RUBRIC: TrackRubric = TrackRubric {
    track: TranscriptTrack::Graduate,
    weights: [0, 36, 36, 54, 54],
    substitute: substitute_graduate,
};

impl TrackRubric {
    pub fn for_track(track: TranscriptTrack) -> &'static TrackRubric {
        match track {
            TranscriptTrack::Candidate => &CANDIDATE_RUBRIC,
            TranscriptTrack::Graduate => &GRADUATE_RUBRIC,
        }
    }

    /// Weight of `semester` on this track. 1-1 is never weighted.
    pub fn weight(&self, semester: Semester) -> Decimal {
        Semester::SCORED
            .iter()
            .position(|scored| *scored == semester)
            .map(|index| Decimal::from(self.weights[index]))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn max_general_subjects_score(&self) -> Decimal {
        Decimal::from(self.weights.iter().sum::<u32>())
    }
}
