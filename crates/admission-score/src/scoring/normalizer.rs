use std::collections::BTreeMap;

use super::domain::{Semester, SemesterGrades, TranscriptTrack};
use super::rubric::TrackRubric;

/// Grades for every scored semester after substitution. A semester with no
/// grades and no substitution source holds an empty list, which scores zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAchievement {
    pub track: TranscriptTrack,
    semesters: BTreeMap<Semester, Vec<i32>>,
}

impl NormalizedAchievement {
    pub fn grades(&self, semester: Semester) -> &[i32] {
        self.semesters
            .get(&semester)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Semester, &[i32])> {
        Semester::SCORED
            .into_iter()
            .map(|semester| (semester, self.grades(semester)))
    }
}

/// Fill missing semesters using the substitution rule of the applicant's track.
pub fn normalize(track: TranscriptTrack, grades: &SemesterGrades) -> NormalizedAchievement {
    let rubric = TrackRubric::for_track(track);
    NormalizedAchievement {
        track,
        semesters: (rubric.substitute)(grades),
    }
}

fn first_present(grades: &SemesterGrades, sources: &[Semester]) -> Vec<i32> {
    sources
        .iter()
        .find_map(|semester| grades.get(*semester))
        .map(<[i32]>::to_vec)
        .unwrap_or_default()
}

/// Candidates have no 3-2 grades yet. 1-2 falls back to 1-1 then 2-2, and 2-1
/// falls back to 2-2.
pub(crate) fn substitute_candidate(grades: &SemesterGrades) -> BTreeMap<Semester, Vec<i32>> {
    BTreeMap::from([
        (
            Semester::Y1S2,
            first_present(grades, &[Semester::Y1S2, Semester::Y1S1, Semester::Y2S2]),
        ),
        (
            Semester::Y2S1,
            first_present(grades, &[Semester::Y2S1, Semester::Y2S2]),
        ),
        (Semester::Y2S2, first_present(grades, &[Semester::Y2S2])),
        (Semester::Y3S1, first_present(grades, &[Semester::Y3S1])),
        (Semester::Y3S2, first_present(grades, &[Semester::Y3S2])),
    ])
}

/// Graduates are scored on the second and third years; 2-1 and 2-2 stand in
/// for each other. 1-2 is never substituted.
pub(crate) fn substitute_graduate(grades: &SemesterGrades) -> BTreeMap<Semester, Vec<i32>> {
    BTreeMap::from([
        (Semester::Y1S2, first_present(grades, &[Semester::Y1S2])),
        (
            Semester::Y2S1,
            first_present(grades, &[Semester::Y2S1, Semester::Y2S2]),
        ),
        (
            Semester::Y2S2,
            first_present(grades, &[Semester::Y2S2, Semester::Y2S1]),
        ),
        (Semester::Y3S1, first_present(grades, &[Semester::Y3S1])),
        (Semester::Y3S2, first_present(grades, &[Semester::Y3S2])),
    ])
}
