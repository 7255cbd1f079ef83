use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{divide_half_up, to_score, SCORE_SCALE};
use super::validation::{
    check_document_score, check_second_stage_score, ScoreError, SecondStageComponent,
};

const DOCUMENT_RESCALE_DIVISOR: u32 = 3;

/// Subject, non-subject and grand totals of the document evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    /// General subjects plus arts/PE, out of 240.
    pub total_subjects_score: Decimal,
    /// Attendance plus volunteer, out of 60.
    pub total_non_subjects_score: Decimal,
    /// Out of 300.
    pub total_score: Decimal,
}

pub fn document_totals(
    general_subjects: Decimal,
    arts_physical: Decimal,
    attendance: Decimal,
    volunteer: Decimal,
) -> DocumentTotals {
    let total_subjects_score = to_score(general_subjects + arts_physical);
    let total_non_subjects_score = to_score(attendance + volunteer);
    let total_score = to_score(total_subjects_score + total_non_subjects_score);

    DocumentTotals {
        total_subjects_score,
        total_non_subjects_score,
        total_score,
    }
}

/// Final weighted score once competency and interview results exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScore {
    pub document_evaluation_score: Decimal,
    /// Document score on a 100-point basis.
    pub rescaled_document_score: Decimal,
    pub competency_evaluation_score: Decimal,
    pub interview_score: Decimal,
    pub final_score: Decimal,
}

/// 0.5 x rescaled document + 0.3 x competency + 0.2 x interview.
///
/// Returns `Ok(None)` while any of the three inputs is missing; a present
/// document score outside 0-300 or second-stage score outside 0-100 is still
/// rejected.
pub fn composite_score(
    document: Option<Decimal>,
    competency: Option<Decimal>,
    interview: Option<Decimal>,
) -> Result<Option<CompositeScore>, ScoreError> {
    let document = document.map(check_document_score).transpose()?;
    let competency = competency
        .map(|score| check_second_stage_score(SecondStageComponent::Competency, score))
        .transpose()?;
    let interview = interview
        .map(|score| check_second_stage_score(SecondStageComponent::Interview, score))
        .transpose()?;

    let (Some(document), Some(competency), Some(interview)) = (document, competency, interview)
    else {
        return Ok(None);
    };

    let rescaled = divide_half_up(
        document,
        Decimal::from(DOCUMENT_RESCALE_DIVISOR),
        SCORE_SCALE,
    );
    let final_score = to_score(
        rescaled * Decimal::new(5, 1)
            + competency * Decimal::new(3, 1)
            + interview * Decimal::new(2, 1),
    );

    Ok(Some(CompositeScore {
        document_evaluation_score: to_score(document),
        rescaled_document_score: rescaled,
        competency_evaluation_score: to_score(competency),
        interview_score: to_score(interview),
        final_score,
    }))
}
