use super::common::*;
use crate::scoring::validation::SecondStageComponent;
use crate::scoring::{composite_score, ScoreError};
use rust_decimal_macros::dec;

#[test]
fn composite_weights_rescaled_document_score() {
    let composite = composite_score(Some(dec!(90)), Some(dec!(80)), Some(dec!(75)))
        .unwrap()
        .expect("all inputs present");

    assert_score(composite.document_evaluation_score, "90.000");
    assert_score(composite.rescaled_document_score, "30.000");
    assert_score(composite.competency_evaluation_score, "80.000");
    assert_score(composite.interview_score, "75.000");
    assert_score(composite.final_score, "54.000");
}

#[test]
fn composite_rounds_rescaled_score_half_up() {
    let composite = composite_score(Some(dec!(235.900)), Some(dec!(80)), Some(dec!(75)))
        .unwrap()
        .expect("all inputs present");

    // 235.9 / 3 = 78.6333..
    assert_score(composite.rescaled_document_score, "78.633");
    // 39.3165 + 24 + 15
    assert_score(composite.final_score, "78.317");
}

#[test]
fn composite_is_absent_until_every_stage_is_scored() {
    assert_eq!(composite_score(None, Some(dec!(80)), Some(dec!(75))), Ok(None));
    assert_eq!(composite_score(Some(dec!(200)), None, Some(dec!(75))), Ok(None));
    assert_eq!(composite_score(Some(dec!(200)), Some(dec!(80)), None), Ok(None));
}

#[test]
fn second_stage_scores_must_be_percentages() {
    assert_eq!(
        composite_score(Some(dec!(200)), Some(dec!(100.5)), Some(dec!(75))),
        Err(ScoreError::SecondStageScoreOutOfRange {
            component: SecondStageComponent::Competency,
            value: dec!(100.5),
        })
    );
    assert_eq!(
        composite_score(Some(dec!(200)), None, Some(dec!(-1))),
        Err(ScoreError::SecondStageScoreOutOfRange {
            component: SecondStageComponent::Interview,
            value: dec!(-1),
        })
    );
}

#[test]
fn boundary_second_stage_scores_are_accepted() {
    let composite = composite_score(Some(dec!(300)), Some(dec!(100)), Some(dec!(0)))
        .unwrap()
        .expect("all inputs present");

    assert_score(composite.rescaled_document_score, "100.000");
    assert_score(composite.final_score, "80.000");
}

#[test]
fn document_score_must_fit_the_rubric() {
    assert_eq!(
        composite_score(Some(dec!(1000)), Some(dec!(100)), Some(dec!(100))),
        Err(ScoreError::DocumentScoreOutOfRange(dec!(1000)))
    );
    assert_eq!(
        composite_score(Some(dec!(-0.001)), None, None),
        Err(ScoreError::DocumentScoreOutOfRange(dec!(-0.001)))
    );
    assert_eq!(
        ScoreError::DocumentScoreOutOfRange(dec!(300.001)).code(),
        "DOCUMENT_SCORE_OUT_OF_RANGE"
    );
}
