use super::common::*;
use crate::workflows::hiring::domain::{InterviewId, InterviewStatus, Stage};
use crate::workflows::hiring::transitions::{self, TransitionError};

#[test]
fn endorse_moves_applied_applicants_forward() {
    let applicant = applicant_at(Stage::Applied);
    let now = fixed_now();

    let next = transitions::endorse(&applicant, now).expect("endorsement is legal");
    assert_eq!(next.stage, Stage::Endorsed);
    assert_eq!(next.endorsed_at, Some(now));
    assert_eq!(next.status_updated_at, now);
}

#[test]
fn endorse_refuses_every_other_stage() {
    for stage in [
        Stage::Endorsed,
        Stage::InterviewScheduled,
        Stage::Evaluated,
        Stage::ForHiring,
        Stage::Hired,
        Stage::Rejected,
    ] {
        let applicant = applicant_at(stage);
        match transitions::endorse(&applicant, fixed_now()) {
            Err(TransitionError::InvalidTransition { from, .. }) => assert_eq!(from, stage),
            other => panic!("expected invalid transition from {stage:?}, got {other:?}"),
        }
    }
}

#[test]
fn repeat_endorsement_is_a_reported_refusal_not_a_no_op() {
    let applicant = applicant_at(Stage::Applied);
    let endorsed = transitions::endorse(&applicant, fixed_now()).expect("first call legal");
    let second = transitions::endorse(&endorsed, fixed_now());
    assert!(matches!(
        second,
        Err(TransitionError::InvalidTransition {
            from: Stage::Endorsed,
            ..
        })
    ));
}

#[test]
fn schedule_interview_requires_endorsement() {
    let applicant = applicant_at(Stage::Applied);
    let result = transitions::schedule_interview(
        &applicant,
        InterviewId("itv-x".to_string()),
        interview_details(),
        fixed_now(),
    );
    assert!(matches!(
        result,
        Err(TransitionError::InvalidTransition {
            from: Stage::Applied,
            ..
        })
    ));
}

#[test]
fn schedule_interview_creates_a_pending_interview() {
    let applicant = applicant_at(Stage::Endorsed);
    let now = fixed_now();

    let (next, interview) = transitions::schedule_interview(
        &applicant,
        InterviewId("itv-x".to_string()),
        interview_details(),
        now,
    )
    .expect("scheduling is legal from endorsed");

    assert_eq!(next.stage, Stage::InterviewScheduled);
    assert_eq!(next.interview_scheduled_at, Some(now));
    assert_eq!(interview.status, InterviewStatus::Pending);
    assert_eq!(interview.applicant_id, applicant.id);
}

#[test]
fn complete_interview_advances_both_records_together() {
    let applicant = applicant_at(Stage::InterviewScheduled);
    let interview = pending_interview(&applicant.id);
    let now = fixed_now();

    let outcome = transitions::complete_interview(&applicant, &interview, now)
        .expect("completion is legal");

    assert_eq!(outcome.applicant.stage, Stage::Evaluated);
    assert_eq!(outcome.applicant.status_updated_at, now);
    assert_eq!(outcome.interview.status, InterviewStatus::Completed);
}

#[test]
fn complete_interview_refuses_an_already_completed_interview() {
    let applicant = applicant_at(Stage::InterviewScheduled);
    let mut interview = pending_interview(&applicant.id);
    interview.status = InterviewStatus::Completed;

    let result = transitions::complete_interview(&applicant, &interview, fixed_now());
    assert!(matches!(
        result,
        Err(TransitionError::InvalidTransition { .. })
    ));
}

#[test]
fn incomplete_interview_returns_applicant_to_applied() {
    let applicant = applicant_at(Stage::InterviewScheduled);
    let interview = pending_interview(&applicant.id);

    let outcome = transitions::mark_interview_incomplete(
        &applicant,
        &interview,
        "candidate no-show",
        fixed_now(),
    )
    .expect("backward edge is legal");

    assert_eq!(outcome.applicant.stage, Stage::Applied);
    assert_eq!(
        outcome.applicant.rejection_reason.as_deref(),
        Some("candidate no-show")
    );
    assert_eq!(outcome.interview.status, InterviewStatus::Pending);
    assert_eq!(outcome.interview.notes.as_deref(), Some("candidate no-show"));

    // The applicant re-enters the endorsement queue.
    let re_endorsed = transitions::endorse(&outcome.applicant, fixed_now());
    assert!(re_endorsed.is_ok());
}

#[test]
fn record_evaluation_keeps_the_stage_unchanged() {
    let applicant = applicant_at(Stage::Evaluated);

    let next = transitions::record_evaluation(
        &applicant,
        passing_scores(),
        empty_breakdown(),
        fixed_now(),
    )
    .expect("evaluation is legal");

    assert_eq!(next.stage, Stage::Evaluated);
    let evaluation = next.evaluation.expect("evaluation recorded");
    assert_eq!(evaluation.total_score, 210);
    assert_eq!(evaluation.rank, "Professor I");
}

#[test]
fn re_evaluation_overwrites_the_previous_record() {
    let applicant = applicant_at(Stage::Evaluated);
    let first = transitions::record_evaluation(
        &applicant,
        failing_scores(),
        empty_breakdown(),
        fixed_now(),
    )
    .expect("first evaluation");
    let second = transitions::record_evaluation(
        &first,
        passing_scores(),
        empty_breakdown(),
        fixed_now(),
    )
    .expect("re-evaluation overwrites in place");

    let evaluation = second.evaluation.expect("evaluation present");
    assert_eq!(evaluation.total_score, 210);
}

#[test]
fn forward_transitions_require_their_exact_stage() {
    let evaluated = applicant_at(Stage::Evaluated);
    let shortlisted =
        transitions::advance_to_for_hiring(&evaluated, fixed_now()).expect("advance legal");
    assert_eq!(shortlisted.stage, Stage::ForHiring);

    let hired = transitions::mark_hired(&shortlisted, fixed_now()).expect("hire legal");
    assert_eq!(hired.stage, Stage::Hired);
    assert!(hired.hired_at.is_some());

    assert!(transitions::mark_hired(&evaluated, fixed_now()).is_err());
    assert!(transitions::advance_to_for_hiring(&shortlisted, fixed_now()).is_err());
}

#[test]
fn reject_is_legal_from_every_non_terminal_stage() {
    for stage in [
        Stage::Applied,
        Stage::Endorsed,
        Stage::InterviewScheduled,
        Stage::Evaluated,
        Stage::ForHiring,
    ] {
        let applicant = applicant_at(stage);
        let next = transitions::reject(&applicant, "position withdrawn", fixed_now())
            .expect("rejection legal before hire");
        assert_eq!(next.stage, Stage::Rejected);
        assert_eq!(next.rejection_reason.as_deref(), Some("position withdrawn"));
    }

    for stage in [Stage::Hired, Stage::Rejected] {
        let applicant = applicant_at(stage);
        assert!(transitions::reject(&applicant, "too late", fixed_now()).is_err());
    }
}

#[test]
fn force_set_stage_bypasses_validation() {
    let applicant = applicant_at(Stage::Applied);
    let overridden = transitions::force_set_stage(&applicant, Stage::ForHiring, fixed_now());
    assert_eq!(overridden.stage, Stage::ForHiring);
}

#[test]
fn stage_labels_track_the_canonical_enum() {
    assert_eq!(Stage::InterviewScheduled.label(), "Interview Scheduled");
    assert_eq!(Stage::ForHiring.label(), "For Hiring");
    assert_eq!(Stage::ordered().len(), 6);
    assert!(Stage::Hired.is_terminal());
    assert!(Stage::Rejected.is_terminal());
    assert!(!Stage::Evaluated.is_terminal());
}
