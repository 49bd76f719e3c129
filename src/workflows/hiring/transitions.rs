//! Pure stage-transition rules for the applicant pipeline.
//!
//! Each function validates the current snapshot, then returns the mutated
//! record(s); nothing here touches storage. A repeat call against a stage the
//! applicant has already passed is always a reported [`TransitionError`],
//! never a silent no-op, so callers can surface every illegal request.

use chrono::{DateTime, Utc};

use super::domain::{
    ApplicantRecord, InterviewDetails, InterviewId, InterviewRecord, InterviewStatus, Stage,
};
use super::scoring::{EvaluationRecord, ScoreBreakdown, SubScores};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot {action} an applicant at stage '{}'", .from.label())]
    InvalidTransition { from: Stage, action: &'static str },
}

fn require_stage(
    applicant: &ApplicantRecord,
    expected: Stage,
    action: &'static str,
) -> Result<(), TransitionError> {
    if applicant.stage == expected {
        Ok(())
    } else {
        Err(TransitionError::InvalidTransition {
            from: applicant.stage,
            action,
        })
    }
}

/// HR forwards an applicant to the Dean. Legal only from `Applied`.
pub fn endorse(
    applicant: &ApplicantRecord,
    now: DateTime<Utc>,
) -> Result<ApplicantRecord, TransitionError> {
    require_stage(applicant, Stage::Applied, "endorse")?;

    let mut next = applicant.clone();
    next.stage = Stage::Endorsed;
    next.endorsed_at = Some(now);
    next.status_updated_at = now;
    Ok(next)
}

/// Create a pending interview for an endorsed applicant.
pub fn schedule_interview(
    applicant: &ApplicantRecord,
    interview_id: InterviewId,
    details: InterviewDetails,
    now: DateTime<Utc>,
) -> Result<(ApplicantRecord, InterviewRecord), TransitionError> {
    require_stage(applicant, Stage::Endorsed, "schedule an interview for")?;

    let interview = InterviewRecord {
        id: interview_id,
        applicant_id: applicant.id.clone(),
        status: InterviewStatus::Pending,
        scheduled_for: details.scheduled_for,
        location: details.location,
        notes: None,
        created_at: now,
        updated_at: now,
    };

    let mut next = applicant.clone();
    next.stage = Stage::InterviewScheduled;
    next.interview_scheduled_at = Some(now);
    next.status_updated_at = now;
    Ok((next, interview))
}

/// Paired applicant/interview mutation that must be persisted as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewOutcome {
    pub applicant: ApplicantRecord,
    pub interview: InterviewRecord,
}

/// Completing the interview is the trigger that advances the applicant to
/// `Evaluated`. Both records change; a partial update must never be
/// observable, so callers hand the pair to a single repository call.
pub fn complete_interview(
    applicant: &ApplicantRecord,
    interview: &InterviewRecord,
    now: DateTime<Utc>,
) -> Result<InterviewOutcome, TransitionError> {
    require_stage(applicant, Stage::InterviewScheduled, "complete an interview for")?;
    if interview.status != InterviewStatus::Pending {
        return Err(TransitionError::InvalidTransition {
            from: applicant.stage,
            action: "complete an already-completed interview for",
        });
    }

    let mut done = interview.clone();
    done.status = InterviewStatus::Completed;
    done.updated_at = now;

    let mut next = applicant.clone();
    next.stage = Stage::Evaluated;
    next.status_updated_at = now;

    Ok(InterviewOutcome {
        applicant: next,
        interview: done,
    })
}

/// The one backward edge: an interview that failed to occur (no-show,
/// reschedule) sends the applicant back into the endorsement queue.
pub fn mark_interview_incomplete(
    applicant: &ApplicantRecord,
    interview: &InterviewRecord,
    reason: &str,
    now: DateTime<Utc>,
) -> Result<InterviewOutcome, TransitionError> {
    require_stage(applicant, Stage::InterviewScheduled, "reset an interview for")?;

    let mut reset = interview.clone();
    reset.status = InterviewStatus::Pending;
    reset.notes = Some(reason.to_string());
    reset.updated_at = now;

    let mut next = applicant.clone();
    next.stage = Stage::Applied;
    next.rejection_reason = Some(reason.to_string());
    next.status_updated_at = now;

    Ok(InterviewOutcome {
        applicant: next,
        interview: reset,
    })
}

/// Attach (or overwrite) the finalized evaluation. The stage is unchanged:
/// scoring alone does not imply a hiring decision.
pub fn record_evaluation(
    applicant: &ApplicantRecord,
    scores: SubScores,
    breakdown: ScoreBreakdown,
    now: DateTime<Utc>,
) -> Result<ApplicantRecord, TransitionError> {
    require_stage(applicant, Stage::Evaluated, "record an evaluation for")?;

    let mut next = applicant.clone();
    next.evaluation = Some(EvaluationRecord::new(scores, breakdown, now));
    next.status_updated_at = now;
    Ok(next)
}

/// Explicit HR decision to shortlist an evaluated applicant.
pub fn advance_to_for_hiring(
    applicant: &ApplicantRecord,
    now: DateTime<Utc>,
) -> Result<ApplicantRecord, TransitionError> {
    require_stage(applicant, Stage::Evaluated, "advance")?;

    let mut next = applicant.clone();
    next.stage = Stage::ForHiring;
    next.status_updated_at = now;
    Ok(next)
}

pub fn mark_hired(
    applicant: &ApplicantRecord,
    now: DateTime<Utc>,
) -> Result<ApplicantRecord, TransitionError> {
    require_stage(applicant, Stage::ForHiring, "hire")?;

    let mut next = applicant.clone();
    next.stage = Stage::Hired;
    next.hired_at = Some(now);
    next.status_updated_at = now;
    Ok(next)
}

/// Terminal rejection, legal from any non-terminal stage.
pub fn reject(
    applicant: &ApplicantRecord,
    reason: &str,
    now: DateTime<Utc>,
) -> Result<ApplicantRecord, TransitionError> {
    if applicant.stage.is_terminal() {
        return Err(TransitionError::InvalidTransition {
            from: applicant.stage,
            action: "reject",
        });
    }

    let mut next = applicant.clone();
    next.stage = Stage::Rejected;
    next.rejection_reason = Some(reason.to_string());
    next.status_updated_at = now;
    Ok(next)
}

/// Administrative override that bypasses transition validation. Kept separate
/// from the workflow-legal edges so audits can tell the two apart.
pub fn force_set_stage(
    applicant: &ApplicantRecord,
    stage: Stage,
    now: DateTime<Utc>,
) -> ApplicantRecord {
    let mut next = applicant.clone();
    next.stage = stage;
    next.status_updated_at = now;
    next
}
