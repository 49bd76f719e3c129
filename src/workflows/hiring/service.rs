use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    ApplicantId, ApplicantRecord, ApplicantSubmission, InterviewDetails, InterviewId, Role, Stage,
    VacancyId, VacancyPosting, VacancyRecord, VacancyStatus,
};
use super::repository::{HiringRepository, RepositoryError};
use super::scoring::{self, ScoreBreakdown, SubScores};
use super::transitions::{self, TransitionError};

static APPLICANT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static INTERVIEW_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static VACANCY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_applicant_id() -> ApplicantId {
    let id = APPLICANT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicantId(format!("apl-{id:06}"))
}

fn next_interview_id() -> InterviewId {
    let id = INTERVIEW_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    InterviewId(format!("itv-{id:06}"))
}

fn next_vacancy_id() -> VacancyId {
    let id = VACANCY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    VacancyId(format!("vac-{id:06}"))
}

/// Facade over the stage-transition rules and the injected repository. Every
/// mutation follows the same shape: authorize the caller's role, read the
/// current snapshot, validate through the pure transitions, write back.
/// Lost-update races between concurrent callers are left to the store's
/// row-level locking; transitions are rare, human-triggered events.
pub struct HiringService<R> {
    repository: Arc<R>,
}

impl<R> HiringService<R>
where
    R: HiringRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn authorize(
        role: Role,
        allowed: &'static [Role],
        action: &'static str,
    ) -> Result<(), HiringServiceError> {
        if allowed.contains(&role) {
            Ok(())
        } else {
            Err(HiringServiceError::Forbidden { role, action })
        }
    }

    fn applicant(&self, id: &ApplicantId) -> Result<ApplicantRecord, HiringServiceError> {
        self.repository
            .fetch_applicant(id)?
            .ok_or(HiringServiceError::NotFound { entity: "applicant" })
    }

    /// Public application against an open vacancy; creates the applicant at
    /// `Applied`.
    pub fn apply(
        &self,
        submission: ApplicantSubmission,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        if submission.full_name.trim().is_empty() {
            return Err(HiringServiceError::InvalidInput(
                "applicant name is required".to_string(),
            ));
        }
        if submission.email.trim().is_empty() || !submission.email.contains('@') {
            return Err(HiringServiceError::InvalidInput(
                "a valid email address is required".to_string(),
            ));
        }

        let vacancy = self
            .repository
            .fetch_vacancy(&submission.vacancy_id)?
            .ok_or(HiringServiceError::NotFound { entity: "vacancy" })?;
        if vacancy.status != VacancyStatus::Open {
            return Err(HiringServiceError::InvalidInput(format!(
                "vacancy '{}' is not open for applications",
                vacancy.title
            )));
        }

        let now = Utc::now();
        let record = ApplicantRecord {
            id: next_applicant_id(),
            vacancy_id: submission.vacancy_id,
            full_name: submission.full_name,
            email: submission.email,
            resume_url: submission.resume_url,
            stage: Stage::Applied,
            rejection_reason: None,
            applied_at: now,
            endorsed_at: None,
            interview_scheduled_at: None,
            hired_at: None,
            status_updated_at: now,
            evaluation: None,
        };

        let stored = self.repository.insert_applicant(record)?;
        info!(applicant = %stored.id.0, vacancy = %stored.vacancy_id.0, "application received");
        Ok(stored)
    }

    pub fn endorse(
        &self,
        role: Role,
        id: &ApplicantId,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "endorse applicants")?;
        let applicant = self.applicant(id)?;
        let next = transitions::endorse(&applicant, Utc::now())?;
        self.repository.update_applicant(next.clone())?;
        info!(applicant = %id.0, "applicant endorsed to dean");
        Ok(next)
    }

    pub fn schedule_interview(
        &self,
        role: Role,
        id: &ApplicantId,
        details: InterviewDetails,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "schedule interviews")?;
        let applicant = self.applicant(id)?;
        let (next, interview) =
            transitions::schedule_interview(&applicant, next_interview_id(), details, Utc::now())?;
        self.repository.insert_interview(interview)?;
        self.repository.update_applicant(next.clone())?;
        info!(applicant = %id.0, "interview scheduled");
        Ok(next)
    }

    /// Advances the applicant to `Evaluated` and closes the interview in one
    /// repository call so neither write can land without the other.
    pub fn complete_interview(
        &self,
        role: Role,
        id: &ApplicantId,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "complete interviews")?;
        let applicant = self.applicant(id)?;
        let interview = self
            .repository
            .fetch_interview_for_applicant(id)?
            .ok_or(HiringServiceError::NotFound { entity: "interview" })?;

        let outcome = transitions::complete_interview(&applicant, &interview, Utc::now())?;
        let next = outcome.applicant.clone();
        self.repository
            .apply_interview_outcome(outcome.applicant, outcome.interview)?;
        info!(applicant = %id.0, "interview completed, applicant moved to evaluation");
        Ok(next)
    }

    /// Backward edge: returns a no-show applicant to the endorsement queue.
    pub fn mark_interview_incomplete(
        &self,
        role: Role,
        id: &ApplicantId,
        reason: &str,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "reset interviews")?;
        if reason.trim().is_empty() {
            return Err(HiringServiceError::InvalidInput(
                "a reason is required when marking an interview incomplete".to_string(),
            ));
        }

        let applicant = self.applicant(id)?;
        let interview = self
            .repository
            .fetch_interview_for_applicant(id)?
            .ok_or(HiringServiceError::NotFound { entity: "interview" })?;

        let outcome =
            transitions::mark_interview_incomplete(&applicant, &interview, reason, Utc::now())?;
        let next = outcome.applicant.clone();
        self.repository
            .apply_interview_outcome(outcome.applicant, outcome.interview)?;
        info!(applicant = %id.0, reason, "interview marked incomplete");
        Ok(next)
    }

    /// Finalize scoring. Re-evaluation overwrites the prior record in place;
    /// the stage does not move.
    pub fn record_evaluation(
        &self,
        role: Role,
        id: &ApplicantId,
        scores: SubScores,
        breakdown: ScoreBreakdown,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr, Role::Dean], "record evaluations")?;
        let applicant = self.applicant(id)?;
        let next = transitions::record_evaluation(&applicant, scores, breakdown, Utc::now())?;
        self.repository.update_applicant(next.clone())?;
        let total = next
            .evaluation
            .as_ref()
            .map(|eval| eval.total_score)
            .unwrap_or_default();
        info!(applicant = %id.0, total, "evaluation recorded");
        Ok(next)
    }

    /// Shortlist an evaluated applicant. When `require_passing` is set, the
    /// recorded total must meet [`scoring::PASSING_SCORE`].
    pub fn advance_to_for_hiring(
        &self,
        role: Role,
        id: &ApplicantId,
        require_passing: bool,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "advance applicants")?;
        let applicant = self.applicant(id)?;

        if require_passing {
            let total = applicant
                .evaluation
                .as_ref()
                .map(|eval| eval.total_score)
                .ok_or_else(|| {
                    HiringServiceError::InvalidInput(
                        "applicant has no recorded evaluation".to_string(),
                    )
                })?;
            if !scoring::is_passing(total) {
                return Err(HiringServiceError::InvalidInput(format!(
                    "total score {total} is below the passing score {}",
                    scoring::PASSING_SCORE
                )));
            }
        }

        let next = transitions::advance_to_for_hiring(&applicant, Utc::now())?;
        self.repository.update_applicant(next.clone())?;
        Ok(next)
    }

    pub fn mark_hired(
        &self,
        role: Role,
        id: &ApplicantId,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "hire applicants")?;
        let applicant = self.applicant(id)?;
        let next = transitions::mark_hired(&applicant, Utc::now())?;
        self.repository.update_applicant(next.clone())?;
        info!(applicant = %id.0, "applicant hired");
        Ok(next)
    }

    pub fn reject(
        &self,
        role: Role,
        id: &ApplicantId,
        reason: &str,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "reject applicants")?;
        let applicant = self.applicant(id)?;
        let next = transitions::reject(&applicant, reason, Utc::now())?;
        self.repository.update_applicant(next.clone())?;
        info!(applicant = %id.0, reason, "applicant rejected");
        Ok(next)
    }

    /// Administrative override, distinct from the validated transitions.
    pub fn force_set_stage(
        &self,
        role: Role,
        id: &ApplicantId,
        stage: Stage,
    ) -> Result<ApplicantRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "override applicant stages")?;
        let applicant = self.applicant(id)?;
        let next = transitions::force_set_stage(&applicant, stage, Utc::now());
        self.repository.update_applicant(next.clone())?;
        info!(applicant = %id.0, stage = stage.label(), "stage overridden by HR");
        Ok(next)
    }

    /// Administrative removal, the only physical delete in the pipeline.
    pub fn remove_applicant(
        &self,
        role: Role,
        id: &ApplicantId,
    ) -> Result<(), HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "remove applicants")?;
        self.repository.delete_applicant(id)?;
        info!(applicant = %id.0, "applicant removed by HR");
        Ok(())
    }

    pub fn get(&self, id: &ApplicantId) -> Result<ApplicantRecord, HiringServiceError> {
        self.applicant(id)
    }

    pub fn list_for_vacancy(
        &self,
        vacancy_id: &VacancyId,
    ) -> Result<Vec<ApplicantRecord>, HiringServiceError> {
        Ok(self.repository.applicants_for_vacancy(vacancy_id)?)
    }

    pub fn open_vacancies(&self) -> Result<Vec<VacancyRecord>, HiringServiceError> {
        Ok(self.repository.open_vacancies()?)
    }

    pub fn post_vacancy(
        &self,
        role: Role,
        posting: VacancyPosting,
    ) -> Result<VacancyRecord, HiringServiceError> {
        Self::authorize(role, &[Role::Hr], "post vacancies")?;
        if posting.title.trim().is_empty() {
            return Err(HiringServiceError::InvalidInput(
                "vacancy title is required".to_string(),
            ));
        }

        let vacancy = VacancyRecord {
            id: next_vacancy_id(),
            title: posting.title,
            college: posting.college,
            status: VacancyStatus::Open,
            description: posting.description,
            requirements: posting.requirements,
            posted_on: Utc::now().date_naive(),
        };
        self.repository.insert_vacancy(vacancy.clone())?;
        info!(vacancy = %vacancy.id.0, "vacancy posted");
        Ok(vacancy)
    }
}

/// Structured refusals surfaced to callers; illegal requests are never
/// swallowed.
#[derive(Debug, thiserror::Error)]
pub enum HiringServiceError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("role '{}' may not {action}", .role.label())]
    Forbidden { role: Role, action: &'static str },
    #[error("conflicting update detected")]
    Conflict,
    #[error("storage failure: {0}")]
    Internal(String),
}

impl From<RepositoryError> for HiringServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Conflict => Self::Conflict,
            RepositoryError::NotFound => Self::NotFound { entity: "record" },
            RepositoryError::Unavailable(message) => Self::Internal(message),
        }
    }
}
