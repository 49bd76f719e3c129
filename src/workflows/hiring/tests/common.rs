use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::hiring::domain::{
    ApplicantId, ApplicantRecord, ApplicantSubmission, InterviewDetails, InterviewId,
    InterviewRecord, InterviewStatus, Stage, VacancyId, VacancyRecord, VacancyStatus,
};
use crate::workflows::hiring::repository::{
    HiringRepository, MemoryHiringRepository, RepositoryError,
};
use crate::workflows::hiring::scoring::{ScoreBreakdown, SubScores};
use crate::workflows::hiring::service::HiringService;

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 3, 9, 0, 0).single().expect("valid timestamp")
}

pub(super) fn vacancy() -> VacancyRecord {
    VacancyRecord {
        id: VacancyId("vac-ccs-01".to_string()),
        title: "Instructor, Computer Studies".to_string(),
        college: "College of Computer Studies".to_string(),
        status: VacancyStatus::Open,
        description: "Full-time teaching load".to_string(),
        requirements: vec!["Master's degree".to_string()],
        posted_on: NaiveDate::from_ymd_opt(2026, 7, 1).expect("valid date"),
    }
}

pub(super) fn closed_vacancy() -> VacancyRecord {
    VacancyRecord {
        id: VacancyId("vac-ccs-closed".to_string()),
        status: VacancyStatus::Closed,
        ..vacancy()
    }
}

pub(super) fn submission() -> ApplicantSubmission {
    ApplicantSubmission {
        vacancy_id: vacancy().id,
        full_name: "Maria Santos".to_string(),
        email: "m.santos@example.edu".to_string(),
        resume_url: Some("https://files.example.edu/resumes/m-santos.pdf".to_string()),
    }
}

pub(super) fn applicant_at(stage: Stage) -> ApplicantRecord {
    let now = fixed_now();
    ApplicantRecord {
        id: ApplicantId("apl-test-01".to_string()),
        vacancy_id: vacancy().id,
        full_name: "Maria Santos".to_string(),
        email: "m.santos@example.edu".to_string(),
        resume_url: None,
        stage,
        rejection_reason: None,
        applied_at: now,
        endorsed_at: None,
        interview_scheduled_at: None,
        hired_at: None,
        status_updated_at: now,
        evaluation: None,
    }
}

pub(super) fn pending_interview(applicant_id: &ApplicantId) -> InterviewRecord {
    let now = fixed_now();
    InterviewRecord {
        id: InterviewId("itv-test-01".to_string()),
        applicant_id: applicant_id.clone(),
        status: InterviewStatus::Pending,
        scheduled_for: now,
        location: "Dean's office".to_string(),
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

pub(super) fn interview_details() -> InterviewDetails {
    InterviewDetails {
        scheduled_for: fixed_now(),
        location: "Dean's office".to_string(),
    }
}

pub(super) fn passing_scores() -> SubScores {
    SubScores {
        educational: 70,
        experience: 65,
        professional_development: 40,
        technological: 35,
    }
}

pub(super) fn failing_scores() -> SubScores {
    SubScores {
        educational: 40,
        experience: 30,
        professional_development: 20,
        technological: 15,
    }
}

pub(super) fn build_service() -> (HiringService<MemoryHiringRepository>, Arc<MemoryHiringRepository>) {
    let repository = Arc::new(MemoryHiringRepository::new());
    repository.insert_vacancy(vacancy()).expect("vacancy seeded");
    repository
        .insert_vacancy(closed_vacancy())
        .expect("closed vacancy seeded");
    let service = HiringService::new(repository.clone());
    (service, repository)
}

pub(super) fn empty_breakdown() -> ScoreBreakdown {
    ScoreBreakdown::default()
}

/// Repository that refuses every write, for fault-injection tests.
pub(super) struct UnavailableRepository;

impl HiringRepository for UnavailableRepository {
    fn insert_applicant(
        &self,
        _record: ApplicantRecord,
    ) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_applicant(
        &self,
        _id: &ApplicantId,
    ) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_applicant(&self, _record: ApplicantRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete_applicant(&self, _id: &ApplicantId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn applicants_for_vacancy(
        &self,
        _vacancy_id: &VacancyId,
    ) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_interview(&self, _record: InterviewRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_interview_for_applicant(
        &self,
        _applicant_id: &ApplicantId,
    ) -> Result<Option<InterviewRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn apply_interview_outcome(
        &self,
        _applicant: ApplicantRecord,
        _interview: InterviewRecord,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_vacancy(&self, _record: VacancyRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_vacancy(&self, _id: &VacancyId) -> Result<Option<VacancyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn open_vacancies(&self) -> Result<Vec<VacancyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Delegating repository whose atomic pair write fails without mutating the
/// underlying store, simulating a persistence failure mid-transition.
pub(super) struct FailingOutcomeRepository {
    pub(super) inner: MemoryHiringRepository,
}

impl HiringRepository for FailingOutcomeRepository {
    fn insert_applicant(
        &self,
        record: ApplicantRecord,
    ) -> Result<ApplicantRecord, RepositoryError> {
        self.inner.insert_applicant(record)
    }

    fn fetch_applicant(
        &self,
        id: &ApplicantId,
    ) -> Result<Option<ApplicantRecord>, RepositoryError> {
        self.inner.fetch_applicant(id)
    }

    fn update_applicant(&self, record: ApplicantRecord) -> Result<(), RepositoryError> {
        self.inner.update_applicant(record)
    }

    fn delete_applicant(&self, id: &ApplicantId) -> Result<(), RepositoryError> {
        self.inner.delete_applicant(id)
    }

    fn applicants_for_vacancy(
        &self,
        vacancy_id: &VacancyId,
    ) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        self.inner.applicants_for_vacancy(vacancy_id)
    }

    fn insert_interview(&self, record: InterviewRecord) -> Result<(), RepositoryError> {
        self.inner.insert_interview(record)
    }

    fn fetch_interview_for_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Option<InterviewRecord>, RepositoryError> {
        self.inner.fetch_interview_for_applicant(applicant_id)
    }

    fn apply_interview_outcome(
        &self,
        _applicant: ApplicantRecord,
        _interview: InterviewRecord,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable(
            "transaction aborted".to_string(),
        ))
    }

    fn insert_vacancy(&self, record: VacancyRecord) -> Result<(), RepositoryError> {
        self.inner.insert_vacancy(record)
    }

    fn fetch_vacancy(&self, id: &VacancyId) -> Result<Option<VacancyRecord>, RepositoryError> {
        self.inner.fetch_vacancy(id)
    }

    fn open_vacancies(&self) -> Result<Vec<VacancyRecord>, RepositoryError> {
        self.inner.open_vacancies()
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
