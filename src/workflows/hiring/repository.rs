use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{ApplicantId, ApplicantRecord, InterviewRecord, VacancyId, VacancyRecord};

/// Storage abstraction over the hiring tables. Implementations are injected
/// once at process start and shared by reference; they are never constructed
/// per call.
pub trait HiringRepository: Send + Sync {
    fn insert_applicant(&self, record: ApplicantRecord)
        -> Result<ApplicantRecord, RepositoryError>;
    fn fetch_applicant(&self, id: &ApplicantId)
        -> Result<Option<ApplicantRecord>, RepositoryError>;
    fn update_applicant(&self, record: ApplicantRecord) -> Result<(), RepositoryError>;
    fn delete_applicant(&self, id: &ApplicantId) -> Result<(), RepositoryError>;
    fn applicants_for_vacancy(
        &self,
        vacancy_id: &VacancyId,
    ) -> Result<Vec<ApplicantRecord>, RepositoryError>;

    fn insert_interview(&self, record: InterviewRecord) -> Result<(), RepositoryError>;
    fn fetch_interview_for_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Option<InterviewRecord>, RepositoryError>;

    /// Persist an applicant/interview pair as one unit. Implementations must
    /// apply both writes or neither; a partial update is never acceptable.
    fn apply_interview_outcome(
        &self,
        applicant: ApplicantRecord,
        interview: InterviewRecord,
    ) -> Result<(), RepositoryError>;

    fn insert_vacancy(&self, record: VacancyRecord) -> Result<(), RepositoryError>;
    fn fetch_vacancy(&self, id: &VacancyId) -> Result<Option<VacancyRecord>, RepositoryError>;
    fn open_vacancies(&self) -> Result<Vec<VacancyRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Mutex-guarded map-backed repository used by the server binary and tests.
#[derive(Default, Clone)]
pub struct MemoryHiringRepository {
    inner: Arc<Mutex<MemoryTables>>,
}

#[derive(Default)]
struct MemoryTables {
    applicants: HashMap<ApplicantId, ApplicantRecord>,
    interviews: HashMap<ApplicantId, InterviewRecord>,
    vacancies: HashMap<VacancyId, VacancyRecord>,
}

impl MemoryHiringRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HiringRepository for MemoryHiringRepository {
    fn insert_applicant(
        &self,
        record: ApplicantRecord,
    ) -> Result<ApplicantRecord, RepositoryError> {
        let mut tables = self.inner.lock().expect("repository mutex poisoned");
        if tables.applicants.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        tables.applicants.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch_applicant(
        &self,
        id: &ApplicantId,
    ) -> Result<Option<ApplicantRecord>, RepositoryError> {
        let tables = self.inner.lock().expect("repository mutex poisoned");
        Ok(tables.applicants.get(id).cloned())
    }

    fn update_applicant(&self, record: ApplicantRecord) -> Result<(), RepositoryError> {
        let mut tables = self.inner.lock().expect("repository mutex poisoned");
        if !tables.applicants.contains_key(&record.id) {
            return Err(RepositoryError::NotFound);
        }
        tables.applicants.insert(record.id.clone(), record);
        Ok(())
    }

    fn delete_applicant(&self, id: &ApplicantId) -> Result<(), RepositoryError> {
        let mut tables = self.inner.lock().expect("repository mutex poisoned");
        if tables.applicants.remove(id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        tables.interviews.remove(id);
        Ok(())
    }

    fn applicants_for_vacancy(
        &self,
        vacancy_id: &VacancyId,
    ) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        let tables = self.inner.lock().expect("repository mutex poisoned");
        let mut records: Vec<ApplicantRecord> = tables
            .applicants
            .values()
            .filter(|record| &record.vacancy_id == vacancy_id)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.applied_at);
        Ok(records)
    }

    fn insert_interview(&self, record: InterviewRecord) -> Result<(), RepositoryError> {
        let mut tables = self.inner.lock().expect("repository mutex poisoned");
        tables.interviews.insert(record.applicant_id.clone(), record);
        Ok(())
    }

    fn fetch_interview_for_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Option<InterviewRecord>, RepositoryError> {
        let tables = self.inner.lock().expect("repository mutex poisoned");
        Ok(tables.interviews.get(applicant_id).cloned())
    }

    fn apply_interview_outcome(
        &self,
        applicant: ApplicantRecord,
        interview: InterviewRecord,
    ) -> Result<(), RepositoryError> {
        // Both writes happen under one lock, so no partial state is visible.
        let mut tables = self.inner.lock().expect("repository mutex poisoned");
        if !tables.applicants.contains_key(&applicant.id) {
            return Err(RepositoryError::NotFound);
        }
        tables.applicants.insert(applicant.id.clone(), applicant);
        tables
            .interviews
            .insert(interview.applicant_id.clone(), interview);
        Ok(())
    }

    fn insert_vacancy(&self, record: VacancyRecord) -> Result<(), RepositoryError> {
        let mut tables = self.inner.lock().expect("repository mutex poisoned");
        if tables.vacancies.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        tables.vacancies.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch_vacancy(&self, id: &VacancyId) -> Result<Option<VacancyRecord>, RepositoryError> {
        let tables = self.inner.lock().expect("repository mutex poisoned");
        Ok(tables.vacancies.get(id).cloned())
    }

    fn open_vacancies(&self) -> Result<Vec<VacancyRecord>, RepositoryError> {
        let tables = self.inner.lock().expect("repository mutex poisoned");
        let mut records: Vec<VacancyRecord> = tables
            .vacancies
            .values()
            .filter(|record| record.status == super::domain::VacancyStatus::Open)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.posted_on);
        Ok(records)
    }
}
