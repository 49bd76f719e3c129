use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{ContractId, ContractRecord};

/// Substring/equality filter backing the HR and Dean contract views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractFilter {
    /// Case-insensitive substring match over faculty name, job title, and
    /// contract number.
    pub term: Option<String>,
    pub college: Option<String>,
}

impl ContractFilter {
    pub fn matches(&self, record: &ContractRecord) -> bool {
        if let Some(college) = &self.college {
            if !record.college.eq_ignore_ascii_case(college) {
                return false;
            }
        }
        if let Some(term) = &self.term {
            let needle = term.to_ascii_lowercase();
            let haystacks = [
                record.faculty_name.to_ascii_lowercase(),
                record.job_title.to_ascii_lowercase(),
                record.contract_no.to_ascii_lowercase(),
            ];
            if !haystacks.iter().any(|field| field.contains(&needle)) {
                return false;
            }
        }
        true
    }
}

/// Storage abstraction for contracts; injected once, shared by reference.
pub trait ContractRepository: Send + Sync {
    fn insert(&self, record: ContractRecord) -> Result<(), ContractRepositoryError>;
    fn fetch(&self, id: &ContractId) -> Result<Option<ContractRecord>, ContractRepositoryError>;
    fn update(&self, record: ContractRecord) -> Result<(), ContractRepositoryError>;
    /// Matching contracts ordered by end date, soonest first.
    fn search(&self, filter: &ContractFilter)
        -> Result<Vec<ContractRecord>, ContractRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContractRepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Mutex-guarded map-backed contract store for the server binary and tests.
#[derive(Default, Clone)]
pub struct MemoryContractRepository {
    records: Arc<Mutex<HashMap<ContractId, ContractRecord>>>,
}

impl MemoryContractRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContractRepository for MemoryContractRepository {
    fn insert(&self, record: ContractRecord) -> Result<(), ContractRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(ContractRepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ContractId) -> Result<Option<ContractRecord>, ContractRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update(&self, record: ContractRecord) -> Result<(), ContractRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if !guard.contains_key(&record.id) {
            return Err(ContractRepositoryError::NotFound);
        }
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn search(
        &self,
        filter: &ContractFilter,
    ) -> Result<Vec<ContractRecord>, ContractRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<ContractRecord> = guard
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        records.sort_by_key(|record| record.end_date);
        Ok(records)
    }
}
