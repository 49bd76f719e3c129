use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    self, ContractId, ContractRecord, RenewalDecision, RenewalTransitionError,
};
use super::repository::{ContractFilter, ContractRepository, ContractRepositoryError};
use crate::workflows::hiring::Role;

/// Facade over the contract-renewal transition. Only the Dean may decide;
/// decisions land exactly once.
pub struct RenewalService<C> {
    repository: Arc<C>,
}

impl<C> RenewalService<C>
where
    C: ContractRepository + 'static,
{
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    pub fn submit_recommendation(
        &self,
        role: Role,
        id: &ContractId,
        decision: &str,
        remarks: Option<String>,
        decided_by: &str,
    ) -> Result<ContractRecord, RenewalServiceError> {
        if role != Role::Dean {
            return Err(RenewalServiceError::Forbidden { role });
        }

        let decision = RenewalDecision::parse(decision).ok_or_else(|| {
            RenewalServiceError::InvalidInput(format!(
                "recommendation must be 'renew' or 'not_renew', got '{decision}'"
            ))
        })?;

        let contract = self
            .repository
            .fetch(id)?
            .ok_or(RenewalServiceError::NotFound)?;

        let next =
            domain::submit_recommendation(&contract, decision, remarks, decided_by, Utc::now())?;
        self.repository.update(next.clone())?;
        info!(
            contract = %id.0,
            recommendation = next.recommendation.label(),
            "dean recommendation recorded"
        );
        Ok(next)
    }

    pub fn get(&self, id: &ContractId) -> Result<ContractRecord, RenewalServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(RenewalServiceError::NotFound)
    }

    /// Contract listing for the HR and Dean views, filtered and ordered by
    /// end date.
    pub fn list(&self, filter: &ContractFilter) -> Result<Vec<ContractRecord>, RenewalServiceError> {
        Ok(self.repository.search(filter)?)
    }

    pub fn register_contract(&self, record: ContractRecord) -> Result<(), RenewalServiceError> {
        Ok(self.repository.insert(record)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenewalServiceError {
    #[error(transparent)]
    Transition(#[from] RenewalTransitionError),
    #[error("contract not found")]
    NotFound,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("role '{}' may not submit renewal recommendations", .role.label())]
    Forbidden { role: Role },
    #[error("conflicting update detected")]
    Conflict,
    #[error("storage failure: {0}")]
    Internal(String),
}

impl From<ContractRepositoryError> for RenewalServiceError {
    fn from(value: ContractRepositoryError) -> Self {
        match value {
            ContractRepositoryError::Conflict => Self::Conflict,
            ContractRepositoryError::NotFound => Self::NotFound,
            ContractRepositoryError::Unavailable(message) => Self::Internal(message),
        }
    }
}
