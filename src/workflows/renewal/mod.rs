//! Contract-renewal sub-workflow: a single Dean-gated transition from a
//! pending recommendation to renew/not-renew, plus the filtered list views.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{
    submit_recommendation, ContractId, ContractRecord, ContractStatus, DeanRecommendation,
    RenewalDecision, RenewalTransitionError,
};
pub use repository::{
    ContractFilter, ContractRepository, ContractRepositoryError, MemoryContractRepository,
};
pub use router::renewal_router;
pub use service::{RenewalService, RenewalServiceError};
