use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for faculty contracts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Active,
    Expiring,
    Ended,
}

impl ContractStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expiring => "Expiring",
            Self::Ended => "Ended",
        }
    }
}

/// Dean's renewal verdict. Starts `Pending` and moves exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeanRecommendation {
    Pending,
    Renew,
    NotRenew,
}

impl DeanRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Renew => "Renew",
            Self::NotRenew => "Not Renew",
        }
    }
}

/// The two values a submitted decision may take; anything else is refused as
/// invalid input before touching the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalDecision {
    Renew,
    NotRenew,
}

impl RenewalDecision {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "renew" => Some(Self::Renew),
            "not_renew" | "notrenew" | "not renew" => Some(Self::NotRenew),
            _ => None,
        }
    }

    pub const fn as_recommendation(self) -> DeanRecommendation {
        match self {
            Self::Renew => DeanRecommendation::Renew,
            Self::NotRenew => DeanRecommendation::NotRenew,
        }
    }
}

/// An active faculty employment term awaiting its renewal decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub id: ContractId,
    pub faculty_name: String,
    pub college: String,
    pub job_title: String,
    pub contract_no: String,
    pub end_date: NaiveDate,
    pub status: ContractStatus,
    pub recommendation: DeanRecommendation,
    pub remarks: Option<String>,
    pub decided_by: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenewalTransitionError {
    #[error("contract already carries recommendation '{}'", .current.label())]
    AlreadyDecided { current: DeanRecommendation },
}

/// Pure single-transition rule: Pending -> Renew | NotRenew, exactly once.
pub fn submit_recommendation(
    contract: &ContractRecord,
    decision: RenewalDecision,
    remarks: Option<String>,
    decided_by: &str,
    now: DateTime<Utc>,
) -> Result<ContractRecord, RenewalTransitionError> {
    if contract.recommendation != DeanRecommendation::Pending {
        return Err(RenewalTransitionError::AlreadyDecided {
            current: contract.recommendation,
        });
    }

    let mut next = contract.clone();
    next.recommendation = decision.as_recommendation();
    next.remarks = remarks;
    next.decided_by = Some(decided_by.to_string());
    next.decided_at = Some(now);
    Ok(next)
}
