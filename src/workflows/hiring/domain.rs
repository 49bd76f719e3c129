use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::EvaluationRecord;

/// Identifier wrapper for applicants moving through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Identifier wrapper for posted vacancies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacancyId(pub String);

/// Identifier wrapper for scheduled interviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub String);

/// Canonical pipeline position for an applicant.
///
/// The legacy system tracked a parallel free-text `status` column alongside the
/// stage; here the display string is derived from the stage via [`Stage::label`]
/// so the two can never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Applied,
    Endorsed,
    InterviewScheduled,
    Evaluated,
    ForHiring,
    Hired,
    Rejected,
}

impl Stage {
    /// Forward pipeline order, terminal `Rejected` excluded.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Applied,
            Self::Endorsed,
            Self::InterviewScheduled,
            Self::Evaluated,
            Self::ForHiring,
            Self::Hired,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Endorsed => "Endorsed",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::Evaluated => "Evaluated",
            Self::ForHiring => "For Hiring",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Hired | Self::Rejected)
    }
}

/// Caller role supplied by the external authentication collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Hr,
    Dean,
    Public,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Dean => "Dean",
            Self::Public => "Public",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Pending,
    Completed,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacancyStatus {
    Open,
    Closed,
    Draft,
}

impl VacancyStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Draft => "Draft",
        }
    }
}

/// A posted teaching vacancy. Simple record; only `Open` postings accept
/// public applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub id: VacancyId,
    pub title: String,
    pub college: String,
    pub status: VacancyStatus,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_on: NaiveDate,
}

/// Payload for an HR vacancy posting; the record id and posted date are
/// assigned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyPosting {
    pub title: String,
    pub college: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// Payload for a public application against an open vacancy. The resume URL is
/// whatever the external file-storage collaborator returned for the upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantSubmission {
    pub vacancy_id: VacancyId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// One candidate's journey through the hiring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub id: ApplicantId,
    pub vacancy_id: VacancyId,
    pub full_name: String,
    pub email: String,
    pub resume_url: Option<String>,
    pub stage: Stage,
    pub rejection_reason: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub endorsed_at: Option<DateTime<Utc>>,
    pub interview_scheduled_at: Option<DateTime<Utc>>,
    pub hired_at: Option<DateTime<Utc>>,
    pub status_updated_at: DateTime<Utc>,
    pub evaluation: Option<EvaluationRecord>,
}

impl ApplicantRecord {
    pub fn status_view(&self) -> ApplicantStatusView {
        ApplicantStatusView {
            applicant_id: self.id.clone(),
            stage: self.stage,
            stage_label: self.stage.label(),
            total_score: self.evaluation.as_ref().map(|eval| eval.total_score),
            rank: self.evaluation.as_ref().map(|eval| eval.rank.clone()),
            rejection_reason: self.rejection_reason.clone(),
        }
    }
}

/// Sanitized representation of an applicant's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantStatusView {
    pub applicant_id: ApplicantId,
    pub stage: Stage,
    pub stage_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Schedule payload for a new interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewDetails {
    pub scheduled_for: DateTime<Utc>,
    pub location: String,
}

/// One scheduled interview tied to exactly one applicant. An applicant has at
/// most one active interview at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub id: InterviewId,
    pub applicant_id: ApplicantId,
    pub status: InterviewStatus,
    pub scheduled_for: DateTime<Utc>,
    pub location: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
