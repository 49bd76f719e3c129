//! Faculty hiring pipeline: applicant stage workflow, interview handling, and
//! the evaluation scoring engine behind it.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantId, ApplicantRecord, ApplicantStatusView, ApplicantSubmission, InterviewDetails,
    InterviewId, InterviewRecord, InterviewStatus, Role, Stage, VacancyId, VacancyPosting,
    VacancyRecord, VacancyStatus,
};
pub use repository::{HiringRepository, MemoryHiringRepository, RepositoryError};
pub use router::hiring_router;
pub use scoring::{
    is_passing, rank_of, score, EvaluationRecord, RankBand, ScoreBreakdown, ScoreSummary,
    SubScores, MAX_SCORE, PASSING_SCORE, RANK_BANDS,
};
pub use service::{HiringService, HiringServiceError};
pub use transitions::{InterviewOutcome, TransitionError};
