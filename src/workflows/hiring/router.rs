use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    ApplicantId, ApplicantSubmission, InterviewDetails, Role, Stage, VacancyId, VacancyPosting,
};
use super::repository::HiringRepository;
use super::scoring::{ScoreBreakdown, SubScores};
use super::service::{HiringService, HiringServiceError};

/// Router builder exposing the hiring pipeline over JSON. The caller's role
/// rides in each mutating payload; session handling lives outside this crate.
pub fn hiring_router<R>(service: Arc<HiringService<R>>) -> Router
where
    R: HiringRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/hiring/vacancies",
            get(open_vacancies_handler::<R>).post(post_vacancy_handler::<R>),
        )
        .route(
            "/api/v1/hiring/vacancies/:vacancy_id/applicants",
            get(list_handler::<R>),
        )
        .route("/api/v1/hiring/applicants", post(apply_handler::<R>))
        .route(
            "/api/v1/hiring/applicants/:applicant_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/endorse",
            post(endorse_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/interview",
            post(schedule_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/interview/complete",
            post(complete_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/interview/incomplete",
            post(incomplete_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/evaluation",
            post(evaluation_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/advance",
            post(advance_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/hire",
            post(hire_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/reject",
            post(reject_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/stage",
            post(force_stage_handler::<R>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/remove",
            delete(remove_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoleBody {
    pub(crate) role: Role,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostVacancyBody {
    pub(crate) role: Role,
    #[serde(flatten)]
    pub(crate) posting: VacancyPosting,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleBody {
    pub(crate) role: Role,
    #[serde(flatten)]
    pub(crate) details: InterviewDetails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReasonBody {
    pub(crate) role: Role,
    pub(crate) reason: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationBody {
    pub(crate) role: Role,
    pub(crate) scores: SubScores,
    #[serde(default)]
    pub(crate) breakdown: ScoreBreakdown,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdvanceBody {
    pub(crate) role: Role,
    #[serde(default)]
    pub(crate) require_passing: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StageBody {
    pub(crate) role: Role,
    pub(crate) stage: Stage,
}

fn refusal(error: HiringServiceError) -> Response {
    let status = match &error {
        HiringServiceError::Transition(_) | HiringServiceError::InvalidInput(_) => {
            StatusCode::BAD_REQUEST
        }
        HiringServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        HiringServiceError::Forbidden { .. } => StatusCode::FORBIDDEN,
        HiringServiceError::Conflict => StatusCode::CONFLICT,
        HiringServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn apply_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    axum::Json(submission): axum::Json<ApplicantSubmission>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.apply(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.get(&ApplicantId(applicant_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn post_vacancy_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    axum::Json(body): axum::Json<PostVacancyBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.post_vacancy(body.role, body.posting) {
        Ok(vacancy) => (StatusCode::CREATED, axum::Json(vacancy)).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn open_vacancies_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.open_vacancies() {
        Ok(vacancies) => (StatusCode::OK, axum::Json(vacancies)).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(vacancy_id): Path<String>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.list_for_vacancy(&VacancyId(vacancy_id)) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.status_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => refusal(error),
    }
}

pub(crate) async fn endorse_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<RoleBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.endorse(body.role, &ApplicantId(applicant_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn schedule_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<ScheduleBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.schedule_interview(body.role, &ApplicantId(applicant_id), body.details) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn complete_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<RoleBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.complete_interview(body.role, &ApplicantId(applicant_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn incomplete_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<ReasonBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.mark_interview_incomplete(body.role, &ApplicantId(applicant_id), &body.reason) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn evaluation_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<EvaluationBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.record_evaluation(
        body.role,
        &ApplicantId(applicant_id),
        body.scores,
        body.breakdown,
    ) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn advance_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<AdvanceBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.advance_to_for_hiring(body.role, &ApplicantId(applicant_id), body.require_passing)
    {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn hire_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<RoleBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.mark_hired(body.role, &ApplicantId(applicant_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn reject_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<ReasonBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.reject(body.role, &ApplicantId(applicant_id), &body.reason) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn force_stage_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<StageBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    match service.force_set_stage(body.role, &ApplicantId(applicant_id), body.stage) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn remove_handler<R>(
    State(service): State<Arc<HiringService<R>>>,
    Path(applicant_id): Path<String>,
    axum::Json(body): axum::Json<RoleBody>,
) -> Response
where
    R: HiringRepository + 'static,
{
    let applicant_id = ApplicantId(applicant_id);
    match service.remove_applicant(body.role, &applicant_id) {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(json!({ "removed": applicant_id.0 })),
        )
            .into_response(),
        Err(error) => refusal(error),
    }
}
