use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ContractId;
use super::repository::{ContractFilter, ContractRepository};
use super::service::{RenewalService, RenewalServiceError};
use crate::workflows::hiring::Role;

/// Router builder for the contract-renewal endpoints.
pub fn renewal_router<C>(service: Arc<RenewalService<C>>) -> Router
where
    C: ContractRepository + 'static,
{
    Router::new()
        .route("/api/v1/renewals", get(list_handler::<C>))
        .route("/api/v1/renewals/:contract_id", get(get_handler::<C>))
        .route(
            "/api/v1/renewals/:contract_id/recommendation",
            post(recommendation_handler::<C>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationBody {
    pub(crate) role: Role,
    pub(crate) decision: String,
    #[serde(default)]
    pub(crate) remarks: Option<String>,
    pub(crate) decided_by: String,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct ListQuery {
    pub(crate) term: Option<String>,
    pub(crate) college: Option<String>,
}

fn refusal(error: RenewalServiceError) -> Response {
    let status = match &error {
        RenewalServiceError::Transition(_) | RenewalServiceError::InvalidInput(_) => {
            StatusCode::BAD_REQUEST
        }
        RenewalServiceError::NotFound => StatusCode::NOT_FOUND,
        RenewalServiceError::Forbidden { .. } => StatusCode::FORBIDDEN,
        RenewalServiceError::Conflict => StatusCode::CONFLICT,
        RenewalServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn recommendation_handler<C>(
    State(service): State<Arc<RenewalService<C>>>,
    Path(contract_id): Path<String>,
    axum::Json(body): axum::Json<RecommendationBody>,
) -> Response
where
    C: ContractRepository + 'static,
{
    match service.submit_recommendation(
        body.role,
        &ContractId(contract_id),
        &body.decision,
        body.remarks,
        &body.decided_by,
    ) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn get_handler<C>(
    State(service): State<Arc<RenewalService<C>>>,
    Path(contract_id): Path<String>,
) -> Response
where
    C: ContractRepository + 'static,
{
    match service.get(&ContractId(contract_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => refusal(error),
    }
}

pub(crate) async fn list_handler<C>(
    State(service): State<Arc<RenewalService<C>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    C: ContractRepository + 'static,
{
    let filter = ContractFilter {
        term: query.term,
        college: query.college,
    };
    match service.list(&filter) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => refusal(error),
    }
}
