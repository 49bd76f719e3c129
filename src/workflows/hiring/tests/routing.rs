use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::hiring::domain::Role;
use crate::workflows::hiring::router::hiring_router;
use crate::workflows::hiring::service::HiringService;

fn post_json(uri: &str, payload: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&payload).expect("serializable payload"),
        ))
        .expect("valid request")
}

#[tokio::test]
async fn apply_route_creates_applicants() {
    let (service, _) = build_service();
    let router = hiring_router(Arc::new(service));

    let response = router
        .oneshot(post_json(
            "/api/v1/hiring/applicants",
            serde_json::to_value(submission()).expect("serializable"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["stage"], "applied");
    assert!(payload.get("applicant_id").is_some());
}

#[tokio::test]
async fn status_route_returns_not_found_for_unknown_ids() {
    let (service, _) = build_service();
    let router = hiring_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/hiring/applicants/apl-missing")
                .body(axum::body::Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn endorse_route_maps_forbidden_roles_to_403() {
    let (service, _) = build_service();
    let record = service.apply(submission()).expect("application accepted");
    let router = hiring_router(Arc::new(service));

    let response = router
        .oneshot(post_json(
            &format!("/api/v1/hiring/applicants/{}/endorse", record.id.0),
            json!({ "role": "public" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn endorse_route_maps_illegal_transitions_to_400() {
    let (service, _) = build_service();
    let record = service.apply(submission()).expect("application accepted");
    service.endorse(Role::Hr, &record.id).expect("endorsed once");
    let router = hiring_router(Arc::new(service));

    let response = router
        .oneshot(post_json(
            &format!("/api/v1/hiring/applicants/{}/endorse", record.id.0),
            json!({ "role": "hr" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error string")
        .contains("Endorsed"));
}

#[tokio::test]
async fn evaluation_route_returns_created_with_rank() {
    let (service, _) = build_service();
    let record = service.apply(submission()).expect("application accepted");
    service.endorse(Role::Hr, &record.id).expect("endorsed");
    service
        .schedule_interview(Role::Hr, &record.id, interview_details())
        .expect("scheduled");
    service
        .complete_interview(Role::Hr, &record.id)
        .expect("completed");
    let router = hiring_router(Arc::new(service));

    let response = router
        .oneshot(post_json(
            &format!("/api/v1/hiring/applicants/{}/evaluation", record.id.0),
            json!({
                "role": "dean",
                "scores": {
                    "educational": 70,
                    "experience": 65,
                    "professional_development": 40,
                    "technological": 35
                }
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_score"], 210);
    assert_eq!(payload["rank"], "Professor I");
}

#[tokio::test]
async fn internal_failures_map_to_500() {
    let service = HiringService::new(Arc::new(UnavailableRepository));
    let router = hiring_router(Arc::new(service));

    let response = router
        .oneshot(post_json(
            "/api/v1/hiring/applicants",
            serde_json::to_value(submission()).expect("serializable"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn open_vacancies_route_lists_only_open_postings() {
    let (service, _) = build_service();
    let router = hiring_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/hiring/vacancies")
                .body(axum::body::Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let vacancies = payload.as_array().expect("array of vacancies");
    assert_eq!(vacancies.len(), 1);
    assert_eq!(vacancies[0]["status"], "open");
}
