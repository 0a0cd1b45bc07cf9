//! Client tests against an in-process stand-in for the Sinter API

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use sinter_client::{ClientError, SinterClient};
use sinter_core::domain::run::RunStatus;

const TOKEN: &str = "test-token";
const ACCOUNT: u64 = 12;

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/v1", addr)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Token {}", TOKEN))
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "invalid token").into_response()
}

async fn list_projects(Path(account): Path<u64>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "data": [
            {"id": 1, "name": "analytics", "account_id": account},
            {"id": 2, "name": "finance", "account_id": account}
        ]
    }))
    .into_response()
}

async fn get_project(Path((_, project)): Path<(u64, u64)>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"data": {"id": project, "name": "analytics"}})).into_response()
}

async fn list_definitions(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!([
        {"id": 70, "name": "Nightly build"},
        {"id": 71, "name": "Hourly refresh"}
    ]))
    .into_response()
}

async fn get_run(Path((_, _, run)): Path<(u64, u64, u64)>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    match run {
        500 => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        202 => (StatusCode::ACCEPTED, Json(json!({"id": run, "status": 3}))).into_response(),
        404 => (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response(),
        999 => (StatusCode::OK, "not json at all").into_response(),
        _ => Json(json!({"id": run, "status": 10, "git_sha": "abc123"})).into_response(),
    }
}

async fn trigger_run(
    Path((_, _, definition)): Path<(u64, u64, u64)>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if definition == 200 {
        // Right payload, wrong status for a trigger
        return Json(json!({"id": 1, "status": 1})).into_response();
    }
    if definition == 300 {
        // Run accepted but not yet reporting a status
        return (StatusCode::CREATED, Json(json!({"id": 9002}))).into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({"id": 9001, "status": 1, "job_definition_id": definition})),
    )
        .into_response()
}

async fn get_definition(
    Path((_, _, definition)): Path<(u64, u64, u64)>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if definition == 404 {
        return (StatusCode::NOT_FOUND, "no such definition").into_response();
    }
    Json(json!({"id": definition, "name": "Nightly build", "schedule": "0 2 * * *"}))
        .into_response()
}

async fn list_runs(Path((_, project)): Path<(u64, u64)>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let runs = json!([
        {"id": 1, "status": 10},
        {"id": 2, "status": 3}
    ]);
    // Project 1 answers bare, every other project wraps in `data`
    if project == 1 {
        Json(runs).into_response()
    } else {
        Json(json!({"data": runs})).into_response()
    }
}

fn router() -> Router {
    Router::new()
        .route("/api/v1/accounts/{account}/projects/", get(list_projects))
        .route(
            "/api/v1/accounts/{account}/projects/{project}/",
            get(get_project),
        )
        .route(
            "/api/v1/accounts/{account}/projects/{project}/definitions/",
            get(list_definitions),
        )
        .route(
            "/api/v1/accounts/{account}/projects/{project}/definitions/{definition}/",
            get(get_definition),
        )
        .route(
            "/api/v1/accounts/{account}/projects/{project}/runs/",
            get(list_runs),
        )
        .route(
            "/api/v1/accounts/{account}/projects/{project}/runs/{run}/",
            get(get_run),
        )
        .route(
            "/api/v1/accounts/{account}/projects/{project}/definitions/{definition}/runs/",
            post(trigger_run),
        )
}

async fn client() -> SinterClient {
    let base = spawn_server(router()).await;
    SinterClient::with_base_url(base, ACCOUNT, TOKEN)
}

#[tokio::test]
async fn test_list_projects_unwraps_data() {
    let client = client().await;
    let projects = client.list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "analytics");
    assert_eq!(projects[1].extra["account_id"], ACCOUNT);
}

#[tokio::test]
async fn test_get_project() {
    let client = client().await;
    let project = client.get_project(5).await.unwrap();
    assert_eq!(project.id, 5);
}

#[tokio::test]
async fn test_list_job_definitions_bare_list() {
    let client = client().await;
    let defs = client.list_job_definitions(5).await.unwrap();

    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].id, 70);
    assert_eq!(defs[1].name, "Hourly refresh");
}

#[tokio::test]
async fn test_get_job_run() {
    let client = client().await;
    let run = client.get_job_run(5, 33).await.unwrap();

    assert_eq!(run.id, 33);
    assert_eq!(run.run_status(), RunStatus::Success);
    assert_eq!(run.extra["git_sha"], "abc123");
}

#[tokio::test]
async fn test_trigger_job_run_expects_created() {
    let client = client().await;
    let run = client.trigger_job_run(5, 70).await.unwrap();

    assert_eq!(run.id, 9001);
    assert_eq!(run.extra["status"], 1);
    assert_eq!(run.extra["job_definition_id"], 70);
}

#[tokio::test]
async fn test_trigger_response_without_status() {
    let client = client().await;
    let run = client.trigger_job_run(5, 300).await.unwrap();

    assert_eq!(run.id, 9002);
    assert!(run.extra.is_empty());
}

#[tokio::test]
async fn test_get_job_definition() {
    let client = client().await;
    let def = client.get_job_definition(5, 70).await.unwrap();

    assert_eq!(def.id, 70);
    assert_eq!(def.name, "Nightly build");
    assert_eq!(def.extra["schedule"], "0 2 * * *");
}

#[tokio::test]
async fn test_get_missing_job_definition() {
    let client = client().await;
    let err = client.get_job_definition(5, 404).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.body(), Some("no such definition"));
}

#[tokio::test]
async fn test_list_job_runs_bare_list() {
    let client = client().await;
    let runs = client.list_job_runs(1).await.unwrap();

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].run_status(), RunStatus::Success);
    assert_eq!(runs[1].run_status(), RunStatus::Running);
}

#[tokio::test]
async fn test_list_job_runs_wrapped_list() {
    let client = client().await;
    let runs = client.list_job_runs(2).await.unwrap();

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[1].id, 2);
}

#[tokio::test]
async fn test_trigger_with_ok_status_is_an_error() {
    let client = client().await;
    let err = client.trigger_job_run(5, 200).await.unwrap_err();

    match err {
        ClientError::ApiError { status, body } => {
            assert_eq!(status, 200);
            assert!(body.contains("\"status\":1"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_carries_raw_body() {
    let client = client().await;
    let err = client.get_job_run(5, 500).await.unwrap_err();

    assert!(err.is_server_error());
    assert_eq!(err.body(), Some("upstream exploded"));
}

#[tokio::test]
async fn test_read_with_other_success_status_is_an_error() {
    let client = client().await;
    let err = client.get_job_run(5, 202).await.unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 202, .. }));
}

#[tokio::test]
async fn test_not_found() {
    let client = client().await;
    let err = client.get_job_run(5, 404).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.body(), Some(r#"{"detail":"Not found."}"#));
}

#[tokio::test]
async fn test_bad_token_is_rejected() {
    let base = spawn_server(router()).await;
    let client = SinterClient::with_base_url(base, ACCOUNT, "wrong");
    let err = client.list_projects().await.unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 401, .. }));
    assert_eq!(err.body(), Some("invalid token"));
}

#[tokio::test]
async fn test_malformed_json_is_a_parse_error() {
    let client = client().await;
    let err = client.get_job_run(5, 999).await.unwrap_err();

    match err {
        ClientError::ParseError(message) => assert!(message.contains("not json at all")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SinterClient::with_base_url(format!("http://{}", addr), ACCOUNT, TOKEN);
    let err = client.list_projects().await.unwrap_err();

    assert!(matches!(err, ClientError::RequestFailed(_)));
}
