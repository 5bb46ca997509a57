use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use shared::domain::EmployeeId;
use tokio::{net::TcpListener, sync::Mutex};

use super::*;

#[derive(Clone, Default)]
struct ServerState {
    seen_limits: Arc<Mutex<Vec<u32>>>,
}

#[derive(Deserialize)]
struct LimitQuery {
    limit: u32,
}

async fn handle_users(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> Json<Value> {
    state.seen_limits.lock().await.push(query.limit);
    Json(json!({
        "users": [
            {
                "id": 1,
                "firstName": "Emily",
                "lastName": "Johnson",
                "email": "emily.johnson@x.dummyjson.com",
                "age": 28,
                "phone": "+81 965-431-3024"
            },
            {
                "id": 2,
                "firstName": "Michael",
                "lastName": "Williams",
                "email": "michael.williams@x.dummyjson.com",
                "age": 35
            }
        ],
        "total": 208,
        "skip": 0,
        "limit": query.limit
    }))
}

async fn spawn_directory_server(state: ServerState) -> anyhow::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/users", get(handle_users))
        .route(
            "/broken",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route("/garbage", get(|| async { "not json" }))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn fetches_users_with_limit_query() {
    let state = ServerState::default();
    let server_url = spawn_directory_server(state.clone())
        .await
        .expect("spawn server");
    let source = HttpEmployeeSource::new(format!("{server_url}/users"), DEFAULT_FETCH_LIMIT);

    let users = source.fetch_users().await.expect("fetch users");

    assert_eq!(
        users.iter().map(|user| user.id).collect::<Vec<_>>(),
        vec![EmployeeId(1), EmployeeId(2)]
    );
    assert_eq!(users[1].first_name, "Michael");
    assert_eq!(users[1].age, 35);
    assert_eq!(*state.seen_limits.lock().await, vec![DEFAULT_FETCH_LIMIT]);
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server_url = spawn_directory_server(ServerState::default())
        .await
        .expect("spawn server");
    let source = HttpEmployeeSource::new(format!("{server_url}/broken"), 20);

    let err = source.fetch_users().await.expect_err("must fail");

    assert!(matches!(err, FetchError::Status(500)), "unexpected error: {err:?}");
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server_url = spawn_directory_server(ServerState::default())
        .await
        .expect("spawn server");
    let source = HttpEmployeeSource::new(format!("{server_url}/garbage"), 20);

    let err = source.fetch_users().await.expect_err("must fail");

    assert!(matches!(err, FetchError::Decode(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn unreachable_source_maps_to_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let source = HttpEmployeeSource::new(format!("http://{addr}/users"), 20);

    let err = source.fetch_users().await.expect_err("must fail");

    assert!(matches!(err, FetchError::Transport(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn static_source_returns_its_users() {
    let source = StaticEmployeeSource::new(vec![ApiUser {
        id: EmployeeId(9),
        first_name: "Sophia".into(),
        last_name: "Brown".into(),
        email: "sophia.brown@x.dummyjson.com".into(),
        age: 42,
    }]);

    let users = source.fetch_users().await.expect("fetch");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, EmployeeId(9));
}
