//! Wire-level tests for the HTTP backend against an in-process mock server.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::{Arc, Mutex};

use chatline::config::ClientConfig;
use chatline::{BackendError, ChatBackend, HttpBackend, Role};

/// Serve `app` on an ephemeral local port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn backend_for(base_url: String) -> HttpBackend {
    let config = ClientConfig {
        base_url,
        ..ClientConfig::default()
    };
    HttpBackend::new(&config).unwrap()
}

#[tokio::test]
async fn health_check_succeeds_on_2xx() {
    let app = Router::new().route(
        "/api/health",
        get(|| async {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": "2026-08-08T12:00:00",
            }))
        }),
    );
    let backend = backend_for(serve(app).await);

    assert!(backend.health_check().await.is_ok());
}

#[tokio::test]
async fn health_check_reports_non_2xx() {
    let app = Router::new().route(
        "/api/health",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let backend = backend_for(serve(app).await);

    match backend.health_check().await {
        Err(BackendError::Status(status)) => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE)
        }
        other => panic!("expected status error, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn fetch_history_maps_wire_entries() {
    let app = Router::new().route(
        "/api/history",
        get(|| async {
            Json(serde_json::json!({
                "messages": [
                    {
                        "id": "7d8f",
                        "message": "Hello",
                        "type": "user",
                        "timestamp": "2026-08-08T09:15:00",
                    },
                    {
                        "id": "7d90",
                        "message": "Hi! How can I help?",
                        "type": "bot",
                        "timestamp": "2026-08-08T09:15:02",
                    },
                ]
            }))
        }),
    );
    let backend = backend_for(serve(app).await);

    let messages = backend.fetch_history().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].text, "Hello");
    assert_eq!(messages[0].timestamp, "2026-08-08T09:15:00");
    assert_eq!(messages[1].role, Role::Bot);
    assert_eq!(messages[1].text, "Hi! How can I help?");
}

#[tokio::test]
async fn send_message_posts_the_exact_body_and_returns_the_reply() {
    let bodies: Arc<Mutex<Vec<serde_json::Value>>> = Arc::default();
    let captured = bodies.clone();

    let app = Router::new().route(
        "/api/chat",
        post(move |Json(body): Json<serde_json::Value>| {
            let captured = captured.clone();
            async move {
                captured.lock().unwrap().push(body);
                Json(serde_json::json!({
                    "success": true,
                    "response": "Hello back",
                    "message_id": "7d91",
                }))
            }
        }),
    );
    let backend = backend_for(serve(app).await);

    let reply = backend.send_message("Ping").await.unwrap();
    assert_eq!(reply, "Hello back");

    let bodies = bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0], serde_json::json!({ "message": "Ping" }));
}

#[tokio::test]
async fn rejected_send_surfaces_the_backend_error_text() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async {
            Json(serde_json::json!({
                "success": false,
                "error": "busy",
            }))
        }),
    );
    let backend = backend_for(serve(app).await);

    match backend.send_message("Ping").await {
        Err(BackendError::Rejected(text)) => assert_eq!(text, "busy"),
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn non_2xx_send_is_a_status_error() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "boom" })),
            )
        }),
    );
    let backend = backend_for(serve(app).await);

    match backend.send_message("Ping").await {
        Err(BackendError::Status(status)) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_reply_is_a_transport_error() {
    let app = Router::new().route("/api/chat", post(|| async { "not json" }));
    let backend = backend_for(serve(app).await);

    assert!(matches!(
        backend.send_message("Ping").await,
        Err(BackendError::Transport(_))
    ));
}

#[tokio::test]
async fn clear_history_posts_to_the_clear_endpoint() {
    let cleared: Arc<Mutex<bool>> = Arc::default();
    let flag = cleared.clone();

    let app = Router::new().route(
        "/api/clear",
        post(move || {
            let flag = flag.clone();
            async move {
                *flag.lock().unwrap() = true;
                Json(serde_json::json!({ "success": true }))
            }
        }),
    );
    let backend = backend_for(serve(app).await);

    backend.clear_history().await.unwrap();
    assert!(*cleared.lock().unwrap());
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Bind a listener to reserve a port, then drop it so nothing answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = backend_for(format!("http://{}", addr));
    assert!(matches!(
        backend.health_check().await,
        Err(BackendError::Transport(_))
    ));
}
