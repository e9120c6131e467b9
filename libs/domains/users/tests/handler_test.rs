//! Handler tests for the users domain
//!
//! These tests drive the real routers end to end:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization and HTTP status codes
//! - Bearer token middleware on the protected routes
//! - Password scrubbing at the HTTP boundary

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig, jwt_auth_middleware};
use domain_users::auth_handlers::{self, AuthState};
use domain_users::{InMemoryUserRepository, UserService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

const TEST_SECRET: &str = "handler-test-secret-0123456789abcdef";

/// Build the same shape the binary wires up: open /register and /login,
/// /users behind the JWT middleware.
fn test_app() -> (Router, JwtAuth) {
    let service = UserService::new(InMemoryUserRepository::new());
    let jwt_auth = JwtAuth::new(&JwtConfig::new(TEST_SECRET));

    let auth_routes = auth_handlers::router(AuthState {
        service: service.clone(),
        jwt_auth: jwt_auth.clone(),
    });

    let protected = Router::new()
        .nest("/users", handlers::router(service))
        .layer(axum::middleware::from_fn_with_state(
            jwt_auth.clone(),
            jwt_auth_middleware,
        ));

    (Router::new().merge(auth_routes).merge(protected), jwt_auth)
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_with_bearer(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn register(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({"email": email, "password": password}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_register_returns_201_with_verifiable_token() {
    let (app, jwt_auth) = test_app();

    let token = register(&app, "a@b.com", "pw").await;

    let claims = jwt_auth.verify_token(&token).unwrap();
    assert_eq!(claims.sub, 1);
}

#[tokio::test]
async fn test_register_then_login_tokens_share_subject() {
    let (app, jwt_auth) = test_app();

    let t1 = register(&app, "a@b.com", "pw").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({"email": "a@b.com", "password": "pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let t2 = body["token"].as_str().unwrap();

    assert_eq!(
        jwt_auth.verify_token(&t1).unwrap().sub,
        jwt_auth.verify_token(t2).unwrap().sub
    );
}

#[tokio::test]
async fn test_login_wrong_password_returns_401() {
    let (app, _) = test_app();

    register(&app, "a@b.com", "pw").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({"email": "a@b.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_returns_401() {
    let (app, _) = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({"email": "nobody@b.com", "password": "pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_invalid_email_returns_400() {
    let (app, _) = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({"email": "not-an-email", "password": "pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_users_routes_require_bearer_token() {
    let (app, _) = test_app();

    // No Authorization header at all
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let response = app
        .clone()
        .oneshot(get_with_bearer("/users", "not-a-jwt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected_with_401() {
    use axum_helpers::JwtClaims;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};

    let (app, _) = test_app();

    // Token signed with the right secret but expired an hour ago
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let claims = JwtClaims {
        sub: 1,
        exp: now - 3600,
        iat: now - 7200,
    };
    let expired = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app
        .clone()
        .oneshot(get_with_bearer("/users", &expired))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_scrubs_password() {
    let (app, _) = test_app();

    let token = register(&app, "a@b.com", "pw").await;

    let response = app
        .clone()
        .oneshot(get_with_bearer("/users", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "a@b.com");
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn test_user_crud_via_handlers() {
    let (app, _) = test_app();

    let token = register(&app, "admin@b.com", "pw").await;

    // Create
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "name": "Second User",
                        "email": "second@b.com",
                        "password": "pw2"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = json_body(response.into_body()).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Second User");
    assert!(created.get("password").is_none());

    // Get
    let response = app
        .clone()
        .oneshot(get_with_bearer(&format!("/users/{}", id), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Update
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/users/{}", id))
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "name": "Renamed",
                        "email": "second@b.com",
                        "password": "pw2"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response.into_body()).await;
    assert_eq!(updated["name"], "Renamed");
    assert_eq!(updated["id"].as_i64().unwrap(), id);

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/users/{}", id))
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone now
    let response = app
        .clone()
        .oneshot(get_with_bearer(&format!("/users/{}", id), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_with_bad_id_returns_400() {
    let (app, _) = test_app();

    let token = register(&app, "a@b.com", "pw").await;

    let response = app
        .clone()
        .oneshot(get_with_bearer("/users/abc", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
