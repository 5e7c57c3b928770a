use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_favorite::add_favorite;
use super::handlers::add_rating::add_rating;
use super::handlers::list_spots::list_spots;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::welcome::welcome;
use super::middleware::authenticate as auth_middleware;
use crate::domain::account::service::AuthService;
use crate::domain::spot::service::SpotService;
use crate::outbound::repositories::credential::InMemoryCredentialStore;
use crate::outbound::repositories::spot::InMemorySpotRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryCredentialStore>>,
    pub spot_service: Arc<SpotService<InMemorySpotRepository>>,
}

pub fn create_router(
    auth_service: Arc<AuthService<InMemoryCredentialStore>>,
    spot_service: Arc<SpotService<InMemorySpotRepository>>,
) -> Router {
    let state = AppState {
        auth_service,
        spot_service,
    };

    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/spots", get(list_spots));

    let protected_routes = Router::new()
        .route("/favorites", post(add_favorite))
        .route("/ratings", post(add_rating))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use auth::Authenticator;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn router() -> Router {
        let auth_service = Arc::new(AuthService::with_default_ttls(
            Arc::new(InMemoryCredentialStore::new()),
            Arc::new(Authenticator::new(b"router-test-secret-at-least-32-bytes!")),
        ));
        let spot_service = Arc::new(SpotService::new(Arc::new(
            InMemorySpotRepository::seeded(),
        )));

        create_router(auth_service, spot_service)
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    }

    #[tokio::test]
    async fn test_protected_route_without_token() {
        let request = Request::builder()
            .method("POST")
            .uri("/ratings")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"spot_id":1,"rating":3.0}"#))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()["www-authenticate"], "Bearer");

        let body = body_json(response).await;
        assert_eq!(body["data"]["message"], "Missing Authorization header");
    }

    #[tokio::test]
    async fn test_register_then_login_with_form() {
        let app = router();

        let register = Request::builder()
            .method("POST")
            .uri("/auth/register")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"username":"alice","email":"a@x.com","password":"secret123"}"#,
            ))
            .unwrap();
        let response = app.clone().oneshot(register).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let login = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(
                "grant_type=password&username=alice&password=secret123",
            ))
            .unwrap();
        let response = app.oneshot(login).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["token_type"], "bearer");
    }

    #[tokio::test]
    async fn test_public_spot_listing() {
        let request = Request::builder()
            .uri("/spots")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }
}
