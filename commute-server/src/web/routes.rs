//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/recommend", post(recommend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        time: Utc::now().to_rfc3339(),
    })
}

/// Recommend a travel mode between two free-text places.
async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecommendationView>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RecommendRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid recommend request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    if req.from.trim().is_empty() || req.to.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Both 'from' and 'to' are required".to_string(),
        });
    }

    let recommendation = state.engine.recommend(&req.from, &req.to).await;
    Ok(Json(RecommendationView::from(recommendation)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;
    use crate::geocode::GeocodeConfig;
    use crate::routing::RouterConfig;
    use crate::test_support::serve;
    use crate::transit::TransitConfig;

    const OFFLINE: &str = "http://127.0.0.1:1";

    /// Every upstream refuses connections.
    fn offline_config() -> AppConfig {
        AppConfig {
            geocode: GeocodeConfig::new().with_base_url(OFFLINE),
            router: RouterConfig::new().with_public_url(OFFLINE),
            transit: TransitConfig::new().with_base_url(OFFLINE),
            ..AppConfig::default()
        }
    }

    fn app(config: &AppConfig) -> Router {
        create_router(AppState::new(config.build_engine().unwrap()))
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app(&offline_config()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["time"].as_str().is_some_and(|t| t.contains('T')));
    }

    #[tokio::test]
    async fn offline_upstreams_give_placeholder() {
        let (status, json) =
            post_json(app(&offline_config()), r#"{"from": "Nowhere", "to": "Atlantis"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["source"], "mock_placeholder");
        assert_eq!(json["suggestedMode"], "Car");
        assert_eq!(json["results"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["alternatives"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["ecoScore"], 86);
    }

    #[tokio::test]
    async fn geocoder_only_gives_geodesic_estimate() {
        let geocoder = serve(Router::new().route(
            "/search",
            get(|| async {
                Json(json!([{"lat": "12.9719", "lon": "77.6412", "category": "place", "type": "suburb"}]))
            }),
        ))
        .await;
        let config = AppConfig {
            geocode: GeocodeConfig::new().with_base_url(geocoder),
            ..offline_config()
        };

        let (status, json) =
            post_json(app(&config), r#"{"from": "Indiranagar", "to": "Indiranagar"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["source"], "geodesic_estimate");
        assert_ne!(json["suggestedMode"], "Aeroplane");
    }

    #[tokio::test]
    async fn blank_place_is_rejected() {
        let (status, json) =
            post_json(app(&offline_config()), r#"{"from": "  ", "to": "Atlantis"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().is_some_and(|e| e.contains("required")));
    }

    #[tokio::test]
    async fn invalid_json_is_rejected() {
        let (status, json) = post_json(app(&offline_config()), r#"{"from": "Home"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().is_some_and(|e| e.starts_with("Invalid JSON")));

        let (status, _) = post_json(app(&offline_config()), "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
