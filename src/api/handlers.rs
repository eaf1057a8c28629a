//! HTTP API handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use crate::config::Greeting;
use crate::error::AppError;
use crate::stats::mean;
use crate::sun::{sun_times_today, SunTimes};
use crate::template::{render_page, Page};

/// Team name reported by the JSON endpoints.
pub const TEAM: &str = "Regular Snails";

/// Greeting served by the `regular-snails` variant.
pub const REGULAR_SNAILS_GREETING: &str = "Hello World from Regular Snails";

/// Greeting served by the `luxta` variant.
pub const LUXTA_GREETING: &str = "Welcome to Luxta! Under development.";

/// Body of the "new HTTP API function" route.
pub const MY_API_MESSAGE: &str = "This is the new HTTP API function";

/// Body of `GET /luca`.
pub const LUCA_MESSAGE: &str = "Luca's first API should be working.";

/// Brightness samples averaged by `GET /brightness`.
pub const BRIGHTNESS_SAMPLES: [i32; 3] = [100, 180, 200];

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Greeting variant served on `/`.
    pub greeting: Greeting,
    /// Prometheus handle backing `/metrics`.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state.
    pub fn new(greeting: Greeting) -> Self {
        Self {
            greeting,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Always true.
    pub ok: bool,
    /// Team name.
    pub team: &'static str,
    /// Status message.
    pub msg: &'static str,
}

/// Owner response.
#[derive(Debug, Serialize)]
pub struct OwnerResponse {
    /// Always true.
    pub ok: bool,
    /// Owner of the route.
    pub owner: &'static str,
    /// Team name.
    pub team: &'static str,
}

/// Brightness response.
#[derive(Debug, Serialize)]
pub struct BrightnessResponse {
    /// Mean of [`BRIGHTNESS_SAMPLES`].
    pub avg_brightness: f64,
}

/// Greeting handler for the configured variant.
pub async fn hello(State(state): State<AppState>) -> Result<Response, AppError> {
    let response = match state.greeting {
        Greeting::RegularSnails => REGULAR_SNAILS_GREETING.into_response(),
        Greeting::Luxta => LUXTA_GREETING.into_response(),
        Greeting::Home => Html(render_page(Page::Home)?).into_response(),
    };

    Ok(response)
}

/// Status handler - fixed team status.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        ok: true,
        team: TEAM,
        msg: "My first API",
    })
}

/// New API function handler - fixed message.
pub async fn my_api() -> &'static str {
    MY_API_MESSAGE
}

/// Luca's plain-text handler.
pub async fn luca() -> &'static str {
    LUCA_MESSAGE
}

/// Luca's JSON handler - owner and team.
pub async fn luca_json() -> Json<OwnerResponse> {
    Json(OwnerResponse {
        ok: true,
        owner: "Luca",
        team: TEAM,
    })
}

/// Brightness handler - mean of the fixed samples.
pub async fn brightness() -> Json<BrightnessResponse> {
    Json(BrightnessResponse {
        avg_brightness: mean(&BRIGHTNESS_SAMPLES),
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Sun and golden-hour times for today (UTC).
pub async fn sun() -> Json<SunTimes> {
    Json(sun_times_today())
}

/// Prometheus exposition, 404 when no recorder is attached.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn brightness_averages_samples() {
        let Json(body) = brightness().await;
        assert_eq!(body.avg_brightness, 160.0);
    }

    #[tokio::test]
    async fn luxta_greeting_is_plain_text() {
        let response = hello(State(AppState::new(Greeting::Luxta))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn home_greeting_is_html() {
        let response = hello(State(AppState::new(Greeting::Home))).await.unwrap();

        assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn metrics_without_handle_is_not_found() {
        let response = metrics(State(AppState::default())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
