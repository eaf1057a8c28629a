//! HTTP API route definitions.
//!
//! Routes go through [`RouteTable`], which refuses a second handler on the
//! same method and path instead of leaving the outcome to the framework.

use std::fmt;

use axum::{
    handler::Handler,
    http::Method,
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::handlers::{
    brightness, health, hello, luca, luca_json, metrics, my_api, status, sun, AppState,
};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::metrics::track_http;

/// One registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Method,
    pub path: String,
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Router builder that rejects duplicate and malformed routes.
pub struct RouteTable<S = ()> {
    router: Router<S>,
    entries: Vec<RouteEntry>,
}

impl<S> Default for RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            entries: Vec::new(),
        }
    }

    /// Register a GET handler on `path`.
    pub fn get<H, T>(mut self, path: &str, handler: H) -> Result<Self>
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::GET, path)?;
        self.router = self.router.route(path, get(handler));
        Ok(self)
    }

    fn register(&mut self, method: Method, path: &str) -> Result<()> {
        check_route_path(path)?;

        if self
            .entries
            .iter()
            .any(|entry| entry.method == method && entry.path == path)
        {
            return Err(AppError::DuplicateRoute {
                method,
                path: path.to_string(),
            });
        }

        debug!(%method, path, "registering route");
        self.entries.push(RouteEntry {
            method,
            path: path.to_string(),
        });
        Ok(())
    }

    /// Routes registered so far, in registration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Finish building.
    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

/// Check that `path` is a literal route the router can mount.
///
/// Paths must start with `/` and contain no `:` or `*`, which the router
/// reads as capture markers.
pub fn check_route_path(path: &str) -> Result<()> {
    let literal = path.starts_with('/') && !path.contains([':', '*']);

    if literal {
        Ok(())
    } else {
        Err(AppError::InvalidRoutePath(path.to_string()))
    }
}

/// Build the route table for the API.
pub fn api_routes(config: &Config) -> Result<RouteTable<AppState>> {
    let table = RouteTable::new()
        // Greeting and team endpoints
        .get("/", hello)?
        .get("/status", status)?
        .get(&config.my_api_path, my_api)?
        .get("/luca", luca)?
        .get("/luca.json", luca_json)?
        .get("/brightness", brightness)?
        .get("/api/sun", sun)?
        // Health endpoint
        .get("/health", health)?;

    if config.metrics_enabled {
        table.get("/metrics", metrics)
    } else {
        Ok(table)
    }
}

/// Create the API router.
pub fn create_router(config: &Config, state: AppState) -> Result<Router> {
    let router = api_routes(config)?
        .into_router()
        .route_layer(middleware::from_fn(track_http))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    Ok(router)
}
