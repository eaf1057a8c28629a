//! Regular Snails HTTP API.
//!
//! A small axum service serving a greeting, a team status blob, a few
//! personal exercise routes and the average of a fixed brightness sample.
//!
//! ```text
//! GET /            greeting (plain text or rendered page)
//! GET /status      {"ok":true,"team":"Regular Snails","msg":"My first API"}
//! GET /brightness  {"avg_brightness":160.0}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Route table, handlers and error responses
//! - [`stats`]: Arithmetic mean
//! - [`template`]: HTML page rendering
//! - [`sun`]: Fixed-clock sun and golden-hour times
//! - [`metrics`]: Prometheus request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod stats;
pub mod sun;
pub mod template;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
