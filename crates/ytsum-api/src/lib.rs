//! Axum HTTP API server.
//!
//! This crate provides:
//! - `POST /summarize` — video identifier in, markdown summary (or a
//!   user-visible error message) out
//! - `GET /health` — liveness probe
//! - `GET /` — service info

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
