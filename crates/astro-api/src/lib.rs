//! # Astro-API
//!
//! HTTP surface for astrology readings, built on Axum.
//!
//! ## Endpoints
//!
//! - `POST /result` - Full-detail reading (form or JSON)
//! - `POST /api/reading` - Condensed reading envelope (JSON or form)
//! - `GET /api/health` - Health check

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::*;
pub use error::{ApiError, ApiResult};
pub use routes::build_router;
pub use server::*;
pub use state::*;
