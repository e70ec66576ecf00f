//! # Registry API
//!
//! HTTP interface for the course registry.
//!
//! - **Courses**: list, create, update, delete (deleting cascades to participants)
//! - **Participants**: list (optionally per course), create, update
//! - **Monitoring**: health, liveness and readiness probes, Prometheus metrics
//!
//! All handlers share one [`AppState`] whose store sits behind a single
//! lock. Mutations hold the write guard for the whole operation, cascades
//! included, so no request ever observes a half-applied change.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use http::routes::create_router;
pub use server::RegistryServer;
pub use state::AppState;
