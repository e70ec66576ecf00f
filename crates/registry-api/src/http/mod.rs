//! HTTP interface module.
//!
//! Provides REST endpoints for:
//! - Course management
//! - Participant management
//! - Health checks and monitoring

pub mod courses;
pub mod extract;
pub mod monitoring;
pub mod participants;
pub mod routes;
