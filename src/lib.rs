//! Tiller - an in-memory project and task tracking core.
//!
//! This library provides the engine behind a project-management dashboard:
//! a [`store::Store`] holding the authoritative project and task collections,
//! derived filtered views over them, and a [`board::BoardController`] that
//! turns drag-and-drop gestures into kanban status transitions.
//!
//! There is no persistence layer: all state lives in process memory and
//! resets on restart. The hosting application constructs a `Store`, keeps
//! it for the session, and renders from the snapshots and derived views it
//! exposes.

pub mod board;
pub mod models;
pub mod seed;
pub mod store;

/// Library-level error type for Tiller operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

/// Result type alias for Tiller operations.
pub type Result<T> = std::result::Result<T, Error>;
