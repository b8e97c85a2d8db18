//! Common test utilities for tiller integration tests.
//!
//! Provides a `BoardEnv` bundling a seeded store with a board controller,
//! the way a hosting application holds them for a session.

#![allow(dead_code)]

use tiller::board::BoardController;
use tiller::models::{ProjectDraft, ProjectStatus, TaskDraft, TaskStatus};
use tiller::store::Store;

/// A session-style environment: one store, one board.
pub struct BoardEnv {
    pub store: Store,
    pub board: BoardController,
}

impl BoardEnv {
    /// Empty store, fresh board.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            board: BoardController::new(),
        }
    }

    /// Store preloaded with the sample dataset.
    pub fn seeded() -> Self {
        Self {
            store: Store::with_sample_data(),
            board: BoardController::new(),
        }
    }
}

/// A project draft with sensible defaults for tests.
pub fn project_draft(name: &str, status: ProjectStatus) -> ProjectDraft {
    ProjectDraft {
        name: name.to_string(),
        owner: "Test Owner".to_string(),
        start_date: "2024-01-01".parse().unwrap(),
        due_date: "2024-06-30".parse().unwrap(),
        status,
        description: None,
    }
}

/// A task draft tied to the given project.
pub fn task_draft(title: &str, project_id: &str, status: TaskStatus) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: None,
        project_id: project_id.to_string(),
        status,
        assignee: Some("Test Owner".to_string()),
    }
}
