//! Data models for Tiller entities.
//!
//! This module defines the core data structures:
//! - `Project` - A tracked project with owner, schedule, and status
//! - `Task` - A kanban card belonging to a project
//! - `ProjectDraft` / `TaskDraft` - Caller-supplied field sets for create/update
//!
//! Field names serialize in camelCase (`startDate`, `projectId`, ...) so records
//! are wire-compatible with the dashboard frontends that consume them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Project status shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Delayed,
}

impl ProjectStatus {
    /// All statuses, in dashboard display order.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Delayed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Delayed => "Delayed",
        }
    }

    /// Parse a status string (case-insensitive).
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "delayed" => Ok(ProjectStatus::Delayed),
            _ => Err(Error::Validation(format!("Unknown project status: {}", s))),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task status, doubling as the kanban column the card sits in.
///
/// Exactly three values; a card is never in a partial or in-between state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// All statuses, in board column order (left to right).
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// The column id used on the wire and by drop targets.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Done => "done",
        }
    }

    /// Parse a column id. Returns `None` for anything that is not one of the
    /// three known columns; drop handling treats that as a cancelled drag
    /// rather than an error.
    pub fn from_column_id(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "inprogress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project tracked on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (e.g., "tl-a1b2")
    pub id: String,

    /// Project name
    pub name: String,

    /// Owning user's display name
    pub owner: String,

    /// Scheduled start date
    pub start_date: NaiveDate,

    /// Scheduled due date; expected to follow `start_date`, enforced at input
    /// time via [`ProjectDraft::validate`], not stored as an invariant
    pub due_date: NaiveDate,

    /// Current status
    pub status: ProjectStatus,

    /// Detailed description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A kanban card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (e.g., "tlt-a1b2")
    pub id: String,

    /// Card title
    pub title: String,

    /// Detailed description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Owning project id. May reference a project that no longer exists;
    /// the store does not enforce referential integrity
    pub project_id: String,

    /// Current column
    #[serde(default)]
    pub status: TaskStatus,

    /// Assigned user's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or replacing a project.
///
/// The store generates the id; everything else comes from here. Updates are
/// full-record replacements, so an `update_project` call carries a complete
/// draft, not a patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub owner: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectDraft {
    /// Caller-level validation: the due date must fall strictly after the
    /// start date. Form layers run this before handing the draft to the
    /// store; the store itself accepts any draft.
    pub fn validate(&self) -> Result<()> {
        if self.due_date <= self.start_date {
            return Err(Error::Validation(format!(
                "Due date {} must be after start date {}",
                self.due_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Materialize this draft into a project with the given id.
    pub(crate) fn into_project(self, id: String) -> Project {
        Project {
            id,
            name: self.name,
            owner: self.owner,
            start_date: self.start_date,
            due_date: self.due_date,
            status: self.status,
            description: self.description,
        }
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            owner: project.owner.clone(),
            start_date: project.start_date,
            due_date: project.due_date,
            status: project.status,
            description: project.description.clone(),
        }
    }
}

/// Caller-supplied fields for creating or replacing a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_id: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl TaskDraft {
    /// Materialize this draft into a task with the given id, stamped now.
    pub(crate) fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            project_id: self.project_id,
            status: self.status,
            assignee: self.assignee,
            created_at: Utc::now(),
        }
    }

    /// Replace the fields of an existing task, keeping id and creation time.
    pub(crate) fn apply_to(self, task: &mut Task) {
        task.title = self.title;
        task.description = self.description;
        task.project_id = self.project_id;
        task.status = self.status;
        task.assignee = self.assignee;
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            project_id: task.project_id.clone(),
            status: task.status,
            assignee: task.assignee.clone(),
        }
    }
}
