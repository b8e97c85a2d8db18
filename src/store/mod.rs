//! In-memory store for Tiller data.
//!
//! The [`Store`] is the single source of truth for the project and task
//! collections. It is a plain constructible object owned by the hosting
//! application (no process-wide globals); its lifetime is the session, and
//! nothing is ever persisted.
//!
//! Mutations are synchronous full-record replacements, so a reader always
//! observes either the pre-mutation or the post-mutation record, never a
//! partially-updated one. Derived views ([`Store::projects_with_status`] and
//! friends) are recomputed from the live collections on every call and are
//! never cached.

use sha2::{Digest, Sha256};

use crate::models::{Project, ProjectDraft, ProjectStatus, Task, TaskDraft, TaskStatus};
use crate::{Error, Result};

/// Id prefix for projects.
pub const PROJECT_ID_PREFIX: &str = "tl";

/// Id prefix for tasks.
pub const TASK_ID_PREFIX: &str = "tlt";

/// Generate a unique ID for a project or task.
///
/// Format: `<prefix>-<4 hex chars>`
/// - Project prefix: "tl"
/// - Task prefix: "tlt"
pub fn generate_id(prefix: &str, seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(
        chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or(0)
            .to_le_bytes(),
    );
    let hash = hasher.finalize();
    let hash_hex = format!("{:x}", hash);
    format!("{}-{}", prefix, &hash_hex[..4])
}

/// Validate that an ID matches the expected format.
pub fn validate_id(id: &str, prefix: &str) -> Result<()> {
    if !id.starts_with(&format!("{}-", prefix)) {
        return Err(Error::InvalidId(format!(
            "ID must start with '{}-', got: {}",
            prefix, id
        )));
    }

    let suffix = &id[prefix.len() + 1..];
    if suffix.len() != 4 || !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidId(format!(
            "ID suffix must be 4 hex characters, got: {}",
            suffix
        )));
    }

    Ok(())
}

/// Validate a project ID (tl-xxxx format).
pub fn validate_project_id(id: &str) -> Result<()> {
    validate_id(id, PROJECT_ID_PREFIX)
}

/// Validate a task ID (tlt-xxxx format).
pub fn validate_task_id(id: &str) -> Result<()> {
    validate_id(id, TASK_ID_PREFIX)
}

/// Dashboard headline counts over the project collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ProjectSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub delayed: usize,
}

/// Per-column task counts, as shown on a project's detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TaskSummary {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl TaskSummary {
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

/// In-memory store for projects and tasks.
pub struct Store {
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Create a store seeded with the sample dataset.
    pub fn with_sample_data() -> Self {
        Self {
            projects: crate::seed::sample_projects(),
            tasks: crate::seed::sample_tasks(),
        }
    }

    // --- Projects ---

    /// Snapshot of all projects. Ordering is stable but carries no meaning.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Get a project by id.
    pub fn get_project(&self, id: &str) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Create a project from the given draft, generating a fresh id.
    ///
    /// No duplicate-name check is performed; two projects may share a name.
    pub fn add_project(&mut self, draft: ProjectDraft) -> Project {
        let id = self.fresh_id(PROJECT_ID_PREFIX, &draft.name);
        let project = draft.into_project(id);
        tracing::debug!(id = %project.id, name = %project.name, "project created");
        self.projects.push(project.clone());
        project
    }

    /// Replace all fields of the project with the given id.
    ///
    /// The replacement is atomic from the caller's perspective: on
    /// `Err(NotFound)` the collection is untouched.
    pub fn update_project(&mut self, id: &str, draft: ProjectDraft) -> Result<Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        *project = draft.into_project(id.to_string());
        tracing::debug!(id = %id, "project updated");
        Ok(project.clone())
    }

    /// Delete the project with the given id.
    ///
    /// Returns `Err(NotFound)` for an unknown id. Tasks belonging to the
    /// project are left in place; there is no cascading delete, and their
    /// `project_id` is allowed to dangle.
    pub fn delete_project(&mut self, id: &str) -> Result<()> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        self.projects.remove(index);
        tracing::debug!(id = %id, "project deleted");
        Ok(())
    }

    // --- Tasks ---

    /// Snapshot of all tasks. Ordering is stable but carries no meaning.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by id.
    pub fn get_task(&self, id: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Create a task from the given draft, generating a fresh id.
    ///
    /// The draft's `project_id` is taken as-is; it is not required to name an
    /// existing project.
    pub fn add_task(&mut self, draft: TaskDraft) -> Task {
        let id = self.fresh_id(TASK_ID_PREFIX, &draft.title);
        let task = draft.into_task(id);
        tracing::debug!(id = %task.id, title = %task.title, "task created");
        self.tasks.push(task.clone());
        task
    }

    /// Replace all fields of the task with the given id, keeping its
    /// creation timestamp.
    pub fn update_task(&mut self, id: &str, draft: TaskDraft) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        draft.apply_to(task);
        tracing::debug!(id = %id, "task updated");
        Ok(task.clone())
    }

    /// Delete the task with the given id. Returns `Err(NotFound)` for an
    /// unknown id.
    pub fn delete_task(&mut self, id: &str) -> Result<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        self.tasks.remove(index);
        tracing::debug!(id = %id, "task deleted");
        Ok(())
    }

    /// Move a task to a new column. Used by the board controller; equivalent
    /// to a full-record replace that changes only `status`.
    pub(crate) fn set_task_status(&mut self, id: &str, status: TaskStatus) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        task.status = status;
        Ok(task.clone())
    }

    // --- Derived views ---
    //
    // All of these recompute from the live collections; none hold state of
    // their own, so they can never go stale.

    /// Projects currently in the given status.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.status == status).collect()
    }

    /// Tasks currently in the given column.
    pub fn tasks_with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Tasks belonging to the given project.
    pub fn tasks_for_project(&self, project_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    /// Projects matching the dashboard search controls: an optional
    /// case-insensitive substring on the name, and an optional status.
    pub fn filter_projects(
        &self,
        name_contains: Option<&str>,
        status: Option<ProjectStatus>,
    ) -> Vec<&Project> {
        let needle = name_contains.map(str::to_lowercase);
        self.projects
            .iter()
            .filter(|p| match &needle {
                Some(n) => p.name.to_lowercase().contains(n),
                None => true,
            })
            .filter(|p| status.is_none_or(|s| p.status == s))
            .collect()
    }

    /// Headline counts for the dashboard statistic cards.
    pub fn project_summary(&self) -> ProjectSummary {
        ProjectSummary {
            total: self.projects.len(),
            active: self.projects_with_status(ProjectStatus::Active).len(),
            completed: self.projects_with_status(ProjectStatus::Completed).len(),
            delayed: self.projects_with_status(ProjectStatus::Delayed).len(),
        }
    }

    /// Per-column counts for the given project's tasks.
    pub fn task_summary(&self, project_id: &str) -> TaskSummary {
        let tasks = self.tasks_for_project(project_id);
        TaskSummary {
            todo: tasks.iter().filter(|t| t.status == TaskStatus::Todo).count(),
            in_progress: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            done: tasks.iter().filter(|t| t.status == TaskStatus::Done).count(),
        }
    }

    /// Generate an id that is not already taken by either collection.
    ///
    /// `generate_id` mixes a nanosecond timestamp into the hash, so a retry
    /// with the same seed yields a different id. Collisions over a 16-bit
    /// space are unlikely at dashboard scale but cheap to rule out entirely.
    fn fresh_id(&self, prefix: &str, seed: &str) -> String {
        loop {
            let id = generate_id(prefix, seed);
            let taken = self.projects.iter().any(|p| p.id == id)
                || self.tasks.iter().any(|t| t.id == id);
            if !taken {
                return id;
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn draft(name: &str, status: ProjectStatus) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            owner: "John Doe".to_string(),
            start_date: date("2024-01-15"),
            due_date: date("2024-03-30"),
            status,
            description: None,
        }
    }

    fn task_draft(title: &str, project_id: &str, status: TaskStatus) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: None,
            project_id: project_id.to_string(),
            status,
            assignee: Some("John Doe".to_string()),
        }
    }

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("tl", "test seed");
        assert!(id.starts_with("tl-"));
        assert_eq!(id.len(), 7); // "tl-" + 4 hex chars
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_project_id("tl-a1b2").is_ok());
        assert!(validate_task_id("tlt-ffff").is_ok());
        assert!(validate_project_id("task-a1b2").is_err());
        assert!(validate_project_id("tl-a1b").is_err()); // Too short
        assert!(validate_project_id("tl-ghij").is_err()); // Non-hex chars
    }

    #[test]
    fn test_add_project_appends_with_fresh_id() {
        let mut store = Store::new();
        let before = store.projects().len();
        let created = store.add_project(draft("E-commerce Platform", ProjectStatus::Active));

        assert_eq!(store.projects().len(), before + 1);
        assert!(validate_project_id(&created.id).is_ok());
        assert_eq!(store.get_project(&created.id).unwrap().name, "E-commerce Platform");

        // Second project with the same name is allowed and gets a distinct id
        let twin = store.add_project(draft("E-commerce Platform", ProjectStatus::Active));
        assert_ne!(created.id, twin.id);
        assert_eq!(store.projects().len(), before + 2);
    }

    #[test]
    fn test_update_project_replaces_all_fields() {
        let mut store = Store::new();
        let created = store.add_project(draft("Mobile App Redesign", ProjectStatus::Active));

        let mut updated = draft("Mobile App Redesign", ProjectStatus::Completed);
        updated.owner = "Jane Smith".to_string();
        updated.description = Some("Complete redesign".to_string());
        let project = store.update_project(&created.id, updated).unwrap();

        assert_eq!(project.id, created.id);
        assert_eq!(project.owner, "Jane Smith");
        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(store.get_project(&created.id).unwrap(), &project);
    }

    #[test]
    fn test_update_unknown_project_leaves_collection_unchanged() {
        let mut store = Store::new();
        store.add_project(draft("Dashboard Analytics", ProjectStatus::Completed));
        let snapshot: Vec<_> = store.projects().to_vec();

        let result = store.update_project("tl-0000", draft("X", ProjectStatus::Active));
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(store.projects(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_project_does_not_cascade() {
        let mut store = Store::new();
        let project = store.add_project(draft("API Integration", ProjectStatus::Delayed));
        store.add_task(task_draft("Research APIs", &project.id, TaskStatus::Todo));

        store.delete_project(&project.id).unwrap();
        assert!(matches!(store.get_project(&project.id), Err(Error::NotFound(_))));

        // The task survives with a dangling project_id
        assert_eq!(store.tasks_for_project(&project.id).len(), 1);
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let mut store = Store::new();
        assert!(matches!(store.delete_project("tl-0000"), Err(Error::NotFound(_))));
        assert!(matches!(store.delete_task("tlt-0000"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_task_crud_keeps_created_at() {
        let mut store = Store::new();
        let project = store.add_project(draft("E-commerce Platform", ProjectStatus::Active));
        let created = store.add_task(task_draft("Setup project", &project.id, TaskStatus::Todo));

        let mut replacement = task_draft("Setup project structure", &project.id, TaskStatus::Done);
        replacement.assignee = None;
        let updated = store.update_task(&created.id, replacement).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Setup project structure");
        assert_eq!(updated.assignee, None);

        store.delete_task(&created.id).unwrap();
        assert!(store.get_task(&created.id).is_err());
    }

    #[test]
    fn test_derived_views_track_mutations() {
        let mut store = Store::new();
        let active = store.add_project(draft("One", ProjectStatus::Active));
        store.add_project(draft("Two", ProjectStatus::Delayed));

        assert_eq!(store.projects_with_status(ProjectStatus::Active).len(), 1);

        // The view is recomputed on every call, so a status flip is visible
        // immediately
        store
            .update_project(&active.id, draft("One", ProjectStatus::Completed))
            .unwrap();
        assert_eq!(store.projects_with_status(ProjectStatus::Active).len(), 0);
        assert_eq!(store.projects_with_status(ProjectStatus::Completed).len(), 1);

        // And it always equals a plain filter over the snapshot
        let by_hand: Vec<_> = store
            .projects()
            .iter()
            .filter(|p| p.status == ProjectStatus::Delayed)
            .collect();
        assert_eq!(store.projects_with_status(ProjectStatus::Delayed), by_hand);
    }

    #[test]
    fn test_filter_projects() {
        let mut store = Store::new();
        store.add_project(draft("E-commerce Platform", ProjectStatus::Active));
        store.add_project(draft("Mobile App Redesign", ProjectStatus::Active));
        store.add_project(draft("Dashboard Analytics", ProjectStatus::Completed));

        assert_eq!(store.filter_projects(None, None).len(), 3);
        assert_eq!(store.filter_projects(Some("app"), None).len(), 1);
        assert_eq!(
            store.filter_projects(None, Some(ProjectStatus::Active)).len(),
            2
        );
        // Search is case-insensitive and combines with the status filter
        assert_eq!(
            store
                .filter_projects(Some("DASH"), Some(ProjectStatus::Completed))
                .len(),
            1
        );
        assert!(store.filter_projects(Some("nothing"), None).is_empty());
    }

    #[test]
    fn test_summaries() {
        let mut store = Store::new();
        let project = store.add_project(draft("One", ProjectStatus::Active));
        store.add_project(draft("Two", ProjectStatus::Delayed));
        store.add_task(task_draft("a", &project.id, TaskStatus::Todo));
        store.add_task(task_draft("b", &project.id, TaskStatus::Todo));
        store.add_task(task_draft("c", &project.id, TaskStatus::Done));
        store.add_task(task_draft("elsewhere", "tl-0000", TaskStatus::InProgress));

        let summary = store.project_summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.delayed, 1);

        let tasks = store.task_summary(&project.id);
        assert_eq!(tasks.todo, 2);
        assert_eq!(tasks.in_progress, 0);
        assert_eq!(tasks.done, 1);
        assert_eq!(tasks.total(), 3);
    }

    #[test]
    fn test_sample_data_loads() {
        let store = Store::with_sample_data();
        assert!(!store.projects().is_empty());
        assert!(!store.tasks().is_empty());
        // Every task status is one of the three columns by construction
        for task in store.tasks() {
            assert!(TaskStatus::ALL.contains(&task.status));
        }
    }
}
