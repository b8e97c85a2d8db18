//! Sample dataset for demos and tests.
//!
//! A small fixed set of projects and tasks mirroring what a freshly opened
//! dashboard shows. Ids here use the same `tl-`/`tlt-` format the store
//! generates, but are fixed so demos and tests can reference them.
//!
//! `tlt-0006` points at a project that does not exist; the store tolerates
//! dangling project ids and the dataset keeps one around so consumers
//! exercise that case.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Project, ProjectStatus, Task, TaskStatus};

fn date(s: &str) -> NaiveDate {
    s.parse().expect("seed date is valid")
}

fn midnight(s: &str) -> DateTime<Utc> {
    date(s).and_hms_opt(0, 0, 0).expect("midnight exists").and_utc()
}

/// The sample project collection.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "tl-0001".to_string(),
            name: "E-commerce Platform".to_string(),
            owner: "John Doe".to_string(),
            start_date: date("2024-01-15"),
            due_date: date("2024-03-30"),
            status: ProjectStatus::Active,
            description: Some(
                "Building a modern e-commerce platform with React and Node.js".to_string(),
            ),
        },
        Project {
            id: "tl-0002".to_string(),
            name: "Mobile App Redesign".to_string(),
            owner: "Jane Smith".to_string(),
            start_date: date("2024-02-01"),
            due_date: date("2024-04-15"),
            status: ProjectStatus::Active,
            description: Some("Complete redesign of the mobile application".to_string()),
        },
        Project {
            id: "tl-0003".to_string(),
            name: "Dashboard Analytics".to_string(),
            owner: "Mike Johnson".to_string(),
            start_date: date("2024-01-01"),
            due_date: date("2024-02-28"),
            status: ProjectStatus::Completed,
            description: Some("Advanced analytics dashboard for business insights".to_string()),
        },
        Project {
            id: "tl-0004".to_string(),
            name: "API Integration".to_string(),
            owner: "Sarah Wilson".to_string(),
            start_date: date("2024-02-15"),
            due_date: date("2024-03-15"),
            status: ProjectStatus::Delayed,
            description: Some("Integration with third-party APIs".to_string()),
        },
    ]
}

/// The sample task collection.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "tlt-0001".to_string(),
            title: "Setup project structure".to_string(),
            description: Some("Initialize the project with proper folder structure".to_string()),
            project_id: "tl-0001".to_string(),
            status: TaskStatus::Done,
            assignee: Some("John Doe".to_string()),
            created_at: midnight("2024-01-15"),
        },
        Task {
            id: "tlt-0002".to_string(),
            title: "Design database schema".to_string(),
            description: Some(
                "Create the database schema for the e-commerce platform".to_string(),
            ),
            project_id: "tl-0001".to_string(),
            status: TaskStatus::Todo,
            assignee: Some("John Doe".to_string()),
            created_at: midnight("2024-01-16"),
        },
        Task {
            id: "tlt-0003".to_string(),
            title: "Implement user authentication".to_string(),
            description: Some("Add login and registration functionality".to_string()),
            project_id: "tl-0001".to_string(),
            status: TaskStatus::InProgress,
            assignee: Some("John Doe".to_string()),
            created_at: midnight("2024-01-17"),
        },
        Task {
            id: "tlt-0004".to_string(),
            title: "Create wireframes".to_string(),
            description: Some("Design wireframes for mobile app screens".to_string()),
            project_id: "tl-0002".to_string(),
            status: TaskStatus::Done,
            assignee: Some("Jane Smith".to_string()),
            created_at: midnight("2024-02-01"),
        },
        Task {
            id: "tlt-0005".to_string(),
            title: "Prototype development".to_string(),
            description: Some("Build interactive prototype".to_string()),
            project_id: "tl-0002".to_string(),
            status: TaskStatus::InProgress,
            assignee: Some("Jane Smith".to_string()),
            created_at: midnight("2024-02-05"),
        },
        Task {
            id: "tlt-0006".to_string(),
            title: "Research AI APIs".to_string(),
            description: Some("Evaluate OpenAI, Google Dialogflow, and others".to_string()),
            // No project has this id; see module docs
            project_id: "tl-0006".to_string(),
            status: TaskStatus::Todo,
            assignee: Some("Ananya Gupta".to_string()),
            created_at: midnight("2024-03-10"),
        },
    ]
}
