//! First-run fixture data.
//!
//! A collection key that has never been written is seeded with these records
//! and persisted immediately, so a second read returns the same collection
//! rather than a second seed.

use chrono::{Duration, Utc};
use uuid::Uuid;

use wikiflow_shared::types::{ProjectStatus, TaskPriority, TaskStatus, UserRole};

use crate::models::{Document, Project, Task};

/// Starter documents shown on a fresh install.
pub fn initial_documents() -> Vec<Document> {
    let now = Utc::now();

    vec![
        Document {
            id: Uuid::new_v4(),
            title: "Employee Onboarding Guide".into(),
            content: "# Welcome aboard\n\n## First-day checklist\n1. Pick up your badge\n2. Set up your workstation account\n3. Complete the insurance paperwork\n\n## Everyday tools\n- Slack for communication\n- Jira for project tracking\n\nPlease finish every step within your first week.".into(),
            tags: vec!["HR".into(), "Onboarding".into(), "SOP".into()],
            category: "Human Resources".into(),
            created_by: "Olivia Chen".into(),
            created_at: now - Duration::days(10),
            updated_at: now - Duration::days(2),
            access_level: UserRole::Viewer,
            history: Vec::new(),
            attachments: Vec::new(),
        },
        Document {
            id: Uuid::new_v4(),
            title: "2025 Product Roadmap".into(),
            content: "# 2025 product plan\n\n## Q1 focus\n- Ship the AI module integration\n- Polish the mobile layout\n\n## Q2 focus\n- Payment rails for overseas markets\n- Multi-language support".into(),
            tags: vec!["Product".into(), "Strategy".into(), "2025".into()],
            category: "Product".into(),
            created_by: "Alice Nguyen".into(),
            created_at: now - Duration::days(5),
            updated_at: now,
            access_level: UserRole::Editor,
            history: Vec::new(),
            attachments: Vec::new(),
        },
    ]
}

/// Starter projects shown on a fresh install.  Member and assignee ids refer
/// to the builtin personas.
pub fn initial_projects() -> Vec<Project> {
    let now = Utc::now();

    vec![
        Project {
            id: Uuid::new_v4(),
            name: "Q1 Website Revamp".into(),
            description: "Performance and visual refresh of the company site, targeting a 20% conversion lift.".into(),
            status: ProjectStatus::Active,
            members: vec!["u1".into(), "u2".into()],
            created_by: "Olivia Chen".into(),
            created_at: now,
            updated_at: now,
            tasks: vec![
                Task {
                    id: Uuid::new_v4(),
                    title: "Design homepage mockup".into(),
                    description: None,
                    status: TaskStatus::Done,
                    priority: TaskPriority::High,
                    assignee_id: Some("u2".into()),
                    due_date: Some(now - Duration::days(1)),
                    created_at: now,
                },
                Task {
                    id: Uuid::new_v4(),
                    title: "Build the frontend layout".into(),
                    description: None,
                    status: TaskStatus::InProgress,
                    priority: TaskPriority::High,
                    assignee_id: Some("u3".into()),
                    due_date: Some(now + Duration::days(3)),
                    created_at: now,
                },
                Task {
                    id: Uuid::new_v4(),
                    title: "Write the landing copy".into(),
                    description: None,
                    status: TaskStatus::Todo,
                    priority: TaskPriority::Medium,
                    assignee_id: Some("u1".into()),
                    due_date: None,
                    created_at: now,
                },
            ],
        },
        Project {
            id: Uuid::new_v4(),
            name: "Internal Security Audit".into(),
            description: "Semi-annual security review and access inventory.".into(),
            status: ProjectStatus::Active,
            members: vec!["u1".into()],
            created_by: "Olivia Chen".into(),
            created_at: now,
            updated_at: now,
            tasks: vec![Task {
                id: Uuid::new_v4(),
                title: "Export the log report".into(),
                description: None,
                status: TaskStatus::Todo,
                priority: TaskPriority::Low,
                assignee_id: Some("u1".into()),
                due_date: None,
                created_at: now,
            }],
        },
    ]
}
