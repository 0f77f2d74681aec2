//! Project and kanban-board commands.

use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use wikiflow_shared::types::{ProjectStatus, TaskStatus};
use wikiflow_store::{NewTask, Project, ProjectDraft, StoreError};

use crate::state::AppState;

/// Return every project, bootstrapping the collection on first use.
pub fn list_projects(state: &AppState) -> Result<Vec<Project>, StoreError> {
    state.store.list_projects()
}

/// Persist a project draft on behalf of the current user.
pub fn save_project(state: &AppState, draft: ProjectDraft) -> Result<Project, StoreError> {
    let user = state.store.current_user(&state.directory)?;
    let project = state.store.save_project(draft, &user)?;
    info!(project_id = %project.id, name = %project.name, "project saved");
    Ok(project)
}

/// Add a task to a lane, assigned to the current user.
pub fn add_task(
    state: &AppState,
    project_id: Uuid,
    new_task: NewTask,
) -> Result<Project, StoreError> {
    let user = state.store.current_user(&state.directory)?;
    state.store.add_task(project_id, new_task, &user)
}

/// Move a task to another lane.
pub fn move_task(
    state: &AppState,
    project_id: Uuid,
    task_id: Uuid,
    new_status: TaskStatus,
) -> Result<Project, StoreError> {
    state.store.move_task(project_id, task_id, new_status)
}

/// Remove a task from its project.
pub fn remove_task(state: &AppState, project_id: Uuid, task_id: Uuid) -> Result<Project, StoreError> {
    state.store.remove_task(project_id, task_id)
}

/// Remove a project by id.
pub fn delete_project(state: &AppState, id: Uuid) -> Result<bool, StoreError> {
    state.store.delete_project(id)
}

/// Counters rendered in the dashboard header.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceStats {
    pub total_documents: usize,
    pub active_projects: usize,
    pub documents_updated_this_week: usize,
    pub open_tasks: usize,
}

/// Compute the dashboard counters from both collections.
pub fn workspace_stats(state: &AppState) -> Result<WorkspaceStats, StoreError> {
    let documents = state.store.list_documents()?;
    let projects = state.store.list_projects()?;
    let week_ago = Utc::now() - Duration::days(7);

    Ok(WorkspaceStats {
        total_documents: documents.len(),
        active_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
        documents_updated_this_week: documents
            .iter()
            .filter(|d| d.updated_at > week_ago)
            .count(),
        open_tasks: projects
            .iter()
            .flat_map(|p| &p.tasks)
            .filter(|t| t.status != TaskStatus::Done)
            .count(),
    })
}

#[cfg(test)]
mod tests {
    use wikiflow_shared::types::TaskStatus;
    use wikiflow_store::NewTask;

    use super::*;
    use crate::state::AppState;

    fn open_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::open_at(&dir.path().join("app.db")).unwrap();
        (dir, state)
    }

    #[test]
    fn stats_cover_seeded_collections() {
        let (_dir, state) = open_state();

        let stats = workspace_stats(&state).unwrap();
        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.active_projects, 2);
        assert_eq!(stats.documents_updated_this_week, 2);
        // Three of the four seeded tasks sit outside the Done lane.
        assert_eq!(stats.open_tasks, 3);
    }

    #[test]
    fn board_flow_add_then_move() {
        let (_dir, state) = open_state();
        let project = list_projects(&state).unwrap()[1].clone();

        let updated = add_task(
            &state,
            project.id,
            NewTask {
                title: "Rotate access keys".into(),
                status: TaskStatus::Todo,
                ..Default::default()
            },
        )
        .unwrap();
        let task = updated.tasks.last().unwrap().clone();
        // Default persona is the admin.
        assert_eq!(task.assignee_id.as_deref(), Some("u1"));

        let moved = move_task(&state, project.id, task.id, TaskStatus::InProgress).unwrap();
        let found = moved.tasks.iter().find(|t| t.id == task.id).unwrap();
        assert_eq!(found.status, TaskStatus::InProgress);
    }
}
