//! Project and task repository.
//!
//! Task operations have no independent persistence path: each one reads the
//! owning project, produces a new task list and writes the whole project
//! collection back.

use chrono::Utc;
use uuid::Uuid;

use wikiflow_shared::types::TaskStatus;

use crate::database::{Store, KEY_PROJECTS};
use crate::error::{Result, StoreError};
use crate::models::{NewTask, Project, ProjectDraft, Task, User};
use crate::seed;

impl Store {
    /// Return the full project collection, seeding the store on first use.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        if let Some(projects) = self.load(KEY_PROJECTS)? {
            return Ok(projects);
        }

        let seeded = seed::initial_projects();
        self.save(KEY_PROJECTS, &seeded)?;
        tracing::info!(count = seeded.len(), "seeded project collection");
        Ok(seeded)
    }

    /// Create or update a project on behalf of `acting_user`.
    ///
    /// The create/update branch mirrors [`Store::save_document`], keyed on
    /// the draft id; updates refresh only `updated_at` (projects keep no
    /// history).
    pub fn save_project(&self, draft: ProjectDraft, acting_user: &User) -> Result<Project> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::Validation("project name must not be empty".into()));
        }

        let mut projects = self.list_projects()?;
        let now = Utc::now();

        let existing = draft.id.and_then(|id| projects.iter().position(|p| p.id == id));

        let saved = match existing {
            Some(index) => {
                let old = &projects[index];
                let updated = Project {
                    id: old.id,
                    name: draft.name,
                    description: draft.description,
                    status: draft.status,
                    members: draft.members,
                    tasks: draft.tasks,
                    created_by: old.created_by.clone(),
                    created_at: old.created_at,
                    updated_at: now,
                };

                projects[index] = updated.clone();
                updated
            }
            None => {
                let project = Project {
                    id: Uuid::new_v4(),
                    name: draft.name,
                    description: draft.description,
                    status: draft.status,
                    members: draft.members,
                    tasks: draft.tasks,
                    created_by: acting_user.name.clone(),
                    created_at: now,
                    updated_at: now,
                };

                projects.insert(0, project.clone());
                project
            }
        };

        self.save(KEY_PROJECTS, &projects)?;
        tracing::debug!(project_id = %saved.id, tasks = saved.tasks.len(), "project saved");
        Ok(saved)
    }

    /// Append a task to a project's board.
    ///
    /// The task gets a fresh id, `created_at = now` and defaults its
    /// assignee to the acting user.
    pub fn add_task(&self, project_id: Uuid, new_task: NewTask, acting_user: &User) -> Result<Project> {
        if new_task.title.trim().is_empty() {
            return Err(StoreError::Validation("task title must not be empty".into()));
        }

        let task = Task {
            id: Uuid::new_v4(),
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            priority: new_task.priority,
            assignee_id: Some(acting_user.id.clone()),
            due_date: new_task.due_date,
            created_at: Utc::now(),
        };

        self.mutate_project(project_id, |project| {
            project.tasks.push(task);
            Ok(())
        })
    }

    /// Move a task to another lane, leaving every other field untouched.
    pub fn move_task(&self, project_id: Uuid, task_id: Uuid, new_status: TaskStatus) -> Result<Project> {
        self.mutate_project(project_id, |project| {
            let task = project
                .tasks
                .iter_mut()
                .find(|t| t.id == task_id)
                .ok_or(StoreError::NotFound)?;
            task.status = new_status;
            Ok(())
        })
    }

    /// Remove a task from its project.
    pub fn remove_task(&self, project_id: Uuid, task_id: Uuid) -> Result<Project> {
        self.mutate_project(project_id, |project| {
            let before = project.tasks.len();
            project.tasks.retain(|t| t.id != task_id);
            if project.tasks.len() == before {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
    }

    /// Remove a project by id.  Returns whether a record was removed.
    pub fn delete_project(&self, id: Uuid) -> Result<bool> {
        let mut projects = self.list_projects()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);

        let removed = projects.len() != before;
        if removed {
            self.save(KEY_PROJECTS, &projects)?;
        }
        Ok(removed)
    }

    /// Apply `mutate` to the project with `project_id`, refresh its
    /// `updated_at` and persist the whole collection.  Nothing is written
    /// when `mutate` fails.
    fn mutate_project<F>(&self, project_id: Uuid, mutate: F) -> Result<Project>
    where
        F: FnOnce(&mut Project) -> Result<()>,
    {
        let mut projects = self.list_projects()?;
        let index = projects
            .iter()
            .position(|p| p.id == project_id)
            .ok_or(StoreError::NotFound)?;

        mutate(&mut projects[index])?;
        projects[index].updated_at = Utc::now();

        let project = projects[index].clone();
        self.save(KEY_PROJECTS, &projects)?;
        Ok(project)
    }
}
