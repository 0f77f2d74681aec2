//! Domain model structs persisted in the local key-value store.
//!
//! Every struct derives `Serialize` and `Deserialize` with a camelCase field
//! layout, so the stored JSON can be handed directly to the UI layer.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wikiflow_shared::constants::{DEFAULT_CATEGORY, MAX_ATTACHMENT_SIZE};
use wikiflow_shared::types::{ProjectStatus, TaskPriority, TaskStatus, UserRole};

use crate::error::{Result, StoreError};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A workspace persona.  The set of users is static configuration; records
/// are never created or destroyed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable persona identifier.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: String,
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// An immutable snapshot of a document's prior state.  Append-only, never
/// mutated or deleted once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocVersion {
    pub version_id: Uuid,
    pub content: String,
    pub updated_at: DateTime<Utc>,
    /// Display name of the author, snapshotted at write time.
    pub updated_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_summary: Option<String>,
}

/// A file stored inline with its owning document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: Uuid,
    /// Original file name.
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Base64-encoded file bytes.
    pub data: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Attachment {
    /// Build an attachment from raw bytes.
    ///
    /// Files above [`MAX_ATTACHMENT_SIZE`] are rejected at intake, never
    /// truncated.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Result<Self> {
        if bytes.len() > MAX_ATTACHMENT_SIZE {
            return Err(StoreError::AttachmentTooLarge {
                size: bytes.len(),
                max: MAX_ATTACHMENT_SIZE,
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes: bytes.len() as u64,
            data: BASE64.encode(bytes),
            uploaded_at: Utc::now(),
        })
    }

    /// Decode the inline data back to raw bytes.
    pub fn data_bytes(&self) -> Result<Vec<u8>> {
        Ok(BASE64.decode(&self.data)?)
    }
}

/// A knowledge-base document with markdown content and full version history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    /// Current markdown body.
    pub content: String,
    pub tags: Vec<String>,
    pub category: String,
    /// Display name of the creator, snapshotted at creation.  Renaming a
    /// user does not retroactively change authorship records.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Minimum role required to edit.
    pub access_level: UserRole,
    /// Prior states, newest first.  Never contains the current content.
    #[serde(default)]
    pub history: Vec<DocVersion>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Document {
    /// Look up a historical snapshot by version id.
    pub fn version(&self, version_id: Uuid) -> Option<&DocVersion> {
        self.history.iter().find(|v| v.version_id == version_id)
    }
}

/// Caller-supplied fields for [`Store::save_document`].
///
/// A draft whose `id` matches a stored record updates it; `None` or an
/// unknown id creates a new record with a fresh id.
///
/// [`Store::save_document`]: crate::database::Store::save_document
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: String,
    pub access_level: UserRole,
    pub attachments: Vec<Attachment>,
}

impl Default for DocumentDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            category: DEFAULT_CATEGORY.into(),
            access_level: UserRole::default(),
            attachments: Vec::new(),
        }
    }
}

impl DocumentDraft {
    /// Start a draft for editing an existing document.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: Some(doc.id),
            title: doc.title.clone(),
            content: doc.content.clone(),
            tags: doc.tags.clone(),
            category: doc.category.clone(),
            access_level: doc.access_level,
            attachments: doc.attachments.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A kanban card.  Owned exclusively by its parent [`Project`]; there are no
/// cross-project task references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Persona id of the assignee, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a task being added to a lane.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    /// Target lane.
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
}

/// A tracked project owning an ordered list of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Persona ids of project members.
    pub members: Vec<String>,
    pub tasks: Vec<Task>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for [`Store::save_project`], mirroring
/// [`DocumentDraft`].
///
/// [`Store::save_project`]: crate::database::Store::save_project
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub members: Vec<String>,
    pub tasks: Vec<Task>,
}

impl ProjectDraft {
    /// Start a draft for editing an existing project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            members: project.members.clone(),
            tasks: project.tasks.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_at_cap_is_accepted() {
        let bytes = vec![0u8; MAX_ATTACHMENT_SIZE];
        let attachment = Attachment::from_bytes("handbook.pdf", "application/pdf", &bytes).unwrap();
        assert_eq!(attachment.size_bytes, MAX_ATTACHMENT_SIZE as u64);
        assert_eq!(attachment.data_bytes().unwrap(), bytes);
    }

    #[test]
    fn attachment_over_cap_is_rejected() {
        let bytes = vec![0u8; MAX_ATTACHMENT_SIZE + 1];
        let err = Attachment::from_bytes("big.bin", "application/octet-stream", &bytes);
        assert!(matches!(
            err,
            Err(StoreError::AttachmentTooLarge { size, .. }) if size == MAX_ATTACHMENT_SIZE + 1
        ));
    }

    #[test]
    fn version_lookup_finds_snapshot() {
        let version = DocVersion {
            version_id: Uuid::new_v4(),
            content: "old".into(),
            updated_at: Utc::now(),
            updated_by: "Olivia Chen".into(),
            change_summary: None,
        };
        let doc = Document {
            id: Uuid::new_v4(),
            title: "t".into(),
            content: "new".into(),
            tags: Vec::new(),
            category: "General".into(),
            created_by: "Olivia Chen".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            access_level: UserRole::Viewer,
            history: vec![version.clone()],
            attachments: Vec::new(),
        };

        assert_eq!(doc.version(version.version_id), Some(&version));
        assert_eq!(doc.version(Uuid::new_v4()), None);
    }
}
