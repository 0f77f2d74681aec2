//! Document repository.
//!
//! Operations read the whole stored collection, modify it in memory and
//! write it back.  Every update prepends the pre-update state to the
//! document's history before the fields are overwritten, so the history
//! never contains the current content.

use chrono::Utc;
use uuid::Uuid;

use crate::database::{Store, KEY_DOCUMENTS};
use crate::error::{Result, StoreError};
use crate::models::{DocVersion, Document, DocumentDraft, User};
use crate::seed;

impl Store {
    /// Return the full document collection, seeding the store on first use.
    pub fn list_documents(&self) -> Result<Vec<Document>> {
        if let Some(docs) = self.load(KEY_DOCUMENTS)? {
            return Ok(docs);
        }

        let seeded = seed::initial_documents();
        self.save(KEY_DOCUMENTS, &seeded)?;
        tracing::info!(count = seeded.len(), "seeded document collection");
        Ok(seeded)
    }

    /// Create or update a document on behalf of `acting_user`.
    ///
    /// A draft with a known id updates the stored record, keeping its id,
    /// `created_at` and `created_by` and pushing the previous state onto the
    /// history.  Any other draft creates a new record at the front of the
    /// collection.  Empty titles and bodies are rejected before any state
    /// change.
    pub fn save_document(&self, draft: DocumentDraft, acting_user: &User) -> Result<Document> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::Validation("document title must not be empty".into()));
        }
        if draft.content.trim().is_empty() {
            return Err(StoreError::Validation("document content must not be empty".into()));
        }

        let mut docs = self.list_documents()?;
        let now = Utc::now();

        let existing = draft.id.and_then(|id| docs.iter().position(|d| d.id == id));

        let saved = match existing {
            Some(index) => {
                let old = &docs[index];

                let snapshot = DocVersion {
                    version_id: Uuid::new_v4(),
                    content: old.content.clone(),
                    updated_at: old.updated_at,
                    updated_by: old.created_by.clone(),
                    change_summary: None,
                };

                let mut history = Vec::with_capacity(old.history.len() + 1);
                history.push(snapshot);
                history.extend(old.history.iter().cloned());

                let updated = Document {
                    id: old.id,
                    title: draft.title,
                    content: draft.content,
                    tags: draft.tags,
                    category: draft.category,
                    created_by: old.created_by.clone(),
                    created_at: old.created_at,
                    updated_at: now,
                    access_level: draft.access_level,
                    history,
                    attachments: draft.attachments,
                };

                docs[index] = updated.clone();
                updated
            }
            None => {
                let doc = Document {
                    id: Uuid::new_v4(),
                    title: draft.title,
                    content: draft.content,
                    tags: draft.tags,
                    category: draft.category,
                    created_by: acting_user.name.clone(),
                    created_at: now,
                    updated_at: now,
                    access_level: draft.access_level,
                    history: Vec::new(),
                    attachments: draft.attachments,
                };

                // Most-recently-created first.
                docs.insert(0, doc.clone());
                doc
            }
        };

        self.save(KEY_DOCUMENTS, &docs)?;
        tracing::debug!(doc_id = %saved.id, versions = saved.history.len(), "document saved");
        Ok(saved)
    }

    /// Remove a document by id.  Returns whether a record was removed.
    ///
    /// Not reachable from the described UI surface, but supported at the
    /// repository level.
    pub fn delete_document(&self, id: Uuid) -> Result<bool> {
        let mut docs = self.list_documents()?;
        let before = docs.len();
        docs.retain(|d| d.id != id);

        let removed = docs.len() != before;
        if removed {
            self.save(KEY_DOCUMENTS, &docs)?;
        }
        Ok(removed)
    }
}
