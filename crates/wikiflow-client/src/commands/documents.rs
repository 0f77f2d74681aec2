//! Document commands and list-view helpers.

use tracing::info;
use uuid::Uuid;

use wikiflow_shared::permissions;
use wikiflow_store::{Document, DocumentDraft, StoreError, User};

use crate::state::AppState;

/// Return every document, bootstrapping the collection on first use.
pub fn list_documents(state: &AppState) -> Result<Vec<Document>, StoreError> {
    state.store.list_documents()
}

/// Persist a draft on behalf of the current user.
pub fn save_document(state: &AppState, draft: DocumentDraft) -> Result<Document, StoreError> {
    let user = state.store.current_user(&state.directory)?;
    let doc = state.store.save_document(draft, &user)?;
    info!(doc_id = %doc.id, title = %doc.title, "document saved");
    Ok(doc)
}

/// Remove a document by id.
pub fn delete_document(state: &AppState, id: Uuid) -> Result<bool, StoreError> {
    state.store.delete_document(id)
}

/// Whether `user` may edit `doc`.  The UI gates the edit button on this;
/// it is recomputed on every render, never stored.
pub fn can_edit(user: &User, doc: &Document) -> bool {
    permissions::can_edit(user.role, doc.access_level)
}

/// Case-insensitive search over titles and tags, combined with an optional
/// category filter.  `category = None` matches every category.
pub fn filter_documents<'a>(
    documents: &'a [Document],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a Document> {
    let needle = query.to_lowercase();

    documents
        .iter()
        .filter(|doc| {
            let matches_query = needle.is_empty()
                || doc.title.to_lowercase().contains(&needle)
                || doc.tags.iter().any(|t| t.to_lowercase().contains(&needle));
            let matches_category = category.map_or(true, |c| doc.category == c);
            matches_query && matches_category
        })
        .collect()
}

/// Distinct categories in first-seen order, for the filter bar.
pub fn categories(documents: &[Document]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for doc in documents {
        if !seen.contains(&doc.category) {
            seen.push(doc.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use wikiflow_store::DocumentDraft;

    use super::*;
    use crate::state::AppState;

    fn open_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::open_at(&dir.path().join("app.db")).unwrap();
        (dir, state)
    }

    #[test]
    fn seeded_update_keeps_original_content_in_history() {
        let (_dir, state) = open_state();

        let docs = list_documents(&state).unwrap();
        assert_eq!(docs.len(), 2);
        let seeded = docs[0].clone();

        let mut draft = DocumentDraft::from_document(&seeded);
        draft.title = "X".into();
        draft.content = "Y".into();
        let saved = save_document(&state, draft).unwrap();

        assert_eq!(saved.history[0].content, seeded.content);
        assert_eq!(list_documents(&state).unwrap()[0].title, "X");
    }

    #[test]
    fn created_documents_carry_the_current_user() {
        let (_dir, state) = open_state();
        state.store.switch_user(&state.directory, "u2").unwrap();

        let doc = save_document(
            &state,
            DocumentDraft {
                title: "Release Checklist".into(),
                content: "# Steps".into(),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(doc.created_by, "Marcus Lee");
    }

    #[test]
    fn filter_matches_titles_tags_and_category() {
        let (_dir, state) = open_state();
        let docs = list_documents(&state).unwrap();

        let by_tag = filter_documents(&docs, "onboarding", None);
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].title, "Employee Onboarding Guide");

        let by_title = filter_documents(&docs, "roadmap", None);
        assert_eq!(by_title.len(), 1);

        let by_category = filter_documents(&docs, "", Some("Product"));
        assert_eq!(by_category.len(), 1);

        assert!(filter_documents(&docs, "onboarding", Some("Product")).is_empty());
        assert_eq!(filter_documents(&docs, "", None).len(), 2);
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let (_dir, state) = open_state();
        let docs = list_documents(&state).unwrap();

        assert_eq!(
            categories(&docs),
            vec!["Human Resources".to_string(), "Product".to_string()]
        );
    }
}
