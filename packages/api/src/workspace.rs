//! Dashboard documents: the remote calls and the state they feed.
//!
//! [`DocumentService`] makes the calls and hands back what the server said.
//! It holds no document state. [`DocumentWorkspace`] is the dashboard's
//! state; each of its update methods applies one finished result and touches
//! only the fields that result owns. An action that finishes late therefore
//! cannot undo a change another action already applied.
//!
//! | Action   | Service call              | Applied with |
//! |----------|---------------------------|--------------|
//! | refresh  | `list`                    | [`DocumentWorkspace::replace_documents`] |
//! | generate | `generate`                | [`DocumentWorkspace::begin_generation`], then `generated` or `generation_failed` |
//! | save     | `save` (save, re-list)    | [`DocumentWorkspace::saved`] |
//! | update   | `update` (update, re-list)| [`DocumentWorkspace::replace_documents`] |
//! | delete   | `delete`                  | [`DocumentWorkspace::removed`] |
//!
//! A failed call applies nothing, so the state stays as it was.

use std::collections::HashSet;

use store::{KeyValueStore, SessionCache};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{ComplaintForm, Document};

/// Document calls authenticated with the cached token.
#[derive(Clone)]
pub struct DocumentService<B: Backend, S: KeyValueStore> {
    backend: B,
    cache: SessionCache<S>,
}

impl<B: Backend, S: KeyValueStore> DocumentService<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            cache: SessionCache::new(store),
        }
    }

    pub async fn list(&self) -> Result<Vec<Document>, ApiError> {
        let token = self.token().await?;
        let documents = self.backend.list_documents(&token).await?;
        tracing::debug!("Loaded {} documents", documents.len());
        Ok(documents)
    }

    /// Validate the form, then issue exactly one generate call.
    pub async fn generate(&self, form: &ComplaintForm) -> Result<String, ApiError> {
        form.validate()?;
        let token = self.token().await?;
        let text = self.backend.generate_document(&token, form).await?;
        tracing::info!("Generated document ({} chars)", text.len());
        Ok(text)
    }

    /// Save `content` to history and return the fresh list.
    pub async fn save(&self, content: &str) -> Result<Vec<Document>, ApiError> {
        let token = self.token().await?;
        self.backend.save_document(&token, content).await?;
        let documents = self.backend.list_documents(&token).await?;
        tracing::info!("Saved draft to history");
        Ok(documents)
    }

    pub async fn update(&self, id: &str, content: &str) -> Result<Vec<Document>, ApiError> {
        let token = self.token().await?;
        self.backend.update_document(&token, id, content).await?;
        let documents = self.backend.list_documents(&token).await?;
        tracing::info!("Updated document {}", id);
        Ok(documents)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let token = self.token().await?;
        self.backend.delete_document(&token, id).await?;
        tracing::info!("Deleted document {}", id);
        Ok(())
    }

    async fn token(&self) -> Result<String, ApiError> {
        self.cache.token().await.ok_or(ApiError::Unauthenticated)
    }
}

/// The saved document list and the current generated draft.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentWorkspace {
    documents: Vec<Document>,
    draft: Option<String>,
    /// Ids deleted here; listings fetched before the delete landed still carry them.
    deleted: HashSet<String>,
}

impl DocumentWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Edit the draft text before it is saved.
    pub fn set_draft(&mut self, text: String) {
        self.draft = Some(text);
    }

    pub fn replace_documents(&mut self, documents: Vec<Document>) {
        let deleted = &self.deleted;
        self.documents = documents
            .into_iter()
            .filter(|doc| !deleted.contains(&doc.id))
            .collect();
    }

    /// Clear the draft for a new generation and return the one it replaces.
    pub fn begin_generation(&mut self) -> Option<String> {
        self.draft.take()
    }

    pub fn generated(&mut self, text: String) {
        self.draft = Some(text);
    }

    /// Put back the draft [`begin_generation`](Self::begin_generation)
    /// cleared, unless something else set one in the meantime.
    pub fn generation_failed(&mut self, previous: Option<String>) {
        if self.draft.is_none() {
            self.draft = previous;
        }
    }

    /// Apply a successful save of `content`. The draft is cleared only if it
    /// still holds the text that was saved.
    pub fn saved(&mut self, content: &str, documents: Vec<Document>) {
        self.replace_documents(documents);
        if self.draft.as_deref() == Some(content) {
            self.draft = None;
        }
    }

    pub fn removed(&mut self, id: &str) {
        self.deleted.insert(id.to_string());
        self.documents.retain(|doc| doc.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{document, filled_complaint, FakeBackend, TOKEN};
    use store::MemoryStore;

    async fn signed_in(backend: &FakeBackend) -> DocumentService<FakeBackend, MemoryStore> {
        let store = MemoryStore::new();
        store.set(store::session::TOKEN_KEY, TOKEN).await.unwrap();
        DocumentService::new(backend.clone(), store)
    }

    async fn loaded(service: &DocumentService<FakeBackend, MemoryStore>) -> DocumentWorkspace {
        let mut workspace = DocumentWorkspace::new();
        workspace.replace_documents(service.list().await.unwrap());
        workspace
    }

    fn ids(workspace: &DocumentWorkspace) -> Vec<&str> {
        workspace.documents().iter().map(|d| d.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_refresh_loads_documents() {
        let backend = FakeBackend::new().with_documents(vec![document("a", "one")]);
        let service = signed_in(&backend).await;

        let workspace = loaded(&service).await;
        assert_eq!(workspace.documents().len(), 1);
        assert_eq!(backend.tokens_seen(), vec![TOKEN.to_string()]);
    }

    #[tokio::test]
    async fn test_generate_issues_exactly_one_request() {
        let backend = FakeBackend::new();
        let service = signed_in(&backend).await;
        let mut workspace = DocumentWorkspace::new();

        workspace.begin_generation();
        let text = service.generate(&filled_complaint()).await.unwrap();
        workspace.generated(text.clone());

        assert!(text.starts_with("COMPLAINT:"));
        assert_eq!(workspace.draft(), Some(text.as_str()));
        assert_eq!(backend.calls(), vec!["generate_document"]);
    }

    #[tokio::test]
    async fn test_generate_rejects_incomplete_form_without_calling() {
        let backend = FakeBackend::new();
        let service = signed_in(&backend).await;
        let mut form = filled_complaint();
        form.contact.clear();

        let err = service.generate(&form).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_generation_clears_draft_while_in_flight() {
        let mut workspace = DocumentWorkspace::new();
        workspace.set_draft("earlier draft".to_string());

        let previous = workspace.begin_generation();
        assert_eq!(previous.as_deref(), Some("earlier draft"));
        assert!(workspace.draft().is_none());
    }

    #[tokio::test]
    async fn test_failed_generate_keeps_previous_draft() {
        let backend = FakeBackend::new();
        let service = signed_in(&backend).await;
        let mut workspace = DocumentWorkspace::new();
        workspace.set_draft("earlier draft".to_string());
        backend.fail("generate_document");

        let previous = workspace.begin_generation();
        assert!(service.generate(&filled_complaint()).await.is_err());
        workspace.generation_failed(previous);

        assert_eq!(workspace.draft(), Some("earlier draft"));
    }

    #[test]
    fn test_failed_generation_does_not_clobber_newer_draft() {
        let mut workspace = DocumentWorkspace::new();
        workspace.set_draft("old".to_string());

        let previous = workspace.begin_generation();
        workspace.set_draft("typed meanwhile".to_string());
        workspace.generation_failed(previous);

        assert_eq!(workspace.draft(), Some("typed meanwhile"));
    }

    #[tokio::test]
    async fn test_save_lists_new_entry_and_clears_draft() {
        let backend = FakeBackend::new().with_documents(vec![document("a", "one")]);
        let service = signed_in(&backend).await;
        let mut workspace = loaded(&service).await;
        workspace.generated(service.generate(&filled_complaint()).await.unwrap());

        let content = workspace.draft().unwrap().to_string();
        let documents = service.save(&content).await.unwrap();
        workspace.saved(&content, documents);

        assert_eq!(workspace.documents().len(), 2);
        assert!(workspace
            .documents()
            .iter()
            .any(|d| d.content.contains("My bicycle was stolen")));
        assert!(workspace.draft().is_none());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_state() {
        let backend = FakeBackend::new().with_documents(vec![document("a", "one")]);
        let service = signed_in(&backend).await;
        let mut workspace = loaded(&service).await;
        workspace.set_draft("draft".to_string());
        let before = workspace.clone();
        backend.fail("save_document");

        let err = service.save("draft").await.unwrap_err();
        assert_eq!(err.user_message("Failed to save document"), "save_document exploded");
        assert_eq!(workspace, before);
    }

    #[tokio::test]
    async fn test_update_relists() {
        let backend = FakeBackend::new().with_documents(vec![document("a", "one")]);
        let service = signed_in(&backend).await;
        let mut workspace = loaded(&service).await;

        workspace.replace_documents(service.update("a", "revised").await.unwrap());
        assert_eq!(workspace.documents()[0].content, "revised");
        assert_eq!(backend.call_count("list_documents"), 2);
    }

    #[tokio::test]
    async fn test_failed_update_is_reported() {
        let backend = FakeBackend::new().with_documents(vec![document("a", "one")]);
        let service = signed_in(&backend).await;

        let err = service.update("missing", "x").await.unwrap_err();
        assert_eq!(err.user_message("Failed to update document"), "Document not found");
        assert_eq!(backend.call_count("list_documents"), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_id_locally() {
        let backend =
            FakeBackend::new().with_documents(vec![document("a", "one"), document("b", "two")]);
        let service = signed_in(&backend).await;
        let mut workspace = loaded(&service).await;

        service.delete("a").await.unwrap();
        workspace.removed("a");

        assert_eq!(ids(&workspace), vec!["b"]);
        assert_eq!(backend.call_count("list_documents"), 1);
    }

    #[tokio::test]
    async fn test_failed_delete_is_reported() {
        let backend = FakeBackend::new().with_documents(vec![document("a", "one")]);
        let service = signed_in(&backend).await;
        backend.fail("delete_document");

        assert!(service.delete("a").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_during_generation_stays_deleted() {
        let backend =
            FakeBackend::new().with_documents(vec![document("a", "one"), document("b", "two")]);
        let service = signed_in(&backend).await;
        let mut workspace = loaded(&service).await;

        // generation starts, then a delete completes before it returns
        workspace.begin_generation();
        service.delete("a").await.unwrap();
        workspace.removed("a");
        workspace.generated(service.generate(&filled_complaint()).await.unwrap());

        assert_eq!(ids(&workspace), vec!["b"]);
        assert!(workspace.draft().is_some());
    }

    #[tokio::test]
    async fn test_save_overlapping_delete_keeps_both_changes() {
        let backend =
            FakeBackend::new().with_documents(vec![document("a", "one"), document("b", "two")]);
        let service = signed_in(&backend).await;
        let mut workspace = loaded(&service).await;
        workspace.set_draft("draft text".to_string());

        // the save's listing is fetched before the delete reaches the server
        let listing = service.save("draft text").await.unwrap();
        service.delete("a").await.unwrap();
        workspace.removed("a");
        workspace.saved("draft text", listing);

        assert!(!ids(&workspace).contains(&"a"));
        assert!(workspace.documents().iter().any(|d| d.content == "draft text"));
        assert!(workspace.draft().is_none());
    }

    #[tokio::test]
    async fn test_stale_refresh_does_not_resurrect_deleted() {
        let backend = FakeBackend::new().with_documents(vec![document("a", "one")]);
        let service = signed_in(&backend).await;
        let mut workspace = DocumentWorkspace::new();

        let stale = service.list().await.unwrap();
        service.delete("a").await.unwrap();
        workspace.removed("a");
        workspace.replace_documents(stale);

        assert!(workspace.documents().is_empty());
    }

    #[tokio::test]
    async fn test_actions_need_a_token() {
        let backend = FakeBackend::new();
        let service = DocumentService::new(backend.clone(), MemoryStore::new());

        assert!(matches!(service.list().await, Err(ApiError::Unauthenticated)));
        assert!(matches!(
            service.save("text").await,
            Err(ApiError::Unauthenticated)
        ));
        assert!(backend.calls().is_empty());
    }
}
