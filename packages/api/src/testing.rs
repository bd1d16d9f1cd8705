//! In-process fake of the LawPal API for unit tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, ComplaintForm, ComplaintType, Credentials, Document, PasswordChange,
    ProfilePicture, ProfileUpdate, Registration, UserInfo,
};

pub const TOKEN: &str = "test-token";

#[derive(Default)]
struct FakeState {
    documents: Vec<Document>,
    user: UserInfo,
    calls: Vec<&'static str>,
    tokens: Vec<String>,
    failing: HashSet<&'static str>,
    next_id: u32,
}

/// Records every call and serves a small in-memory document list.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().user = UserInfo {
            id: Some("u1".to_string()),
            name: "Jane Doe".to_string(),
            email: "jane@law.example".to_string(),
            profile_pic: None,
        };
        backend
    }

    pub fn with_documents(self, documents: Vec<Document>) -> Self {
        self.state.borrow_mut().documents = documents;
        self
    }

    /// Make every call to `operation` fail with a 500.
    pub fn fail(&self, operation: &'static str) {
        self.state.borrow_mut().failing.insert(operation);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| **c == operation)
            .count()
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.state.borrow().tokens.clone()
    }

    fn record(&self, operation: &'static str, token: Option<&str>) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(operation);
        if let Some(token) = token {
            state.tokens.push(token.to_string());
        }
        if state.failing.contains(operation) {
            return Err(ApiError::Status {
                status: 500,
                message: Some(format!("{operation} exploded")),
            });
        }
        Ok(())
    }

    fn auth_response(&self) -> AuthResponse {
        AuthResponse {
            token: TOKEN.to_string(),
            user: self.state.borrow().user.clone(),
        }
    }
}

pub fn document(id: &str, content: &str) -> Document {
    Document {
        id: id.to_string(),
        content: content.to_string(),
        title: None,
        created_at: None,
    }
}

pub fn filled_complaint() -> ComplaintForm {
    ComplaintForm {
        complaint_type: Some(ComplaintType::Theft),
        date_time: "2024-03-07T14:30".to_string(),
        location: "Main Street".to_string(),
        description: "My bicycle was stolen".to_string(),
        name: "Jane Doe".to_string(),
        contact: "555-0100".to_string(),
    }
}

impl Backend for FakeBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.record("login", None)?;
        Ok(self.auth_response())
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.record("register", None)?;
        {
            let mut state = self.state.borrow_mut();
            state.user.name = registration.name.clone();
            state.user.email = registration.email.clone();
        }
        Ok(self.auth_response())
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<UserInfo, ApiError> {
        self.record("update_profile", Some(token))?;
        let mut state = self.state.borrow_mut();
        state.user.name = update.name.clone();
        state.user.email = update.email.clone();
        Ok(state.user.clone())
    }

    async fn change_password(&self, token: &str, _change: &PasswordChange) -> Result<(), ApiError> {
        self.record("change_password", Some(token))
    }

    async fn upload_profile_picture(
        &self,
        token: &str,
        picture: ProfilePicture,
    ) -> Result<UserInfo, ApiError> {
        self.record("upload_profile_picture", Some(token))?;
        let mut state = self.state.borrow_mut();
        state.user.profile_pic = Some(format!("/uploads/{}", picture.file_name));
        Ok(state.user.clone())
    }

    async fn generate_document(&self, token: &str, form: &ComplaintForm) -> Result<String, ApiError> {
        self.record("generate_document", Some(token))?;
        Ok(format!(
            "COMPLAINT:\n\nFiled by {} regarding {}.",
            form.name, form.description
        ))
    }

    async fn list_documents(&self, token: &str) -> Result<Vec<Document>, ApiError> {
        self.record("list_documents", Some(token))?;
        Ok(self.state.borrow().documents.clone())
    }

    async fn save_document(&self, token: &str, content: &str) -> Result<(), ApiError> {
        self.record("save_document", Some(token))?;
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = format!("saved-{}", state.next_id);
        state.documents.push(document(&id, content));
        Ok(())
    }

    async fn update_document(&self, token: &str, id: &str, content: &str) -> Result<(), ApiError> {
        self.record("update_document", Some(token))?;
        let mut state = self.state.borrow_mut();
        match state.documents.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.content = content.to_string();
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                message: Some("Document not found".to_string()),
            }),
        }
    }

    async fn delete_document(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.record("delete_document", Some(token))?;
        self.state.borrow_mut().documents.retain(|d| d.id != id);
        Ok(())
    }
}
