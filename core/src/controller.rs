//! The todo list controller: single owner of the local list and the creation
//! form, mediating every mutation through the remote service.
//!
//! # Design
//! Every operation exists in a split form and an async form. The split form
//! (`begin_*` then `complete`) hands the caller a `PendingRequest` to execute
//! however it likes, so independent requests may be in flight at once and
//! resolve in any order. The async form runs the same steps through the
//! controller's own `Transport`.
//!
//! Responses apply in arrival order keyed by id, so for two requests racing on
//! the same record the last response received wins. Nothing is applied
//! optimistically: the list only ever changes from a successful response.

use std::collections::HashSet;
use std::fmt;

use crate::client::TodoClient;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CreateTodo, TodoId, TodoRecord, ToggleTodo};

/// Which controller operation a request belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    LoadAll,
    Create,
    /// `completed` is the value requested from the server.
    Toggle { id: TodoId, completed: bool },
    Delete { id: TodoId },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::LoadAll => f.write_str("load_all"),
            Operation::Create => f.write_str("create"),
            Operation::Toggle { id, completed } => write!(f, "toggle({id} -> {completed})"),
            Operation::Delete { id } => write!(f, "delete({id})"),
        }
    }
}

/// A request issued by `begin_*`, waiting to be executed and handed back to
/// `TodoListController::complete`.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub operation: Operation,
    pub request: HttpRequest,
}

/// Local projection of the server's list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    /// Newest-created first, otherwise in server order. One record per id.
    pub items: Vec<TodoRecord>,
    /// True only while a full-list fetch is in flight.
    pub is_loading: bool,
    /// True only while a create request is in flight.
    pub is_submitting: bool,
}

/// The creation form's input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
}

/// Owns the local todo list and the creation form. `T` moves requests over
/// the network; `D` receives every failure.
pub struct TodoListController<T, D = TracingDiagnostics> {
    client: TodoClient,
    transport: T,
    diagnostics: D,
    state: TodoListState,
    draft: TodoDraft,
    loads_in_flight: usize,
}

impl<T: Transport, D: Diagnostics> TodoListController<T, D> {
    pub fn new(client: TodoClient, transport: T, diagnostics: D) -> Self {
        Self {
            client,
            transport,
            diagnostics,
            state: TodoListState::default(),
            draft: TodoDraft::default(),
            loads_in_flight: 0,
        }
    }

    /// Build a controller and populate it with one full fetch.
    pub async fn initialize(client: TodoClient, transport: T, diagnostics: D) -> Self {
        let mut controller = Self::new(client, transport, diagnostics);
        controller.load_all().await;
        controller
    }

    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    pub fn items(&self) -> &[TodoRecord] {
        &self.state.items
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn draft(&self) -> &TodoDraft {
        &self.draft
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Fetch the full list and replace `items` with it.
    pub async fn load_all(&mut self) -> bool {
        let pending = self.begin_load();
        self.dispatch(pending).await
    }

    /// Create a todo. Blank titles and repeat submissions are ignored without
    /// a request.
    pub async fn create_todo(&mut self, title: &str, description: &str) -> bool {
        match self.begin_create(title, description) {
            Some(pending) => self.dispatch(pending).await,
            None => false,
        }
    }

    /// Create a todo from the current draft fields.
    pub async fn submit_draft(&mut self) -> bool {
        let TodoDraft { title, description } = self.draft.clone();
        self.create_todo(&title, &description).await
    }

    /// Ask the server to flip `completed` for `id`.
    pub async fn toggle_completion(&mut self, id: &TodoId, completed: bool) -> bool {
        match self.begin_toggle(id, completed) {
            Some(pending) => self.dispatch(pending).await,
            None => false,
        }
    }

    pub async fn delete_todo(&mut self, id: &TodoId) -> bool {
        let pending = self.begin_delete(id);
        self.dispatch(pending).await
    }

    async fn dispatch(&mut self, pending: PendingRequest) -> bool {
        let PendingRequest { operation, request } = pending;
        let outcome = self.transport.execute(request).await;
        self.complete(operation, outcome)
    }

    /// `is_loading` stays set until every overlapping fetch has completed;
    /// the items come from whichever response is applied last.
    pub fn begin_load(&mut self) -> PendingRequest {
        self.loads_in_flight += 1;
        self.state.is_loading = true;
        PendingRequest {
            operation: Operation::LoadAll,
            request: self.client.build_list_todos(),
        }
    }

    pub fn begin_create(&mut self, title: &str, description: &str) -> Option<PendingRequest> {
        if title.trim().is_empty() {
            tracing::debug!("ignoring create with blank title");
            return None;
        }
        if self.state.is_submitting {
            tracing::debug!("ignoring create while another is in flight");
            return None;
        }
        let input = CreateTodo {
            title: title.to_string(),
            description: description.to_string(),
        };
        let request = self.build(Operation::Create, |client| client.build_create_todo(&input))?;
        self.state.is_submitting = true;
        Some(PendingRequest {
            operation: Operation::Create,
            request,
        })
    }

    /// `completed` is the record's current value; the request asks for its
    /// negation.
    pub fn begin_toggle(&mut self, id: &TodoId, completed: bool) -> Option<PendingRequest> {
        let operation = Operation::Toggle {
            id: id.clone(),
            completed: !completed,
        };
        let input = ToggleTodo { completed: !completed };
        let request = self.build(operation.clone(), |client| client.build_toggle_todo(id, &input))?;
        Some(PendingRequest { operation, request })
    }

    pub fn begin_delete(&mut self, id: &TodoId) -> PendingRequest {
        PendingRequest {
            operation: Operation::Delete { id: id.clone() },
            request: self.client.build_delete_todo(id),
        }
    }

    /// Apply the outcome of a request issued by `begin_*`. Returns whether the
    /// change was applied. In-flight flags are cleared whatever the outcome.
    pub fn complete(&mut self, operation: Operation, outcome: Result<HttpResponse, ApiError>) -> bool {
        match operation {
            Operation::LoadAll => {
                self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
                self.state.is_loading = self.loads_in_flight > 0;
            }
            Operation::Create => self.state.is_submitting = false,
            Operation::Toggle { .. } | Operation::Delete { .. } => {}
        }
        match self.apply(&operation, outcome) {
            Ok(()) => true,
            Err(err) => {
                self.diagnostics.operation_failed(&operation, &err);
                false
            }
        }
    }

    fn build(
        &self,
        operation: Operation,
        build: impl FnOnce(&TodoClient) -> Result<HttpRequest, ApiError>,
    ) -> Option<HttpRequest> {
        match build(&self.client) {
            Ok(request) => Some(request),
            Err(err) => {
                self.diagnostics.operation_failed(&operation, &err);
                None
            }
        }
    }

    fn apply(&mut self, operation: &Operation, outcome: Result<HttpResponse, ApiError>) -> Result<(), ApiError> {
        let response = outcome?;
        match operation {
            Operation::LoadAll => {
                let items = self.client.parse_list_todos(response)?;
                self.replace_items(items);
            }
            Operation::Create => {
                let record = self.client.parse_create_todo(response)?;
                tracing::debug!(id = %record.id, "todo created");
                self.state.items.retain(|t| t.id != record.id);
                self.state.items.insert(0, record);
                self.draft = TodoDraft::default();
            }
            Operation::Toggle { id, .. } => {
                let record = self.client.parse_toggle_todo(response)?;
                if record.id != *id {
                    return Err(ApiError::DeserializationError(format!(
                        "toggle of {id} answered with record {}",
                        record.id
                    )));
                }
                match self.state.items.iter_mut().find(|t| &t.id == id) {
                    Some(slot) => {
                        tracing::debug!(%id, completed = record.completed, "todo updated");
                        *slot = record;
                    }
                    None => tracing::debug!(%id, "toggled todo is no longer listed"),
                }
            }
            Operation::Delete { id } => {
                self.client.parse_delete_todo(response)?;
                tracing::debug!(%id, "todo deleted");
                self.state.items.retain(|t| &t.id != id);
            }
        }
        Ok(())
    }

    fn replace_items(&mut self, items: Vec<TodoRecord>) {
        let mut seen = HashSet::with_capacity(items.len());
        let mut unique = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.id.clone()) {
                unique.push(item);
            } else {
                tracing::warn!(id = %item.id, "dropping duplicate id from list response");
            }
        }
        tracing::debug!(count = unique.len(), "todo list loaded");
        self.state.items = unique;
    }
}
