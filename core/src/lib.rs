//! Client-side controller for a remote todo list.
//!
//! # Overview
//! `TodoListController` owns the local list of todo records and routes every
//! change through the HTTP API, keeping the list equal to what the server
//! last confirmed. Failures are reported to a `Diagnostics` sink and never
//! surface to the caller.
//!
//! # Design
//! - `TodoClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse` (host-does-IO).
//! - `Transport` performs the round-trip; `UreqTransport` is the default.
//! - The controller exposes each operation both as an async method and as a
//!   `begin_*` / `complete` pair for hosts that drive the I/O themselves.

pub mod client;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::Config;
pub use controller::{Operation, PendingRequest, TodoDraft, TodoListController, TodoListState};
pub use diagnostics::{Diagnostics, RecordedFailure, RecordingDiagnostics, TracingDiagnostics};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTodo, TodoId, TodoRecord, ToggleTodo};
pub use view::{ItemView, ListBody, ListView};

/// Controller wired to the default transport and diagnostics for `config`.
pub fn controller_for(config: &Config) -> TodoListController<UreqTransport> {
    TodoListController::new(
        TodoClient::new(&config.base_url),
        UreqTransport::new(),
        TracingDiagnostics,
    )
}
