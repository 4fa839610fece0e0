//! What the list screen shows for a given controller state. Markup and
//! styling belong to the host; this only decides which pieces are present.

use crate::controller::TodoListState;
use crate::types::{TodoId, TodoRecord};

pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above.";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const SUBMIT_LABEL: &str = "Add Todo";
pub const SUBMITTING_LABEL: &str = "Adding...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub body: ListBody<'a>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody<'a> {
    Loading,
    Empty,
    Items(Vec<ItemView<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub id: &'a TodoId,
    pub title: &'a str,
    /// Present only for a non-empty description.
    pub description: Option<&'a str>,
    pub completed: bool,
}

impl<'a> From<&'a TodoRecord> for ItemView<'a> {
    fn from(record: &'a TodoRecord) -> Self {
        Self {
            id: &record.id,
            title: &record.title,
            description: record.description.as_deref().filter(|d| !d.is_empty()),
            completed: record.completed,
        }
    }
}

impl<'a> ListView<'a> {
    pub fn new(state: &'a TodoListState) -> Self {
        let body = if state.is_loading {
            ListBody::Loading
        } else if state.items.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Items(state.items.iter().map(ItemView::from).collect())
        };
        Self {
            body,
            submit_label: if state.is_submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_enabled: !state.is_submitting,
        }
    }
}
