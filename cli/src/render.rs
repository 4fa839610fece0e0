//! Plain-text rendering of a `ListView`.

use std::fmt::Write;

use todo_core::view::{EMPTY_MESSAGE, LOADING_MESSAGE};
use todo_core::{ListBody, ListView};

pub fn render(view: &ListView<'_>) -> String {
    let mut out = String::new();
    match &view.body {
        ListBody::Loading => out.push_str(LOADING_MESSAGE),
        ListBody::Empty => out.push_str(EMPTY_MESSAGE),
        ListBody::Items(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let mark = if item.completed { 'x' } else { ' ' };
                let _ = write!(out, "[{mark}] {}  {}", item.id, item.title);
                if let Some(description) = item.description {
                    let _ = write!(out, "\n      {description}");
                }
            }
        }
    }
    out
}
