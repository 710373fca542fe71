//! Rendering and the DOM seam.
//!
//! # Design
//! `render_columns` is a pure function from the item list to the two HTML
//! fragments; the templates group by the `pending` flag and tag every
//! control with `data-id` and `data-action` so click handling stays
//! delegated at the column level. Item content passes through askama's
//! HTML escaping.
//!
//! The [`Dom`] trait stands in for the fixed anchor points of the page —
//! the text input, the two column containers, and the error line. The
//! controller drives it; tests substitute a recording implementation.

use askama::Template;

use crate::types::{TodoId, TodoItem};

#[derive(Template)]
#[template(path = "pending_column.html")]
struct PendingColumn<'a> {
    items: Vec<&'a TodoItem>,
}

#[derive(Template)]
#[template(path = "completed_column.html")]
struct CompletedColumn<'a> {
    items: Vec<&'a TodoItem>,
}

/// The two rendered list fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHtml {
    pub pending: String,
    pub completed: String,
}

/// Render the item list into the pending and completed fragments.
///
/// An empty column renders a placeholder heading, so an empty list shows
/// the placeholder on both sides.
pub fn render_columns(items: &[TodoItem]) -> Result<ColumnHtml, askama::Error> {
    let (pending, completed): (Vec<&TodoItem>, Vec<&TodoItem>) =
        items.iter().partition(|item| item.pending);
    Ok(ColumnHtml {
        pending: PendingColumn { items: pending }.render()?,
        completed: CompletedColumn { items: completed }.render()?,
    })
}

/// The page's fixed anchor points, as seen by the controller.
///
/// A browser host maps these onto the real elements; tests record the calls.
pub trait Dom {
    /// Current text of the new-todo input field.
    fn input_value(&self) -> String;

    fn clear_input(&mut self);

    fn set_pending_html(&mut self, html: &str);

    fn set_completed_html(&mut self, html: &str);

    /// Current text of the item field with the given `data-id`, if present.
    fn field_value(&self, id: TodoId) -> Option<String>;

    /// Toggle the readonly lock on an item field (entering/leaving edit mode
    /// touches only that field, not the rendered fragments).
    fn set_field_editable(&mut self, id: TodoId, editable: bool);

    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);
}
