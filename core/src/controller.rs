//! Event wiring between the DOM, the API, and the state.
//!
//! # Design
//! Clicks arrive already delegated at the column level; the host parses the
//! clicked element's `data-action`/`data-id` attributes into a [`ClickEvent`]
//! and hands it to [`Controller::on_click`], which dispatches on the typed
//! [`Action`] instead of comparing class-name strings.
//!
//! Mutations never touch local state before the server confirms: delete
//! filters the list only after the DELETE succeeds, and a move that fails
//! halfway (old record deleted, new one refused) re-fetches the
//! authoritative list instead of guessing. Every failure is written to the
//! DOM error line; every success clears it.
//!
//! Moving an item between columns is delete-then-recreate because the
//! backend id scheme is append-only.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::client::TodoApi;
use crate::error::ApiError;
use crate::state::State;
use crate::transport::Transport;
use crate::types::{NewTodo, TodoId, TodoItem};
use crate::view::{self, Dom};

/// What a clicked control asks for, parsed from its `data-action` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
    /// Move a pending item to the completed column.
    Push,
    /// Move a completed item back to the pending column.
    Pull,
}

impl Action {
    pub fn from_attr(attr: &str) -> Option<Self> {
        match attr {
            "edit" => Some(Action::Edit),
            "delete" => Some(Action::Delete),
            "push" => Some(Action::Push),
            "pull" => Some(Action::Pull),
            _ => None,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Push => "push",
            Action::Pull => "pull",
        }
    }
}

/// A delegated click on one of the item controls.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    pub action: Action,
    pub id: TodoId,
}

/// Owns the state, the API handle, and the render subscription.
pub struct Controller<T: Transport, D: Dom> {
    api: TodoApi<T>,
    state: State,
    dom: Rc<RefCell<D>>,
    /// Item fields currently unlocked for editing. Cleared whenever the
    /// columns re-render, since re-rendering locks every field again.
    editing: HashSet<TodoId>,
}

impl<T: Transport, D: Dom + 'static> Controller<T, D> {
    /// Wire the render subscription: every state reassignment re-renders
    /// both columns into the DOM.
    pub fn new(api: TodoApi<T>, dom: Rc<RefCell<D>>) -> Self {
        let mut state = State::new();
        let render_target = Rc::clone(&dom);
        state.subscribe(move |items| match view::render_columns(items) {
            Ok(html) => {
                let mut dom = render_target.borrow_mut();
                dom.set_pending_html(&html.pending);
                dom.set_completed_html(&html.completed);
            }
            Err(e) => log::error!("render failed: {e}"),
        });

        Self {
            api,
            state,
            dom,
            editing: HashSet::new(),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        self.state.items()
    }

    /// Fetch the full list and render it.
    pub fn initialize(&mut self) -> Result<(), ApiError> {
        let result = self.load();
        self.finish(result)
    }

    /// Create a todo from the input field's current text.
    pub fn on_submit(&mut self) -> Result<(), ApiError> {
        let result = self.create_from_input();
        self.finish(result)
    }

    /// Dispatch a delegated click on an item control.
    pub fn on_click(&mut self, event: ClickEvent) -> Result<(), ApiError> {
        let result = match event.action {
            Action::Edit => self.edit(event.id),
            Action::Delete => self.delete(event.id),
            Action::Push | Action::Pull => self.toggle(event.id),
        };
        self.finish(result)
    }

    fn load(&mut self) -> Result<(), ApiError> {
        let items = self.api.list()?;
        self.apply(items);
        Ok(())
    }

    fn create_from_input(&mut self) -> Result<(), ApiError> {
        let content = self.dom.borrow().input_value();
        let created = self.api.create(&NewTodo::pending(content))?;

        let mut items = self.state.items().to_vec();
        items.push(created);
        self.apply(items);
        self.dom.borrow_mut().clear_input();
        Ok(())
    }

    fn delete(&mut self, id: TodoId) -> Result<(), ApiError> {
        self.api.delete(id)?;
        let items = self
            .state
            .items()
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.apply(items);
        Ok(())
    }

    fn toggle(&mut self, id: TodoId) -> Result<(), ApiError> {
        // Stale click on a row that is already gone.
        let Some(item) = self.state.items().iter().find(|item| item.id == id).cloned() else {
            return Ok(());
        };

        self.api.delete(id)?;
        let draft = NewTodo {
            content: item.content,
            pending: !item.pending,
        };
        let created = match self.api.create(&draft) {
            Ok(created) => created,
            Err(e) => {
                // The old record is already gone server-side; re-fetch
                // rather than reconstructing local state.
                self.resync();
                return Err(e);
            }
        };

        let mut items: Vec<TodoItem> = self
            .state
            .items()
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        items.push(created);
        self.apply(items);
        Ok(())
    }

    /// First click unlocks the item's field; the next click on the same item
    /// reads the edited text, relocks, and sends a full-record update. Id
    /// and pending flag are left unchanged.
    fn edit(&mut self, id: TodoId) -> Result<(), ApiError> {
        if !self.editing.remove(&id) {
            self.editing.insert(id);
            self.dom.borrow_mut().set_field_editable(id, true);
            return Ok(());
        }

        let value = self.dom.borrow().field_value(id);
        self.dom.borrow_mut().set_field_editable(id, false);
        let Some(content) = value else {
            return Ok(());
        };
        let Some(current) = self.state.items().iter().find(|item| item.id == id) else {
            return Ok(());
        };

        let edited = TodoItem {
            content,
            ..current.clone()
        };
        let updated = self.api.update(&edited)?;

        let items = self
            .state
            .items()
            .iter()
            .map(|item| if item.id == id { updated.clone() } else { item.clone() })
            .collect();
        self.apply(items);
        Ok(())
    }

    /// Reassign the list (triggering a re-render) and drop edit-mode
    /// tracking, since the fresh fragments render every field locked.
    fn apply(&mut self, items: Vec<TodoItem>) {
        self.editing.clear();
        self.state.set_items(items);
    }

    fn resync(&mut self) {
        match self.api.list() {
            Ok(items) => self.apply(items),
            Err(e) => log::warn!("resync after failed move also failed: {e}"),
        }
    }

    fn finish(&mut self, result: Result<(), ApiError>) -> Result<(), ApiError> {
        let mut dom = self.dom.borrow_mut();
        match &result {
            Ok(()) => dom.clear_error(),
            Err(e) => {
                log::warn!("operation failed: {e}");
                dom.show_error(&e.to_string());
            }
        }
        drop(dom);
        result
    }
}
