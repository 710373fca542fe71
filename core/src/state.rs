//! Observable item list shared between the controller and the view.
//!
//! # Design
//! `set_items` stores the new list unconditionally — a reassignment of an
//! identical list still notifies — and invokes every registered listener
//! synchronously, in registration order, with a borrow of the new list.
//! Handing the list to the listener (instead of having it read back through
//! a getter) keeps notification re-entrancy-free.

use crate::types::TodoItem;

type Listener = Box<dyn FnMut(&[TodoItem])>;

/// The current todo list plus its change listeners.
#[derive(Default)]
pub struct State {
    items: Vec<TodoItem>,
    listeners: Vec<Listener>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Register a change listener. Listeners cannot be removed; the set is
    /// fixed once wiring is done.
    pub fn subscribe(&mut self, listener: impl FnMut(&[TodoItem]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the list wholesale and notify every listener.
    pub fn set_items(&mut self, items: Vec<TodoItem>) {
        self.items = items;
        log::debug!("state reassigned, {} items", self.items.len());
        let items = &self.items;
        for listener in &mut self.listeners {
            listener(items);
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn item(id: i64) -> TodoItem {
        TodoItem {
            id,
            content: format!("todo {id}"),
            pending: true,
        }
    }

    #[test]
    fn set_items_without_listeners_just_stores() {
        let mut state = State::new();
        state.set_items(vec![item(1)]);
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn every_reassignment_notifies_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);

        let mut state = State::new();
        state.subscribe(move |_| seen.set(seen.get() + 1));

        state.set_items(vec![item(1)]);
        assert_eq!(calls.get(), 1);

        // Identical reassignment still notifies.
        state.set_items(vec![item(1)]);
        assert_eq!(calls.get(), 2);

        state.set_items(Vec::new());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn listener_sees_the_new_list() {
        let seen_len = Rc::new(Cell::new(usize::MAX));
        let probe = Rc::clone(&seen_len);

        let mut state = State::new();
        state.subscribe(move |items| probe.set(items.len()));

        state.set_items(vec![item(1), item(2)]);
        assert_eq!(seen_len.get(), 2);
    }

    #[test]
    fn multiple_listeners_fire_in_registration_order() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);

        let mut state = State::new();
        state.subscribe(move |_| first.borrow_mut().push("first"));
        state.subscribe(move |_| second.borrow_mut().push("second"));

        state.set_items(Vec::new());
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
