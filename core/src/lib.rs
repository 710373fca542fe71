//! Model-View-Controller todo client over a REST backend.
//!
//! # Overview
//! Fetches, creates, updates, and deletes todo items against a `/todos`
//! endpoint and re-renders a two-column (pending/completed) list on every
//! state change. The two I/O seams are traits: [`Transport`] executes HTTP
//! round-trips and [`Dom`] stands in for the page's fixed anchor points, so
//! the whole flow runs deterministically under test.
//!
//! # Design
//! - `TodoClient` splits each operation into `build_*` / `parse_*` over
//!   plain-data request/response values; `TodoApi` composes them around a
//!   `Transport`.
//! - `State` is an explicit observable: reassigning the list synchronously
//!   notifies every registered listener, including no-op reassignments.
//! - `view::render_columns` is pure — item list in, two askama-rendered
//!   HTML fragments out.
//! - `Controller` owns the state and the render subscription and dispatches
//!   typed `Action`s parsed from `data-action` attributes.
//! - Mutations apply locally only after the server confirms; failures
//!   surface on the DOM error line instead of desynchronizing state.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;
pub mod view;

pub use client::{TodoApi, TodoClient};
pub use controller::{Action, ClickEvent, Controller};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::State;
pub use transport::{Transport, UreqTransport};
pub use types::{NewTodo, TodoId, TodoItem};
pub use view::{render_columns, ColumnHtml, Dom};
