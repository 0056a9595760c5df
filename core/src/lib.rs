//! Core of the todo list screen.
//!
//! # Overview
//! Renders the store's todo snapshot and turns user gestures (toggle, edit,
//! delete) into store calls. The only state kept here is which single todo,
//! if any, is being edited and its unsaved draft.
//!
//! # Design
//! - `TodoListController` owns the `EditSession` and decides, per
//!   operation, whether a store call is awaited, swallowed or fire-and-forget.
//! - Collaborators are injected: `TodoStore` for remote calls, `Notifier`
//!   for user-visible errors, `ConfirmPrompt` for the delete confirmation,
//!   and a `Theme` passed to every render.
//! - `HttpTodoStore` speaks the store's HTTP API through `TodoClient`'s
//!   `build_*` / `parse_*` pairs; the host executes the round-trip via a
//!   `Transport` (host-does-IO pattern).

pub mod client;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod http;
pub mod notify;
pub mod session;
pub mod store;
pub mod theme;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use confirm::{ConfirmChoice, ConfirmPrompt, ConfirmRequest};
pub use controller::{CommitOutcome, DeleteDecision, TodoListController};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{Notice, NoticeQueue, Notifier};
pub use session::EditSession;
pub use store::{HttpTodoStore, Snapshot, SnapshotFeed, TodoStore, Transport};
pub use theme::{Theme, ThemeMode};
pub use types::{NewTodo, TodoId, TodoItem, UpdateTodo};
pub use view::{ListView, Row, RowBody, ScreenView};
