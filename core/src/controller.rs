//! Interaction logic for the todo list screen.
//!
//! # Design
//! `TodoListController` owns the one piece of screen state, the
//! `EditSession`, and turns gestures into calls on the injected `TodoStore`.
//! Gestures take `&self`: the session sits in a `RefCell` that is never held
//! across an `.await`, so the user can keep interacting (e.g. start editing
//! another row) while a toggle or save is still in flight.
//!
//! Each remote call has its own failure policy:
//! - update: awaited; failure keeps the draft, raises a notice and is
//!   returned to the caller.
//! - toggle: awaited; failure raises a notice and is swallowed.
//! - delete: confirmed first, then spawned and never awaited here.
//!
//! A save already in flight for the same row swallows further saves until it
//! resolves, so a double tap on Save sends one update.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::confirm::{ConfirmChoice, ConfirmPrompt, ConfirmRequest};
use crate::error::ApiError;
use crate::notify::{Notice, Notifier};
use crate::session::{CommitPlan, EditSession};
use crate::store::{Snapshot, TodoStore};
use crate::theme::Theme;
use crate::types::{TodoId, TodoItem};
use crate::view::{self, ListView, ScreenView};

pub const TOGGLE_FAILED: &str = "Failed to toggle todo";
pub const UPDATE_FAILED: &str = "Failed to update todo";

/// Result of a `commit_edit` that did not fail remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing was being edited.
    NoSession,
    /// Draft was blank; still editing, store not called.
    Blank,
    /// Store accepted the new text.
    Saved,
    /// A save for this row is already in flight; store not called again.
    InFlight,
}

/// What happened after the delete confirmation closed.
#[derive(Debug)]
pub enum DeleteDecision {
    Cancelled,
    /// Delete was handed to the store. The controller does not watch the
    /// handle; callers may.
    Dispatched(JoinHandle<()>),
    /// Confirmed, but there was no tokio runtime to run the delete on.
    NotDispatched,
}

pub struct TodoListController {
    store: Arc<dyn TodoStore>,
    notifier: Arc<dyn Notifier>,
    prompt: Arc<dyn ConfirmPrompt>,
    session: RefCell<EditSession>,
    saving: Cell<Option<TodoId>>,
}

impl TodoListController {
    pub fn new(
        store: Arc<dyn TodoStore>,
        notifier: Arc<dyn Notifier>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            store,
            notifier,
            prompt,
            session: RefCell::new(EditSession::Idle),
            saving: Cell::new(None),
        }
    }

    pub fn session(&self) -> EditSession {
        self.session.borrow().clone()
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        self.session.borrow().editing_id()
    }

    pub fn draft(&self) -> Option<String> {
        self.session.borrow().draft().map(str::to_string)
    }

    /// Enter edit mode for `item`, discarding any other unsaved draft.
    pub fn begin_edit(&self, item: &TodoItem) {
        let mut session = self.session.borrow_mut();
        if let Some(previous) = session.editing_id().filter(|id| *id != item.id) {
            debug!(%previous, "discarding unsaved draft");
        }
        debug!(id = %item.id, "begin edit");
        *session = EditSession::begin(item);
    }

    /// Returns `false` when no edit is open.
    pub fn change_draft(&self, text: &str) -> bool {
        self.session.borrow_mut().set_draft(text)
    }

    pub fn cancel_edit(&self) {
        let mut session = self.session.borrow_mut();
        if let Some(id) = session.editing_id() {
            debug!(%id, "cancel edit");
        }
        *session = EditSession::Idle;
    }

    /// Save the trimmed draft.
    ///
    /// A blank draft is not sent and leaves the row in edit mode. On a store
    /// failure the draft is kept, the user is notified, and the error is
    /// returned so the caller can add its own handling.
    pub async fn commit_edit(&self) -> Result<CommitOutcome, ApiError> {
        let plan = self.session.borrow().plan_commit();
        let (id, text) = match plan {
            CommitPlan::NoSession => return Ok(CommitOutcome::NoSession),
            CommitPlan::Blank => {
                debug!("ignoring commit of blank draft");
                return Ok(CommitOutcome::Blank);
            }
            CommitPlan::Update { id, text } => (id, text),
        };
        if self.saving.get() == Some(id) {
            debug!(%id, "save already in flight");
            return Ok(CommitOutcome::InFlight);
        }

        debug!(%id, "committing edit");
        self.saving.set(Some(id));
        let result = self.store.update(id, &text).await;
        if self.saving.get() == Some(id) {
            self.saving.set(None);
        }
        match result {
            Ok(()) => {
                let mut session = self.session.borrow_mut();
                // the user may have moved on to another row meanwhile
                if session.is_editing(id) {
                    *session = EditSession::Idle;
                }
                Ok(CommitOutcome::Saved)
            }
            Err(e) => {
                warn!(%id, error = %e, "updating todo failed");
                self.notifier.notify(Notice::error(UPDATE_FAILED));
                Err(e)
            }
        }
    }

    /// Flip completion. Failures are reported to the user, not the caller.
    pub async fn toggle_item(&self, id: TodoId) {
        debug!(%id, "toggling todo");
        if let Err(e) = self.store.toggle(id).await {
            warn!(%id, error = %e, "toggling todo failed");
            self.notifier.notify(Notice::error(TOGGLE_FAILED));
        }
    }

    /// Ask for confirmation, then hand the delete to the store without
    /// waiting for it. Without a tokio runtime the delete is dropped and
    /// reported as `NotDispatched`.
    pub async fn request_delete(&self, id: TodoId) -> DeleteDecision {
        let request = ConfirmRequest::delete_todo(id);
        match self.prompt.confirm(&request).await {
            ConfirmChoice::Cancel => {
                debug!(%id, "delete cancelled");
                DeleteDecision::Cancelled
            }
            ConfirmChoice::Delete => {
                let runtime = match Handle::try_current() {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        warn!(%id, error = %e, "no runtime to dispatch delete on");
                        return DeleteDecision::NotDispatched;
                    }
                };
                debug!(%id, "dispatching delete");
                let store = Arc::clone(&self.store);
                DeleteDecision::Dispatched(runtime.spawn(async move {
                    if let Err(e) = store.delete(id).await {
                        warn!(%id, error = %e, "deleting todo failed");
                    }
                }))
            }
        }
    }

    pub fn render(&self, items: &[TodoItem], theme: &Theme) -> ListView {
        view::render_list(items, &self.session.borrow(), theme)
    }

    pub fn render_snapshot(&self, snapshot: &Snapshot, theme: &Theme) -> ScreenView {
        view::render_screen(snapshot.as_deref(), &self.session.borrow(), theme)
    }
}
