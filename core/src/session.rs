//! The single in-progress text edit on the list.
//!
//! # Design
//! One tagged value covers the whole list, so "at most one row is being
//! edited" holds by construction. Starting an edit on another row replaces
//! the value and with it the previous draft.

use crate::types::{TodoId, TodoItem};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { id: TodoId, draft: String },
}

/// What `commit` should do with the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitPlan {
    NoSession,
    /// Draft trims to nothing; stay in edit mode without calling the store.
    Blank,
    Update { id: TodoId, text: String },
}

impl EditSession {
    /// Session seeded from the item's current text.
    pub fn begin(item: &TodoItem) -> Self {
        EditSession::Editing {
            id: item.id,
            draft: item.text.clone(),
        }
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing_id() == Some(id)
    }

    /// Replace the draft. Returns `false` and does nothing when idle.
    pub fn set_draft(&mut self, text: &str) -> bool {
        match self {
            EditSession::Idle => false,
            EditSession::Editing { draft, .. } => {
                text.clone_into(draft);
                true
            }
        }
    }

    pub fn plan_commit(&self) -> CommitPlan {
        match self {
            EditSession::Idle => CommitPlan::NoSession,
            EditSession::Editing { id, draft } => {
                let text = draft.trim();
                if text.is_empty() {
                    CommitPlan::Blank
                } else {
                    CommitPlan::Update {
                        id: *id,
                        text: text.to_string(),
                    }
                }
            }
        }
    }
}
