//! Two-option confirmation shown before a destructive action.

use async_trait::async_trait;

use crate::types::TodoId;

/// The option the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Cancel,
    Delete,
}

/// What the prompt should show. Labels are fixed per prompt kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub id: TodoId,
    pub title: &'static str,
    pub message: &'static str,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
}

impl ConfirmRequest {
    pub fn delete_todo(id: TodoId) -> Self {
        Self {
            id,
            title: "Delete Todo",
            message: "Are you sure you want to delete this todo?",
            cancel_label: "Cancel",
            confirm_label: "Delete",
        }
    }
}

/// Host-provided prompt. Resolves once the user has picked an option;
/// dismissing the prompt counts as `Cancel`.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm(&self, request: &ConfirmRequest) -> ConfirmChoice;
}
