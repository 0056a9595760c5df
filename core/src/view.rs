//! Per-render read model of the todo list.
//!
//! # Design
//! Rendering is a pure function of the store snapshot, the edit session and
//! the theme. A row is in edit mode exactly when its id matches the session;
//! there is no other per-row state.

use crate::session::EditSession;
use crate::theme::{Gradient, Theme};
use crate::types::{TodoId, TodoItem};

/// What the screen should draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    /// No snapshot yet; the host shows its loading indicator.
    Loading,
    List(ListView),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty(EmptyState),
    Rows(Vec<Row>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl EmptyState {
    pub const TODOS: EmptyState = EmptyState {
        title: "No todos yet!",
        subtitle: "Add your first todo above to get started",
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row key.
    pub id: TodoId,
    pub surface: Gradient,
    pub checkbox: Checkbox,
    pub body: RowBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
    pub fill: Gradient,
    /// `None` draws no border.
    pub border: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowBody {
    ReadOnly {
        text: String,
        style: TextStyle,
        edit: Action,
        delete: Action,
    },
    Editing {
        draft: String,
        placeholder: &'static str,
        placeholder_color: String,
        save: Action,
        cancel: Action,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    pub struck_through: bool,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
    Save,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    /// Text shown next to the icon; read-only row actions are icon-only.
    pub label: Option<&'static str>,
    pub fill: Gradient,
}

impl Action {
    fn new(kind: ActionKind, label: Option<&'static str>, fill: &Gradient) -> Self {
        Self {
            kind,
            label,
            fill: fill.clone(),
        }
    }
}

pub fn render_screen(snapshot: Option<&[TodoItem]>, session: &EditSession, theme: &Theme) -> ScreenView {
    match snapshot {
        None => ScreenView::Loading,
        Some(items) => ScreenView::List(render_list(items, session, theme)),
    }
}

/// One row per item, in the order given.
pub fn render_list(items: &[TodoItem], session: &EditSession, theme: &Theme) -> ListView {
    if items.is_empty() {
        return ListView::Empty(EmptyState::TODOS);
    }
    ListView::Rows(items.iter().map(|item| render_row(item, session, theme)).collect())
}

pub fn render_row(item: &TodoItem, session: &EditSession, theme: &Theme) -> Row {
    let g = &theme.gradients;
    let checkbox = if item.is_completed {
        Checkbox {
            checked: true,
            fill: g.success.clone(),
            border: None,
        }
    } else {
        Checkbox {
            checked: false,
            fill: g.muted.clone(),
            border: Some(theme.border.clone()),
        }
    };

    let body = match session {
        EditSession::Editing { id, draft } if *id == item.id => RowBody::Editing {
            draft: draft.clone(),
            placeholder: "Edit your todo...",
            placeholder_color: theme.text_muted.clone(),
            save: Action::new(ActionKind::Save, Some("Save"), &g.success),
            cancel: Action::new(ActionKind::Cancel, Some("Cancel"), &g.muted),
        },
        _ => RowBody::ReadOnly {
            text: item.text.clone(),
            style: text_style(item.is_completed, theme),
            edit: Action::new(ActionKind::Edit, None, &g.warning),
            delete: Action::new(ActionKind::Delete, None, &g.danger),
        },
    };

    Row {
        id: item.id,
        surface: g.surface.clone(),
        checkbox,
        body,
    }
}

fn text_style(completed: bool, theme: &Theme) -> TextStyle {
    if completed {
        TextStyle {
            color: theme.text_muted.clone(),
            struck_through: true,
            opacity: 0.6,
        }
    } else {
        TextStyle {
            color: theme.text.clone(),
            struck_through: false,
            opacity: 1.0,
        }
    }
}
