//! Image detail modal and the blocking prompts.
//!
//! Both are overlays: while one is showing, only its own controls receive
//! clicks. A prompt additionally captures every key until answered.

use super::gallery::ImageCard;
use super::todo::TodoId;
use crate::app::state::InputState;

#[derive(Debug, Default)]
pub struct Modal {
    card: Option<ImageCard>,
}

impl Modal {
    /// Show `card` and lock page scrolling.
    pub fn open(&mut self, card: ImageCard) {
        tracing::debug!(id = card.id, "modal open");
        self.card = Some(card);
    }

    /// Hide the overlay. Returns whether it was showing.
    pub fn close(&mut self) -> bool {
        self.card.take().is_some()
    }

    pub fn card(&self) -> Option<&ImageCard> {
        self.card.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.card.is_some()
    }

    /// Scrolling is locked for as long as the modal shows.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

/// A question that blocks the page until answered.
#[derive(Debug)]
pub enum Prompt {
    ConfirmDelete { todo: TodoId, text: String },
    EditTodo { todo: TodoId, input: InputState },
}

impl Prompt {
    pub fn confirm_delete(todo: TodoId, text: &str) -> Self {
        Prompt::ConfirmDelete {
            todo,
            text: text.to_string(),
        }
    }

    pub fn edit_todo(todo: TodoId, text: &str) -> Self {
        Prompt::EditTodo {
            todo,
            input: InputState::with_text(text),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Prompt::ConfirmDelete { .. } => " Delete task? ",
            Prompt::EditTodo { .. } => " Edit task ",
        }
    }
}
