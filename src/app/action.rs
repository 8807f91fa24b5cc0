//! Typed actions carried by hit areas.
//!
//! Every clickable thing on screen registers one of these while it renders.
//! The router dispatches on the variant, never on labels or positions.

use crate::catalog::ProductId;
use crate::widgets::cart::Step;
use crate::widgets::gallery::CardId;
use crate::widgets::todo::TodoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Todo(TodoAction),
    Gallery(GalleryAction),
    Cart(CartAction),
    Modal(ModalAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    FocusInput,
    Submit,
    Toggle(TodoId),
    Edit(TodoId),
    Delete(TodoId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    Load(String),
    Clear,
    Open(CardId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// The product row itself; only reacts to hover.
    Product(ProductId),
    Add(ProductId),
    Remove(ProductId),
    Step(ProductId, Step),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Close,
    /// Area around the modal panel.
    Backdrop,
    /// Overlay surface that absorbs clicks.
    Swallow,
    ConfirmYes,
    ConfirmNo,
    PromptSave,
    PromptCancel,
}

impl Action {
    /// Button controls get a click ripple; cards, rows and backdrops do not.
    pub fn is_button(&self) -> bool {
        match self {
            Action::Todo(a) => !matches!(a, TodoAction::FocusInput),
            Action::Gallery(a) => !matches!(a, GalleryAction::Open(_)),
            Action::Cart(a) => !matches!(a, CartAction::Product(_)),
            Action::Modal(a) => !matches!(a, ModalAction::Backdrop | ModalAction::Swallow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons() {
        assert!(Action::Todo(TodoAction::Submit).is_button());
        assert!(!Action::Todo(TodoAction::FocusInput).is_button());
        assert!(Action::Gallery(GalleryAction::Clear).is_button());
        assert!(!Action::Gallery(GalleryAction::Open(1)).is_button());
        assert!(Action::Cart(CartAction::Step(1, Step::Decrease)).is_button());
        assert!(!Action::Cart(CartAction::Product(1)).is_button());
        assert!(Action::Modal(ModalAction::Close).is_button());
        assert!(!Action::Modal(ModalAction::Backdrop).is_button());
    }
}
