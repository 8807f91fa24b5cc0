//! Hit areas registered during rendering.
//!
//! The map is rebuilt on every draw, so rows, cards and cart lines that did
//! not exist at startup are clickable as soon as they are on screen. A lookup
//! returns the innermost area under the pointer, which is the one registered
//! last. While any overlay area exists, page areas are ignored.

use crate::app::action::Action;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Page,
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: Action,
    pub layer: Layer,
}

/// Scrollable panels of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Todo,
    Gallery,
    Cart,
}

/// A scrollable panel as drawn: its rect and how many rows its content has
/// at the current width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanelArea {
    panel: Panel,
    rect: Rect,
    rows: usize,
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    areas: Vec<HitArea>,
    panels: Vec<PanelArea>,
}

impl HitMap {
    pub fn register(&mut self, rect: Rect, action: Action) {
        self.push(rect, action, Layer::Page);
    }

    pub fn register_overlay(&mut self, rect: Rect, action: Action) {
        self.push(rect, action, Layer::Overlay);
    }

    pub fn register_panel(&mut self, panel: Panel, rect: Rect, rows: usize) {
        self.panels.push(PanelArea { panel, rect, rows });
    }

    fn push(&mut self, rect: Rect, action: Action, layer: Layer) {
        if rect.is_empty() {
            return;
        }
        self.areas.push(HitArea {
            rect,
            action,
            layer,
        });
    }

    pub fn has_overlay(&self) -> bool {
        self.areas.iter().any(|a| a.layer == Layer::Overlay)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<&HitArea> {
        let layer = if self.has_overlay() {
            Layer::Overlay
        } else {
            Layer::Page
        };
        let pos = Position::new(column, row);
        self.areas
            .iter()
            .rev()
            .find(|a| a.layer == layer && a.rect.contains(pos))
    }

    pub fn panel_at(&self, column: u16, row: u16) -> Option<Panel> {
        let pos = Position::new(column, row);
        self.panels
            .iter()
            .find(|p| p.rect.contains(pos))
            .map(|p| p.panel)
    }

    /// Content rows of `panel` in the last draw; 0 if it was not drawn.
    pub fn panel_rows(&self, panel: Panel) -> usize {
        self.panels
            .iter()
            .find(|p| p.panel == panel)
            .map_or(0, |p| p.rows)
    }

    /// First registered area carrying `action`.
    #[cfg(test)]
    pub fn find(&self, action: &Action) -> Option<&HitArea> {
        self.areas.iter().find(|a| &a.action == action)
    }

    #[cfg(test)]
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::{GalleryAction, ModalAction, TodoAction};

    #[test]
    fn test_innermost_area_wins() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 0, 20, 5), Action::Gallery(GalleryAction::Open(1)));
        hits.register(Rect::new(2, 2, 6, 1), Action::Gallery(GalleryAction::Clear));

        let hit = hits.hit_test(3, 2).unwrap();
        assert_eq!(hit.action, Action::Gallery(GalleryAction::Clear));
        let hit = hits.hit_test(10, 4).unwrap();
        assert_eq!(hit.action, Action::Gallery(GalleryAction::Open(1)));
    }

    #[test]
    fn test_miss_returns_none() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 0, 5, 1), Action::Todo(TodoAction::Submit));
        assert!(hits.hit_test(5, 0).is_none());
        assert!(hits.hit_test(0, 1).is_none());
        assert!(HitMap::default().hit_test(0, 0).is_none());
    }

    #[test]
    fn test_overlay_hides_page() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(0, 0, 10, 1), Action::Todo(TodoAction::Submit));
        hits.register_overlay(Rect::new(0, 0, 80, 24), Action::Modal(ModalAction::Backdrop));
        hits.register_overlay(Rect::new(30, 10, 8, 1), Action::Modal(ModalAction::Close));

        assert_eq!(
            hits.hit_test(1, 0).unwrap().action,
            Action::Modal(ModalAction::Backdrop)
        );
        assert_eq!(
            hits.hit_test(31, 10).unwrap().action,
            Action::Modal(ModalAction::Close)
        );
    }

    #[test]
    fn test_empty_rects_are_skipped() {
        let mut hits = HitMap::default();
        hits.register(Rect::new(3, 3, 0, 1), Action::Todo(TodoAction::Submit));
        assert!(hits.areas().is_empty());
    }

    #[test]
    fn test_panel_lookup() {
        let mut hits = HitMap::default();
        hits.register_panel(Panel::Todo, Rect::new(0, 0, 10, 10), 4);
        hits.register_panel(Panel::Cart, Rect::new(10, 0, 10, 10), 1);
        assert_eq!(hits.panel_at(12, 3), Some(Panel::Cart));
        assert_eq!(hits.panel_at(30, 3), None);
        assert_eq!(hits.panel_rows(Panel::Todo), 4);
        assert_eq!(hits.panel_rows(Panel::Gallery), 0);
    }
}
