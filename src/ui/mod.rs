//! Drawing. Each draw returns a fresh [`HitMap`] built from what actually
//! landed on screen, so the router always classifies clicks against the
//! current frame.

mod cart_panel;
mod gallery_grid;
mod header;
mod layout;
mod overlay;
mod status_bar;
mod theme;
mod todo_panel;

use crate::app::action::Action;
use crate::app::hit::HitMap;
use crate::app::state::{AppState, InputState};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use theme::Theme;
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, state: &AppState) -> HitMap {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);
    let mut hits = HitMap::default();

    frame.render_widget(Block::default().style(Theme::panel_bg()), area);
    header::render(frame, app_layout.header, state);
    todo_panel::render(frame, app_layout.todo, state, &mut hits);
    gallery_grid::render(frame, app_layout.gallery, state, &mut hits);
    cart_panel::render(frame, app_layout.cart, state, &mut hits);
    status_bar::render(frame, app_layout.status_bar, state);

    overlay::render_modal(frame, area, state, &mut hits);
    overlay::render_prompt(frame, area, state, &mut hits);
    overlay::render_notification(frame, area, state);
    overlay::render_ripples(frame, state);
    hits
}

/// A one-line clickable label.
struct Button<'a> {
    label: &'a str,
    action: Action,
    style: Style,
    overlay: bool,
}

impl<'a> Button<'a> {
    fn new(label: &'a str, action: Action) -> Self {
        Self {
            label,
            action,
            style: Theme::button(),
            overlay: false,
        }
    }

    fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn overlay(mut self) -> Self {
        self.overlay = true;
        self
    }

    fn width(&self) -> u16 {
        Span::raw(self.label).width() as u16
    }

    /// Draw at `(x, y)`, clipped to `clip`, and register the visible part.
    /// Returns the button's full width.
    fn draw(self, frame: &mut Frame, hits: &mut HitMap, state: &AppState, pos: Position, clip: Rect) -> u16 {
        let width = self.width();
        let rect = Rect::new(pos.x, pos.y, width, 1).intersection(clip);
        if rect.is_empty() {
            return width;
        }
        let style = if state.hovered.as_ref() == Some(&self.action) {
            Theme::button_hover()
        } else {
            self.style
        };
        frame.render_widget(Paragraph::new(Span::styled(self.label, style)), rect);
        if self.overlay {
            hits.register_overlay(rect, self.action);
        } else {
            hits.register(rect, self.action);
        }
        width
    }
}

/// Draw `span` at `(x, y)` clipped to `clip`. Returns the columns it takes.
fn put(frame: &mut Frame, pos: Position, clip: Rect, span: Span) -> u16 {
    let width = span.width() as u16;
    let rect = Rect::new(pos.x, pos.y, width, 1).intersection(clip);
    if !rect.is_empty() {
        frame.render_widget(Paragraph::new(span), rect);
    }
    width
}

/// Cut `text` to at most `width` display columns, ending in `…` when cut.
fn truncate(text: &str, width: usize) -> String {
    let full: usize = text.chars().filter_map(|c| c.width()).sum();
    if full <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// `rect` pushed right by `offset` columns, keeping its right edge.
fn shift(rect: Rect, offset: u16) -> Rect {
    let offset = offset.min(rect.width);
    Rect {
        x: rect.x + offset,
        width: rect.width - offset,
        ..rect
    }
}

/// Single-line text field that scrolls horizontally to keep the cursor
/// visible.
fn render_input(frame: &mut Frame, area: Rect, input: &InputState, show_cursor: bool) {
    if area.is_empty() {
        return;
    }
    let cursor = input.cursor_column() as u16;
    let skip = cursor.saturating_sub(area.width.saturating_sub(1));
    let paragraph = Paragraph::new(input.text.as_str())
        .style(Theme::text())
        .scroll((0, skip));
    frame.render_widget(paragraph, area);
    if show_cursor {
        frame.set_cursor_position((area.x + cursor - skip, area.y));
    }
}
