use super::{put, truncate, Button};
use crate::app::action::{Action, GalleryAction};
use crate::app::hit::{HitMap, Panel};
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::widgets::gallery::{CardSlot, ExitStyle};
use crate::widgets::Motion;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const CARD_WIDTH: u16 = 20;
const CARD_HEIGHT: u16 = 4;
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let block = Block::default()
        .title(" Image Gallery ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let grid = Rect {
        y: inner.y.saturating_add(3),
        height: inner.height.saturating_sub(3),
        ..inner
    };
    let rows = state
        .gallery
        .slots()
        .len()
        .div_ceil(grid_columns(grid.width) as usize);
    hits.register_panel(Panel::Gallery, area, rows);
    if inner.is_empty() {
        return;
    }

    render_toolbar(frame, Rect { height: 1, ..inner }, state, hits);

    let status = match state.gallery.category() {
        Some(category) => Span::styled(
            format!("{} · {} images", category, state.gallery.image_count()),
            Theme::secondary(),
        ),
        None => Span::styled("Pick a category to load images", Theme::muted()),
    };
    let status_row = Rect {
        y: inner.y.saturating_add(1),
        height: 1,
        ..inner
    }
    .intersection(inner);
    put(frame, status_row.as_position(), status_row, status);
    render_grid(frame, grid, state, hits);
}

/// Cards per grid row at `width` columns.
fn grid_columns(width: u16) -> u16 {
    (width.saturating_add(1) / (CARD_WIDTH + 1)).max(1)
}

/// One button per category, then the clear button flush right.
fn render_toolbar(frame: &mut Frame, row: Rect, state: &AppState, hits: &mut HitMap) {
    let clear = Button::new("[Clear]", Action::Gallery(GalleryAction::Clear))
        .style(Theme::button_danger());
    let clear_x = row.right().saturating_sub(clear.width());
    let buttons = Rect {
        width: clear_x.saturating_sub(row.x + 1),
        ..row
    };

    let mut x = row.x;
    for category in state.catalog.categories() {
        let label = format!("[{}]", category);
        let style = if state.gallery.category() == Some(category) {
            Theme::button_done()
        } else {
            Theme::button()
        };
        let load = Button::new(&label, Action::Gallery(GalleryAction::Load(category.to_string())))
            .style(style);
        x += load.draw(frame, hits, state, Position::new(x, row.y), buttons) + 1;
    }
    clear.draw(frame, hits, state, Position::new(clear_x, row.y), row);
}

fn render_grid(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let slots = state.gallery.slots();
    if slots.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No images", Theme::muted())),
            area,
        );
        return;
    }
    if area.is_empty() {
        return;
    }

    let columns = grid_columns(area.width);
    let card_width = ((area.width + 1) / columns).saturating_sub(1).max(1);
    let per_row = columns as usize;
    let total_rows = slots.len().div_ceil(per_row);
    let first_row = state.scroll.gallery.min(total_rows.saturating_sub(1));
    let visible_rows = area.height.div_ceil(CARD_HEIGHT) as usize;

    let visible = slots
        .iter()
        .skip(first_row * per_row)
        .take(visible_rows * per_row);
    for (i, slot) in visible.enumerate() {
        let col = (i % per_row) as u16;
        let row = (i / per_row) as u16;
        let rect = Rect::new(
            area.x + col * (card_width + 1),
            area.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        )
        .intersection(area);
        if !rect.is_empty() {
            render_card(frame, rect, slot, state, hits);
        }
    }
}

fn render_card(frame: &mut Frame, rect: Rect, slot: &CardSlot, state: &AppState, hits: &mut HitMap) {
    let card = &slot.card;
    let now = state.gallery.now();
    let timing = state.gallery.timing();
    let title_width = rect.width.saturating_sub(4) as usize;

    let (border, title, reveal) = match slot.motion {
        Motion::Leaving { .. } => {
            let title = match slot.exit {
                ExitStyle::Fade => format!(" {} ", truncate(&card.title, title_width)),
                ExitStyle::Spin => {
                    let p = slot.motion.progress(now, timing.exit);
                    let glyph = SPINNER[(p * 8.0) as usize % SPINNER.len()];
                    format!(" {} {} ", glyph, truncate(&card.title, title_width.saturating_sub(2)))
                }
            };
            (Theme::leaving(), title, false)
        }
        Motion::Entering { .. } => {
            let p = slot.motion.progress(now, timing.enter);
            let border = if slot.hovered {
                Theme::border_focused()
            } else if p < 0.5 {
                Theme::muted()
            } else {
                Theme::border()
            };
            (border, format!(" {} ", truncate(&card.title, title_width)), p >= 0.5)
        }
        Motion::Settled => {
            let border = if slot.hovered {
                Theme::border_focused()
            } else {
                Theme::border()
            };
            (border, format!(" {} ", truncate(&card.title, title_width)), true)
        }
    };

    let block = Block::default()
        .title(title)
        .title_style(if slot.motion.is_leaving() {
            Theme::leaving()
        } else {
            Theme::title()
        })
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border)
        .style(Style::default().bg(if slot.hovered {
            Theme::BG_ELEVATED
        } else {
            Theme::BG_SURFACE
        }));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if reveal && !inner.is_empty() {
        let width = inner.width as usize;
        let lines = vec![
            Line::from(Span::styled(truncate(&card.category, width), Theme::secondary())),
            Line::from(Span::styled(truncate(&card.url, width), Theme::muted())),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    if !slot.motion.is_leaving() {
        hits.register(rect, Action::Gallery(GalleryAction::Open(card.id)));
    }
}
