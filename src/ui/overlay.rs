//! Everything drawn above the page: the image modal, prompts, the
//! notification banner and click ripples.

use super::layout::centered;
use super::{put, render_input, truncate, Button};
use crate::app::action::{Action, ModalAction};
use crate::app::hit::HitMap;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::widgets::modal::Prompt;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

fn dim(frame: &mut Frame, area: Rect) {
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));
}

fn popup_block(title: String, border: Style) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border)
        .style(Style::default().bg(Theme::BG_SURFACE))
}

pub fn render_modal(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let Some(card) = state.modal.card() else {
        return;
    };
    dim(frame, area);
    hits.register_overlay(area, Action::Modal(ModalAction::Backdrop));

    let popup = centered(area, 56, 14);
    frame.render_widget(Clear, popup);
    let block = popup_block(
        format!(" {} ", truncate(&card.title, popup.width.saturating_sub(10) as usize)),
        Theme::border_focused(),
    );
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    hits.register_overlay(popup, Action::Modal(ModalAction::Swallow));

    // Picture area
    let picture = Rect {
        height: inner.height.saturating_sub(3),
        ..inner
    };
    let shade = "░".repeat(picture.width as usize);
    let rows = vec![Line::from(shade); picture.height as usize];
    frame.render_widget(
        Paragraph::new(rows).style(Style::default().fg(Theme::ACCENT_BLUE)),
        picture,
    );

    let details = Rect {
        y: picture.bottom(),
        height: inner.height.saturating_sub(picture.height),
        ..inner
    };
    let width = details.width as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled("Category ", Theme::secondary()),
            Span::styled(card.category.clone(), Theme::text()),
            Span::styled(format!("  #{}", card.id), Theme::muted()),
        ]),
        Line::from(Span::styled(truncate(&card.url, width), Theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines), details);

    let close = Button::new("[Close]", Action::Modal(ModalAction::Close)).overlay();
    let close_x = inner.right().saturating_sub(close.width());
    let close_y = inner.bottom().saturating_sub(1);
    close.draw(frame, hits, state, Position::new(close_x, close_y), inner);

    let corner = Button::new("[✕]", Action::Modal(ModalAction::Close)).overlay();
    let corner_x = popup.right().saturating_sub(corner.width() + 1);
    corner.draw(frame, hits, state, Position::new(corner_x, popup.y), popup);
}

pub fn render_prompt(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let Some(prompt) = &state.prompt else {
        return;
    };
    dim(frame, area);
    hits.register_overlay(area, Action::Modal(ModalAction::Swallow));

    let popup = centered(area, 48, 7);
    frame.render_widget(Clear, popup);
    let border = match prompt {
        Prompt::ConfirmDelete { .. } => Style::default().fg(Theme::ACCENT_AMBER),
        Prompt::EditTodo { .. } => Theme::border_focused(),
    };
    let block = popup_block(prompt.title().to_string(), border);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.is_empty() {
        return;
    }

    let body = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width: inner.width.saturating_sub(2),
        height: 1,
    }
    .intersection(inner);
    let buttons_y = inner.bottom().saturating_sub(1);

    let (yes, no) = match prompt {
        Prompt::ConfirmDelete { text, .. } => {
            let question = format!(
                "Delete \"{}\"?",
                truncate(text, body.width.saturating_sub(10) as usize)
            );
            put(frame, body.as_position(), body, Span::styled(question, Theme::text()));
            (
                Button::new("[ Yes ]", Action::Modal(ModalAction::ConfirmYes))
                    .style(Theme::button_danger()),
                Button::new("[ No ]", Action::Modal(ModalAction::ConfirmNo)),
            )
        }
        Prompt::EditTodo { input, .. } => {
            frame.render_widget(
                Block::default().style(Style::default().bg(Theme::BG_ELEVATED)),
                body,
            );
            render_input(frame, body, input, true);
            (
                Button::new("[ Save ]", Action::Modal(ModalAction::PromptSave)),
                Button::new("[ Cancel ]", Action::Modal(ModalAction::PromptCancel)),
            )
        }
    };

    let total = yes.width() + 2 + no.width();
    let x = inner.x + inner.width.saturating_sub(total) / 2;
    let yes_width = yes.overlay().draw(frame, hits, state, Position::new(x, buttons_y), inner);
    no.overlay()
        .draw(frame, hits, state, Position::new(x + yes_width + 2, buttons_y), inner);
}

/// Banner in the top-right corner. Not clickable.
pub fn render_notification(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(notice) = state.notifier.current() else {
        return;
    };
    let style = Theme::severity(notice.severity);
    let text = format!("{} {}", notice.severity.icon(), notice.message);
    let width = (Span::raw(text.as_str()).width() as u16 + 4)
        .min(60)
        .min(area.width.saturating_sub(2));
    let rect = Rect::new(
        area.right().saturating_sub(width + 2),
        area.y + 1,
        width,
        3,
    )
    .intersection(area);
    if rect.is_empty() {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(style)
        .style(Style::default().bg(Theme::BG_SURFACE));
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", text),
            style.add_modifier(Modifier::BOLD),
        )))
        .block(block),
        rect,
    );
}

/// Expanding ring from the click point, limited to the clicked control.
pub fn render_ripples(frame: &mut Frame, state: &AppState) {
    let ripples = &state.ripples;
    let span = ripples.duration().as_secs_f32();
    let now = ripples.now();
    let bounds = frame.area();
    let buf = frame.buffer_mut();

    for ripple in ripples.active() {
        let elapsed = now.saturating_sub(ripple.since).as_secs_f32();
        let progress = if span > 0.0 { elapsed / span } else { 1.0 };
        if progress >= 1.0 {
            continue;
        }
        let area = ripple.area.intersection(bounds);
        // Rows are about twice as tall as columns are wide
        let reach = f32::from(ripple.area.width.max(ripple.area.height * 2));
        let radius = progress * reach;
        let ox = f32::from(ripple.area.x + ripple.origin.0);
        let oy = f32::from(ripple.area.y + ripple.origin.1);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let dx = f32::from(x) - ox;
                let dy = (f32::from(y) - oy) * 2.0;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance <= radius && distance >= radius - 2.0 {
                    if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                        cell.set_style(Theme::ripple());
                    }
                }
            }
        }
    }
}
