use super::{put, render_input, shift, truncate, Button};
use crate::app::action::{Action, TodoAction};
use crate::app::hit::{HitMap, Panel};
use crate::app::state::{AppState, Focus};
use crate::ui::theme::Theme;
use crate::widgets::todo::{TodoRow, MAX_TODO_LEN};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Columns a row travels while sliding in or out.
const SLIDE: f32 = 6.0;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let focused = state.focus == Focus::TodoInput;
    let block = Block::default()
        .title(" To-Do List ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .style(Theme::panel_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.register_panel(Panel::Todo, area, state.todos.rows().len());
    if inner.is_empty() {
        return;
    }

    render_entry(frame, Rect { height: 1, ..inner }, state, hits);
    let list = Rect {
        y: inner.y.saturating_add(2),
        height: inner.height.saturating_sub(2),
        ..inner
    };
    render_rows(frame, list, state, hits);
}

/// Input field, character counter and the add button.
fn render_entry(frame: &mut Frame, row: Rect, state: &AppState, hits: &mut HitMap) {
    let focused = state.focus == Focus::TodoInput;
    let add = Button::new("[Add]", Action::Todo(TodoAction::Submit));
    let count = state.input.char_count();
    let counter = format!("{}/{} ", count, MAX_TODO_LEN);
    let counter_style = if count > MAX_TODO_LEN {
        Style::default().fg(Theme::ACCENT_RED)
    } else {
        Theme::muted()
    };

    let tail = add.width() + counter.len() as u16 + 1;
    let field = Rect {
        width: row.width.saturating_sub(tail),
        ..row
    };
    hits.register(field, Action::Todo(TodoAction::FocusInput));

    let chevron = put(
        frame,
        field.as_position(),
        field,
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
    );
    let text = shift(field, chevron);
    if state.input.text.is_empty() && !focused {
        put(
            frame,
            text.as_position(),
            text,
            Span::styled("What needs doing?", Theme::muted()),
        );
    } else {
        let show_cursor = focused && state.prompt.is_none() && !state.modal.is_open();
        render_input(frame, text, &state.input, show_cursor);
    }

    let x = field.right() + 1;
    let x = x + put(
        frame,
        Position::new(x, row.y),
        row,
        Span::styled(counter, counter_style),
    );
    add.draw(frame, hits, state, Position::new(x, row.y), row);
}

fn render_rows(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let rows = state.todos.rows();
    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No tasks yet. Type one above and press Enter.",
                Theme::muted(),
            )),
            area,
        );
        return;
    }

    let visible = rows
        .iter()
        .skip(state.scroll.todo)
        .take(area.height as usize);
    for (i, row) in visible.enumerate() {
        let line = Rect {
            y: area.y + i as u16,
            height: 1,
            ..area
        };
        render_row(frame, line, row, state, hits);
    }
}

fn render_row(frame: &mut Frame, line: Rect, row: &TodoRow, state: &AppState, hits: &mut HitMap) {
    let item = &row.item;
    let now = state.todos.now();
    let timing = state.todos.timing();

    // Leaving rows slide out dimmed and are no longer clickable
    if row.motion.is_leaving() {
        let offset = (row.motion.progress(now, timing.exit) * SLIDE) as u16;
        let line = shift(line, offset);
        let text = format!("    {}", truncate(&item.text, line.width as usize));
        put(frame, line.as_position(), line, Span::styled(text, Theme::leaving()));
        return;
    }

    let offset = ((1.0 - row.motion.progress(now, timing.enter)) * SLIDE) as u16;
    let line = shift(line, offset);
    let y = line.y;

    let (mark, mark_style) = if item.completed {
        ("[x]", Style::default().fg(Theme::ACCENT_GREEN).bg(Theme::BG_ELEVATED))
    } else {
        ("[ ]", Theme::button())
    };
    let toggle = Button::new(mark, Action::Todo(TodoAction::Toggle(item.id))).style(mark_style);
    let x = line.x + toggle.draw(frame, hits, state, line.as_position(), line) + 1;

    let edit = Button::new("[Edit]", Action::Todo(TodoAction::Edit(item.id)));
    let delete = Button::new("[Del]", Action::Todo(TodoAction::Delete(item.id)))
        .style(Theme::button_danger());
    let controls_x = line
        .right()
        .saturating_sub(edit.width() + 1 + delete.width())
        .max(x);

    let stamp = Span::styled(format!("{} ", item.created), Theme::muted());
    let stamp_x = controls_x.saturating_sub(stamp.width() as u16);
    let text_end = if stamp_x > x { stamp_x } else { controls_x };
    let text_width = text_end.saturating_sub(x + 1) as usize;
    let text_style = if item.completed {
        Theme::completed()
    } else {
        Theme::text()
    };
    put(
        frame,
        Position::new(x, y),
        line,
        Span::styled(truncate(&item.text, text_width), text_style),
    );
    if stamp_x > x {
        put(frame, Position::new(stamp_x, y), line, stamp);
    }

    let edit_width = edit.draw(frame, hits, state, Position::new(controls_x, y), line);
    delete.draw(
        frame,
        hits,
        state,
        Position::new(controls_x + edit_width + 1, y),
        line,
    );
}
