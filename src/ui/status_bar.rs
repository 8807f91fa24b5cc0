use crate::app::state::{AppState, Focus};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (mode, hints) = if state.prompt.is_some() {
        ("PROMPT", "Enter confirm · Esc cancel")
    } else if state.modal.is_open() {
        ("MODAL", "Esc or click outside to close")
    } else {
        match state.focus {
            Focus::TodoInput => ("INPUT", "Enter add task · Tab page · Esc leave input · Ctrl+C quit"),
            Focus::Page => ("PAGE", "Click to interact · wheel scrolls · / type a task · q quit"),
        }
    };

    let mut parts = vec![Span::styled(format!(" {} ", hints), Theme::status_bar())];

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + mode.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", mode),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
