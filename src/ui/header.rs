use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the live counters.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let stats = state.stats();
    let block = Block::default()
        .title(" Widget Board ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let counter = |label: &'static str, value: String| {
        [
            Span::styled(label, Theme::secondary()),
            Span::styled(value, Theme::text().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
        ]
    };
    let mut spans = vec![Span::raw(" ")];
    spans.extend(counter("Tasks ", stats.todos.to_string()));
    spans.extend(counter("Images ", stats.images.to_string()));
    spans.extend(counter("Cart items ", stats.cart_units.to_string()));
    spans.extend(counter("Clicks ", stats.clicks.to_string()));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
