use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub todo: Rect,
    pub gallery: Rect,
    pub cart: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: stats header | widgets | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats header
            Constraint::Min(8),    // Widgets
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Widgets side by side with a one-column gap
    let widget_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Percentage(32), // To-do
            Constraint::Percentage(38), // Gallery
            Constraint::Percentage(30), // Cart
        ])
        .split(main_chunks[1]);

    AppLayout {
        header: main_chunks[0],
        todo: widget_chunks[0],
        gallery: widget_chunks[1],
        cart: widget_chunks[2],
        status_bar: main_chunks[2],
    }
}

/// A `width` x `height` rect centred in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
