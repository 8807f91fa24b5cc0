use crate::widgets::notify::Severity;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 20, 26);
    pub const BG_SURFACE: Color = Color::Rgb(28, 31, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 56);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 92);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 228, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 106, 120);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_RED: Color = Color::Rgb(230, 95, 95);
    pub const ACCENT_BLUE: Color = Color::Rgb(100, 170, 230);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).bg(Self::BG_ELEVATED)
    }

    pub fn button_hover() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_danger() -> Style {
        Style::default().fg(Self::ACCENT_RED).bg(Self::BG_ELEVATED)
    }

    pub fn button_done() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn completed() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn leaving() -> Style {
        Style::default()
            .fg(Self::BORDER_DIM)
            .add_modifier(Modifier::DIM)
    }

    pub fn price() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn ripple() -> Style {
        Style::default().bg(Self::ACCENT_BLUE).fg(Self::BG_DARK)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    /// Border and text colour of a notification.
    pub fn severity(severity: Severity) -> Style {
        let color = match severity {
            Severity::Success => Self::ACCENT_GREEN,
            Severity::Error => Self::ACCENT_RED,
            Severity::Info => Self::ACCENT_BLUE,
            Severity::Warning => Self::ACCENT_AMBER,
        };
        Style::default().fg(color)
    }
}
