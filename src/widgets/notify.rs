//! Transient notification banner.
//!
//! There is no queue: a new message replaces the current one immediately.
//! Each message carries a generation so an older dismissal task cannot hide a
//! newer message early.

use crate::timeline::Timeline;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug)]
pub struct Notifier {
    current: Option<Notice>,
    generation: u64,
    duration: Duration,
    timeline: Timeline<u64>,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            duration,
            timeline: Timeline::new(),
        }
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!(?severity, %message, "notification");
        self.generation += 1;
        self.current = Some(Notice { message, severity });
        self.timeline.after(self.duration, self.generation);
    }

    pub fn advance(&mut self, now: Duration) {
        while let Some(generation) = self.timeline.pop_due(now) {
            if generation == self.generation {
                self.current = None;
            }
        }
        self.timeline.advance_to(now);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }
}
