//! Click ripples on button controls.

use crate::timeline::Timeline;
use ratatui::layout::{Position, Rect};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub id: u64,
    /// Bounding box of the clicked control.
    pub area: Rect,
    /// Pointer offset inside `area`.
    pub origin: (u16, u16),
    pub since: Duration,
}

#[derive(Debug)]
pub struct Ripples {
    active: Vec<Ripple>,
    next_id: u64,
    duration: Duration,
    timeline: Timeline<u64>,
}

impl Ripples {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
            duration,
            timeline: Timeline::new(),
        }
    }

    pub fn spawn(&mut self, area: Rect, pointer: Position) {
        let id = self.next_id;
        self.next_id += 1;
        let origin = (
            pointer.x.saturating_sub(area.x).min(area.width.saturating_sub(1)),
            pointer.y.saturating_sub(area.y).min(area.height.saturating_sub(1)),
        );
        self.active.push(Ripple {
            id,
            area,
            origin,
            since: self.timeline.now(),
        });
        self.timeline.after(self.duration, id);
    }

    pub fn advance(&mut self, now: Duration) {
        while let Some(id) = self.timeline.pop_due(now) {
            self.active.retain(|r| r.id != id);
        }
        self.timeline.advance_to(now);
    }

    pub fn active(&self) -> &[Ripple] {
        &self.active
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }
}
