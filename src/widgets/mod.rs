//! The three demo widgets plus the shared chrome (notifications, modal,
//! prompts, ripples, stats).
//!
//! Each widget owns its state and its own [`Timeline`](crate::timeline::Timeline)
//! of delayed tasks. None of them know about the terminal or the router; the
//! router calls their operations and the UI reads them back.

pub mod cart;
pub mod gallery;
pub mod modal;
pub mod notify;
pub mod ripple;
pub mod stats;
pub mod todo;

use std::time::Duration;

/// Animation phase of a rendered row or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Entering { since: Duration },
    Settled,
    Leaving { since: Duration },
}

impl Motion {
    /// Fraction of `span` elapsed since the phase started, in `0.0..=1.0`.
    /// Settled is always complete.
    pub fn progress(&self, now: Duration, span: Duration) -> f32 {
        let since = match self {
            Motion::Entering { since } | Motion::Leaving { since } => *since,
            Motion::Settled => return 1.0,
        };
        if span.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(since).as_secs_f32();
        (elapsed / span.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self, Motion::Leaving { .. })
    }

    pub fn is_entering(&self) -> bool {
        matches!(self, Motion::Entering { .. })
    }
}
