use crossterm::event::Event as CrosstermEvent;
use std::time::Duration;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Animation frame, carrying the real time since the previous one
    Tick(Duration),
}
