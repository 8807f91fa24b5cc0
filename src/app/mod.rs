//! Core application logic: state, hit areas, event routing and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod hit;
pub mod state;
