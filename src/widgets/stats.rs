use super::cart::Cart;
use super::gallery::Gallery;
use super::todo::TodoList;

/// Header counters, derived from the widgets on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub todos: usize,
    pub images: usize,
    pub cart_units: u32,
    pub clicks: u64,
}

impl Stats {
    pub fn collect(todos: &TodoList, gallery: &Gallery, cart: &Cart, clicks: u64) -> Self {
        Self {
            todos: todos.added(),
            images: gallery.image_count(),
            cart_units: cart.units(),
            clicks,
        }
    }
}
