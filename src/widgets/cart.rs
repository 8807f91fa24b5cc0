//! Shopping cart widget.
//!
//! One line per product id, quantity always at least 1. Every mutation leaves
//! the cart ready for a full re-render; the total is computed on demand.

use crate::catalog::{Catalog, Product, ProductId};
use crate::timeline::Timeline;
use std::collections::BTreeSet;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// Direction of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Unknown product {0}")]
    UnknownProduct(ProductId),
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),
}

#[derive(Debug)]
pub struct Cart {
    lines: Vec<CartLine>,
    /// Products whose add control is showing its confirmation.
    confirming: BTreeSet<ProductId>,
    hovered: Option<ProductId>,
    feedback: Duration,
    timeline: Timeline<ProductId>,
}

impl Cart {
    pub fn new(feedback: Duration) -> Self {
        Self {
            lines: Vec::new(),
            confirming: BTreeSet::new(),
            hovered: None,
            feedback,
            timeline: Timeline::new(),
        }
    }

    /// Add one unit of `id` from the catalog, creating the line if needed.
    pub fn add_product(&mut self, catalog: &Catalog, id: ProductId) -> Result<&CartLine, CartError> {
        let product = catalog.product(id).ok_or(CartError::UnknownProduct(id))?;

        let idx = match self.lines.iter().position(|l| l.product.id == id) {
            Some(idx) => {
                self.lines[idx].quantity += 1;
                idx
            }
            None => {
                self.lines.push(CartLine {
                    product: product.clone(),
                    quantity: 1,
                });
                self.lines.len() - 1
            }
        };

        self.confirming.insert(id);
        self.timeline.after(self.feedback, id);
        tracing::debug!(id, quantity = self.lines[idx].quantity, "cart add");
        Ok(&self.lines[idx])
    }

    /// Drop the whole line regardless of quantity.
    pub fn remove_product(&mut self, id: ProductId) -> Result<CartLine, CartError> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.product.id == id)
            .ok_or(CartError::NotInCart(id))?;
        tracing::debug!(id, "cart remove");
        Ok(self.lines.remove(idx))
    }

    /// Change the quantity by one. Decreasing stops at 1; it never removes
    /// the line. Returns the resulting quantity.
    pub fn update_quantity(&mut self, id: ProductId, step: Step) -> Result<u32, CartError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == id)
            .ok_or(CartError::NotInCart(id))?;
        match step {
            Step::Increase => line.quantity += 1,
            Step::Decrease if line.quantity > 1 => line.quantity -= 1,
            Step::Decrease => {}
        }
        Ok(line.quantity)
    }

    pub fn advance(&mut self, now: Duration) {
        while let Some(id) = self.timeline.pop_due(now) {
            self.confirming.remove(&id);
        }
        self.timeline.advance_to(now);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[cfg(test)]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn units(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of subtotals, folded from `0.0`: a float `sum` of nothing is `-0.0`.
    pub fn total(&self) -> f64 {
        self.lines.iter().fold(0.0, |acc, l| acc + l.subtotal())
    }

    pub fn total_label(&self) -> String {
        format_price(self.total())
    }

    pub fn is_confirming(&self, id: ProductId) -> bool {
        self.confirming.contains(&id)
    }

    pub fn set_hovered(&mut self, id: ProductId, hovered: bool) {
        if hovered {
            self.hovered = Some(id);
        } else if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    pub fn hovered(&self) -> Option<ProductId> {
        self.hovered
    }

    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }
}

pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}
