//! Basket

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::products::Product;

/// Errors related to basket construction.
#[derive(Debug, Error, PartialEq)]
pub enum BasketError {
    /// Rejected line quantity (product name, offending quantity).
    #[error("invalid quantity {1} for {0}; quantities must be greater than zero")]
    InvalidQuantity(String, Decimal),
}

/// A basket line: a product plus its accumulated quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketLine {
    product: Product,
    quantity: Decimal,
}

impl BasketLine {
    /// The product on this line.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Accumulated quantity of the product.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }
}

/// Basket
///
/// Lines are grouped by product: adding a product already in the basket
/// accumulates its quantity into the existing line. First-insertion order is
/// preserved and drives receipt line order.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    lines: Vec<BasketLine>,
}

impl Basket {
    /// Create a new empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single unit of a product.
    pub fn add_item(&mut self, product: &Product) {
        self.accumulate(product, Decimal::ONE);
    }

    /// Add an arbitrary quantity of a product, for items priced by weight or
    /// measure.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::InvalidQuantity`] if `quantity` is zero or
    /// negative; the basket is left unchanged.
    pub fn add_item_quantity(
        &mut self,
        product: &Product,
        quantity: Decimal,
    ) -> Result<(), BasketError> {
        if quantity <= Decimal::ZERO {
            return Err(BasketError::InvalidQuantity(
                product.name.clone(),
                quantity,
            ));
        }

        self.accumulate(product, quantity);

        Ok(())
    }

    /// Lines in first-insertion order.
    #[must_use]
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Number of distinct products in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn accumulate(&mut self, product: &Product, quantity: Decimal) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product == *product)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(BasketLine {
                product: product.clone(),
                quantity,
            });
        }
    }
}
