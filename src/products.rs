//! Products

use serde::{Deserialize, Serialize};

/// How a product is measured at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductUnit {
    /// Counted in whole items.
    Each,

    /// Weighed by the kilogram.
    Kilo,
}

/// Product
///
/// Identity is the name together with the unit; the catalog and the offer
/// registry both key on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Unit the product is sold in
    pub unit: ProductUnit,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }
}
