//! Catalog

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::products::Product;

/// Price lookup for products.
///
/// Implementations know current unit prices and nothing about offers.
/// Checkout treats a missing price as a hard error rather than pricing the
/// line at zero.
pub trait Catalog {
    /// Current unit price for the product, if it is listed.
    fn unit_price(&self, product: &Product) -> Option<Decimal>;
}

/// In-memory catalog backed by a hash map, for seeding demos and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    prices: FxHashMap<Product, Decimal>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product with its unit price, replacing any existing price.
    pub fn add_product(&mut self, product: Product, unit_price: Decimal) {
        self.prices.insert(product, unit_price);
    }
}

impl Catalog for InMemoryCatalog {
    fn unit_price(&self, product: &Product) -> Option<Decimal> {
        self.prices.get(product).copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::products::ProductUnit;

    use super::*;

    #[test]
    fn unit_price_returns_the_listed_price() {
        let mut catalog = InMemoryCatalog::new();
        let rice = Product::new("rice", ProductUnit::Each);

        catalog.add_product(rice.clone(), Decimal::new(299, 2));

        assert_eq!(catalog.unit_price(&rice), Some(Decimal::new(299, 2)));
    }

    #[test]
    fn unit_price_is_none_for_unlisted_products() {
        let catalog = InMemoryCatalog::new();
        let rice = Product::new("rice", ProductUnit::Each);

        assert_eq!(catalog.unit_price(&rice), None);
    }

    #[test]
    fn add_product_replaces_the_previous_price() {
        let mut catalog = InMemoryCatalog::new();
        let rice = Product::new("rice", ProductUnit::Each);

        catalog.add_product(rice.clone(), Decimal::new(299, 2));
        catalog.add_product(rice.clone(), Decimal::new(249, 2));

        assert_eq!(catalog.unit_price(&rice), Some(Decimal::new(249, 2)));
    }
}
