//! Receipt

use rust_decimal::Decimal;
use serde::Serialize;
use smallvec::SmallVec;

use crate::products::Product;

/// A line charged on the receipt.
///
/// The total keeps full precision; rounding happens at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptItem {
    product: Product,
    quantity: Decimal,
    unit_price: Decimal,
    total_price: Decimal,
}

impl ReceiptItem {
    pub(crate) fn new(
        product: Product,
        quantity: Decimal,
        unit_price: Decimal,
        total_price: Decimal,
    ) -> Self {
        Self {
            product,
            quantity,
            unit_price,
            total_price,
        }
    }

    /// The product charged on this line.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Quantity charged.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Unit price the line was charged at.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Line total (quantity times unit price).
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}

/// A discount applied to a single product line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discount {
    product: Product,
    description: String,
    amount: Decimal,
}

impl Discount {
    pub(crate) fn new(product: Product, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            product,
            description: description.into(),
            amount,
        }
    }

    /// The product the discount applies to.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Human-readable description of the offer that produced the discount.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Adjustment to the total; negative for money taken off.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Final receipt for a checked-out basket.
///
/// Built once by checkout and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    items: Vec<ReceiptItem>,
    discounts: SmallVec<[Discount; 4]>,
}

impl Receipt {
    pub(crate) fn new(items: Vec<ReceiptItem>, discounts: SmallVec<[Discount; 4]>) -> Self {
        Self { items, discounts }
    }

    /// Items in the order their products first entered the basket.
    #[must_use]
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    /// Discounts in the same relative order as their items.
    #[must_use]
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Total cost before any discounts.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(ReceiptItem::total_price).sum()
    }

    /// Amount owed after discounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.discount_amount()
    }

    /// Amount saved across all discounts, as a positive value.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        -self.discount_amount()
    }

    fn discount_amount(&self) -> Decimal {
        self.discounts.iter().map(Discount::amount).sum()
    }
}
