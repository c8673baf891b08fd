//! Checkout

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    basket::Basket,
    catalog::Catalog,
    money::present_price,
    offers::{OfferRegistry, SpecialOffer},
    products::Product,
    receipt::{Discount, Receipt, ReceiptItem},
};

/// Errors that can occur while checking out a basket.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// The catalog has no unit price for a product in the basket.
    #[error("unknown product {0}; the catalog has no unit price for it")]
    UnknownProduct(String),
}

/// Price a basket against a catalog and an offer registry.
///
/// Lines are priced in basket order and each line with an applicable offer
/// contributes at most one discount, in the same relative order as the
/// items. Inputs are borrowed read-only and the returned receipt is
/// independently owned, so identical inputs always produce an identical
/// receipt.
///
/// # Errors
///
/// Returns [`CheckoutError::UnknownProduct`] if the catalog has no price for
/// any product in the basket. No partial receipt is produced.
pub fn check_out<C: Catalog>(
    basket: &Basket,
    catalog: &C,
    offers: &OfferRegistry,
) -> Result<Receipt, CheckoutError> {
    let mut items = Vec::with_capacity(basket.len());
    let mut discounts = SmallVec::new();

    for line in basket.lines() {
        let product = line.product();

        let unit_price = catalog
            .unit_price(product)
            .ok_or_else(|| CheckoutError::UnknownProduct(product.name.clone()))?;

        items.push(ReceiptItem::new(
            product.clone(),
            line.quantity(),
            unit_price,
            line.quantity() * unit_price,
        ));

        if let Some(offer) = offers.offer_for(product) {
            if let Some(discount) = discount_for(product, line.quantity(), unit_price, offer) {
                discounts.push(discount);
            }
        }
    }

    Ok(Receipt::new(items, discounts))
}

/// Compute the discount a single offer yields for one priced line, if the
/// offer's quantity threshold is met.
fn discount_for(
    product: &Product,
    quantity: Decimal,
    unit_price: Decimal,
    offer: &SpecialOffer,
) -> Option<Discount> {
    match offer {
        SpecialOffer::ThreeForTwo => {
            bundle_discount(quantity, unit_price, 3, Decimal::TWO * unit_price)
                .map(|amount| Discount::new(product.clone(), "3 for 2", amount))
        }
        SpecialOffer::PercentDiscount(percent) => {
            let amount = -(quantity * unit_price * *percent / Decimal::ONE_HUNDRED);

            Some(Discount::new(
                product.clone(),
                format!("{}% off", percent.normalize()),
                amount,
            ))
        }
        SpecialOffer::TwoForAmount(bundle_price) => {
            bundle_discount(quantity, unit_price, 2, *bundle_price).map(|amount| {
                Discount::new(
                    product.clone(),
                    format!("2 for {}", present_price(*bundle_price)),
                    amount,
                )
            })
        }
        SpecialOffer::FiveForAmount(bundle_price) => {
            bundle_discount(quantity, unit_price, 5, *bundle_price).map(|amount| {
                Discount::new(
                    product.clone(),
                    format!("5 for {}", present_price(*bundle_price)),
                    amount,
                )
            })
        }
    }
}

/// Discount for "`group_size` units at `group_price`" against a single line.
///
/// Complete groups are charged at the bundle price; any remainder is charged
/// at the full unit price, never at a prorated bundle rate. Returns `None`
/// when the quantity is below the group size.
fn bundle_discount(
    quantity: Decimal,
    unit_price: Decimal,
    group_size: u32,
    group_price: Decimal,
) -> Option<Decimal> {
    let group_size = Decimal::from(group_size);

    if quantity < group_size {
        return None;
    }

    let groups = (quantity / group_size).floor();
    let remainder = quantity - groups * group_size;
    let discounted = groups * group_price + remainder * unit_price;

    Some(discounted - quantity * unit_price)
}

#[cfg(test)]
mod tests {
    use crate::products::ProductUnit;

    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    fn toothbrush() -> Product {
        Product::new("toothbrush", ProductUnit::Each)
    }

    #[test]
    fn bundle_discount_below_the_group_size_is_none() {
        assert_eq!(bundle_discount(dec("2"), dec("0.99"), 3, dec("1.98")), None);
        assert_eq!(bundle_discount(dec("4"), dec("1.99"), 5, dec("6.99")), None);
    }

    #[test]
    fn bundle_discount_charges_each_complete_group_at_the_bundle_price() {
        // Two bundles of five at 6.99 against 10 units at 1.99.
        assert_eq!(
            bundle_discount(dec("10"), dec("1.99"), 5, dec("6.99")),
            Some(dec("-5.92")),
        );
    }

    #[test]
    fn bundle_discount_charges_the_remainder_at_full_unit_price() {
        // Three bundles and one loose unit: 3 * 6.99 + 1.99 against 16 * 1.99.
        assert_eq!(
            bundle_discount(dec("16"), dec("1.99"), 5, dec("6.99")),
            Some(dec("-8.88")),
        );
    }

    #[test]
    fn three_for_two_discounts_one_unit_per_complete_group() {
        let offer = SpecialOffer::ThreeForTwo;

        let discount = discount_for(&toothbrush(), dec("5"), dec("0.99"), &offer)
            .map(|discount| discount.amount());

        assert_eq!(discount, Some(dec("-0.99")));
    }

    #[test]
    fn three_for_two_below_threshold_yields_no_discount() {
        let offer = SpecialOffer::ThreeForTwo;

        assert_eq!(
            discount_for(&toothbrush(), dec("2"), dec("0.99"), &offer),
            None,
        );
    }

    #[test]
    fn percent_discount_applies_at_any_quantity() {
        let offer = SpecialOffer::PercentDiscount(Decimal::TEN);

        let discount = discount_for(&toothbrush(), dec("0.5"), dec("1.99"), &offer)
            .map(|discount| discount.amount());

        assert_eq!(discount, Some(dec("-0.0995")));
    }

    #[test]
    fn percent_discount_keeps_full_precision() {
        let offer = SpecialOffer::PercentDiscount(Decimal::TEN);

        let discount = discount_for(&toothbrush(), dec("1"), dec("2.99"), &offer)
            .map(|discount| discount.amount());

        assert_eq!(discount, Some(dec("-0.299")));
    }

    #[test]
    fn percent_discount_description_includes_the_percentage() {
        let offer = SpecialOffer::PercentDiscount(Decimal::TEN);

        let description = discount_for(&toothbrush(), dec("1"), dec("2.99"), &offer)
            .map(|discount| discount.description().to_string());

        assert_eq!(description.as_deref(), Some("10% off"));
    }

    #[test]
    fn bundle_offer_descriptions_include_the_bundle_price() {
        let offer = SpecialOffer::TwoForAmount(dec("0.99"));

        let description = discount_for(&toothbrush(), dec("2"), dec("0.69"), &offer)
            .map(|discount| discount.description().to_string());

        assert_eq!(description.as_deref(), Some("2 for 0.99"));
    }
}
