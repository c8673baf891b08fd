//! Special offers

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::Product;

/// Errors raised when registering a special offer.
#[derive(Debug, Error, PartialEq)]
pub enum OfferError {
    /// Offer parameter outside its valid range (product name, explanation).
    #[error("invalid parameter for {0}: {1}")]
    InvalidParameter(String, String),
}

/// A special offer attached to a single product.
///
/// Offers never span products and never stack: the registry holds at most
/// one offer per product, and checkout applies at most one discount per
/// receipt line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpecialOffer {
    /// Every complete group of three is charged as two.
    ThreeForTwo,

    /// Percentage off the whole line, whatever the quantity.
    PercentDiscount(Decimal),

    /// Two units for a fixed bundle price.
    TwoForAmount(Decimal),

    /// Five units for a fixed bundle price.
    FiveForAmount(Decimal),
}

impl SpecialOffer {
    /// Check that the offer payload is within its valid range.
    fn validate(&self) -> Result<(), String> {
        match self {
            Self::ThreeForTwo => Ok(()),
            Self::PercentDiscount(percent) => {
                if (Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(percent) {
                    Ok(())
                } else {
                    Err(format!("percentage {percent} is not between 0 and 100"))
                }
            }
            Self::TwoForAmount(price) | Self::FiveForAmount(price) => {
                if price.is_sign_negative() {
                    Err(format!("bundle price {price} is negative"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Registry of active offers, at most one per product.
#[derive(Debug, Clone, Default)]
pub struct OfferRegistry {
    offers: FxHashMap<Product, SpecialOffer>,
}

impl OfferRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an offer for a product, replacing any existing offer for the
    /// same product (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::InvalidParameter`] if the offer payload is out
    /// of range; the registry is left unchanged.
    pub fn add_special_offer(
        &mut self,
        product: &Product,
        offer: SpecialOffer,
    ) -> Result<(), OfferError> {
        offer
            .validate()
            .map_err(|reason| OfferError::InvalidParameter(product.name.clone(), reason))?;

        self.offers.insert(product.clone(), offer);

        Ok(())
    }

    /// The active offer for a product, if any.
    #[must_use]
    pub fn offer_for(&self, product: &Product) -> Option<&SpecialOffer> {
        self.offers.get(product)
    }

    /// Number of products with an active offer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Check if no offers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
