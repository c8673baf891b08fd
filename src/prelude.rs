//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError, BasketLine},
    catalog::{Catalog, InMemoryCatalog},
    checkout::{CheckoutError, check_out},
    money::{present_price, round_price},
    offers::{OfferError, OfferRegistry, SpecialOffer},
    printing::{DEFAULT_COLUMNS, ReceiptPrinter},
    products::{Product, ProductUnit},
    receipt::{Discount, Receipt, ReceiptItem},
};
