//! Till
//!
//! Till is a small, deterministic supermarket checkout engine: it prices a
//! basket of products against a catalog, applies per-product special offers
//! and renders the result as a printable receipt.

pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod money;
pub mod offers;
pub mod prelude;
pub mod printing;
pub mod products;
pub mod receipt;
pub mod utils;
