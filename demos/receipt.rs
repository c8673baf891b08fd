//! Receipt Example
//!
//! Prints a plain receipt for a small basket with no offers applied.
//!
//! Run with: `cargo run --example receipt`

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;

use till::{
    prelude::{
        Basket, InMemoryCatalog, OfferRegistry, Product, ProductUnit, Receipt, ReceiptPrinter,
        check_out,
    },
    utils::DemoReceiptArgs,
};

fn receipt_json(receipt: &Receipt) -> serde_json::Value {
    serde_json::json!({
        "items": receipt.items(),
        "discounts": receipt.discounts(),
        "subtotal": receipt.subtotal(),
        "savings": receipt.savings(),
        "total": receipt.total(),
    })
}

/// Receipt Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoReceiptArgs::parse();

    let toothbrush = Product::new("toothbrush", ProductUnit::Each);
    let rice = Product::new("rice", ProductUnit::Each);
    let apples = Product::new("apples", ProductUnit::Kilo);

    let mut catalog = InMemoryCatalog::new();
    catalog.add_product(toothbrush.clone(), "0.99".parse::<Decimal>()?);
    catalog.add_product(rice.clone(), "2.99".parse::<Decimal>()?);
    catalog.add_product(apples.clone(), "1.99".parse::<Decimal>()?);

    let mut basket = Basket::new();
    basket.add_item(&toothbrush);
    basket.add_item(&rice);
    basket.add_item_quantity(&apples, "0.5".parse::<Decimal>()?)?;

    let receipt = check_out(&basket, &catalog, &OfferRegistry::new())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&receipt_json(&receipt))?);
    } else {
        print!("{}", ReceiptPrinter::new(args.width).print_receipt(&receipt));
    }

    Ok(())
}
