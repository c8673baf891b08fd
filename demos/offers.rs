//! Offers Example
//!
//! Prints a receipt for a basket where every product carries a special
//! offer: three-for-two toothbrushes, ten percent off rice, five kilos of
//! apples for a fixed price and two cherry tomato boxes for a fixed price.
//!
//! Run with: `cargo run --example offers`

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;

use till::{
    prelude::{
        Basket, InMemoryCatalog, OfferRegistry, Product, ProductUnit, Receipt, ReceiptPrinter,
        SpecialOffer, check_out,
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

/// Offers Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoReceiptArgs::parse();

    let toothbrush = Product::new("toothbrush", ProductUnit::Each);
    let rice = Product::new("rice", ProductUnit::Each);
    let apples = Product::new("apples", ProductUnit::Kilo);
    let cherry_tomatoes = Product::new("cherry tomato box", ProductUnit::Each);

    let mut catalog = InMemoryCatalog::new();
    catalog.add_product(toothbrush.clone(), "0.99".parse::<Decimal>()?);
    catalog.add_product(rice.clone(), "2.99".parse::<Decimal>()?);
    catalog.add_product(apples.clone(), "1.99".parse::<Decimal>()?);
    catalog.add_product(cherry_tomatoes.clone(), "0.69".parse::<Decimal>()?);

    let mut offers = OfferRegistry::new();
    offers.add_special_offer(&toothbrush, SpecialOffer::ThreeForTwo)?;
    offers.add_special_offer(&rice, SpecialOffer::PercentDiscount("10".parse()?))?;
    offers.add_special_offer(&apples, SpecialOffer::FiveForAmount("6.99".parse()?))?;
    offers.add_special_offer(&cherry_tomatoes, SpecialOffer::TwoForAmount("0.99".parse()?))?;

    let mut basket = Basket::new();
    basket.add_item_quantity(&toothbrush, "3".parse::<Decimal>()?)?;
    basket.add_item(&rice);
    basket.add_item_quantity(&apples, "6".parse::<Decimal>()?)?;
    basket.add_item_quantity(&cherry_tomatoes, "2".parse::<Decimal>()?)?;

    let receipt = check_out(&basket, &catalog, &offers)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&receipt_json(&receipt))?);
    } else {
        print!("{}", ReceiptPrinter::new(args.width).print_receipt(&receipt));
    }

    Ok(())
}
