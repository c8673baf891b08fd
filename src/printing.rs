//! Receipt printing

use rust_decimal::Decimal;

use crate::{
    money::present_price,
    products::ProductUnit,
    receipt::{Discount, Receipt, ReceiptItem},
};

/// Default printable column width for receipts.
pub const DEFAULT_COLUMNS: usize = 40;

/// Formats a [`Receipt`] as fixed-width printable text.
///
/// Items print in receipt order, then discounts, then a blank line and the
/// total. Each line places its description on the left and its amount on the
/// right, padded to the configured column width.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPrinter {
    columns: usize,
}

impl ReceiptPrinter {
    /// Create a printer for the given column width.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }

    /// Render the receipt as printable text.
    #[must_use]
    pub fn print_receipt(&self, receipt: &Receipt) -> String {
        let mut out = String::new();

        for item in receipt.items() {
            self.push_item(&mut out, item);
        }

        for discount in receipt.discounts() {
            self.push_discount(&mut out, discount);
        }

        out.push('\n');
        self.push_line(&mut out, "Total: ", &present_price(receipt.total()));

        out
    }

    fn push_item(&self, out: &mut String, item: &ReceiptItem) {
        self.push_line(out, &item.product().name, &present_price(item.total_price()));

        if item.quantity() != Decimal::ONE {
            out.push_str(&format!(
                "  {} * {}\n",
                present_price(item.unit_price()),
                present_quantity(item),
            ));
        }
    }

    fn push_discount(&self, out: &mut String, discount: &Discount) {
        let label = format!("{}({})", discount.description(), discount.product().name);

        self.push_line(out, &label, &present_price(discount.amount()));
    }

    /// Append one padded line. Padding saturates at zero so over-long lines
    /// degrade gracefully instead of panicking.
    fn push_line(&self, out: &mut String, left: &str, right: &str) {
        let padding = self.columns.saturating_sub(left.len() + right.len());

        out.push_str(left);
        out.push_str(&" ".repeat(padding));
        out.push_str(right);
        out.push('\n');
    }
}

impl Default for ReceiptPrinter {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

/// Present a line quantity: whole units for each-products, three decimal
/// places for weighed products.
fn present_quantity(item: &ReceiptItem) -> String {
    match item.product().unit {
        ProductUnit::Each => item.quantity().trunc().normalize().to_string(),
        ProductUnit::Kilo => format!("{:.3}", item.quantity()),
    }
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;

    use crate::products::Product;

    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    fn item(product: Product, quantity: &str, unit_price: &str) -> ReceiptItem {
        let quantity = dec(quantity);
        let unit_price = dec(unit_price);

        ReceiptItem::new(product, quantity, unit_price, quantity * unit_price)
    }

    #[test]
    fn lines_are_padded_to_the_column_width() {
        let receipt = Receipt::new(
            vec![item(
                Product::new("toothbrush", ProductUnit::Each),
                "1",
                "0.99",
            )],
            SmallVec::new(),
        );

        let printed = ReceiptPrinter::new(40).print_receipt(&receipt);

        assert_eq!(
            printed,
            "toothbrush                          0.99\n\
             \n\
             Total:                              0.99\n",
        );
    }

    #[test]
    fn padding_saturates_when_the_width_is_too_small() {
        let receipt = Receipt::new(
            vec![item(
                Product::new("toothbrush", ProductUnit::Each),
                "1",
                "0.99",
            )],
            SmallVec::new(),
        );

        let printed = ReceiptPrinter::new(5).print_receipt(&receipt);

        assert!(printed.starts_with("toothbrush0.99\n"), "printed: {printed}");
    }

    #[test]
    fn each_quantities_print_as_whole_units() {
        let receipt_item = item(Product::new("toothbrush", ProductUnit::Each), "3", "0.99");

        assert_eq!(present_quantity(&receipt_item), "3");
    }

    #[test]
    fn weighed_quantities_print_with_three_decimal_places() {
        let half_kilo = item(Product::new("apples", ProductUnit::Kilo), "0.5", "1.99");
        let six_kilos = item(Product::new("apples", ProductUnit::Kilo), "6", "1.99");

        assert_eq!(present_quantity(&half_kilo), "0.500");
        assert_eq!(present_quantity(&six_kilos), "6.000");
    }

    #[test]
    fn quantity_sub_line_is_omitted_for_single_units() {
        let receipt = Receipt::new(
            vec![item(Product::new("rice", ProductUnit::Each), "1", "2.99")],
            SmallVec::new(),
        );

        let printed = ReceiptPrinter::default().print_receipt(&receipt);

        assert!(!printed.contains('*'), "printed: {printed}");
    }
}
