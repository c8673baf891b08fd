//! Utils

use clap::Parser;

use crate::printing::DEFAULT_COLUMNS;

/// Arguments for the receipt demos
#[derive(Debug, Parser)]
pub struct DemoReceiptArgs {
    /// Printable column width for the receipt
    #[clap(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub width: usize,

    /// Emit the receipt as JSON instead of printed text
    #[clap(short, long)]
    pub json: bool,
}
