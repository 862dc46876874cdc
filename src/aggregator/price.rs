//! Gross/net spend totals.
//!
//! Gross is restaurant bill plus delivery charge. Net is whatever the
//! export says was paid; it is never recomputed from gross.

use crate::parser::Order;
use log::debug;

/// Spend totals over an order sequence
///
/// **Public** - returned from aggregate_prices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTotals {
    /// Sum of net totals
    pub total_net: f64,

    /// Sum of bill + delivery
    pub total_gross: f64,

    /// Net total per order, in input order
    pub price_list: Vec<f64>,
}

impl PriceTotals {
    /// Amount saved through discounts
    pub fn total_discount(&self) -> f64 {
        self.total_gross - self.total_net
    }
}

/// Compute net/gross totals and the per-order net price list
///
/// **Public** - main entry point for price aggregation
pub fn aggregate_prices(orders: &[Order]) -> PriceTotals {
    let mut totals = PriceTotals {
        price_list: Vec::with_capacity(orders.len()),
        ..Default::default()
    };

    for order in orders {
        totals.total_gross += order.gross_total();
        totals.total_net += order.net_total;
        totals.price_list.push(order.net_total);
    }

    debug!(
        "Price totals over {} orders: net {:.2}, gross {:.2}",
        orders.len(),
        totals.total_net,
        totals.total_gross
    );

    totals
}
