//! Orders command: print every order in the history.

use crate::parser::{load_orders, Order};
use anyhow::{Context, Result};
use std::path::Path;

/// Print all orders, oldest export position first
pub fn list_orders(input: &Path) -> Result<()> {
    let orders = load_orders(input)
        .with_context(|| format!("Failed to load orders from {}", input.display()))?;

    for order in &orders {
        println!("{}\n", format_order(order));
    }
    println!("{} orders", orders.len());

    Ok(())
}

/// Multi-line listing of one order
pub fn format_order(order: &Order) -> String {
    let mut lines = vec![
        format!("Order {} at {}", order.id, order.ordered_at),
        format!("Restaurant: {}", order.restaurant),
    ];
    lines.extend(
        order
            .items
            .iter()
            .map(|item| format!("  {} x {}", item.name, item.quantity)),
    );
    lines.push(format!("₹{:.2}", order.net_total));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LineItem;

    #[test]
    fn test_format_order() {
        let order = Order {
            id: "42".to_string(),
            restaurant: "Meghana Foods".to_string(),
            ordered_at: "2023-03-15 10:00:00".to_string(),
            restaurant_bill: 300.0,
            delivery_charge: 25.0,
            net_total: 290.5,
            items: vec![
                LineItem { name: "Biryani".to_string(), quantity: 2 },
                LineItem { name: "Raita".to_string(), quantity: 1 },
            ],
        };

        let text = format_order(&order);
        assert_eq!(
            text,
            "Order 42 at 2023-03-15 10:00:00\nRestaurant: Meghana Foods\n  Biryani x 2\n  Raita x 1\n₹290.50"
        );
    }
}
