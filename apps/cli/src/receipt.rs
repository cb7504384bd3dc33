//! # Bill Renderer
//!
//! Turns a finished order into the printed bill.
//!
//! ## Layout
//! ```text
//! Final Order
//! +----------------+-------------+
//! | Item           | Price (Rs.) |
//! +----------------+-------------+
//! | Veg Burger     | 115.00      |
//! +----------------+-------------+
//! | Order Amount   | 115.00      |
//! +----------------+-------------+
//! | Service Charge | 1.15        |
//! +----------------+-------------+
//! | Final Amount   | 116.15      |
//! +----------------+-------------+
//! ```
//!
//! ## Error Boundary
//! [`print_bill`] never fails. Any error while computing or writing the bill
//! is logged and replaced by a short message to the user.

use std::io::Write;

use colored::Colorize;
use console::measure_text_width;
use tracing::{error, info};

use mcshell_core::{BillSummary, Order};

use crate::error::AppResult;

pub const HEADING: &str = "Final Order";
pub const FAILURE_MESSAGE: &str = "Error occurred while generating bill.";

// =============================================================================
// Table
// =============================================================================

/// Two-column bordered table with a separator after every row.
struct Table {
    rows: Vec<[String; 2]>,
}

impl Table {
    fn new(header: [&str; 2]) -> Self {
        Table {
            rows: vec![header.map(str::to_string)],
        }
    }

    fn add_row(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push([label.into(), value.into()]);
    }

    fn widths(&self) -> [usize; 2] {
        let mut widths = [0, 0];
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(measure_text_width(cell));
            }
        }
        widths
    }

    fn draw(&self) -> String {
        let widths = self.widths();
        let border = format!(
            "+{}+{}+",
            "-".repeat(widths[0] + 2),
            "-".repeat(widths[1] + 2)
        );

        let mut out = border.clone();
        for row in &self.rows {
            out.push('\n');
            out.push('|');
            for (col, cell) in row.iter().enumerate() {
                let pad = widths[col] - measure_text_width(cell);
                out.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
            }
            out.push('\n');
            out.push_str(&border);
        }
        out
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the bill table for an order.
pub fn render_bill(order: &Order) -> AppResult<String> {
    let summary = BillSummary::from_order(order)?;

    let mut table = Table::new(["Item", "Price (Rs.)"]);
    for line in order.lines() {
        table.add_row(line.name.as_str(), line.price.fixed_2dp());
    }
    table.add_row("Order Amount", summary.subtotal.fixed_2dp());
    table.add_row("Service Charge", summary.service_charge.fixed_2dp());
    table.add_row("Final Amount", summary.final_amount.fixed_2dp());

    info!(
        items = order.len(),
        subtotal = %summary.subtotal,
        rate = %summary.rate,
        service_charge = %summary.service_charge,
        final_amount = %summary.final_amount,
        "bill computed"
    );

    Ok(table.draw())
}

/// Writes the heading and the bill table.
pub fn write_bill<W: Write>(order: &Order, out: &mut W) -> AppResult<()> {
    let table = render_bill(order)?;
    writeln!(out)?;
    writeln!(out, "{}", HEADING.green().bold())?;
    writeln!(out, "{}", table)?;
    out.flush()?;
    Ok(())
}

/// Prints the bill, reporting any failure instead of returning it.
pub fn print_bill<W: Write>(order: &Order, out: &mut W) {
    if let Err(err) = write_bill(order, out) {
        error!(error = %err, details = ?err, "failed to generate bill");
        let _ = writeln!(out, "{}", FAILURE_MESSAGE);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mcshell_core::{Catalog, Category, MenuOption, Money};
    use std::io;

    fn plain() {
        colored::control::set_override(false);
    }

    fn order_of(labels: &[&str]) -> Order {
        let food = Catalog::food();
        let drinks = Catalog::beverages();
        let mut order = Order::new();
        for label in labels {
            match food.resolve(label) {
                Ok(option) => order.add(Category::Food, option).unwrap(),
                Err(_) => order
                    .add(Category::Beverage, drinks.resolve(label).unwrap())
                    .unwrap(),
            };
        }
        order
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_single_item() {
        let table = render_bill(&order_of(&["Veg Burger Rs. 115.0"])).unwrap();
        let expected = "\
+----------------+-------------+
| Item           | Price (Rs.) |
+----------------+-------------+
| Veg Burger     | 115.00      |
+----------------+-------------+
| Order Amount   | 115.00      |
+----------------+-------------+
| Service Charge | 1.15        |
+----------------+-------------+
| Final Amount   | 116.15      |
+----------------+-------------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_empty_order() {
        let table = render_bill(&Order::new()).unwrap();
        let rows: Vec<&str> = table.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(
            rows,
            vec![
                "| Item           | Price (Rs.) |",
                "| Order Amount   | 0.00        |",
                "| Service Charge | 0.00        |",
                "| Final Amount   | 0.00        |",
            ]
        );
    }

    #[test]
    fn test_long_item_name_widens_column() {
        let table = render_bill(&order_of(&[
            "Chocolate Smoothie w/ Icecream Rs. 195.0",
            "Chicken Wrap Rs. 195.0",
        ]))
        .unwrap();

        assert!(table.contains("| Chocolate Smoothie w/ Icecream | 195.00      |"));
        assert!(table.contains("| Order Amount                   | 390.00      |"));
        assert!(table.contains("| Service Charge                 | 11.70       |"));
        assert!(table.contains("| Final Amount                   | 401.70      |"));

        let widths: Vec<usize> = table.lines().map(|l| l.len()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_items_keep_selection_order() {
        let table = render_bill(&order_of(&[
            "Sprite (L) Rs. 130.0",
            "Veg Wrap Rs. 130.0",
            "Sprite (L) Rs. 130.0",
        ]))
        .unwrap();
        let items: Vec<&str> = table
            .lines()
            .filter(|l| l.starts_with('|'))
            .skip(1)
            .take(3)
            .collect();
        assert!(items[0].starts_with("| Sprite (L)"));
        assert!(items[1].starts_with("| Veg Wrap"));
        assert!(items[2].starts_with("| Sprite (L)"));
    }

    #[test]
    fn test_print_bill_writes_heading_and_table() {
        plain();
        let mut out = Vec::new();
        print_bill(&Order::new(), &mut out);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("\nFinal Order\n+"));
        assert!(shown.contains("| Final Amount   | 0.00        |"));
        assert!(!shown.contains(FAILURE_MESSAGE));
    }

    #[test]
    fn test_print_bill_reports_computation_failure() {
        let mut order = Order::new();
        let huge = MenuOption::item("Gold Burger", Money::from_paise(i64::MAX));
        order.add(Category::Food, &huge).unwrap();
        order.add(Category::Food, &huge).unwrap();

        let mut out = Vec::new();
        print_bill(&order, &mut out);

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, format!("{}\n", FAILURE_MESSAGE));
    }

    #[test]
    fn test_print_bill_survives_broken_output() {
        print_bill(&Order::new(), &mut BrokenWriter);
    }

    #[test]
    fn test_write_bill_propagates_io_error() {
        let result = write_bill(&Order::new(), &mut BrokenWriter);
        assert!(matches!(result, Err(crate::error::AppError::Io(_))));
    }
}
