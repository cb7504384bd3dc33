//! # Session Driver
//!
//! Runs one ordering session from the welcome banner to the bill.
//!
//! ## Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌────────────┐  finish   ┌────────────────┐  finish   ┌──────────┐    │
//! │   │ SelectFood │──────────►│ SelectBeverage │──────────►│   Done   │    │
//! │   └─────┬──────┘           └───────┬────────┘           └────┬─────┘    │
//! │         │ item                     │ item                    │          │
//! │         ▼                          ▼                         ▼          │
//! │    order.add()                order.add()              print_bill()     │
//! │    (same phase)               (same phase)                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use colored::Colorize;
use tracing::{debug, info};

use mcshell_core::{Catalog, Category, Order};

use crate::error::AppResult;
use crate::prompt::Prompter;
use crate::receipt;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SelectFood,
    SelectBeverage,
    Done,
}

impl Phase {
    /// Category offered in this phase, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            Phase::SelectFood => Some(Category::Food),
            Phase::SelectBeverage => Some(Category::Beverage),
            Phase::Done => None,
        }
    }

    /// Phase entered when the finish entry is picked.
    pub fn next(&self) -> Phase {
        match self {
            Phase::SelectFood => Phase::SelectBeverage,
            Phase::SelectBeverage | Phase::Done => Phase::Done,
        }
    }
}

/// One ordering session.
///
/// Owns the order for its whole lifetime; the order is handed back once the
/// bill has been printed.
pub struct Session<P, W> {
    prompter: P,
    out: W,
    order: Order,
    phase: Phase,
}

impl<P: Prompter, W: Write> Session<P, W> {
    pub fn new(prompter: P, out: W) -> Self {
        Session {
            prompter,
            out,
            order: Order::new(),
            phase: Phase::SelectFood,
        }
    }

    /// Runs every phase, prints the bill, and returns the final order.
    pub fn run(mut self) -> AppResult<Order> {
        info!("session started");
        self.welcome()?;

        while let Some(category) = self.phase.category() {
            self.select_from(&Catalog::for_category(category))?;
            self.phase = self.phase.next();
            debug!(phase = ?self.phase, "phase changed");
        }

        receipt::print_bill(&self.order, &mut self.out);
        info!(items = self.order.len(), "session finished");
        Ok(self.order)
    }

    fn welcome(&mut self) -> AppResult<()> {
        writeln!(
            self.out,
            "{}",
            "Welcome to McDonalds on your shell :)".blue().bold()
        )?;
        writeln!(self.out, "{}", "Here you can place your order".blue())?;
        writeln!(self.out, "{}", "And then we will show you your bill".blue())?;
        Ok(())
    }

    /// Loops over one catalog until its finish entry is picked.
    fn select_from(&mut self, catalog: &Catalog) -> AppResult<()> {
        let category = catalog.category();
        let labels = catalog.labels();

        loop {
            let label = self.prompter.select(category.prompt(), &labels)?;
            let option = catalog.resolve(&label)?;

            if option.is_finish() {
                debug!(%category, "category finished");
                return Ok(());
            }

            self.order.add(category, option)?;
            debug!(%category, item = %option.name, price = %option.price, "item added");
            writeln!(
                self.out,
                "{}",
                format!("{} is added to your order", label).green()
            )?;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::prompt::ScriptedPrompter;
    use mcshell_core::{CoreError, Money};

    const DONE: &str = "No, that's all Rs. 0.0";

    fn run(answers: &[&str]) -> (AppResult<Order>, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let result = Session::new(ScriptedPrompter::new(answers.to_vec()), &mut out).run();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_phase_transitions() {
        assert_eq!(Phase::SelectFood.category(), Some(Category::Food));
        assert_eq!(Phase::SelectFood.next(), Phase::SelectBeverage);
        assert_eq!(Phase::SelectBeverage.category(), Some(Category::Beverage));
        assert_eq!(Phase::SelectBeverage.next(), Phase::Done);
        assert_eq!(Phase::Done.category(), None);
        assert_eq!(Phase::Done.next(), Phase::Done);
    }

    #[test]
    fn test_finish_immediately_gives_empty_bill() {
        let (result, shown) = run(&[DONE, DONE]);
        let order = result.unwrap();

        assert!(order.is_empty());
        assert!(shown.starts_with("Welcome to McDonalds on your shell :)\n"));
        assert!(shown.contains("Final Order"));
        assert!(shown.contains("| Order Amount   | 0.00        |"));
        assert!(shown.contains("| Service Charge | 0.00        |"));
        assert!(shown.contains("| Final Amount   | 0.00        |"));
        assert!(!shown.contains("is added to your order"));
    }

    #[test]
    fn test_single_veg_burger() {
        let (result, shown) = run(&["Veg Burger Rs. 115.0", DONE, DONE]);
        let order = result.unwrap();

        assert_eq!(order.len(), 1);
        assert_eq!(order.lines()[0].name, "Veg Burger");
        assert_eq!(order.lines()[0].price, Money::from_rupees(115));

        assert!(shown.contains("Veg Burger Rs. 115.0 is added to your order\n"));
        assert!(shown.contains("| Veg Burger     | 115.00      |"));
        assert!(shown.contains("| Order Amount   | 115.00      |"));
        assert!(shown.contains("| Service Charge | 1.15        |"));
        assert!(shown.contains("| Final Amount   | 116.15      |"));
    }

    #[test]
    fn test_food_then_beverages_in_order() {
        let (result, shown) = run(&[
            "Chicken Burger Rs. 175.0",
            "Chicken Burger Rs. 175.0",
            DONE,
            "Mango Smoothie Rs. 215.0",
            DONE,
        ]);
        let order = result.unwrap();

        let names: Vec<&str> = order.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Chicken Burger", "Chicken Burger", "Mango Smoothie"]
        );

        // 565.00 → 5% → 28.25
        assert!(shown.contains("| Order Amount   | 565.00      |"));
        assert!(shown.contains("| Service Charge | 28.25       |"));
        assert!(shown.contains("| Final Amount   | 593.25      |"));
    }

    #[test]
    fn test_prompts_follow_phases() {
        colored::control::set_override(false);
        let mut prompter = ScriptedPrompter::new(["Veg Wrap Rs. 130.0", DONE, DONE]);
        let mut out = Vec::new();
        Session::new(&mut prompter, &mut out).run().unwrap();

        assert_eq!(
            prompter.asked,
            vec![
                Category::Food.prompt(),
                Category::Food.prompt(),
                Category::Beverage.prompt(),
            ]
        );
    }

    #[test]
    fn test_beverage_label_in_food_phase_is_rejected() {
        let (result, shown) = run(&["Sprite (M) Rs. 115.0"]);

        match result {
            Err(AppError::Core(CoreError::UnrecognizedSelection { category, label })) => {
                assert_eq!(category, Category::Food);
                assert_eq!(label, "Sprite (M) Rs. 115.0");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!shown.contains("Final Order"));
    }

    #[test]
    fn test_prompt_failure_ends_session() {
        let (result, shown) = run(&["Veg Burger Rs. 115.0"]);
        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(!shown.contains("Final Order"));
    }
}
