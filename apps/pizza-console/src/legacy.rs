//! # Legacy Calculator
//!
//! `pizza-split <pizzas> <people>`: fixed price per pizza, one split, no
//! menu file.
//!
//! ```text
//! $ pizza-split 3 4
//! === Pizza Delivery Bill Splitter ===
//!
//! === Bill Split Results ===
//! Number of pizzas: 3
//! Price per pizza: €10.00
//! Total bill: €30.00
//! Number of people: 4
//! Cost per person: €7.50
//! ```

use std::io::Write;

use clap::Parser;
use pizza_core::{BillSplit, Money, MAX_PARTY_COUNT};

use crate::error::{AppError, AppResult};
use crate::state::ShellConfig;

/// Price of every pizza in the legacy calculator (10.00).
pub const LEGACY_PIZZA_PRICE: Money = Money::from_cents(1000);

/// Most pizzas the legacy calculator accepts.
pub const LEGACY_MAX_PIZZAS: i64 = 1000;

/// Calculate pizza delivery bill split.
#[derive(Parser, Debug)]
#[command(name = "pizza-split")]
#[command(version, about, long_about = None)]
#[command(after_help = "Example:\n  pizza-split 3 4    # 3 pizzas split among 4 people")]
pub struct LegacyArgs {
    /// Number of pizzas (1-1000)
    #[arg(allow_hyphen_values = true)]
    pub pizzas: String,

    /// Number of people (1-1000)
    #[arg(allow_hyphen_values = true)]
    pub people: String,
}

/// The validated inputs and the resulting split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyBill {
    pub pizzas: i64,
    pub split: BillSplit,
}

/// Parses a count argument.
///
/// ```rust
/// use pizza_console::legacy::parse_count;
///
/// assert_eq!(parse_count("3", "Number of pizzas", 1000).unwrap(), 3);
/// assert_eq!(
///     parse_count("0", "Number of pizzas", 1000).unwrap_err().to_string(),
///     "Number of pizzas must be positive"
/// );
/// ```
pub fn parse_count(value: &str, label: &str, max: i64) -> AppResult<i64> {
    let count: i64 = value
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_argument(format!("{label} must be a valid integer")))?;

    if count <= 0 {
        return Err(AppError::invalid_argument(format!("{label} must be positive")));
    }

    if count > max {
        return Err(AppError::invalid_argument(format!(
            "{label} too large (max {max})"
        )));
    }

    Ok(count)
}

/// Validates both arguments and computes the split.
pub fn calculate(args: &LegacyArgs) -> AppResult<LegacyBill> {
    let pizzas = parse_count(&args.pizzas, "Number of pizzas", LEGACY_MAX_PIZZAS)?;
    let people = parse_count(&args.people, "Number of people", MAX_PARTY_COUNT)?;

    let total = LEGACY_PIZZA_PRICE
        .multiply_by_int(pizzas)
        .map_err(pizza_core::CoreError::from)?;
    let split = BillSplit::compute(total, people)?;

    Ok(LegacyBill { pizzas, split })
}

/// Prints the result block to `out`.
pub fn run_legacy<W: Write>(
    args: &LegacyArgs,
    config: &ShellConfig,
    out: &mut W,
) -> AppResult<()> {
    let bill = calculate(args)?;

    writeln!(out, "=== Pizza Delivery Bill Splitter ===")?;
    writeln!(out)?;
    writeln!(out, "=== Bill Split Results ===")?;
    writeln!(out, "Number of pizzas: {}", bill.pizzas)?;
    writeln!(
        out,
        "Price per pizza: {}",
        config.format_currency(LEGACY_PIZZA_PRICE)
    )?;
    writeln!(out, "Total bill: {}", config.format_currency(bill.split.total))?;
    writeln!(out, "Number of people: {}", bill.split.party_count)?;
    writeln!(
        out,
        "Cost per person: {}",
        config.format_currency(bill.split.cost_per_person)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pizzas: &str, people: &str) -> LegacyArgs {
        LegacyArgs {
            pizzas: pizzas.to_string(),
            people: people.to_string(),
        }
    }

    #[test]
    fn test_three_pizzas_four_people() {
        let bill = calculate(&args("3", "4")).unwrap();
        assert_eq!(bill.split.total, Money::from_cents(3000));
        assert_eq!(bill.split.cost_per_person, Money::from_cents(750));

        let mut out = Vec::new();
        run_legacy(&args("3", "4"), &ShellConfig::default(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Price per pizza: €10.00"));
        assert!(out.contains("Total bill: €30.00"));
        assert!(out.contains("Cost per person: €7.50"));
    }

    #[test]
    fn test_rounding() {
        let bill = calculate(&args("1", "3")).unwrap();
        assert_eq!(bill.split.cost_per_person, Money::from_cents(333));

        let bill = calculate(&args("2", "3")).unwrap();
        assert_eq!(bill.split.cost_per_person, Money::from_cents(667));
    }

    #[test]
    fn test_argument_errors() {
        let message = |p: &str, q: &str| calculate(&args(p, q)).unwrap_err().to_string();

        assert_eq!(message("abc", "4"), "Number of pizzas must be a valid integer");
        assert_eq!(message("2.5", "4"), "Number of pizzas must be a valid integer");
        assert_eq!(message("-1", "4"), "Number of pizzas must be positive");
        assert_eq!(message("1001", "4"), "Number of pizzas too large (max 1000)");
        assert!(calculate(&args("1000", "1")).is_ok());
        assert_eq!(message("3", "0"), "Number of people must be positive");
        assert_eq!(message("3", "5000"), "Number of people too large (max 1000)");
    }

    #[test]
    fn test_clap_parses_positionals() {
        let parsed = LegacyArgs::try_parse_from(["pizza-split", "3", "4"]).unwrap();
        assert_eq!(parsed.pizzas, "3");
        assert_eq!(parsed.people, "4");

        assert!(LegacyArgs::try_parse_from(["pizza-split", "3"]).is_err());

        // negative counts reach validation instead of being read as flags
        let parsed = LegacyArgs::try_parse_from(["pizza-split", "-1", "4"]).unwrap();
        assert_eq!(
            calculate(&parsed).unwrap_err().to_string(),
            "Number of pizzas must be positive"
        );
    }
}
