//! # Money Module
//!
//! Provides the `Money` type for prices, subtotals and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every Money value is already quantized to 2 fraction digits.        │
//! │    Text enters through `rust_decimal`, is rounded half away from zero, │
//! │    and is stored as an i64 count of cents.                             │
//! │                                                                         │
//! │    32.50 split 3 ways = 3250 / 3 = 1083.33.. cents → 10.83             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow Policy
//! The accumulator is an `i64` of cents. Every arithmetic operation is
//! checked; exceeding `Money::MAX` (or going below `Money::MIN`) yields
//! [`MoneyError::AmountOverflow`] instead of wrapping.
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::Money;
//!
//! let price: Money = "12.50".parse().unwrap();
//! let line = price.multiply_by_int(2).unwrap();          // 25.00
//! let total = line.checked_add(Money::from_cents(750)).unwrap(); // 32.50
//! assert_eq!(total.divide_by_int(3).unwrap().to_string(), "10.83");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MoneyError, MoneyResult};

/// Number of fraction digits every Money value carries.
pub const MONEY_SCALE: u32 = 2;

// =============================================================================
// Decimal Helpers
// =============================================================================

/// Parses base-10 text into an exact decimal.
///
/// Surrounding whitespace is ignored. Plain (`12.50`) and scientific
/// (`1.25e1`) notation are accepted; anything else is `InvalidAmount`.
pub fn parse_decimal(text: &str) -> MoneyResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MoneyError::InvalidAmount(text.to_string()));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MoneyError::InvalidAmount(text.to_string()))
}

/// Fraction digits kept when text is more precise than `Decimal` can hold.
const EXACT_FRACTION_DIGITS: usize = 20;

/// Decimal text that may carry more digits than `Decimal` holds.
///
/// `Decimal` keeps 28 significant digits. Longer text is truncated toward
/// zero at 20 fraction digits, and `has_remainder` records whether any
/// nonzero digit was dropped. Comparing `truncated` against a bound with
/// at most 2 fraction digits then gives the same answer as the full text,
/// except when the two are equal and `has_remainder` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactDecimal {
    pub truncated: Decimal,
    pub has_remainder: bool,
}

/// Parses base-10 text without silently rounding away precision.
///
/// ```rust
/// use pizza_core::money::parse_decimal_exact;
///
/// let exact = parse_decimal_exact("12.50").unwrap();
/// assert!(!exact.has_remainder);
///
/// let long = parse_decimal_exact("999.990000000000000000000000000001").unwrap();
/// assert_eq!(long.truncated.to_string(), "999.99000000000000000000");
/// assert!(long.has_remainder);
/// ```
pub fn parse_decimal_exact(text: &str) -> MoneyResult<ExactDecimal> {
    let trimmed = text.trim();
    let exact = |truncated| ExactDecimal {
        truncated,
        has_remainder: false,
    };

    if let Ok(value) = Decimal::from_str_exact(trimmed) {
        return Ok(exact(value));
    }

    let Some((whole, fraction)) = trimmed.split_once('.') else {
        return parse_decimal(text).map(exact);
    };
    if !fraction.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return parse_decimal(text).map(exact);
    }

    let keep = fraction.len().min(EXACT_FRACTION_DIGITS);
    let (kept, dropped) = fraction.split_at(keep);
    match Decimal::from_str_exact(&format!("{whole}.{kept}")) {
        Ok(truncated) => Ok(ExactDecimal {
            truncated,
            has_remainder: dropped.bytes().any(|b| (b'1'..=b'9').contains(&b)),
        }),
        // Whole part too long to keep 20 fraction digits.
        Err(_) => parse_decimal(text).map(exact),
    }
}

/// Rounds to exactly 2 fraction digits, half away from zero.
///
/// Idempotent: `quantize(quantize(x)) == quantize(x)`.
///
/// ```rust
/// use pizza_core::money::quantize;
/// use rust_decimal::Decimal;
///
/// assert_eq!(quantize(Decimal::new(10825, 3)).to_string(), "10.83");
/// assert_eq!(quantize(Decimal::new(-10825, 3)).to_string(), "-10.83");
/// assert_eq!(quantize(Decimal::new(5, 0)).to_string(), "5.00");
/// ```
pub fn quantize(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PizzaCatalogEntry.price ──► OrderLine.unit_price ──► OrderLine.subtotal│
/// │                                                                         │
/// │  Σ subtotals ──► Order.total ──► divide_by_int(party) ──► per person   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount (the accumulator bound).
    pub const MAX: Money = Money(i64::MAX);

    /// Smallest representable amount.
    pub const MIN: Money = Money(i64::MIN);

    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let price = Money::from_cents(1050);
    /// assert_eq!(price.to_string(), "10.50");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Quantizes a decimal and converts it into cents.
    ///
    /// Fails with `AmountOverflow` if the rounded value does not fit.
    pub fn from_decimal(amount: Decimal) -> MoneyResult<Self> {
        quantize(amount)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.trunc().to_i64())
            .map(Money)
            .ok_or(MoneyError::AmountOverflow)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fraction portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the exact decimal with scale 2.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, MONEY_SCALE)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, refusing to wrap.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    /// use pizza_core::MoneyError;
    ///
    /// let sum = Money::from_cents(1000).checked_add(Money::from_cents(1250));
    /// assert_eq!(sum, Ok(Money::from_cents(2250)));
    ///
    /// let overflow = Money::MAX.checked_add(Money::from_cents(1));
    /// assert_eq!(overflow, Err(MoneyError::AmountOverflow));
    /// ```
    pub fn checked_add(self, other: Money) -> MoneyResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::AmountOverflow)
    }

    /// Multiplies by an integer quantity, refusing to wrap.
    ///
    /// ## User Workflow
    /// ```text
    /// Pizza: Pepperoni 12.50
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_by_int(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Subtotal: 37.50
    /// ```
    pub fn multiply_by_int(self, n: i64) -> MoneyResult<Money> {
        self.0
            .checked_mul(n)
            .map(Money)
            .ok_or(MoneyError::AmountOverflow)
    }

    /// Divides by an integer, rounding the cent half away from zero.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let total = Money::from_cents(3250);
    /// assert_eq!(total.divide_by_int(3).unwrap(), Money::from_cents(1083));
    /// assert!(total.divide_by_int(0).is_err());
    /// ```
    pub fn divide_by_int(self, n: i64) -> MoneyResult<Money> {
        if n == 0 {
            return Err(MoneyError::DivisionByZero);
        }

        // i128 so that i64::MIN / -1 cannot trap
        let numerator = i128::from(self.0);
        let divisor = i128::from(n);
        let quotient = numerator / divisor;
        let remainder = numerator % divisor;

        let rounded = if 2 * remainder.abs() >= divisor.abs() {
            if (numerator < 0) != (divisor < 0) {
                quotient - 1
            } else {
                quotient + 1
            }
        } else {
            quotient
        };

        i64::try_from(rounded)
            .map(Money)
            .map_err(|_| MoneyError::AmountOverflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Canonical 2-digit form without a currency symbol (`10.83`, `-5.50`).
///
/// The shell adds the configured symbol when printing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_decimal(parse_decimal(s)?)
    }
}

/// Persisted as a string so no precision is lost in JSON numbers.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!("10.00".parse::<Money>(), Ok(Money::from_cents(1000)));
        assert_eq!("  12.5 ".parse::<Money>(), Ok(Money::from_cents(1250)));
        assert_eq!("7".parse::<Money>(), Ok(Money::from_cents(700)));
        assert_eq!("1.25e1".parse::<Money>(), Ok(Money::from_cents(1250)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", "abc", "12,50", "1.2.3", "NaN", "€10"] {
            assert!(
                matches!(bad.parse::<Money>(), Err(MoneyError::InvalidAmount(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_exact_keeps_dropped_digits() {
        let short = parse_decimal_exact(" 12.50 ").unwrap();
        assert_eq!(short.truncated, dec("12.50"));
        assert!(!short.has_remainder);

        let below = parse_decimal_exact("0.00999999999999999999999999999999").unwrap();
        assert!(below.truncated < dec("0.01"));
        assert!(below.has_remainder);

        let zeros = parse_decimal_exact("10.000000000000000000000000000000").unwrap();
        assert_eq!(zeros.truncated, dec("10"));
        assert!(!zeros.has_remainder);

        let scientific = parse_decimal_exact("1.25e1").unwrap();
        assert_eq!(scientific.truncated, dec("12.5"));

        assert!(parse_decimal_exact("1.2.3").is_err());
    }

    #[test]
    fn test_quantize_rounds_half_away_from_zero() {
        assert_eq!(quantize(dec("0.125")), dec("0.13"));
        assert_eq!(quantize(dec("0.135")), dec("0.14"));
        assert_eq!(quantize(dec("-0.125")), dec("-0.13"));
        assert_eq!(quantize(dec("2.344")), dec("2.34"));
        assert_eq!(quantize(dec("3")).scale(), 2);
    }

    #[test]
    fn test_from_decimal_overflow() {
        let huge = dec("100000000000000000000");
        assert_eq!(Money::from_decimal(huge), Err(MoneyError::AmountOverflow));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Ok(Money::from_cents(1500)));
        assert_eq!(a.multiply_by_int(3), Ok(Money::from_cents(3000)));
        assert_eq!(Money::MAX.checked_add(b), Err(MoneyError::AmountOverflow));
        assert_eq!(Money::MAX.multiply_by_int(2), Err(MoneyError::AmountOverflow));
    }

    #[test]
    fn test_divide_by_int_rounding() {
        // 32.50 / 3 = 10.8333.. → 10.83
        assert_eq!(Money::from_cents(3250).divide_by_int(3), Ok(Money::from_cents(1083)));
        // 10.00 / 3 = 3.333.. → 3.33
        assert_eq!(Money::from_cents(1000).divide_by_int(3), Ok(Money::from_cents(333)));
        // 0.05 / 2 = 0.025 → 0.03
        assert_eq!(Money::from_cents(5).divide_by_int(2), Ok(Money::from_cents(3)));
        // -0.05 / 2 = -0.025 → -0.03
        assert_eq!(Money::from_cents(-5).divide_by_int(2), Ok(Money::from_cents(-3)));
        // 20.00 / 6 = 3.333.. → 3.33
        assert_eq!(Money::from_cents(2000).divide_by_int(6), Ok(Money::from_cents(333)));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Money::from_cents(1000).divide_by_int(0),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_min_by_minus_one_overflows() {
        assert_eq!(Money::MIN.divide_by_int(-1), Err(MoneyError::AmountOverflow));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Money::from_cents(1250)).unwrap();
        assert_eq!(json, "\"12.50\"");

        let back: Money = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(back, Money::from_cents(1250));

        assert!(serde_json::from_str::<Money>("\"twelve\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_quantize_is_idempotent(mantissa in any::<i64>(), scale in 0u32..8) {
            let value = Decimal::new(mantissa, scale);
            let once = quantize(value);
            prop_assert_eq!(quantize(once), once);
            prop_assert_eq!(once.scale(), 2);
        }

        #[test]
        fn prop_sum_of_valid_prices_is_exact(p in 1i64..=99_999, q in 1i64..=99_999) {
            let sum = Money::from_cents(p).checked_add(Money::from_cents(q)).unwrap();
            let expected = quantize(Decimal::new(p, 2) + Decimal::new(q, 2));

            prop_assert_eq!(sum.to_decimal(), expected);
            prop_assert_eq!(sum.to_string(), expected.to_string());
        }
    }
}
