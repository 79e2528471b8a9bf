//! Money amounts and price formatting.
//!
//! Amounts are integers in the currency's minor unit. The storefront prices
//! in a single currency; the currency travels with each amount so the
//! formatter knows the symbol and the number of decimals, and so the cart
//! can refuse a mixed line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the formatter knows how to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::CAD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
    ];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Digits after the decimal point in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse an ISO code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount in a currency's minor unit (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Format as a display string (e.g., "$1,249.99").
    pub fn display(&self) -> String {
        format_money(self)
    }

    /// Add, returning `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Sum amounts, returning `None` on currency mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(self))
    }
}

/// Format an amount for display: symbol, grouped whole units, then the
/// minor unit padded to the currency's decimals.
///
/// Every price string on a card or in the cart comes from here.
pub fn format_money(amount: &Money) -> String {
    let places = amount.currency.decimal_places();
    let scale = 10_u64.pow(places);
    let magnitude = amount.amount_cents.unsigned_abs();
    let (whole, minor) = (magnitude / scale, magnitude % scale);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.amount_cents < 0 { "-" } else { "" };
    let symbol = amount.currency.symbol();
    if places == 0 {
        format!("{sign}{symbol}{grouped}")
    } else {
        format!("{sign}{symbol}{grouped}.{minor:0width$}", width = places as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(&Money::new(4999, Currency::USD)), "$49.99");
        assert_eq!(format_money(&Money::new(5, Currency::EUR)), "\u{20ac}0.05");
        assert_eq!(format_money(&Money::new(0, Currency::USD)), "$0.00");
        assert_eq!(format_money(&Money::new(1800, Currency::JPY)), "\u{00a5}1,800");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_money(&Money::new(124_999, Currency::USD)), "$1,249.99");
        assert_eq!(format_money(&Money::new(100_000_000, Currency::CAD)), "CA$1,000,000.00");
        assert_eq!(format_money(&Money::new(-2050, Currency::GBP)), "-\u{00a3}20.50");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::new(1000, Currency::USD);
        assert_eq!(a.try_multiply(3).unwrap().amount_cents, 3000);
        assert!(Money::new(i64::MAX, Currency::USD).try_multiply(2).is_none());
        assert!(Money::new(i64::MAX, Currency::USD).try_add(&a).is_none());
    }

    #[test]
    fn test_currency_mismatch_is_none() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
        assert!(Money::try_sum([usd, eur].iter(), Currency::USD).is_none());
        assert_eq!(
            Money::try_sum([usd, usd].iter(), Currency::USD),
            Some(Money::new(2000, Currency::USD))
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code(" eur "), Some(Currency::EUR));
        assert_eq!(Currency::from_code("MXN"), None);
    }
}
