//! Money parsed from display strings, with exact decimal arithmetic.
//!
//! Prices arrive as human-readable strings (`"₦28,500"`). They are parsed once
//! into a [`Decimal`] and every total is computed on that value, never on the
//! display string.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Parse the numeric part of a price display string.
///
/// Keeps ASCII digits and `.` and parses what is left. Anything that still
/// fails to parse (empty input, several decimal points, overflow) yields zero.
/// The conversion is lossy but never fails.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use vitrine_core::parse_money;
///
/// assert_eq!(parse_money("₦28,500"), Decimal::from(28_500));
/// assert_eq!(parse_money("free"), Decimal::ZERO);
/// assert_eq!(parse_money(""), Decimal::ZERO);
/// ```
#[must_use]
pub fn parse_money(display: &str) -> Decimal {
    let numeric: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if numeric.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&numeric).unwrap_or(Decimal::ZERO)
}

/// An amount of money in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (naira, not kobo).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Parse a display string with [`parse_money`].
    #[must_use]
    pub fn parse_display(display: &str, currency_code: CurrencyCode) -> Self {
        Self::new(parse_money(display), currency_code)
    }

    /// Multiply by a quantity. Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        let amount = self
            .amount
            .checked_mul(Decimal::from(quantity))
            .unwrap_or(Decimal::MAX);
        Self::new(amount, self.currency_code)
    }

    /// Add an amount in the same currency. Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn plus(self, other: Decimal) -> Self {
        let amount = self.amount.checked_add(other).unwrap_or(Decimal::MAX);
        Self::new(amount, self.currency_code)
    }

    /// Format for display, e.g. `₦43,900` or `$19.99`.
    ///
    /// Digits are grouped in thousands and at most two fractional digits are
    /// shown, with trailing zeros dropped.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let text = rounded.abs().to_string();
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut out = String::with_capacity(text.len() + 8);
        out.push_str(sign);
        out.push_str(self.currency_code.symbol());
        out.push_str(&group_thousands(whole));
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// ISO 4217 currency codes.
///
/// Only symbols and codes are known here; there is no conversion between
/// currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    NGN,
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NGN => "₦",
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NGN => "NGN",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

/// Error returned when a currency code is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NGN" => Ok(Self::NGN),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(UnknownCurrency(s.to_owned())),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
