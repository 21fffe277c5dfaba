//! Money
//!
//! Non-negative decimal amounts. Arithmetic is exact; rounding to cents only
//! happens when a subtotal is derived or an amount is displayed.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};

/// Currency prefix used when the page does not configure one
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Number of decimal places shown for every amount
const CENT_SCALE: u32 = 2;

/// Largest amount that still has room for two decimal places
/// (`792281625142643375935439503.35`). Arithmetic saturates here.
pub const MONEY_CEILING: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, CENT_SCALE);

/// A non-negative monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wrap a decimal amount, rejecting negative values and values above [`MONEY_CEILING`]
    pub fn new(amount: Decimal) -> CartResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CartError::NegativeAmount(amount));
        }
        if amount > MONEY_CEILING {
            return Err(CartError::AmountTooLarge(amount));
        }
        Ok(Self(amount.abs()))
    }

    /// Amount from a whole number of cents
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from(cents) / Decimal::ONE_HUNDRED)
    }

    /// Parse a price as rendered on the page, e.g. `"$12.50"` or `" 3.33 "`.
    ///
    /// Strips surrounding whitespace and a single leading `currency_symbol`.
    /// Only plain decimal notation is accepted: no exponents, no digit separators.
    pub fn parse(text: &str, currency_symbol: &str) -> CartResult<Self> {
        let trimmed = text.trim();
        let digits = if currency_symbol.is_empty() {
            trimmed
        } else {
            trimmed.strip_prefix(currency_symbol).unwrap_or(trimmed).trim_start()
        };
        let unsigned = digits.strip_prefix('-').unwrap_or(digits);
        if !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(CartError::MalformedPrice(text.to_string()));
        }
        let amount = Decimal::from_str(digits).map_err(|_| CartError::MalformedPrice(text.to_string()))?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Amount rounded to whole cents
    pub fn rounded(&self) -> Money {
        Money(self.0.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// `self * quantity`, rounded to cents. Saturates at [`MONEY_CEILING`].
    pub fn times(&self, quantity: u32) -> Money {
        let product = self.0.checked_mul(Decimal::from(quantity)).unwrap_or(MONEY_CEILING);
        Money(product.min(MONEY_CEILING)).rounded()
    }

    /// Display form with the given prefix and exactly two decimals, e.g. `$9.99`
    pub fn format(&self, currency_symbol: &str) -> String {
        let mut cents = self.rounded().0;
        cents.rescale(CENT_SCALE);
        format!("{currency_symbol}{cents}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.checked_add(rhs.0).unwrap_or(MONEY_CEILING).min(MONEY_CEILING))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
