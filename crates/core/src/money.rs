//! Money amounts in the smallest currency unit.

use core::iter::Sum;
use core::ops::{Add, Sub};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Non-negative amount in cents.
///
/// Prices arrive from markup as decimal text and are parsed once at the
/// boundary; all arithmetic after that is integral, so totals never pick up
/// floating point drift.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `percent`% of this amount, rounded half-up to the nearest cent.
    ///
    /// The result never exceeds `self` for `percent <= 100`.
    pub fn percent(self, percent: u8) -> Money {
        let scaled = u128::from(self.0) * u128::from(percent) + 50;
        // Fits for percent <= 100; larger percentages saturate.
        Money(u64::try_from(scaled / 100).unwrap_or(u64::MAX))
    }

    /// Amount formatted with two decimals and no currency symbol (`"10.50"`).
    pub fn to_decimal_string(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    /// Saturates at zero; amounts are never negative.
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parse decimal text such as `"15"`, `"15.5"`, `"$15.50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw);

        if raw.starts_with('-') {
            return Err(DomainError::validation(format!("price cannot be negative: {s:?}")));
        }

        let (whole, frac) = match raw.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (raw, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) {
            return Err(DomainError::validation(format!("malformed price: {s:?}")));
        }
        if frac.len() > 2 {
            return Err(DomainError::validation(format!(
                "price has more than two decimal places: {s:?}"
            )));
        }

        let whole: u64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("price out of range: {s:?}")))?;
        let frac_cents = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Money)
            .ok_or_else(|| DomainError::validation(format!("price out of range: {s:?}")))
    }
}

/// Serde adapter encoding [`Money`] as a decimal dollar amount (`31.5`)
/// instead of integer cents.
///
/// Use with `#[serde(with = "bundle_core::money::dollars")]`.
pub mod dollars {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Money;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (money.cents() as f64 / 100.0).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dollars = f64::deserialize(deserializer)?;
        if !dollars.is_finite() || dollars < 0.0 {
            return Err(D::Error::custom(format!("invalid amount: {dollars}")));
        }
        let cents = (dollars * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(D::Error::custom(format!("amount out of range: {dollars}")));
        }
        Ok(Money::from_cents(cents as u64))
    }
}
