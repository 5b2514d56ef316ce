use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// A menu price represented as **integer cents**.
///
/// Use this type for every price in the engine to avoid floating-point
/// drift. Prices are never negative.
///
/// # Examples
///
/// ```rust
/// use engine::Price;
///
/// let price = Price::new(150_00);
/// assert_eq!(price.cents(), 15000);
/// assert_eq!(price.to_string(), "150.00");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more than 2 decimals and negative amounts):
///
/// ```rust
/// use engine::Price;
///
/// assert_eq!("150".parse::<Price>().unwrap().cents(), 15000);
/// assert_eq!("10,5".parse::<Price>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<Price>().is_err());
/// assert!("-1".parse::<Price>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Creates a new price from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        write!(f, "{units}.{cents:02}")
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for Price {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects negative amounts
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidInput("empty price".to_string());
        let invalid = || EngineError::InvalidInput("invalid price".to_string());
        let overflow = || EngineError::InvalidInput("price too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let rest = trimmed.replace(',', ".");
        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let cents_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| invalid())?;

        let cents: i64 = match cents_str {
            None => 0,
            Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidInput("too many decimals".to_string())),
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(Price(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_always_two_digits() {
        assert_eq!(Price::new(0).to_string(), "0.00");
        assert_eq!(Price::new(1).to_string(), "0.01");
        assert_eq!(Price::new(10).to_string(), "0.10");
        assert_eq!(Price::new(1050).to_string(), "10.50");
        assert_eq!(Price::new(15000).to_string(), "150.00");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("150".parse::<Price>().unwrap().cents(), 15000);
        assert_eq!("10.5".parse::<Price>().unwrap().cents(), 1050);
        assert_eq!("10,50".parse::<Price>().unwrap().cents(), 1050);
        assert_eq!("0.01".parse::<Price>().unwrap().cents(), 1);
        assert_eq!("  2.30 ".parse::<Price>().unwrap().cents(), 230);
        assert_eq!("7.".parse::<Price>().unwrap().cents(), 700);
    }

    #[test]
    fn parse_rejects_more_than_two_decimals() {
        assert!("12.345".parse::<Price>().is_err());
    }

    #[test]
    fn parse_rejects_negative_amounts() {
        assert!("-1".parse::<Price>().is_err());
        assert!("-0.01".parse::<Price>().is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Price>().is_err());
        assert!("  ".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert!("1.2.3".parse::<Price>().is_err());
        assert!("1x".parse::<Price>().is_err());
    }

    #[test]
    fn round_trips_through_display() {
        let price: Price = "150.00".parse().unwrap();
        assert_eq!(price.to_string(), "150.00");
    }
}
