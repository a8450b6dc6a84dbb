//! Cafe Model

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix used when a price is displayed
pub const CURRENCY_SYMBOL: &str = "£";

/// Seating capacity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum SeatBucket {
    #[serde(rename = "0-10")]
    #[cfg_attr(feature = "db", sqlx(rename = "0-10"))]
    UpToTen,
    #[serde(rename = "10-20")]
    #[cfg_attr(feature = "db", sqlx(rename = "10-20"))]
    TenToTwenty,
    #[serde(rename = "20-30")]
    #[cfg_attr(feature = "db", sqlx(rename = "20-30"))]
    TwentyToThirty,
    #[serde(rename = "30-40")]
    #[cfg_attr(feature = "db", sqlx(rename = "30-40"))]
    ThirtyToForty,
    #[serde(rename = "40-50")]
    #[cfg_attr(feature = "db", sqlx(rename = "40-50"))]
    FortyToFifty,
    #[serde(rename = "50+")]
    #[cfg_attr(feature = "db", sqlx(rename = "50+"))]
    FiftyPlus,
}

impl SeatBucket {
    /// All buckets, in the order the form offers them
    pub const ALL: [SeatBucket; 6] = [
        SeatBucket::UpToTen,
        SeatBucket::TenToTwenty,
        SeatBucket::TwentyToThirty,
        SeatBucket::ThirtyToForty,
        SeatBucket::FortyToFifty,
        SeatBucket::FiftyPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeatBucket::UpToTen => "0-10",
            SeatBucket::TenToTwenty => "10-20",
            SeatBucket::TwentyToThirty => "20-30",
            SeatBucket::ThirtyToForty => "30-40",
            SeatBucket::FortyToFifty => "40-50",
            SeatBucket::FiftyPlus => "50+",
        }
    }
}

impl fmt::Display for SeatBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown seat bucket: {0}")]
pub struct ParseSeatBucketError(pub String);

impl FromStr for SeatBucket {
    type Err = ParseSeatBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.label() == s)
            .ok_or_else(|| ParseSeatBucketError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("not a valid decimal value: {0}")]
    Malformed(String),
    #[error("price cannot be negative")]
    Negative,
    #[error("price is out of range")]
    OutOfRange,
}

/// Coffee price in minor currency units (pence).
///
/// Stored as an integer so the column stays numeric and sortable; the
/// currency-prefixed string only exists at display time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(transparent))]
pub struct Price(i64);

impl Price {
    pub fn from_pence(pence: i64) -> Result<Self, PriceError> {
        if pence < 0 {
            return Err(PriceError::Negative);
        }
        Ok(Self(pence))
    }

    /// Round to two decimal places (banker's rounding) and convert to pence.
    pub fn from_decimal(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        let pence = rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|p| p.to_i64())
            .ok_or(PriceError::OutOfRange)?;
        Self::from_pence(pence)
    }

    pub fn pence(self) -> i64 {
        self.0
    }

    pub fn amount(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    /// Accepts `2.5`, `2.50` or `£2.50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(CURRENCY_SYMBOL)
            .unwrap_or(trimmed)
            .trim();
        let amount =
            Decimal::from_str(digits).map_err(|_| PriceError::Malformed(trimmed.to_string()))?;
        Self::from_decimal(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.amount())
    }
}

/// Cafe entity (one row of the `cafe` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: SeatBucket,
    pub coffee_price: Price,
}

/// Validated cafe payload, used for both create and full-replace edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeInput {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: SeatBucket,
    pub coffee_price: Price,
}
