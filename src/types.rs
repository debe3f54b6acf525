//! Shared primitive types: item names and quantities.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Neg, Sub},
};

use serde::{Deserialize, Serialize};

/// Item name used when a dynamic add omits the item.
pub const DEFAULT_ITEM: &str = "default";

/// Threshold used by low-stock queries when none is configured.
pub const DEFAULT_LOW_THRESHOLD: Quantity = Quantity::Int(5);

/// Numeric stock count, either integral or fractional.
///
/// Integer arithmetic stays integral until it overflows, at which point it
/// continues as a real. Mixing in a real operand always yields a real.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Whole count.
    Int(i64),
    /// Fractional count.
    Real(f64),
}

impl Quantity {
    /// Zero stock.
    pub const ZERO: Self = Self::Int(0);

    /// Returns the value widened to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Real(v) => v,
        }
    }

    /// Returns false for NaN and infinite reals.
    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Real(v) => v.is_finite(),
        }
    }

    /// True when the value is strictly greater than zero.
    pub fn is_positive(self) -> bool {
        match self {
            Self::Int(v) => v > 0,
            Self::Real(v) => v > 0.0,
        }
    }

    /// Converts a JSON number, keeping integers integral.
    pub fn from_json_number(n: &serde_json::Number) -> Option<Self> {
        if let Some(v) = n.as_i64() {
            return Some(Self::Int(v));
        }
        n.as_f64().map(Self::Real)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map(Self::Int)
                .unwrap_or_else(|| Self::Real(a as f64 + b as f64)),
            (a, b) => Self::Real(a.as_f64() + b.as_f64()),
        }
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Int(v) => v
                .checked_neg()
                .map(Self::Int)
                .unwrap_or_else(|| Self::Real(-(v as f64))),
            Self::Real(v) => Self::Real(-v),
        }
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
        }
    }
}

impl std::str::FromStr for Quantity {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        s.parse::<f64>().map(Self::Real)
    }
}
