//! Value objects for the checkout domain.

use serde::{Deserialize, Serialize};

/// Money amount in minor units (1/100 of a rupiah) to avoid floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Creates an amount from minor units.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates an amount from whole rupiah.
    pub fn from_rupiah(rupiah: i64) -> Self {
        Self {
            cents: rupiah * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the whole-rupiah part.
    pub fn rupiah(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the minor-unit remainder after whole rupiah.
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        write!(f, "{sign}Rp{}.{:02}", self.rupiah().abs(), self.cents_part())
    }
}
