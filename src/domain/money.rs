// SPDX-License-Identifier: MPL-2.0
//! Millisatoshi amounts and their human-readable rendering.
//!
//! Amounts are kept as integer millisatoshis everywhere; floating point only
//! appears at the display boundary (scale division and fiat conversion).

use std::fmt;

/// Millisatoshis per whole bitcoin, the fixed-point constant used for fiat
/// conversion (1 BTC = 10^8 sat = 10^11 msat).
pub const MSATS_PER_BTC: u64 = 100_000_000_000;

/// An integer amount of millisatoshis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Millisats(u64);

impl Millisats {
    /// Creates an amount from a raw millisatoshi count.
    #[must_use]
    pub const fn new(msats: u64) -> Self {
        Self(msats)
    }

    /// Returns the raw millisatoshi count.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Converts this amount to fiat using the given BTC rate.
    ///
    /// Returns `None` whenever the rate is absent, for any amount
    /// including zero.
    #[must_use]
    pub fn to_fiat(self, rate: Option<f64>) -> Option<f64> {
        rate.map(|rate| self.0 as f64 / MSATS_PER_BTC as f64 * rate)
    }
}

impl fmt::Display for Millisats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(*self))
    }
}

/// One step of the display scale table.
struct ScaleStep {
    multiplier: u64,
    symbol: &'static str,
}

/// Fixed scale table, largest multiplier first. `format_amount` picks the
/// first step whose multiplier the amount reaches; the trailing msat step
/// is the fallback for everything below one sat (including zero).
const SCALE_STEPS: &[ScaleStep] = &[
    ScaleStep {
        multiplier: MSATS_PER_BTC,
        symbol: "BTC",
    },
    ScaleStep {
        multiplier: 1_000,
        symbol: "sat",
    },
    ScaleStep {
        multiplier: 1,
        symbol: "msat",
    },
];

/// Renders an amount as a scaled, 3-significant-figure string, e.g.
/// `1024` msat → `"1.02 sat"`.
#[must_use]
pub fn format_amount(amount: Millisats) -> String {
    let step = SCALE_STEPS
        .iter()
        .find(|step| amount.value() >= step.multiplier)
        .unwrap_or(&SCALE_STEPS[SCALE_STEPS.len() - 1]);

    let quotient = amount.value() as f64 / step.multiplier as f64;
    format!("{} {}", format_sig3(quotient), step.symbol)
}

/// Renders a fiat amount with two decimal places behind the currency symbol.
#[must_use]
pub fn format_fiat(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

/// Rounds a non-negative value to three significant figures and renders it
/// without exponent notation. This function is the formatting contract the
/// pinned test strings are written against.
fn format_sig3(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    if magnitude >= 3 {
        // Round away digits below the third significant figure.
        let factor = 10f64.powi(magnitude - 2);
        format!("{:.0}", (value / factor).round() * factor)
    } else {
        let decimals = (2 - magnitude).max(0) as usize;
        format!("{value:.decimals$}")
    }
}
