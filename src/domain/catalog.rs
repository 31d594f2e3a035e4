// SPDX-License-Identifier: MPL-2.0
//! The fixed catalog of selectable note denominations.
//!
//! Denominations are strictly increasing powers of two expressed in
//! millisatoshis, one per exponent in a fixed inclusive range. The catalog
//! is generated once at startup and read-only afterwards.

use crate::domain::money::{self, Millisats};

/// Inclusive exponent bounds for catalog generation.
///
/// The defaults ([10, 29]) are the supported note range; bounds read from
/// configuration pass through [`ExponentRange::new`], which falls back to
/// the defaults when the requested range is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentRange {
    min: u32,
    max: u32,
}

/// Default smallest denomination exponent.
pub const DEFAULT_MIN_EXPONENT: u32 = 10;
/// Default largest denomination exponent.
pub const DEFAULT_MAX_EXPONENT: u32 = 29;
/// Largest exponent that still fits a `u64` msat value.
const EXPONENT_CEILING: u32 = 62;

impl ExponentRange {
    /// Creates a range, falling back to the defaults when `min > max` or
    /// the top value would not fit in 64 bits.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        if min > max || max > EXPONENT_CEILING {
            return Self::default();
        }
        Self { min, max }
    }

    /// Smallest generated exponent.
    #[must_use]
    pub fn min(self) -> u32 {
        self.min
    }

    /// Largest generated exponent.
    #[must_use]
    pub fn max(self) -> u32 {
        self.max
    }
}

impl Default for ExponentRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_EXPONENT,
            max: DEFAULT_MAX_EXPONENT,
        }
    }
}

/// A single selectable denomination. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denomination {
    /// Amount in millisatoshis; always a power of two.
    pub value: Millisats,
    /// Human-readable amount, e.g. `"1.02 sat"`.
    pub display: String,
    /// The exponent this entry was generated from.
    pub ordinal: u32,
}

/// The ordered, read-only set of denominations offered by the picker.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Denomination>,
}

impl Catalog {
    /// Generates one entry per exponent in `range`, ascending.
    ///
    /// Deterministic and infallible: the range is validated at
    /// construction, so every `2^ordinal` fits in a `u64`.
    #[must_use]
    pub fn generate(range: ExponentRange) -> Self {
        let entries = (range.min()..=range.max())
            .map(|ordinal| {
                let value = Millisats::new(1u64 << ordinal);
                Denomination {
                    value,
                    display: money::format_amount(value),
                    ordinal,
                }
            })
            .collect();
        Self { entries }
    }

    /// The generated denominations in ascending value order.
    #[must_use]
    pub fn entries(&self) -> &[Denomination] {
        &self.entries
    }

    /// Whether `value` is one of the generated denominations.
    #[must_use]
    pub fn contains(&self, value: Millisats) -> bool {
        self.entries.iter().any(|entry| entry.value == value)
    }

    /// Number of denominations in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty (never the case for a valid range).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::generate(ExponentRange::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_twenty_entries() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn values_are_powers_of_two_over_the_default_range() {
        let catalog = Catalog::default();
        for (index, entry) in catalog.entries().iter().enumerate() {
            let exponent = DEFAULT_MIN_EXPONENT + index as u32;
            assert_eq!(entry.ordinal, exponent);
            assert_eq!(entry.value.value(), 1u64 << exponent);
        }
    }

    #[test]
    fn values_are_strictly_increasing() {
        let catalog = Catalog::default();
        for pair in catalog.entries().windows(2) {
            assert!(pair[0].value < pair[1].value);
        }
    }

    #[test]
    fn displays_come_from_the_formatter() {
        let catalog = Catalog::default();
        assert_eq!(catalog.entries()[0].display, "1.02 sat");
        assert_eq!(catalog.entries()[19].display, "537000 sat");
    }

    #[test]
    fn contains_matches_membership() {
        let catalog = Catalog::default();
        assert!(catalog.contains(Millisats::new(1 << 10)));
        assert!(catalog.contains(Millisats::new(1 << 29)));
        assert!(!catalog.contains(Millisats::new(3)));
        assert!(!catalog.contains(Millisats::new(1 << 30)));
    }

    #[test]
    fn custom_range_is_honored() {
        let catalog = Catalog::generate(ExponentRange::new(0, 3));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.entries()[0].value.value(), 1);
        assert_eq!(catalog.entries()[3].value.value(), 8);
    }

    #[test]
    fn nonsense_range_falls_back_to_default() {
        assert_eq!(ExponentRange::new(20, 10), ExponentRange::default());
        assert_eq!(ExponentRange::new(10, 63), ExponentRange::default());
    }
}
