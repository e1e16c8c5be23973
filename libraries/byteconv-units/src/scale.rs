use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::quantity::QuantityError;

/// One unit of a scale, with its size in bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    pub label: &'static str,
    pub multiplier: Decimal,
}

impl Unit {
    pub fn new(label: &'static str, multiplier: u64) -> Self {
        Self {
            label,
            multiplier: Decimal::from(multiplier),
        }
    }
}

/// An ordered table of units, smallest first, all expressing the same base
/// quantity in bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitScale {
    title: &'static str,
    units: Vec<Unit>,
}

static DECIMAL: LazyLock<UnitScale> = LazyLock::new(|| {
    UnitScale::new(
        "國際單位制 (1000進位)",
        vec![
            Unit::new("Bytes", 1),
            Unit::new("KB", 1_000),
            Unit::new("MB", 1_000_000),
            Unit::new("GB", 1_000_000_000),
            Unit::new("TB", 1_000_000_000_000),
        ],
    )
});

static BINARY: LazyLock<UnitScale> = LazyLock::new(|| {
    UnitScale::new(
        "二進位制 (1024進位)",
        vec![
            Unit::new("Bytes", 1),
            Unit::new("KiB", 1 << 10),
            Unit::new("MiB", 1 << 20),
            Unit::new("GiB", 1 << 30),
            Unit::new("TiB", 1 << 40),
        ],
    )
});

impl UnitScale {
    /// Builds a scale. Units must be non-empty, ordered smallest first, with
    /// strictly positive multipliers.
    pub fn new(title: &'static str, units: Vec<Unit>) -> Self {
        debug_assert!(!units.is_empty(), "a scale needs at least one unit");
        debug_assert!(
            units.iter().all(|u| u.multiplier > Decimal::ZERO),
            "multipliers must be positive"
        );
        debug_assert!(
            units.windows(2).all(|w| w[0].multiplier < w[1].multiplier),
            "units must be ordered smallest first"
        );
        Self { title, units }
    }

    /// Bytes, KB, MB, GB, TB (powers of 1000).
    pub fn decimal() -> &'static UnitScale {
        &DECIMAL
    }

    /// Bytes, KiB, MiB, GiB, TiB (powers of 1024).
    pub fn binary() -> &'static UnitScale {
        &BINARY
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The index of the unit with the given label.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.units.iter().position(|u| u.label == label)
    }

    /// Converts `value` in unit `idx` into bytes.
    pub fn to_base(&self, idx: usize, value: Decimal) -> Result<Decimal, QuantityError> {
        value
            .checked_mul(self.units[idx].multiplier)
            .ok_or(QuantityError::OutOfRange)
    }

    /// Converts a byte count into unit `idx`.
    pub fn from_base(&self, idx: usize, base: Decimal) -> Result<Decimal, QuantityError> {
        base.checked_div(self.units[idx].multiplier)
            .ok_or(QuantityError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scales() {
        let labels: Vec<_> = UnitScale::decimal().units().iter().map(|u| u.label).collect();
        assert_eq!(labels, ["Bytes", "KB", "MB", "GB", "TB"]);
        let labels: Vec<_> = UnitScale::binary().units().iter().map(|u| u.label).collect();
        assert_eq!(labels, ["Bytes", "KiB", "MiB", "GiB", "TiB"]);

        assert_eq!(
            UnitScale::binary().units()[4].multiplier,
            Decimal::from(1_099_511_627_776u64)
        );
    }

    #[test]
    fn converts_through_bytes() {
        let scale = UnitScale::binary();
        let mib = scale.position("MiB").expect("MiB exists");
        let base = scale.to_base(mib, Decimal::from(3)).expect("fits");
        assert_eq!(base, Decimal::from(3 * 1024 * 1024));
        let kib = scale.position("KiB").expect("KiB exists");
        assert_eq!(scale.from_base(kib, base), Ok(Decimal::from(3 * 1024)));
    }

    #[test]
    fn overflow_is_out_of_range() {
        let scale = UnitScale::decimal();
        let tb = scale.position("TB").expect("TB exists");
        assert_eq!(
            scale.to_base(tb, Decimal::MAX),
            Err(QuantityError::OutOfRange)
        );
    }
}
