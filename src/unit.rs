use std::{fmt::Display, str::FromStr};

use crate::load_error::LoadError;

/// Selects the plate inventory, the stepper increment and the bar presets.
/// Weights are carried as `u32` thousandths of the active unit, so a 2.5 lb
/// plate is `2500` and a 1.25 kg plate is `1250`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum Unit {
    Pounds,
    Kilograms,
}

impl Unit {
    /// Increment applied by the target-weight stepper: 5 lb or 2.5 kg.
    #[must_use]
    pub fn step(&self) -> u32 {
        match self {
            Unit::Pounds => 5_000,
            Unit::Kilograms => 2_500,
        }
    }

    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Pounds => "lbs",
            Unit::Kilograms => "kg",
        }
    }

    /// Plates at or above this weight render as full-height blocks.
    #[must_use]
    pub fn heavy_threshold(&self) -> u32 {
        match self {
            Unit::Pounds => 35_000,
            Unit::Kilograms => 15_000,
        }
    }

    /// Plates at or above this weight (but below heavy) render as mid-height blocks.
    #[must_use]
    pub fn medium_threshold(&self) -> u32 {
        match self {
            Unit::Pounds => 10_000,
            Unit::Kilograms => 5_000,
        }
    }

    #[must_use]
    pub fn pounds() -> Self {
        Unit::Pounds
    }

    #[must_use]
    pub fn kilograms() -> Self {
        Unit::Kilograms
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Pounds => write!(f, "lbs"),
            Unit::Kilograms => write!(f, "kg"),
        }
    }
}

impl FromStr for Unit {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lb" | "lbs" => Ok(Unit::Pounds),
            "kg" => Ok(Unit::Kilograms),
            _ => Err(LoadError::UnknownUnit(s.to_string())),
        }
    }
}
