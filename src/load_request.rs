use std::str::FromStr;

use crate::{bar::Bar, load_error::LoadError, plate::to_thousandths, unit::Unit};

/// One calculation's input: the total weight the lifter wants on the bar
/// (bar included) and the bar it goes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    target: u32,
    bar: Bar,
}

impl LoadRequest {
    ///
    /// # Errors
    /// If `target` is not a finite, non-negative number.
    ///
    pub fn new(target: f64, bar: Bar) -> Result<Self, LoadError> {
        to_thousandths(target)
            .map(|target| LoadRequest { target, bar })
            .ok_or(LoadError::InvalidTarget(target))
    }

    /// Swaps the bar; the numeric target is kept as-is, in the new bar's unit.
    #[must_use]
    pub fn with_bar(self, bar: Bar) -> Self {
        LoadRequest { bar, ..self }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn target_value(&self) -> f64 {
        self.target as f64 / 1000.0
    }

    #[must_use]
    pub fn bar(&self) -> Bar {
        self.bar
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.bar.unit()
    }
}

impl FromStr for LoadRequest {
    type Err = LoadError;

    /// Parses `"225lb"`, `"225 lbs"` or `"100kg"`; the unit's default bar
    /// (45 lb / 20 kg) is assumed until [`LoadRequest::with_bar`] swaps it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        let (weight, unit) = ["lbs", "lb", "kg"]
            .iter()
            .find_map(|suffix| lower.strip_suffix(suffix).map(|head| (head, *suffix)))
            .ok_or_else(|| LoadError::UnknownUnit(s.to_string()))?;

        let unit = Unit::from_str(unit)?;
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| LoadError::InvalidWeight(s.to_string()))?;

        LoadRequest::new(weight, Bar::default_for(unit))
    }
}
