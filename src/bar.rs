use std::fmt::Display;

use crate::{load_error::LoadError, plate::to_thousandths, unit::Unit};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bar {
    weight: u32,
    unit: Unit,
}

impl Bar {
    ///
    /// # Errors
    /// If `value` is not a finite, non-negative number.
    ///
    pub fn new(value: f64, unit: Unit) -> Result<Self, LoadError> {
        to_thousandths(value)
            .map(|weight| Bar { weight, unit })
            .ok_or(LoadError::InvalidBar(value))
    }

    /// The selectable bar weights for a unit, heaviest first: 45/35 lb, 20/15 kg.
    #[must_use]
    pub fn presets(unit: Unit) -> [Bar; 2] {
        match unit {
            Unit::Pounds => [
                Bar { weight: 45_000, unit },
                Bar { weight: 35_000, unit },
            ],
            Unit::Kilograms => [
                Bar { weight: 20_000, unit },
                Bar { weight: 15_000, unit },
            ],
        }
    }

    #[must_use]
    pub fn presets_owned(unit: Unit) -> Vec<Bar> {
        Bar::presets(unit).to_vec()
    }

    #[must_use]
    pub fn default_for(unit: Unit) -> Bar {
        let [default, _] = Bar::presets(unit);
        default
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.weight as f64 / 1000.0
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} bar", self.value(), self.unit.suffix())
    }
}
