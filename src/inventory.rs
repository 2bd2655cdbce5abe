use itertools::Itertools;

use crate::{load_error::LoadError, plate::Plate, unit::Unit};

const POUND_PLATES: [u32; 6] = [45_000, 35_000, 25_000, 10_000, 5_000, 2_500];
const KILOGRAM_PLATES: [u32; 6] = [20_000, 15_000, 10_000, 5_000, 2_500, 1_250];

/// The plate denominations available for one unit, strictly descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    unit: Unit,
    plates: Vec<Plate>,
}

impl Inventory {
    /// The standard gym set: 45/35/25/10/5/2.5 lb or 20/15/10/5/2.5/1.25 kg.
    #[must_use]
    pub fn standard(unit: Unit) -> Self {
        let weights = match unit {
            Unit::Pounds => POUND_PLATES,
            Unit::Kilograms => KILOGRAM_PLATES,
        };

        Inventory {
            unit,
            plates: Plate::from_weights(weights.to_vec()),
        }
    }

    /// A gym-specific plate set, e.g. a rack with only 45/25/10/5 lb plates.
    ///
    /// # Errors
    /// If any weight is not a finite positive number, or the sequence is not
    /// strictly descending (which also covers duplicates).
    ///
    pub fn custom(unit: Unit, weights: &[f64]) -> Result<Self, LoadError> {
        let plates = weights
            .iter()
            .copied()
            .map(Plate::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        if plates
            .iter()
            .tuple_windows()
            .any(|(a, b)| b.weight() >= a.weight())
        {
            return Err(LoadError::UnsortedInventory);
        }

        Ok(Inventory { unit, plates })
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }
}
