use crate::{
    bar::Bar, breakdown::Breakdown, calculator, inventory::Inventory, load_error::LoadError,
    plate::to_thousandths, unit::Unit,
};

/// The state behind a calculator surface: the selected unit's inventory, the
/// selected bar and the target total weight. Every change recomputes the
/// breakdown from scratch; nothing is cached.
#[derive(Clone, Debug)]
pub struct Session {
    bar: Bar,
    target: u32,
    inventory: Inventory,
}

impl Session {
    /// Starts on the unit's default bar with nothing loaded.
    #[must_use]
    pub fn new(unit: Unit) -> Self {
        let bar = Bar::default_for(unit);

        Session {
            bar,
            target: bar.weight(),
            inventory: Inventory::standard(unit),
        }
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.bar.unit()
    }

    #[must_use]
    pub fn bar(&self) -> Bar {
        self.bar
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn target_value(&self) -> f64 {
        self.target as f64 / 1000.0
    }

    pub fn step_up(&mut self) {
        self.target = self.target.saturating_add(self.unit().step());
    }

    /// Steps never take the target below zero.
    pub fn step_down(&mut self) {
        self.target = self.target.saturating_sub(self.unit().step());
    }

    ///
    /// # Errors
    /// If `value` is not a finite, non-negative number.
    ///
    pub fn set_target(&mut self, value: f64) -> Result<(), LoadError> {
        self.target = to_thousandths(value).ok_or(LoadError::InvalidTarget(value))?;
        Ok(())
    }

    ///
    /// # Errors
    /// If the bar's unit differs from the session's unit; switch units first.
    ///
    pub fn set_bar(&mut self, bar: Bar) -> Result<(), LoadError> {
        if bar.unit() != self.unit() {
            return Err(LoadError::UnitMismatch {
                request: bar.unit(),
                inventory: self.unit(),
            });
        }

        self.bar = bar;
        Ok(())
    }

    /// Switches inventory, step size and bar presets together. The numeric
    /// target value is kept, not converted; the bar snaps to the new unit's
    /// default preset.
    pub fn set_unit(&mut self, unit: Unit) {
        if unit == self.unit() {
            return;
        }

        self.bar = Bar::default_for(unit);
        self.inventory = Inventory::standard(unit);
    }

    ///
    /// # Errors
    /// If the inventory's unit differs from the session's unit.
    ///
    pub fn set_inventory(&mut self, inventory: Inventory) -> Result<(), LoadError> {
        if inventory.unit() != self.unit() {
            return Err(LoadError::UnitMismatch {
                request: self.unit(),
                inventory: inventory.unit(),
            });
        }

        self.inventory = inventory;
        Ok(())
    }

    /// Back to an empty bar.
    pub fn reset(&mut self) {
        self.target = self.bar.weight();
    }

    #[must_use]
    pub fn breakdown(&self) -> Breakdown {
        calculator::greedy(self.bar, self.target, &self.inventory)
    }
}
