use std::fmt::Display;

use crate::{
    bar::Bar,
    plate::{Plate, SizeClass},
    unit::Unit,
};

/// One denomination's contribution to a single side of the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlateCount {
    plate: Plate,
    count: u32,
}

impl PlateCount {
    pub(crate) fn new(plate: Plate, count: u32) -> Self {
        PlateCount { plate, count }
    }

    #[must_use]
    pub fn plate(&self) -> Plate {
        self.plate
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.plate.weight()
    }

    #[must_use]
    pub fn weight_value(&self) -> f64 {
        self.plate.value()
    }

    #[must_use]
    pub fn count_per_side(&self) -> u32 {
        self.count
    }

    /// Weight this denomination adds to one side.
    #[must_use]
    pub fn side_weight(&self) -> u32 {
        self.plate.weight() * self.count
    }

    /// Weight this denomination adds to the whole bar, both sides.
    #[must_use]
    pub fn pair_weight(&self) -> u32 {
        self.side_weight() * 2
    }
}

/// The result of one calculation, immutable once returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakdown {
    bar: Bar,
    per_side: u32,
    plates: Vec<PlateCount>,
}

impl Breakdown {
    pub(crate) fn new(bar: Bar, per_side: u32, plates: Vec<PlateCount>) -> Self {
        Breakdown {
            bar,
            per_side,
            plates,
        }
    }

    #[must_use]
    pub fn bar(&self) -> Bar {
        self.bar
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.bar.unit()
    }

    /// Descending denominations with non-zero counts.
    #[must_use]
    pub fn plates(&self) -> &[PlateCount] {
        &self.plates
    }

    #[must_use]
    pub fn plates_owned(self) -> Vec<PlateCount> {
        self.plates
    }

    /// The load one side must carry, bar excluded.
    #[must_use]
    pub fn per_side(&self) -> u32 {
        self.per_side
    }

    #[must_use]
    pub fn per_side_value(&self) -> f64 {
        self.per_side as f64 / 1000.0
    }

    /// Weight actually loaded on one side; at most [`Breakdown::per_side`].
    #[must_use]
    pub fn loaded_per_side(&self) -> u32 {
        self.plates.iter().map(PlateCount::side_weight).sum()
    }

    /// Per-side weight the inventory could not represent.
    #[must_use]
    pub fn residual(&self) -> u32 {
        self.per_side - self.loaded_per_side()
    }

    #[must_use]
    pub fn achieved_total(&self) -> u32 {
        self.bar.weight() + 2 * self.loaded_per_side()
    }

    #[must_use]
    pub fn achieved_total_value(&self) -> f64 {
        self.achieved_total() as f64 / 1000.0
    }

    /// Total plates on one side.
    #[must_use]
    pub fn plate_count(&self) -> u32 {
        self.plates.iter().map(PlateCount::count_per_side).sum()
    }

    #[must_use]
    pub fn is_bar_only(&self) -> bool {
        self.plates.is_empty()
    }

    /// A mirrored textual plate stack: small plates outermost on the left,
    /// large plates against the bar on both sides. Plates draw as tall, mid
    /// or low blocks by their visual weight class.
    #[must_use]
    pub fn diagram(&self) -> String {
        let right = self
            .plates
            .iter()
            .flat_map(|loaded| std::iter::repeat_n(loaded.plate(), loaded.count_per_side() as usize))
            .map(|plate| match plate.size_class(self.unit()) {
                SizeClass::Heavy => '█',
                SizeClass::Medium => '▆',
                SizeClass::Light => '▂',
            })
            .collect::<String>();

        let left = right.chars().rev().collect::<String>();

        format!("{left}━━━━━━{right}")
    }
}

impl Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side_values = self
            .plates
            .iter()
            .flat_map(|loaded| {
                std::iter::repeat_n(loaded.weight_value(), loaded.count_per_side() as usize)
            })
            .collect::<Vec<_>>();

        write!(
            f,
            "{} {:?} ({} {})",
            self.bar,
            side_values,
            self.achieved_total_value(),
            self.unit().suffix(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plate::Plate;

    fn breakdown_225() -> Breakdown {
        Breakdown::new(
            Bar::default_for(Unit::Pounds),
            90_000,
            vec![PlateCount::new(Plate::new(45_000), 2)],
        )
    }

    #[test]
    fn totals_are_conserved() {
        let breakdown = breakdown_225();
        assert_eq!(breakdown.loaded_per_side(), 90_000);
        assert_eq!(breakdown.achieved_total(), 225_000);
        assert_eq!(breakdown.residual(), 0);
        assert_eq!(breakdown.plate_count(), 2);
    }

    #[test]
    fn display_lists_one_side() {
        assert_eq!(
            breakdown_225().to_string(),
            "45 lbs bar [45.0, 45.0] (225 lbs)"
        );
    }

    #[test]
    fn diagram_mirrors_the_stack() {
        let breakdown = Breakdown::new(
            Bar::default_for(Unit::Pounds),
            72_500,
            vec![
                PlateCount::new(Plate::new(45_000), 1),
                PlateCount::new(Plate::new(25_000), 1),
                PlateCount::new(Plate::new(2_500), 1),
            ],
        );

        assert_eq!(breakdown.diagram(), "▂▆█━━━━━━█▆▂");
    }

    #[test]
    fn bar_only_diagram_is_just_the_bar() {
        let breakdown = Breakdown::new(Bar::default_for(Unit::Pounds), 0, vec![]);
        assert!(breakdown.is_bar_only());
        assert_eq!(breakdown.diagram(), "━━━━━━");
    }
}
