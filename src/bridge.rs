use crate::bar::Bar;
use crate::breakdown::Breakdown;
use crate::breakdown::PlateCount;
use crate::inventory::Inventory;
use crate::load_error::LoadError;
use crate::session::Session;
use crate::unit::Unit;

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type Unit;
        type Bar;
        type Inventory;
        type Session;
        type Breakdown;
        type PlateCount;
        type LoadError;

        #[swift_bridge(associated_to = Unit)]
        fn pounds() -> Unit;
        #[swift_bridge(associated_to = Unit)]
        fn kilograms() -> Unit;

        #[swift_bridge(associated_to = Bar)]
        fn default_for(unit: Unit) -> Bar;
        #[swift_bridge(associated_to = Bar)]
        fn presets_owned(unit: Unit) -> Vec<Bar>;
        fn value(self: &Bar) -> f64;

        #[swift_bridge(associated_to = Inventory)]
        fn standard(unit: Unit) -> Inventory;

        #[swift_bridge(init)]
        fn new(unit: Unit) -> Session;
        fn step_up(self: &mut Session);
        fn step_down(self: &mut Session);
        fn reset(self: &mut Session);
        fn set_unit(self: &mut Session, unit: Unit);
        fn set_target(self: &mut Session, value: f64) -> Result<(), LoadError>;
        fn set_bar(self: &mut Session, bar: Bar) -> Result<(), LoadError>;
        fn set_inventory(self: &mut Session, inventory: Inventory) -> Result<(), LoadError>;
        fn target_value(self: &Session) -> f64;
        fn breakdown(self: &Session) -> Breakdown;

        fn per_side_value(self: &Breakdown) -> f64;
        fn achieved_total_value(self: &Breakdown) -> f64;
        fn is_bar_only(self: &Breakdown) -> bool;
        fn diagram(self: &Breakdown) -> String;
        fn plates_owned(self: Breakdown) -> Vec<PlateCount>;

        fn weight_value(self: &PlateCount) -> f64;
        fn count_per_side(self: &PlateCount) -> u32;
    }
}
