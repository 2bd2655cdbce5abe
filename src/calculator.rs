use crate::{
    bar::Bar,
    breakdown::{Breakdown, PlateCount},
    inventory::Inventory,
    load_error::LoadError,
    load_request::LoadRequest,
};

/// Greedy largest-first plate selection for a target total weight.
///
/// A target at or below the bar weight yields an empty breakdown ("just the
/// bar"). A target the inventory cannot reach exactly is not an error either:
/// the leftover is dropped and the achieved total comes out below the target.
///
/// # Errors
/// If the request and inventory disagree on the unit.
///
pub fn compute_breakdown(
    request: &LoadRequest,
    inventory: &Inventory,
) -> Result<Breakdown, LoadError> {
    if request.unit() != inventory.unit() {
        return Err(LoadError::UnitMismatch {
            request: request.unit(),
            inventory: inventory.unit(),
        });
    }

    Ok(greedy(request.bar(), request.target(), inventory))
}

/// The unchecked core, shared with [`Session`](crate::session::Session) whose
/// construction already guarantees matching units.
pub(crate) fn greedy(bar: Bar, target: u32, inventory: &Inventory) -> Breakdown {
    let per_side = target.saturating_sub(bar.weight()) / 2;

    let mut remaining = per_side;
    let mut plates = Vec::new();

    for plate in inventory.plates() {
        let count = remaining / plate.weight();
        if count > 0 {
            plates.push(PlateCount::new(*plate, count));
            remaining -= count * plate.weight();
        }
    }

    Breakdown::new(bar, per_side, plates)
}
