use platemath_rs::{
    bar::Bar, calculator::compute_breakdown, inventory::Inventory, load_request::LoadRequest,
    plate::Plate, unit::Unit,
};

/// Exhaustive minimum plate counts for every amount up to `max`, unbounded
/// coin-change dynamic programming over the inventory denominations.
fn minimum_plate_counts(max: u32, plates: &[Plate]) -> Vec<u32> {
    let mut best = vec![u32::MAX; max as usize + 1];
    best[0] = 0;

    for amount in 1..=max as usize {
        for plate in plates {
            let weight = plate.weight() as usize;
            if weight <= amount && best[amount - weight] != u32::MAX {
                best[amount] = best[amount].min(best[amount - weight] + 1);
            }
        }
    }

    best
}

fn request(target: u32, unit: Unit) -> LoadRequest {
    LoadRequest::new(f64::from(target) / 1000.0, Bar::default_for(unit)).unwrap()
}

#[test]
fn greedy_is_optimal_for_the_standard_pound_plates() {
    let inventory = Inventory::standard(Unit::Pounds);
    let max_per_side = 200_000;
    let best = minimum_plate_counts(max_per_side, inventory.plates());

    for per_side in (0..=max_per_side).step_by(2_500) {
        let target = 45_000 + 2 * per_side;
        let breakdown = compute_breakdown(&request(target, Unit::Pounds), &inventory).unwrap();

        assert_eq!(breakdown.residual(), 0, "per side {per_side} not reached");
        assert_eq!(
            breakdown.plate_count(),
            best[per_side as usize],
            "greedy used more plates than necessary for per side {per_side}"
        );
    }
}

#[test]
fn greedy_is_optimal_for_the_standard_kilogram_plates() {
    let inventory = Inventory::standard(Unit::Kilograms);
    let max_per_side = 150_000;
    let best = minimum_plate_counts(max_per_side, inventory.plates());

    for per_side in (0..=max_per_side).step_by(1_250) {
        let target = 20_000 + 2 * per_side;
        let breakdown = compute_breakdown(&request(target, Unit::Kilograms), &inventory).unwrap();

        assert_eq!(breakdown.residual(), 0, "per side {per_side} not reached");
        assert_eq!(
            breakdown.plate_count(),
            best[per_side as usize],
            "greedy used more plates than necessary for per side {per_side}"
        );
    }
}

#[test]
fn every_result_conserves_and_never_overshoots() {
    let inventory = Inventory::standard(Unit::Pounds);

    // whole-pound targets, including ones no plate combination can reach
    for target in (0..=500_000).step_by(1_000) {
        let request = request(target, Unit::Pounds);
        let breakdown = compute_breakdown(&request, &inventory).unwrap();

        let loaded = breakdown
            .plates()
            .iter()
            .map(|loaded| loaded.weight() * loaded.count_per_side())
            .sum::<u32>();

        assert_eq!(
            breakdown.achieved_total(),
            request.bar().weight() + 2 * loaded
        );
        assert!(breakdown.achieved_total() <= target.max(request.bar().weight()));
        assert_eq!(
            breakdown.achieved_total() + 2 * breakdown.residual(),
            request.bar().weight() + 2 * breakdown.per_side()
        );

        // same inputs, same output
        assert_eq!(breakdown, compute_breakdown(&request, &inventory).unwrap());
    }
}

#[test]
fn breakdowns_stay_descending_with_positive_counts() {
    let inventory = Inventory::standard(Unit::Kilograms);

    for target in (20_000..=300_000).step_by(2_500) {
        let breakdown = compute_breakdown(&request(target, Unit::Kilograms), &inventory).unwrap();

        for pair in breakdown.plates().windows(2) {
            assert!(pair[0].weight() > pair[1].weight());
        }
        assert!(
            breakdown
                .plates()
                .iter()
                .all(|loaded| loaded.count_per_side() > 0)
        );
    }
}
