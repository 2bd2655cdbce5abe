use anyhow::Ok;
use clap::Parser;
use itertools::Itertools;
use platemath_rs::{
    bar::Bar, calculator::compute_breakdown, inventory::Inventory, load_request::LoadRequest,
    plate::Plate, unit::Unit,
};

#[derive(Parser)]
struct Args {
    /// Target total weights with a unit suffix, e.g. `225lb` or `100kg`.
    #[arg(value_parser = clap::value_parser!(LoadRequest))]
    requests: Vec<LoadRequest>,

    /// Bar weight override, in the same unit as the request it applies to.
    #[arg(long)]
    bar: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.requests.is_empty() {
        for unit in [Unit::Pounds, Unit::Kilograms] {
            let inventory = Inventory::standard(unit);
            println!(
                "{} plates: {:?}",
                unit,
                inventory
                    .plates()
                    .iter()
                    .map(Plate::value)
                    .collect::<Vec<_>>()
            );
            println!("{} bars: {}", unit, Bar::presets(unit).iter().format(", "));
        }

        return Ok(());
    }

    for request in args.requests {
        let request = match args.bar {
            Some(weight) => request.with_bar(Bar::new(weight, request.unit())?),
            None => request,
        };

        let inventory = Inventory::standard(request.unit());
        let breakdown = compute_breakdown(&request, &inventory)?;

        println!("{breakdown}");
        println!("  {}", breakdown.diagram());
    }

    Ok(())
}
