use super::load_accelerator;
use crate::cli::{FindArgs, FindAttribute};
use crate::error::{CliError, Result};
use ringtrack::core::models::element::PassMethod;
use ringtrack::core::models::lattice::Lattice;
use ringtrack::engine::index_set::IndexSet;
use ringtrack::engine::positions::find_spos;
use ringtrack::engine::query::{
    find_cells_angle, find_cells_fam_name, find_cells_frequency, find_cells_pass_method,
    find_cells_polynom_a, find_cells_polynom_b,
};
use tracing::info;

pub fn run(args: FindArgs) -> Result<()> {
    let accelerator = load_accelerator(&args.lattice.lattice)?;
    let lattice = &accelerator.lattice;

    let indices = find_indices(lattice, &args)?;
    info!(matches = indices.len(), "Search complete.");
    if indices.is_empty() {
        println!("No matching elements.");
        return Ok(());
    }

    let positions = find_spos(lattice, indices.as_slice())?;
    println!("{:<6} {:<15} {}", "# idx", "fam_name", "s[m]");
    for (index, s) in indices.iter().zip(positions) {
        println!("{:<6} {:<15} {:.6}", index, lattice[index].fam_name, s);
    }
    Ok(())
}

fn number(args: &FindArgs) -> Result<f64> {
    args.value.trim().parse().map_err(|_| {
        CliError::Argument(format!(
            "'{}' is not a valid number for --by {:?}",
            args.value, args.by
        ))
    })
}

fn order(args: &FindArgs) -> Result<usize> {
    args.order.ok_or_else(|| {
        CliError::Argument("--order is required when searching by polynom-a or polynom-b".to_string())
    })
}

pub(crate) fn find_indices(lattice: &Lattice, args: &FindArgs) -> Result<IndexSet> {
    let reverse = args.reverse;
    let indices = match args.by {
        FindAttribute::FamName => find_cells_fam_name(lattice, &args.value, reverse),
        FindAttribute::Angle => find_cells_angle(lattice, number(args)?, reverse),
        FindAttribute::Frequency => find_cells_frequency(lattice, number(args)?, reverse),
        FindAttribute::PolynomA => {
            find_cells_polynom_a(lattice, order(args)?, number(args)?, reverse)?
        }
        FindAttribute::PolynomB => {
            find_cells_polynom_b(lattice, order(args)?, number(args)?, reverse)?
        }
        FindAttribute::PassMethod => {
            let pass_method: PassMethod = args
                .value
                .parse()
                .map_err(|e| CliError::Argument(format!("{}", e)))?;
            find_cells_pass_method(lattice, pass_method.name(), reverse)
        }
    };
    Ok(indices)
}
