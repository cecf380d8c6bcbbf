use super::{load_accelerator, save_accelerator};
use crate::cli::StepsArgs;
use crate::error::Result;
use ringtrack::engine::reconfigure::set_num_integ_steps;
use ringtrack::workflows::survey::survey;

pub fn run(args: StepsArgs) -> Result<()> {
    let mut accelerator = load_accelerator(&args.lattice.lattice)?;
    accelerator.lattice = set_num_integ_steps(&accelerator.lattice);
    save_accelerator(&accelerator, &args.output)?;

    let summary = survey(&accelerator.lattice);
    println!(
        "Integration steps assigned to {} bends, {} quadrupole-like and {} sextupole-like elements.",
        summary.bends, summary.quadrupoles, summary.sextupoles
    );
    println!("Lattice written to: {}", args.output.display());
    Ok(())
}
