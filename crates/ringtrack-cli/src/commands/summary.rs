use super::load_accelerator;
use crate::cli::LatticeArgs;
use crate::error::Result;
use ringtrack::workflows::survey;

pub fn run(args: LatticeArgs) -> Result<()> {
    let accelerator = load_accelerator(&args.lattice)?;
    let summary = survey::survey_accelerator(&accelerator);
    println!("{:<16}: {:.6} eV", "energy", accelerator.energy);
    println!("{:<16}: {}", "harmonic_number", accelerator.harmonic_number);
    println!("{}", summary);
    Ok(())
}
