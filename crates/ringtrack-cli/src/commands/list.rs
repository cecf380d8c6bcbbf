use super::load_accelerator;
use crate::cli::LatticeArgs;
use crate::error::Result;

pub fn run(args: LatticeArgs) -> Result<()> {
    let accelerator = load_accelerator(&args.lattice)?;
    print!("{}", accelerator.lattice);
    Ok(())
}
