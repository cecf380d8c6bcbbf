use super::{load_accelerator, save_accelerator};
use crate::cli::CavityArgs;
use crate::error::Result;
use tracing::warn;

pub fn run(args: CavityArgs) -> Result<()> {
    let mut accelerator = load_accelerator(&args.lattice.lattice)?;
    let cavities = accelerator.set_cavity_state(args.state);
    if cavities == 0 {
        warn!("Lattice has no element with a nonzero RF frequency.");
    }
    save_accelerator(&accelerator, &args.output)?;

    println!("Switched {} cavities {}.", cavities, args.state);
    println!("Lattice written to: {}", args.output.display());
    Ok(())
}
