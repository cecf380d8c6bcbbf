use super::load_accelerator;
use crate::cli::SposArgs;
use crate::error::Result;
use ringtrack::core::models::lattice::Lattice;
use ringtrack::engine::index_set::IndexSet;
use ringtrack::engine::positions::find_spos;

pub fn run(args: SposArgs) -> Result<()> {
    let accelerator = load_accelerator(&args.lattice.lattice)?;
    let lattice = &accelerator.lattice;

    println!("{:<6} {:<15} {}", "# idx", "fam_name", "s[m]");
    for (index, s) in positions(lattice, &args.indices)? {
        let name = lattice.get(index).map_or("(closure)", |e| e.fam_name.as_str());
        println!("{:<6} {:<15} {:.6}", index, name, s);
    }
    Ok(())
}

/// Requested indices paired with their positions; no indices means every element
/// followed by the closure sentinel.
pub(crate) fn positions(lattice: &Lattice, indices: &[usize]) -> Result<Vec<(usize, f64)>> {
    let indices = if indices.is_empty() {
        IndexSet::range(lattice.len() + 1).into_vec()
    } else {
        indices.to_vec()
    };
    let spos = find_spos(lattice, &indices)?;
    Ok(indices.into_iter().zip(spos).collect())
}
