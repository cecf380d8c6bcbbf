pub mod cavity;
pub mod find;
pub mod list;
pub mod report;
pub mod spos;
pub mod steps;
pub mod summary;

use crate::error::Result;
use ringtrack::core::io::lattice_file::LatticeFile;
use ringtrack::core::io::traits::AcceleratorFile;
use ringtrack::core::models::accelerator::Accelerator;
use std::path::Path;
use tracing::info;

pub(crate) fn load_accelerator(path: &Path) -> Result<Accelerator> {
    info!("Loading lattice from {:?}", path);
    let accelerator = LatticeFile::read_from_path(path)?;
    info!(
        elements = accelerator.lattice.len(),
        energy = accelerator.energy,
        "Lattice loaded."
    );
    Ok(accelerator)
}

pub(crate) fn save_accelerator(accelerator: &Accelerator, path: &Path) -> Result<()> {
    info!("Writing lattice to {:?}", path);
    LatticeFile::write_to_path(accelerator, path)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub const RING: &str = r#"
        [accelerator]
        energy = 3.0e9
        harmonic-number = 864

        [[element]]
        fam-name = "START"

        [[element]]
        fam-name = "QF"
        length = 0.25
        pass-method = "str_mpole_symplectic4_pass"
        polynom-b = [0.0, 2.5, 0.0]

        [[element]]
        fam-name = "B1"
        length = 1.05
        angle = 0.1
        pass-method = "bnd_mpole_symplectic4_pass"

        [[element]]
        fam-name = "QF"
        length = 0.25
        pass-method = "str_mpole_symplectic4_pass"
        polynom-b = [0.0, 2.5, 0.0]

        [[element]]
        fam-name = "RF"
        frequency = 500.0e6
        pass-method = "cavity_pass"
    "#;

    pub fn write_ring(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("ring.toml");
        fs::write(&path, RING).unwrap();
        path
    }
}
