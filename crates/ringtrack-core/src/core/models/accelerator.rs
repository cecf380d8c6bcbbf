use super::lattice::Lattice;
use crate::engine::reconfigure::{self, CavityState};

/// A ring together with the machine-wide state the reports describe.
#[derive(Debug, Clone, PartialEq)]
pub struct Accelerator {
    /// Beam energy in eV.
    pub energy: f64,
    pub harmonic_number: u32,
    pub cavity_on: bool,
    pub radiation_on: bool,
    /// Whether the vacuum-chamber aperture is enforced during tracking.
    pub vchamber_on: bool,
    pub lattice: Lattice,
}

impl Accelerator {
    /// Creates an accelerator with cavities, radiation and chamber limits switched off.
    pub fn new(energy: f64, harmonic_number: u32, lattice: Lattice) -> Self {
        Self {
            energy,
            harmonic_number,
            cavity_on: false,
            radiation_on: false,
            vchamber_on: false,
            lattice,
        }
    }

    /// Switches every cavity on or off and records the state in `cavity_on`.
    /// Returns the number of cavities found.
    pub fn set_cavity_state(&mut self, state: CavityState) -> usize {
        reconfigure::set_cavity_state(self, state)
    }
}

impl Default for Accelerator {
    fn default() -> Self {
        Self::new(0.0, 1, Lattice::new())
    }
}
