use crate::core::models::accelerator::Accelerator;
use crate::core::models::element::PassMethod;
use crate::core::models::lattice::Lattice;
use crate::engine::positions::ring_length;
use crate::engine::query::{find_cells_frequency, find_cells_pass_method};
use crate::engine::reconfigure::{StepClass, step_class};
use std::fmt;
use tracing::{info, instrument};

/// Census of a lattice.
///
/// Step-class counts are disjoint and follow the same first-match rules as
/// integration-step assignment, so an element carrying both quadrupole and
/// sextupole terms counts as sextupole-like only.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeSurvey {
    pub elements: usize,
    pub ring_length: f64,
    pub bends: usize,
    pub quadrupoles: usize,
    pub sextupoles: usize,
    pub cavities: usize,
    /// Element count per pass method, in pass-method code order, omitting unused ones.
    pub pass_methods: Vec<(PassMethod, usize)>,
}

#[instrument(skip_all, name = "survey_workflow", fields(elements = lattice.len()))]
pub fn survey(lattice: &Lattice) -> LatticeSurvey {
    let mut bends = 0;
    let mut quadrupoles = 0;
    let mut sextupoles = 0;
    for class in lattice.iter().filter_map(step_class) {
        match class {
            StepClass::Bend => bends += 1,
            StepClass::QuadrupoleLike => quadrupoles += 1,
            StepClass::SextupoleLike => sextupoles += 1,
        }
    }

    let pass_methods = PassMethod::ALL
        .iter()
        .map(|&pm| (pm, find_cells_pass_method(lattice, pm.name(), false).len()))
        .filter(|&(_, count)| count > 0)
        .collect();

    let result = LatticeSurvey {
        elements: lattice.len(),
        ring_length: ring_length(lattice),
        bends,
        quadrupoles,
        sextupoles,
        cavities: find_cells_frequency(lattice, 0.0, true).len(),
        pass_methods,
    };
    info!(
        ring_length = result.ring_length,
        bends = result.bends,
        cavities = result.cavities,
        "Lattice survey complete."
    );
    result
}

/// [`survey`] of the accelerator's lattice.
pub fn survey_accelerator(accelerator: &Accelerator) -> LatticeSurvey {
    survey(&accelerator.lattice)
}

impl fmt::Display for LatticeSurvey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16}: {}", "elements", self.elements)?;
        writeln!(f, "{:<16}: {:.6} m", "ring_length", self.ring_length)?;
        writeln!(f, "{:<16}: {}", "bends", self.bends)?;
        writeln!(f, "{:<16}: {}", "quadrupoles", self.quadrupoles)?;
        writeln!(f, "{:<16}: {}", "sextupoles", self.sextupoles)?;
        write!(f, "{:<16}: {}", "cavities", self.cavities)?;
        for (pass_method, count) in &self.pass_methods {
            write!(f, "\n  {:<26}: {}", pass_method.name(), count)?;
        }
        Ok(())
    }
}
