use super::error::QueryError;
use super::index_set::IndexSet;
use super::query::{find_cells_angle, find_cells_polynom_b};
use crate::core::models::accelerator::Accelerator;
use crate::core::models::element::{Element, PassMethod, QUADRUPOLE_ORDER, SEXTUPOLE_ORDER};
use crate::core::models::lattice::Lattice;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Longitudinal slice length targeted for bends [m].
pub const BEND_STEP_LENGTH: f64 = 0.035;
pub const MIN_BEND_STEPS: u32 = 10;
pub const QUADRUPOLE_STEPS: u32 = 10;
pub const SEXTUPOLE_STEPS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CavityState {
    On,
    Off,
}

impl FromStr for CavityState {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(CavityState::On),
            "off" => Ok(CavityState::Off),
            _ => Err(QueryError::InvalidCavityState(s.to_string())),
        }
    }
}

impl fmt::Display for CavityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CavityState::On => "on",
            CavityState::Off => "off",
        })
    }
}

/// Switches every cavity of the lattice on or off, in place.
///
/// Any element with a nonzero RF frequency counts as a cavity, whatever its current
/// pass method. `On` assigns the cavity pass method; `Off` assigns identity for
/// zero-length cavities and drift otherwise. Returns the number of cavities touched.
pub fn set_cavity(lattice: &mut Lattice, state: CavityState) -> usize {
    let mut touched = 0;
    for element in lattice.iter_mut().filter(|e| e.is_cavity()) {
        element.pass_method = match state {
            CavityState::On => PassMethod::CavityPass,
            CavityState::Off if element.length == 0.0 => PassMethod::IdentityPass,
            CavityState::Off => PassMethod::DriftPass,
        };
        touched += 1;
    }
    debug!(cavities = touched, state = %state, "Cavity state applied.");
    touched
}

/// [`set_cavity`] on the accelerator's lattice, keeping `cavity_on` in step.
pub fn set_cavity_state(accelerator: &mut Accelerator, state: CavityState) -> usize {
    accelerator.cavity_on = state == CavityState::On;
    set_cavity(&mut accelerator.lattice, state)
}

/// Element classes that receive a dedicated integration-step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepClass {
    Bend,
    QuadrupoleLike,
    SextupoleLike,
}

struct StepRule {
    class: StepClass,
    applies: fn(&Element) -> bool,
    steps: fn(&Element) -> u32,
}

fn bend_steps(element: &Element) -> u32 {
    ((element.length / BEND_STEP_LENGTH).ceil() as u32).max(MIN_BEND_STEPS)
}

// First match wins. Sextupole-like precedes quadrupole-like: an element carrying
// both coefficients ends up with the sextupole count.
static STEP_RULES: [StepRule; 3] = [
    StepRule {
        class: StepClass::Bend,
        applies: |e| e.angle != 0.0,
        steps: bend_steps,
    },
    StepRule {
        class: StepClass::SextupoleLike,
        applies: |e| e.polynom_b[SEXTUPOLE_ORDER] != 0.0,
        steps: |_| SEXTUPOLE_STEPS,
    },
    StepRule {
        class: StepClass::QuadrupoleLike,
        applies: |e| e.polynom_b[QUADRUPOLE_ORDER] != 0.0,
        steps: |_| QUADRUPOLE_STEPS,
    },
];

fn matching_rule(element: &Element) -> Option<&'static StepRule> {
    STEP_RULES.iter().find(|rule| (rule.applies)(element))
}

/// The step class an element falls in, `None` for elements left untouched.
pub fn step_class(element: &Element) -> Option<StepClass> {
    matching_rule(element).map(|rule| rule.class)
}

/// Copy of `lattice` with integration-step counts assigned by element class.
///
/// - bends (nonzero angle): `max(10, ceil(length / 0.035))`
/// - sextupole-like (nonzero sextupole term, not a bend): 5
/// - quadrupole-like (nonzero quadrupole term, not a bend): 10
///
/// Classification reads the input elements only. Everything else keeps its count.
#[instrument(skip_all, fields(elements = lattice.len()))]
pub fn set_num_integ_steps(lattice: &Lattice) -> Lattice {
    let mut counts = [0usize; 3];
    let result: Lattice = lattice
        .iter()
        .map(|original| {
            let mut element = original.clone();
            if let Some(rule) = matching_rule(original) {
                element.nr_steps = (rule.steps)(original);
                counts[rule.class as usize] += 1;
            }
            element
        })
        .collect();
    debug!(
        bends = counts[StepClass::Bend as usize],
        quadrupoles = counts[StepClass::QuadrupoleLike as usize],
        sextupoles = counts[StepClass::SextupoleLike as usize],
        "Integration steps assigned."
    );
    result
}

/// Index sets of each step class, built by set subtraction of the bend indices.
///
/// The quadrupole-like and sextupole-like sets may overlap; [`set_num_integ_steps`]
/// gives such elements the sextupole count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepClassIndices {
    pub bends: IndexSet,
    pub quadrupoles: IndexSet,
    pub sextupoles: IndexSet,
}

pub fn step_class_indices(lattice: &Lattice) -> StepClassIndices {
    let bends = find_cells_angle(lattice, 0.0, true);
    let with_order = |order| {
        find_cells_polynom_b(lattice, order, 0.0, true)
            .map(|set| set.difference(&bends))
            .unwrap_or_default()
    };
    StepClassIndices {
        quadrupoles: with_order(QUADRUPOLE_ORDER),
        sextupoles: with_order(SEXTUPOLE_ORDER),
        bends,
    }
}
