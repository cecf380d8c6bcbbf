use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of multipole coefficients carried by every element
/// (order 0 = dipole error, 1 = quadrupole, 2 = sextupole).
pub const MAX_POLYNOM_ORDERS: usize = 3;

/// Multipole order of the normal/skew quadrupole coefficient.
pub const QUADRUPOLE_ORDER: usize = 1;
/// Multipole order of the normal/skew sextupole coefficient.
pub const SEXTUPOLE_ORDER: usize = 2;

/// Integration algorithm executed by the tracking engine for one element.
///
/// The set is closed; the numeric code of each variant is its declaration index
/// and the canonical name is the snake_case string used in lattice files and
/// name-based queries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum PassMethod {
    #[default]
    IdentityPass = 0,
    DriftPass = 1,
    StrMpoleSymplectic4Pass = 2,
    BndMpoleSymplectic4Pass = 3,
    CorrectorPass = 4,
    CavityPass = 5,
    ThinQuadPass = 6,
    ThinSextPass = 7,
    KicktablePass = 8,
}

static PASS_METHOD_NAMES: [&str; 9] = [
    "identity_pass",
    "drift_pass",
    "str_mpole_symplectic4_pass",
    "bnd_mpole_symplectic4_pass",
    "corrector_pass",
    "cavity_pass",
    "thinquad_pass",
    "thinsext_pass",
    "kicktable_pass",
];

static PASS_METHODS_BY_NAME: Map<&'static str, PassMethod> = phf_map! {
    "identity_pass" => PassMethod::IdentityPass,
    "drift_pass" => PassMethod::DriftPass,
    "str_mpole_symplectic4_pass" => PassMethod::StrMpoleSymplectic4Pass,
    "bnd_mpole_symplectic4_pass" => PassMethod::BndMpoleSymplectic4Pass,
    "corrector_pass" => PassMethod::CorrectorPass,
    "cavity_pass" => PassMethod::CavityPass,
    "thinquad_pass" => PassMethod::ThinQuadPass,
    "thinsext_pass" => PassMethod::ThinSextPass,
    "kicktable_pass" => PassMethod::KicktablePass,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown pass method: '{0}'")]
pub struct ParsePassMethodError(pub String);

impl PassMethod {
    pub const ALL: [PassMethod; 9] = [
        PassMethod::IdentityPass,
        PassMethod::DriftPass,
        PassMethod::StrMpoleSymplectic4Pass,
        PassMethod::BndMpoleSymplectic4Pass,
        PassMethod::CorrectorPass,
        PassMethod::CavityPass,
        PassMethod::ThinQuadPass,
        PassMethod::ThinSextPass,
        PassMethod::KicktablePass,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Canonical name, as matched by name-based queries.
    pub fn name(self) -> &'static str {
        PASS_METHOD_NAMES[self as usize]
    }
}

impl fmt::Display for PassMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PassMethod {
    type Err = ParsePassMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PASS_METHODS_BY_NAME
            .get(s.trim())
            .copied()
            .ok_or_else(|| ParsePassMethodError(s.to_string()))
    }
}

impl TryFrom<String> for PassMethod {
    type Error = ParsePassMethodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PassMethod> for &'static str {
    fn from(pm: PassMethod) -> Self {
        pm.name()
    }
}

fn default_nr_steps() -> u32 {
    1
}

/// One beamline component.
///
/// Elements are passive records: nothing here enforces consistency between the
/// pass method and the physical attributes. The engine's cavity toggle is the only
/// operation that maintains such a relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Element {
    /// Family name; shared by every element of the same magnet family.
    pub fam_name: String,
    /// Physical length in meters.
    #[serde(default)]
    pub length: f64,
    /// Bend angle in radians (zero for non-bending elements).
    #[serde(default)]
    pub angle: f64,
    /// RF frequency in Hz (zero unless the element is a cavity).
    #[serde(default)]
    pub frequency: f64,
    #[serde(default)]
    pub pass_method: PassMethod,
    /// Number of integration slices used by the tracking engine.
    #[serde(default = "default_nr_steps")]
    pub nr_steps: u32,
    /// Skew multipole coefficients indexed by order.
    #[serde(default)]
    pub polynom_a: [f64; MAX_POLYNOM_ORDERS],
    /// Normal multipole coefficients indexed by order.
    #[serde(default)]
    pub polynom_b: [f64; MAX_POLYNOM_ORDERS],
}

impl Default for Element {
    fn default() -> Self {
        Self {
            fam_name: String::new(),
            length: 0.0,
            angle: 0.0,
            frequency: 0.0,
            pass_method: PassMethod::IdentityPass,
            nr_steps: default_nr_steps(),
            polynom_a: [0.0; MAX_POLYNOM_ORDERS],
            polynom_b: [0.0; MAX_POLYNOM_ORDERS],
        }
    }
}

impl Element {
    /// Zero-length element that leaves the beam untouched.
    pub fn marker(fam_name: &str) -> Self {
        Self {
            fam_name: fam_name.to_string(),
            ..Default::default()
        }
    }

    pub fn drift(fam_name: &str, length: f64) -> Self {
        Self {
            fam_name: fam_name.to_string(),
            length,
            pass_method: PassMethod::DriftPass,
            ..Default::default()
        }
    }

    pub fn corrector(fam_name: &str, length: f64) -> Self {
        Self {
            fam_name: fam_name.to_string(),
            length,
            pass_method: PassMethod::CorrectorPass,
            ..Default::default()
        }
    }

    /// Sector bend with a uniform field (no gradient).
    pub fn sbend(fam_name: &str, length: f64, angle: f64) -> Self {
        Self {
            fam_name: fam_name.to_string(),
            length,
            angle,
            pass_method: PassMethod::BndMpoleSymplectic4Pass,
            nr_steps: 20,
            ..Default::default()
        }
    }

    /// Thick quadrupole with normalized gradient `k` [1/m^2].
    pub fn quadrupole(fam_name: &str, length: f64, k: f64) -> Self {
        let mut polynom_b = [0.0; MAX_POLYNOM_ORDERS];
        polynom_b[QUADRUPOLE_ORDER] = k;
        Self {
            fam_name: fam_name.to_string(),
            length,
            pass_method: PassMethod::StrMpoleSymplectic4Pass,
            nr_steps: 10,
            polynom_b,
            ..Default::default()
        }
    }

    /// Thick sextupole with normalized strength `s` [1/m^3].
    pub fn sextupole(fam_name: &str, length: f64, s: f64) -> Self {
        let mut polynom_b = [0.0; MAX_POLYNOM_ORDERS];
        polynom_b[SEXTUPOLE_ORDER] = s;
        Self {
            fam_name: fam_name.to_string(),
            length,
            pass_method: PassMethod::StrMpoleSymplectic4Pass,
            nr_steps: 5,
            polynom_b,
            ..Default::default()
        }
    }

    pub fn rfcavity(fam_name: &str, length: f64, frequency: f64) -> Self {
        Self {
            fam_name: fam_name.to_string(),
            length,
            frequency,
            pass_method: PassMethod::CavityPass,
            ..Default::default()
        }
    }

    /// Skew coefficient of the given multipole order, `None` past the array end.
    pub fn polynom_a(&self, order: usize) -> Option<f64> {
        self.polynom_a.get(order).copied()
    }

    /// Normal coefficient of the given multipole order, `None` past the array end.
    pub fn polynom_b(&self, order: usize) -> Option<f64> {
        self.polynom_b.get(order).copied()
    }

    pub fn is_cavity(&self) -> bool {
        self.frequency != 0.0
    }

    pub fn is_bend(&self) -> bool {
        self.angle != 0.0
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<14}: {}", "fam_name", self.fam_name)?;
        writeln!(f, "{:<14}: {}", "length", self.length)?;
        writeln!(f, "{:<14}: {}", "pass_method", self.pass_method)?;
        writeln!(f, "{:<14}: {}", "nr_steps", self.nr_steps)?;
        if self.angle != 0.0 {
            writeln!(f, "{:<14}: {}", "angle", self.angle)?;
        }
        if self.frequency != 0.0 {
            writeln!(f, "{:<14}: {}", "frequency", self.frequency)?;
        }
        if self.polynom_a.iter().any(|&c| c != 0.0) {
            writeln!(f, "{:<14}: {:?}", "polynom_a", self.polynom_a)?;
        }
        if self.polynom_b.iter().any(|&c| c != 0.0) {
            writeln!(f, "{:<14}: {:?}", "polynom_b", self.polynom_b)?;
        }
        Ok(())
    }
}
