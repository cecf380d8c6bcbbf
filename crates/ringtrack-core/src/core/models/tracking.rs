use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A point in 6-D phase space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pos {
    /// Horizontal position [m].
    pub rx: f64,
    /// Horizontal angle [rad].
    pub px: f64,
    /// Vertical position [m].
    pub ry: f64,
    /// Vertical angle [rad].
    pub py: f64,
    /// Relative energy deviation.
    pub de: f64,
    /// Path-length deviation [m].
    pub dl: f64,
}

impl Pos {
    pub fn new(rx: f64, px: f64, ry: f64, py: f64, de: f64, dl: f64) -> Self {
        Self {
            rx,
            px,
            ry,
            py,
            de,
            dl,
        }
    }

    /// The point reported for positions a tracking run never reached.
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    pub fn is_finite(&self) -> bool {
        [self.rx, self.px, self.ry, self.py, self.de, self.dl]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Phase-space plane in which a particle was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Plane {
    #[default]
    None = 0,
    X = 1,
    Y = 2,
    Z = 3,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown plane: '{0}'")]
pub struct ParsePlaneError(pub String);

impl Plane {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Plane::None => "none",
            Plane::X => "x",
            Plane::Y => "y",
            Plane::Z => "z",
        })
    }
}

impl FromStr for Plane {
    type Err = ParsePlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" => Ok(Plane::None),
            "x" | "1" => Ok(Plane::X),
            "y" | "2" => Ok(Plane::Y),
            "z" | "3" => Ok(Plane::Z),
            _ => Err(ParsePlaneError(s.to_string())),
        }
    }
}

/// Outcome of tracking one initial condition of a dynamic-aperture scan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DynApGridPoint {
    pub start_element: usize,
    pub lost_turn: u32,
    pub lost_element: usize,
    pub lost_plane: Plane,
    /// Initial condition.
    pub p: Pos,
    pub nux1: f64,
    pub nuy1: f64,
    pub nux2: f64,
    pub nuy2: f64,
}
