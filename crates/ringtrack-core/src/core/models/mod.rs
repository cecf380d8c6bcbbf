//! # Core Models Module
//!
//! Data structures describing a ring and the results produced by tracking it.
//!
//! ## Key Components
//!
//! - [`element`] - One beamline component and the closed set of pass methods
//! - [`lattice`] - The ordered element sequence of one ring traversal
//! - [`accelerator`] - A lattice plus machine-wide state (energy, RF and radiation switches)
//! - [`tracking`] - Phase-space points and dynamic-aperture scan outcomes
//!
//! Lattices are built once (usually by a lattice-file reader) and afterwards only
//! read or attribute-mutated in place by the engine.
//!
//! ```ignore
//! use ringtrack::core::models::{element::Element, lattice::Lattice};
//!
//! let lattice = Lattice::from_elements(vec![
//!     Element::quadrupole("QF", 0.2, 2.5),
//!     Element::drift("L1", 1.0),
//!     Element::sbend("B", 1.05, 0.1),
//! ]);
//! ```

pub mod accelerator;
pub mod element;
pub mod lattice;
pub mod tracking;
