//! # Core Module
//!
//! The foundation layer of ringtrack: the beamline data model and everything that
//! moves it in or out of the process.
//!
//! ## Architecture
//!
//! - **Beamline Representation** ([`models`]) - Elements, lattices, accelerators and
//!   phase-space points
//! - **Physical Constants** ([`constants`]) - Process-wide immutable constants
//! - **Outcome Taxonomy** ([`status`]) - The closed set of outcomes every error maps onto
//! - **File I/O** ([`io`]) - Lattice files, tracking inputs and fixed-width reports

pub mod constants;
pub mod io;
pub mod models;
pub mod status;
