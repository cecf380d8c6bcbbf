//! # ringtrack Core Library
//!
//! Lattice modelling, query and derived-geometry routines for circular particle
//! accelerators, together with the fixed-format writers used to publish
//! simulation results (closed orbit, multi-turn tracking, dynamic-aperture scans).
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Passive data models (`Element`, `Lattice`,
//!   `Accelerator`), physical constants, the status taxonomy and all file I/O
//!   (lattice files, phase-space inputs, fixed-width reports).
//!
//! - **[`engine`]: The Query Engine.** Pure functions over a `Lattice`: sequence
//!   constructors, attribute-based search, cumulative longitudinal position and bulk
//!   reconfiguration (cavity toggling, integration-step assignment).
//!
//! - **[`workflows`]: The Public API.** Composite procedures built from the engine,
//!   such as the lattice survey used by the command-line front end.

pub mod core;
pub mod engine;
pub mod workflows;
