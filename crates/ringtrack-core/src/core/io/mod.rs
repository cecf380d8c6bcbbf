//! Moves accelerator descriptions and simulation results in and out of the process.
//!
//! Lattices persist as TOML through the [`traits::AcceleratorFile`] interface,
//! tracking inputs arrive as CSV tables, and results leave as the fixed-width text
//! reports of [`report`].

pub mod lattice_file;
pub mod points;
pub mod report;
pub mod traits;
