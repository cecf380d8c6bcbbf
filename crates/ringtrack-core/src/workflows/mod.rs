//! # Workflows Module
//!
//! High-level procedures composed from the Query Engine, intended as the entry
//! points for front ends that want an answer in one call rather than a sequence of
//! queries.
//!
//! ## Architecture
//!
//! - **Lattice Survey** ([`survey`]) - Element census, ring length and the
//!   element classes that drive integration-step assignment

pub mod survey;
