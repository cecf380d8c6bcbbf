//! # Engine Module
//!
//! The lattice Query Engine: pure functions that locate, filter and reconfigure
//! elements by physical attribute and compute longitudinal positions along the ring.
//!
//! ## Architecture
//!
//! - **Index Sets** ([`index_set`]) - Strictly ascending element positions and set difference
//! - **Attribute Access** ([`attributes`]) - The `ElementAttribute` capability every search is parameterized by
//! - **Queries** ([`query`]) - Sequence constructors and attribute-based search
//! - **Geometry** ([`positions`]) - Cumulative longitudinal position (`s`)
//! - **Reconfiguration** ([`reconfigure`]) - Cavity toggling and integration-step assignment
//! - **Error Handling** ([`error`]) - Precondition violations reported as `QueryError`
//!
//! Every operation is a single deterministic pass over its input. Nothing here
//! synchronizes access: callers that work on many lattices in parallel give each
//! worker its own copy.

pub mod attributes;
pub mod error;
pub mod index_set;
pub mod positions;
pub mod query;
pub mod reconfigure;
