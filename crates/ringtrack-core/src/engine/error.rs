use crate::core::status::Status;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Index set is empty")]
    EmptyIndexSet,

    #[error(
        "Index set is not strictly ascending at position {position} ({previous} followed by {current})"
    )]
    NotAscending {
        position: usize,
        previous: usize,
        current: usize,
    },

    #[error("Index {index} is out of range for a lattice of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Multipole order {order} is out of range (elements carry {max} orders)")]
    PolynomOrderOutOfRange { order: usize, max: usize },

    #[error("Invalid cavity state '{0}'. Expected 'on' or 'off'.")]
    InvalidCavityState(String),
}

impl QueryError {
    pub fn status(&self) -> Status {
        match self {
            QueryError::InvalidCavityState(_) => Status::PassMethodNotDefined,
            _ => Status::InconsistentDimensions,
        }
    }
}
