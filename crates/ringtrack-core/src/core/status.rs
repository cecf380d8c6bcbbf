use std::fmt;

/// The closed set of outcomes shared by every ringtrack subsystem.
///
/// Library errors never surface a bare `Status`; each error type exposes a
/// `status()` accessor so callers that need the coarse taxonomy (e.g. to pick a
/// process exit code or to mirror the outcome into another tool) can recover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Status {
    Success = 0,
    PassMethodNotDefined = 1,
    PassMethodNotImplemented = 2,
    ParticleLost = 3,
    InconsistentDimensions = 4,
    UninitializedMemory = 5,
    FindOrbitNotConverged = 6,
    FindOrbitOneTurnMatrixProblem = 7,
    FileNotFound = 8,
    FileNotOpened = 9,
    KicktableNotDefined = 10,
    KicktableOutOfRange = 11,
    FlatFileError = 12,
    NewtonNotConverged = 13,
}

static STATUS_NAMES: [&str; 14] = [
    "success",
    "passmethod_not_defined",
    "passmethod_not_implemented",
    "particle_lost",
    "inconsistent_dimensions",
    "uninitialized_memory",
    "findorbit_not_converged",
    "findorbit_one_turn_matrix_problem",
    "file_not_found",
    "file_not_opened",
    "kicktable_not_defined",
    "kicktable_out_of_range",
    "flat_file_error",
    "newton_not_converged",
];

impl Status {
    /// Numeric outcome code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical snake_case name of the outcome.
    pub fn as_str(self) -> &'static str {
        STATUS_NAMES[self as usize]
    }

    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
