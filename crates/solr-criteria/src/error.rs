use thiserror::Error as ThisError;

/// Result alias used by every fallible builder call.
pub type Result<T, E = CriteriaError> = std::result::Result<T, E>;

///
/// CriteriaError
///
/// Precondition failures raised by the fluent builder.
/// Every check runs before the tree is touched, so a rejected call never
/// leaves a half-applied predicate behind.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum CriteriaError {
    // --- construction ---
    #[error("field name for criteria must not be empty")]
    EmptyField,

    // --- numeric bounds ---
    #[error("boost must be a non-negative number, got {0}")]
    InvalidBoost(f64),

    #[error("distance must be a non-negative number, got {0}")]
    InvalidDistance(f64),

    #[error("geo coordinate must be a finite number, got {0}")]
    NonFiniteCoordinate(f64),

    #[error("levenshtein distance has to be within its bounds (0.0 - 1.0), got {0}")]
    FuzzyDistanceOutOfBounds(f64),

    #[error("slop distance has to be greater than 0, got {0}")]
    InvalidSlop(i32),

    // --- textual shape ---
    #[error("sloppy phrase '{0}' must consist of multiple terms separated with spaces")]
    SingleTermPhrase(String),

    #[error(
        "cannot build a wildcard term from '{0}' containing white space; use expression or multiple clauses instead"
    )]
    WhitespaceInWildcard(String),
}

impl CriteriaError {
    /// Stable short label, used as the `kind` field of diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::InvalidBoost(_) => "invalid_boost",
            Self::InvalidDistance(_) => "invalid_distance",
            Self::NonFiniteCoordinate(_) => "non_finite_coordinate",
            Self::FuzzyDistanceOutOfBounds(_) => "fuzzy_distance_out_of_bounds",
            Self::InvalidSlop(_) => "invalid_slop",
            Self::SingleTermPhrase(_) => "single_term_phrase",
            Self::WhitespaceInWildcard(_) => "whitespace_in_wildcard",
        }
    }
}

///
/// TESTS
///
