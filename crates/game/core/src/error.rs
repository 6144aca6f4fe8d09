//! Common error infrastructure for tilequest-core.
//!
//! Domain-specific errors (e.g., `MoveError`, `MapError`) are defined in their
//! respective modules alongside the operations they validate. This module
//! provides the shared classification they all implement.
//!
//! Most failures in this crate are *not* errors: a blocked move or a missed
//! attack are ordinary outcomes. Error types exist for two cases only:
//! - **Recoverable** conditions reported inside an outcome (a move that was refused)
//! - **Fatal** construction problems where no sane default exists (a ragged grid)

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Expected during play; the caller carries on.
    ///
    /// Examples: destination blocked, unknown map handle
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: equipping an item that is not equipment
    Validation,

    /// Construction cannot proceed, nothing sensible to substitute.
    ///
    /// Examples: empty or non-rectangular tile grid
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all tilequest-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
