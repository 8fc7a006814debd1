//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g. [`crate::engine::ActionError`]) live next to the
//! operations they guard and implement [`GameError`] so callers can decide how
//! loudly to report them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request may succeed later (e.g. waiting for the boss turn)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that should be investigated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request can succeed once the battle reaches another phase.
    ///
    /// Examples: acting during the boss turn, attack still on cooldown
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: attack slot out of range, unknown item id
    Validation,

    /// Unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all battle-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the `Display`/`Error` impl and classify
/// severity by recoverability, not impact.
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
