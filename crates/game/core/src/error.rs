//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `TransferError`, `StoreError`) are defined in their
//! respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each layer has its own error type with specific variants
//! - **Rich Context**: Errors carry the slot addresses involved
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Value Returns**: Nothing in game-core panics on bad input

use crate::state::SlotRef;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Conditions that may succeed once the player frees space
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted slot state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry after the player changes something.
    ///
    /// Examples: target container full, delete request went stale
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty origin, out-of-range destination, policy violation
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: duplicate instance found while restoring a snapshot
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - slot state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for debugging and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Slot the operation started from (if applicable).
    pub origin: Option<SlotRef>,

    /// Slot the operation targeted (if applicable).
    pub destination: Option<SlotRef>,

    /// Store revision at the time of error.
    ///
    /// Correlates a rejected operation with the snapshot that was current
    /// when it was attempted.
    pub revision: u64,
}

impl ErrorContext {
    /// Creates a new error context at the given store revision.
    #[must_use]
    pub const fn new(revision: u64) -> Self {
        Self {
            origin: None,
            destination: None,
            revision,
        }
    }

    /// Attaches an origin slot to this context (builder pattern).
    #[must_use]
    pub const fn with_origin(mut self, origin: SlotRef) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Attaches a destination slot to this context (builder pattern).
    #[must_use]
    pub const fn with_destination(mut self, destination: SlotRef) -> Self {
        self.destination = Some(destination);
        self
    }
}

/// Common trait for all game-core errors.
///
/// This trait provides a uniform interface for error classification and context
/// retrieval across all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
