//! Common error infrastructure for skill-core.
//!
//! This module provides the shared severity classification and the trait every
//! domain error implements. Domain-specific errors (e.g. `ConditionError`,
//! `AssetError`, `SkillError`) live next to the code that raises them.
//!
//! # Design Principles
//!
//! - **Deterministic**: Every error is input-driven; nothing here is transient
//!   or retryable
//! - **Rich Context**: Errors carry the skill, hit label or raw value that
//!   produced them so an operator can locate the asset entry
//! - **Severity Classification**: Errors are categorized so that export
//!   pipelines can decide between aborting one skill and aborting the run

/// Severity level of an error.
///
/// - **Validation**: The caller asked for an impossible scenario (invalid
///   composite, bullet index past its lifetime)
/// - **Internal**: The asset data uses a pattern the vocabulary does not model
///   yet; the vocabulary needs an extension
/// - **Fatal**: A required oracle or record is missing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid request, should not retry without changes.
    ///
    /// Examples: two HP conditions in one composite, bullet hit 7 of a
    /// 6-hit bullet
    Validation,

    /// Unmodeled asset pattern.
    ///
    /// Examples: unmapped raw condition value, self damage without a mode
    Internal,

    /// Missing data, the skill cannot be transformed at all.
    ///
    /// Examples: skill id not found, oracle not wired into the environment
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all skill-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Return a stable `SCREAMING_SNAKE` code per variant from `error_code`
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
