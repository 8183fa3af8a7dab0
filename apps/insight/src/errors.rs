use thiserror::Error;

/// Interpretation-engine error type.
///
/// The consuming surface is user-facing, so nothing here is allowed to
/// abort rendering: callers either route through a fallback
/// ([`crate::engine::tips::tip_or_default`]) or degrade to a neutral value
/// ([`crate::engine::scale::percentage`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Division guard for [`crate::engine::scale::normalize`]. The fixed
    /// maxima table never contains a zero, so this only fires if the table
    /// is ever edited badly.
    #[error("score scale for category '{0}' is zero")]
    ZeroScale(String),

    /// The category has no curated tip text. Policy is to degrade to a
    /// generic tip rather than surface this to the rendering layer.
    #[error("unknown score category '{0}'")]
    UnknownCategory(String),
}
