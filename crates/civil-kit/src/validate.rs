//! Boundary validation for optional inputs.
//!
//! Every public operation that accepts optional inputs decodes them here
//! before any computation runs. A missing input short-circuits with
//! [`CivilError::MissingArgument`] naming both the argument and the
//! operation, so no partial work (including clock reads) ever happens.

use crate::error::{CivilError, Result};

/// Decode an optional input into its value, or fail naming the argument.
pub(crate) fn require<T>(
    value: Option<T>,
    argument: &'static str,
    operation: &'static str,
) -> Result<T> {
    value.ok_or(CivilError::MissingArgument {
        argument,
        operation,
    })
}

/// Like [`require`], but additionally rejects empty strings.
///
/// Absent and empty text are treated the same at the boundary.
pub(crate) fn require_text<'a>(
    value: Option<&'a str>,
    argument: &'static str,
    operation: &'static str,
) -> Result<&'a str> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(CivilError::MissingArgument {
            argument,
            operation,
        }),
    }
}
