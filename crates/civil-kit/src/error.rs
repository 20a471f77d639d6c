//! Error types for civil-kit operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CivilError {
    #[error("Missing argument '{argument}' ({operation})")]
    MissingArgument {
        argument: &'static str,
        operation: &'static str,
    },

    #[error("Unparsable date string: {0}")]
    Parse(#[from] chrono::ParseError),

    #[error("Invalid calendar fields: {0}")]
    InvalidFields(String),

    #[error("Out of calendar range ({operation})")]
    OutOfRange { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, CivilError>;
