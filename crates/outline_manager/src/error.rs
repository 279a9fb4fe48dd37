use std::error::Error;
use std::fmt::{self, Display};

/// Errors that can occur while building agents from external input.
///
/// The mutation operations themselves are total: unknown ids no-op and
/// nothing else can fail, so only the import path carries an error.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Pasted instruction text was empty after trimming whitespace.
    EmptyInstructions,
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::EmptyInstructions => {
                write!(f, "instruction text cannot be empty")
            }
        }
    }
}

impl Error for BuilderError {}
