use std::{error, fmt};

/// An error that can occur while assembling or finalizing an expression.
///
/// Every variant is a programmer error in the sequence of builder calls, not
/// a runtime data error; there is no partial success and nothing is retried.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The host engine rejected the assembled pattern.
    Compile {
        /// The full assembled pattern that failed to compile.
        pattern: String,
        /// The host engine's rejection.
        error: regex::Error,
    },
    /// A scoped-mode operation name was recognized neither by the builder
    /// vocabulary nor by the [`Helpers`](crate::scope::Helpers) collaborator.
    MissingOperation(String),
    /// A modifier token was not recognized.
    UnknownModifier(String),
}

impl Error {
    /// The offending assembled pattern, for [`Error::Compile`].
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Error::Compile { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compile { pattern, error } => {
                write!(f, "assembled pattern `{pattern}` failed to compile: {error}")
            }
            Error::MissingOperation(name) => {
                write!(f, "operation `{name}` is neither a builder operation nor provided by the helpers")
            }
            Error::UnknownModifier(token) => write!(f, "unknown modifier token `{token}`"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Compile { error, .. } => Some(error),
            _ => None,
        }
    }
}
