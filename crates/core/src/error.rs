//! Error types for Responder.

use alloc::string::String;
use core::fmt;

/// Result type alias for Responder operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The registration argument an [`Error::InvalidArgument`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argument {
    /// The query-to-value mapping.
    Values,
    /// The change callback.
    Callback,
    /// The optional media-query-list provider override.
    ProviderOverride,
}

impl Argument {
    /// Returns the argument name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Argument::Values => "values",
            Argument::Callback => "callback",
            Argument::ProviderOverride => "provider override",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error types for registration.
///
/// Errors are raised before any listener is attached, so a failed
/// registration never leaves a partially wired instance behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A registration argument was malformed.
    InvalidArgument {
        argument: Argument,
    },
    /// Neither a native provider nor an override is available.
    ProviderUnavailable,
    /// The provider could not produce a list for a query.
    QueryRejected {
        query: String,
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { argument } => {
                write!(f, "invalid argument: {}", argument)
            }
            Error::ProviderUnavailable => {
                write!(f, "provider unavailable: no matchMedia and no override")
            }
            Error::QueryRejected { query, reason } => {
                write!(f, "query rejected: {:?}: {}", query, reason)
            }
        }
    }
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(argument: Argument) -> Self {
        Error::InvalidArgument { argument }
    }

    /// Creates a query rejected error.
    pub fn query_rejected(query: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::QueryRejected {
            query: query.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument(Argument::Values);
        assert_eq!(err.to_string(), "invalid argument: values");

        let err = Error::invalid_argument(Argument::Callback);
        assert_eq!(err.to_string(), "invalid argument: callback");

        let err = Error::invalid_argument(Argument::ProviderOverride);
        assert_eq!(err.to_string(), "invalid argument: provider override");
    }

    #[test]
    fn test_query_rejected() {
        let err = Error::query_rejected("(min-width: 10px)", "not an object");
        match &err {
            Error::QueryRejected { query, .. } => assert_eq!(query, "(min-width: 10px)"),
            _ => panic!("Wrong error type"),
        }
        assert!(err.to_string().contains("not an object"));
    }
}
