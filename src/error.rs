use std::fmt;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the control loop
///
/// None of these are recoverable. A caller that receives one should halt rather than keep
/// ticking, since continuing would push corrupt values into the approximator's weights.
#[derive(Debug)]
pub enum Error {
    /// A configuration value is outside its valid range
    Configuration { name: String, reason: String },

    /// A runtime invariant of the control loop was violated by a caller or collaborator
    ContractViolation(String),

    /// The function approximator failed to predict or update
    Approximator(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn contract(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }

    /// Wrap any error produced inside an [`Approximator`](crate::approx::Approximator) implementation
    pub fn approximator(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Approximator(err.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { name, reason } => {
                write!(f, "Invalid configuration for `{}`: {}", name, reason)
            }
            Error::ContractViolation(msg) => write!(f, "Contract violation: {}", msg),
            Error::Approximator(err) => write!(f, "Approximator failure: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Approximator(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::config("config", err.to_string())
    }
}
