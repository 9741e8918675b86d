//! Error taxonomy for the definitions layer

use thiserror::Error;

/// Errors raised while building or reading definition namespaces
#[derive(Error, Debug)]
pub enum DefsError {
    /// Malformed input to a builder; fatal to the initialization step
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Lookup of a short name with no binding; recoverable at the call site
    #[error("undefined member: {name}")]
    UndefinedMember { name: String },

    /// Mutation attempt on a published namespace; never recoverable
    #[error("namespace is frozen, cannot bind '{name}'")]
    ImmutableNamespace { name: String },
}

pub type Result<T> = std::result::Result<T, DefsError>;
