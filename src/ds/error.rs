//! Error kinds raised while building triggers and resolving members.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A trigger or isolator was built without a closure.
    #[error("closure should be provided")]
    MissingClosure,

    /// The direction is not one of OIK, OKI, IOK, IKO, KOI, KIO.
    #[error("incompatible context direction `{0}`; use one of: OIK, OKI, IOK, IKO, KOI, KIO")]
    InvalidDirection(String),

    /// No context in the directed list is able to answer the name.
    #[error("no one is able to respond to `{name}`")]
    UnresolvedMember { name: String },

    /// A context was asked for a member it does not have.
    #[error("undefined method `{name}` for {receiver}")]
    NoMethod { name: String, receiver: String },

    #[error("wrong arguments: {0}")]
    ArgumentError(String),

    /// Failure raised by a closure or a member body.
    #[error("{0}")]
    Raised(String),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn unresolved(name: &str) -> Self {
        Error::UnresolvedMember {
            name: name.to_string(),
        }
    }

    pub fn no_method(name: &str, receiver: impl Into<String>) -> Self {
        Error::NoMethod {
            name: name.to_string(),
            receiver: receiver.into(),
        }
    }

    /// True for every "no such member" failure, resolution failures included.
    pub fn is_no_method(&self) -> bool {
        matches!(self, Error::NoMethod { .. } | Error::UnresolvedMember { .. })
    }

    /// True only when trigger resolution found no context for the name.
    pub fn is_unresolved_member(&self) -> bool {
        matches!(self, Error::UnresolvedMember { .. })
    }
}
