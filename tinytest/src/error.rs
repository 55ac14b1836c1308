//! Error types for the framework's own plumbing.
//!
//! Test failures are not errors: they are recorded on the [`TestCase`] and
//! never propagate. These variants cover misuse of the registry and logger
//! setup.
//!
//! [`TestCase`]: crate::TestCase

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TinyError {
    #[error("test {suite}::{name} is already linked into a registry")]
    AlreadyLinked {
        suite: &'static str,
        name: &'static str,
    },
    #[error("a logger is already installed")]
    LoggerInit,
}

pub type TinyResult<T> = Result<T, TinyError>;
