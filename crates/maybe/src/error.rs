/// Message carried by [`Error::InvalidState`] when reading an absent value.
pub const NO_VALUE_PRESENT: &str = "no value present";

/// Message carried by [`Error::InvalidState`] when a checked constructor is
/// handed an absent value.
pub const ABSENT_SOME: &str = "cannot wrap an absent value as present";

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `Maybe` was used against its contract: an absent value was wrapped
    /// as present, or the value of an absent `Maybe` was read.
    #[error("{0}")]
    InvalidState(&'static str),
}

impl Error {
    pub(crate) fn invalid_state(msg: &'static str) -> Self {
        #[cfg(feature = "log")]
        log::trace!("maybe: invalid state: {msg}");
        Error::InvalidState(msg)
    }

    /// The message the error was raised with.
    pub fn message(&self) -> &'static str {
        match self {
            Error::InvalidState(msg) => msg,
        }
    }
}
