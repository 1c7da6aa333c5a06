use std::collections::TryReserveError;
use std::io;

pub type FixtureResult<T = (), E = FixtureError> = Result<T, E>;

#[derive(Debug)]
pub enum FixtureError {
    /// The target path could not be created or written.
    FileAccess(io::Error),
    /// The cell buffer for the requested dimension could not
    /// be allocated.
    ResourceExhaustion(TryReserveError),
}

impl From<io::Error> for FixtureError {
    fn from(value: io::Error) -> Self {
        FixtureError::FileAccess(value)
    }
}

impl From<TryReserveError> for FixtureError {
    fn from(value: TryReserveError) -> Self {
        FixtureError::ResourceExhaustion(value)
    }
}
