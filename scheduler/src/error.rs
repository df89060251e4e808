use thiserror::Error;

use crate::Pid;

/// Scheduler operation result
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// The category of a scheduler failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was rejected before the simulation started.
    InvalidArgument,

    /// The scheduler itself is broken. Never returned, these failures
    /// panic with this kind at the start of the message.
    InternalInvariant,
}

/// Errors returned when a run is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("invalid argument: the process list is empty")]
    EmptyProcessList,

    #[error("invalid argument: the time slice must be at least 1")]
    ZeroTimeSlice,

    #[error("invalid argument: process {0} has a burst time of 0")]
    ZeroBurstTime(Pid),

    #[error("invalid argument: pid {0} is used by more than one process")]
    DuplicatePid(Pid),

    #[error("invalid argument: the simulation clock would overflow")]
    ClockOverflow,
}

impl SchedulerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchedulerError::EmptyProcessList
            | SchedulerError::ZeroTimeSlice
            | SchedulerError::ZeroBurstTime(_)
            | SchedulerError::DuplicatePid(_)
            | SchedulerError::ClockOverflow => ErrorKind::InvalidArgument,
        }
    }
}
