//! A CPU scheduling simulation library.
//!
//! This library provides the process model, the [`Scheduler`] trait
//! and a round robin policy that computes completion, turnaround and
//! waiting times for a fixed set of processes.
//!
//! ```rust
//! use scheduler::{execute, Process};
//!
//! let results = execute(&[Process::new(0, 0, 5)], 3).unwrap();
//! assert_eq!(results[0].completion_time, 5);
//! ```

use std::num::NonZeroU32;

mod error;
mod scheduler;
mod schedulers;

pub use crate::error::{ErrorKind, Result, SchedulerError};
pub use crate::scheduler::{Pid, Process, ProcessResult, Scheduler, Simulation, Slice};
pub use crate::schedulers::RoundRobin;

/// Returns a round robin scheduler.
///
/// * `time_slice` - the time quanta that a process can run before it is preempted,
///                  `0` is rejected with [`SchedulerError::ZeroTimeSlice`].
pub fn round_robin(time_slice: u32) -> Result<RoundRobin> {
    NonZeroU32::new(time_slice)
        .map(RoundRobin::new)
        .ok_or(SchedulerError::ZeroTimeSlice)
}

/// Runs `processes` under round robin and returns one result per process.
///
/// The results are in completion order, sort them if another order is needed.
pub fn execute(processes: &[Process], time_slice: u32) -> Result<Vec<ProcessResult>> {
    round_robin(time_slice)?.execute(processes)
}
