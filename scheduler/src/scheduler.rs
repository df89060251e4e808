use std::fmt::{self, Display};

use crate::{ErrorKind, Result};

/// The PID of a process
///
/// PIDs are chosen by the caller and start from 0.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(u32);

impl Pid {
    pub fn new(pid: u32) -> Pid {
        Pid(pid)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl PartialEq<u32> for Pid {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A process submitted to the scheduler.
///
/// Processes are never modified by the scheduler, the remaining
/// burst time is tracked separately while the simulation runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Process {
    /// The PID of the process, unique within one run.
    pub pid: Pid,

    /// The time at which the process becomes ready.
    pub arrival_time: u32,

    /// The total CPU time the process needs to finish.
    pub burst_time: u32,
}

impl Process {
    pub fn new(pid: u32, arrival_time: u32, burst_time: u32) -> Process {
        Process {
            pid: Pid::new(pid),
            arrival_time,
            burst_time,
        }
    }
}

/// The timings of a process after it has finished.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// The process as it was submitted.
    pub process: Process,

    /// The time at which the last unit of burst time was consumed.
    pub completion_time: u32,

    /// `completion_time - arrival_time`
    pub turnaround_time: u32,

    /// `turnaround_time - burst_time`
    pub waiting_time: u32,
}

impl ProcessResult {
    /// Derives the turnaround and waiting times from the completion time.
    ///
    /// # Panics
    ///
    /// Panics if the process would have finished before receiving its
    /// whole burst time.
    pub fn new(process: Process, completion_time: u32) -> ProcessResult {
        assert!(
            u64::from(completion_time)
                >= u64::from(process.arrival_time) + u64::from(process.burst_time),
            "{:?}: process {} completed at {} before receiving its burst time",
            ErrorKind::InternalInvariant,
            process.pid,
            completion_time
        );
        let turnaround_time = completion_time - process.arrival_time;
        ProcessResult {
            process,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }

    pub fn pid(&self) -> Pid {
        self.process.pid
    }

    pub fn arrival_time(&self) -> u32 {
        self.process.arrival_time
    }

    pub fn burst_time(&self) -> u32 {
        self.process.burst_time
    }
}

/// A contiguous amount of CPU time given to a process.
///
/// Back to back quanta of the same process form a single slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    /// The process that ran.
    pub pid: Pid,

    /// The clock value when the process was dispatched.
    pub start: u32,

    /// The clock value when another process took over or the process finished.
    pub end: u32,
}

impl Slice {
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Run {} from {} to {}", self.pid, self.start, self.end)
    }
}

/// The outcome of a scheduler run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Simulation {
    /// One result per submitted process, in completion order.
    pub results: Vec<ProcessResult>,

    /// Every slice that was dispatched, in execution order.
    pub timeline: Vec<Slice>,
}

impl Simulation {
    pub fn average_turnaround_time(&self) -> f64 {
        self.average(|result| result.turnaround_time)
    }

    pub fn average_waiting_time(&self) -> f64 {
        self.average(|result| result.waiting_time)
    }

    /// Time between the first arrival and the last completion.
    pub fn makespan(&self) -> u32 {
        let start = self.results.iter().map(ProcessResult::arrival_time).min();
        let end = self.results.iter().map(|result| result.completion_time).max();
        match (start, end) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }

    /// Time within the makespan during which no process was running.
    pub fn idle_time(&self) -> u32 {
        let busy: u32 = self.timeline.iter().map(Slice::len).sum();
        self.makespan().saturating_sub(busy)
    }

    fn average<F>(&self, field: F) -> f64
    where
        F: Fn(&ProcessResult) -> u32,
    {
        if self.results.is_empty() {
            return 0.0;
        }
        let total: u64 = self.results.iter().map(|result| u64::from(field(result))).sum();
        total as f64 / self.results.len() as f64
    }
}

/// The trait that any scheduler has to implement.
///
/// Each call is independent, schedulers keep no state between runs.
pub trait Scheduler {
    /// Simulates the execution of `processes` and returns the
    /// per process results together with the execution timeline.
    fn run(&self, processes: &[Process]) -> Result<Simulation>;

    /// Returns one result per process, in no particular order.
    fn execute(&self, processes: &[Process]) -> Result<Vec<ProcessResult>> {
        self.run(processes).map(|simulation| simulation.results)
    }
}
