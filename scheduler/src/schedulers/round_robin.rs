use std::collections::{HashSet, VecDeque};
use std::num::NonZeroU32;

use log::{debug, info, trace};

use crate::{
    ErrorKind, Pid, Process, ProcessResult, Result, Scheduler, SchedulerError, Simulation, Slice,
};

/// A process waiting in the ready queue and the burst time it still needs.
#[derive(Copy, Clone, Debug)]
struct QueuedProcess {
    process: Process,
    remaining: u32,
}

impl QueuedProcess {
    fn new(process: Process) -> Self {
        QueuedProcess {
            process,
            remaining: process.burst_time,
        }
    }
}

/// The FIFO ready queue and the set of processes that were admitted to it.
struct ReadyQueue<'a> {
    processes: &'a [Process],
    queue: VecDeque<QueuedProcess>,
    arrived: HashSet<Pid>,
}

impl<'a> ReadyQueue<'a> {
    fn new(processes: &'a [Process]) -> Self {
        ReadyQueue {
            processes,
            queue: VecDeque::with_capacity(processes.len()),
            arrived: HashSet::with_capacity(processes.len()),
        }
    }

    /// Appends every process that has arrived by `clock` and was not
    /// admitted before. Simultaneous arrivals keep the input order.
    fn admit(&mut self, clock: u32) {
        for process in self.processes {
            if process.arrival_time > clock || self.arrived.contains(&process.pid) {
                continue;
            }
            debug!(
                "admit process {} (arrived at {}) at {}",
                process.pid, process.arrival_time, clock
            );
            self.queue.push_back(QueuedProcess::new(*process));
            self.arrived.insert(process.pid);
        }
    }

    /// The earliest arrival time among the processes not admitted yet.
    fn next_arrival(&self) -> Option<u32> {
        self.processes
            .iter()
            .filter(|process| !self.arrived.contains(&process.pid))
            .map(|process| process.arrival_time)
            .min()
    }

    fn pop(&mut self) -> Option<QueuedProcess> {
        self.queue.pop_front()
    }

    fn push(&mut self, process: QueuedProcess) {
        self.queue.push_back(process);
    }
}

/// The clock value at which the last process completes.
///
/// The CPU never idles while an admitted process has work left, so this
/// only depends on the arrivals and bursts.
fn finish_time(processes: &[Process]) -> u64 {
    let mut work = processes
        .iter()
        .map(|process| (process.arrival_time, process.burst_time))
        .collect::<Vec<_>>();
    work.sort_unstable();
    work.iter().fold(0, |clock: u64, &(arrival, burst)| {
        clock.max(u64::from(arrival)) + u64::from(burst)
    })
}

/// Checks the process list before anything is scheduled.
fn validate(processes: &[Process]) -> Result<()> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyProcessList);
    }

    let mut pids = HashSet::with_capacity(processes.len());
    for process in processes {
        if process.burst_time == 0 {
            return Err(SchedulerError::ZeroBurstTime(process.pid));
        }
        if !pids.insert(process.pid) {
            return Err(SchedulerError::DuplicatePid(process.pid));
        }
    }

    if finish_time(processes) > u64::from(u32::MAX) {
        return Err(SchedulerError::ClockOverflow);
    }

    Ok(())
}

/// Appends a slice, extending the last one when the same process
/// keeps the CPU.
fn record(timeline: &mut Vec<Slice>, slice: Slice) {
    match timeline.last_mut() {
        Some(last) if last.pid == slice.pid && last.end == slice.start => last.end = slice.end,
        _ => timeline.push(slice),
    }
}

/// Preemptive round robin over a fixed set of processes.
///
/// Processes are dispatched from a FIFO ready queue for at most
/// `time_slice` time units. Processes that arrive while a slice runs
/// are queued before the preempted process is put back.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RoundRobin {
    time_slice: NonZeroU32,
}

impl RoundRobin {
    pub fn new(time_slice: NonZeroU32) -> Self {
        RoundRobin { time_slice }
    }

    pub fn time_slice(&self) -> NonZeroU32 {
        self.time_slice
    }

    /// Runs the simulation, recording the slices only when `timeline` is given.
    fn schedule(
        &self,
        processes: &[Process],
        mut timeline: Option<&mut Vec<Slice>>,
    ) -> Result<Vec<ProcessResult>> {
        validate(processes)?;

        let time_slice = self.time_slice.get();
        let mut ready = ReadyQueue::new(processes);
        let mut results = Vec::with_capacity(processes.len());

        let mut clock = processes
            .iter()
            .map(|process| process.arrival_time)
            .min()
            .unwrap_or_default();
        ready.admit(clock);

        loop {
            let Some(mut current) = ready.pop() else {
                match ready.next_arrival() {
                    Some(arrival) => {
                        trace!("cpu idle from {} to {}", clock, arrival);
                        clock = arrival;
                        ready.admit(clock);
                        continue;
                    }
                    None => break,
                }
            };

            let run_for = time_slice.min(current.remaining);
            let start = clock;
            current.remaining -= run_for;
            clock += run_for;

            let pid = current.process.pid;
            let slice = Slice {
                pid,
                start,
                end: clock,
            };
            debug!("{}", slice);
            if let Some(timeline) = timeline.as_deref_mut() {
                record(timeline, slice);
            }

            // new arrivals go ahead of the preempted process
            ready.admit(clock);

            if current.remaining > 0 {
                trace!("requeue process {} with {} remaining", pid, current.remaining);
                ready.push(current);
                continue;
            }

            results.push(ProcessResult::new(current.process, clock));
        }

        assert_eq!(
            results.len(),
            processes.len(),
            "{:?}: round robin stopped before every process completed",
            ErrorKind::InternalInvariant
        );

        info!(
            "scheduled {} processes with time slice {}, last completion at {}",
            processes.len(),
            time_slice,
            clock
        );

        Ok(results)
    }
}

impl Scheduler for RoundRobin {
    fn run(&self, processes: &[Process]) -> Result<Simulation> {
        let mut timeline = Vec::new();
        let results = self.schedule(processes, Some(&mut timeline))?;
        Ok(Simulation { results, timeline })
    }

    fn execute(&self, processes: &[Process]) -> Result<Vec<ProcessResult>> {
        self.schedule(processes, None)
    }
}
