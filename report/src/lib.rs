//! Text reports for scheduler runs
//!
//! Renders the results produced by the [`scheduler`] crate as
//! fixed width tables and tab separated timelines.

use std::fmt::{self, Display};

use scheduler::{ProcessResult, Simulation, Slice};

/// The width of every cell in the result table.
pub const CELL_WIDTH: usize = 17;

const HEADERS: [&str; 6] = [
    "Process ID",
    "Arrival Time",
    "Burst Time",
    "Completion Time",
    "Turnaround Time",
    "Waiting Time",
];

/// The per process results, one row per process sorted by arrival time.
pub struct ResultTable<'a>(pub &'a [ProcessResult]);

impl Display for ResultTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for header in HEADERS {
            write!(f, "{:<width$}", header, width = CELL_WIDTH)?;
        }
        writeln!(f)?;

        let mut rows = self.0.iter().collect::<Vec<&ProcessResult>>();
        rows.sort_by_key(|result| (result.arrival_time(), result.pid()));
        for result in rows {
            for cell in [
                result.pid().get(),
                result.arrival_time(),
                result.burst_time(),
                result.completion_time,
                result.turnaround_time,
                result.waiting_time,
            ] {
                write!(f, "{:<width$}", cell, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The slices in the order they were dispatched.
pub struct Timeline<'a>(pub &'a [Slice]);

impl Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "START\tEND\tPID")?;
        for slice in self.0 {
            writeln!(f, "{}\t{}\t{}", slice.start, slice.end, slice.pid)?;
        }
        Ok(())
    }
}

/// Averages over all the processes of a run.
pub struct Summary<'a>(pub &'a Simulation);

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Average turnaround time: {:.2}",
            self.0.average_turnaround_time()
        )?;
        writeln!(f, "Average waiting time: {:.2}", self.0.average_waiting_time())
    }
}

/// Formats the result table
///
/// ```rust
/// use report::format_results;
/// use scheduler::execute;
/// use scheduler::Process;
///
/// let results = execute(&[Process::new(0, 0, 5)], 3).unwrap();
///
/// println!("{}", format_results(&results));
/// ```
pub fn format_results(results: &[ProcessResult]) -> String {
    ResultTable(results).to_string()
}

pub fn format_timeline(timeline: &[Slice]) -> String {
    Timeline(timeline).to_string()
}

pub fn format_summary(simulation: &Simulation) -> String {
    Summary(simulation).to_string()
}

/// Formats a whole run: the timeline, the result table and the averages,
/// separated by blank lines.
pub fn format_simulation(simulation: &Simulation) -> String {
    format!(
        "{}\n{}\n{}",
        Timeline(&simulation.timeline),
        ResultTable(&simulation.results),
        Summary(simulation)
    )
}
