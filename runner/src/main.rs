use anyhow::Context;
use log::info;
use scheduler::{round_robin, Process, Scheduler};

use report::format_simulation;

const TIME_SLICE: u32 = 3;

fn processes() -> Vec<Process> {
    vec![
        Process::new(0, 70, 3),
        Process::new(1, 9, 2),
        Process::new(2, 3, 39),
        Process::new(3, 5, 29),
        Process::new(4, 30, 90),
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let processes = processes();
    info!(
        "simulating {} processes with time slice {}",
        processes.len(),
        TIME_SLICE
    );

    let simulation = round_robin(TIME_SLICE)?
        .run(&processes)
        .context("round robin rejected the process list")?;

    println!("{}", format_simulation(&simulation));
    Ok(())
}

#[cfg(test)]
mod tests;
