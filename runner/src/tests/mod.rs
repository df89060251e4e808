use scheduler::{round_robin, Process, Scheduler, Simulation};

use std::env;
use std::fs;

use report::format_simulation;


static SCHEDULER: &str = "round-robin";

fn log_path(folder: &str, name: &str, time_slice: u32) -> String {
    format!(
        "{}/../outputs/{SCHEDULER}/{folder}/{name}___{time_slice}.log",
        env!("CARGO_MANIFEST_DIR")
    )
}

fn write_logs(folder: &str, name: &str, time_slice: u32, logs: &str) {
    fs::create_dir_all(format!(
        "{}/../outputs/{SCHEDULER}/{folder}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    fs::write(log_path(folder, name, time_slice), logs).unwrap();
}

fn read_logs(folder: &str, name: &str, time_slice: u32) -> String {
    fs::read_to_string(log_path(folder, name, time_slice)).unwrap()
}

fn simulate(processes: &[Process], time_slice: u32) -> Simulation {
    round_robin(time_slice).unwrap().run(processes).unwrap()
}

/// Compares the report of a run with the stored one, or stores it
/// when `WRITE_OUTPUT` is set.
fn run(folder: &str, name: &str, processes: &[Process], time_slice: u32) -> Simulation {
    let simulation = simulate(processes, time_slice);
    let output = format_simulation(&simulation);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, time_slice, &output);
    } else {
        let reference = read_logs(folder, name, time_slice);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }

    simulation
}
