use processor::{Config, Processor, Report};
use scheduler::Process;

use std::env;
use std::fs;
use std::num::NonZeroUsize;

mod memory;

fn write_logs(folder: &str, name: &str, logs: &str) {
    let (medium, low) = arguments();
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(
        format!("../outputs/{folder}/{name}___{medium}_{low}.log"),
        logs,
    )
    .unwrap();
}

fn read_logs(folder: &str, name: &str) -> String {
    let (medium, low) = arguments();
    fs::read_to_string(format!(
        "../outputs/{folder}/{name}___{medium}_{low}.log"
    ))
    .unwrap()
}

/// The trace followed by the summary lines.
fn format_report(report: &Report) -> String {
    let mut output = report.trace.to_string();
    for line in report.summary() {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn run(folder: &str, name: &str, report: &Report) {
    let output = format_report(report);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, &output);
    } else {
        let reference = read_logs(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn arguments() -> (usize, usize) {
    let medium = env::var("MEDIUM_QUANTUM")
        .unwrap_or("8".to_string())
        .parse::<usize>()
        .unwrap();
    let low = env::var("LOW_QUANTUM")
        .unwrap_or("16".to_string())
        .parse::<usize>()
        .unwrap();
    (medium, low)
}

fn processor() -> Processor {
    let (medium, low) = arguments();

    println!("Medium quantum {medium}\nLow quantum {low}");
    Processor::new(Config {
        medium_quantum: NonZeroUsize::new(medium).unwrap(),
        low_quantum: NonZeroUsize::new(low).unwrap(),
        ..Config::default()
    })
}

fn processes(text: &str) -> Vec<Process> {
    crate::input::parse(text).unwrap()
}

fn pids(processes: &[Process]) -> Vec<&str> {
    processes.iter().map(|process| process.pid.as_str()).collect()
}
