use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// A number of simulated CPU time units.
pub type Ticks = usize;

/// The identifier of a process
///
/// Identifiers are free text taken from the input file. Uniqueness
/// is not enforced.
#[derive(PartialEq, Eq, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(String);

impl Pid {
    pub fn new(pid: impl Into<String>) -> Pid {
        Pid(pid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Pid {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A logical CPU of the simulated machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cpu {
    /// Services the FCFS tier.
    Cpu1,
    /// Services the SJF and both round robin tiers.
    Cpu2,
}

impl Display for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cpu::Cpu1 => write!(f, "CPU-1"),
            Cpu::Cpu2 => write!(f, "CPU-2"),
        }
    }
}

/// One of the four priority ready queues.
///
/// The discriminant is the priority value read from the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Priority 0, first come first served on CPU-1.
    Fcfs = 0,
    /// Priority 1, shortest job first on CPU-2.
    Sjf = 1,
    /// Priority 2, round robin with the medium quantum on CPU-2.
    RoundRobinMedium = 2,
    /// Priority 3, round robin with the low quantum on CPU-2.
    RoundRobinLow = 3,
}

impl Tier {
    /// All tiers, in trace emission order.
    pub const ALL: [Tier; 4] = [
        Tier::Fcfs,
        Tier::Sjf,
        Tier::RoundRobinMedium,
        Tier::RoundRobinLow,
    ];

    pub fn from_priority(priority: i32) -> Option<Tier> {
        match priority {
            0 => Some(Tier::Fcfs),
            1 => Some(Tier::Sjf),
            2 => Some(Tier::RoundRobinMedium),
            3 => Some(Tier::RoundRobinLow),
            _ => None,
        }
    }

    pub fn priority(self) -> i32 {
        self as i32
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn cpu(self) -> Cpu {
        match self {
            Tier::Fcfs => Cpu::Cpu1,
            _ => Cpu::Cpu2,
        }
    }

    /// The queue name used when a process is routed to CPU-2.
    ///
    /// CPU-2 queues are numbered from 1, so the SJF tier is `que1`.
    pub fn routing_queue(self) -> String {
        format!("que{}", self.index())
    }

    /// The queue label used in the summary, e.g. `CPU-2 que3(priority-2) (RR-q8)`.
    ///
    /// Summary queues are numbered across both CPUs, so the SJF tier is `que2`.
    pub fn label(self, policy: &str) -> String {
        format!(
            "{} que{}(priority-{}) ({})",
            self.cpu(),
            self.index() + 1,
            self.priority(),
            policy
        )
    }
}

/// A process of the simulated batch.
///
/// All fields except `remaining_time` are read from the input and
/// never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub priority: i32,
    pub burst_time: Ticks,
    pub ram: usize,
    pub cpu: i32,
    pub remaining_time: Ticks,
}

impl Process {
    pub fn new(
        pid: impl Into<String>,
        arrival_time: Ticks,
        priority: i32,
        burst_time: Ticks,
        ram: usize,
        cpu: i32,
    ) -> Self {
        Process {
            pid: Pid::new(pid),
            arrival_time,
            priority,
            burst_time,
            ram,
            cpu,
            remaining_time: burst_time,
        }
    }

    /// The ready queue this process belongs to, if its priority is valid.
    pub fn tier(&self) -> Option<Tier> {
        Tier::from_priority(self.priority)
    }

    pub fn is_terminated(&self) -> bool {
        self.remaining_time == 0
    }
}

/// The reason a process record could not be parsed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseProcessError {
    #[error("expected 6 comma separated fields, found {0}")]
    FieldCount(usize),

    #[error("process identifier is empty")]
    EmptyPid,

    #[error("invalid {field} `{value}`: {reason}")]
    Field {
        field: &'static str,
        value: String,
        reason: std::num::ParseIntError,
    },
}

fn parse_field<T>(field: &'static str, value: &str) -> Result<T, ParseProcessError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.trim().parse().map_err(|reason| ParseProcessError::Field {
        field,
        value: value.to_string(),
        reason,
    })
}

/// Parses a record of the form
/// `identifier,arrival_time,priority,execution_time,memory_request,cpu_affinity`.
impl FromStr for Process {
    type Err = ParseProcessError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').collect();
        // The identifier is kept verbatim, numbers may be padded.
        let [pid, arrival_time, priority, burst_time, ram, cpu] = fields[..] else {
            return Err(ParseProcessError::FieldCount(fields.len()));
        };

        if pid.is_empty() {
            return Err(ParseProcessError::EmptyPid);
        }

        Ok(Process::new(
            pid,
            parse_field("arrival time", arrival_time)?,
            parse_field("priority", priority)?,
            parse_field("execution time", burst_time)?,
            parse_field("memory request", ram)?,
            parse_field("cpu affinity", cpu)?,
        ))
    }
}

/// A scheduling event written to the trace.
///
/// Each variant renders to exactly one trace line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The process was placed in the ready queue of `tier`.
    Queued { pid: Pid, tier: Tier },

    /// The process was given the CPU.
    Assigned { pid: Pid, cpu: Cpu },

    /// A CPU-1 process ran to completion.
    Completed { pid: Pid },

    /// A shortest job first process ran to completion.
    OperationCompleted { pid: Pid },

    /// The quantum expired before the process finished and it was queued again.
    Requeued { pid: Pid },

    /// A round robin process was given the CPU for its last slice and finished.
    CompletedOn { pid: Pid, cpu: Cpu },
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Queued { pid, tier } => match tier.cpu() {
                Cpu::Cpu1 => write!(f, "Process {pid} is queued to be assigned to CPU-1."),
                cpu => write!(
                    f,
                    "Process {pid} is placed in the {} queue to be assigned to {cpu}.",
                    tier.routing_queue()
                ),
            },
            Event::Assigned { pid, cpu } => write!(f, "Process {pid} is assigned to {cpu}."),
            Event::Completed { pid } => write!(f, "Process {pid} is completed and terminated."),
            Event::OperationCompleted { pid } => {
                write!(f, "The operation of process {pid} is completed and terminated.")
            }
            Event::Requeued { pid } => write!(
                f,
                "Process {pid} run until the defined quantum time and is queued again because the process is not completed."
            ),
            Event::CompletedOn { pid, cpu } => write!(
                f,
                "Process {pid} is assigned to {cpu}, its operation is completed and terminated."
            ),
        }
    }
}

/// The trait that every ready queue policy implements.
pub trait Scheduler {
    /// The policy name shown in queue labels, e.g. `FCFS` or `RR-q8`.
    fn policy(&self) -> String;

    /// Runs every process of `queue` to completion.
    ///
    /// On return `queue` is in service order and the returned events
    /// describe each process's lifecycle in that order.
    fn schedule(&mut self, queue: &mut [Process]) -> Vec<Event>;

    /// Simulated ticks consumed so far. Policies that complete processes
    /// instantly never advance their clock.
    fn elapsed(&self) -> Ticks {
        0
    }

    /// Number of times a process was given the CPU for a time slice.
    fn slices(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record() {
        let process: Process = "P1, 0, 2, 20, 100, 2".parse().unwrap();
        assert_eq!(process.pid, "P1");
        assert_eq!(process.priority, 2);
        assert_eq!(process.burst_time, 20);
        assert_eq!(process.remaining_time, 20);
        assert_eq!(process.tier(), Some(Tier::RoundRobinMedium));
    }

    #[test]
    fn rejects_malformed_records() {
        assert_eq!(
            "P1,0,1,5".parse::<Process>(),
            Err(ParseProcessError::FieldCount(4))
        );
        assert_eq!(
            ",0,1,5,100,1".parse::<Process>(),
            Err(ParseProcessError::EmptyPid)
        );
        assert!(matches!(
            "P1,0,1,five,100,1".parse::<Process>(),
            Err(ParseProcessError::Field {
                field: "execution time",
                ..
            })
        ));
        assert!(matches!(
            "P1,-3,1,5,100,1".parse::<Process>(),
            Err(ParseProcessError::Field {
                field: "arrival time",
                ..
            })
        ));
    }

    #[test]
    fn keeps_identifier_verbatim() {
        let process: Process = " P1 ,0,0,5,100,1".parse().unwrap();
        assert_eq!(process.pid, " P1 ");
        assert_eq!(process.burst_time, 5);
    }

    #[test]
    fn negative_cpu_affinity() {
        let process: Process = "P1,0,0,5,100,-1".parse().unwrap();
        assert_eq!(process.cpu, -1);
        assert_eq!(process.tier(), Some(Tier::Fcfs));
    }

    #[test]
    fn out_of_range_priority_parses_without_tier() {
        let process: Process = "P9,0,7,5,100,1".parse().unwrap();
        assert_eq!(process.tier(), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Tier::Fcfs.label("FCFS"), "CPU-1 que1(priority-0) (FCFS)");
        assert_eq!(Tier::Sjf.label("SJF"), "CPU-2 que2(priority-1) (SJF)");
        assert_eq!(
            Tier::RoundRobinLow.label("RR-q16"),
            "CPU-2 que4(priority-3) (RR-q16)"
        );
        assert_eq!(Tier::RoundRobinMedium.routing_queue(), "que2");
    }
}
