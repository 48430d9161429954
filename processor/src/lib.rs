//! A multi-level processor simulation library
//!
//! This routes a batch of processes into the ready queues of two
//! simulated CPUs and runs every queue with a policy from the
//! [`scheduler`] crate.

use std::num::NonZeroUsize;

use scheduler::{Cpu, Process, Scheduler, Tier};
use tracing::{info, warn};

mod router;
mod summary;
mod trace;

pub use router::{route, Routing};
pub use summary::{format_summary, QueueReport};
pub use trace::Trace;

/// The declared RAM of the simulated machine.
///
/// The budget is advisory: exceeding it is reported, never enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MemoryBudget {
    /// Total RAM of the machine.
    pub total: usize,

    /// The share of `total` reserved for CPU-1.
    pub high_priority: usize,
}

impl MemoryBudget {
    /// The RAM available to the queues of CPU-2.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.high_priority)
    }
}

impl Default for MemoryBudget {
    fn default() -> Self {
        MemoryBudget {
            total: 2048,
            high_priority: 512,
        }
    }
}

const fn quantum(ticks: usize) -> NonZeroUsize {
    match NonZeroUsize::new(ticks) {
        Some(quantum) => quantum,
        None => panic!("quantum must be non-zero"),
    }
}

/// The default quantum of the priority 2 round robin queue.
pub const MEDIUM_QUANTUM: NonZeroUsize = quantum(8);

/// The default quantum of the priority 3 round robin queue.
pub const LOW_QUANTUM: NonZeroUsize = quantum(16);

/// A CPU whose queues declare more RAM than the budget grants it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Overcommit {
    pub cpu: Cpu,
    pub requested: usize,
    pub available: usize,
}

/// Simulation parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// The quantum of the priority 2 round robin queue.
    pub medium_quantum: NonZeroUsize,

    /// The quantum of the priority 3 round robin queue.
    pub low_quantum: NonZeroUsize,

    pub memory: MemoryBudget,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            medium_quantum: MEDIUM_QUANTUM,
            low_quantum: LOW_QUANTUM,
            memory: MemoryBudget::default(),
        }
    }
}

/// The outcome of a simulation run.
#[derive(Debug)]
pub struct Report {
    /// The ready queues in [`Tier::ALL`] order.
    pub queues: Vec<QueueReport>,

    /// Every event of the run, routing first, then queue by queue.
    pub trace: Trace,

    /// Processes that were not routed to any queue.
    pub rejected: Vec<Process>,

    /// CPUs whose queues exceed the RAM budget.
    pub memory_overcommit: Vec<Overcommit>,
}

impl Report {
    pub fn queue(&self, tier: Tier) -> &QueueReport {
        &self.queues[tier.index()]
    }

    /// The summary lines, one per ready queue.
    pub fn summary(&self) -> Vec<String> {
        format_summary(&self.queues)
    }
}

/// The processor simulator.
pub struct Processor {
    config: Config,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Processor { config }
    }

    /// Run a batch of processes to completion.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::{Config, Processor};
    /// use scheduler::Process;
    ///
    /// let report = Processor::new(Config::default()).run(vec![
    ///     Process::new("P1", 0, 0, 5, 100, 1),
    ///     Process::new("P2", 1, 1, 10, 100, 1),
    ///     Process::new("P3", 2, 1, 3, 100, 1),
    /// ]);
    ///
    /// assert_eq!(report.summary()[1], "CPU-2 que2(priority-1) (SJF)->P3-P2");
    /// ```
    pub fn run(&self, processes: Vec<Process>) -> Report {
        info!(processes = processes.len(), "simulation started");

        let Routing {
            queues,
            events,
            rejected,
        } = route(processes);
        let memory_overcommit = self.check_memory(&queues);

        let mut trace = Trace::new();
        trace.extend(events);

        let [fcfs, sjf, medium, low] = queues;
        let queues = vec![
            dispatch(scheduler::fcfs(), Tier::Fcfs, fcfs, &mut trace),
            dispatch(scheduler::shortest_job_first(), Tier::Sjf, sjf, &mut trace),
            dispatch(
                scheduler::round_robin(self.config.medium_quantum),
                Tier::RoundRobinMedium,
                medium,
                &mut trace,
            ),
            dispatch(
                scheduler::round_robin(self.config.low_quantum),
                Tier::RoundRobinLow,
                low,
                &mut trace,
            ),
        ];

        info!(
            events = trace.len(),
            rejected = rejected.len(),
            "simulation finished"
        );

        Report {
            queues,
            trace,
            rejected,
            memory_overcommit,
        }
    }

    fn check_memory(&self, queues: &[Vec<Process>; 4]) -> Vec<Overcommit> {
        let budget = self.config.memory;
        let cpus = [
            (Cpu::Cpu1, &queues[..1], budget.high_priority),
            (Cpu::Cpu2, &queues[1..], budget.remaining()),
        ];

        let mut overcommit = Vec::new();
        for (cpu, queues, available) in cpus {
            let requested = queues
                .iter()
                .flatten()
                .map(|process| process.ram)
                .fold(0, usize::saturating_add);
            if requested > available {
                warn!(
                    %cpu,
                    requested,
                    available,
                    "queues request more RAM than the CPU is granted"
                );
                overcommit.push(Overcommit {
                    cpu,
                    requested,
                    available,
                });
            }
        }
        overcommit
    }
}

fn dispatch<S: Scheduler>(
    mut scheduler: S,
    tier: Tier,
    mut processes: Vec<Process>,
    trace: &mut Trace,
) -> QueueReport {
    trace.extend(scheduler.schedule(&mut processes));

    QueueReport {
        tier,
        label: tier.label(&scheduler.policy()),
        processes,
        elapsed: scheduler.elapsed(),
        slices: scheduler.slices(),
    }
}
