//! A ready queue policy library.
//!
//! This library provides the process model, the trace events and
//! the policies that the multi-level scheduler applies to each of
//! its ready queues.
//!

use std::num::NonZeroUsize;

mod scheduler;

use schedulers::{Fcfs, RoundRobin, ShortestJobFirst};

pub use crate::scheduler::{
    Cpu, Event, ParseProcessError, Pid, Process, Scheduler, Ticks, Tier,
};

pub mod schedulers;

/// Returns a structure that implements the `Scheduler` trait with a first come first served policy
pub fn fcfs() -> impl Scheduler {
    Fcfs
}

/// Returns a structure that implements the `Scheduler` trait with a shortest job first policy
///
/// Processes with the same execution time are served in queue order.
pub fn shortest_job_first() -> impl Scheduler {
    ShortestJobFirst
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `quantum` - the time quanta that a process can run before it is queued again
pub fn round_robin(quantum: NonZeroUsize) -> impl Scheduler {
    RoundRobin::new(quantum)
}
