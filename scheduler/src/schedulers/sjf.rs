use tracing::debug;

use crate::{Cpu, Event, Process, Scheduler};

/// Shortest job first on CPU-2.
///
/// Processes are served by ascending execution time. Processes with
/// the same execution time keep their queue order.
pub struct ShortestJobFirst;

impl Scheduler for ShortestJobFirst {
    fn policy(&self) -> String {
        String::from("SJF")
    }

    fn schedule(&mut self, queue: &mut [Process]) -> Vec<Event> {
        // slice::sort_by_key is stable
        queue.sort_by_key(|process| process.burst_time);
        debug!(
            order = ?queue.iter().map(|p| &p.pid).collect::<Vec<_>>(),
            "sjf service order"
        );

        queue
            .iter()
            .flat_map(|process| {
                [
                    Event::Assigned {
                        pid: process.pid.clone(),
                        cpu: Cpu::Cpu2,
                    },
                    Event::OperationCompleted {
                        pid: process.pid.clone(),
                    },
                ]
            })
            .collect()
    }
}
