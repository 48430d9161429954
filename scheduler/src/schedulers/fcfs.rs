use crate::{Cpu, Event, Process, Scheduler};

/// First come first served on CPU-1.
///
/// Queue order is service order and every process runs to completion
/// without being preempted.
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn policy(&self) -> String {
        String::from("FCFS")
    }

    fn schedule(&mut self, queue: &mut [Process]) -> Vec<Event> {
        let mut events = Vec::with_capacity(queue.len() * 2);
        for process in queue.iter() {
            let pid = process.pid.clone();
            events.push(Event::Assigned {
                pid: pid.clone(),
                cpu: Cpu::Cpu1,
            });
            events.push(Event::Completed { pid });
        }
        events
    }
}
