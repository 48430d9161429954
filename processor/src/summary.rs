use std::fmt::{self, Display};

use scheduler::{Process, Ticks, Tier};

/// The final state of one ready queue.
#[derive(Debug, Clone)]
pub struct QueueReport {
    pub tier: Tier,

    /// The queue label, e.g. `CPU-2 que3(priority-2) (RR-q8)`.
    pub label: String,

    /// The processes in service order.
    pub processes: Vec<Process>,

    /// The simulated time consumed by the queue's policy.
    pub elapsed: Ticks,

    /// The time slices handed out by the queue's policy.
    pub slices: usize,
}

impl QueueReport {
    pub fn memory_requested(&self) -> usize {
        self.processes
            .iter()
            .map(|process| process.ram)
            .fold(0, usize::saturating_add)
    }
}

/// Renders `<label>-><pid1>-<pid2>-...`.
impl Display for QueueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->", self.label)?;
        for (index, process) in self.processes.iter().enumerate() {
            if index > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", process.pid)?;
        }
        Ok(())
    }
}

/// Format the summary lines of a run, one per ready queue.
pub fn format_summary(queues: &[QueueReport]) -> Vec<String> {
    queues.iter().map(QueueReport::to_string).collect()
}
