use tracing::{debug, warn};

use scheduler::{Event, Process, Tier};

/// The result of splitting a batch into the ready queues.
#[derive(Debug, Default)]
pub struct Routing {
    /// The ready queues, indexed by [`Tier::index`].
    pub queues: [Vec<Process>; 4],

    /// One [`Event::Queued`] per routed process, in input order.
    pub events: Vec<Event>,

    /// Processes whose priority does not select any queue.
    pub rejected: Vec<Process>,
}

impl Routing {
    pub fn queue(&self, tier: Tier) -> &[Process] {
        &self.queues[tier.index()]
    }
}

/// Splits `processes` into the four ready queues by priority.
///
/// The split is stable: processes keep their input order inside
/// each queue. A process with a priority outside `0..=3` is not
/// queued and is reported with a warning.
pub fn route(processes: Vec<Process>) -> Routing {
    let mut routing = Routing::default();

    for process in processes {
        let Some(tier) = process.tier() else {
            warn!(
                pid = %process.pid,
                priority = process.priority,
                "priority does not select a ready queue, process skipped"
            );
            routing.rejected.push(process);
            continue;
        };

        debug!(pid = %process.pid, ?tier, "process queued");
        routing.events.push(Event::Queued {
            pid: process.pid.clone(),
            tier,
        });
        routing.queues[tier.index()].push(process);
    }

    routing
}
