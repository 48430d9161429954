use processor::{Config, Overcommit, LOW_QUANTUM, MEDIUM_QUANTUM};
use scheduler::{Cpu, Tier};

use super::{processes, processor};

#[test]
pub fn within_budget() {
    let report = processor().run(processes(
        "P1,0,0,5,512,1\n\
         P2,0,1,5,1000,2\n\
         P3,0,3,5,536,2\n",
    ));

    assert!(report.memory_overcommit.is_empty());
}

#[test]
pub fn both_cpus_overcommitted() {
    let report = processor().run(processes(
        "P1,0,0,5,300,1\n\
         P2,0,0,5,300,1\n\
         P3,0,1,5,1000,2\n\
         P4,0,2,5,600,2\n\
         P5,0,7,5,9000,2\n",
    ));

    assert_eq!(
        report.memory_overcommit,
        [
            Overcommit {
                cpu: Cpu::Cpu1,
                requested: 600,
                available: 512,
            },
            Overcommit {
                cpu: Cpu::Cpu2,
                requested: 1600,
                available: 1536,
            },
        ]
    );
    // the budget is advisory
    assert_eq!(report.queue(Tier::Fcfs).processes.len(), 2);
    assert_eq!(report.trace.len(), 4 + 2 * 2 + 2 + 3);
}

#[test]
pub fn huge_requests_saturate() {
    let max = usize::MAX;
    let report = processor().run(processes(&format!(
        "P1,0,0,5,{max},1\n\
         P2,0,0,5,{max},1\n\
         P3,0,2,5,{max},2\n\
         P4,0,3,5,{max},2\n"
    )));

    assert_eq!(report.queue(Tier::Fcfs).memory_requested(), max);
    assert_eq!(report.memory_overcommit.len(), 2);
    assert!(report
        .memory_overcommit
        .iter()
        .all(|overcommit| overcommit.requested == max));
    assert_eq!(report.summary()[0], "CPU-1 que1(priority-0) (FCFS)->P1-P2");
}

#[test]
pub fn default_quanta() {
    let config = Config::default();

    assert_eq!(MEDIUM_QUANTUM.get(), 8);
    assert_eq!(LOW_QUANTUM.get(), 16);
    assert_eq!(config.medium_quantum, MEDIUM_QUANTUM);
    assert_eq!(config.memory.remaining(), 1536);
}
