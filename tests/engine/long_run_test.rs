/*!
 * Long-Run Invariant Tests
 * Random workloads keep engine bookkeeping consistent at every tick
 */

use proptest::prelude::*;
use std::collections::HashSet;
use tactsim::{Engine, ProcessState, SimConfig};

#[derive(Debug, Clone)]
enum Step {
    Generate(usize),
    Cancel(u32),
    Tick,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1usize..4).prop_map(Step::Generate),
        (0u32..64).prop_map(Step::Cancel),
        Just(Step::Tick),
        Just(Step::Tick),
    ]
}

fn check(engine: &Engine) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for p in engine.admitted().iter() {
        prop_assert!(seen.insert(p.id()), "duplicate pid {}", p.id());
        prop_assert!(matches!(p.state(), ProcessState::Ready | ProcessState::Running));
        let block = p.memory();
        prop_assert!(block.is_some_and(|b| engine.memory().is_allocated(&b)));
        prop_assert!(p.burst() < p.work_required());
    }
    for p in engine.waiting().iter() {
        prop_assert!(seen.insert(p.id()), "duplicate pid {}", p.id());
        prop_assert_eq!(p.state(), ProcessState::Waiting);
        prop_assert!(p.memory().is_none());
    }
    for p in engine.finished() {
        prop_assert!(seen.insert(p.id()), "duplicate pid {}", p.id());
        prop_assert_eq!(p.state(), ProcessState::Terminated);
        prop_assert!(p.memory().is_none());
    }
    prop_assert_eq!(engine.memory().allocated().len(), engine.admitted().len());

    let mut occupants = HashSet::new();
    for core in engine.dispatcher().cores() {
        if let Some(pid) = core.current() {
            prop_assert!(occupants.insert(pid));
            let process = engine.admitted().get(pid);
            prop_assert!(process.is_some_and(|p| p.state() == ProcessState::Running));
        }
    }
    let running = engine
        .admitted()
        .iter()
        .filter(|p| p.state() == ProcessState::Running)
        .count();
    prop_assert_eq!(running, occupants.len());
    Ok(())
}

proptest! {
    #[test]
    fn prop_engine_bookkeeping_consistent(
        seed in any::<u64>(),
        memory_size in 8i64..96,
        cores in 1usize..4,
        steps in prop::collection::vec(step(), 1..80),
    ) {
        let mut engine = Engine::new(SimConfig::new(memory_size, cores).with_seed(seed)).unwrap();
        let mut last_tick = 0;
        for step in steps {
            match step {
                Step::Generate(n) => { engine.generate(n).unwrap(); }
                Step::Cancel(pid) => { engine.cancel(pid).unwrap(); }
                Step::Tick => {
                    let report = engine.tick().unwrap();
                    prop_assert_eq!(report.tick, last_tick + 1);
                    last_tick = report.tick;
                }
            }
            check(&engine)?;
        }
    }
}
