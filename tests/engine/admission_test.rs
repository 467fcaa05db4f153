/*!
 * Admission Control Tests
 * Waiting queue, backfill and cancellation
 */

use pretty_assertions::assert_eq;
use tactsim::{Demand, Engine, MemoryBlock, ProcessState, SimConfig};

#[test]
fn test_denied_memory_goes_to_waiting() {
    let mut engine = Engine::new(SimConfig::new(10, 1)).unwrap();
    let first = engine.submit(Demand::new(1, 2, 6)).unwrap();
    let second = engine.submit(Demand::new(1, 2, 6)).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.admitted_len, 1);
    assert_eq!(snapshot.waiting_len, 1);
    assert_eq!(
        snapshot.find(first).unwrap().address,
        Some(MemoryBlock::new(0, 5))
    );
    let waiting = snapshot.find(second).unwrap();
    assert_eq!(waiting.state, ProcessState::Waiting);
    assert_eq!(waiting.address, None);
}

#[test]
fn test_waiting_process_backfilled_in_same_tick() {
    let mut engine = Engine::new(SimConfig::new(10, 1)).unwrap();
    let first = engine.submit(Demand::new(1, 2, 6)).unwrap();
    let second = engine.submit(Demand::new(1, 2, 6)).unwrap();

    let report = engine.tick().unwrap();
    assert!(report.completed.is_empty());
    assert_eq!(engine.waiting().len(), 1);

    let report = engine.tick().unwrap();
    assert_eq!(report.completed, vec![first]);
    assert_eq!(report.admitted_from_waiting, vec![second]);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.waiting_len, 0);
    let row = snapshot.find(second).unwrap();
    assert_eq!(row.state, ProcessState::Running);
    assert_eq!(row.burst, 0);
    assert_eq!(row.address, Some(MemoryBlock::new(0, 5)));
    assert_eq!(snapshot.cores[0].pid, Some(second));
}

#[test]
fn test_waiting_retried_in_scheduling_order() {
    let mut engine = Engine::new(SimConfig::new(9, 1)).unwrap();
    let blocker = engine.submit(Demand::new(1, 1, 10)).unwrap();
    let long = engine.submit(Demand::new(1, 5, 6)).unwrap();
    let short = engine.submit(Demand::new(1, 2, 6)).unwrap();
    assert_eq!(engine.waiting().ids(), vec![short, long]);

    let report = engine.tick().unwrap();
    assert_eq!(report.completed, vec![blocker]);
    assert_eq!(report.admitted_from_waiting, vec![short]);
    assert_eq!(engine.waiting().ids(), vec![long]);
}

#[test]
fn test_cancel_is_idempotent() {
    let mut engine = Engine::new(SimConfig::new(32, 1)).unwrap();
    let pid = engine.submit(Demand::new(1, 4, 8)).unwrap();

    assert!(engine.cancel(pid).unwrap());
    assert!(!engine.cancel(pid).unwrap());

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.finished_len, 1);
    assert_eq!(snapshot.finished[0].state, ProcessState::Terminated);
    assert!(snapshot.memory.is_empty());
}

#[test]
fn test_cancel_unknown_id_is_noop() {
    let mut engine = Engine::new(SimConfig::new(32, 1)).unwrap();
    assert!(!engine.cancel(42).unwrap());
    assert_eq!(engine.finished().len(), 0);
}

#[test]
fn test_cancel_running_process_frees_core_and_memory() {
    let mut engine = Engine::new(SimConfig::new(32, 1)).unwrap();
    let running = engine.submit(Demand::new(1, 2, 8)).unwrap();
    let next = engine.submit(Demand::new(1, 9, 8)).unwrap();
    engine.tick().unwrap();
    assert_eq!(engine.dispatcher().core_of(running), Some(0));

    assert!(engine.cancel(running).unwrap());
    assert!(engine.dispatcher().has_idle_core());
    assert_eq!(engine.memory().allocated().len(), 1);
    assert_eq!(engine.finished()[0].burst(), 1);

    engine.tick().unwrap();
    assert_eq!(engine.dispatcher().core_of(next), Some(0));
    assert_eq!(engine.admitted().get(next).unwrap().burst(), 1);
}

#[test]
fn test_cancel_waiting_process() {
    let mut engine = Engine::new(SimConfig::new(4, 1)).unwrap();
    engine.submit(Demand::new(1, 3, 5)).unwrap();
    let waiting = engine.submit(Demand::new(1, 3, 9)).unwrap();
    assert_eq!(engine.waiting().len(), 1);

    assert!(engine.cancel(waiting).unwrap());
    assert!(engine.waiting().is_empty());
    assert_eq!(engine.finished()[0].id(), waiting);
}

#[test]
fn test_memory_freed_by_cancel_waits_for_a_completion() {
    let mut engine = Engine::new(SimConfig::new(10, 1)).unwrap();
    let hog = engine.submit(Demand::new(1, 100, 6)).unwrap();
    let waiting = engine.submit(Demand::new(1, 2, 6)).unwrap();
    engine.tick().unwrap();
    engine.cancel(hog).unwrap();
    assert!(engine.memory().allocated().is_empty());

    let report = engine.tick().unwrap();
    assert!(report.completed.is_empty());
    assert!(report.admitted_from_waiting.is_empty());
    assert_eq!(
        engine.snapshot().find(waiting).unwrap().state,
        ProcessState::Waiting
    );
    assert!(engine.dispatcher().has_idle_core());

    let short = engine.submit(Demand::new(1, 1, 1)).unwrap();
    let report = engine.tick().unwrap();
    assert_eq!(report.completed, vec![short]);
    assert_eq!(report.admitted_from_waiting, vec![waiting]);
    assert_eq!(engine.dispatcher().core_of(waiting), Some(0));
    assert_eq!(
        engine.snapshot().find(waiting).unwrap().address,
        Some(MemoryBlock::new(0, 5))
    );
}

#[test]
fn test_request_larger_than_space_waits_forever() {
    let mut engine = Engine::new(SimConfig::new(4, 1)).unwrap();
    let pid = engine.submit(Demand::new(1, 1, 6)).unwrap();
    engine.submit(Demand::new(1, 1, 1)).unwrap();
    engine.run(3).unwrap();
    assert_eq!(engine.waiting().ids(), vec![pid]);
}
