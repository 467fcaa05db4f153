/*!
 * Snapshot Tests
 * Read-only views and their serialized form
 */

use pretty_assertions::assert_eq;
use tactsim::{Demand, Engine, MemoryBlock, ProcessState, SimConfig};

fn busy_engine() -> Engine {
    let mut engine = Engine::new(SimConfig::new(12, 2).with_seed(5)).unwrap();
    engine.submit(Demand::new(2, 4, 4)).unwrap();
    engine.submit(Demand::new(1, 1, 4)).unwrap();
    engine.submit(Demand::new(1, 6, 4)).unwrap();
    engine.submit(Demand::new(1, 2, 9)).unwrap();
    engine.tick().unwrap();
    engine
}

#[test]
fn test_snapshot_does_not_mutate() {
    let engine = busy_engine();
    let first = engine.snapshot();
    let second = engine.snapshot();

    assert_eq!(first.tick, second.tick);
    assert_eq!(first.admitted, second.admitted);
    assert_eq!(first.waiting, second.waiting);
    assert_eq!(first.finished, second.finished);
    assert_eq!(first.cores, second.cores);
    assert_eq!(first.memory, second.memory);
    assert_eq!(engine.now(), 1);
}

#[test]
fn test_snapshot_lengths_match_lists() {
    let snapshot = busy_engine().snapshot();
    assert_eq!(snapshot.admitted_len, snapshot.admitted.len());
    assert_eq!(snapshot.waiting_len, snapshot.waiting.len());
    assert_eq!(snapshot.finished_len, snapshot.finished.len());
    assert_eq!(snapshot.memory_stats.allocated_blocks, snapshot.memory.len());
}

#[test]
fn test_core_occupants_named() {
    let engine = busy_engine();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.cores.len(), 2);

    for core in &snapshot.cores {
        let Some(pid) = core.pid else {
            assert!(core.occupant.is_none());
            continue;
        };
        let row = snapshot.find(pid).unwrap();
        assert_eq!(row.state, ProcessState::Running);
        assert_eq!(core.occupant.as_deref(), Some(row.name.as_str()));
    }
}

#[test]
fn test_memory_listed_in_address_order() {
    let snapshot = busy_engine().snapshot();
    let mut sorted = snapshot.memory.clone();
    sorted.sort();
    assert_eq!(snapshot.memory, sorted);
    assert!(snapshot
        .admitted
        .iter()
        .all(|row| row.address.is_some_and(|b| snapshot.memory.contains(&b))));
    assert!(snapshot.waiting.iter().all(|row| row.address.is_none()));
}

#[test]
fn test_memory_blocks_reported_inclusively() {
    let mut engine = Engine::new(SimConfig::new(12, 1)).unwrap();
    engine.submit(Demand::new(1, 1, 4)).unwrap();
    engine.submit(Demand::new(1, 1, 3)).unwrap();
    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.memory,
        vec![MemoryBlock::new(0, 3), MemoryBlock::new(4, 6)]
    );
    assert_eq!(snapshot.memory_stats.used_memory, 7);
    assert_eq!(snapshot.memory_stats.available_memory, 6);
}

#[test]
fn test_json_includes_engine_state() {
    let snapshot = busy_engine().snapshot();
    let json = snapshot.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["tick"], 1);
    assert_eq!(value["cores"].as_array().unwrap().len(), 2);
    assert_eq!(
        value["admitted"].as_array().unwrap().len(),
        snapshot.admitted_len
    );
    assert!(value["memory_stats"]["total_memory"].is_number());
}
