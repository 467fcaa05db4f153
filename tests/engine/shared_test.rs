/*!
 * Shared Engine Tests
 * Concurrent hosts driving one engine
 */

use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use tactsim::{Demand, SharedEngine, SimConfig, SimulationControl};

#[test]
fn test_concurrent_ticks_and_submissions() {
    let engine = SharedEngine::new(SimConfig::new(256, 4).with_seed(9)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    engine.submit(Demand::new(1, 2, 3)).unwrap();
                    engine.tick().unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.tick, 100);
    assert_eq!(
        snapshot.admitted_len + snapshot.waiting_len + snapshot.finished_len,
        100
    );
    let ids: std::collections::BTreeSet<_> = snapshot
        .admitted
        .iter()
        .map(|r| r.id)
        .chain(snapshot.waiting.iter().map(|r| r.id))
        .chain(snapshot.finished.iter().map(|r| r.id))
        .collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn test_control_through_trait_object() {
    let control: Arc<dyn SimulationControl> =
        Arc::new(SharedEngine::new(SimConfig::new(64, 1).with_seed(2)).unwrap());

    let pids = control.generate(3).unwrap();
    assert_eq!(pids.len(), 3);
    assert!(control.cancel(pids[0]).unwrap());
    assert!(!control.cancel(pids[0]).unwrap());
    assert_eq!(control.snapshot().finished_len, 1);

    let report = control.tick().unwrap();
    assert_eq!(report.tick, 1);
    assert_eq!(control.snapshot().tick, 1);
}

#[test]
fn test_maybe_generate_respects_rate() {
    let engine = SharedEngine::new(SimConfig::new(64, 1).with_seed(4)).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.maybe_generate(0.0).unwrap(), None);
    }
    assert_eq!(engine.maybe_generate(1.0).unwrap(), Some(0));
    assert_eq!(engine.with(|e| e.admitted().len() + e.waiting().len()), 1);
}
