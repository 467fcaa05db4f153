/*!
 * Scheduling Order
 *
 * Non-preemptive shortest-work-first: among processes in the same state, less
 * required work wins, then lower priority value, then earlier arrival, then lower
 * id. Ids are unique, so the order is total.
 *
 * Identity is a separate question and is answered by id alone.
 */

use super::types::Process;
use std::cmp::Ordering;

/// Scheduling comparator
#[inline]
pub fn compare(a: &Process, b: &Process) -> Ordering {
    a.sched_key().cmp(&b.sched_key())
}

/// Identity equality
#[inline]
pub fn same_process(a: &Process, b: &Process) -> bool {
    a.id() == b.id()
}
