//! Best-first search for the route with the least travel time.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use super::{PathIds, Step, reconstruct};
use crate::domain::{NetworkError, StationId};
use crate::network::ConnectionGraph;

/// Lower-bound estimate of the remaining minutes from a station to the target.
///
/// The estimate must never exceed the true remaining time and must be
/// consistent (dropping by at most the connection time across any
/// connection), otherwise the returned route is not guaranteed fastest.
pub trait Heuristic {
    fn estimate(&self, station: &StationId, target: &StationId) -> u64;
}

/// Estimates zero everywhere, which makes the search Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _station: &StationId, _target: &StationId) -> u64 {
        0
    }
}

impl<F> Heuristic for F
where
    F: Fn(&StationId, &StationId) -> u64,
{
    fn estimate(&self, station: &StationId, target: &StationId) -> u64 {
        self(station, target)
    }
}

/// Priority queue entry.
///
/// Ordered so that `BinaryHeap` pops the lowest priority first and, among
/// equal priorities, the entry pushed first.
#[derive(Debug, PartialEq, Eq)]
struct QueueEntry<'g> {
    priority: u64,
    seq: u64,
    cost: u64,
    station: &'g StationId,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the path from `from` to `to` with the smallest total travel time.
///
/// The queue has no decrease-key, so improved costs are pushed as new
/// entries and outdated ones are skipped when popped. The search stops as
/// soon as the target is popped. When two entries tie, the one pushed first
/// is expanded first.
///
/// Returns `Ok(None)` when no path exists.
///
/// # Errors
///
/// [`NetworkError::UnknownStation`] if either endpoint is not in the graph.
pub fn find_cheapest_path<H: Heuristic>(
    graph: &ConnectionGraph,
    from: &str,
    to: &str,
    heuristic: &H,
) -> Result<Option<PathIds>, NetworkError> {
    let source = graph.resolve(from)?;
    let target = graph.resolve(to)?;

    let mut best: HashMap<&StationId, u64> = HashMap::from([(source, 0)]);
    let mut parents = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;
    let mut stale = 0usize;

    queue.push(QueueEntry {
        priority: heuristic.estimate(source, target),
        seq,
        cost: 0,
        station: source,
    });

    while let Some(QueueEntry { cost, station, .. }) = queue.pop() {
        if station == target {
            let path = reconstruct(&parents, target);
            debug_assert_eq!(path.total_minutes, cost);
            debug!(
                from,
                to,
                minutes = cost,
                hops = path.stations.len() - 1,
                expanded,
                stale,
                "fastest route found"
            );
            return Ok(Some(path));
        }

        if best.get(station).is_some_and(|&known| cost > known) {
            stale += 1;
            continue;
        }

        expanded += 1;
        let neighbors = graph.neighbors(station.as_str())?;
        trace!(station = %station, cost, neighbors = neighbors.len(), "expanding station");

        for connection in neighbors {
            // Capped connection weights keep path totals within u64
            let candidate = cost + connection.minutes;
            let improves = best
                .get(&connection.to)
                .is_none_or(|&known| candidate < known);

            if improves {
                best.insert(&connection.to, candidate);
                parents.insert(
                    &connection.to,
                    Step {
                        parent: station,
                        minutes: connection.minutes,
                    },
                );
                seq += 1;
                queue.push(QueueEntry {
                    priority: candidate.saturating_add(heuristic.estimate(&connection.to, target)),
                    seq,
                    cost: candidate,
                    station: &connection.to,
                });
            }
        }
    }

    debug!(from, to, expanded, stale, "no route between stations");
    Ok(None)
}
