//! Route searches over a connection graph.
//!
//! Two queries are answered:
//!
//! - **Least transfers**: breadth-first search where every connection is one
//!   hop. This minimises the number of connections taken, which equals the
//!   number of line changes only when each ride between transfers is a
//!   single hop. [`crate::domain::Route::line_changes`] reports the real
//!   count.
//! - **Fastest route**: best-first search on accumulated minutes. With the
//!   default [`ZeroHeuristic`] this is Dijkstra's algorithm; a caller can
//!   plug in a consistent [`Heuristic`] to turn it into A*.
//!
//! Both searches keep all scratch state local to the call, so any number of
//! them can run against the same graph at once.

mod bfs;
mod fastest;


use std::collections::HashMap;

use crate::domain::StationId;

pub use bfs::find_least_hops;
pub use fastest::{Heuristic, ZeroHeuristic, find_cheapest_path};

/// Station ids along a path found by a search, with its travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathIds {
    /// Ids from source to destination, both inclusive.
    pub stations: Vec<StationId>,
    /// Sum of the connection minutes along the path.
    pub total_minutes: u64,
}

/// How a search first reached a station.
#[derive(Debug, Clone, Copy)]
struct Step<'g> {
    parent: &'g StationId,
    minutes: u64,
}

/// Walk parent pointers back from `target` and return the path in travel order.
fn reconstruct<'g>(parents: &HashMap<&'g StationId, Step<'g>>, target: &'g StationId) -> PathIds {
    let mut stations = vec![target.clone()];
    let mut total_minutes = 0;
    let mut current = target;

    while let Some(step) = parents.get(current) {
        total_minutes += step.minutes;
        stations.push(step.parent.clone());
        current = step.parent;
    }

    stations.reverse();
    PathIds {
        stations,
        total_minutes,
    }
}
