//! Breadth-first search for the route with the fewest connections.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use super::{PathIds, Step, reconstruct};
use crate::domain::NetworkError;
use crate::network::ConnectionGraph;

/// Find a path from `from` to `to` taking as few connections as possible.
///
/// Every connection counts as one hop whatever its travel time, and
/// transfers count the same as rides. Neighbours are expanded in the order
/// their connections were added, so among equally short paths the first
/// one discovered wins.
///
/// Returns `Ok(None)` when no path exists.
///
/// # Errors
///
/// [`NetworkError::UnknownStation`] if either endpoint is not in the graph.
pub fn find_least_hops(
    graph: &ConnectionGraph,
    from: &str,
    to: &str,
) -> Result<Option<PathIds>, NetworkError> {
    let source = graph.resolve(from)?;
    let target = graph.resolve(to)?;

    let mut queue = VecDeque::from([source]);
    let mut visited = HashSet::from([source]);
    let mut parents = HashMap::new();
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if current == target {
            let path = reconstruct(&parents, target);
            debug!(
                from,
                to,
                hops = path.stations.len() - 1,
                expanded,
                "least-hops route found"
            );
            return Ok(Some(path));
        }

        expanded += 1;
        let neighbors = graph.neighbors(current.as_str())?;
        trace!(station = %current, neighbors = neighbors.len(), "BFS expanding station");

        for connection in neighbors {
            // Mark on enqueue so each station enters the queue once
            if visited.insert(&connection.to) {
                parents.insert(
                    &connection.to,
                    Step {
                        parent: current,
                        minutes: connection.minutes,
                    },
                );
                queue.push_back(&connection.to);
            }
        }
    }

    debug!(from, to, expanded, "no route between stations");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn graph(stations: &[&str], connections: &[(&str, &str, i64)]) -> ConnectionGraph {
        let mut graph = ConnectionGraph::new();
        for id in stations {
            graph.add_station(StationId::new(*id));
        }
        for (a, b, minutes) in connections {
            graph.add_connection(a, b, *minutes).unwrap();
        }
        graph
    }

    fn ids(path: &PathIds) -> Vec<&str> {
        path.stations.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn same_station_is_zero_hops() {
        let g = graph(&["A"], &[]);
        let path = find_least_hops(&g, "A", "A").unwrap().unwrap();
        assert_eq!(ids(&path), vec!["A"]);
        assert_eq!(path.total_minutes, 0);
    }

    #[test]
    fn prefers_fewer_hops_over_less_time() {
        // A-B-C-D is 3 minutes over 3 hops, A-D is 60 minutes in one hop
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("A", "D", 60)],
        );
        let path = find_least_hops(&g, "A", "D").unwrap().unwrap();
        assert_eq!(ids(&path), vec!["A", "D"]);
        assert_eq!(path.total_minutes, 60);
    }

    #[test]
    fn ties_go_to_first_inserted_neighbor() {
        // Two 2-hop paths A-B-D and A-C-D; B's connection was added first
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 5), ("A", "C", 1), ("B", "D", 5), ("C", "D", 1)],
        );
        let path = find_least_hops(&g, "A", "D").unwrap().unwrap();
        assert_eq!(ids(&path), vec!["A", "B", "D"]);
        assert_eq!(path.total_minutes, 10);
    }

    #[test]
    fn disconnected_is_none() {
        let g = graph(&["A", "B", "C"], &[("A", "B", 1)]);
        assert!(find_least_hops(&g, "A", "C").unwrap().is_none());
    }

    #[test]
    fn unknown_endpoints_fail() {
        let g = graph(&["A"], &[]);
        assert_eq!(
            find_least_hops(&g, "X", "A").unwrap_err(),
            NetworkError::UnknownStation(StationId::new("X"))
        );
        assert_eq!(
            find_least_hops(&g, "A", "Y").unwrap_err(),
            NetworkError::UnknownStation(StationId::new("Y"))
        );
    }

    #[test]
    fn handles_cycles() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1), ("C", "D", 1)],
        );
        let path = find_least_hops(&g, "A", "D").unwrap().unwrap();
        assert_eq!(ids(&path), vec!["A", "C", "D"]);
    }
}
