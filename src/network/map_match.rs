use log::debug;

use crate::errors::{Error, Result};
use crate::geometry::Point;
use super::NetworkGraph;


/// Resolve an arbitrary coordinate to the closest graph node
///
/// Linear scan over every key. Equidistant candidates resolve to the
/// lexicographically smallest point, so the answer does not depend on the
/// order in which the graph was built.
pub fn find_nearest_node(point: &Point, graph: &NetworkGraph) -> Result<Point> {
    let mut nearest: Option<(f64, Point)> = None;

    for candidate in graph.points() {
        let dist = point.squared_distance(candidate);
        let closer = match nearest {
            None => true,
            Some((best, best_point)) => dist < best || (dist == best && *candidate < best_point),
        };
        if closer {
            nearest = Some((dist, *candidate));
        }
    }

    let (dist, node) = nearest.ok_or(Error::EmptyGraph)?;
    debug!("Matched {point} to {node} at distance {}", dist.sqrt());
    Ok(node)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NeighborDescriptor;

    fn graph_of(points: &[Point]) -> NetworkGraph {
        let mut graph = NetworkGraph::new();
        for point in points {
            graph.push(*point, NeighborDescriptor::default());
        }
        graph
    }

    #[test]
    fn test_nearest_node() {
        let graph = graph_of(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(4.0, 4.0)]);
        let nearest = find_nearest_node(&Point::new(3.0, 2.5), &graph).unwrap();
        assert_eq!(nearest, Point::new(4.0, 4.0));
    }

    #[test]
    fn test_exact_node_matches_itself() {
        let node = Point::new(-75.345943, 39.903247);
        let graph = graph_of(&[Point::new(-75.355627, 39.907071), node]);
        assert_eq!(find_nearest_node(&node, &graph).unwrap(), node);
    }

    #[test]
    fn test_ties_do_not_depend_on_insertion_order() {
        let left = Point::new(-1.0, 0.0);
        let right = Point::new(1.0, 0.0);
        let origin = Point::new(0.0, 0.0);

        let forward = find_nearest_node(&origin, &graph_of(&[right, left])).unwrap();
        let backward = find_nearest_node(&origin, &graph_of(&[left, right])).unwrap();
        assert_eq!(forward, left);
        assert_eq!(backward, left);
    }

    #[test]
    fn test_empty_graph() {
        let result = find_nearest_node(&Point::new(0.0, 0.0), &NetworkGraph::new());
        assert!(matches!(result, Err(Error::EmptyGraph)));
    }
}
