use crate::geometry::Point;
use super::GraphNodeMap;

/// Construct the stored path from the start node to the node at `goal_index`
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<Point> - map of nodes with their parent index and costs
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path(node_map: &GraphNodeMap<Point>, goal_index: usize) -> Vec<Point> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start, the start node's parent is usize::MAX
    // Parents are always expanded before their children, so the chain is acyclic
    while let Some((node, record)) = node_map.get_index(current_index) {
        path.push(*node);
        current_index = record.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    path
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::DistanceRecord;

    fn record(parent: usize, from_start: f64) -> DistanceRecord {
        DistanceRecord { parent, from_start, to_finish: 0.0 }
    }

    #[test]
    fn test_path_reconstruction() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 3.0);
        let d = Point::new(1.0, 3.0);

        let mut node_map: GraphNodeMap<Point> = GraphNodeMap::default();
        let a_index = node_map.insert_full(a, record(usize::MAX, 0.0)).0;
        let b_index = node_map.insert_full(b, record(a_index, 1.0)).0;
        let c_index = node_map.insert_full(c, record(a_index, 3.0)).0;
        let d_index = node_map.insert_full(d, record(c_index, 4.0)).0;

        assert_eq!(shortest_path(&node_map, d_index), vec![a, c, d]);
        assert_eq!(shortest_path(&node_map, b_index), vec![a, b]);
        assert_eq!(shortest_path(&node_map, a_index), vec![a]);
    }
}
