use log::{debug, info};

use super::NetworkGraph;


/// Degree statistics of a built graph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SanityReport {
    pub total_points: usize,
    pub lone_points: usize, // fewer than two descriptors, i.e. seen on a single line
    pub shared_points: usize,
}

/// Count points by number of accumulated descriptors
/// Purely diagnostic, the graph is left untouched
pub fn sanity_check(graph: &NetworkGraph) -> SanityReport {
    let mut lone_points = 0;

    for (point, descriptors) in graph.iter() {
        if descriptors.len() < 2 {
            lone_points += 1;
            debug!("Only one set of neighbors for {point}");
        }
    }

    let report = SanityReport {
        total_points: graph.len(),
        lone_points,
        shared_points: graph.len() - lone_points,
    };

    info!("Total points: {}", report.total_points);
    info!("Points with fewer than two neighbor sets: {}", report.lone_points);

    report
}
