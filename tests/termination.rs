//! Randomized checks that searches terminate and return well-formed paths

use rand::{Rng, SeedableRng, rngs::StdRng};

use polyroute::{Error, GraphBuilder, NetworkGraph, PathSearch, Point, SearchMode};

/// Random polylines on a small integer grid so lines cross and share points
fn random_graph(rng: &mut StdRng) -> NetworkGraph {
    let mut builder = GraphBuilder::new();
    let lines = rng.random_range(1..12);

    for _ in 0..lines {
        let len = rng.random_range(0..8);
        let points: Vec<Point> = (0..len)
            .map(|_| Point::new(rng.random_range(0..10) as f64, rng.random_range(0..10) as f64))
            .collect();
        builder.add_line(&points);
    }

    builder.finish()
}

fn assert_walkable(graph: &NetworkGraph, path: &[Point], start: Point, destination: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&destination));
    assert!(path.len() <= graph.len());

    for pair in path.windows(2) {
        let adjacent = graph.edges(&pair[0]).unwrap().any(|edge| edge.to == pair[1]);
        assert!(adjacent, "{} -> {} is not an edge", pair[0], pair[1]);
    }
}

#[test]
fn test_random_graphs_terminate() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        if graph.is_empty() {
            continue;
        }

        let points: Vec<Point> = graph.points().copied().collect();
        let start = points[rng.random_range(0..points.len())];
        let destination = points[rng.random_range(0..points.len())];

        let directed = PathSearch::new(SearchMode::Directed).plan(&graph, start, destination);
        let exact = PathSearch::new(SearchMode::Exact).plan(&graph, start, destination);

        match (directed, exact) {
            (Ok(directed), Ok(exact)) => {
                assert_walkable(&graph, &directed.path, start, destination);
                assert_walkable(&graph, &exact.path, start, destination);
                assert!(directed.expanded <= graph.len());
                // the directed path may be longer, never shorter
                assert!(exact.cost <= directed.cost + 1e-9);
            }
            (Err(Error::NoPathFound { .. }), Err(Error::NoPathFound { .. })) => {}
            (directed, exact) => panic!("modes disagree on reachability: {directed:?} vs {exact:?}"),
        }
    }
}

#[test]
fn test_repeated_searches_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = loop {
        let graph = random_graph(&mut rng);
        if graph.len() > 10 {
            break graph;
        }
    };

    let points: Vec<Point> = graph.points().copied().collect();
    let start = points[0];
    let destination = points[points.len() - 1];

    let first = PathSearch::default().plan(&graph, start, destination);
    for _ in 0..5 {
        let again = PathSearch::default().plan(&graph, start, destination);
        match (&first, &again) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(Error::NoPathFound { .. }), Err(Error::NoPathFound { .. })) => {}
            (a, b) => panic!("searches disagree: {a:?} vs {b:?}"),
        }
    }
}
