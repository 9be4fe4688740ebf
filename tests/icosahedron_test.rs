// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

/* The production problem through the public API. The full 35-traversal
  enumeration runs for a very long time, so these tests check the instance
  definition and the graph tables, and exercise the whole driver path on a
  short walk budget over the real topology (no walk of 4 traversals can
  cover 30 edges, so the run exhausts quickly with zero acceptances).
*/

use icosa_route::engine::CollectingReporter;
use icosa_route::state::Counter;
use icosa_route::{Icosahedron, Problem, Search, Topology};

#[test]
fn test_production_instance_definition() {
    let problem = Problem::icosahedron();
    assert_eq!(problem.topology.vertex_count(), 12);
    assert_eq!(problem.topology.degree(), 5);
    assert_eq!(problem.topology.edge_count(), 30);
    assert_eq!(problem.start, 0);
    assert_eq!(problem.walk_edges, 35);
    assert_eq!(problem.walk_vertices(), 36);
    assert_eq!(problem.median_position, 17);
}

#[test]
fn test_icosahedron_tables_are_consistent() {
    let ico = Icosahedron;
    let mut edge_rows = vec![0u32; ico.edge_count()];
    for v in 0..ico.vertex_count() {
        for slot in 0..ico.degree() {
            let n = ico.neighbor(v, slot);
            let edge = ico
                .edge_between(v, n)
                .expect("adjacent vertices must share an edge");
            assert_eq!(ico.edge_between(n, v), Some(edge), "edge table asymmetric");
            edge_rows[edge] += 1;
        }
    }
    // Every edge id is reachable from exactly two vertices' neighbor rows.
    assert!(edge_rows.iter().all(|&count| count == 2));
}

#[test]
fn test_short_budget_run_exhausts_on_real_topology() {
    let problem = Problem::new(Icosahedron, 0, 4, 1, 3, 2);
    let search = Search::new(problem);
    let mut reporter = CollectingReporter::new();
    let statistics = search.run(&mut reporter);

    assert!(reporter.solutions.is_empty());
    assert_eq!(statistics.get(Counter::Accepted), 0);
    assert!(statistics.get(Counter::Explored) > 0);
    assert_eq!(
        statistics.get(Counter::Explored),
        statistics.get(Counter::Pruned)
            + statistics.get(Counter::RejectedCoverage)
            + statistics.get(Counter::RejectedMedian)
            + statistics.get(Counter::Accepted)
    );
}
