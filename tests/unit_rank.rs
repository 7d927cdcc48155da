// tests/unit_rank.rs
//! End-to-end behaviour of the ranking pipeline.

use linkrank_core::{
    rank_records, Edge, GraphIndex, IterationEvent, RankConfig, RankEngine, RankError, Ranker,
};

fn graph(pairs: &[(&str, &str)]) -> GraphIndex {
    GraphIndex::build(pairs.iter().map(|(a, b)| Edge::new(*a, *b)))
}

fn owned(pairs: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    pairs
        .iter()
        .map(|(k, vs)| ((*k).to_string(), vs.iter().map(|v| (*v).to_string()).collect()))
        .collect()
}

#[test]
fn test_two_cycle_single_iteration_is_half() {
    let g = graph(&[("A", "B"), ("B", "A")]);
    let cfg = RankConfig::new(0.8, 1e-6).with_max_iterations(1);
    let err = RankEngine::new(&g, cfg).unwrap().run().unwrap_err();

    let partial = err.partial_run().expect("ceiling keeps the last snapshot");
    assert_eq!(partial.iterations(), 1);
    assert!(!partial.converged);
    for node in ["A", "B"] {
        let score = partial.ranks.get(node).unwrap();
        assert!((score - 0.5).abs() < 1e-12, "{node}={score}");
    }
}

#[test]
fn test_three_cycle_converges_to_equal_ranks() {
    let g = graph(&[("A", "B"), ("B", "C"), ("C", "A")]);
    let run = RankEngine::new(&g, RankConfig::new(0.85, 1e-6))
        .unwrap()
        .run()
        .unwrap();

    assert!(run.converged);
    assert!(run.iterations() >= 3 && run.iterations() < 100);
    let scores = run.ranks.scores();
    for s in scores {
        assert!((s - scores[0]).abs() < 1e-9, "{scores:?}");
    }
}

#[test]
fn test_equal_ranks_keep_discovery_order() {
    let g = graph(&[("C", "A"), ("A", "B"), ("B", "C")]);
    let run = RankEngine::new(&g, RankConfig::new(0.85, 1e-6))
        .unwrap()
        .run()
        .unwrap();
    let names: Vec<_> = Ranker::rank(&run.ranks).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_target_only_nodes_are_not_ranked() {
    let ranked = rank_records(["a b", "a c", "b a"], RankConfig::default()).unwrap();
    let mut names: Vec<_> = ranked.iter().map(|(n, _)| n.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_hub_ranks_first() {
    let ranked = rank_records(
        ["b a", "c a", "d a", "a b", "e d"],
        RankConfig::new(0.85, 1e-8),
    )
    .unwrap();
    assert_eq!(ranked[0].0, "a");
    for pair in ranked.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn test_ranks_are_not_renormalized() {
    // "s" leaks mass to "t", which is never ranked.
    let g = graph(&[("s", "t"), ("s", "u"), ("u", "s")]);
    let run = RankEngine::new(&g, RankConfig::new(0.8, 1e-9))
        .unwrap()
        .run()
        .unwrap();
    assert!(run.ranks.total() < 1.0 - 1e-3, "total={}", run.ranks.total());
}

#[test]
fn test_malformed_record_is_parse_error() {
    let err = rank_records(["1 2", "3"], RankConfig::default()).unwrap_err();
    assert!(matches!(err, RankError::Parse { line: 2, .. }), "{err}");
}

#[test]
fn test_empty_graph_is_rejected() {
    let err = rank_records(Vec::<String>::new(), RankConfig::default()).unwrap_err();
    assert!(matches!(err, RankError::EmptyGraph));
}

#[test]
fn test_contributor_without_outbound_edges_is_degree_zero() {
    let g = GraphIndex::from_adjacency(
        owned(&[("a", &["b"]), ("b", &["a"])]),
        owned(&[("a", &["b", "ghost"]), ("b", &["a"])]),
    );
    let err = RankEngine::new(&g, RankConfig::default())
        .unwrap()
        .run()
        .unwrap_err();
    match err {
        RankError::DegreeZero { node, contributor } => {
            assert_eq!(node, "a");
            assert_eq!(contributor, "ghost");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_outbound_entry_as_contributor_is_degree_zero() {
    let g = GraphIndex::from_adjacency(
        owned(&[("a", &[]), ("b", &["a"])]),
        owned(&[("b", &["a"])]),
    );
    let err = RankEngine::new(&g, RankConfig::default())
        .unwrap()
        .run()
        .unwrap_err();
    assert!(matches!(err, RankError::DegreeZero { .. }), "{err}");
}

#[test]
fn test_invalid_parameters_are_rejected_before_iterating() {
    let g = graph(&[("a", "b")]);
    let err = RankEngine::new(&g, RankConfig::new(-0.1, 1e-6)).err().unwrap();
    assert!(matches!(err, RankError::InvalidParameter(_)));
}

#[test]
fn test_iteration_ceiling_reports_non_convergence() {
    let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("a", "c")]);
    let err = RankEngine::new(&g, RankConfig::default().with_max_iterations(2))
        .unwrap()
        .run()
        .unwrap_err();
    match err {
        RankError::NonConvergence {
            iterations,
            partial,
            ..
        } => {
            assert_eq!(iterations, 2);
            assert_eq!(partial.ranks.len(), 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_observer_sees_every_iteration() {
    let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("a", "c")]);
    let engine = RankEngine::new(&g, RankConfig::new(0.85, 1e-10)).unwrap();
    let mut seen = Vec::new();
    let run = engine
        .run_with(&mut |e: &IterationEvent| seen.push((e.iteration, e.distance)))
        .unwrap();

    assert_eq!(seen.len(), run.iterations());
    assert!(seen.iter().enumerate().all(|(i, (it, _))| i == *it));
    let traced: Vec<f64> = seen.iter().map(|(_, d)| *d).collect();
    assert_eq!(traced.as_slice(), run.trace.distances());
}

#[test]
fn test_step_rejects_snapshot_from_a_different_graph() {
    let single = graph(&[("x", "x")]);
    let err = RankEngine::new(&single, RankConfig::default().with_max_iterations(2))
        .unwrap()
        .run()
        .unwrap_err();
    let foreign = err.partial_run().unwrap().ranks.clone();

    let cycle = graph(&[("a", "b"), ("b", "c"), ("c", "a")]);
    let engine = RankEngine::new(&cycle, RankConfig::default()).unwrap();
    let err = engine.step(&foreign).unwrap_err();
    assert!(matches!(err, RankError::InvalidParameter(_)), "{err}");
}

#[test]
fn test_lookup_by_node_on_large_universe() {
    let records: Vec<String> = (0..2000).map(|i| format!("{i} {}", (i + 1) % 2000)).collect();
    let g = GraphIndex::try_build(linkrank_core::edges::parse_records(&records)).unwrap();
    let run = RankEngine::new(&g, RankConfig::default()).unwrap().run().unwrap();
    for (node, score) in run.ranks.iter() {
        assert_eq!(run.ranks.get(node), Some(score));
    }
    assert_eq!(run.ranks.get("2000"), None);
}
