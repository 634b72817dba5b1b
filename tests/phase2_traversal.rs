//! Phase 2 tests: bounded BFS / DFS + traversal engine.

use std::collections::{HashMap, HashSet, VecDeque};

use neuronet::engine::{TraversalEngine, TraversalParams};
use neuronet::graph::{
    bounded_bfs, bounded_dfs, CsrGraph, GraphBuilder, SparseGraph, TraversalOrder,
};
use neuronet::types::{Edge, NodeId};

use rand::Rng;

const SAMPLE: &str = "0 1\n1 2\n0 2\n# comment\n\n2 0\n";

// ==================== Helpers ====================

fn load(text: &str) -> CsrGraph {
    GraphBuilder::new().load_str(text).unwrap()
}

fn edges(pairs: &[(NodeId, NodeId)]) -> Vec<Edge> {
    pairs.iter().map(|&p| Edge::from(p)).collect()
}

fn random_graph(nodes: NodeId, edge_count: usize) -> CsrGraph {
    let mut rng = rand::thread_rng();
    let list: Vec<Edge> = (0..edge_count)
        .map(|_| Edge::new(rng.gen_range(0..nodes), rng.gen_range(0..nodes)))
        .chain(std::iter::once(Edge::new(nodes - 1, 0)))
        .collect();
    GraphBuilder::new().from_edges(list).unwrap()
}

/// Hop distances from `origin`, computed independently of the library.
fn distances(graph: &CsrGraph, origin: NodeId) -> HashMap<NodeId, u32> {
    let mut dist = HashMap::new();
    dist.insert(origin, 0);
    let mut frontier = VecDeque::from([origin]);
    while let Some(node) = frontier.pop_front() {
        let d = dist[&node];
        for &next in graph.neighbors(node) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                frontier.push_back(next);
            }
        }
    }
    dist
}

/// Depth-limited recursive DFS used as the ordering reference.
fn recursive_dfs(
    graph: &CsrGraph,
    node: NodeId,
    depth: u32,
    max_depth: u32,
    parent: Option<NodeId>,
    visited: &mut HashSet<NodeId>,
    nodes: &mut Vec<NodeId>,
    tree: &mut Vec<Edge>,
) {
    if !visited.insert(node) {
        return;
    }
    nodes.push(node);
    if let Some(parent) = parent {
        tree.push(Edge::new(parent, node));
    }
    if depth >= max_depth {
        return;
    }
    for &next in graph.neighbors(node) {
        recursive_dfs(graph, next, depth + 1, max_depth, Some(node), visited, nodes, tree);
    }
}

/// Adjacency-list backing, used to check traversals only rely on the trait.
struct AdjacencyList {
    rows: Vec<Vec<NodeId>>,
}

impl SparseGraph for AdjacencyList {
    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn edge_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.rows.get(node as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    fn estimated_memory_bytes(&self) -> usize {
        self.edge_count() * std::mem::size_of::<NodeId>()
    }
}

// ==================== Query Tests ====================

#[test]
fn test_degree_and_neighbors() {
    let graph = load(SAMPLE);
    let engine = TraversalEngine::new(&graph);

    assert_eq!(engine.degree(0), Some(2));
    assert_eq!(engine.degree(2), Some(1));
    assert_eq!(engine.degree(3), None);
    assert_eq!(engine.neighbors(0), vec![1, 2]);
    assert!(engine.neighbors(3).is_empty());
    assert!(engine.neighbors(NodeId::MAX).is_empty());
    assert_eq!(engine.node_with_max_degree(), Some(0));
}

#[test]
fn test_max_degree_tie_goes_to_smallest_id() {
    let graph = load("3 0\n3 1\n1 0\n1 2\n4 4\n");
    assert_eq!(graph.node_with_max_degree(), Some(1));

    let graph = load("5 5\n");
    assert_eq!(graph.node_with_max_degree(), Some(5));
}

#[test]
fn test_neighbors_copy_outlives_graph() {
    let copy = {
        let graph = load(SAMPLE);
        TraversalEngine::new(&graph).neighbors(0)
    };
    assert_eq!(copy, vec![1, 2]);
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_sample_depth_one() {
    let graph = load(SAMPLE);
    let result = bounded_bfs(&graph, 0, 1);

    assert_eq!(result.order, TraversalOrder::BreadthFirst);
    assert_eq!(result.nodes, vec![0, 1, 2]);
    assert_eq!(result.edges, edges(&[(0, 1), (0, 2)]));
    assert_eq!(result.depth_reached, 1);
    assert_eq!(result.levels_explored(), 2);
}

#[test]
fn test_bfs_records_edges_to_visited_nodes() {
    let graph = load(SAMPLE);
    let result = bounded_bfs(&graph, 0, 5);

    assert_eq!(result.nodes, vec![0, 1, 2]);
    // 1 -> 2 and 2 -> 0 lead to visited nodes and are still recorded.
    assert_eq!(result.edges, edges(&[(0, 1), (0, 2), (1, 2), (2, 0)]));
}

#[test]
fn test_bfs_depth_zero() {
    let graph = load(SAMPLE);
    for origin in 0..3 {
        let result = bounded_bfs(&graph, origin, 0);
        assert_eq!(result.nodes, vec![origin]);
        assert!(result.edges.is_empty());
        assert_eq!(result.depth_reached, 0);
    }
}

#[test]
fn test_bfs_out_of_range_origin() {
    let graph = load(SAMPLE);
    let result = bounded_bfs(&graph, 3, 4);
    assert!(result.is_empty());
    assert!(result.edges.is_empty());
    assert_eq!(result.levels_explored(), 0);
}

#[test]
fn test_bfs_self_loop_and_duplicates() {
    let graph = load("0 0\n0 1\n0 1\n");
    let result = bounded_bfs(&graph, 0, 1);

    assert_eq!(result.nodes, vec![0, 1]);
    assert_eq!(result.edges, edges(&[(0, 0), (0, 1), (0, 1)]));
}

#[test]
fn test_bfs_unreachable_nodes_absent() {
    let graph = load("0 1\n2 3\n");
    let result = bounded_bfs(&graph, 0, 10);
    assert_eq!(result.nodes, vec![0, 1]);
}

#[test]
fn test_bfs_visits_exactly_reachable_within_depth() {
    let graph = random_graph(200, 500);
    for max_depth in [0, 1, 2, 3, 6] {
        let origin = 0;
        let expected: HashSet<NodeId> = distances(&graph, origin)
            .into_iter()
            .filter(|&(_, d)| d <= max_depth)
            .map(|(n, _)| n)
            .collect();

        let result = bounded_bfs(&graph, origin, max_depth);
        let visited: HashSet<NodeId> = result.nodes.iter().copied().collect();

        assert_eq!(visited.len(), result.nodes.len(), "duplicate visit");
        assert_eq!(visited, expected, "max_depth {}", max_depth);
        assert_eq!(result.nodes[0], origin);
    }
}

#[test]
fn test_bfs_edge_count_matches_expanded_degrees() {
    let graph = random_graph(150, 400);
    let max_depth = 2;
    let dist = distances(&graph, 0);
    let expected: usize = dist
        .iter()
        .filter(|&(_, &d)| d < max_depth)
        .map(|(&n, _)| graph.out_degree(n).unwrap())
        .sum();

    let result = bounded_bfs(&graph, 0, max_depth);
    assert_eq!(result.edges.len(), expected);
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_sample_depth_two() {
    let graph = load(SAMPLE);
    let result = bounded_dfs(&graph, 0, 2);

    assert_eq!(result.order, TraversalOrder::DepthFirst);
    assert_eq!(result.nodes, vec![0, 1, 2]);
    assert_eq!(result.edges, edges(&[(0, 1), (1, 2)]));
    assert_eq!(result.depth_reached, 2);
}

#[test]
fn test_dfs_depth_zero() {
    let graph = load(SAMPLE);
    let result = bounded_dfs(&graph, 1, 0);
    assert_eq!(result.nodes, vec![1]);
    assert!(result.edges.is_empty());
}

#[test]
fn test_dfs_out_of_range_origin() {
    let graph = load(SAMPLE);
    assert!(bounded_dfs(&graph, 42, 3).is_empty());
}

#[test]
fn test_dfs_depth_limit_stops_expansion() {
    let graph = load("0 1\n1 2\n2 3\n3 4\n");
    let result = bounded_dfs(&graph, 0, 2);

    assert_eq!(result.nodes, vec![0, 1, 2]);
    assert_eq!(result.edges, edges(&[(0, 1), (1, 2)]));
}

#[test]
fn test_dfs_stale_frame_skipped_at_pop() {
    // 0 -> [1, 3], 1 -> 3: node 3 is pushed twice but visited once, via 1.
    let graph = load("0 1\n0 3\n1 3\n");
    let result = bounded_dfs(&graph, 0, 3);

    assert_eq!(result.nodes, vec![0, 1, 3]);
    assert_eq!(result.edges, edges(&[(0, 1), (1, 3)]));
}

#[test]
fn test_dfs_matches_recursive_order() {
    for _ in 0..10 {
        let graph = random_graph(120, 300);
        for max_depth in [1, 3, 8] {
            let mut visited = HashSet::new();
            let mut nodes = Vec::new();
            let mut tree = Vec::new();
            recursive_dfs(&graph, 0, 0, max_depth, None, &mut visited, &mut nodes, &mut tree);

            let result = bounded_dfs(&graph, 0, max_depth);
            assert_eq!(result.nodes, nodes, "max_depth {}", max_depth);
            assert_eq!(result.edges, tree, "max_depth {}", max_depth);
        }
    }
}

#[test]
fn test_dfs_tree_edges_form_tree() {
    let graph = random_graph(200, 600);
    let origin = 0;
    let max_depth = 5;
    let result = bounded_dfs(&graph, origin, max_depth);

    assert_eq!(result.edges.len(), result.nodes.len() - 1);

    let visited: HashSet<NodeId> = result.nodes.iter().copied().collect();
    assert_eq!(visited.len(), result.nodes.len());

    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    for edge in &result.edges {
        assert!(graph.neighbors(edge.origin).contains(&edge.destination));
        assert!(visited.contains(&edge.origin));
        assert!(
            parent.insert(edge.destination, edge.origin).is_none(),
            "node {} has two tree parents",
            edge.destination
        );
    }
    assert!(!parent.contains_key(&origin));

    // Every tree path back to the origin is at most max_depth hops.
    for &node in &result.nodes {
        let mut hops = 0;
        let mut current = node;
        while let Some(&p) = parent.get(&current) {
            current = p;
            hops += 1;
        }
        assert_eq!(current, origin);
        assert!(hops <= max_depth);
    }
}

// ==================== Engine Tests ====================

#[test]
fn test_engine_traverse_dispatch() {
    let graph = load(SAMPLE);
    let engine = TraversalEngine::new(&graph);

    let bfs = engine.traverse(TraversalParams::bfs(0, 1));
    let dfs = engine.traverse(TraversalParams::dfs(0, 2));

    assert_eq!(bfs, engine.bounded_bfs(0, 1));
    assert_eq!(dfs, engine.bounded_dfs(0, 2));
    assert_eq!(bfs.order, TraversalOrder::BreadthFirst);
    assert_eq!(dfs.order, TraversalOrder::DepthFirst);
}

#[test]
fn test_traversal_is_deterministic() {
    let graph = random_graph(100, 400);
    let engine = TraversalEngine::new(&graph);
    for origin in [0, 17, 99] {
        assert_eq!(engine.bounded_bfs(origin, 4), engine.bounded_bfs(origin, 4));
        assert_eq!(engine.bounded_dfs(origin, 4), engine.bounded_dfs(origin, 4));
    }
}

#[test]
fn test_engines_share_graph_across_threads() {
    let graph = random_graph(300, 1_200);
    let expected = bounded_bfs(&graph, 0, 3);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = TraversalEngine::new(&graph);
                scope.spawn(move || engine.bounded_bfs(0, 3))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_order_names() {
    assert_eq!(TraversalOrder::from_name("BFS"), Some(TraversalOrder::BreadthFirst));
    assert_eq!(
        TraversalOrder::from_name("depth_first"),
        Some(TraversalOrder::DepthFirst)
    );
    assert_eq!(TraversalOrder::from_name("dijkstra"), None);
    assert_eq!(TraversalOrder::DepthFirst.to_string(), "dfs");
}

#[test]
fn test_result_serializes() {
    let graph = load(SAMPLE);
    let json = serde_json::to_value(bounded_bfs(&graph, 0, 1)).unwrap();

    assert_eq!(json["order"], "breadth_first");
    assert_eq!(json["nodes"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["edges"][1]["destination"], 2);
}

// ==================== Alternative Backing Tests ====================

#[test]
fn test_traversals_over_adjacency_list() {
    let csr = load(SAMPLE);
    let adjacency = AdjacencyList {
        rows: vec![vec![1, 2], vec![2], vec![0]],
    };

    assert_eq!(bounded_bfs(&adjacency, 0, 1), bounded_bfs(&csr, 0, 1));
    assert_eq!(bounded_dfs(&adjacency, 0, 2), bounded_dfs(&csr, 0, 2));
    assert_eq!(adjacency.node_with_max_degree(), Some(0));
    assert_eq!(adjacency.out_degree(2), Some(1));
    assert_eq!(adjacency.out_degree(3), None);

    let engine: TraversalEngine<'_, dyn SparseGraph> = TraversalEngine::new(&adjacency);
    assert_eq!(engine.neighbors(0), vec![1, 2]);
}

#[test]
fn test_empty_backing_gives_empty_results() {
    let empty = AdjacencyList { rows: Vec::new() };
    let engine = TraversalEngine::new(&empty);

    assert_eq!(engine.node_with_max_degree(), None);
    assert_eq!(engine.degree(0), None);
    assert!(engine.neighbors(0).is_empty());
    assert!(engine.bounded_bfs(0, 3).is_empty());
    assert!(engine.bounded_dfs(0, 3).is_empty());
}
