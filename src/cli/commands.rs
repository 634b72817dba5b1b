//! CLI command implementations.

use std::path::Path;

use crate::engine::{TraversalEngine, TraversalParams};
use crate::graph::{CsrGraph, GraphBuilder, LoadOptions, SparseGraph};
use crate::types::{GraphResult, NodeId};

/// Load `path` with the given options, through a memory map if `mmap` is set.
pub fn load_graph(path: &Path, options: LoadOptions, mmap: bool) -> GraphResult<CsrGraph> {
    let mut builder = GraphBuilder::with_options(options);
    if mmap {
        builder.load_mmap(path)
    } else {
        builder.load_path(path)
    }
}

/// Display information about an edge-list file.
pub fn cmd_info(path: &Path, options: LoadOptions, mmap: bool, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, options, mmap)?;
    let stats = graph.stats();
    let hub = graph.node_with_max_degree();
    let hub_degree = hub.and_then(|n| graph.out_degree(n)).unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "max_degree_node": hub,
            "max_degree": hub_degree,
            "memory_bytes": graph.estimated_memory_bytes(),
            "memory_mb": graph.estimated_memory_mb(),
            "load": stats,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        match hub {
            Some(node) => println!("Max degree: node {} ({} out-edges)", node, hub_degree),
            None => println!("Max degree: -"),
        }
        println!(
            "Memory (estimated): {}",
            format_size(graph.estimated_memory_bytes() as u64)
        );
        println!("Load time: {:.2} ms", stats.duration_ms);
        println!("Loaded at: {}", format_timestamp(stats.loaded_at));
        println!("Lines:");
        println!("  Read: {}", stats.lines_read);
        println!("  Valid edges: {}", stats.valid_edges);
        println!("  Blank: {}", stats.blank_lines);
        println!("  Comments: {}", stats.comment_lines);
        println!("  Malformed: {}", stats.malformed_lines);
    }
    Ok(())
}

/// List the out-neighbors of a node.
pub fn cmd_neighbors(
    path: &Path,
    node: NodeId,
    options: LoadOptions,
    mmap: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, options, mmap)?;
    let engine = TraversalEngine::new(&graph);
    let neighbors = engine.neighbors(node);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "node": node,
                "degree": engine.degree(node),
                "neighbors": neighbors,
            })
        );
    } else if engine.degree(node).is_none() {
        println!(
            "Node {} is out of range (graph has {} nodes)",
            node,
            graph.node_count()
        );
    } else {
        println!("Node {} ({} out-edges)", node, neighbors.len());
        for neighbor in &neighbors {
            println!("  -> {}", neighbor);
        }
    }
    Ok(())
}

/// Run a bounded BFS or DFS.
pub fn cmd_traverse(
    path: &Path,
    params: TraversalParams,
    options: LoadOptions,
    mmap: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, options, mmap)?;
    let result = TraversalEngine::new(&graph).traverse(params);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
        return Ok(());
    }

    if result.is_empty() {
        println!(
            "Node {} is out of range (graph has {} nodes)",
            params.origin,
            graph.node_count()
        );
        return Ok(());
    }

    println!(
        "{} from {} (max depth {}): {} nodes, {} edges, {} levels",
        params.order.name().to_uppercase(),
        params.origin,
        params.max_depth,
        result.nodes.len(),
        result.edges.len(),
        result.levels_explored()
    );
    let nodes: Vec<String> = result.nodes.iter().map(|n| n.to_string()).collect();
    println!("Nodes: {}", nodes.join(" "));
    println!("Edges:");
    for edge in &result.edges {
        println!("  {}", edge);
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

fn format_timestamp(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    let dt = chrono::DateTime::from_timestamp(secs, 0);
    match dt {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} us", micros),
    }
}
