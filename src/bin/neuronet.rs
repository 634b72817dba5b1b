//! CLI entry point for the `neuronet` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use neuronet::cli::commands;
use neuronet::engine::TraversalParams;
use neuronet::graph::LoadOptions;
use neuronet::types::{GraphError, NodeId, DEFAULT_PROGRESS_INTERVAL};

#[derive(Parser)]
#[command(
    name = "neuronet",
    about = "neuronet CLI: CSR graph loading and bounded traversal"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Read the edge list through a memory map
    #[arg(long)]
    mmap: bool,

    /// Log read progress every N valid edges (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: usize,

    /// Treat lines naming an id above N as malformed
    #[arg(long)]
    max_node_id: Option<NodeId>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an edge list and print graph statistics
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List the out-neighbors of a node
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node ID
        node: NodeId,
    },
    /// Bounded breadth-first search
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting node ID
        origin: NodeId,
        /// Maximum traversal depth
        #[arg(long, default_value = "2")]
        depth: u32,
    },
    /// Bounded depth-first search
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting node ID
        origin: NodeId,
        /// Maximum traversal depth
        #[arg(long, default_value = "2")]
        depth: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = LoadOptions {
        progress_interval: cli.progress_interval,
        max_node_id: cli.max_node_id,
        ..LoadOptions::default()
    };
    let mmap = cli.mmap;

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, options, mmap, json),
        Commands::Neighbors { file, node } => {
            commands::cmd_neighbors(&file, node, options, mmap, json)
        }
        Commands::Bfs {
            file,
            origin,
            depth,
        } => commands::cmd_traverse(
            &file,
            TraversalParams::bfs(origin, depth),
            options,
            mmap,
            json,
        ),
        Commands::Dfs {
            file,
            origin,
            depth,
        } => commands::cmd_traverse(
            &file,
            TraversalParams::dfs(origin, depth),
            options,
            mmap,
            json,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::SourceUnreadable { .. } => 1,
            GraphError::EmptyOrInvalidInput => 2,
        };
        process::exit(code);
    }
}
