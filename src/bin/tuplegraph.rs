//! tuplegraph CLI: run the tuple graph pipeline over files or stdin.
//!
//! Usage:
//!   tuplegraph parse [FILE] [--columns a,b,c] [--config path] [--report]
//!   tuplegraph render [FILE]
//!   tuplegraph types [FILE]
//!   tuplegraph schema

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use tuplegraph::{
    extract_node_types, graph_json_schema, to_tuple_string, Graph, Pipeline, PipelineConfig,
};

#[derive(Parser)]
#[command(
    name = "tuplegraph",
    version,
    about = "Parse and normalize LLM-generated tuple graphs"
)]
struct Cli {
    /// Log pipeline summaries to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse tuple text and print the normalized graph as JSON
    Parse {
        /// Tuple text file (stdin when omitted)
        file: Option<PathBuf>,
        /// Comma-separated source column names to attach as provenance
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
        /// Path to a YAML pipeline configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print dropped-line counts to stderr
        #[arg(long)]
        report: bool,
    },
    /// Render graph JSON back into tuple text
    Render {
        /// Graph JSON file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print per-type node counts and property names as JSON
    Types {
        /// Graph JSON file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print the JSON Schema of the graph format
    Schema,
}

fn read_input(file: Option<&Path>) -> Result<String, String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            Ok(buf)
        }
    }
}

fn read_graph(file: Option<&Path>) -> Result<Graph, String> {
    let json = read_input(file)?;
    Graph::from_json(&json).map_err(|e| e.to_string())
}

fn cmd_parse(
    file: Option<&Path>,
    columns: &[String],
    config: Option<&Path>,
    report: bool,
) -> Result<(), String> {
    let config = match config {
        Some(path) => PipelineConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {}", path.display(), e))?,
        None => PipelineConfig::default(),
    };
    let text = read_input(file)?;

    let output = Pipeline::new(config).run(&text, Some(columns));
    if report {
        eprintln!("{}", output.report);
    }

    let json = output.graph.to_json_pretty().map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn cmd_render(file: Option<&Path>) -> Result<(), String> {
    let graph = read_graph(file)?;
    print!("{}", to_tuple_string(&graph));
    Ok(())
}

fn cmd_types(file: Option<&Path>) -> Result<(), String> {
    let graph = read_graph(file)?;
    let types = extract_node_types(&graph);
    let json = serde_json::to_string_pretty(&types).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn cmd_schema() -> Result<(), String> {
    let json = serde_json::to_string_pretty(&graph_json_schema()).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let result = match cli.command {
        Commands::Parse {
            file,
            columns,
            config,
            report,
        } => cmd_parse(file.as_deref(), &columns, config.as_deref(), report),
        Commands::Render { file } => cmd_render(file.as_deref()),
        Commands::Types { file } => cmd_types(file.as_deref()),
        Commands::Schema => cmd_schema(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
