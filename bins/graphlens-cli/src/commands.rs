//! Subcommand implementations

use anyhow::{bail, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use graphlens_core::{flatten_rows, DependencyGraph, Graph};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::output::OutputFormatter;

/// Convert a CLI path argument to UTF-8
fn utf8_path(path: PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path.clone()).with_context(|| format!("Invalid UTF-8 path: {:?}", path))
}

/// Read and normalize a graph document
pub fn load_graph(input_path: &Utf8Path) -> Result<Graph> {
    if !input_path.exists() {
        bail!("Input file not found: {}", input_path);
    }

    let content = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read file: {}", input_path))?;

    let graph = graphlens_core::parse(&content)
        .with_context(|| format!("Failed to load graph from {}", input_path))?;

    info!(
        "Loaded graph '{}': {} tensors, {} nodes, {} edges",
        graph.id,
        graph.tensors.len(),
        graph.nodes.len(),
        graph.edges.len()
    );

    Ok(graph)
}

/// Normalize a graph and write it as JSON
pub fn parse(
    formatter: &OutputFormatter,
    quiet: bool,
    input: PathBuf,
    output: Option<PathBuf>,
) -> Result<()> {
    let input_path = utf8_path(input)?;
    let graph = load_graph(&input_path)?;

    let output_path = output.map(utf8_path).transpose()?;
    formatter.write_json(&graph, output_path.as_deref())?;

    if let (Some(path), false) = (&output_path, quiet) {
        formatter.print_success(&format!("Normalized {} → {}", input_path, path));
    }

    Ok(())
}

/// Print statistics for a graph
pub fn info(formatter: &OutputFormatter, input: PathBuf) -> Result<()> {
    let graph = load_graph(&utf8_path(input)?)?;
    formatter.print_stats(&graph)
}

/// Flatten operator nodes into rows and write them as JSON
pub fn rows(
    formatter: &OutputFormatter,
    quiet: bool,
    input: PathBuf,
    output: Option<PathBuf>,
) -> Result<()> {
    let input_path = utf8_path(input)?;
    let graph = load_graph(&input_path)?;
    let table = flatten_rows(&graph.nodes);

    let output_path = output.map(utf8_path).transpose()?;
    formatter.write_json(&table, output_path.as_deref())?;

    if let (Some(path), false) = (&output_path, quiet) {
        formatter.print_success(&format!(
            "Wrote {} rows × {} columns → {}",
            table.len(),
            table.columns.len(),
            path
        ));
    }

    Ok(())
}

/// Print node ids in dependency order
pub fn order(formatter: &OutputFormatter, input: PathBuf) -> Result<()> {
    let graph = load_graph(&utf8_path(input)?)?;
    let deps = DependencyGraph::new(&graph);
    let order = deps.topological_order().context("Failed to order graph nodes")?;
    formatter.print_order(&order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn graph_file(contents: &str) -> (NamedTempFile, Utf8PathBuf) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file.flush().unwrap();
        let path = Utf8PathBuf::try_from(file.path().to_path_buf()).unwrap();
        (file, path)
    }

    #[test]
    fn test_load_graph() {
        let (_file, path) = graph_file(r#"{"tensors": [{"name": "input"}], "nodes": []}"#);
        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.inputs, vec![0]);
    }

    #[test]
    fn test_load_graph_missing_file() {
        let err = load_graph(Utf8Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(err.to_string().contains("Input file not found"));
    }

    #[test]
    fn test_load_graph_format_error_message() {
        let (_file, path) = graph_file(r#"{"foo": 1}"#);
        let err = load_graph(&path).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            format!("Failed to load graph from {}: Invalid graph: missing tensors or nodes", path)
        );
    }
}
