//! Output formatting for command results

use anyhow::{Context, Result};
use camino::Utf8Path;
use colored::Colorize;
use graphlens_core::Graph;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};

use crate::cli::OutputFormat;

/// Output formatter for command results
pub struct OutputFormatter {
    /// JSON style
    format: OutputFormat,

    /// Colorize output
    colorize: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(format: OutputFormat, colorize: bool) -> Self {
        Self { format, colorize }
    }

    /// Serialize `value` in the configured JSON style
    pub fn format_json<T: Serialize>(&self, value: &T) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value),
            OutputFormat::Compact => serde_json::to_string(value),
        }
        .context("Failed to serialize to JSON")
    }

    /// Write `value` as JSON to `output_path`, or to stdout when no path is given
    pub fn write_json<T: Serialize>(&self, value: &T, output_path: Option<&Utf8Path>) -> Result<()> {
        let content = self.format_json(value)?;

        match output_path {
            Some(path) => fs::write(path, content + "\n")
                .with_context(|| format!("Failed to write output to {}", path))?,
            None => println!("{}", content),
        }

        Ok(())
    }

    /// Print graph statistics under a header naming the graph
    pub fn print_stats(&self, graph: &Graph) -> Result<()> {
        let mut stdout = io::stdout();
        let title = format!("{} ({})", graph.name, graph.id);

        if self.colorize {
            writeln!(stdout, "{} {}", "Graph:".bold(), title.bright_yellow())?;
        } else {
            writeln!(stdout, "Graph: {}", title)?;
        }

        write!(stdout, "{}", graph.statistics())?;
        stdout.flush()?;
        Ok(())
    }

    /// Print node ids one per line
    pub fn print_order(&self, ids: &[&str]) -> Result<()> {
        let mut stdout = io::stdout();
        for id in ids {
            writeln!(stdout, "{}", id)?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print success message
    pub fn print_success(&self, message: &str) {
        if self.colorize {
            println!("{} {}", "✓".green().bold(), message);
        } else {
            println!("✓ {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_formatter_creation() {
        let formatter = OutputFormatter::new(OutputFormat::Json, true);
        assert!(matches!(formatter.format, OutputFormat::Json));
        assert!(formatter.colorize);
    }

    #[test]
    fn test_format_json_styles() {
        let value = json!({ "a": [1, 2] });

        let pretty = OutputFormatter::new(OutputFormat::Json, false).format_json(&value).unwrap();
        assert!(pretty.contains('\n'));

        let compact = OutputFormatter::new(OutputFormat::Compact, false).format_json(&value).unwrap();
        assert_eq!(compact, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::try_from(dir.path().join("out.json")).unwrap();

        let formatter = OutputFormatter::new(OutputFormat::Compact, false);
        formatter.write_json(&json!({ "ok": true }), Some(&path)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"ok\":true}\n");
    }
}
