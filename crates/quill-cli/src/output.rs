//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde_json::Value;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single document
    pub fn print_document(&self, collection: &str, resource: &str, doc: &Value) {
        match self.format {
            OutputFormat::Human => {
                println!("── {}/{} ──", collection, resource);
                println!("{}", pretty(doc));
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "collection": collection,
                        "resource": resource,
                        "document": doc
                    })
                );
            }
            OutputFormat::Quiet => {
                println!("{}", doc);
            }
        }
    }

    /// Print every document of a collection
    pub fn print_documents(&self, collection: &str, docs: &[Value]) {
        match self.format {
            OutputFormat::Human => {
                if docs.is_empty() {
                    println!("No documents in '{}'.", collection);
                    return;
                }
                for doc in docs {
                    println!("{}", summarize(doc, 70));
                }
                println!("\n{} document(s) in '{}'", docs.len(), collection);
            }
            OutputFormat::Json => {
                println!("{}", Value::Array(docs.to_vec()));
            }
            OutputFormat::Quiet => {
                println!("{}", docs.len());
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }
}

fn pretty(doc: &Value) -> String {
    serde_json::to_string_pretty(doc).unwrap_or_else(|_| doc.to_string())
}

/// One-line compact rendering, truncated to `max_len` characters
fn summarize(doc: &Value, max_len: usize) -> String {
    let line = doc.to_string();
    if line.chars().count() <= max_len {
        line
    } else {
        let head: String = line.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_summarize() {
        let doc = serde_json::json!({"type": "red"});
        assert_eq!(summarize(&doc, 70), r#"{"type":"red"}"#);

        let long = serde_json::json!({"name": "x".repeat(100)});
        let line = summarize(&long, 20);
        assert_eq!(line.chars().count(), 20);
        assert!(line.ends_with("..."));
    }

    #[test]
    fn test_summarize_multibyte() {
        let doc = serde_json::json!("ééééééééééééééé");
        let line = summarize(&doc, 10);
        assert_eq!(line.chars().count(), 10);
    }
}
