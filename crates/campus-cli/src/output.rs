//! CLI output helpers: human-readable by default, JSON with `--json`.

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Print a success line (human) or a `{"success": true, ...}` object.
pub fn success(format: OutputFormat, message: &str) {
    match format {
        OutputFormat::Human => println!("\u{2713} {message}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "success": true, "message": message })
        ),
    }
}

/// Print an indented detail line; suppressed in JSON mode.
pub fn info(format: OutputFormat, message: &str) {
    if format == OutputFormat::Human {
        println!("  {message}");
    }
}

/// Print a JSON value; suppressed in human mode (callers print their own
/// human rendering).
pub fn json(format: OutputFormat, value: &serde_json::Value) {
    if format == OutputFormat::Json {
        println!("{value}");
    }
}
