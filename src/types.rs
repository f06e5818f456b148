use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;

/// Serialization format of a task batch file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    /// Pick a format from the file extension: `.json` is JSON, anything
    /// else (including no extension) is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "toml" => Ok(InputFormat::Toml),
            "json" => Ok(InputFormat::Json),
            other => Err(format!(
                "invalid input format: {other} (expected \"toml\" or \"json\")"
            )),
        }
    }
}

/// How the recommended order is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered list, one title per line.
    Text,
    /// `{"recommendedOrder": [...], "status": {...}}`
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}
