use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::FormPayload;

use super::DocumentFormat;

/// Where an accepted payload is written once the form closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }

    fn write(&self, text: &str) -> Result<()> {
        match self {
            OutputDestination::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{text}")
                    .and_then(|_| stdout.flush())
                    .context("failed to write to stdout")
            }
            OutputDestination::File(path) => fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write to file {}", path.display())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Serialize in the configured format. Struct field order is preserved.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self.format {
            DocumentFormat::Json if self.pretty => {
                serde_json::to_string_pretty(value).context("failed to serialize JSON")
            }
            DocumentFormat::Json => serde_json::to_string(value).context("failed to serialize JSON"),
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => serde_yaml::to_string(value)
                .map(|text| text.trim_end().to_string())
                .context("failed to serialize YAML"),
            #[cfg(feature = "toml")]
            DocumentFormat::Toml if self.pretty => toml::to_string_pretty(value)
                .map(|text| text.trim_end().to_string())
                .context("failed to serialize TOML"),
            #[cfg(feature = "toml")]
            DocumentFormat::Toml => toml::to_string(value)
                .map(|text| text.trim_end().to_string())
                .context("failed to serialize TOML"),
        }
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Render once and write the result to every destination.
pub fn emit<T: Serialize + ?Sized>(value: &T, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let text = options.render(value)?;
    options
        .destinations
        .iter()
        .try_for_each(|destination| destination.write(&text))
}

/// Pretty JSON shown in the result panel.
pub fn render_payload(payload: &FormPayload) -> Result<String> {
    OutputOptions::default().render(payload)
}
