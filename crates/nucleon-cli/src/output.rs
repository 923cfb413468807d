use crate::cli::OutputFormat;
use crate::config::OutputSettings;
use crate::error::Result;
use serde::Serialize;
use std::fmt::Write;

/// Plain-text rendering of a command result, with energies and masses printed to
/// `precision` decimals.
pub trait TextRender {
    fn render_text(&self, precision: usize) -> String;
}

pub struct Renderer {
    settings: OutputSettings,
}

impl Renderer {
    pub fn new(settings: OutputSettings) -> Self {
        Self { settings }
    }

    pub fn render<T>(&self, value: &T) -> Result<String>
    where
        T: Serialize + TextRender + ?Sized,
    {
        match self.settings.format {
            OutputFormat::Text => Ok(value.render_text(self.settings.precision)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

pub fn number(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// `n/a` for observables whose daughter lies outside the nuclide domain.
pub fn optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| number(v, precision))
}

/// Writes `label: value unit` lines with the labels padded to a common width.
#[derive(Default)]
pub struct Lines {
    buffer: String,
}

impl Lines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, text: &str) -> &mut Self {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        let _ = writeln!(self.buffer, "{}", text);
        self
    }

    pub fn field(&mut self, label: &str, value: impl std::fmt::Display, unit: &str) -> &mut Self {
        let _ = if unit.is_empty() {
            writeln!(self.buffer, "  {:<28} {}", label, value)
        } else {
            writeln!(self.buffer, "  {:<28} {} {}", label, value, unit)
        };
        self
    }

    pub fn finish(&mut self) -> String {
        std::mem::take(&mut self.buffer).trim_end().to_string()
    }
}
