//! Output context and mode detection.
//!
//! # Mode Selection Logic
//!
//! 1. `--json` flag (or `json: true` in config) → JSON mode
//! 2. `--quiet` flag → Quiet mode
//! 3. Otherwise → Plain mode
//!
//! Quiet mode suppresses result output only; errors are still reported.

use crate::error::Result;
use serde::Serialize;

/// Output mode determining formatting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable lines.
    #[default]
    Plain,

    /// Pretty-printed JSON for machine consumption.
    Json,

    /// No result output.
    Quiet,
}

/// Where command output goes and in which shape.
#[derive(Debug, Clone, Default)]
pub struct OutputContext {
    mode: OutputMode,
}

impl OutputContext {
    /// Create context from CLI flags. JSON wins over quiet.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Plain
        };
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.mode, OutputMode::Json)
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        matches!(self.mode, OutputMode::Quiet)
    }

    /// Print a value as pretty JSON on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn json_pretty<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        if self.is_quiet() {
            return Ok(());
        }
        let json = serde_json::to_string_pretty(value)?;
        println!("{json}");
        Ok(())
    }

    /// Print text exactly as given, with no trailing newline added.
    pub fn raw(&self, text: &str) {
        if !self.is_quiet() {
            print!("{text}");
        }
    }

    /// Print a line of human-readable output unless quiet.
    pub fn line(&self, text: &str) {
        if !self.is_quiet() {
            println!("{text}");
        }
    }
}
