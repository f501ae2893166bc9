//! Per-invocation action state: logger, output sink and warning records.

use log::{Level, log};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Logger handed to action steps.
///
/// Writes through the `log` facade with the action id as target, so
/// `RUST_LOG=github:repo:create=debug` selects a single action.
#[derive(Debug, Clone, Copy)]
pub struct ActionLogger {
    target: &'static str,
}

impl ActionLogger {
    #[must_use]
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        log!(target: self.target, Level::Debug, "{}", message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        log!(target: self.target, Level::Info, "{}", message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        log!(target: self.target, Level::Warn, "{}", message);
    }
}

/// Optional provisioning step whose failure does not fail the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BestEffortStep {
    Collaborator,
    Topics,
    BranchProtection,
}

impl BestEffortStep {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Collaborator => "collaborator",
            Self::Topics => "topics",
            Self::BranchProtection => "branch-protection",
        }
    }
}

impl fmt::Display for BestEffortStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skipped best-effort step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepWarning {
    pub step: BestEffortStep,
    /// The resource the step was applied to
    pub target: String,
    pub message: String,
}

impl fmt::Display for StepWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping {} for {}: {}", self.step, self.target, self.message)
    }
}

/// Outputs and warnings collected by one action run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionReport {
    pub outputs: Map<String, Value>,
    pub warnings: Vec<StepWarning>,
}

/// Mutable state of a single action invocation
#[derive(Debug)]
pub struct ActionContext {
    logger: ActionLogger,
    outputs: Map<String, Value>,
    warnings: Vec<StepWarning>,
}

impl ActionContext {
    #[must_use]
    pub fn new(action_id: &'static str) -> Self {
        Self {
            logger: ActionLogger::new(action_id),
            outputs: Map::new(),
            warnings: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn logger(&self) -> ActionLogger {
        self.logger
    }

    /// Write a named output value
    pub fn output(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.outputs.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn outputs(&self) -> &Map<String, Value> {
        &self.outputs
    }

    #[must_use]
    pub fn warnings(&self) -> &[StepWarning] {
        &self.warnings
    }

    /// Log and keep a warning for a skipped step
    pub fn record_warning(&mut self, warning: StepWarning) {
        self.logger.warn(&warning);
        self.warnings.push(warning);
    }

    #[must_use]
    pub fn into_report(self) -> ActionReport {
        ActionReport {
            outputs: self.outputs,
            warnings: self.warnings,
        }
    }
}
