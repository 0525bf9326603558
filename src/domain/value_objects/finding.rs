//! Finding value object - one validator diagnostic attached to a node

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// How serious a finding is
///
/// Ordered so that `Warning < Error`, which lets callers express thresholds
/// such as "fail on warnings and above".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

/// A single structural or modeling-quality issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Id of the node the finding is attached to
    pub node_id: NodeId,
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    pub fn error(node_id: &NodeId, message: impl Into<String>) -> Self {
        Self {
            node_id: node_id.clone(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(node_id: &NodeId, message: impl Into<String>) -> Self {
        Self {
            node_id: node_id.clone(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
