//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph, failed algorithm precondition)

mod macros;

use thiserror::Error;

/// Exit codes for the wgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or unmet precondition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    Shape {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("node {node} out of range (graph has {num_nodes} nodes)")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("negative edge weight on {from} -> {to}; dijkstra requires non-negative weights")]
    NegativeWeight { from: usize, to: usize },

    #[error("negative cycle reachable from start (edge {from} -> {to} still relaxes)")]
    NegativeCycle { from: usize, to: usize },

    #[error("graph has a cycle")]
    Cycle,

    #[error("{what} too large: {size} exceeds limit of {max}")]
    TooLarge {
        what: String,
        size: usize,
        max: usize,
    },

    #[error("invalid graph file: {reason}")]
    InvalidGraphFile { reason: String },

    // Generic failures (exit code 1)
    #[error("key {key} is already queued")]
    AlreadyQueued { key: usize },

    #[error("key {key} is not queued")]
    NotQueued { key: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a shape error for a mismatched dimension
    pub fn shape(what: &str, expected: usize, actual: usize) -> Self {
        GraphError::Shape {
            what: what.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for an input that exceeds a size bound
    pub fn too_large(what: &str, size: usize, max: usize) -> Self {
        GraphError::TooLarge {
            what: what.to_string(),
            size,
            max,
        }
    }

    /// Create an error for a malformed graph file
    pub fn invalid_graph_file(reason: impl Into<String>) -> Self {
        GraphError::InvalidGraphFile {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::Shape { .. }
            | GraphError::NodeOutOfRange { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::NegativeCycle { .. }
            | GraphError::Cycle
            | GraphError::TooLarge { .. }
            | GraphError::InvalidGraphFile { .. } => ExitCode::Data,

            GraphError::AlreadyQueued { .. }
            | GraphError::NotQueued { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Shape { .. } => "shape_error",
            GraphError::NodeOutOfRange { .. } => "node_out_of_range",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::NegativeCycle { .. } => "negative_cycle",
            GraphError::Cycle => "cycle",
            GraphError::TooLarge { .. } => "too_large",
            GraphError::InvalidGraphFile { .. } => "invalid_graph_file",
            GraphError::AlreadyQueued { .. } => "already_queued",
            GraphError::NotQueued { .. } => "not_queued",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
