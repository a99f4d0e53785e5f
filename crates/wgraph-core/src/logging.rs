use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Work counters for a single algorithm run.
///
/// Algorithms fill these in as they go and log them at debug level once
/// finished, which makes it easy to compare e.g. relaxation counts of
/// Dijkstra and Bellman-Ford on the same input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunMetrics {
    /// Edges examined
    pub edges_scanned: u64,
    /// Successful relaxations (distance or key decreased)
    pub relaxations: u64,
    /// Nodes settled / finalized
    pub settled: u64,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_scan(&mut self) {
        self.edges_scanned += 1;
    }

    pub fn record_relaxation(&mut self) {
        self.relaxations += 1;
    }

    pub fn record_settled(&mut self) {
        self.settled += 1;
    }
}

/// Log run metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let mut metrics = RunMetrics::new();
/// // ... record some work ...
/// log_run_metrics!(&metrics, "dijkstra");
/// ```
#[macro_export]
macro_rules! log_run_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            edges_scanned = $metrics.edges_scanned,
            relaxations = $metrics.relaxations,
            settled = $metrics.settled,
            "run_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", nodes = graph.num_nodes());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "wgraph=debug,wgraph_core=debug",
        (false, None) => "wgraph=warn,wgraph_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support WGRAPH_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("WGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Bare levels apply to both crates; full directives pass through
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("wgraph={level},wgraph_core={level}")
    }
}
