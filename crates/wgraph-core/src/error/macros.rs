//! Error macros for wgraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a node index outside `0..num_nodes`
#[macro_export]
macro_rules! ensure_node {
    ($graph:expr, $node:expr) => {
        if $node >= $graph.num_nodes() {
            return Err($crate::error::GraphError::NodeOutOfRange {
                node: $node,
                num_nodes: $graph.num_nodes(),
            });
        }
    };
}
