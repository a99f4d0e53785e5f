//! CLI commands for wgraph

pub mod derived;
pub mod dispatch;
pub mod helpers;
pub mod info;
pub mod json_builders;
pub mod paths;
pub mod structure;
pub mod traverse;
