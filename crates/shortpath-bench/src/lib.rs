//! Edge-list generator and benchmark utilities for `shortpath`.
//!
//! This crate provides deterministic generation of weighted directed graphs
//! for benchmarking `shortpath-core` and for checking the loader against
//! large inputs.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_edge_list, node_id, to_csv};
