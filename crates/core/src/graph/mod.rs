//! Graph primitives shared by the pt-conflict-graph builder (spec §4.3, §9).

pub mod digraph;
pub mod ugraph;

pub use digraph::DiGraph;
pub use ugraph::UGraph;
