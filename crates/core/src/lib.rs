//! Static robustness analysis for mixed-isolation transaction templates.
//!
//! `trobust_core` decides whether a set of parameterized transaction
//! templates is *robust* under a given allocation of isolation levels: does
//! every execution the allocation admits remain serializable, even when
//! different templates run under weaker levels (Read Committed, Snapshot
//! Isolation) and stronger ones (Serializable) at the same time?
//!
//! The analysis is static: it never inspects a concrete execution history,
//! only the templates' operation shapes (which relations and attributes
//! each operation reads and writes) and their allocated isolation levels.
//! It works by enumerating every candidate conflict cycle that mixed
//! isolation could permit and checking whether a weaker level would let it
//! close.
//!
//! # Entry points
//!
//! - [`oracle::is_robust`] decides robustness for a template set under a
//!   fixed allocation, returning the first violating cycle it finds as a
//!   [`witness::Witness`].
//! - [`optimizer::optimal_alloc`] greedily searches for the weakest robust
//!   allocation, template by template.
//! - [`propagator::get_connectedness`] and [`pt_graph::build`] are exposed
//!   for testing and tooling built on top of this crate; ordinary callers
//!   only need the two entry points above.
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on the data
//!   model (`Operation`, `Template`, `TemplateSet`, `Allocation`, `Conn`,
//!   `Witness`, ...).
//! - **`schemars`** -- enables `JsonSchema` derives on the same types, for
//!   generating a schema for the CLI's input format.
//!
//! This crate is `no_std` compatible (requires `alloc`).

#![cfg_attr(not(any(test, feature = "schemars")), no_std)]
extern crate alloc;

pub mod graph;
pub mod model;
pub mod oracle;
pub mod optimizer;
pub mod propagator;
pub mod pt_graph;
pub mod witness;

pub use model::{Allocation, Conn, Error, GraphNode, InOut, IsolationLevel, Operation, Template, TemplateSet};
pub use oracle::is_robust;
pub use optimizer::optimal_alloc;
pub use propagator::get_connectedness;
pub use pt_graph::pt_conflict_graph;
pub use witness::Witness;
