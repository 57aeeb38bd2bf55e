//! The algebraic data model (spec §3): operations, templates, isolation
//! levels, allocations, and the connectedness/graph-node vocabulary shared
//! by the propagator and the pt-conflict-graph builder.

pub mod allocation;
pub mod conn;
pub mod error;
pub mod isolation;
pub mod operation;
pub mod template;

pub use allocation::Allocation;
pub use conn::{Conn, GraphNode, InOut};
pub use error::Error;
pub use isolation::IsolationLevel;
pub use operation::Operation;
pub use template::{Template, TemplateSet};
