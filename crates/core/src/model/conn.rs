//! Connectedness labels and graph node shapes for the pt-conflict-graph (spec §3, §4.2, §4.3).

use core::hash::Hash;

use crate::model::operation::Operation;
use crate::model::template::Template;

/// Classification of a node relative to the two anchor operations of t1.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Conn {
    /// Connected to anchor o1.
    O,
    /// Connected to anchor p1.
    P,
    /// Not connected to either anchor.
    N,
}

/// Distinguishes the "entry" and "exit" endpoints of an operation in the
/// pt-conflict-graph.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InOut {
    In,
    Out,
}

/// A node in the pt-conflict-graph: `(template, operation, connectedness, in/out)`.
///
/// `TIdx`/`OIdx` are lightweight indices (template index within the
/// template set, operation index within the template) rather than owned
/// clones of `Template`/`Operation`, so that the graph arena stays cheap to
/// build and compare even for large template sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphNode {
    pub template_idx: usize,
    pub operation_idx: usize,
    pub conn: Conn,
    pub inout: InOut,
}

impl GraphNode {
    #[must_use]
    pub const fn new(template_idx: usize, operation_idx: usize, conn: Conn, inout: InOut) -> Self {
        Self {
            template_idx,
            operation_idx,
            conn,
            inout,
        }
    }
}

/// Resolve a [`GraphNode`]'s template/operation indices against a slice of
/// templates, returning the concrete operation it refers to.
pub fn resolve_operation<'a, Name, Variable, Relation, Attribute>(
    templates: &'a [&'a Template<Name, Variable, Relation, Attribute>],
    node: GraphNode,
) -> &'a Operation<Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    &templates[node.template_idx].operations[node.operation_idx]
}
