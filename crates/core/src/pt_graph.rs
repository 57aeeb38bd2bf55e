//! The pt-conflict-graph builder (spec §4.3).
//!
//! Built once per anchor triple `(t1, o1, p1)` and assumption `h`, this graph
//! encodes how connectedness information can propagate through an
//! arbitrary-length chain of intermediate templates: inter-template
//! conflicts (E-cross) and intra-template information flow (E-intra). Its
//! reflexive transitive closure is what lets [`crate::oracle::is_robust`]
//! verify that a candidate cycle can be *closed* through zero or more
//! intermediate templates without enumerating those templates explicitly.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::graph::digraph::DiGraph;
use crate::graph::ugraph::UGraph;
use crate::model::conn::{resolve_operation, Conn, GraphNode, InOut};
use crate::model::operation::Operation;
use crate::model::template::{Template, TemplateSet};

/// The pt-conflict-graph and its reflexive transitive closure, for a single
/// anchor triple `(t1, o1, p1)` and assumption `h`.
///
/// Nodes are stored as `GraphNode`s indexing into `templates` (template
/// index, operation index within that template), so the graph never clones
/// operation data.
pub struct PtConflictGraph<'a, Name, Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    pub templates: Vec<&'a Template<Name, Variable, Relation, Attribute>>,
    pub graph: UGraph<GraphNode>,
    pub closure: DiGraph<GraphNode>,
}

impl<'a, Name, Variable, Relation, Attribute> PtConflictGraph<'a, Name, Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    fn operation(&self, node: GraphNode) -> &Operation<Variable, Relation, Attribute> {
        resolve_operation(&self.templates, node)
    }

    /// `true` iff there is an edge `(a, b)` in the reflexive transitive
    /// closure with `a.inout == In`, `b.inout == Out`, `a.conn == co`,
    /// `b.conn == cp`, `a`'s operation conflicting with `probe_in`, and
    /// `b`'s operation conflicting with `probe_out` -- the pattern consulted
    /// by [`crate::oracle::reachable`] for cycles of length > 3 (spec §4.3).
    #[must_use]
    pub fn has_closing_path(
        &self,
        co: Conn,
        cp: Conn,
        probe_in: &Operation<Variable, Relation, Attribute>,
        probe_out: &Operation<Variable, Relation, Attribute>,
    ) -> bool {
        for (a, targets) in &self.closure.adj_map {
            if a.inout != InOut::In || a.conn != co || !self.operation(*a).is_conflicting(probe_in) {
                continue;
            }
            for b in targets {
                if b.inout == InOut::Out && b.conn == cp && self.operation(*b).is_conflicting(probe_out) {
                    return true;
                }
            }
        }
        false
    }
}

/// Check whether node `(t, o, c)` passes node validity against anchors
/// `o1`/`p1` in `t1` (spec §4.3).
///
/// `N`-labelled nodes are always admitted. An `O`- or `P`-labelled node is
/// rejected if `t1` contains an operation sharing the relevant anchor's
/// variable that conflicts (by `is_conflicting`) with some operation in
/// `node`'s own template sharing `node`'s operation's variable -- i.e. the
/// connectedness claim would require a conflict t1's prefix/suffix already
/// contradicts.
fn is_node_valid<Name, Variable, Relation, Attribute>(
    template: &Template<Name, Variable, Relation, Attribute>,
    operation: &Operation<Variable, Relation, Attribute>,
    conn: Conn,
    o1: &Operation<Variable, Relation, Attribute>,
    p1: &Operation<Variable, Relation, Attribute>,
    t1: &Template<Name, Variable, Relation, Attribute>,
) -> bool
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    if conn == Conn::N {
        return true;
    }

    for op1 in &t1.operations {
        let anchor_matches =
            (op1.variable == o1.variable && conn == Conn::O) || (op1.variable == p1.variable && conn == Conn::P);
        if !anchor_matches {
            continue;
        }
        for op in &template.operations {
            if op.variable == operation.variable && op1.is_conflicting(op) {
                return false;
            }
        }
    }
    true
}

/// `true` iff the (E-intra) within-one-template edge conditions hold between
/// `n1` (`In`) and `n2` (`Out`) (spec §4.3 E-intra-a/b/c).
fn is_intra_edge<Variable, Relation, Attribute>(
    op1: &Operation<Variable, Relation, Attribute>,
    conn1: Conn,
    op2: &Operation<Variable, Relation, Attribute>,
    conn2: Conn,
    h: u8,
) -> bool
where
    Variable: Eq + Hash,
{
    if op1.variable != op2.variable {
        matches!((conn1, conn2), (Conn::O, Conn::P) | (Conn::O, Conn::N) | (Conn::N, Conn::N) | (Conn::N, Conn::P))
    } else {
        conn1 == conn2 || (conn1 == Conn::O && conn2 == Conn::P && h == 1)
    }
}

/// Build the pt-conflict-graph for anchor triple `(t1, o1, p1)`, assumption
/// `h`, over `templates`, and compute its reflexive transitive closure (spec
/// §4.3).
pub fn build<'a, Name, Variable, Relation, Attribute>(
    templates: &[&'a Template<Name, Variable, Relation, Attribute>],
    o1: &Operation<Variable, Relation, Attribute>,
    p1: &Operation<Variable, Relation, Attribute>,
    t1: &Template<Name, Variable, Relation, Attribute>,
    h: u8,
) -> PtConflictGraph<'a, Name, Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    tracing::debug!(templates = templates.len(), t1 = ?t1.name, h, "building pt-conflict-graph");

    let mut nodes: Vec<GraphNode> = Vec::new();
    for (t_idx, template) in templates.iter().enumerate() {
        for (o_idx, operation) in template.operations.iter().enumerate() {
            for conn in [Conn::O, Conn::P, Conn::N] {
                if is_node_valid(template, operation, conn, o1, p1, t1) {
                    nodes.push(GraphNode::new(t_idx, o_idx, conn, InOut::In));
                    nodes.push(GraphNode::new(t_idx, o_idx, conn, InOut::Out));
                }
            }
        }
    }
    tracing::trace!(nodes = nodes.len(), "pt-conflict-graph nodes admitted");

    let mut graph: UGraph<GraphNode> = UGraph::default();
    for &node in &nodes {
        graph.add_vertex(node);
    }

    for &n1 in &nodes {
        for &n2 in &nodes {
            let op1 = resolve_operation(templates, n1);
            let op2 = resolve_operation(templates, n2);

            let cross = n1.inout == InOut::Out
                && n2.inout == InOut::In
                && n1.conn == n2.conn
                && op1.is_conflicting(op2);

            let intra = n1.inout == InOut::In
                && n2.inout == InOut::Out
                && n1.template_idx == n2.template_idx
                && is_intra_edge(op1, n1.conn, op2, n2.conn, h);

            if cross || intra {
                graph.add_edge(n1, n2);
            }
        }
    }
    tracing::trace!(edges = graph.edges().len(), "pt-conflict-graph edges built");

    let mut digraph: DiGraph<GraphNode> = DiGraph::default();
    for &node in &nodes {
        digraph.add_vertex(node);
    }
    for (a, b) in graph.edges() {
        digraph.add_edge(a, b);
        digraph.add_edge(b, a);
    }
    let closure = digraph.reflexive_closure();
    tracing::trace!("pt-conflict-graph reflexive transitive closure computed");

    PtConflictGraph {
        templates: templates.to_vec(),
        graph,
        closure,
    }
}

/// `pt_conflict_graph(o1, p1, t1, h, template_set)`: the public, spec-shaped
/// entry point wrapping [`build`] for callers that hold a whole
/// [`TemplateSet`] rather than a pre-collected slice. Exposed for testing.
pub fn pt_conflict_graph<'a, Name, Variable, Relation, Attribute>(
    o1: &Operation<Variable, Relation, Attribute>,
    p1: &Operation<Variable, Relation, Attribute>,
    t1: &Template<Name, Variable, Relation, Attribute>,
    h: u8,
    template_set: &'a TemplateSet<Name, Variable, Relation, Attribute>,
) -> PtConflictGraph<'a, Name, Variable, Relation, Attribute>
where
    Name: Eq + Ord + Hash + Clone,
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    let templates: Vec<&Template<Name, Variable, Relation, Attribute>> = template_set.iter().collect();
    build(&templates, o1, p1, t1, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::operation::Operation;

    fn op(variable: &'static str, relation: &'static str, rw: &[&'static str], ww: &[&'static str]) -> Operation<&'static str, &'static str, &'static str> {
        Operation::read_write(variable, relation, rw.iter().copied(), ww.iter().copied())
    }

    #[test]
    fn single_operation_template_has_no_edges() {
        let t1 = Template::new("T1", vec![op("x", "R", &["a"], &[])]);
        let o1 = t1.operations[0].clone();
        let p1 = o1.clone();
        let templates = [&t1];
        let g = build(&templates, &o1, &p1, &t1, 1);
        assert!(g.graph.adj_map.values().all(hashbrown::HashSet::is_empty));
    }

    #[test]
    fn cross_template_conflict_produces_edge() {
        let t1 = Template::new("T1", vec![op("x", "R", &["a"], &[])]);
        let t2 = Template::new("T2", vec![op("y", "R", &[], &["a"])]);
        let o1 = t1.operations[0].clone();
        let p1 = o1.clone();
        let templates = [&t1, &t2];
        let g = build(&templates, &o1, &p1, &t1, 2);
        // t1's op is an N-node (o1==p1 means every op shares variable with o1,
        // so it's actually O/P-admitted too); regardless, some OUT/IN pair
        // across templates with matching conn and a real conflict must connect.
        let has_cross_edge = g.graph.adj_map.iter().any(|(n, neighbors)| {
            n.inout == InOut::Out && n.template_idx == 0 && neighbors.iter().any(|m| m.inout == InOut::In && m.template_idx == 1)
        });
        assert!(has_cross_edge);
    }
}
