//! Operations and the conflict algebra (spec §3, §4.1).

use alloc::collections::BTreeSet;
use core::hash::Hash;

/// A single read/write on a relation, identified by the row it touches.
///
/// Two operations "touch the same row" iff they share a `variable`. The
/// `variable` and `relation` fields are opaque identifiers: their identity,
/// not their contents, drives every predicate in this crate.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operation<Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    pub variable: Variable,
    pub relation: Relation,
    pub readset: BTreeSet<Attribute>,
    pub writeset: BTreeSet<Attribute>,
}

impl<Variable, Relation, Attribute> Operation<Variable, Relation, Attribute>
where
    Variable: Eq + Hash + Clone,
    Relation: Eq + Hash,
    Attribute: Eq + Ord + Clone,
{
    /// Build a read-only operation.
    #[must_use]
    pub fn read(
        variable: Variable,
        relation: Relation,
        readset: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        Self {
            variable,
            relation,
            readset: readset.into_iter().collect(),
            writeset: BTreeSet::new(),
        }
    }

    /// Build an operation with both a readset and a writeset.
    #[must_use]
    pub fn read_write(
        variable: Variable,
        relation: Relation,
        readset: impl IntoIterator<Item = Attribute>,
        writeset: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        Self {
            variable,
            relation,
            readset: readset.into_iter().collect(),
            writeset: writeset.into_iter().collect(),
        }
    }
}

impl<Variable, Relation, Attribute> Operation<Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    /// `true` iff `self`'s readset intersects `other`'s writeset on the same relation.
    #[must_use]
    pub fn is_rw_conflicting(&self, other: &Self) -> bool {
        self.relation == other.relation && !self.readset.is_disjoint(&other.writeset)
    }

    /// `true` iff `self`'s writeset intersects `other`'s readset on the same relation.
    #[must_use]
    pub fn is_wr_conflicting(&self, other: &Self) -> bool {
        self.relation == other.relation && !self.writeset.is_disjoint(&other.readset)
    }

    /// `true` iff `self`'s writeset intersects `other`'s writeset on the same relation.
    #[must_use]
    pub fn is_ww_conflicting(&self, other: &Self) -> bool {
        self.relation == other.relation && !self.writeset.is_disjoint(&other.writeset)
    }

    /// `true` iff any of rw, wr or ww conflicts holds between `self` and `other`.
    #[must_use]
    pub fn is_conflicting(&self, other: &Self) -> bool {
        self.is_rw_conflicting(other) || self.is_wr_conflicting(other) || self.is_ww_conflicting(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(
        variable: &'static str,
        relation: &'static str,
        readset: &[&'static str],
        writeset: &[&'static str],
    ) -> Operation<&'static str, &'static str, &'static str> {
        Operation::read_write(variable, relation, readset.iter().copied(), writeset.iter().copied())
    }

    #[test]
    fn rw_conflict_requires_same_relation() {
        let a = op("x", "Checking", &["Balance"], &[]);
        let b = op("x", "Savings", &[], &["Balance"]);
        assert!(!a.is_rw_conflicting(&b));
    }

    #[test]
    fn rw_conflict_detected() {
        let a = op("x", "Checking", &["Balance"], &[]);
        let b = op("y", "Checking", &[], &["Balance"]);
        assert!(a.is_rw_conflicting(&b));
        assert!(!a.is_wr_conflicting(&b));
        assert!(!a.is_ww_conflicting(&b));
        assert!(a.is_conflicting(&b));
    }

    #[test]
    fn ww_conflict_is_symmetric_in_effect() {
        let a = op("x", "Checking", &[], &["Balance"]);
        let b = op("y", "Checking", &[], &["Balance"]);
        assert!(a.is_ww_conflicting(&b));
        assert!(b.is_ww_conflicting(&a));
    }

    #[test]
    fn disjoint_attributes_do_not_conflict() {
        let a = op("x", "Checking", &["Name"], &[]);
        let b = op("y", "Checking", &[], &["Balance"]);
        assert!(!a.is_conflicting(&b));
    }

    #[test]
    fn empty_sets_never_conflict() {
        let a: Operation<&str, &str, &str> = Operation::read("x", "Checking", []);
        let b: Operation<&str, &str, &str> = Operation::read("y", "Checking", []);
        assert!(!a.is_conflicting(&b));
    }
}
