//! Templates and template sets (spec §3).

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use crate::model::operation::Operation;

/// A parameterized transaction program: a human-readable name plus an
/// *ordered* sequence of operations.
///
/// Two templates are equal (and hash identically) iff their names are equal
/// -- the operation sequence is excluded from equality so templates are
/// cheap hash keys. The operation order models transaction program order and
/// is semantically significant: preserve it on every traversal.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone)]
pub struct Template<Name, Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    pub name: Name,
    pub operations: Vec<Operation<Variable, Relation, Attribute>>,
}

impl<Name, Variable, Relation, Attribute> Template<Name, Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    #[must_use]
    pub const fn new(name: Name, operations: Vec<Operation<Variable, Relation, Attribute>>) -> Self {
        Self { name, operations }
    }
}

impl<Name, Variable, Relation, Attribute> PartialEq for Template<Name, Variable, Relation, Attribute>
where
    Name: PartialEq,
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<Name, Variable, Relation, Attribute> Eq for Template<Name, Variable, Relation, Attribute>
where
    Name: Eq,
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
}

impl<Name, Variable, Relation, Attribute> Hash for Template<Name, Variable, Relation, Attribute>
where
    Name: Hash,
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<Name, Variable, Relation, Attribute> PartialOrd for Template<Name, Variable, Relation, Attribute>
where
    Name: Ord,
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<Name, Variable, Relation, Attribute> Ord for Template<Name, Variable, Relation, Attribute>
where
    Name: Ord,
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

/// An unordered collection of distinct [`Template`]s.
///
/// Every traversal of a `TemplateSet` performed by this crate iterates in
/// template-name order, so that the enumeration in §4.4 is deterministic
/// regardless of the caller's insertion order (spec §5).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone)]
pub struct TemplateSet<Name, Variable, Relation, Attribute>
where
    Name: Eq + Ord + Hash,
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    templates: BTreeSet<Template<Name, Variable, Relation, Attribute>>,
}

impl<Name, Variable, Relation, Attribute> TemplateSet<Name, Variable, Relation, Attribute>
where
    Name: Eq + Ord + Hash + Clone,
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    #[must_use]
    pub fn new(templates: impl IntoIterator<Item = Template<Name, Variable, Relation, Attribute>>) -> Self {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    /// Iterate templates in a fixed, deterministic (name-sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &Template<Name, Variable, Relation, Attribute>> {
        self.templates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    #[must_use]
    pub fn contains_name(&self, name: &Name) -> bool {
        self.templates.iter().any(|t| &t.name == name)
    }

    #[must_use]
    pub fn names(&self) -> BTreeSet<Name> {
        self.templates.iter().map(|t| t.name.clone()).collect()
    }
}
