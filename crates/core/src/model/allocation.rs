//! Allocations of isolation levels to templates (spec §3, §7).

use alloc::collections::BTreeMap;
use core::hash::Hash;

use crate::model::error::Error;
use crate::model::isolation::IsolationLevel;
use crate::model::template::TemplateSet;

/// A total mapping from each template in a [`TemplateSet`] to exactly one
/// [`IsolationLevel`].
///
/// Constructed only through [`Allocation::new`] or [`Allocation::uniform`],
/// both of which enforce the domain invariant
/// `domain(mapping) == templateset.templates` (spec §3) and reject a
/// mismatched mapping as a contract violation (spec §7) rather than
/// silently dropping or defaulting entries.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation<Name>
where
    Name: Eq + Ord + Hash,
{
    mapping: BTreeMap<Name, IsolationLevel>,
}

impl<Name> Allocation<Name>
where
    Name: Eq + Ord + Hash + Clone,
{
    /// Build an allocation from an explicit per-template mapping, checking
    /// that its domain matches `template_set` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if `mapping` names a template not
    /// in `template_set`, or omits one of `template_set`'s templates.
    pub fn new<Variable, Relation, Attribute>(
        template_set: &TemplateSet<Name, Variable, Relation, Attribute>,
        mapping: BTreeMap<Name, IsolationLevel>,
    ) -> Result<Self, Error<Name>>
    where
        Variable: Eq + Hash,
        Relation: Eq + Hash,
        Attribute: Eq + Ord,
    {
        let expected = template_set.names();
        let actual: alloc::collections::BTreeSet<Name> = mapping.keys().cloned().collect();
        if expected != actual {
            return Err(Error::DomainMismatch {
                missing: expected.difference(&actual).cloned().collect(),
                extra: actual.difference(&expected).cloned().collect(),
            });
        }
        Ok(Self { mapping })
    }

    /// Build an allocation assigning the same level to every template in
    /// `template_set`.
    #[must_use]
    pub fn uniform<Variable, Relation, Attribute>(
        template_set: &TemplateSet<Name, Variable, Relation, Attribute>,
        level: IsolationLevel,
    ) -> Self
    where
        Variable: Eq + Hash,
        Relation: Eq + Hash,
        Attribute: Eq + Ord,
    {
        Self {
            mapping: template_set.names().into_iter().map(|n| (n, level)).collect(),
        }
    }

    /// The isolation level assigned to `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not in this allocation's domain. Every
    /// `Allocation` in circulation was validated at construction time
    /// against the `TemplateSet` it is used with, so callers that keep the
    /// two paired never hit this.
    #[must_use]
    pub fn level(&self, name: &Name) -> IsolationLevel {
        self.mapping[name]
    }

    pub fn set_level(&mut self, name: &Name, level: IsolationLevel) {
        if let Some(slot) = self.mapping.get_mut(name) {
            *slot = level;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, IsolationLevel)> {
        self.mapping.iter().map(|(n, l)| (n, *l))
    }
}
