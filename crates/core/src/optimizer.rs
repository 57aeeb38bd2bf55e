//! The greedy allocation optimizer (spec §4.5).

use core::hash::Hash;

use crate::model::allocation::Allocation;
use crate::model::error::Error;
use crate::model::isolation::IsolationLevel;
use crate::model::template::TemplateSet;
use crate::oracle::is_robust;

/// Find the strongest-robust, weakest-possible allocation for `template_set`
/// by greedily demoting each template from [`IsolationLevel::Serializable`]
/// towards [`IsolationLevel::ReadCommitted`], keeping a demotion iff
/// robustness still holds afterwards (spec §4.5).
///
/// Templates are visited in their deterministic (name-sorted) order; each
/// visited template is tried at [`IsolationLevel::SnapshotIsolation`] first,
/// and -- only if that still passes -- at [`IsolationLevel::ReadCommitted`].
/// Earlier templates' already-settled levels are held fixed while later
/// templates are explored, so this is a greedy search, not an exhaustive one:
/// it need not find a global optimum over all possible allocations, only a
/// locally-minimal one reachable by demoting in visitation order.
///
/// # Errors
///
/// Propagates any [`Error`] raised by the underlying [`is_robust`] calls.
pub fn optimal_alloc<Name, Variable, Relation, Attribute>(
    template_set: &TemplateSet<Name, Variable, Relation, Attribute>,
) -> Result<Allocation<Name>, Error<Name>>
where
    Name: Eq + Ord + Hash + Clone,
    Variable: Eq + Hash + Clone,
    Relation: Eq + Hash + Clone,
    Attribute: Eq + Ord + Clone,
{
    let mut alloc = Allocation::uniform(template_set, IsolationLevel::Serializable);

    for name in template_set.names() {
        tracing::debug!(template = ?name, "optimizing allocation");

        alloc.set_level(&name, IsolationLevel::SnapshotIsolation);
        if !is_robust(template_set, &alloc)?.0 {
            tracing::debug!(template = ?name, "SI not robust, reverting to SSI");
            alloc.set_level(&name, IsolationLevel::Serializable);
            continue;
        }

        alloc.set_level(&name, IsolationLevel::ReadCommitted);
        if !is_robust(template_set, &alloc)?.0 {
            tracing::debug!(template = ?name, "RC not robust, reverting to SI");
            alloc.set_level(&name, IsolationLevel::SnapshotIsolation);
        }
    }

    Ok(alloc)
}
