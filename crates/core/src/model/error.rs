//! Contract-violation errors (spec §7).
//!
//! These are the only two failure kinds the core recognizes. Both indicate
//! programmer error by the caller (a malformed [`Allocation`](crate::model::allocation::Allocation)
//! or an internal invariant violation), never a property of the input
//! template set itself -- a non-robust template set is not an error, it is
//! a successful `(false, witness)` result from [`crate::oracle::is_robust`].

use alloc::collections::BTreeSet;

/// A contract violation detected while constructing or validating core
/// inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<Name>
where
    Name: Eq + Ord,
{
    /// An [`Allocation`](crate::model::allocation::Allocation)'s mapping
    /// domain does not equal its `TemplateSet`'s templates.
    DomainMismatch {
        /// Templates present in the `TemplateSet` but absent from the mapping.
        missing: BTreeSet<Name>,
        /// Templates present in the mapping but absent from the `TemplateSet`.
        extra: BTreeSet<Name>,
    },
    /// [`get_connectedness`](crate::propagator::get_connectedness) produced a
    /// result set that violates the spec §4.2 sanity postcondition.
    ConnectednessPostcondition {
        /// The `h` value (1 or 2) under which the postcondition failed.
        h: u8,
    },
}
