//! Isolation levels (spec §3).

/// The three isolation levels a template may be allocated, totally ordered
/// from weakest to strongest for the greedy optimizer (spec §4.5).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IsolationLevel {
    /// RC: no dirty reads, no other ordering guarantees.
    ReadCommitted,
    /// SI: each transaction reads from a consistent snapshot.
    SnapshotIsolation,
    /// SSI: equivalent to some serial execution, the strongest level.
    Serializable,
}

impl IsolationLevel {
    /// The next weaker level, or `None` if already [`Self::ReadCommitted`].
    #[must_use]
    pub const fn demote(self) -> Option<Self> {
        match self {
            Self::Serializable => Some(Self::SnapshotIsolation),
            Self::SnapshotIsolation => Some(Self::ReadCommitted),
            Self::ReadCommitted => None,
        }
    }
}
