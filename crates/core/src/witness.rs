//! The robustness-violation witness (spec §4.4, §6).

use core::hash::Hash;

use crate::model::conn::Conn;
use crate::model::operation::Operation;
use crate::model::template::Template;

/// A concrete cycle that witnesses a non-robust allocation: three templates
/// `t1`, `t2`, `tn` (`t2` and `tn` may coincide), four operations of `t1`
/// (`o1`, `p1`) and their counterparts in `t2`/`tn`, the assumption `h`
/// under which the cycle was found, and the connectedness labels `co2`/`cpn`
/// that closed it.
///
/// Mirrors the witness dictionary returned by
/// [`crate::oracle::is_robust`] on rejection: every field here corresponds
/// 1:1 to one of its keys, so a caller reporting a violation has everything
/// needed to explain *why* without re-deriving it.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness<Name, Variable, Relation, Attribute>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
{
    pub t1: Template<Name, Variable, Relation, Attribute>,
    pub o1: Operation<Variable, Relation, Attribute>,
    pub p1: Operation<Variable, Relation, Attribute>,
    pub h: u8,
    pub t2: Template<Name, Variable, Relation, Attribute>,
    pub o2: Operation<Variable, Relation, Attribute>,
    pub p2: Operation<Variable, Relation, Attribute>,
    pub co2: Conn,
    pub tn: Template<Name, Variable, Relation, Attribute>,
    pub on: Operation<Variable, Relation, Attribute>,
    pub pn: Operation<Variable, Relation, Attribute>,
    pub cpn: Conn,
}
