//! The connectedness propagator (spec §4.2).

use alloc::collections::BTreeSet;
use core::hash::Hash;

use crate::model::conn::Conn;
use crate::model::error::Error;
use crate::model::operation::Operation;

/// Return the set of possible [`Conn`] labels `target` may carry, given that
/// some operation in the same template plays the role of "incoming"
/// operation `o` with label `co`, and some operation plays the role of
/// "outgoing" operation `p` with label `cp`.
///
/// Rules, evaluated in order (spec §4.2):
/// 1. Start empty.
/// 2. If `target.variable == o.variable`, insert `co`.
/// 3. If `target.variable == p.variable`, insert `cp`.
/// 4. If still empty, the result is `{N}`.
/// 5. If `h == 1`, close under O<->P: either label present pulls in the other.
///
/// # Errors
///
/// Returns [`Error::ConnectednessPostcondition`] if the result violates the
/// spec §4.2 sanity postcondition: for `h == 1` the result must be `{N}` or
/// `{O, P}`; for `h == 2` it must be exactly one of `{N}`, `{O}`, `{P}`.
/// Any caller hitting this has passed an `h` outside `{1, 2}` or built `o`/`p`
/// with overlapping variables in a way the algorithm does not anticipate --
/// a contract violation, not a property of the input template set.
pub fn get_connectedness<Name, Variable, Relation, Attribute>(
    target: &Operation<Variable, Relation, Attribute>,
    o: &Operation<Variable, Relation, Attribute>,
    co: Conn,
    p: &Operation<Variable, Relation, Attribute>,
    cp: Conn,
    h: u8,
) -> Result<BTreeSet<Conn>, Error<Name>>
where
    Variable: Eq + Hash,
    Relation: Eq + Hash,
    Attribute: Eq + Ord,
    Name: Eq + Ord,
{
    let mut result = BTreeSet::new();

    if target.variable == o.variable {
        result.insert(co);
    }
    if target.variable == p.variable {
        result.insert(cp);
    }
    if result.is_empty() {
        result.insert(Conn::N);
    }

    if h == 1 {
        if result.contains(&Conn::O) {
            result.insert(Conn::P);
        }
        if result.contains(&Conn::P) {
            result.insert(Conn::O);
        }
    }

    let valid = match h {
        1 => result == BTreeSet::from([Conn::N]) || result == BTreeSet::from([Conn::O, Conn::P]),
        2 => {
            result == BTreeSet::from([Conn::N])
                || result == BTreeSet::from([Conn::O])
                || result == BTreeSet::from([Conn::P])
        }
        _ => false,
    };

    if valid {
        Ok(result)
    } else {
        Err(Error::ConnectednessPostcondition { h })
    }
}
