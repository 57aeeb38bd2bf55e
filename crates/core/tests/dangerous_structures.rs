//! Minimal, hand-constructed dangerous structures (spec §8 S4/S5), as
//! opposed to the SmallBank-derived scenarios in `smallbank_scenarios.rs`.

mod common;

use common::{read, read_write};
use trobust_core::{is_robust, Allocation, IsolationLevel, Template, TemplateSet};

#[test]
fn s4_two_template_set_degenerates_to_a_single_template_witness() {
    // spec §8 S4: a two-template degenerate set where t1 == t2 == tn. Only
    // "T" carries a read-then-write antidependency on itself; "Bystander" is
    // read-only and shares no relation with T, so it can never enter any
    // candidate cycle. The oracle's Length-2 reachability branch must fire
    // and produce a witness anchored entirely on T.
    let t = Template::new("T", vec![read_write("a", "R", &["r"], &[]), read_write("b", "R", &[], &["r"])]);
    let bystander = Template::new("Bystander", vec![read("c", "S", &["s"])]);
    let ts = TemplateSet::new([t, bystander]);
    let alloc = Allocation::uniform(&ts, IsolationLevel::ReadCommitted);

    let (robust, witness) = is_robust(&ts, &alloc).unwrap();
    assert!(!robust, "T's own read-then-write antidependency is a dangerous structure under RC");
    let witness = witness.expect("a non-robust result always carries a witness");
    assert_eq!(witness.t1.name, "T");
    assert_eq!(witness.t2.name, witness.tn.name, "the witness degenerates to t1 == t2 == tn");
    assert_eq!(witness.t1.name, witness.t2.name);
}

#[test]
fn s5_three_template_rw_cycle_needs_full_serializable() {
    // spec §8 S5: three single-operation templates on the same relation,
    // chained by read-then-write antidependencies (T1 reads x1/writes x2,
    // T2 reads x2/writes x3, T3 reads x3/writes x1) into a 3-cycle -- the
    // textbook "dangerous structure" the oracle exists to detect. The cycle
    // is symmetric (each template plays the anchor role in its own witness
    // cycle), so unlike a linear chain, closing it requires lifting every
    // template to Serializable: holding any single one back at RC leaves
    // its own symmetric witness open.
    let t1 = Template::new("T1", vec![read_write("v1", "R", &["x1"], &["x2"])]);
    let t2 = Template::new("T2", vec![read_write("v2", "R", &["x2"], &["x3"])]);
    let t3 = Template::new("T3", vec![read_write("v3", "R", &["x3"], &["x1"])]);
    let ts = TemplateSet::new([t1, t2, t3]);

    let all_rc = Allocation::uniform(&ts, IsolationLevel::ReadCommitted);
    let (robust, witness) = is_robust(&ts, &all_rc).unwrap();
    assert!(!robust, "the rw cycle T1->T3->T2->T1 is a dangerous structure under all-RC");
    assert!(witness.is_some());

    let all_ssi = Allocation::uniform(&ts, IsolationLevel::Serializable);
    let (robust, _) = is_robust(&ts, &all_ssi).unwrap();
    assert!(robust, "an all-Serializable allocation is always robust (condition 6 rejects every candidate cycle)");

    for held_back in ["T1", "T2", "T3"] {
        let mapping: std::collections::BTreeMap<&str, IsolationLevel> = ts
            .names()
            .into_iter()
            .map(|name| {
                let level = if name == held_back { IsolationLevel::ReadCommitted } else { IsolationLevel::Serializable };
                (name, level)
            })
            .collect();
        let alloc = Allocation::new(&ts, mapping).unwrap();
        let (robust, _) = is_robust(&ts, &alloc).unwrap();
        assert!(!robust, "holding {held_back} back from Serializable leaves its own symmetric witness cycle open");
    }
}
