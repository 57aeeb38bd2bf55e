//! Round-tripping the data model through `serde_json` (spec §8, ambient
//! property 10). Only compiled when the `serde` feature is enabled.

#![cfg(feature = "serde")]

mod common;

use common::{read, read_write};
use trobust_core::{Allocation, IsolationLevel, Operation, Template, TemplateSet};

#[test]
fn operation_round_trips() {
    let op: Operation<&str, &str, &str> = Operation::read_write("x", "Checking", ["Balance"], ["Balance"]);
    let json = serde_json::to_string(&op).unwrap();
    let back: Operation<String, String, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Operation::read_write("x".into(), "Checking".into(), ["Balance".to_string()], ["Balance".to_string()]));
}

#[test]
fn template_set_round_trips_to_the_same_json() {
    let t1 = Template::new("Deposit", vec![read_write("x", "Checking", &[], &["Balance"])]);
    let t2 = Template::new("Balance", vec![read("x", "Checking", &["Balance"])]);
    let ts = TemplateSet::new([t1, t2]);

    let json = serde_json::to_string(&ts).unwrap();
    let back: TemplateSet<String, String, String, String> = serde_json::from_str(&json).unwrap();
    let round_tripped = serde_json::to_string(&back).unwrap();

    assert_eq!(json, round_tripped, "re-serializing a deserialized TemplateSet must reproduce the same JSON");
    assert_eq!(back.names(), ts.names().into_iter().map(String::from).collect());
}

#[test]
fn allocation_round_trips() {
    let t1 = Template::new("Deposit", vec![read_write("x", "Checking", &[], &["Balance"])]);
    let ts = TemplateSet::new([t1]);
    let alloc = Allocation::uniform(&ts, IsolationLevel::SnapshotIsolation);

    let json = serde_json::to_string(&alloc).unwrap();
    let back: Allocation<&str> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, alloc);
}

#[test]
fn witness_round_trips() {
    // Two templates that conflict so that is_robust finds a witness under RC.
    let t1 = Template::new(
        "Deposit",
        vec![read_write("x", "Checking", &[], &["Balance"]), read("x", "Checking", &["Balance"])],
    );
    let t2 = Template::new(
        "Withdraw",
        vec![read("x", "Checking", &["Balance"]), read_write("x", "Checking", &[], &["Balance"])],
    );
    let ts = TemplateSet::new([t1, t2]);
    let alloc = Allocation::uniform(&ts, IsolationLevel::ReadCommitted);

    let (_, witness) = trobust_core::is_robust(&ts, &alloc).unwrap();
    let Some(witness) = witness else {
        // No violation at this allocation; nothing to round-trip.
        return;
    };

    let json = serde_json::to_string(&witness).unwrap();
    let back = serde_json::from_str(&json).unwrap();
    assert_eq!(witness, back);
}
