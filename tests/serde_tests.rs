#![cfg(feature = "serde")]

//! Integration tests for serde support in enumerable.
//!
//! A `DomainList` serializes both partitions so that removed elements survive
//! a round trip; deserialization re-checks identifier uniqueness.

use enumerable::{DomainList, Identified};
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Invoice {
    number: u32,
    amount: i64,
}

impl Identified for Invoice {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.number
    }
}

fn invoice(number: u32, amount: i64) -> Invoice {
    Invoice { number, amount }
}

// =============================================================================
// Round trips
// =============================================================================

#[rstest]
fn test_json_roundtrip_keeps_removed_partition() {
    let mut invoices =
        DomainList::from_collection([invoice(1, 100), invoice(2, 250), invoice(3, 75)]).unwrap();
    invoices.remove_by_id(&2);

    let json = serde_json::to_string(&invoices).unwrap();
    let restored: DomainList<Invoice> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, invoices);
    assert!(restored.is_id_removed(&2));
    assert_eq!(restored.all_items().len(), 3);
}

#[rstest]
fn test_json_shape() {
    let mut invoices = DomainList::from_collection([invoice(1, 10), invoice(2, 20)]).unwrap();
    invoices.remove_by_id(&1);

    let value = serde_json::to_value(&invoices).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "live": [{ "number": 2, "amount": 20 }],
            "removed": [{ "number": 1, "amount": 10 }],
        })
    );
}

#[rstest]
fn test_removed_defaults_to_empty() {
    let json = r#"{ "live": [{ "number": 5, "amount": 1 }] }"#;
    let restored: DomainList<Invoice> = serde_json::from_str(json).unwrap();

    assert_eq!(restored.as_slice(), &[invoice(5, 1)]);
    assert!(restored.removed_items().is_empty());
}

// =============================================================================
// Rejected input
// =============================================================================

#[rstest]
#[case::duplicate_live(r#"{ "live": [{ "number": 1, "amount": 1 }, { "number": 1, "amount": 2 }] }"#)]
#[case::live_and_removed(
    r#"{ "live": [{ "number": 1, "amount": 1 }], "removed": [{ "number": 1, "amount": 2 }] }"#
)]
#[case::duplicate_removed(
    r#"{ "live": [], "removed": [{ "number": 4, "amount": 1 }, { "number": 4, "amount": 1 }] }"#
)]
fn test_duplicate_identifiers_are_rejected(#[case] json: &str) {
    let result: Result<DomainList<Invoice>, _> = serde_json::from_str(json);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("same key has already been added"));
}
