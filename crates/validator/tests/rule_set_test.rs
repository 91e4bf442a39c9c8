//! End-to-end tests for rule-set chains.

use pretty_assertions::assert_eq;
use verity_validator::prelude::*;
use verity_validator::rules;

// ============================================================================
// FIXTURES
// ============================================================================

struct Order {
    name: String,
    amount: i32,
    shipping_address: Option<Address>,
}

struct Address {
    street: String,
    city: String,
}

struct Purchase {
    name: String,
}

display_names! {
    Purchase as "Purchase Order" {
        "name" => "Customer Name",
    }
}

fn properties(set: &RuleSet) -> Vec<String> {
    set.problems()
        .map(|problems| problems.iter().filter_map(|p| p.property.clone()).collect())
        .unwrap_or_default()
}

// ============================================================================
// CHAINS
// ============================================================================

#[test]
fn flat_chain_reports_every_failure_in_order() {
    let order = Order {
        name: String::new(),
        amount: 0,
        shipping_address: None,
    };

    let set = set()
        .not_empty(&order.name, "name")
        .min(&order.amount, 1, "amount");

    assert!(set.has_problems());
    assert_eq!(properties(&set), vec!["name", "amount"]);
}

#[test]
fn nested_prefix_is_replaced_by_parent_property() {
    let order = Order {
        name: "Ana".into(),
        amount: 1,
        shipping_address: Some(Address {
            street: String::new(),
            city: "Anytown".into(),
        }),
    };

    let set = set().not_null_nested(
        order.shipping_address.as_ref(),
        |address| {
            set()
                .with_property_prefix("address")
                .not_empty(&address.street, "address.street")
                .not_empty(&address.city, "address.city")
        },
        "shippingAddress",
    );

    assert_eq!(properties(&set), vec!["shippingAddress.street"]);
}

#[test]
fn absent_required_child_reports_once() {
    let order = Order {
        name: "Ana".into(),
        amount: 1,
        shipping_address: None,
    };

    let set = set().not_null_nested(
        order.shipping_address.as_ref(),
        |address| set().not_empty(&address.street, "street"),
        "shippingAddress",
    );

    let problems = set.problems().unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems.as_slice()[0].rule(), Some(rules::NOT_NULL_OR_NOT_EMPTY));
}

#[test]
fn collection_reports_invalid_indexes_only() {
    let items = vec!["", "ok", ""];

    let set = set().all_nested(&items, |item| set().not_empty(*item, "name"), "items");

    assert_eq!(properties(&set), vec!["items[0].name", "items[2].name"]);
}

#[test]
fn string_comparison_modes() {
    assert!(set().equal_str("abc", "ABC", StringComparison::Ordinal, "code").has_problems());
    assert!(
        !set()
            .equal_str("abc", "ABC", StringComparison::OrdinalIgnoreCase, "code")
            .has_problems()
    );
}

#[test]
fn absent_orders_before_present() {
    let one = Some(1);
    let none: Option<i32> = None;

    assert!(set().less_than(&one, &none, "a", "b").has_problems());
    assert!(set().less_than(&none, &none, "a", "b").has_problems());
    assert!(!set().less_than(&none, &one, "a", "b").has_problems());
    assert!(!set().greater_than(&one, &none, "a", "b").has_problems());
}

#[test]
fn unless_true_skips_builder() {
    let mut called = false;
    let skipped = set().unless(true, |s| {
        called = true;
        s.not_empty("", "code")
    });
    assert!(!called);
    assert!(!skipped.has_problems());

    let applied = set().unless(false, |s| s.not_empty("", "code"));
    assert_eq!(properties(&applied), vec!["code"]);
}

#[test]
fn annotated_labels_survive_an_earlier_bare_chain() {
    let purchase = Purchase { name: String::new() };

    let bare = RuleSet::for_type::<Purchase>().not_empty(&purchase.name, "name");
    assert_eq!(
        bare.problems().unwrap().as_slice()[0].message,
        "The 'name' field must be informed"
    );

    let labeled = set_for::<Purchase>().not_empty(&purchase.name, "name");
    assert_eq!(
        labeled.problems().unwrap().as_slice()[0].message,
        "The 'Customer Name' field must be informed"
    );
}

// ============================================================================
// INVARIANTS
// ============================================================================

#[test]
fn passing_operators_leave_collection_untouched() {
    let failed = set().not_empty("", "name");
    let before = failed.problems().unwrap().as_slice().as_ptr();

    let after = failed
        .min(&5, 1, "amount")
        .email("user@example.com", "email")
        .max_length("abc", 10, "code");

    assert_eq!(after.problems().unwrap().len(), 1);
    assert!(std::ptr::eq(before, after.problems().unwrap().as_slice().as_ptr()));
}

#[test]
fn branches_do_not_share_problems() {
    let base = set().not_empty("", "name");
    let left = base.clone().min(&0, 1, "amount");
    let right = base.min(&5, 1, "amount");

    assert_eq!(left.problems().map(Problems::len), Some(2));
    assert_eq!(right.problems().map(Problems::len), Some(1));
}

#[test]
fn into_result_and_option_conversions() {
    let valid: Result<(), Problems> = set().not_empty("x", "name").into();
    assert!(valid.is_ok());

    let invalid: Option<Problems> = set().not_empty("", "name").into();
    assert_eq!(invalid.map(|p| p.len()), Some(1));
}

#[test]
fn problems_serialize_as_a_list() {
    let problems = set().min(&0, 1, "amount").into_problems().unwrap();
    let json = serde_json::to_value(&problems).unwrap();

    assert_eq!(json[0]["property"], "amount");
    assert_eq!(json[0]["extensions"]["rule"], rules::MIN);
    assert_eq!(json[0]["extensions"]["expected"], 1);
}
