//! Property-based tests for verity-validator.

use proptest::prelude::*;
use verity_validator::prelude::*;

fn count(set: &RuleSet) -> usize {
    set.problems().map_or(0, Problems::len)
}

// ============================================================================
// ACCUMULATION: one problem per failed operator, nothing else
// ============================================================================

proptest! {
    #[test]
    fn problem_count_matches_failed_operators(
        name in ".{0,12}",
        amount in -50i64..50,
        code in "[a-zA-Z0-9 ]{0,8}",
    ) {
        let set = set()
            .not_empty(name.as_str(), "name")
            .min(&amount, 1, "amount")
            .max_length(code.as_str(), 5, "code")
            .only_letters_or_digits(code.as_str(), "code");

        let expected = usize::from(name.trim().is_empty())
            + usize::from(amount < 1)
            + usize::from(code.chars().count() > 5)
            + usize::from(code.is_empty() || !code.chars().all(char::is_alphanumeric));

        prop_assert_eq!(count(&set), expected);
    }

    #[test]
    fn has_problems_is_stable(value in any::<Option<i32>>()) {
        let set = set().not_null(&value, "value").null_or_min(&value, 0, "value");
        prop_assert_eq!(set.has_problems(), set.has_problems());
        prop_assert_eq!(set.problems().cloned(), set.problems().cloned());
    }
}

// ============================================================================
// SYMMETRY
// ============================================================================

proptest! {
    #[test]
    fn both_null_or_not_empty_is_symmetric(
        a in proptest::option::of(".{0,4}"),
        b in proptest::option::of(".{0,4}"),
    ) {
        let forward = set().both_null_or_not_empty(&a, &b, "a", "b").has_problems();
        let backward = set().both_null_or_not_empty(&b, &a, "b", "a").has_problems();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn both_equal_is_symmetric(a in any::<Option<u8>>(), b in any::<Option<u8>>()) {
        prop_assert_eq!(
            set().both_equal(&a, &b, "a", "b").has_problems(),
            set().both_equal(&b, &a, "b", "a").has_problems()
        );
    }

    #[test]
    fn less_than_and_greater_than_mirror(a in any::<Option<i16>>(), b in any::<Option<i16>>()) {
        prop_assert_eq!(
            set().less_than(&a, &b, "a", "b").has_problems(),
            set().greater_than(&b, &a, "b", "a").has_problems()
        );
    }
}

// ============================================================================
// PREFIX STRIPPING
// ============================================================================

proptest! {
    #[test]
    fn prefix_segment_is_stripped_exactly(prefix in "[a-z]{1,6}", field in "[a-z]{1,6}") {
        let set = set()
            .with_property_prefix(prefix.clone())
            .not_empty("", &format!("{prefix}.{field}"))
            .not_empty("", &format!("{prefix}x.{field}"))
            .not_empty("", &field);

        let properties: Vec<_> = set
            .problems()
            .unwrap()
            .iter()
            .filter_map(|p| p.property.clone())
            .collect();
        prop_assert_eq!(properties, vec![field.clone(), format!("{prefix}x.{field}"), field.clone()]);
    }

    #[test]
    fn all_nested_reports_each_invalid_index(values in proptest::collection::vec(any::<bool>(), 0..8)) {
        let set = set().all_nested(&values, |valid| set().not_empty(if *valid { "x" } else { "" }, "v"), "items");

        let expected: Vec<_> = values
            .iter()
            .enumerate()
            .filter(|(_, valid)| !**valid)
            .map(|(index, _)| format!("items[{index}].v"))
            .collect();
        let actual: Vec<_> = set
            .problems()
            .map(|problems| problems.iter().filter_map(|p| p.property.clone()).collect())
            .unwrap_or_default();
        prop_assert_eq!(actual, expected);
    }
}
