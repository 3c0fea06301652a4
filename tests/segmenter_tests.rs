// Integration tests for the digit segmenter and input normalization

use bcls::segmenter::{is_modifier, normalize, normalize_phone, segment, validate_digits};
use bcls::AnalysisError;

// ============ Normalization Workflows ============

#[test]
fn test_formatted_phone_workflow() {
    let digits = normalize_phone("+84 (91) 234-5678");
    assert_eq!(digits, "0912345678");
    assert!(validate_digits(&digits).is_ok());

    let groups = segment(&digits);
    assert!(!groups.is_empty());
}

#[test]
fn test_domestic_phone_untouched() {
    assert_eq!(normalize_phone("0912345678"), "0912345678");
}

#[test]
fn test_normalize_non_digits_only() {
    let digits = normalize("no digits here");
    assert!(digits.is_empty());
    assert_eq!(validate_digits(&digits), Err(AnalysisError::Empty));
}

// ============ Group Shape Workflows ============

#[test]
fn test_adjacent_pairs_overlap_by_one() {
    let groups = segment("1234");
    let raws: Vec<&str> = groups.iter().map(|g| g.raw.as_str()).collect();
    assert_eq!(raws, vec!["12", "23", "34"]);

    // Every interior digit appears in two groups
    for window in raws.windows(2) {
        assert_eq!(
            window[0].chars().last(),
            window[1].chars().next(),
            "groups must overlap on the shared digit"
        );
    }
}

#[test]
fn test_modifier_absorption_closes_group() {
    // 9-0-8: the zero is absorbed, the 8 closes the group
    let groups = segment("908");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].raw, "908");
    assert_eq!(groups[0].clean, "98");
    assert_eq!(groups[0].zero_count, 1);

    // After an absorbed span the closing digit can open the next group
    let groups = segment("90823");
    let raws: Vec<&str> = groups.iter().map(|g| g.raw.as_str()).collect();
    assert_eq!(raws, vec!["908", "82", "23"]);
}

#[test]
fn test_leading_modifier_run_dropped() {
    let groups = segment("5012");
    let raws: Vec<&str> = groups.iter().map(|g| g.raw.as_str()).collect();
    assert_eq!(raws, vec!["12"]);
}

#[test]
fn test_trailing_modifier_run_kept_on_last_group() {
    let groups = segment("1250");
    let raws: Vec<&str> = groups.iter().map(|g| g.raw.as_str()).collect();
    assert_eq!(raws, vec!["12", "250"]);

    let last = groups.last().unwrap();
    assert_eq!(last.clean, "2");
    assert_eq!(last.zero_count, 1);
    assert_eq!(last.five_count, 1);
}

#[test]
fn test_pure_modifier_input_yields_nothing() {
    for input in ["0", "5", "05", "50", "000555"] {
        assert!(segment(input).is_empty(), "{:?} should yield no groups", input);
    }
}

#[test]
fn test_clean_core_never_longer_than_two() {
    for input in ["0912345678", "95058", "1234567890", "111213141"] {
        for group in segment(input) {
            assert!(
                group.clean.len() <= 2,
                "group {:?} of {:?} has an oversized core",
                group,
                input
            );
        }
    }
}

// ============ Determinism & Coverage ============

#[test]
fn test_segmentation_is_pure() {
    for input in ["0912345678", "4705", "955555", ""] {
        let a = segment(input);
        let b = segment(input);
        assert_eq!(a, b);
    }
}

#[test]
fn test_no_digit_silently_dropped() {
    // Aside from the leading modifier run, every digit must appear in at
    // least one group.
    for input in ["0912345678", "908", "57", "1250", "203040"] {
        let groups = segment(input);
        let leading_modifiers = input.chars().take_while(|c| is_modifier(*c)).count();

        let consumed: usize = groups.iter().map(|g| g.raw.len()).sum();
        let overlaps = groups.len().saturating_sub(1);

        // With the one-digit overlap rule, the groups must span at least
        // the non-leading part of the input.
        assert!(
            consumed >= input.len() - leading_modifiers - overlaps,
            "groups {:?} do not cover {:?}",
            groups,
            input
        );
    }
}
