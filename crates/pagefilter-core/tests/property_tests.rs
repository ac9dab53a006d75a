//! Property-based tests for page removal

mod common;

use common::{create_test_pdf, page_indices};
use pagefilter_core::{
    page_count, remove_pages, remove_pages_from_bytes, retained_indices, ExclusionRange,
    RangePolicy,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// (page_count, start, end) with 1 <= start <= end <= page_count
fn valid_range() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..30).prop_flat_map(|n| {
        (1..=n).prop_flat_map(move |s| (Just(n), Just(s), s..=n))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // ============================================================
    // Document-level properties
    // ============================================================

    #[test]
    fn removal_drops_exactly_the_range((n, s, e) in valid_range()) {
        let pdf = create_test_pdf(n);
        let out = remove_pages_from_bytes(&pdf, ExclusionRange::new(s, e), RangePolicy::Clamp)
            .unwrap();

        let expected: Vec<i64> = (0..n as i64)
            .filter(|&i| i < s as i64 - 1 || i > e as i64 - 1)
            .collect();
        prop_assert_eq!(page_count(&out).unwrap(), n - (e - s + 1));
        prop_assert_eq!(page_indices(&out), expected);
    }

    #[test]
    fn range_past_the_end_is_a_noop_copy((n, s, e) in valid_range(), gap in 1u32..10) {
        let pdf = create_test_pdf(n);
        let once = remove_pages_from_bytes(&pdf, ExclusionRange::new(s, e), RangePolicy::Clamp)
            .unwrap();
        let remaining = page_count(&once).unwrap();

        let beyond = ExclusionRange::new(remaining + gap, remaining + gap + 3);
        let twice = remove_pages_from_bytes(&once, beyond, RangePolicy::Clamp).unwrap();
        prop_assert_eq!(page_indices(&twice), page_indices(&once));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ============================================================
    // Predicate properties (no PDF involved)
    // ============================================================

    #[test]
    fn retained_indices_are_an_ordered_subsequence(
        n in 0usize..200,
        s in 0u32..250,
        e in 0u32..250,
    ) {
        let range = ExclusionRange::new(s, e);
        let kept = retained_indices(n, range, RangePolicy::Clamp).unwrap();

        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(kept.iter().all(|&i| i < n));
        prop_assert_eq!(kept.len(), n - range.excluded_count(n));
    }

    #[test]
    fn inverted_ranges_exclude_nothing(n in 0usize..100, s in 2u32..150, d in 1u32..50) {
        let e = s.saturating_sub(d).max(1);
        prop_assume!(s > e);
        let kept = retained_indices(n, ExclusionRange::new(s, e), RangePolicy::Clamp).unwrap();
        prop_assert_eq!(kept, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn reject_policy_accepts_only_in_bounds_ranges(
        n in 1usize..100,
        s in 0u32..120,
        e in 0u32..120,
    ) {
        let result = retained_indices(n, ExclusionRange::new(s, e), RangePolicy::Reject);
        let valid = s >= 1 && s <= e && (e as usize) <= n;
        prop_assert_eq!(result.is_ok(), valid);
    }
}

#[test]
fn forty_page_document_minus_25_to_39() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("p1.pdf");
    let first = dir.path().join("p1_done.pdf");
    let second = dir.path().join("p2.pdf");
    std::fs::write(&input, create_test_pdf(40)).unwrap();

    let report = remove_pages(&input, &first, 1, 24).unwrap();
    assert_eq!(report.output_pages, 16);

    let report = remove_pages(&input, &second, 25, 39).unwrap();
    assert_eq!(report.output_pages, 25);

    let mut expected: Vec<i64> = (0..24).collect();
    expected.push(39);
    assert_eq!(page_indices(&std::fs::read(&second).unwrap()), expected);
    assert_eq!(
        page_indices(&std::fs::read(&first).unwrap()),
        (24..40).collect::<Vec<i64>>()
    );
}
