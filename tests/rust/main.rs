use kbest_intervals::{
    compute_k_best, compute_k_best_f64, execute_kbest_json, labels, labels_to_intervals,
    single_best_interval, CoreError, Interval,
};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rstest::rstest;

/// 최대 k개의 서로소 구간으로 얻을 수 있는 최적 합(동적 계획법).
fn optimal_total(weights: &[i64], k: usize) -> i64 {
    let n = weights.len();
    let mut prefix = vec![0i64; n + 1];
    for (index, &weight) in weights.iter().enumerate() {
        prefix[index + 1] = prefix[index] + weight;
    }

    let mut previous = vec![0i64; n + 1];
    for _ in 0..k {
        let mut current = vec![0i64; n + 1];
        for end in 1..=n {
            let mut best = current[end - 1];
            for start in 0..end {
                best = best.max(previous[start] + prefix[end] - prefix[start]);
            }
            current[end] = best;
        }
        previous = current;
    }

    previous[n]
}

fn total<T: Copy + std::iter::Sum<T>>(intervals: &[Interval<T>]) -> T {
    intervals.iter().map(|interval| interval.sum).sum()
}

fn assert_selection_shape(intervals: &[Interval<i64>], weights: &[i64], k: usize) {
    assert!(intervals.len() <= k, "selected {} > k={k}", intervals.len());

    for interval in intervals {
        assert!(interval.sum > 0, "non-positive interval {interval}");
        assert!(interval.start < interval.end && interval.end <= weights.len());
        assert_eq!(
            interval.sum,
            weights[interval.start..interval.end].iter().sum::<i64>(),
            "stale sum for {interval}"
        );
    }

    for pair in intervals.windows(2) {
        assert!(
            pair[0].end < pair[1].start,
            "intervals {} and {} touch or overlap",
            pair[0],
            pair[1]
        );
    }
}

#[rstest]
#[case(vec![2.0, -1.0, 3.0], 1, vec![Interval::new(0, 3, 4.0)])]
#[case(vec![2.0, -5.0, 3.0], 1, vec![Interval::new(2, 3, 3.0)])]
#[case(
    vec![1.0, -1.0, 1.0, -1.0, 1.0],
    3,
    vec![Interval::new(0, 1, 1.0), Interval::new(2, 3, 1.0), Interval::new(4, 5, 1.0)]
)]
#[case(vec![1.0, -1.0, 1.0, -1.0, 1.0], 1, vec![Interval::new(0, 1, 1.0)])]
#[case(vec![-5.0, -3.0], 2, vec![])]
#[case(vec![1.0, 1.0, 1.0], 5, vec![Interval::new(0, 3, 3.0)])]
#[case(vec![], 3, vec![])]
#[case(vec![0.0, 0.0], 2, vec![])]
fn selects_expected_intervals(
    #[case] weights: Vec<f64>,
    #[case] k: usize,
    #[case] expected: Vec<Interval<f64>>,
) {
    let selected = compute_k_best(&weights, k).expect("k >= 1");

    assert_eq!(selected, expected);
}

#[rstest]
#[case(
    vec![0.70, 2.66, 2.49, 0.23, 0.14, 0.72, -1.22, 0.36, 1.44, -0.69, 0.41, 1.44, 2.10],
    3,
    vec![1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1]
)]
#[case(
    vec![0.70, 2.66, 2.49, 0.23, 0.14, 0.72, -1.22, 0.36, 1.44, -0.69, 0.41, 1.44, 2.10],
    2,
    vec![1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1]
)]
#[case(vec![5.0, -1.0, 3.0, -3.0, 1.0], 3, vec![1, 0, 1, 0, 1])]
#[case(vec![-1.0; 5], 2, vec![0; 5])]
#[case(vec![-1.0; 5], 1, vec![0; 5])]
#[case(vec![1.0; 5], 2, vec![1; 5])]
fn labels_match_reference_vectors(
    #[case] weights: Vec<f64>,
    #[case] k: usize,
    #[case] expected: Vec<i32>,
) {
    let encoded = labels::<i32, _>(&weights, k).expect("k >= 1");

    assert_eq!(encoded, expected);
}

#[test]
fn zero_k_is_rejected_everywhere() {
    assert!(matches!(
        compute_k_best(&[1.0], 0),
        Err(CoreError::InvalidArgument(_))
    ));
    assert!(matches!(
        labels::<u8, _>(&[1.0], 0),
        Err(CoreError::InvalidArgument(_))
    ));
    assert!(matches!(
        execute_kbest_json(r#"{"weights": [1.0], "k": 0}"#),
        Err(CoreError::InvalidArgument(_))
    ));
}

#[test]
fn non_finite_weights_are_rejected_at_f64_entry() {
    assert!(matches!(
        compute_k_best_f64(&[1.0, f64::INFINITY], 2),
        Err(CoreError::InvalidInput(_))
    ));
    assert!(matches!(
        execute_kbest_json(r#"{"weights": [1.0, 2.0], "k": 2, "output": "labels"}"#),
        Ok(_)
    ));
}

#[test]
fn payload_labels_output_round_trips_through_json() {
    let result = execute_kbest_json(
        r#"{"weights": [5.0, -1.0, 3.0, -3.0, 1.0], "k": 3, "output": "labels"}"#,
    )
    .expect("valid payload");
    let value: serde_json::Value = serde_json::from_str(&result).expect("json result");

    assert_eq!(value["labels"], serde_json::json!([1, 0, 1, 0, 1]));
    assert_eq!(value["total"], 9.0);
    assert_eq!(value["intervals"].as_array().map(Vec::len), Some(3));
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn selection_is_optimal_against_exhaustive_oracle(
        weights in prop::collection::vec(-4i64..=4, 0..=12),
        k in 1usize..6,
    ) {
        let selected = compute_k_best(&weights, k).expect("k >= 1");

        assert_selection_shape(&selected, &weights, k);
        prop_assert_eq!(total(&selected), optimal_total(&weights, k));
    }

    #[test]
    fn labels_round_trip_to_selected_intervals(
        weights in prop::collection::vec(-9i64..=9, 0..=40),
        k in 1usize..8,
    ) {
        let selected = compute_k_best(&weights, k).expect("k >= 1");
        let encoded = labels::<u8, _>(&weights, k).expect("k >= 1");

        let recovered = labels_to_intervals(&encoded, &weights).expect("same length");

        prop_assert_eq!(recovered, selected);
    }

    #[test]
    fn single_target_matches_leaf_scan(
        weights in prop::collection::vec(-9i64..=9, 0..=40),
    ) {
        let selected = compute_k_best(&weights, 1).expect("k >= 1");
        let best = single_best_interval(&weights);

        if best.sum > 0 {
            prop_assert_eq!(selected, vec![best]);
        } else {
            prop_assert!(selected.is_empty());
        }
    }

    #[test]
    fn total_is_monotonic_in_k(
        weights in prop::collection::vec(-9i64..=9, 0..=40),
    ) {
        let mut previous = 0i64;
        for k in 1..=8 {
            let current = total(&compute_k_best(&weights, k).expect("k >= 1"));
            prop_assert!(current >= previous, "k={} total {} < {}", k, current, previous);
            previous = current;
        }
    }

    #[test]
    fn selection_beats_whole_range_for_gaussian_like_input(
        weights in prop::collection::vec(-3.0f64..3.0, 0..400),
        k in 1usize..200,
    ) {
        let encoded = labels::<i32, _>(&weights, k).expect("k >= 1");
        let selected_total = weights
            .iter()
            .zip(&encoded)
            .map(|(weight, &label)| weight * f64::from(label))
            .sum::<f64>();
        let whole_total = weights.iter().sum::<f64>();

        prop_assert!(selected_total >= whole_total - 1e-9);

        let runs = encoded
            .iter()
            .enumerate()
            .filter(|&(index, &label)| label == 1 && (index == 0 || encoded[index - 1] == 0))
            .count();
        prop_assert!(runs <= k);
    }
}
