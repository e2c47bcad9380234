// 목적:
// - 합이 최대인 단일 연속 구간을 찾는다.
//
// 설명:
// - 왼쪽에서 오른쪽으로 한 번 순회하며 현재 후보와 최선 후보를 유지한다.
// - 누적 합이 0 이하가 되면 현재 후보를 다음 위치에서 다시 시작한다.
// - 양수 구간이 없으면 위치 0의 빈 구간을 반환한다.
//
// 디자인 패턴:
// - 단일 패스 스캔(Single Pass Scan).
//
// 참조:
// - src_rs/core/kbest_pipeline.rs

use crate::core::interval::{Interval, Weight};

/// 합이 최대인 구간을 반환한다. 동률이면 먼저 발견된 구간을 유지한다.
pub fn single_best_interval<T: Weight>(weights: &[T]) -> Interval<T> {
    let mut best = Interval::empty_at(0);
    let mut current = Interval::empty_at(0);

    for (index, &weight) in weights.iter().enumerate() {
        current.sum = current.sum + weight;

        if current.sum <= T::zero() {
            current = Interval::empty_at(index + 1);
        } else if current.sum > best.sum {
            best = Interval::new(current.start, index + 1, current.sum);
        }
    }

    best
}
