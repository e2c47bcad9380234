// 목적:
// - 선택된 구간 목록과 위치별 0/1 라벨 배열 사이를 변환한다.
//
// 설명:
// - 구간은 정렬되어 있고 서로 겹치지 않아야 하며, 위반 시 InvalidInput을 반환한다.
// - 라벨 -> 구간 변환은 1이 연속된 런을 하나의 구간으로 복원한다.
//
// 디자인 패턴:
// - 파생 뷰(Derived View).
//
// 참조:
// - src_rs/core/kbest_pipeline.rs

use crate::core::errors::{CoreError, CoreResult};
use crate::core::interval::{Interval, Weight};

/// 길이 `size`의 라벨 배열을 만들고 구간에 포함된 위치를 1로 표시한다.
pub fn intervals_to_labels<L, T>(intervals: &[Interval<T>], size: usize) -> CoreResult<Vec<L>>
where
    L: Copy + From<u8>,
    T: Weight,
{
    let mut labels = vec![L::from(0); size];
    let mut previous_end = 0usize;

    for interval in intervals {
        if interval.start > interval.end || interval.end > size {
            return Err(CoreError::InvalidInput(format!(
                "구간이 라벨 범위를 벗어났습니다: [{}, {}), size={}",
                interval.start, interval.end, size
            )));
        }
        if interval.start < previous_end {
            return Err(CoreError::InvalidInput(format!(
                "구간은 정렬되어 있고 겹치지 않아야 합니다: start={}, previous_end={}",
                interval.start, previous_end
            )));
        }

        labels[interval.start..interval.end].fill(L::from(1));
        previous_end = interval.end;
    }

    Ok(labels)
}

/// 0이 아닌 라벨의 연속 런을 구간으로 복원하고 `weights`로 합을 다시 계산한다.
pub fn labels_to_intervals<L, T>(labels: &[L], weights: &[T]) -> CoreResult<Vec<Interval<T>>>
where
    L: Copy + PartialEq + From<u8>,
    T: Weight,
{
    if labels.len() != weights.len() {
        return Err(CoreError::InvalidInput(format!(
            "라벨 길이와 가중치 길이가 다릅니다: labels={}, weights={}",
            labels.len(),
            weights.len()
        )));
    }

    let outside = L::from(0);
    let mut intervals = Vec::new();
    let mut open: Option<Interval<T>> = None;

    for (index, (&label, &weight)) in labels.iter().zip(weights).enumerate() {
        if label == outside {
            if let Some(run) = open.take() {
                intervals.push(run);
            }
            continue;
        }

        let run = open.get_or_insert_with(|| Interval::empty_at(index));
        run.end = index + 1;
        run.sum = run.sum + weight;
    }

    if let Some(run) = open {
        intervals.push(run);
    }

    Ok(intervals)
}
