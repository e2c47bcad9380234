// 목적:
// - 부호가 번갈아 나타나는 분할을 양수 구간 k개 이하로 축약한다.
//
// 설명:
// - |sum|이 가장 작은 구간을 찾아 양쪽 이웃과 하나로 합친다(Csuros 축약).
// - 한 번의 축약마다 양수 구간 수가 정확히 하나 줄어든다.
// - 분할의 양 끝은 항상 양수 구간으로 유지한다. 끝에서 0 이하가 된 구간은
//   어떤 선택에도 기여하지 못하므로 즉시 제거한다.
// - 최소값 탐색은 매 반복 선형 스캔이며, 동률이면 가장 왼쪽 구간을 고른다.
//
// 디자인 패턴:
// - 탐욕적 축약(Greedy Reduction).
//
// 참조:
// - src_rs/core/preprocess.rs
// - src_rs/core/kbest_pipeline.rs

use tracing::trace;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::interval::{Interval, Weight};

/// 분할을 양수 구간 `k`개 이하로 축약하고 양수 구간만 남긴다.
pub fn merge_to_k<T: Weight>(
    mut partition: Vec<Interval<T>>,
    k: usize,
) -> CoreResult<Vec<Interval<T>>> {
    if k == 0 {
        return Err(CoreError::InvalidArgument(
            "k는 1 이상이어야 합니다".to_string(),
        ));
    }

    trim_non_positive_edges(&mut partition);

    let mut positive = count_positive(&partition);
    while positive > k {
        let Some(min_index) = min_magnitude_index(&partition) else {
            break;
        };
        trace!(
            min_index,
            magnitude = ?partition[min_index].magnitude(),
            positive,
            partition_len = partition.len(),
            "최소 크기 구간을 이웃과 병합합니다"
        );

        if min_index + 1 < partition.len() {
            merge_to_right(&mut partition, min_index)?;
        }
        if min_index >= 1 {
            merge_to_right(&mut partition, min_index - 1)?;
        }

        trim_non_positive_edges(&mut partition);
        positive = count_positive(&partition);
    }

    partition.retain(Interval::is_positive);
    Ok(partition)
}

fn count_positive<T: Weight>(partition: &[Interval<T>]) -> usize {
    partition
        .iter()
        .filter(|interval| interval.is_positive())
        .count()
}

fn min_magnitude_index<T: Weight>(partition: &[Interval<T>]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (index, interval) in partition.iter().enumerate() {
        let magnitude = interval.magnitude();
        match best {
            Some((_, current)) if magnitude < current => best = Some((index, magnitude)),
            None => best = Some((index, magnitude)),
            _ => {}
        }
    }
    best.map(|(index, _)| index)
}

fn merge_to_right<T: Weight>(partition: &mut Vec<Interval<T>>, index: usize) -> CoreResult<()> {
    let merged = partition[index].concat(&partition[index + 1])?;
    partition[index] = merged;
    partition.remove(index + 1);
    Ok(())
}

fn trim_non_positive_edges<T: Weight>(partition: &mut Vec<Interval<T>>) {
    while partition.last().is_some_and(|interval| !interval.is_positive()) {
        partition.pop();
    }
    while partition.first().is_some_and(|interval| !interval.is_positive()) {
        partition.remove(0);
    }
}
