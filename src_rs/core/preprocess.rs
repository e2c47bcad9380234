// 목적:
// - 가중치 시퀀스를 같은 부호의 최대 런(run) 구간으로 분할한다.
//
// 설명:
// - 연속 구간들은 전체 입력을 덮고, 이웃한 구간의 합은 부호가 번갈아 나타난다.
// - 0은 현재 런을 그대로 연장한다.
// - 부호가 번갈아 나타나므로 음수 구간은 양 끝에 최대 하나씩만 존재하며, 이를 제거한다.
//
// 디자인 패턴:
// - 전처리 단계(Preprocessing Stage).
//
// 참조:
// - src_rs/core/merger.rs

use crate::core::interval::{Interval, Weight};

/// 부호가 번갈아 나타나는 런 구간 목록을 만들고 양 끝 음수 구간을 제거한다.
pub fn preprocess<T: Weight>(weights: &[T]) -> Vec<Interval<T>> {
    let zero = T::zero();
    let mut runs = vec![Interval::empty_at(0)];

    for (index, &weight) in weights.iter().enumerate() {
        let Some(last) = runs.last_mut() else {
            break;
        };

        let continues =
            (weight <= zero && last.sum <= zero) || (weight >= zero && last.sum >= zero);
        if continues {
            last.sum = last.sum + weight;
            last.end = index + 1;
        } else {
            last.end = index;
            runs.push(Interval::new(index, index + 1, weight));
        }
    }

    if let Some(last) = runs.last_mut() {
        last.end = weights.len();
    }

    if runs.last().is_some_and(|run| run.sum < zero) {
        runs.pop();
    }
    if runs.first().is_some_and(|run| run.sum < zero) {
        runs.remove(0);
    }

    runs
}
