// 목적:
// - k-best 구간 선택의 핵심 파이프라인을 실행한다.
//
// 설명:
// - k == 1이면 단일 최대 구간 스캔으로 바로 응답한다.
// - 그 외에는 부호 런 분할 -> Csuros 축약 -> 라벨 변환 순서로 처리한다.
// - JSON 페이로드 요청/응답 타입과 검증도 이 모듈이 담당한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/single_best.rs
// - src_rs/core/preprocess.rs
// - src_rs/core/merger.rs
// - src_rs/core/labels.rs

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::interval::{Interval, Weight};
use crate::core::labels::intervals_to_labels;
use crate::core::merger::merge_to_k;
use crate::core::preprocess::preprocess;
use crate::core::single_best::single_best_interval;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    #[default]
    Intervals,
    Labels,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KBestRequestPayload {
    pub weights: Vec<f64>,
    pub k: usize,
    #[serde(default)]
    pub output: OutputKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KBestResultPayload {
    pub length: usize,
    pub k: usize,
    pub intervals: Vec<Interval<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<u8>>,
    pub total: f64,
}

/// 합이 최대가 되도록 서로 떨어진 양수 구간을 최대 `k`개 고른다.
///
/// 결과는 `start` 순으로 정렬되어 있고 모든 구간의 합은 0보다 크다.
pub fn compute_k_best<T: Weight>(weights: &[T], k: usize) -> CoreResult<Vec<Interval<T>>> {
    if k == 0 {
        return Err(CoreError::InvalidArgument(
            "k는 1 이상이어야 합니다".to_string(),
        ));
    }

    if k == 1 {
        let best = single_best_interval(weights);
        debug!(length = weights.len(), best = ?best, "단일 최대 구간을 선택했습니다");
        return Ok(if best.is_positive() {
            vec![best]
        } else {
            Vec::new()
        });
    }

    let partition = preprocess(weights);
    debug!(
        length = weights.len(),
        k,
        runs = partition.len(),
        positive_runs = partition.iter().filter(|run| run.is_positive()).count(),
        "부호 런 분할을 완료했습니다"
    );

    let selected = merge_to_k(partition, k)?;
    debug!(selected = selected.len(), "k-best 구간 선택을 완료했습니다");
    Ok(selected)
}

/// `compute_k_best` 결과를 길이 `weights.len()`의 0/1 라벨로 변환한다.
pub fn labels<L, T>(weights: &[T], k: usize) -> CoreResult<Vec<L>>
where
    L: Copy + From<u8>,
    T: Weight,
{
    let selected = compute_k_best(weights, k)?;
    intervals_to_labels(&selected, weights.len())
}

/// f64 가중치에 대한 공개 진입점이다. 유한하지 않은 값은 거부한다.
pub fn compute_k_best_f64(weights: &[f64], k: usize) -> CoreResult<Vec<Interval<f64>>> {
    validate_weights(weights)?;
    compute_k_best(weights, k)
}

/// JSON 페이로드 요청을 실행한다.
pub fn execute_kbest(payload: KBestRequestPayload) -> CoreResult<KBestResultPayload> {
    validate_payload(&payload)?;

    let intervals = compute_k_best(&payload.weights, payload.k)?;
    let labels = match payload.output {
        OutputKind::Intervals => None,
        OutputKind::Labels => Some(intervals_to_labels::<u8, _>(
            &intervals,
            payload.weights.len(),
        )?),
    };
    let total = intervals.iter().map(|interval| interval.sum).sum::<f64>();

    Ok(KBestResultPayload {
        length: payload.weights.len(),
        k: payload.k,
        intervals,
        labels,
        total,
    })
}

/// JSON 문자열 요청을 파싱해 실행하고 JSON 문자열 결과를 반환한다.
pub fn execute_kbest_json(payload_json: &str) -> CoreResult<String> {
    let payload: KBestRequestPayload = serde_json::from_str(payload_json).map_err(|error| {
        CoreError::Serialization(format!("k-best 페이로드 JSON 파싱에 실패했습니다: {}", error))
    })?;

    let result = execute_kbest(payload)?;

    serde_json::to_string(&result)
        .map_err(|error| CoreError::Serialization(format!("k-best 결과 직렬화 실패: {}", error)))
}

fn validate_payload(payload: &KBestRequestPayload) -> CoreResult<()> {
    if payload.k == 0 {
        return Err(CoreError::InvalidArgument(
            "k는 1 이상이어야 합니다".to_string(),
        ));
    }

    validate_weights(&payload.weights)
}

fn validate_weights(weights: &[f64]) -> CoreResult<()> {
    if let Some(index) = weights.iter().position(|weight| !weight.is_finite()) {
        return Err(CoreError::InvalidInput(format!(
            "weights[{}]가 유한한 값이 아닙니다: {}",
            index, weights[index]
        )));
    }

    Ok(())
}
