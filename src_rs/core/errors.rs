// 목적:
// - k-best 구간 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 인자/입력/구간 인접성/직렬화 오류를 명시적으로 구분해 Python에 전달한다.
// - 구간 인접성 오류는 병합 로직의 버그를 의미하며 사용자 입력으로는 발생하지 않는다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/interval.rs
// - src_rs/core/kbest_pipeline.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("인자가 유효하지 않습니다: {0}")]
    InvalidArgument(String),
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("인접하지 않은 구간은 병합할 수 없습니다: left.end={left_end}, right.start={right_start}")]
    IntervalAdjacency { left_end: usize, right_start: usize },
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
