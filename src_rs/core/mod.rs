// 목적:
// - k-best 구간 코어 계층 모듈을 선언한다.
//
// 설명:
// - 구간 값 타입, 단일 최대 구간, 부호 런 전처리, 축약, 라벨 변환을 분리해 유지보수성을 높인다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/kbest_pipeline.rs

pub mod errors;
pub mod interval;
pub mod kbest_pipeline;
pub mod labels;
pub mod logging;
pub mod merger;
pub mod preprocess;
pub mod single_best;
