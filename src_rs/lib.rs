#![allow(non_local_definitions)]

// 목적:
// - k-best 구간 선택 Rust 확장 모듈의 진입점을 제공한다.
//
// 설명:
// - 코어 알고리즘은 순수 Rust로 core 모듈에 둔다.
// - Python 바인딩은 `python` 기능(feature)을 켠 빌드에서만 포함된다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core).
//
// 참조:
// - src_rs/api/kbest_bridge.rs
// - src_rs/core/kbest_pipeline.rs

#[cfg(feature = "python")]
pub mod api;
pub mod core;

pub use crate::core::errors::{CoreError, CoreResult};
pub use crate::core::interval::{Interval, Weight};
pub use crate::core::kbest_pipeline::{
    compute_k_best, compute_k_best_f64, execute_kbest, execute_kbest_json, labels,
    KBestRequestPayload, KBestResultPayload, OutputKind,
};
pub use crate::core::labels::{intervals_to_labels, labels_to_intervals};
pub use crate::core::logging::init_tracing;
pub use crate::core::merger::merge_to_k;
pub use crate::core::preprocess::preprocess;
pub use crate::core::single_best::single_best_interval;

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyModule;

#[cfg(feature = "python")]
#[pymodule]
fn kbest_intervals(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use api::kbest_bridge::{
        calculate_kbest_intervals, calculate_kbest_segments, init_logging, PyKBestBridge,
    };

    m.add_class::<PyKBestBridge>()?;
    m.add_function(wrap_pyfunction!(calculate_kbest_intervals, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_kbest_segments, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
