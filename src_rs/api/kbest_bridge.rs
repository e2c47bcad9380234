// 목적:
// - Python에서 호출 가능한 k-best 구간 함수와 브릿지 클래스를 제공한다.
//
// 설명:
// - numpy float64 배열을 입력받아 라벨 배열 또는 구간 튜플 목록을 반환한다.
// - JSON 페이로드를 입력받는 브릿지 클래스도 함께 제공한다.
// - 계산 중에는 GIL을 해제한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/kbest_pipeline.rs

use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::errors::CoreError;
use crate::core::kbest_pipeline::{compute_k_best_f64, execute_kbest_json};
use crate::core::labels::intervals_to_labels;
use crate::core::logging::init_tracing;

/// Python에 노출되는 k-best 브릿지 클래스다.
#[pyclass(name = "KBestBridge")]
pub struct PyKBestBridge {
    phase: String,
}

#[pymethods]
impl PyKBestBridge {
    /// 브릿지 객체를 생성한다.
    #[new]
    pub fn new() -> Self {
        Self {
            phase: "kbest-csuros-linear-scan".to_string(),
        }
    }

    /// 현재 브릿지 단계 정보를 반환한다.
    pub fn status(&self) -> String {
        self.phase.clone()
    }

    /// k-best 페이로드(JSON)를 실행하고 결과 JSON을 반환한다.
    pub fn execute(&self, py: Python<'_>, payload_json: &str) -> PyResult<String> {
        py.detach(|| execute_kbest_json(payload_json))
            .map_err(to_py_err)
    }
}

impl Default for PyKBestBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// 합을 최대화하는 최대 k개 구간의 0/1 라벨 배열을 반환한다.
#[pyfunction]
pub fn calculate_kbest_intervals<'py>(
    py: Python<'py>,
    weights: PyReadonlyArray1<'py, f64>,
    k: usize,
) -> PyResult<Bound<'py, PyArray1<i32>>> {
    let values = weights.as_array().iter().copied().collect::<Vec<f64>>();

    let labels = py
        .detach(|| {
            let selected = compute_k_best_f64(&values, k)?;
            intervals_to_labels::<i32, _>(&selected, values.len())
        })
        .map_err(to_py_err)?;

    Ok(labels.into_pyarray(py))
}

/// 합을 최대화하는 최대 k개 구간을 (start, end, sum) 튜플 목록으로 반환한다.
#[pyfunction]
pub fn calculate_kbest_segments(
    py: Python<'_>,
    weights: PyReadonlyArray1<'_, f64>,
    k: usize,
) -> PyResult<Vec<(usize, usize, f64)>> {
    let values = weights.as_array().iter().copied().collect::<Vec<f64>>();

    let selected = py
        .detach(|| compute_k_best_f64(&values, k))
        .map_err(to_py_err)?;

    Ok(selected
        .into_iter()
        .map(|interval| (interval.start, interval.end, interval.sum))
        .collect())
}

/// KBEST_LOG 환경 변수 기반 로깅을 초기화한다.
#[pyfunction]
pub fn init_logging() -> bool {
    init_tracing()
}

fn to_py_err(error: CoreError) -> PyErr {
    match error {
        CoreError::InvalidArgument(_) | CoreError::InvalidInput(_) => {
            PyValueError::new_err(error.to_string())
        }
        _ => PyRuntimeError::new_err(error.to_string()),
    }
}
