// 목적:
// - 반열린 인덱스 구간 [start, end)와 누적 합을 표현하는 값 타입을 제공한다.
//
// 설명:
// - 인접한 두 구간만 이어 붙일 수 있으며, 그 외에는 IntervalAdjacency 오류를 반환한다.
// - 가중치 타입은 Weight 트레이트로 추상화한다(f64, f32, i64 등).
//
// 디자인 패턴:
// - 값 객체(Value Object).
//
// 참조:
// - src_rs/core/preprocess.rs
// - src_rs/core/merger.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg};

use crate::core::errors::{CoreError, CoreResult};

/// 부호가 있고 순서를 비교할 수 있는 가중치 타입이다.
///
/// `Default` 값을 덧셈 항등원(0)으로 취급한다.
pub trait Weight:
    Copy + PartialOrd + Default + Add<Output = Self> + Neg<Output = Self> + fmt::Debug
{
    fn zero() -> Self {
        Self::default()
    }

    fn magnitude(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }
}

impl<T> Weight for T where
    T: Copy + PartialOrd + Default + Add<Output = T> + Neg<Output = T> + fmt::Debug
{
}

/// 입력 시퀀스 위의 연속 구간과 그 합이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval<T> {
    pub start: usize,
    pub end: usize,
    pub sum: T,
}

impl<T: Weight> Interval<T> {
    pub fn new(start: usize, end: usize, sum: T) -> Self {
        Self { start, end, sum }
    }

    /// `position`에 고정된 길이 0, 합 0 구간을 만든다.
    pub fn empty_at(position: usize) -> Self {
        Self::new(position, position, T::zero())
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_positive(&self) -> bool {
        self.sum > T::zero()
    }

    /// 병합 단계에서 비교 기준으로 쓰는 |sum| 값이다.
    pub fn magnitude(&self) -> T {
        self.sum.magnitude()
    }

    /// 바로 뒤에 이어지는 구간을 이어 붙인다.
    pub fn concat(&self, next: &Self) -> CoreResult<Self> {
        if self.end != next.start {
            return Err(CoreError::IntervalAdjacency {
                left_end: self.end,
                right_start: next.start,
            });
        }

        Ok(Self::new(self.start, next.end, self.sum + next.sum))
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}): cost={}", self.start, self.end, self.sum)
    }
}
