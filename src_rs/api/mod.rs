// 목적:
// - Python FFI 경계 모듈을 선언한다.
//
// 설명:
// - numpy 배열 함수와 JSON 브릿지 클래스를 한 모듈에 모아 Python 계층에서 사용하게 한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/kbest_bridge.rs

pub mod kbest_bridge;
