// 목적:
// - tracing 구독자(subscriber)를 설치한다.
//
// 설명:
// - KBEST_LOG 환경 변수로 필터를 지정하며, 없거나 잘못되면 warn 레벨을 사용한다.
// - 이미 전역 구독자가 있으면 아무것도 하지 않는다.
//
// 참조:
// - src_rs/api/kbest_bridge.rs

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "KBEST_LOG";
const DEFAULT_FILTER: &str = "warn";

/// 전역 로깅을 초기화한다. 새로 설치했으면 true를 반환한다.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
