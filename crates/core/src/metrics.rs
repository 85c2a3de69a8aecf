//! 메트릭 상수 및 설명 등록
//!
//! 모든 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 각 모듈은 이 상수를 사용하여 `metrics::counter!()` 매크로를 호출합니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `stevedore_`
//! - 모듈명: `node_scanner_`, `dockerfile_`
//! - 접미어: `_total` (counter)

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// lockfile 종류 레이블 키 (npm, yarn)
pub const LABEL_LOCK_TYPE: &str = "lock_type";

// ─── Node Scanner 메트릭 ────────────────────────────────────────────

/// Node Scanner: 수행된 스캔 호출 수 (counter)
pub const NODE_SCANNER_SCANS_TOTAL: &str = "stevedore_node_scanner_scans_total";

/// Node Scanner: 생성된 스캔 결과 수 (counter, label: lock_type)
pub const NODE_SCANNER_RESULTS_TOTAL: &str = "stevedore_node_scanner_results_total";

/// Node Scanner: node_modules 폴백 경로로 진입한 횟수 (counter)
pub const NODE_SCANNER_FALLBACK_SCANS_TOTAL: &str = "stevedore_node_scanner_fallback_scans_total";

// ─── Dockerfile Analyzer 메트릭 ─────────────────────────────────────

/// Dockerfile Analyzer: 분석된 Dockerfile 수 (counter)
pub const DOCKERFILE_ANALYSES_TOTAL: &str = "stevedore_dockerfile_analyses_total";

/// Dockerfile Analyzer: base image를 찾지 못한 분석 수 (counter)
pub const DOCKERFILE_ANALYSIS_ERRORS_TOTAL: &str = "stevedore_dockerfile_analysis_errors_total";

// ─── 설명 등록 함수 ─────────────────────────────────────────────────

/// 모든 메트릭의 설명(description)을 등록합니다.
///
/// 전역 레코더 설치 후 한 번만 호출해야 합니다.
pub fn describe_all() {
    use metrics::describe_counter;

    describe_counter!(
        NODE_SCANNER_SCANS_TOTAL,
        "Total number of node application scan invocations"
    );
    describe_counter!(
        NODE_SCANNER_RESULTS_TOTAL,
        "Total number of scan results produced, by lockfile type"
    );
    describe_counter!(
        NODE_SCANNER_FALLBACK_SCANS_TOTAL,
        "Total number of scans that fell back to node_modules resolution"
    );
    describe_counter!(
        DOCKERFILE_ANALYSES_TOTAL,
        "Total number of Dockerfiles analysed"
    );
    describe_counter!(
        DOCKERFILE_ANALYSIS_ERRORS_TOTAL,
        "Total number of Dockerfile analyses that could not resolve a base image"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_METRIC_NAMES: &[&str] = &[
        NODE_SCANNER_SCANS_TOTAL,
        NODE_SCANNER_RESULTS_TOTAL,
        NODE_SCANNER_FALLBACK_SCANS_TOTAL,
        DOCKERFILE_ANALYSES_TOTAL,
        DOCKERFILE_ANALYSIS_ERRORS_TOTAL,
    ];

    #[test]
    fn all_metrics_start_with_stevedore_prefix() {
        for name in ALL_METRIC_NAMES {
            assert!(
                name.starts_with("stevedore_"),
                "Metric '{}' does not start with 'stevedore_' prefix",
                name
            );
        }
    }

    #[test]
    fn all_counters_end_with_total() {
        for name in ALL_METRIC_NAMES {
            assert!(
                name.ends_with("_total"),
                "Counter '{}' does not end with '_total'",
                name
            );
        }
    }

    #[test]
    fn describe_all_does_not_panic() {
        // describe_all() should not panic even without a recorder installed
        describe_all();
    }

    #[test]
    fn label_keys_are_lowercase() {
        assert_eq!(LABEL_LOCK_TYPE.to_lowercase(), LABEL_LOCK_TYPE);
    }
}
