//! 에러 타입 — 도메인별 에러 정의

/// Stevedore 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum StevedoreError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 스캔 처리 에러
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 스캔 처리 에러
///
/// 각 스캐너 모듈의 도메인 에러가 이 타입으로 변환되어 상위로 전파됩니다.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// manifest/lockfile 파싱 실패 (외부 grammar 콜라보레이터)
    #[error("parse failed: {0}")]
    ParseFailed(String),

    /// 의존성 그래프 생성 실패 (외부 graph builder 콜라보레이터)
    #[error("graph build failed: {0}")]
    GraphBuild(String),

    /// 설치 트리 해석 실패 (외부 resolver 콜라보레이터)
    #[error("resolve failed: {0}")]
    ResolveFailed(String),

    /// 그 외 스캔 실패
    #[error("scan failed: {0}")]
    ScanFailed(String),
}
