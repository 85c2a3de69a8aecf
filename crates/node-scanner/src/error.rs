//! node 스캐너 에러 타입
//!
//! [`NodeScannerError`]는 스캐너 모듈 내에서 발생할 수 있는 모든 에러를
//! 나타냅니다. `From<NodeScannerError> for StevedoreError` 구현을 통해
//! `?` 연산자로 상위 에러 타입으로 자연스럽게 전파됩니다.
//!
//! 디렉토리가 쌍 규칙에 맞지 않는 경우는 에러가 아니라 조용한 건너뛰기이므로
//! 이 타입에 해당 variant가 없습니다.

use stevedore_core::error::{ConfigError, ScanError, StevedoreError};

/// node 스캐너 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum NodeScannerError {
    /// manifest/lockfile 쌍 파싱 실패 (외부 grammar 콜라보레이터)
    #[error("lockfile parse error: {path}: {reason}")]
    LockfileParse {
        /// 파싱 대상 manifest 경로
        path: String,
        /// 파싱 실패 사유
        reason: String,
    },

    /// 의존성 그래프 생성 실패 (외부 graph builder 콜라보레이터)
    #[error("dep graph build error: {path}: {reason}")]
    GraphBuild {
        /// 관련 manifest 경로
        path: String,
        /// 실패 사유
        reason: String,
    },

    /// 설치 트리 해석 실패 (외부 resolver 콜라보레이터)
    #[error("installed-modules resolve error: {root}: {reason}")]
    Resolve {
        /// 해석 대상 루트 경로
        root: String,
        /// 실패 사유
        reason: String,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },

    /// 디렉토리 그룹에는 있으나 입력 매핑에 내용이 없는 파일
    #[error("missing file content: {path}")]
    MissingContent {
        /// 내용이 없는 파일 경로
        path: String,
    },

    /// 파일 I/O 에러 (임시 루트 보존/정리)
    #[error("io error: {path}: {source}")]
    Io {
        /// 관련 파일 경로
        path: String,
        /// 원본 I/O 에러
        source: std::io::Error,
    },
}

impl From<NodeScannerError> for StevedoreError {
    fn from(err: NodeScannerError) -> Self {
        match err {
            NodeScannerError::LockfileParse { path, reason } => StevedoreError::Scan(
                ScanError::ParseFailed(format!("lockfile parse error: {path}: {reason}")),
            ),
            NodeScannerError::GraphBuild { path, reason } => StevedoreError::Scan(
                ScanError::GraphBuild(format!("dep graph build error: {path}: {reason}")),
            ),
            NodeScannerError::Resolve { root, reason } => StevedoreError::Scan(
                ScanError::ResolveFailed(format!("resolve error: {root}: {reason}")),
            ),
            NodeScannerError::Config { field, reason } => {
                StevedoreError::Config(ConfigError::InvalidValue { field, reason })
            }
            NodeScannerError::MissingContent { path } => {
                StevedoreError::Scan(ScanError::ScanFailed(format!("missing file content: {path}")))
            }
            NodeScannerError::Io { path, source } => {
                StevedoreError::Scan(ScanError::ScanFailed(format!("io error: {path}: {source}")))
            }
        }
    }
}
