//! Dockerfile 분석기 에러 타입
//!
//! 파일을 읽지 못하는 I/O 실패만 에러로 전파됩니다. base image를 찾지 못한
//! 경우는 에러가 아니라 분석 결과의 `error` 필드(데이터)로 반환됩니다.
//! [`types::AnalysisError`](crate::types::AnalysisError)를 참고하세요.

use stevedore_core::error::{ScanError, StevedoreError};

/// Dockerfile 분석기 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum DockerfileAnalyzerError {
    /// Dockerfile 읽기 실패
    #[error("io error: {path}: {source}")]
    Io {
        /// 읽기 대상 파일 경로
        path: String,
        /// 원본 I/O 에러
        source: std::io::Error,
    },
}

impl From<DockerfileAnalyzerError> for StevedoreError {
    fn from(err: DockerfileAnalyzerError) -> Self {
        match err {
            DockerfileAnalyzerError::Io { path, source } => {
                StevedoreError::Scan(ScanError::ScanFailed(format!("io error: {path}: {source}")))
            }
        }
    }
}
