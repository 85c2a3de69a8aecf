//! 분석 결과 타입
//!
//! [`DockerfileAnalysis`]는 Dockerfile 하나에 대한 분석 사실 전체를 담습니다.
//! 직렬화 시 camelCase 키(`baseImage`, `dockerfilePackages`, `dockerfileLayers`)를
//! 사용합니다.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 패키지/레이어 항목의 값 — 해당 사실을 만든 명령의 원문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionRecord {
    /// RUN 명령의 원본 텍스트 (ARG 치환·정규화 없음)
    pub instruction: String,
}

/// base image 미해결을 나타내는 구조화 코드
///
/// 닫힌 enum입니다. 직렬화 시 `"BASE_IMAGE_NAME_NOT_FOUND"` 문자열이 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisErrorCode {
    /// FROM 명령에서 base image 이름을 해석하지 못함
    #[serde(rename = "BASE_IMAGE_NAME_NOT_FOUND")]
    BaseImageNameNotFound,
}

impl AnalysisErrorCode {
    /// 코드 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseImageNameNotFound => "BASE_IMAGE_NAME_NOT_FOUND",
        }
    }
}

impl fmt::Display for AnalysisErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 분석 결과에 인라인으로 포함되는 도메인 에러
///
/// 예외로 던져지지 않고 데이터로 반환됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisError {
    /// 에러 코드
    pub code: AnalysisErrorCode,
}

/// Dockerfile 하나의 분석 사실
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerfileAnalysis {
    /// 첫 번째 스테이지의 (ARG 치환 완료된) base image 참조
    pub base_image: Option<String>,
    /// 설치된 패키지 이름 → 명령 원문
    pub dockerfile_packages: BTreeMap<String, InstructionRecord>,
    /// 명령 원문의 base64 키 → 명령 원문
    pub dockerfile_layers: BTreeMap<String, InstructionRecord>,
    /// base image 미해결 시에만 설정되는 에러 코드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AnalysisError>,
}
