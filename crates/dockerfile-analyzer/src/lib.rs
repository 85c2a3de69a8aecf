#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: 도메인 에러 (`DockerfileAnalyzerError`)
//! - [`types`]: 분석 결과 타입 (`DockerfileAnalysis`, `InstructionRecord`, `AnalysisError`)
//! - [`args`]: ARG 선언 수집 및 변수 치환 (`ArgResolver`)
//! - [`instruction`]: RUN 명령의 패키지 설치 인식/추출
//! - [`analyzer`]: 줄 단위 상태 머신 (`analyse_dockerfile`, `read_dockerfile_and_analyse`)
//! - [`util`]: 레이어 키 base64 인코딩

pub mod analyzer;
pub mod args;
pub mod error;
pub mod instruction;
mod stage;
pub mod types;
pub mod util;

// --- Public API Re-exports ---

pub use analyzer::{analyse_dockerfile, read_dockerfile_and_analyse};
pub use args::ArgResolver;
pub use error::DockerfileAnalyzerError;
pub use types::{AnalysisError, AnalysisErrorCode, DockerfileAnalysis, InstructionRecord};
