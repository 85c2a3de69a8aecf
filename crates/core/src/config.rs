//! 설정 관리 — stevedore.toml 파싱 및 유효성 검증
//!
//! [`StevedoreConfig`]는 TOML 설정 파일의 루트이며, 각 모듈은 자신의 섹션을
//! 바탕으로 모듈 고유 설정을 파생시킵니다
//! (예: `stevedore-node-scanner`의 `NodeScannerConfig::from_core`).
//!
//! # 설정 파일 예시
//!
//! ```toml
//! [node]
//! ignored_paths = ["/usr", "/tmp", "/opt"]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 경로 문자열 최대 길이
const MAX_PATH_LEN: usize = 4096;

/// Stevedore 전역 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StevedoreConfig {
    /// node 애플리케이션 스캐너 설정
    #[serde(default)]
    pub node: NodeConfig,
}

/// node 애플리케이션 스캐너 설정 ([node] 섹션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// 스캔에서 제외할 시스템 디렉토리 토큰 목록
    ///
    /// 파일의 디렉토리 경로에 이 토큰이 포함되면 해당 파일은 입력에서 제외됩니다.
    #[serde(default = "default_ignored_paths")]
    pub ignored_paths: Vec<String>,
}

fn default_ignored_paths() -> Vec<String> {
    vec!["/usr".to_owned(), "/tmp".to_owned(), "/opt".to_owned()]
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            ignored_paths: default_ignored_paths(),
        }
    }
}

impl StevedoreConfig {
    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 설정 값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in &self.node.ignored_paths {
            if path.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "node.ignored_paths".to_owned(),
                    reason: "ignored path token must not be empty".to_owned(),
                });
            }
            if path.len() > MAX_PATH_LEN {
                return Err(ConfigError::InvalidValue {
                    field: "node.ignored_paths".to_owned(),
                    reason: format!("path token exceeds maximum length {}", MAX_PATH_LEN),
                });
            }
        }
        Ok(())
    }
}
