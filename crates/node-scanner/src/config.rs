//! node 스캐너 설정
//!
//! [`NodeScannerConfig`]는 core의 [`NodeConfig`](stevedore_core::config::NodeConfig)를
//! 확장하여 스캐너 고유 설정(관심 파일 이름, 설치 디렉토리 마커)을 추가합니다.
//! 고정 조회 목록은 전역이 아니라 이 설정 값으로 컴포넌트에 전달됩니다.
//!
//! # 사용 예시
//!
//! ```
//! use stevedore_node_scanner::NodeScannerConfig;
//!
//! // 기본값으로 생성
//! let config = NodeScannerConfig::default();
//! config.validate().unwrap();
//!
//! // 빌더로 생성
//! use stevedore_node_scanner::NodeScannerConfigBuilder;
//!
//! let config = NodeScannerConfigBuilder::new()
//!     .ignored_paths(vec!["/usr".to_owned()])
//!     .build()
//!     .unwrap();
//! ```

use crate::error::NodeScannerError;

/// node 스캐너 설정
///
/// core의 `NodeConfig`에서 파생되며, 모듈 고유 확장 필드를 포함합니다.
#[derive(Debug, Clone)]
pub struct NodeScannerConfig {
    /// 스캔에서 제외할 시스템 디렉토리 토큰 목록
    pub ignored_paths: Vec<String>,
    /// manifest 파일 이름
    pub manifest_file: String,
    /// npm lockfile 이름
    pub npm_lock_file: String,
    /// yarn lockfile 이름
    pub yarn_lock_file: String,
    /// 설치 디렉토리 마커 — 경로 세그먼트에 포함되면 해당 디렉토리 전체 제외
    pub install_dir_marker: String,
}

impl Default for NodeScannerConfig {
    fn default() -> Self {
        Self {
            ignored_paths: vec!["/usr".to_owned(), "/tmp".to_owned(), "/opt".to_owned()],
            manifest_file: "package.json".to_owned(),
            npm_lock_file: "package-lock.json".to_owned(),
            yarn_lock_file: "yarn.lock".to_owned(),
            install_dir_marker: "node_modules".to_owned(),
        }
    }
}

impl NodeScannerConfig {
    /// core의 `NodeConfig`에서 스캐너 설정을 생성합니다.
    ///
    /// core 설정에 없는 확장 필드는 기본값을 사용합니다.
    pub fn from_core(core: &stevedore_core::config::NodeConfig) -> Self {
        Self {
            ignored_paths: core.ignored_paths.clone(),
            ..Self::default()
        }
    }

    /// 관심 대상 파일 이름 목록(manifest + lockfile들)을 반환합니다.
    pub fn app_files(&self) -> [&str; 3] {
        [
            self.manifest_file.as_str(),
            self.npm_lock_file.as_str(),
            self.yarn_lock_file.as_str(),
        ]
    }

    /// 설정 값의 유효성을 검증합니다.
    ///
    /// # 검증 규칙
    ///
    /// - 파일 이름 세 가지와 설치 디렉토리 마커는 비어 있으면 안 되고
    ///   경로 구분자를 포함할 수 없음
    /// - `ignored_paths`의 토큰은 비어 있으면 안 됨
    pub fn validate(&self) -> Result<(), NodeScannerError> {
        let file_fields = [
            ("manifest_file", &self.manifest_file),
            ("npm_lock_file", &self.npm_lock_file),
            ("yarn_lock_file", &self.yarn_lock_file),
            ("install_dir_marker", &self.install_dir_marker),
        ];
        for (field, value) in file_fields {
            if value.is_empty() {
                return Err(NodeScannerError::Config {
                    field: field.to_owned(),
                    reason: "must not be empty".to_owned(),
                });
            }
            if value.contains('/') {
                return Err(NodeScannerError::Config {
                    field: field.to_owned(),
                    reason: "must not contain a path separator".to_owned(),
                });
            }
        }

        for token in &self.ignored_paths {
            if token.is_empty() {
                return Err(NodeScannerError::Config {
                    field: "ignored_paths".to_owned(),
                    reason: "ignored path token must not be empty".to_owned(),
                });
            }
        }

        Ok(())
    }
}

/// [`NodeScannerConfig`] 빌더
#[derive(Default)]
pub struct NodeScannerConfigBuilder {
    config: NodeScannerConfig,
}

impl NodeScannerConfigBuilder {
    /// 기본값을 가진 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 제외 디렉토리 토큰 목록을 설정합니다.
    pub fn ignored_paths(mut self, paths: Vec<String>) -> Self {
        self.config.ignored_paths = paths;
        self
    }

    /// manifest 파일 이름을 설정합니다.
    pub fn manifest_file(mut self, name: impl Into<String>) -> Self {
        self.config.manifest_file = name.into();
        self
    }

    /// npm lockfile 이름을 설정합니다.
    pub fn npm_lock_file(mut self, name: impl Into<String>) -> Self {
        self.config.npm_lock_file = name.into();
        self
    }

    /// yarn lockfile 이름을 설정합니다.
    pub fn yarn_lock_file(mut self, name: impl Into<String>) -> Self {
        self.config.yarn_lock_file = name.into();
        self
    }

    /// 설치 디렉토리 마커를 설정합니다.
    pub fn install_dir_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.install_dir_marker = marker.into();
        self
    }

    /// 설정을 검증하고 빌드합니다.
    ///
    /// # Errors
    ///
    /// 유효성 검증 실패 시 `NodeScannerError::Config` 반환
    pub fn build(self) -> Result<NodeScannerConfig, NodeScannerError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
