#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: 도메인 에러 (`NodeScannerError`)
//! - [`config`]: 스캐너 설정 (`NodeScannerConfig`, builder)
//! - [`filter`]: 관심 파일 선별 술어 (`AppFileFilter`)
//! - [`grouping`]: 디렉토리별 파일 이름 그룹핑
//! - [`pairing`]: manifest/lockfile 쌍 탐색 (`ManifestLockPair`)
//! - [`collaborators`]: 외부 콜라보레이터 trait
//!   (`LockfileGrammar`, `GraphBuilder`, `InstalledResolver`)
//! - [`scanner`]: 메인 오케스트레이터 (`NodeScanner`)

pub mod collaborators;
pub mod config;
pub mod error;
mod fallback;
pub mod filter;
pub mod grouping;
pub mod pairing;
mod paths;
pub mod scanner;

// --- Public API Re-exports ---

// Scanner (main orchestrator)
pub use scanner::NodeScanner;

// Configuration
pub use config::{NodeScannerConfig, NodeScannerConfigBuilder};

// Error
pub use error::NodeScannerError;

// Filter
pub use filter::{AppFileFilter, WHITEOUT_PREFIX};

// Grouping / Pairing
pub use grouping::group_files_by_directory;
pub use pairing::{ManifestLockPair, find_manifest_lock_pairs};

// Collaborator seams
pub use collaborators::{GraphBuilder, InstalledResolver, LockfileGrammar};
