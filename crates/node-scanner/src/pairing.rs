//! manifest/lockfile 쌍 탐색
//!
//! 디렉토리 그룹에서 manifest와 lockfile이 정확히 둘만 함께 있는 조합을
//! 찾습니다. 그 외의 모든 조합은 에러가 아니라 의도된 필터링 정책으로
//! 조용히 건너뜁니다.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use stevedore_core::types::LockfileType;

use crate::config::NodeScannerConfig;
use crate::paths;

/// 같은 디렉토리에서 발견된 manifest + lockfile 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLockPair {
    /// manifest 파일 경로
    pub manifest: String,
    /// lockfile 경로
    pub lock: String,
    /// lockfile 종류 — 존재하는 lockfile 이름으로 완전히 결정됨
    pub lock_type: LockfileType,
}

/// 디렉토리 그룹에서 조건을 만족하는 쌍 목록을 수집합니다.
///
/// # 규칙
///
/// - 경로 세그먼트에 설치 디렉토리 마커가 포함된 디렉토리는 즉시 제외 —
///   설치된 패키지에 번들된 manifest 사본과의 매칭을 막습니다.
/// - 관심 파일이 **정확히 두 개**인 디렉토리만 대상이 됩니다.
/// - {manifest, npm lock} → npm, {manifest, yarn lock} → yarn.
///   그 외 개수·조합은 건너뜁니다.
///
/// 출력 순서는 디렉토리 순회 순서(사전순)를 따릅니다.
pub fn find_manifest_lock_pairs(
    groups: &BTreeMap<String, BTreeSet<String>>,
    config: &NodeScannerConfig,
) -> Vec<ManifestLockPair> {
    let mut pairs = Vec::new();

    for (directory, names) in groups {
        if directory
            .split('/')
            .any(|segment| segment.contains(config.install_dir_marker.as_str()))
        {
            debug!(directory = %directory, "skipping install directory");
            continue;
        }

        if names.len() != 2 {
            // 파일이 모자라거나 너무 많음 — 무시
            debug!(
                directory = %directory,
                files = names.len(),
                "directory does not hold exactly two app files, skipping"
            );
            continue;
        }

        let has_manifest = names.contains(&config.manifest_file);
        let has_npm_lock = names.contains(&config.npm_lock_file);
        let has_yarn_lock = names.contains(&config.yarn_lock_file);

        if has_manifest && has_npm_lock {
            pairs.push(ManifestLockPair {
                manifest: paths::join(directory, &config.manifest_file),
                lock: paths::join(directory, &config.npm_lock_file),
                lock_type: LockfileType::Npm,
            });
            continue;
        }

        if has_manifest && has_yarn_lock {
            pairs.push(ManifestLockPair {
                manifest: paths::join(directory, &config.manifest_file),
                lock: paths::join(directory, &config.yarn_lock_file),
                lock_type: LockfileType::Yarn,
            });
        }
    }

    pairs
}
