//! node_modules 폴백 — 임시 추출 루트의 보존과 앱 루트 탐색
//!
//! 쌍이 하나도 발견되지 않았을 때, 추출된 파일을 임시 파일시스템 루트에
//! 상대 구조를 보존하며 기록하고 설치 트리 해석기를 호출하기 위한
//! 헬퍼들입니다. 임시 루트는 [`tempfile::TempDir`]가 소유하므로 모든 종료
//! 경로에서 제거가 보장됩니다 (명시적 `close()` + Drop 최종 방어선).

use std::path::{Component, Path};

use tempfile::TempDir;
use tracing::{debug, warn};

use stevedore_core::types::FilePathToContent;

use crate::error::NodeScannerError;
use crate::filter;
use crate::paths;

/// 임시 추출 루트 디렉토리 이름 접두사
pub(crate) const TEMP_DIR_PREFIX: &str = "stevedore-node-scan-";

/// 추출된 파일을 새 임시 루트 아래에 기록합니다.
///
/// 상대 디렉토리 구조를 보존합니다. whiteout 마커는 삭제 기록이지 내용이
/// 아니므로 기록하지 않으며, 상위 디렉토리(`..`) 컴포넌트를 포함해 루트를
/// 벗어날 수 있는 경로도 건너뜁니다.
pub(crate) async fn persist_app_files(
    files: &FilePathToContent,
) -> Result<TempDir, NodeScannerError> {
    let temp = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .tempdir()
        .map_err(|e| NodeScannerError::Io {
            path: std::env::temp_dir().display().to_string(),
            source: e,
        })?;

    for (path, content) in files {
        if filter::is_whiteout(paths::file_name(path)) {
            debug!(path = %path, "skipping whiteout marker");
            continue;
        }

        let relative = path.trim_start_matches('/');
        if Path::new(relative)
            .components()
            .any(|component| component == Component::ParentDir)
        {
            warn!(path = %path, "skipping path with parent-directory component");
            continue;
        }

        let destination = temp.path().join(relative);
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| NodeScannerError::Io {
                    path: parent.display().to_string(),
                    source: e,
                })?;
        }
        tokio::fs::write(&destination, content)
            .await
            .map_err(|e| NodeScannerError::Io {
                path: destination.display().to_string(),
                source: e,
            })?;
    }

    Ok(temp)
}

/// 입력 매핑에서 앱 루트 디렉토리를 선택합니다.
///
/// manifest를 담은 디렉토리 중 가장 얕은 것을 고릅니다. 깊이가 같으면
/// 사전순으로 앞선 디렉토리가 선택됩니다 (입력이 `BTreeMap`이므로 결정적).
pub(crate) fn find_app_root(files: &FilePathToContent, manifest_file: &str) -> Option<String> {
    files
        .keys()
        .filter(|path| paths::file_name(path) == manifest_file)
        .map(|path| paths::dirname(path))
        .min_by_key(|dir| directory_depth(dir))
}

fn directory_depth(dir: &str) -> usize {
    dir.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .count()
}
