//! 입력 파일 필터 — 관심 파일 선별 술어
//!
//! 추출 계층은 이 술어로 컨테이너 파일시스템에서 관심 파일만 골라냅니다.
//! 관심 파일은 manifest/lockfile 이름들과 그 whiteout 변형(나중 레이어에서
//! 삭제된 파일을 나타내는 `.wh.` 접두 이름)이며, 예약된 시스템 디렉토리
//! 아래의 경로는 제외됩니다.

use stevedore_core::types::FilePathToContent;

use crate::config::NodeScannerConfig;
use crate::paths;

/// 레이어 파일시스템의 whiteout(삭제 마커) 파일 이름 접두사
pub const WHITEOUT_PREFIX: &str = ".wh.";

/// 관심 파일 선별 술어
///
/// 조회 목록은 생성 시 설정에서 고정되며 이후 변하지 않습니다.
#[derive(Debug, Clone)]
pub struct AppFileFilter {
    /// 제외 디렉토리 토큰
    ignored_paths: Vec<String>,
    /// 관심 파일 이름
    app_files: Vec<String>,
    /// 관심 파일의 whiteout 변형 이름
    deleted_app_files: Vec<String>,
}

impl AppFileFilter {
    /// 설정에서 필터를 생성합니다.
    pub fn new(config: &NodeScannerConfig) -> Self {
        let app_files: Vec<String> = config
            .app_files()
            .iter()
            .map(|name| (*name).to_owned())
            .collect();
        let deleted_app_files = app_files
            .iter()
            .map(|name| format!("{WHITEOUT_PREFIX}{name}"))
            .collect();
        Self {
            ignored_paths: config.ignored_paths.clone(),
            app_files,
            deleted_app_files,
        }
    }

    /// 경로가 관심 대상인지 판별합니다.
    pub fn matches(&self, file_path: &str) -> bool {
        let name = paths::file_name(file_path);
        let dir = paths::dirname(file_path);

        if self
            .ignored_paths
            .iter()
            .any(|token| dir.contains(token.as_str()))
        {
            return false;
        }

        self.app_files.iter().any(|f| f == name)
            || self.deleted_app_files.iter().any(|f| f == name)
    }

    /// 매핑에서 관심 파일만 남긴 사본을 반환합니다.
    pub fn retain(&self, files: &FilePathToContent) -> FilePathToContent {
        files
            .iter()
            .filter(|(path, _)| self.matches(path))
            .map(|(path, content)| (path.clone(), content.clone()))
            .collect()
    }
}

/// 파일 이름이 whiteout(삭제 마커)인지 판별합니다.
pub(crate) fn is_whiteout(name: &str) -> bool {
    name.starts_with(WHITEOUT_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> AppFileFilter {
        AppFileFilter::new(&NodeScannerConfig::default())
    }

    #[test]
    fn matches_app_files() {
        let filter = filter();
        assert!(filter.matches("/srv/app/package.json"));
        assert!(filter.matches("/srv/app/package-lock.json"));
        assert!(filter.matches("/srv/app/yarn.lock"));
    }

    #[test]
    fn matches_whiteout_variants() {
        let filter = filter();
        assert!(filter.matches("/srv/app/.wh.package.json"));
        assert!(filter.matches("/srv/app/.wh.yarn.lock"));
    }

    #[test]
    fn rejects_unrelated_files() {
        let filter = filter();
        assert!(!filter.matches("/srv/app/index.js"));
        assert!(!filter.matches("/srv/app/README.md"));
    }

    #[test]
    fn rejects_ignored_directories() {
        let filter = filter();
        assert!(!filter.matches("/usr/lib/node/package.json"));
        assert!(!filter.matches("/tmp/build/package.json"));
        assert!(!filter.matches("/opt/app/yarn.lock"));
    }

    #[test]
    fn retain_keeps_only_matching_entries() {
        let filter = filter();
        let files = FilePathToContent::from([
            ("/srv/app/package.json".to_owned(), "{}".to_owned()),
            ("/srv/app/index.js".to_owned(), "code".to_owned()),
            ("/usr/lib/package.json".to_owned(), "{}".to_owned()),
        ]);

        let kept = filter.retain(&files);
        assert_eq!(kept.len(), 1);
        assert!(kept.contains_key("/srv/app/package.json"));
    }

    #[test]
    fn whiteout_detection() {
        assert!(is_whiteout(".wh.package.json"));
        assert!(!is_whiteout("package.json"));
    }
}
