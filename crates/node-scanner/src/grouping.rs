//! 디렉토리 그룹핑 — 추출 파일 매핑을 디렉토리별 파일 이름 집합으로 변환

use std::collections::{BTreeMap, BTreeSet};

use stevedore_core::types::FilePathToContent;

use crate::paths;

/// 파일 경로 매핑을 디렉토리 → 파일 이름 집합으로 그룹핑합니다.
///
/// 순수 함수이며 실패하지 않습니다. 파일이 없는 디렉토리는 결과에
/// 나타나지 않습니다. `BTreeMap`이므로 디렉토리 순회는 항상 사전순입니다.
pub fn group_files_by_directory(files: &FilePathToContent) -> BTreeMap<String, BTreeSet<String>> {
    let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for path in files.keys() {
        let directory = paths::dirname(path);
        let name = paths::file_name(path).to_owned();
        groups.entry(directory).or_default().insert(name);
    }
    groups
}
