//! 도메인 타입 — 의존성 사실(dependency facts)을 표현하는 공통 타입
//!
//! 컨테이너 파일시스템에서 추출한 파일 매핑, manifest/lockfile 쌍의 스캔 결과,
//! 외부 콜라보레이터가 생성하는 패키지 트리와 의존성 그래프를 정의합니다.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 추출된 파일 경로 → 텍스트 내용 매핑
///
/// `BTreeMap`을 사용하여 디렉토리 순회가 항상 사전순으로 결정적이 되도록 합니다.
/// 스캔 결과 순서의 재현성은 이 순서에 의존합니다.
pub type FilePathToContent = BTreeMap<String, String>;

/// Lockfile 종류 (패키지 관리자)
///
/// 디렉토리에 존재하는 lockfile 파일명으로 완전히 결정됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockfileType {
    /// package-lock.json
    Npm,
    /// yarn.lock
    Yarn,
}

impl fmt::Display for LockfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npm => write!(f, "npm"),
            Self::Yarn => write!(f, "yarn"),
        }
    }
}

impl LockfileType {
    /// 문자열에서 lockfile 종류를 파싱합니다 (대소문자 구분 없음).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "npm" => Some(Self::Npm),
            "yarn" => Some(Self::Yarn),
            _ => None,
        }
    }
}

/// 외부 lockfile grammar가 반환하는 원시 패키지 트리
///
/// 라벨 값이 비어 있을 수 있는(`Option`) 형태 그대로를 나타냅니다.
/// 다운스트림 그래프 빌더는 빈 라벨을 허용하지 않으므로,
/// [`PackageTree`]로 변환하여 정규화한 뒤에 전달해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPackageTree {
    /// 루트 패키지 이름
    pub name: String,
    /// 루트 패키지 버전
    pub version: String,
    /// 라벨 매핑 — 값이 없는 항목이 포함될 수 있음
    #[serde(default)]
    pub labels: BTreeMap<String, Option<String>>,
    /// 하위 의존성 트리
    #[serde(default)]
    pub dependencies: BTreeMap<String, RawPackageTree>,
}

/// 정규화된 패키지 트리
///
/// [`RawPackageTree`]와 동일한 구조이지만 라벨 매핑이 구조적으로
/// 빈 값을 담을 수 없습니다. 변환 시 값이 없는 라벨은 걸러내는 것이 아니라
/// 처음부터 삽입되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTree {
    /// 루트 패키지 이름
    pub name: String,
    /// 루트 패키지 버전
    pub version: String,
    /// 라벨 매핑 — 항상 완전한 값만 존재
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// 하위 의존성 트리
    #[serde(default)]
    pub dependencies: BTreeMap<String, PackageTree>,
}

impl From<RawPackageTree> for PackageTree {
    fn from(raw: RawPackageTree) -> Self {
        let labels = raw
            .labels
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect();
        let dependencies = raw
            .dependencies
            .into_iter()
            .map(|(name, subtree)| (name, subtree.into()))
            .collect();
        Self {
            name: raw.name,
            version: raw.version,
            labels,
            dependencies,
        }
    }
}

impl PackageTree {
    /// 트리 전체의 노드 수를 반환합니다 (루트 포함).
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .values()
            .map(PackageTree::node_count)
            .sum::<usize>()
    }
}

/// 외부 graph builder가 생성한 의존성 그래프
///
/// 그래프 본문은 콜라보레이터 고유 형식이므로 불투명한 JSON 값으로 담고,
/// 탐지된 패키지 관리자 이름만 별도 필드로 노출합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepGraph {
    /// 탐지된 패키지 관리자 이름 (예: "npm", "yarn")
    pub package_manager: String,
    /// 그래프 본문 (콜라보레이터 고유 형식)
    pub graph: serde_json::Value,
}

/// 스캔 결과에 첨부되는 타입별 페이로드
///
/// 닫힌 태그 유니언입니다. 직렬화 시 `{"type": "...", "data": ...}` 형태가 됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Fact {
    /// 의존성 그래프 사실
    DepGraph(DepGraph),
    /// 스캔에 사용된 파일 이름 목록 (manifest, lockfile 순)
    TestedFiles(Vec<String>),
}

impl Fact {
    /// 로깅용 태그 이름을 반환합니다.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::DepGraph(_) => "depGraph",
            Self::TestedFiles(_) => "testedFiles",
        }
    }
}

/// 스캔 결과의 식별 정보
///
/// `target_file`은 항상 manifest 경로를 가리킵니다. lockfile 경로가 아닙니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// 그래프에서 탐지된 패키지 관리자 이름
    #[serde(rename = "type")]
    pub kind: String,
    /// 스캔 대상 manifest 파일 경로
    #[serde(rename = "targetFile")]
    pub target_file: String,
}

/// 발견된 애플리케이션 하나의 의존성 증거
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// 순서 있는 사실 목록
    pub facts: Vec<Fact>,
    /// 식별 정보
    pub identity: Identity,
}

impl ScanResult {
    /// 첫 번째 의존성 그래프 사실을 반환합니다.
    pub fn dep_graph(&self) -> Option<&DepGraph> {
        self.facts.iter().find_map(|fact| match fact {
            Fact::DepGraph(graph) => Some(graph),
            Fact::TestedFiles(_) => None,
        })
    }

    /// 첫 번째 tested-files 사실을 반환합니다.
    pub fn tested_files(&self) -> Option<&[String]> {
        self.facts.iter().find_map(|fact| match fact {
            Fact::TestedFiles(files) => Some(files.as_slice()),
            Fact::DepGraph(_) => None,
        })
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScanResult({}, {}, {} facts)",
            self.identity.kind,
            self.identity.target_file,
            self.facts.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> DepGraph {
        DepGraph {
            package_manager: "npm".to_owned(),
            graph: serde_json::json!({ "schemaVersion": "1.2.0" }),
        }
    }

    #[test]
    fn lockfile_type_display() {
        assert_eq!(LockfileType::Npm.to_string(), "npm");
        assert_eq!(LockfileType::Yarn.to_string(), "yarn");
    }

    #[test]
    fn lockfile_type_from_str_loose() {
        assert_eq!(LockfileType::from_str_loose("npm"), Some(LockfileType::Npm));
        assert_eq!(
            LockfileType::from_str_loose("YARN"),
            Some(LockfileType::Yarn)
        );
        assert_eq!(LockfileType::from_str_loose("pip"), None);
    }

    #[test]
    fn sanitize_drops_absent_labels() {
        let raw = RawPackageTree {
            name: "app".to_owned(),
            version: "1.0.0".to_owned(),
            labels: BTreeMap::from([
                ("scope".to_owned(), Some("prod".to_owned())),
                ("pruned".to_owned(), None),
            ]),
            dependencies: BTreeMap::new(),
        };

        let tree = PackageTree::from(raw);
        assert_eq!(tree.labels.len(), 1);
        assert_eq!(tree.labels.get("scope").map(String::as_str), Some("prod"));
        assert!(!tree.labels.contains_key("pruned"));
    }

    #[test]
    fn sanitize_recurses_into_dependencies() {
        let raw = RawPackageTree {
            name: "app".to_owned(),
            version: "1.0.0".to_owned(),
            labels: BTreeMap::new(),
            dependencies: BTreeMap::from([(
                "lodash".to_owned(),
                RawPackageTree {
                    name: "lodash".to_owned(),
                    version: "4.17.21".to_owned(),
                    labels: BTreeMap::from([("missing".to_owned(), None)]),
                    dependencies: BTreeMap::new(),
                },
            )]),
        };

        let tree = PackageTree::from(raw);
        let lodash = tree.dependencies.get("lodash").unwrap();
        assert!(lodash.labels.is_empty());
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn fact_serializes_with_closed_tags() {
        let fact = Fact::DepGraph(sample_graph());
        let json = serde_json::to_value(&fact).unwrap();
        assert_eq!(json["type"], "depGraph");
        assert_eq!(json["data"]["packageManager"], "npm");

        let fact = Fact::TestedFiles(vec!["package.json".to_owned(), "yarn.lock".to_owned()]);
        let json = serde_json::to_value(&fact).unwrap();
        assert_eq!(json["type"], "testedFiles");
        assert_eq!(json["data"][0], "package.json");
    }

    #[test]
    fn identity_serializes_renamed_fields() {
        let identity = Identity {
            kind: "npm".to_owned(),
            target_file: "/srv/app/package.json".to_owned(),
        };
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["type"], "npm");
        assert_eq!(json["targetFile"], "/srv/app/package.json");
    }

    #[test]
    fn scan_result_fact_accessors() {
        let result = ScanResult {
            facts: vec![
                Fact::DepGraph(sample_graph()),
                Fact::TestedFiles(vec!["package.json".to_owned()]),
            ],
            identity: Identity {
                kind: "npm".to_owned(),
                target_file: "package.json".to_owned(),
            },
        };

        assert_eq!(result.dep_graph().unwrap().package_manager, "npm");
        assert_eq!(result.tested_files().unwrap(), ["package.json"]);
        assert_eq!(result.to_string(), "ScanResult(npm, package.json, 2 facts)");
    }

    #[test]
    fn fact_kind_names() {
        assert_eq!(Fact::DepGraph(sample_graph()).kind_name(), "depGraph");
        assert_eq!(Fact::TestedFiles(vec![]).kind_name(), "testedFiles");
    }
}
