//! node 스캐너 오케스트레이터 — 전체 스캔 흐름 관리
//!
//! [`NodeScanner`]는 추출 파일 매핑 하나를 받아 스캔 결과 목록을 돌려줍니다.
//! 쌍 기반 경로와 node_modules 폴백 경로를 모두 소유하며, 외부
//! 콜라보레이터는 제네릭 파라미터로 주입됩니다.
//!
//! # 처리 순서
//!
//! 쌍은 발견 순서(디렉토리 사전순)대로 하나씩 처리되며, 각 쌍의
//! 콜라보레이터 호출이 끝난 뒤 다음 쌍으로 넘어갑니다. 결과 순서는 발견
//! 순서와 같습니다. 콜라보레이터 실패는 재시도 없이 한 번에 전파됩니다.

use std::path::Path;

use tracing::{debug, info, warn};

use stevedore_core::metrics as metric;
use stevedore_core::types::{Fact, FilePathToContent, Identity, LockfileType, PackageTree, ScanResult};

use crate::collaborators::{GraphBuilder, InstalledResolver, LockfileGrammar};
use crate::config::NodeScannerConfig;
use crate::error::NodeScannerError;
use crate::fallback;
use crate::filter::AppFileFilter;
use crate::grouping;
use crate::pairing::{self, ManifestLockPair};
use crate::paths;

/// 쌍 기반 파싱에서 개발 의존성 포함 여부
const INCLUDE_DEV_DEPENDENCIES: bool = false;

/// manifest/lockfile 불일치를 에러로 취급할지 여부
const STRICT_OUT_OF_SYNC: bool = false;

/// 폴백 해석에서 개발 의존성 포함 여부
const FALLBACK_INCLUDE_DEV: bool = true;

/// node 애플리케이션 스캐너
///
/// 콜라보레이터 타입:
///
/// - `G`: manifest+lockfile 문법 파서
/// - `B`: 트리 → 의존성 그래프 변환기
/// - `R`: 설치 트리 해석기 (폴백 경로)
pub struct NodeScanner<G, B, R> {
    /// 스캐너 설정
    config: NodeScannerConfig,
    /// 입력 파일 필터
    filter: AppFileFilter,
    /// lockfile 문법 파서
    grammar: G,
    /// 그래프 빌더
    graph_builder: B,
    /// 설치 트리 해석기
    resolver: R,
}

impl<G, B, R> NodeScanner<G, B, R>
where
    G: LockfileGrammar,
    B: GraphBuilder,
    R: InstalledResolver,
{
    /// 설정을 검증하고 스캐너를 생성합니다.
    pub fn new(
        config: NodeScannerConfig,
        grammar: G,
        graph_builder: B,
        resolver: R,
    ) -> Result<Self, NodeScannerError> {
        config.validate()?;
        let filter = AppFileFilter::new(&config);
        Ok(Self {
            config,
            filter,
            grammar,
            graph_builder,
            resolver,
        })
    }

    /// 스캐너 설정을 반환합니다.
    pub fn config(&self) -> &NodeScannerConfig {
        &self.config
    }

    /// 입력 파일 필터를 반환합니다.
    ///
    /// 추출 계층이 관심 파일 선별 술어로 사용할 수 있습니다.
    pub fn filter(&self) -> &AppFileFilter {
        &self.filter
    }

    /// 추출 파일 매핑을 스캔하여 결과 목록을 반환합니다.
    ///
    /// manifest/lockfile 쌍이 발견되면 쌍마다 하나의 결과를, 쌍이 없으면
    /// node_modules 폴백 경로의 결과를 반환합니다.
    pub async fn scan(
        &self,
        files: &FilePathToContent,
    ) -> Result<Vec<ScanResult>, NodeScannerError> {
        metrics::counter!(metric::NODE_SCANNER_SCANS_TOTAL).increment(1);

        // 입력은 이미 선별되어 들어오지만 술어를 한 번 더 적용한다
        let files = self.filter.retain(files);
        let groups = grouping::group_files_by_directory(&files);
        let pairs = pairing::find_manifest_lock_pairs(&groups, &self.config);

        if pairs.is_empty() {
            debug!("no manifest/lockfile pairs found, falling back to installed-modules resolution");
            metrics::counter!(metric::NODE_SCANNER_FALLBACK_SCANS_TOTAL).increment(1);
            return self.scan_installed_modules(&files).await;
        }

        info!(pairs = pairs.len(), "manifest/lockfile pairs discovered");
        self.scan_pairs(&files, &pairs).await
    }

    /// 발견 순서대로 쌍을 처리하여 스캔 결과를 조립합니다.
    async fn scan_pairs(
        &self,
        files: &FilePathToContent,
        pairs: &[ManifestLockPair],
    ) -> Result<Vec<ScanResult>, NodeScannerError> {
        let mut results = Vec::with_capacity(pairs.len());

        for pair in pairs {
            let manifest_content =
                files
                    .get(&pair.manifest)
                    .ok_or_else(|| NodeScannerError::MissingContent {
                        path: pair.manifest.clone(),
                    })?;
            let lock_content =
                files
                    .get(&pair.lock)
                    .ok_or_else(|| NodeScannerError::MissingContent {
                        path: pair.lock.clone(),
                    })?;

            let raw_tree = self
                .grammar
                .build_dep_tree(
                    manifest_content,
                    lock_content,
                    INCLUDE_DEV_DEPENDENCIES,
                    pair.lock_type,
                    STRICT_OUT_OF_SYNC,
                )
                .await?;

            // 그래프 빌더는 빈 라벨 값을 허용하지 않으므로 먼저 정규화한다
            let tree = PackageTree::from(raw_tree);
            let graph = self.graph_builder.build_graph(&tree, pair.lock_type).await?;

            metrics::counter!(
                metric::NODE_SCANNER_RESULTS_TOTAL,
                metric::LABEL_LOCK_TYPE => pair.lock_type.to_string()
            )
            .increment(1);
            info!(
                manifest = %pair.manifest,
                lock_type = %pair.lock_type,
                packages = tree.node_count(),
                "scan result assembled"
            );

            let package_manager = graph.package_manager.clone();
            results.push(ScanResult {
                facts: vec![
                    Fact::DepGraph(graph),
                    Fact::TestedFiles(vec![
                        paths::file_name(&pair.manifest).to_owned(),
                        paths::file_name(&pair.lock).to_owned(),
                    ]),
                ],
                identity: Identity {
                    kind: package_manager,
                    target_file: pair.manifest.clone(),
                },
            });
        }

        Ok(results)
    }

    /// node_modules 폴백: 임시 루트에 보존하고 설치 트리를 해석합니다.
    ///
    /// 임시 루트 제거는 성공·해석 실패·조립 실패 모든 경로에서 보장됩니다.
    async fn scan_installed_modules(
        &self,
        files: &FilePathToContent,
    ) -> Result<Vec<ScanResult>, NodeScannerError> {
        if files.is_empty() {
            debug!("no extracted files to persist, skipping fallback scan");
            return Ok(Vec::new());
        }

        let temp = fallback::persist_app_files(files).await?;

        let app_root = fallback::find_app_root(files, &self.config.manifest_file);
        let resolve_dir = match &app_root {
            Some(dir) => temp.path().join(dir.trim_start_matches('/')),
            None => temp.path().to_path_buf(),
        };

        let outcome = self
            .resolve_installed_tree(&resolve_dir, app_root.as_deref())
            .await;

        if let Err(e) = temp.close() {
            warn!(error = %e, "failed to remove temporary extraction root");
        }

        match outcome {
            Ok(result) => Ok(vec![result]),
            Err(e) => {
                warn!(error = %e, "installed-modules resolution failed");
                Err(e)
            }
        }
    }

    /// 해석된 설치 트리를 쌍 기반 경로와 동일한 조립 과정으로 변환합니다.
    async fn resolve_installed_tree(
        &self,
        resolve_dir: &Path,
        app_root: Option<&str>,
    ) -> Result<ScanResult, NodeScannerError> {
        let raw_tree = self
            .resolver
            .resolve(resolve_dir, FALLBACK_INCLUDE_DEV)
            .await?;

        let tree = PackageTree::from(raw_tree);
        let graph = self
            .graph_builder
            .build_graph(&tree, LockfileType::Npm)
            .await?;

        let target_file = match app_root {
            Some(dir) => paths::join(dir, &self.config.manifest_file),
            None => self.config.manifest_file.clone(),
        };

        metrics::counter!(
            metric::NODE_SCANNER_RESULTS_TOTAL,
            metric::LABEL_LOCK_TYPE => LockfileType::Npm.to_string()
        )
        .increment(1);
        info!(
            target = %target_file,
            packages = tree.node_count(),
            "fallback scan result assembled"
        );

        let package_manager = graph.package_manager.clone();
        Ok(ScanResult {
            facts: vec![
                Fact::DepGraph(graph),
                Fact::TestedFiles(vec![self.config.manifest_file.clone()]),
            ],
            identity: Identity {
                kind: package_manager,
                target_file,
            },
        })
    }
}
