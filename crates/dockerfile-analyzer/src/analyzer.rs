//! Dockerfile 분석기 — 명령어 단위 상태 머신
//!
//! Dockerfile 텍스트를 한 줄씩 처리합니다. 초기 상태는 스테이지 밖이며,
//! `FROM`을 만날 때마다 새 스테이지로 진입합니다. `ARG` 선언은
//! [`ArgResolver`]에 누적되어 이후 명령 텍스트에 치환되고, 스테이지 내부의
//! `RUN` 명령은 패키지 설치 사실 추출 대상이 됩니다.
//!
//! # 에러 정책
//!
//! - 입력이 없으면([`read_dockerfile_and_analyse`]에 `None`) 분석 없이
//!   `Ok(None)` — 입력 부재는 파싱 실패가 아닙니다.
//! - 경로를 읽을 수 없으면 I/O 에러로 전파됩니다.
//! - `FROM`을 찾지 못하면 결과의 `error` 필드에 구조화 코드가 데이터로
//!   설정됩니다. 예외로 던져지지 않습니다.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use stevedore_core::metrics as metric;

use crate::args::ArgResolver;
use crate::error::DockerfileAnalyzerError;
use crate::instruction;
use crate::stage::StageTracker;
use crate::types::{AnalysisError, AnalysisErrorCode, DockerfileAnalysis, InstructionRecord};
use crate::util;

/// Dockerfile 텍스트를 분석합니다.
///
/// 동기 CPU 바운드 처리이며 실패하지 않습니다. base image를 해석하지 못한
/// 경우에도 빈 결과와 함께 `error` 필드로 반환됩니다.
pub fn analyse_dockerfile(contents: &str) -> DockerfileAnalysis {
    let mut args = ArgResolver::new();
    let mut stages = StageTracker::new();
    let mut packages: BTreeMap<String, InstructionRecord> = BTreeMap::new();
    let mut layers: BTreeMap<String, InstructionRecord> = BTreeMap::new();

    for raw_line in contents.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((keyword, body)) = split_instruction(line) else {
            continue;
        };

        if keyword.eq_ignore_ascii_case("ARG") {
            let resolved = args.substitute(body);
            args.declare(&resolved);
        } else if keyword.eq_ignore_ascii_case("FROM") {
            let resolved = args.substitute(body);
            stages.enter_stage(&resolved);
        } else if keyword.eq_ignore_ascii_case("RUN") && stages.in_stage() {
            // 치환된 텍스트로 인식·추출하되, 기록되는 명령은 항상 원문
            let resolved = args.substitute(line);
            if instruction::is_package_install_instruction(&resolved) {
                let names = instruction::extract_packages(&resolved);
                if !names.is_empty() {
                    let record = InstructionRecord {
                        instruction: line.to_owned(),
                    };
                    layers.insert(util::base64_encode(line.as_bytes()), record.clone());
                    for name in names {
                        // 같은 패키지를 다시 설치하면 나중 명령이 이전 기록을 덮어씀
                        packages.insert(name, record.clone());
                    }
                }
            }
        }
    }

    metrics::counter!(metric::DOCKERFILE_ANALYSES_TOTAL).increment(1);

    match stages.base_image() {
        Some(image) => {
            debug!(
                base_image = %image,
                stages = stages.stages().len(),
                packages = packages.len(),
                "dockerfile analysed"
            );
            DockerfileAnalysis {
                base_image: Some(image),
                dockerfile_packages: packages,
                dockerfile_layers: layers,
                error: None,
            }
        }
        None => {
            metrics::counter!(metric::DOCKERFILE_ANALYSIS_ERRORS_TOTAL).increment(1);
            debug!("no FROM instruction found, base image unresolved");
            DockerfileAnalysis {
                base_image: None,
                dockerfile_packages: packages,
                dockerfile_layers: layers,
                error: Some(AnalysisError {
                    code: AnalysisErrorCode::BaseImageNameNotFound,
                }),
            }
        }
    }
}

/// Dockerfile을 읽어 분석합니다.
///
/// - `path`가 `None`이면 분석 없이 `Ok(None)`을 반환합니다.
/// - 파일을 읽을 수 없으면 [`DockerfileAnalyzerError::Io`]로 전파됩니다.
pub async fn read_dockerfile_and_analyse(
    path: Option<&Path>,
) -> Result<Option<DockerfileAnalysis>, DockerfileAnalyzerError> {
    let Some(path) = path else {
        debug!("no dockerfile supplied, skipping analysis");
        return Ok(None);
    };

    let contents =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DockerfileAnalyzerError::Io {
                path: path.display().to_string(),
                source: e,
            })?;

    Ok(Some(analyse_dockerfile(&contents)))
}

/// 한 줄을 (명령 키워드, 본문)으로 분리합니다.
fn split_instruction(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let keyword = parts.next().filter(|k| !k.is_empty())?;
    Some((keyword, parts.next().unwrap_or("").trim()))
}
