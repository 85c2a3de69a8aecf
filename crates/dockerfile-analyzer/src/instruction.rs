//! RUN 명령 분석 — 패키지 설치 명령 인식 및 패키지 이름 추출
//!
//! 패키지 관리자 호출(`apk`, `apt-get` 등) 뒤에 설치 동사(`install`, `add`)가
//! 따라오는 RUN 명령을 설치 명령으로 인식합니다. 토큰은 공백과 명령 연결
//! 연산자(`&&`)로 분리하며, 플래그(`-`로 시작)와 관리자 하위 명령을 제외한
//! 나머지 토큰 전부를 설치된 패키지 이름으로 취급합니다.

/// 인식되는 패키지 관리자 호출 토큰
const PACKAGE_MANAGERS: &[&str] = &["apk", "apt", "apt-get", "yum", "dnf", "rpm", "aptitude"];

/// 설치를 의미하는 하위 명령
const INSTALL_VERBS: &[&str] = &["install", "add"];

/// 패키지 후보에서 제외되는 관리자 하위 명령
const MANAGER_SUBCOMMANDS: &[&str] = &["install", "add", "update", "upgrade"];

/// 명령 연결 연산자
const COMMAND_CHAIN_OPERATOR: &str = "&&";

/// 명령 텍스트를 공백·연결 연산자 기준으로 토큰화합니다.
fn normalized_tokens(instruction: &str) -> Vec<String> {
    instruction
        .replace(COMMAND_CHAIN_OPERATOR, " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// 명령이 패키지 설치 명령인지 판별합니다.
///
/// 패키지 관리자 토큰 이후에 설치 동사가 나타나면 설치 명령입니다.
pub fn is_package_install_instruction(instruction: &str) -> bool {
    let mut manager_seen = false;
    for token in normalized_tokens(instruction) {
        if PACKAGE_MANAGERS.contains(&token.as_str()) {
            manager_seen = true;
        } else if manager_seen && INSTALL_VERBS.contains(&token.as_str()) {
            return true;
        }
    }
    false
}

/// 설치 명령에서 패키지 이름 목록을 추출합니다.
///
/// 설치 명령이 아니면 빈 목록을 반환합니다.
pub fn extract_packages(instruction: &str) -> Vec<String> {
    if !is_package_install_instruction(instruction) {
        return Vec::new();
    }

    normalized_tokens(instruction)
        .into_iter()
        .filter(|token| !token.starts_with('-'))
        .filter(|token| !token.eq_ignore_ascii_case("run"))
        .filter(|token| !PACKAGE_MANAGERS.contains(&token.as_str()))
        .filter(|token| !MANAGER_SUBCOMMANDS.contains(&token.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_apk_add() {
        assert!(is_package_install_instruction(
            "RUN apk --no-cache add ca-certificates"
        ));
    }

    #[test]
    fn recognizes_apt_get_install() {
        assert!(is_package_install_instruction("RUN apt-get install curl"));
    }

    #[test]
    fn recognizes_chained_install() {
        assert!(is_package_install_instruction(
            "RUN apk update && apk upgrade && apk add --update --no-cache nodejs bash"
        ));
    }

    #[test]
    fn rejects_non_install_run() {
        assert!(!is_package_install_instruction("RUN mkdir -p /srv/app"));
        assert!(!is_package_install_instruction("RUN go build -o server ."));
        // 관리자 호출 없이 동사만 있는 경우
        assert!(!is_package_install_instruction("RUN echo add install"));
    }

    #[test]
    fn rejects_manager_without_install_verb() {
        assert!(!is_package_install_instruction("RUN apk update"));
        assert!(!is_package_install_instruction("RUN apt-get update"));
    }

    #[test]
    fn extracts_single_package() {
        assert_eq!(
            extract_packages("RUN apt-get install curl"),
            vec!["curl".to_owned()]
        );
    }

    #[test]
    fn extracts_package_skipping_flags() {
        assert_eq!(
            extract_packages("RUN apk --no-cache add ca-certificates"),
            vec!["ca-certificates".to_owned()]
        );
    }

    #[test]
    fn extracts_packages_from_chained_command() {
        assert_eq!(
            extract_packages(
                "RUN apk update && apk upgrade && apk add --update --no-cache nodejs bash"
            ),
            vec!["nodejs".to_owned(), "bash".to_owned()]
        );
    }

    #[test]
    fn extracts_nothing_from_non_install() {
        assert!(extract_packages("RUN mkdir -p /srv/app").is_empty());
    }

    #[test]
    fn lowercase_run_keyword_excluded() {
        assert_eq!(
            extract_packages("run apk --no-cache add ca-certificates"),
            vec!["ca-certificates".to_owned()]
        );
    }

    #[test]
    fn version_pinned_token_kept_whole() {
        assert_eq!(
            extract_packages("RUN apk add curl=8.5.0-r0"),
            vec!["curl=8.5.0-r0".to_owned()]
        );
    }
}
