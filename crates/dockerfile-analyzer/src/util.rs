//! 인코딩 유틸리티 — 레이어 키용 base64
//!
//! 레이어 키는 명령 원문의 표준 base64 인코딩입니다. 인코딩만 필요하므로
//! 별도 의존성 없이 여기서 직접 구현합니다.

/// 표준 base64 알파벳 (RFC 4648)
const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// 입력 바이트를 표준(패딩 포함) base64 문자열로 인코딩합니다.
pub fn base64_encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = u32::from(chunk[0]);
        let b1 = chunk.get(1).copied().map_or(0, u32::from);
        let b2 = chunk.get(2).copied().map_or(0, u32::from);
        let triple = (b0 << 16) | (b1 << 8) | b2;

        out.push(char::from(BASE64_ALPHABET[(triple >> 18 & 0x3f) as usize]));
        out.push(char::from(BASE64_ALPHABET[(triple >> 12 & 0x3f) as usize]));
        if chunk.len() > 1 {
            out.push(char::from(BASE64_ALPHABET[(triple >> 6 & 0x3f) as usize]));
        } else {
            out.push('=');
        }
        if chunk.len() > 2 {
            out.push(char::from(BASE64_ALPHABET[(triple & 0x3f) as usize]));
        } else {
            out.push('=');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc4648_test_vectors() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_encode(b"f"), "Zg==");
        assert_eq!(base64_encode(b"fo"), "Zm8=");
        assert_eq!(base64_encode(b"foo"), "Zm9v");
        assert_eq!(base64_encode(b"foob"), "Zm9vYg==");
        assert_eq!(base64_encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(base64_encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn encodes_layer_key_for_apk_instruction() {
        assert_eq!(
            base64_encode(b"RUN apk --no-cache add ca-certificates"),
            "UlVOIGFwayAtLW5vLWNhY2hlIGFkZCBjYS1jZXJ0aWZpY2F0ZXM="
        );
    }

    #[test]
    fn encodes_layer_key_for_apt_instruction() {
        assert_eq!(
            base64_encode(b"RUN apt-get install curl"),
            "UlVOIGFwdC1nZXQgaW5zdGFsbCBjdXJs"
        );
    }

    #[test]
    fn encodes_layer_key_for_chained_instruction() {
        assert_eq!(
            base64_encode(b"RUN apk update && apk upgrade && apk add --update --no-cache nodejs bash"),
            "UlVOIGFwayB1cGRhdGUgJiYgYXBrIHVwZ3JhZGUgJiYgYXBrIGFkZCAtLXVwZGF0ZSAtLW5vLWNhY2hlIG5vZGVqcyBiYXNo"
        );
    }
}
