//! Error types for dyncall
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// dyncall 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // Registry 관련
    // ========================================================================
    /// 등록되지 않은 식별자로 조회/호출
    #[error("Lookup failed: no function '{0}'")]
    FunctionNotFound(String),

    // ========================================================================
    // 입력 관련
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 조회 실패 에러 생성 헬퍼
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Error::FunctionNotFound(id.to_string())
    }

    /// 누락된 식별자 (조회 실패인 경우)
    pub fn missing_id(&self) -> Option<&str> {
        match self {
            Error::FunctionNotFound(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let err = Error::not_found("modulo");
        assert_eq!(err.missing_id(), Some("modulo"));
        assert_eq!(err.to_string(), "Lookup failed: no function 'modulo'");
    }

    #[test]
    fn test_missing_id_only_for_lookup_failures() {
        assert_eq!(Error::InvalidInput("x".into()).missing_id(), None);
        assert_eq!(Error::Config("bad".into()).missing_id(), None);
    }
}
