//! JSON 설정 레이어 저장소
//!
//! 설정 파일은 읽기 전용입니다. 파일이 없으면 `None`, 읽기/파싱 실패는
//! `Error::Config`.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 설정 디렉토리 이름
pub const APP_DIR: &str = "dyncall";

/// 디렉토리 하나에 대응하는 JSON 설정 레이어
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 글로벌 레이어 (<config_dir>/dyncall/) - config 디렉토리가 없는 플랫폼이면 None
    pub fn global() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR)))
    }

    /// 프로젝트 레이어 (<root>/.dyncall/)
    pub fn project(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(format!(".{}", APP_DIR)))
    }

    /// 현재 디렉토리의 프로젝트 레이어
    pub fn current_project() -> Option<Self> {
        std::env::current_dir().ok().map(Self::project)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 파일이 없으면 None
    pub fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.base_dir.join(filename);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config layer at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::Config(format!("Failed to read {}: {}", path.display(), e)));
            }
        };

        debug!("Loading config layer {}", path.display());
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// 파일이 반드시 있어야 하는 경우
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        self.load_optional(filename)?.ok_or_else(|| {
            Error::Config(format!(
                "Config file not found: {}",
                self.base_dir.join(filename).display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_load_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("aliases.json"), r#"{ "add": "plus" }"#).unwrap();
        let store = JsonStore::new(dir.path());

        let loaded: BTreeMap<String, String> = store.load("aliases.json").unwrap();
        assert_eq!(loaded.get("add").map(String::as_str), Some("plus"));
    }

    #[test]
    fn test_load_optional_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let loaded: Option<BTreeMap<String, String>> = store.load_optional("missing.json").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_missing_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let result: Result<BTreeMap<String, String>> = store.load("missing.json");
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("not found")));
    }

    #[test]
    fn test_load_malformed_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let store = JsonStore::new(dir.path());

        let result: Result<Option<BTreeMap<String, String>>> = store.load_optional("broken.json");
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("Failed to parse")));
    }

    #[test]
    fn test_project_dir() {
        let store = JsonStore::project("/tmp/work");
        assert_eq!(store.base_dir(), Path::new("/tmp/work/.dyncall"));
    }
}
