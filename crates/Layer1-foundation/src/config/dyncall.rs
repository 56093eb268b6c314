//! DynCall Config - 통합 설정
//!
//! 글로벌 (`<config_dir>/dyncall/config.json`) + 프로젝트 (`.dyncall/config.json`)
//! 레이어를 차례로 적용합니다. 레이어에 명시된 필드만 덮어쓰므로, 프로젝트
//! 파일에서 생략한 필드는 글로벌 값을 유지합니다.

use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// 설정 파일명
pub const CONFIG_FILE: &str = "config.json";

/// 기본 레지스트리 이름
pub const DEFAULT_REGISTRY_NAME: &str = "registry";

// ============================================================================
// DynCall Config (통합)
// ============================================================================

/// dyncall 통합 설정 (모든 레이어 적용 후)
#[derive(Debug, Clone, PartialEq)]
pub struct DynCallConfig {
    /// 버전 (마이그레이션용)
    pub version: u32,

    /// 레지스트리 설정
    pub registry: RegistryConfig,

    /// 드라이버 (입력 루프) 설정
    pub driver: DriverConfig,

    /// 별칭 (alias -> 대상 식별자)
    pub aliases: BTreeMap<String, String>,
}

impl Default for DynCallConfig {
    fn default() -> Self {
        Self {
            version: 1,
            registry: RegistryConfig::default(),
            driver: DriverConfig::default(),
            aliases: BTreeMap::new(),
        }
    }
}

impl DynCallConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 글로벌 -> 프로젝트 순으로 적용. 깨진 레이어는 경고 후 건너뜀
    pub fn load() -> Self {
        let stores: Vec<JsonStore> = JsonStore::global()
            .into_iter()
            .chain(JsonStore::current_project())
            .collect();

        Self::load_layers(&stores)
    }

    /// 지정한 파일 하나만 기본값 위에 적용
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Config(format!("Invalid config path: {}", path.display())))?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let layer: ConfigLayer = JsonStore::new(dir).load(filename)?;
        let mut config = Self::new();
        config.apply(layer);
        Ok(config)
    }

    fn load_layers(stores: &[JsonStore]) -> Self {
        let mut config = Self::new();

        for store in stores {
            match store.load_optional::<ConfigLayer>(CONFIG_FILE) {
                Ok(Some(layer)) => {
                    debug!("Applying config layer from {}", store.base_dir().display());
                    config.apply(layer);
                }
                Ok(None) => {}
                Err(e) => warn!("Skipping config layer: {}", e),
            }
        }

        config
    }

    /// 레이어에 명시된 값만 덮어씀 (별칭은 키 단위 병합)
    fn apply(&mut self, layer: ConfigLayer) {
        if let Some(version) = layer.version {
            self.version = version;
        }
        if let Some(registry) = layer.registry {
            if let Some(name) = registry.name {
                self.registry.name = name;
            }
            if let Some(enabled) = registry.warn_on_overwrite {
                self.registry.warn_on_overwrite = enabled;
            }
        }
        if let Some(driver) = layer.driver {
            if let Some(stop) = driver.stop_on_error {
                self.driver.stop_on_error = stop;
            }
        }
        self.aliases.extend(layer.aliases);
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }
}

// ============================================================================
// Registry Config
// ============================================================================

/// 레지스트리 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// 레지스트리 이름 (로그 prefix)
    pub name: String,

    /// 덮어쓰기 시 WARN 레벨로 로깅 (덮어쓰기 자체는 항상 허용)
    pub warn_on_overwrite: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_REGISTRY_NAME.to_string(),
            warn_on_overwrite: false,
        }
    }
}

impl RegistryConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Driver Config
// ============================================================================

/// 입력 루프 설정
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverConfig {
    /// 첫 실패에서 중단 (기본: 에러 출력 후 계속)
    pub stop_on_error: bool,
}

// ============================================================================
// File layer (파일 하나의 내용, 생략된 필드는 None)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigLayer {
    version: Option<u32>,
    registry: Option<RegistryLayer>,
    driver: Option<DriverLayer>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryLayer {
    name: Option<String>,
    warn_on_overwrite: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriverLayer {
    stop_on_error: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_layer(store: &JsonStore, json: &str) {
        std::fs::create_dir_all(store.base_dir()).unwrap();
        std::fs::write(store.base_dir().join(CONFIG_FILE), json).unwrap();
    }

    #[test]
    fn test_defaults_from_empty_layer() {
        let mut config = DynCallConfig::new();
        config.apply(serde_json::from_str("{}").unwrap());

        assert_eq!(config, DynCallConfig::default());
        assert_eq!(config.version, 1);
        assert_eq!(config.registry.name, DEFAULT_REGISTRY_NAME);
        assert!(!config.registry.warn_on_overwrite);
        assert!(!config.driver.stop_on_error);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "registry": { "name": "calc", "warnOnOverwrite": true },
            "driver": { "stopOnError": true },
            "aliases": { "add": "plus" }
        }"#;
        let mut config = DynCallConfig::new();
        config.apply(serde_json::from_str(json).unwrap());

        assert_eq!(config.registry.name, "calc");
        assert!(config.registry.warn_on_overwrite);
        assert!(config.driver.stop_on_error);
        assert_eq!(config.aliases.get("add").map(String::as_str), Some("plus"));
    }

    #[test]
    fn test_omitted_fields_keep_earlier_values() {
        let mut config = DynCallConfig::new();
        config.apply(
            serde_json::from_str(
                r#"{ "registry": { "warnOnOverwrite": true }, "driver": { "stopOnError": true } }"#,
            )
            .unwrap(),
        );
        config.apply(serde_json::from_str(r#"{ "aliases": { "add": "plus" } }"#).unwrap());

        assert!(config.registry.warn_on_overwrite);
        assert!(config.driver.stop_on_error);
        assert_eq!(config.aliases.get("add").map(String::as_str), Some("plus"));
    }

    #[test]
    fn test_later_layer_can_restore_defaults() {
        let mut config = DynCallConfig::new();
        config.apply(
            serde_json::from_str(
                r#"{ "registry": { "name": "global", "warnOnOverwrite": true } }"#,
            )
            .unwrap(),
        );
        config.apply(
            serde_json::from_str(
                r#"{ "registry": { "name": "registry", "warnOnOverwrite": false } }"#,
            )
            .unwrap(),
        );

        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn test_project_layer_over_global() {
        let global_dir = tempfile::tempdir().unwrap();
        let project_root = tempfile::tempdir().unwrap();
        let global = JsonStore::new(global_dir.path());
        let project = JsonStore::project(project_root.path());

        write_layer(
            &global,
            r#"{
                "registry": { "name": "global", "warnOnOverwrite": true },
                "driver": { "stopOnError": true },
                "aliases": { "add": "plus", "sub": "minus" }
            }"#,
        );
        write_layer(&project, r#"{ "aliases": { "add": "multiply" } }"#);

        let config = DynCallConfig::load_layers(&[global, project]);

        assert_eq!(config.registry.name, "global");
        assert!(config.registry.warn_on_overwrite);
        assert!(config.driver.stop_on_error);
        assert_eq!(config.aliases.get("add").map(String::as_str), Some("multiply"));
        assert_eq!(config.aliases.get("sub").map(String::as_str), Some("minus"));
    }

    #[test]
    fn test_malformed_layer_is_skipped() {
        let global_dir = tempfile::tempdir().unwrap();
        let project_root = tempfile::tempdir().unwrap();
        let global = JsonStore::new(global_dir.path());
        let project = JsonStore::project(project_root.path());

        write_layer(&global, r#"{ "driver": { "stopOnError": true }, "aliases": { "add": "plus" } }"#);
        write_layer(&project, "{ not json");

        let config = DynCallConfig::load_layers(&[global, project]);

        assert!(config.driver.stop_on_error);
        assert_eq!(config.aliases.get("add").map(String::as_str), Some("plus"));
    }

    #[test]
    fn test_missing_layers_give_defaults() {
        let empty = tempfile::tempdir().unwrap();
        let config = DynCallConfig::load_layers(&[JsonStore::new(empty.path())]);
        assert_eq!(config, DynCallConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{ "aliases": { "times": "multiply" } }"#).unwrap();

        let config = DynCallConfig::load_from(&path).unwrap();
        assert_eq!(config.aliases.get("times").map(String::as_str), Some("multiply"));
        assert_eq!(config.registry.name, DEFAULT_REGISTRY_NAME);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DynCallConfig::load_from(dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
