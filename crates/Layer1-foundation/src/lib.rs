//! # dyncall-foundation
//!
//! Foundation layer for dyncall:
//! - Error: 중앙 에러 타입 (`Error`, `Result`)
//! - Config: 통합 설정 (DynCallConfig, RegistryConfig, DriverConfig)
//! - Storage: JsonStore (설정 파일)

pub mod config;
pub mod error;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    DriverConfig, DynCallConfig, RegistryConfig, CONFIG_FILE, DEFAULT_REGISTRY_NAME,
};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::{JsonStore, APP_DIR};
