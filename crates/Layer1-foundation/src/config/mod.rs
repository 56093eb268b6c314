//! Config - 통합 설정 관리
//!
//! - `dyncall.rs` - DynCallConfig 통합 설정 (registry, driver, aliases)

mod dyncall;

pub use dyncall::{
    DriverConfig, DynCallConfig, RegistryConfig, CONFIG_FILE, DEFAULT_REGISTRY_NAME,
};
