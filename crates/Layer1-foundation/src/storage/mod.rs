//! Storage module for dyncall
//!
//! - `json`: JSON - 설정 파일 저장/로드

mod json;

// JSON Storage (설정)
pub use json::{JsonStore, APP_DIR};
