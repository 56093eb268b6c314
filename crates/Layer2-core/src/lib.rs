//! dyncall-core: Function Registry
//!
//! Layer2 - 레지스트리 구현 레이어
//!
//! # 주요 모듈
//!
//! - `registry`: 고정 시그니처 함수 레지스트리 (`Registry<Id, F>`)
//! - `builtin`: 기본 제공 연산 (산술)
//!
//! # 사용 예시
//!
//! ```ignore
//! use dyncall_core::{arithmetic_registry, Registry};
//!
//! let registry = arithmetic_registry();
//! match registry.invoke("divide", (20, 4)) {
//!     Ok(Ok(value)) => println!("{}", value),
//!     Ok(Err(callee_err)) => eprintln!("{}", callee_err),
//!     Err(lookup_err) => eprintln!("{}", lookup_err),
//! }
//! ```

pub mod builtin;
pub mod registry;

// Re-exports: Registry
pub use registry::{
    EntryMetadata, IntoCallable, Registry, RegistryEntry, RegistryEvent, RegistryEventHandler,
    RegistryStats, Signature, DEFAULT_CATEGORY,
};

// Re-exports: Builtin
pub use builtin::{
    arithmetic_registry, register_arithmetic, ArithmeticError, ArithmeticRegistry, BinaryOp,
};

// Re-exports: Layer1
pub use dyncall_foundation::{Error, RegistryConfig, Result};
