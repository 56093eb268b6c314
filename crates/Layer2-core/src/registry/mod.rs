//! # Function Registry
//!
//! 식별자로 함수를 등록하고, 나중에 식별자로 조회/호출하는 레지스트리
//!
//! ## 개요
//!
//! `Registry<Id, F>`는 하나의 고정된 시그니처 `F` (`dyn Fn(A, B, ..) -> R`)를
//! 공유하는 callable들을 식별자 `Id`로 보관합니다.
//!
//! ## 설계 원칙
//!
//! 1. **Explicit ownership**: 전역 저장소 없음. 레지스트리는 일반 값으로 소유됩니다.
//! 2. **Fixed signature**: 시그니처가 다르면 레지스트리도 다릅니다.
//! 3. **Result-based lookup**: 조회 실패는 `Error::FunctionNotFound`
//! 4. **Last write wins**: 같은 식별자 재등록은 덮어쓰기
//!
//! ## 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Registry<Id, F>                        │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  BTreeMap<Id, RegistryEntry<F>>                    │  │
//! │  │  ┌──────────┬──────────┬──────────┬──────────┐    │  │
//! │  │  │ "divide" │ "minus"  │ "plus"   │ ...      │    │  │
//! │  │  │ Arc<F>   │ Arc<F>   │ Arc<F>   │          │    │  │
//! │  │  └──────────┴──────────┴──────────┴──────────┘    │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │        │ register / alias                                │
//! │        ▼                                                 │
//! │  RegistryEventHandler (Registered / Replaced)            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 사용 예시
//!
//! ```ignore
//! use dyncall_core::registry::Registry;
//!
//! let mut registry: Registry<String, dyn Fn(i32, i32) -> i32> = Registry::new();
//! registry.register("plus".to_string(), |a: i32, b: i32| a + b);
//!
//! let seven = registry.invoke("plus", (3, 4))?;
//! let plus = registry.lookup("plus")?;
//! assert_eq!(plus(3, 4), seven);
//! ```

mod dynamic;
mod entry;
mod signature;
mod traits;

pub use dynamic::{Registry, RegistryStats};
pub use entry::{EntryMetadata, RegistryEntry, DEFAULT_CATEGORY};
pub use signature::{IntoCallable, Signature};
pub use traits::{RegistryEvent, RegistryEventHandler};
