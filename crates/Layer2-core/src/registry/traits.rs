//! Registry Traits - 레지스트리 이벤트 인터페이스

use serde::{Deserialize, Serialize};

// ============================================================================
// RegistryEvent - 레지스트리 변경 이벤트
// ============================================================================

/// 레지스트리 변경 이벤트
///
/// 등록(register) 시에만 발행됩니다. 조회/호출은 이벤트를 만들지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RegistryEvent {
    /// 새 식별자 등록됨
    Registered { key: String, category: String },

    /// 기존 식별자 덮어쓰기됨
    Replaced {
        key: String,
        category: String,
        replace_count: u32,
    },
}

impl RegistryEvent {
    /// 등록 이벤트 생성
    pub fn registered(key: impl Into<String>, category: impl Into<String>) -> Self {
        Self::Registered {
            key: key.into(),
            category: category.into(),
        }
    }

    /// 덮어쓰기 이벤트 생성
    pub fn replaced(key: impl Into<String>, category: impl Into<String>, replace_count: u32) -> Self {
        Self::Replaced {
            key: key.into(),
            category: category.into(),
            replace_count,
        }
    }
}

// ============================================================================
// RegistryEventHandler - 이벤트 핸들러 trait
// ============================================================================

/// 레지스트리 이벤트 핸들러 (동기 호출)
pub trait RegistryEventHandler: Send + Sync {
    /// 핸들러 이름
    fn name(&self) -> &str;

    /// 이벤트 처리
    fn handle(&self, event: &RegistryEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_event() {
        let event = RegistryEvent::registered("plus", "arithmetic");
        assert!(matches!(event, RegistryEvent::Registered { ref key, .. } if key == "plus"));

        let event = RegistryEvent::replaced("plus", "arithmetic", 2);
        assert!(matches!(event, RegistryEvent::Replaced { replace_count: 2, .. }));
    }

    #[test]
    fn test_event_serialization() {
        let event = RegistryEvent::replaced("plus", "default", 1);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "replaced");
        assert_eq!(json["key"], "plus");
        assert_eq!(json["replace_count"], 1);
    }
}
