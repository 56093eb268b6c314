//! Registry Entry - 레지스트리 항목 정의

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 기본 카테고리
pub const DEFAULT_CATEGORY: &str = "default";

// ============================================================================
// EntryMetadata - 항목 메타데이터
// ============================================================================

/// 레지스트리 항목의 메타데이터
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryMetadata {
    /// 고유 키 (식별자의 표시 형태)
    pub key: String,

    /// 카테고리
    pub category: String,

    /// 설명
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// 별칭인 경우 원래 식별자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,

    /// 최초 등록 시간
    pub registered_at: DateTime<Utc>,

    /// 마지막 업데이트 시간
    pub updated_at: DateTime<Utc>,

    /// 덮어쓰기 횟수
    pub replace_count: u32,
}

impl EntryMetadata {
    /// 새 메타데이터 생성
    pub fn new(key: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            key: key.into(),
            category: DEFAULT_CATEGORY.to_string(),
            description: String::new(),
            alias_of: None,
            registered_at: now,
            updated_at: now,
            replace_count: 0,
        }
    }

    /// 카테고리 설정
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// 설명 설정
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 별칭 대상 설정
    pub fn with_alias_of(mut self, target: impl Into<String>) -> Self {
        self.alias_of = Some(target.into());
        self
    }

    /// 덮어쓰기로 인한 업데이트
    ///
    /// 최초 등록 시간은 유지하고, 나머지 속성은 새 등록의 값을 따릅니다.
    pub fn mark_replaced(&mut self, next: EntryMetadata) {
        self.category = next.category;
        self.description = next.description;
        self.alias_of = next.alias_of;
        self.updated_at = Utc::now();
        self.replace_count += 1;
    }

    /// 별칭 여부
    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}

// ============================================================================
// RegistryEntry - 레지스트리 항목
// ============================================================================

/// 레지스트리 항목 - callable과 메타데이터를 함께 보관
pub struct RegistryEntry<F: ?Sized> {
    /// 실제 callable
    pub value: Arc<F>,

    /// 메타데이터
    pub metadata: EntryMetadata,
}

impl<F: ?Sized> RegistryEntry<F> {
    /// 새 항목 생성
    pub fn new(value: Arc<F>, metadata: EntryMetadata) -> Self {
        Self { value, metadata }
    }

    /// callable 교체 (last write wins)
    pub fn replace(&mut self, value: Arc<F>, metadata: EntryMetadata) {
        self.value = value;
        self.metadata.mark_replaced(metadata);
    }

    /// 키 반환
    pub fn key(&self) -> &str {
        &self.metadata.key
    }
}

impl<F: ?Sized> Clone for RegistryEntry<F> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            metadata: self.metadata.clone(),
        }
    }
}
