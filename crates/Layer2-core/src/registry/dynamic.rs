//! Registry - 고정 시그니처 함수 레지스트리

use super::entry::{EntryMetadata, RegistryEntry};
use super::signature::{IntoCallable, Signature};
use super::traits::{RegistryEvent, RegistryEventHandler};
use dyncall_foundation::{Error, RegistryConfig, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::btree_map::{BTreeMap, Entry};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, trace, warn};

// ============================================================================
// Registry<Id, F> - 제네릭 함수 레지스트리
// ============================================================================

/// 식별자 -> callable 레지스트리
///
/// `F`는 `dyn Fn(A, B, ..) -> R` 형태의 시그니처입니다. 모든 항목은 같은
/// 시그니처를 공유합니다.
///
/// - 같은 식별자로 다시 등록하면 덮어씁니다 (last write wins, 에러 없음)
/// - 항목은 개별적으로 제거되지 않습니다. 새 namespace가 필요하면 새
///   레지스트리를 만드세요.
/// - 동기화 없음: 변경은 `&mut self`를 요구합니다.
///
/// ## 사용법
/// ```ignore
/// let mut registry: Registry<String, dyn Fn(i32, i32) -> i32> = Registry::new();
/// registry.register("plus".to_string(), |a: i32, b: i32| a + b);
///
/// assert_eq!(registry.invoke("plus", (3, 4))?, 7);
/// assert!(registry.invoke("modulo", (10, 3)).is_err());
/// ```
pub struct Registry<Id, F: ?Sized> {
    /// 항목 저장소 (식별자 순서 유지)
    entries: BTreeMap<Id, RegistryEntry<F>>,

    /// 이벤트 핸들러
    handlers: Vec<Arc<dyn RegistryEventHandler>>,

    /// 레지스트리 설정
    config: RegistryConfig,
}

impl<Id: Ord + Display, F: ?Sized> Registry<Id, F> {
    /// 빈 레지스트리 생성
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// 이름 지정 (로그 prefix)
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_config(RegistryConfig::named(name))
    }

    /// 설정으로 생성
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            handlers: Vec::new(),
            config,
        }
    }

    /// 레지스트리 이름
    pub fn name(&self) -> &str {
        &self.config.name
    }

    // ========================================================================
    // 등록
    // ========================================================================

    /// 함수 등록 (이미 있으면 덮어쓰기)
    pub fn register(&mut self, id: Id, callable: impl IntoCallable<F>) {
        self.register_shared(id, callable.into_callable());
    }

    /// 이미 공유된 callable 등록
    pub fn register_shared(&mut self, id: Id, callable: Arc<F>) {
        let metadata = EntryMetadata::new(id.to_string());
        self.insert(id, callable, metadata);
    }

    /// 메타데이터와 함께 등록
    pub fn register_with(&mut self, id: Id, callable: impl IntoCallable<F>, metadata: EntryMetadata) {
        self.insert(id, callable.into_callable(), metadata);
    }

    /// `target`의 callable을 `alias`로도 등록
    ///
    /// `target`이 없으면 NotFound. `target` 항목 자체는 변경되지 않습니다.
    pub fn alias<Q>(&mut self, alias: Id, target: &Q) -> Result<()>
    where
        Id: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        let (callable, metadata) = {
            let entry = self.entry(target)?;
            let metadata = EntryMetadata::new(alias.to_string())
                .with_category(entry.metadata.category.clone())
                .with_description(entry.metadata.description.clone())
                .with_alias_of(target.to_string());
            (Arc::clone(&entry.value), metadata)
        };

        self.insert(alias, callable, metadata);
        Ok(())
    }

    fn insert(&mut self, id: Id, callable: Arc<F>, mut metadata: EntryMetadata) {
        metadata.key = id.to_string();

        let event = match self.entries.entry(id) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.replace(callable, metadata);

                if self.config.warn_on_overwrite {
                    warn!(
                        "[{}] Overwrote '{}' (replaced {} times)",
                        self.config.name,
                        entry.key(),
                        entry.metadata.replace_count
                    );
                } else {
                    debug!("[{}] Overwrote '{}'", self.config.name, entry.key());
                }

                RegistryEvent::replaced(
                    entry.key(),
                    entry.metadata.category.clone(),
                    entry.metadata.replace_count,
                )
            }
            Entry::Vacant(vacant) => {
                let entry = vacant.insert(RegistryEntry::new(callable, metadata));
                debug!(
                    "[{}] Registered '{}' ({})",
                    self.config.name,
                    entry.key(),
                    entry.metadata.category
                );

                RegistryEvent::registered(entry.key(), entry.metadata.category.clone())
            }
        };

        self.emit_event(&event);
    }

    // ========================================================================
    // 조회 / 호출
    // ========================================================================

    fn entry<Q>(&self, id: &Q) -> Result<&RegistryEntry<F>>
    where
        Id: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        self.entries.get(id).ok_or_else(|| {
            debug!("[{}] Lookup failed: '{}'", self.config.name, id);
            Error::not_found(id)
        })
    }

    /// 함수 조회 - 없으면 `Error::FunctionNotFound`
    pub fn lookup<Q>(&self, id: &Q) -> Result<Arc<F>>
    where
        Id: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        self.entry(id).map(|entry| Arc::clone(&entry.value))
    }

    /// 조회 후 호출
    ///
    /// callable 자체의 실패(반환값 안의 에러, panic)는 그대로 전달됩니다.
    pub fn invoke<Q>(&self, id: &Q, args: F::Args) -> Result<F::Output>
    where
        F: Signature,
        Id: Borrow<Q>,
        Q: Ord + Display + ?Sized,
    {
        let entry = self.entry(id)?;
        trace!("[{}] Invoking '{}'", self.config.name, entry.key());
        Ok(entry.value.call_with(args))
    }

    /// 식별자 존재 여부
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        Id: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(id)
    }

    /// 항목 메타데이터 조회
    pub fn metadata<Q>(&self, id: &Q) -> Option<&EntryMetadata>
    where
        Id: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(id).map(|entry| &entry.metadata)
    }

    /// 모든 식별자 (오름차순)
    pub fn ids(&self) -> Vec<&Id> {
        self.entries.keys().collect()
    }

    /// (식별자, 메타데이터) 순회 (오름차순)
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &EntryMetadata)> {
        self.entries.iter().map(|(id, entry)| (id, &entry.metadata))
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 비어있는지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ========================================================================
    // 카테고리
    // ========================================================================

    /// 카테고리별 식별자 조회
    pub fn by_category(&self, category: &str) -> Vec<&Id> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.metadata.category == category)
            .map(|(id, _)| id)
            .collect()
    }

    /// 모든 카테고리 (정렬, 중복 제거)
    pub fn categories(&self) -> Vec<&str> {
        self.entries
            .values()
            .map(|entry| entry.metadata.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // ========================================================================
    // 이벤트
    // ========================================================================

    /// 이벤트 핸들러 등록
    pub fn add_handler(&mut self, handler: Arc<dyn RegistryEventHandler>) {
        debug!("[{}] Added event handler '{}'", self.config.name, handler.name());
        self.handlers.push(handler);
    }

    fn emit_event(&self, event: &RegistryEvent) {
        for handler in &self.handlers {
            handler.handle(event);
        }
    }

    // ========================================================================
    // 통계
    // ========================================================================

    /// 레지스트리 통계
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            name: self.config.name.clone(),
            total: self.entries.len(),
            aliases: self.entries.values().filter(|e| e.metadata.is_alias()).count(),
            categories: self.categories().len(),
            replacements: self
                .entries
                .values()
                .map(|e| u64::from(e.metadata.replace_count))
                .sum(),
        }
    }
}

impl<Id: Ord + Display, F: ?Sized> Default for Registry<Id, F> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// RegistryStats
// ============================================================================

/// 레지스트리 통계
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub name: String,
    pub total: usize,
    pub aliases: usize,
    pub categories: usize,
    pub replacements: u64,
}
