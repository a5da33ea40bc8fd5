//! Single-slot store for the most recently uploaded skill sheet.
//!
//! Requests that omit a skill sheet fall back to whatever is in the slot.
//! The slot is shared by every client of the process: two candidates
//! uploading concurrently race, and the last writer wins for both. Callers
//! that need isolation must send `skill_sheet` explicitly with each request.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::skillsheet::models::SkillSheet;

#[derive(Debug, Clone, Serialize)]
pub struct CachedSkillSheet {
    pub upload_id: Uuid,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub skill_sheet: SkillSheet,
    pub formatted_text: String,
}

#[derive(Clone, Default)]
pub struct SkillSheetCache {
    slot: Arc<RwLock<Option<Arc<CachedSkillSheet>>>>,
}

impl SkillSheetCache {
    /// Stores `entry`, returning the one it replaced.
    pub async fn replace(&self, entry: CachedSkillSheet) -> Option<Arc<CachedSkillSheet>> {
        let mut slot = self.slot.write().await;
        slot.replace(Arc::new(entry))
    }

    pub async fn latest(&self) -> Option<Arc<CachedSkillSheet>> {
        self.slot.read().await.clone()
    }

    pub async fn clear(&self) -> Option<Arc<CachedSkillSheet>> {
        self.slot.write().await.take()
    }

    /// The explicit text when given and non-blank, otherwise the cached one.
    pub async fn resolve_text(&self, explicit: Option<&str>) -> Option<String> {
        match explicit.map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => Some(text.to_string()),
            None => self.latest().await.map(|c| c.formatted_text.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(file_name: &str, text: &str) -> CachedSkillSheet {
        CachedSkillSheet {
            upload_id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            uploaded_at: Utc::now(),
            skill_sheet: SkillSheet::default(),
            formatted_text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_replace_returns_previous() {
        let cache = SkillSheetCache::default();
        assert!(cache.replace(entry("a.xlsx", "A")).await.is_none());
        let previous = cache.replace(entry("b.xlsx", "B")).await.unwrap();
        assert_eq!(previous.file_name, "a.xlsx");
        assert_eq!(cache.latest().await.unwrap().file_name, "b.xlsx");
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let cache = SkillSheetCache::default();
        let other = cache.clone();
        other.replace(entry("a.xlsx", "A")).await;
        assert!(cache.latest().await.is_some());
        cache.clear().await;
        assert!(other.latest().await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_prefers_explicit_text() {
        let cache = SkillSheetCache::default();
        assert_eq!(cache.resolve_text(None).await, None);

        cache.replace(entry("a.xlsx", "cached")).await;
        assert_eq!(cache.resolve_text(None).await.as_deref(), Some("cached"));
        assert_eq!(cache.resolve_text(Some("   ")).await.as_deref(), Some("cached"));
        assert_eq!(
            cache.resolve_text(Some("explicit")).await.as_deref(),
            Some("explicit")
        );
    }
}
