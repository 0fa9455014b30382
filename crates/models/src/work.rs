use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{check_http_url, require, Entry, RecordPatch};

/// 作品记录（作品集变体）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Entry for Work {
    fn id(&self) -> &str { &self.id }
    fn set_id(&mut self, id: String) { self.id = id; }
    fn stamp_created(&mut self, now_ms: i64) {
        self.created_at = now_ms;
        self.updated_at = now_ms;
    }
    fn stamp_updated(&mut self, now_ms: i64) { self.updated_at = now_ms; }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkInput {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

impl WorkInput {
    pub fn into_record(self) -> Result<Work, ModelError> {
        let title = require(self.title, "title")?;
        let description = require(self.description, "description")?;
        let image_url = require(self.image_url, "imageUrl")?;
        if let Some(link) = self.link.as_deref() {
            check_http_url(link, "link")?;
        }
        Ok(Work {
            id: self.id.unwrap_or_default(),
            title,
            description,
            image_url,
            link: self.link,
            tags: self.tags.unwrap_or_default(),
            is_pinned: self.is_pinned.unwrap_or(false),
            created_at: 0,
            updated_at: 0,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WorkPatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

impl WorkPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if matches!(self.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(ModelError::Validation("title must not be empty".into()));
        }
        if let Some(link) = self.link.as_deref() {
            check_http_url(link, "link")?;
        }
        Ok(())
    }
}

impl RecordPatch for WorkPatch {
    type Target = Work;

    fn apply(self, w: &mut Work) {
        if let Some(v) = self.title { w.title = v; }
        if let Some(v) = self.description { w.description = v; }
        if let Some(v) = self.image_url { w.image_url = v; }
        if let Some(v) = self.link { w.link = Some(v); }
        if let Some(v) = self.tags { w.tags = v; }
        if let Some(v) = self.is_pinned { w.is_pinned = v; }
    }
}
