use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{check_http_url, require, Entry, RecordPatch};

/// 友情链接（域名站变体）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendlyLink {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Entry for FriendlyLink {
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
pub struct FriendlyLinkInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl FriendlyLinkInput {
    pub fn into_record(self) -> Result<FriendlyLink, ModelError> {
        let name = require(self.name, "name")?;
        let url = require(self.url, "url")?;
        check_http_url(&url, "url")?;
        Ok(FriendlyLink {
            id: self.id.unwrap_or_default(),
            name,
            url,
            description: self.description,
            created_at: 0,
            updated_at: 0,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FriendlyLinkPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl FriendlyLinkPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if matches!(self.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(ModelError::Validation("name must not be empty".into()));
        }
        if let Some(url) = self.url.as_deref() {
            check_http_url(url, "url")?;
        }
        Ok(())
    }
}

impl RecordPatch for FriendlyLinkPatch {
    type Target = FriendlyLink;

    fn apply(self, l: &mut FriendlyLink) {
        if let Some(v) = self.name { l.name = v; }
        if let Some(v) = self.url { l.url = v; }
        if let Some(v) = self.description { l.description = Some(v); }
    }
}
