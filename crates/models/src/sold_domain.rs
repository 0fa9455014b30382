use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{require, Entry, RecordPatch};

/// 已售域名记录
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldDomain {
    pub id: String,
    pub name: String,
    pub extension: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_date: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Entry for SoldDomain {
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
pub struct SoldDomainInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub status: Option<String>,
    pub sold_to: Option<String>,
    pub sold_date: Option<String>,
}

impl SoldDomainInput {
    pub fn into_record(self) -> Result<SoldDomain, ModelError> {
        let name = require(self.name, "name")?;
        let extension = require(self.extension, "extension")?;
        if !extension.starts_with('.') {
            return Err(ModelError::Validation("extension must start with '.'".into()));
        }
        Ok(SoldDomain {
            id: self.id.unwrap_or_default(),
            name,
            extension,
            status: self.status.unwrap_or_else(|| "sold".into()),
            sold_to: self.sold_to,
            sold_date: self.sold_date,
            created_at: 0,
            updated_at: 0,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SoldDomainPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub status: Option<String>,
    pub sold_to: Option<String>,
    pub sold_date: Option<String>,
}

impl SoldDomainPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if matches!(self.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(ModelError::Validation("name must not be empty".into()));
        }
        if let Some(ext) = self.extension.as_deref() {
            if !ext.starts_with('.') {
                return Err(ModelError::Validation("extension must start with '.'".into()));
            }
        }
        Ok(())
    }
}

impl RecordPatch for SoldDomainPatch {
    type Target = SoldDomain;

    fn apply(self, d: &mut SoldDomain) {
        if let Some(v) = self.name { d.name = v; }
        if let Some(v) = self.extension { d.extension = v; }
        if let Some(v) = self.status { d.status = v; }
        if let Some(v) = self.sold_to { d.sold_to = Some(v); }
        if let Some(v) = self.sold_date { d.sold_date = Some(v); }
    }
}
