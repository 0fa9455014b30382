use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{check_http_url, require, Entry, RecordPatch};

/// 域名记录：在售域名列表的一项
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub extension: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_url: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Entry for Domain {
    fn id(&self) -> &str { &self.id }
    fn set_id(&mut self, id: String) { self.id = id; }
    fn stamp_created(&mut self, now_ms: i64) {
        self.created_at = now_ms;
        self.updated_at = now_ms;
    }
    fn stamp_updated(&mut self, now_ms: i64) { self.updated_at = now_ms; }
}

/// 创建输入：id 可选（缺省由存储生成），status 缺省为 "available"
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub status: Option<String>,
    pub registrar: Option<String>,
    pub registrar_icon: Option<String>,
    pub registration_time: Option<String>,
    pub expiration_time: Option<String>,
    pub purchase_url: Option<String>,
}

impl DomainInput {
    pub fn into_record(self) -> Result<Domain, ModelError> {
        let name = require(self.name, "name")?;
        let extension = require(self.extension, "extension")?;
        if !extension.starts_with('.') {
            return Err(ModelError::Validation("extension must start with '.'".into()));
        }
        if let Some(url) = self.purchase_url.as_deref() {
            check_http_url(url, "purchaseUrl")?;
        }
        Ok(Domain {
            id: self.id.unwrap_or_default(),
            name,
            extension,
            status: self.status.unwrap_or_else(|| "available".into()),
            registrar: self.registrar,
            registrar_icon: self.registrar_icon,
            registration_time: self.registration_time,
            expiration_time: self.expiration_time,
            purchase_url: self.purchase_url,
            created_at: 0,
            updated_at: 0,
        })
    }
}

/// 部分更新：显式可选字段，未知字段在 JSON 边界被拒绝
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DomainPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub status: Option<String>,
    pub registrar: Option<String>,
    pub registrar_icon: Option<String>,
    pub registration_time: Option<String>,
    pub expiration_time: Option<String>,
    pub purchase_url: Option<String>,
}

impl DomainPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if matches!(self.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(ModelError::Validation("name must not be empty".into()));
        }
        if let Some(ext) = self.extension.as_deref() {
            if !ext.starts_with('.') {
                return Err(ModelError::Validation("extension must start with '.'".into()));
            }
        }
        if let Some(url) = self.purchase_url.as_deref() {
            check_http_url(url, "purchaseUrl")?;
        }
        Ok(())
    }
}

impl RecordPatch for DomainPatch {
    type Target = Domain;

    fn apply(self, d: &mut Domain) {
        if let Some(v) = self.name { d.name = v; }
        if let Some(v) = self.extension { d.extension = v; }
        if let Some(v) = self.status { d.status = v; }
        if let Some(v) = self.registrar { d.registrar = Some(v); }
        if let Some(v) = self.registrar_icon { d.registrar_icon = Some(v); }
        if let Some(v) = self.registration_time { d.registration_time = Some(v); }
        if let Some(v) = self.expiration_time { d.expiration_time = Some(v); }
        if let Some(v) = self.purchase_url { d.purchase_url = Some(v); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_status_and_keeps_legacy_field_names() {
        let input: DomainInput =
            serde_json::from_str(r#"{"name":"example","extension":".com"}"#).expect("parse");
        let rec = input.into_record().expect("valid");
        assert_eq!(rec.status, "available");
        let json = serde_json::to_value(&rec).expect("serialize");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("registrar").is_none());
    }

    #[test]
    fn input_rejects_missing_name() {
        let input: DomainInput = serde_json::from_str(r#"{"extension":".com"}"#).expect("parse");
        assert!(input.into_record().is_err());
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let res: Result<DomainPatch, _> = serde_json::from_str(r#"{"nmae":"typo"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut rec = DomainInput {
            name: Some("example".into()),
            extension: Some(".com".into()),
            registrar: Some("GoDaddy".into()),
            ..Default::default()
        }
        .into_record()
        .expect("valid");
        let patch: DomainPatch = serde_json::from_str(r#"{"status":"sold"}"#).expect("parse");
        patch.apply(&mut rec);
        assert_eq!(rec.status, "sold");
        assert_eq!(rec.registrar.as_deref(), Some("GoDaddy"));
    }
}
