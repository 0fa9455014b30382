use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

const LOGO_TYPES: [&str; 2] = ["text", "image"];
const THEMES: [&str; 3] = ["light", "dark", "system"];

/// 站点设置：单例对象，不走集合 CRUD
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: String,
    pub site_name: String,
    pub logo_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
    pub favicon: String,
    pub title: String,
    pub description: String,
    pub footer: String,
    pub theme: String,
    #[serde(default)]
    pub social: BTreeMap<String, String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// 站点设置的部分更新
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SiteSettingsPatch {
    pub site_name: Option<String>,
    pub logo_type: Option<String>,
    pub logo_text: Option<String>,
    pub logo_image: Option<String>,
    pub favicon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub footer: Option<String>,
    pub theme: Option<String>,
    pub social: Option<BTreeMap<String, String>>,
}

impl SiteSettingsPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(t) = self.logo_type.as_deref() {
            if !LOGO_TYPES.contains(&t) {
                return Err(ModelError::Validation("logoType must be text or image".into()));
            }
        }
        if let Some(t) = self.theme.as_deref() {
            if !THEMES.contains(&t) {
                return Err(ModelError::Validation("theme must be light, dark or system".into()));
            }
        }
        if matches!(self.site_name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(ModelError::Validation("siteName must not be empty".into()));
        }
        Ok(())
    }

    pub fn apply(self, s: &mut SiteSettings) {
        if let Some(v) = self.site_name { s.site_name = v; }
        if let Some(v) = self.logo_type { s.logo_type = v; }
        if let Some(v) = self.logo_text { s.logo_text = Some(v); }
        if let Some(v) = self.logo_image { s.logo_image = Some(v); }
        if let Some(v) = self.favicon { s.favicon = v; }
        if let Some(v) = self.title { s.title = v; }
        if let Some(v) = self.description { s.description = v; }
        if let Some(v) = self.footer { s.footer = v; }
        if let Some(v) = self.theme { s.theme = v; }
        if let Some(v) = self.social { s.social = v; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_theme_rejected() {
        let patch: SiteSettingsPatch =
            serde_json::from_str(r#"{"theme":"solarized"}"#).expect("parse");
        assert!(patch.validate().is_err());
    }
}
