use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{check_http_url, require, Entry, RecordPatch};

/// 项目记录（作品集变体）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Entry for Project {
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
pub struct ProjectInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

impl ProjectInput {
    pub fn into_record(self) -> Result<Project, ModelError> {
        let name = require(self.name, "name")?;
        let description = require(self.description, "description")?;
        let image_url = require(self.image_url, "imageUrl")?;
        if let Some(url) = self.repo_url.as_deref() {
            check_http_url(url, "repoUrl")?;
        }
        if let Some(url) = self.demo_url.as_deref() {
            check_http_url(url, "demoUrl")?;
        }
        Ok(Project {
            id: self.id.unwrap_or_default(),
            name,
            description,
            image_url,
            repo_url: self.repo_url,
            demo_url: self.demo_url,
            technologies: self.technologies.unwrap_or_default(),
            is_pinned: self.is_pinned.unwrap_or(false),
            created_at: 0,
            updated_at: 0,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProjectPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

impl ProjectPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if matches!(self.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(ModelError::Validation("name must not be empty".into()));
        }
        if let Some(url) = self.repo_url.as_deref() {
            check_http_url(url, "repoUrl")?;
        }
        if let Some(url) = self.demo_url.as_deref() {
            check_http_url(url, "demoUrl")?;
        }
        Ok(())
    }
}

impl RecordPatch for ProjectPatch {
    type Target = Project;

    fn apply(self, p: &mut Project) {
        if let Some(v) = self.name { p.name = v; }
        if let Some(v) = self.description { p.description = v; }
        if let Some(v) = self.image_url { p.image_url = v; }
        if let Some(v) = self.repo_url { p.repo_url = Some(v); }
        if let Some(v) = self.demo_url { p.demo_url = Some(v); }
        if let Some(v) = self.technologies { p.technologies = v; }
        if let Some(v) = self.is_pinned { p.is_pinned = v; }
    }
}
