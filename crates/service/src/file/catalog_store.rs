use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use models::{
    AuthRecord, Document, Domain, DomainInput, DomainPatch, Entry, FriendLink, FriendLinkInput,
    FriendLinkPatch, FriendlyLink, FriendlyLinkInput, FriendlyLinkPatch, Project, ProjectInput,
    ProjectPatch, RecordPatch, SiteSettings, SiteSettingsPatch, SoldDomain, SoldDomainInput,
    SoldDomainPatch, Work, WorkInput, WorkPatch,
};
use uuid::Uuid;

use crate::defaults;
use crate::errors::ServiceError;
use crate::storage::json_doc_store::JsonDocStore;

type Pick<R> = fn(&Document) -> &Vec<R>;
type PickMut<R> = fn(&mut Document) -> &mut Vec<R>;

/// Typed store over the application document.
///
/// Every mutation rewrites the whole document file; writers serialize through
/// the underlying store's lock. Collection order is insertion order.
#[derive(Clone)]
pub struct CatalogStore {
    store: Arc<JsonDocStore<Document>>,
}

impl CatalogStore {
    /// Open the store, healing a missing or corrupt file to the default
    /// document.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::open(path, defaults::default_document).await?;
        Ok(Arc::new(Self { store }))
    }

    fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    // ---- generic collection helpers ----

    async fn list_in<R>(&self, pick: Pick<R>) -> Vec<R>
    where
        R: Clone + Send + 'static,
    {
        self.store.read(|d| pick(d).clone()).await
    }

    async fn get_in<R>(&self, pick: Pick<R>, id: &str) -> Option<R>
    where
        R: Entry + Clone + Send + 'static,
    {
        self.store
            .read(|d| pick(d).iter().find(|r| r.id() == id).cloned())
            .await
    }

    /// Append a record. Ids are generated when absent; a caller-supplied id
    /// that already exists in the collection is rejected.
    async fn create_in<R>(&self, pick: PickMut<R>, mut rec: R) -> Result<R, ServiceError>
    where
        R: Entry + Clone + Send + 'static,
    {
        self.store
            .update(move |d| {
                let coll = pick(d);
                if rec.id().is_empty() {
                    rec.set_id(Uuid::new_v4().to_string());
                } else if coll.iter().any(|r| r.id() == rec.id()) {
                    return Err(ServiceError::Conflict(format!(
                        "id {} already exists",
                        rec.id()
                    )));
                }
                rec.stamp_created(Self::now_ms());
                coll.push(rec.clone());
                Ok(rec)
            })
            .await
    }

    async fn update_in<R, P>(
        &self,
        pick: PickMut<R>,
        what: &'static str,
        id: &str,
        patch: P,
    ) -> Result<R, ServiceError>
    where
        R: Entry + Clone + Send + 'static,
        P: RecordPatch<Target = R> + Send + 'static,
    {
        let id = id.to_string();
        self.store
            .update(move |d| {
                let rec = pick(d)
                    .iter_mut()
                    .find(|r| r.id() == id)
                    .ok_or_else(|| ServiceError::not_found(what))?;
                patch.apply(rec);
                rec.stamp_updated(Self::now_ms());
                Ok(rec.clone())
            })
            .await
    }

    /// Remove a record by id. Idempotent: the document is persisted either
    /// way and the return value says whether anything was removed.
    async fn delete_in<R>(&self, pick: PickMut<R>, id: &str) -> Result<bool, ServiceError>
    where
        R: Entry + Send + 'static,
    {
        let id = id.to_string();
        self.store
            .update(move |d| {
                let coll = pick(d);
                let before = coll.len();
                coll.retain(|r| r.id() != id);
                Ok(coll.len() != before)
            })
            .await
    }

    // ---- domains ----

    pub async fn list_domains(&self) -> Vec<Domain> {
        self.list_in(|d| &d.domains).await
    }

    pub async fn get_domain(&self, id: &str) -> Option<Domain> {
        self.get_in(|d| &d.domains, id).await
    }

    pub async fn create_domain(&self, input: DomainInput) -> Result<Domain, ServiceError> {
        let rec = input.into_record()?;
        self.create_in(|d| &mut d.domains, rec).await
    }

    pub async fn update_domain(&self, id: &str, patch: DomainPatch) -> Result<Domain, ServiceError> {
        patch.validate()?;
        self.update_in(|d| &mut d.domains, "domain", id, patch).await
    }

    pub async fn delete_domain(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete_in(|d| &mut d.domains, id).await
    }

    // ---- sold domains ----

    pub async fn list_sold_domains(&self) -> Vec<SoldDomain> {
        self.list_in(|d| &d.sold_domains).await
    }

    pub async fn get_sold_domain(&self, id: &str) -> Option<SoldDomain> {
        self.get_in(|d| &d.sold_domains, id).await
    }

    pub async fn create_sold_domain(
        &self,
        input: SoldDomainInput,
    ) -> Result<SoldDomain, ServiceError> {
        let rec = input.into_record()?;
        self.create_in(|d| &mut d.sold_domains, rec).await
    }

    pub async fn update_sold_domain(
        &self,
        id: &str,
        patch: SoldDomainPatch,
    ) -> Result<SoldDomain, ServiceError> {
        patch.validate()?;
        self.update_in(|d| &mut d.sold_domains, "sold domain", id, patch)
            .await
    }

    pub async fn delete_sold_domain(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete_in(|d| &mut d.sold_domains, id).await
    }

    // ---- friendly links ----

    pub async fn list_friendly_links(&self) -> Vec<FriendlyLink> {
        self.list_in(|d| &d.friendly_links).await
    }

    pub async fn get_friendly_link(&self, id: &str) -> Option<FriendlyLink> {
        self.get_in(|d| &d.friendly_links, id).await
    }

    pub async fn create_friendly_link(
        &self,
        input: FriendlyLinkInput,
    ) -> Result<FriendlyLink, ServiceError> {
        let rec = input.into_record()?;
        self.create_in(|d| &mut d.friendly_links, rec).await
    }

    pub async fn update_friendly_link(
        &self,
        id: &str,
        patch: FriendlyLinkPatch,
    ) -> Result<FriendlyLink, ServiceError> {
        patch.validate()?;
        self.update_in(|d| &mut d.friendly_links, "friendly link", id, patch)
            .await
    }

    pub async fn delete_friendly_link(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete_in(|d| &mut d.friendly_links, id).await
    }

    // ---- works ----

    pub async fn list_works(&self) -> Vec<Work> {
        self.list_in(|d| &d.works).await
    }

    pub async fn get_work(&self, id: &str) -> Option<Work> {
        self.get_in(|d| &d.works, id).await
    }

    pub async fn create_work(&self, input: WorkInput) -> Result<Work, ServiceError> {
        let rec = input.into_record()?;
        self.create_in(|d| &mut d.works, rec).await
    }

    pub async fn update_work(&self, id: &str, patch: WorkPatch) -> Result<Work, ServiceError> {
        patch.validate()?;
        self.update_in(|d| &mut d.works, "work", id, patch).await
    }

    pub async fn delete_work(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete_in(|d| &mut d.works, id).await
    }

    // ---- projects ----

    pub async fn list_projects(&self) -> Vec<Project> {
        self.list_in(|d| &d.projects).await
    }

    pub async fn get_project(&self, id: &str) -> Option<Project> {
        self.get_in(|d| &d.projects, id).await
    }

    pub async fn create_project(&self, input: ProjectInput) -> Result<Project, ServiceError> {
        let rec = input.into_record()?;
        self.create_in(|d| &mut d.projects, rec).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        patch: ProjectPatch,
    ) -> Result<Project, ServiceError> {
        patch.validate()?;
        self.update_in(|d| &mut d.projects, "project", id, patch).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete_in(|d| &mut d.projects, id).await
    }

    // ---- friends ----

    pub async fn list_friends(&self) -> Vec<FriendLink> {
        self.list_in(|d| &d.friends).await
    }

    pub async fn get_friend(&self, id: &str) -> Option<FriendLink> {
        self.get_in(|d| &d.friends, id).await
    }

    pub async fn create_friend(&self, input: FriendLinkInput) -> Result<FriendLink, ServiceError> {
        let rec = input.into_record()?;
        self.create_in(|d| &mut d.friends, rec).await
    }

    pub async fn update_friend(
        &self,
        id: &str,
        patch: FriendLinkPatch,
    ) -> Result<FriendLink, ServiceError> {
        patch.validate()?;
        self.update_in(|d| &mut d.friends, "friend", id, patch).await
    }

    pub async fn delete_friend(&self, id: &str) -> Result<bool, ServiceError> {
        self.delete_in(|d| &mut d.friends, id).await
    }

    // ---- registrar icons（字典，不走集合 CRUD）----

    pub async fn list_icons(&self) -> BTreeMap<String, String> {
        self.store.read(|d| d.registrar_icons.clone()).await
    }

    pub async fn get_icon(&self, name: &str) -> Option<String> {
        self.store.read(|d| d.registrar_icons.get(name).cloned()).await
    }

    pub async fn create_icon(&self, name: String, svg: String) -> Result<(), ServiceError> {
        if name.trim().is_empty() || svg.trim().is_empty() {
            return Err(ServiceError::Validation("name and svg are required".into()));
        }
        self.store
            .update(move |d| {
                if d.registrar_icons.contains_key(&name) {
                    return Err(ServiceError::Conflict(format!(
                        "icon {} already exists",
                        name
                    )));
                }
                d.registrar_icons.insert(name, svg);
                Ok(())
            })
            .await
    }

    pub async fn update_icon(&self, name: String, svg: String) -> Result<(), ServiceError> {
        if name.trim().is_empty() || svg.trim().is_empty() {
            return Err(ServiceError::Validation("name and svg are required".into()));
        }
        self.store
            .update(move |d| {
                match d.registrar_icons.get_mut(&name) {
                    Some(entry) => {
                        *entry = svg;
                        Ok(())
                    }
                    None => Err(ServiceError::not_found("icon")),
                }
            })
            .await
    }

    pub async fn delete_icon(&self, name: &str) -> Result<(), ServiceError> {
        let name = name.to_string();
        self.store
            .update(move |d| {
                if d.registrar_icons.remove(&name).is_none() {
                    return Err(ServiceError::not_found("icon"));
                }
                Ok(())
            })
            .await
    }

    // ---- singletons ----

    pub async fn site_settings(&self) -> SiteSettings {
        self.store.read(|d| d.site_settings.clone()).await
    }

    pub async fn update_site_settings(
        &self,
        patch: SiteSettingsPatch,
    ) -> Result<SiteSettings, ServiceError> {
        patch.validate()?;
        self.store
            .update(move |d| {
                patch.apply(&mut d.site_settings);
                d.site_settings.updated_at = Self::now_ms();
                Ok(d.site_settings.clone())
            })
            .await
    }

    pub async fn auth_record(&self) -> AuthRecord {
        self.store.read(|d| d.auth.clone()).await
    }

    pub async fn set_password_hash(&self, hash: String) -> Result<(), ServiceError> {
        self.store
            .update(move |d| {
                d.auth.password_hash = hash;
                d.auth.updated_at = Self::now_ms();
                Ok(())
            })
            .await
    }

    // ---- whole-document operations ----

    /// Snapshot of the whole document, e.g. for backup export.
    pub async fn export(&self) -> Document {
        self.store.read(|d| d.clone()).await
    }

    /// Overwrite the whole document, e.g. on restore from backup.
    pub async fn replace(&self, doc: Document) -> Result<(), ServiceError> {
        self.store.replace(doc).await
    }

    /// Restore the hardcoded default document, discarding all data.
    pub async fn reset(&self) -> Result<(), ServiceError> {
        self.store.replace(defaults::default_document()).await
    }
}
