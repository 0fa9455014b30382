use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::auth::AuthRecord;
use crate::domain::Domain;
use crate::friend_link::FriendLink;
use crate::friendly_link::FriendlyLink;
use crate::project::Project;
use crate::site_settings::SiteSettings;
use crate::sold_domain::SoldDomain;
use crate::work::Work;

/// The whole backing store for one application instance: every collection,
/// the icon dictionary and both singletons, serialized as a single JSON file.
/// Collection fields default to empty so documents written before a
/// collection existed still parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub sold_domains: Vec<SoldDomain>,
    #[serde(default)]
    pub friendly_links: Vec<FriendlyLink>,
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub friends: Vec<FriendLink>,
    #[serde(default)]
    pub registrar_icons: BTreeMap<String, String>,
    pub site_settings: SiteSettings,
    pub auth: AuthRecord,
}
