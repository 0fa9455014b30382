//! Record types for the showcase document store.
//!
//! Every collection record keeps the legacy camelCase JSON field names so an
//! existing `db.json` parses unchanged. Creation inputs validate required
//! fields; updates go through typed patch structs with explicit optional
//! fields (unknown keys are rejected at the JSON boundary).

pub mod errors;
pub mod record;
pub mod domain;
pub mod sold_domain;
pub mod friendly_link;
pub mod work;
pub mod project;
pub mod friend_link;
pub mod site_settings;
pub mod auth;
pub mod document;

pub use auth::{AuthInfo, AuthRecord};
pub use document::Document;
pub use domain::{Domain, DomainInput, DomainPatch};
pub use friend_link::{FriendLink, FriendLinkInput, FriendLinkPatch};
pub use friendly_link::{FriendlyLink, FriendlyLinkInput, FriendlyLinkPatch};
pub use project::{Project, ProjectInput, ProjectPatch};
pub use record::{Entry, RecordPatch};
pub use site_settings::{SiteSettings, SiteSettingsPatch};
pub use sold_domain::{SoldDomain, SoldDomainInput, SoldDomainPatch};
pub use work::{Work, WorkInput, WorkPatch};
