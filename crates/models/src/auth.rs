use serde::{Deserialize, Serialize};

/// Stored admin credential. Only the argon2 PHC hash is persisted; the
/// plaintext never touches the document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRecord {
    pub id: String,
    pub password_hash: String,
    pub algorithm: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Credential metadata safe to return to clients.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthInfo {
    pub id: String,
    pub algorithm: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&AuthRecord> for AuthInfo {
    fn from(rec: &AuthRecord) -> Self {
        Self {
            id: rec.id.clone(),
            algorithm: rec.algorithm.clone(),
            created_at: rec.created_at,
            updated_at: rec.updated_at,
        }
    }
}
