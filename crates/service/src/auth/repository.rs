use async_trait::async_trait;
use models::AuthRecord;

use crate::errors::ServiceError;
use crate::file::catalog_store::CatalogStore;

/// Trait abstraction for credential storage.
/// Implementations can be file-backed (the catalog document) or in-memory.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn auth_record(&self) -> Result<AuthRecord, ServiceError>;
    async fn set_password_hash(&self, hash: String) -> Result<(), ServiceError>;
}

#[async_trait]
impl CredentialRepository for CatalogStore {
    async fn auth_record(&self) -> Result<AuthRecord, ServiceError> {
        Ok(CatalogStore::auth_record(self).await)
    }

    async fn set_password_hash(&self, hash: String) -> Result<(), ServiceError> {
        CatalogStore::set_password_hash(self, hash).await
    }
}

pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    use crate::auth::service::hash_password;

    /// In-memory credential repository for tests and examples.
    pub struct MockCredentialRepository {
        record: RwLock<AuthRecord>,
    }

    impl MockCredentialRepository {
        pub fn with_password(password: &str) -> Self {
            let record = AuthRecord {
                id: "admin".into(),
                password_hash: hash_password(password).expect("hash mock credential"),
                algorithm: "argon2".into(),
                created_at: 0,
                updated_at: 0,
            };
            Self { record: RwLock::new(record) }
        }
    }

    #[async_trait]
    impl CredentialRepository for MockCredentialRepository {
        async fn auth_record(&self) -> Result<AuthRecord, ServiceError> {
            Ok(self.record.read().await.clone())
        }

        async fn set_password_hash(&self, hash: String) -> Result<(), ServiceError> {
            self.record.write().await.password_hash = hash;
            Ok(())
        }
    }
}
