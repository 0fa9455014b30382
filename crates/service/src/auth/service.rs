use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{info, instrument};

use super::domain::{AuthInfo, AuthSession, ChangePasswordInput, LoginInput, SessionClaims};
use super::errors::AuthError;
use super::repository::CredentialRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: "dev-secret-change-me".into(), token_hours: 12 }
    }
}

/// Hash a plaintext password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?
        .to_string())
}

/// Auth business service independent of web framework
pub struct AuthService<R: CredentialRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: CredentialRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg }
    }

    /// Verify the admin password and issue a session token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockCredentialRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockCredentialRepository::with_password("Secret123"));
    /// let svc = AuthService::new(repo, AuthConfig::default());
    /// let session = tokio_test::block_on(svc.login(LoginInput { password: "Secret123".into() })).unwrap();
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let rec = self.repo.auth_record().await?;
        let parsed =
            PasswordHash::new(&rec.password_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AuthError::Unauthorized);
        }

        let token = self.issue_token(&rec.id)?;
        info!(account = %rec.id, "admin_logged_in");
        Ok(AuthSession { info: AuthInfo::from(&rec), token })
    }

    /// Rotate the admin password after verifying the current one.
    #[instrument(skip(self, input))]
    pub async fn change_password(&self, input: ChangePasswordInput) -> Result<(), AuthError> {
        if input.current_password.is_empty() || input.new_password.is_empty() {
            return Err(AuthError::Validation(
                "current password and new password are required".into(),
            ));
        }
        if input.new_password.len() < 8 {
            return Err(AuthError::Validation("password too short (>=8)".into()));
        }

        let rec = self.repo.auth_record().await?;
        let parsed =
            PasswordHash::new(&rec.password_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
        if Argon2::default()
            .verify_password(input.current_password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AuthError::Unauthorized);
        }

        let hash = hash_password(&input.new_password)?;
        self.repo.set_password_hash(hash).await?;
        info!(account = %rec.id, "admin_password_changed");
        Ok(())
    }

    /// Credential metadata for display; never includes the hash.
    pub async fn info(&self) -> Result<AuthInfo, AuthError> {
        let rec = self.repo.auth_record().await?;
        Ok(AuthInfo::from(&rec))
    }

    /// Validate a session token and return its claims.
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let key = DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;
        decode::<SessionClaims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    fn issue_token(&self, subject: &str) -> Result<String, AuthError> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::hours(self.cfg.token_hours);
        let claims = SessionClaims {
            sub: subject.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };
        encode(
            &JwtHeader::default(),
            &claims,
            &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Token(e.to_string()))
    }
}
