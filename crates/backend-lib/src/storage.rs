// ============================
// gatekey-backend-lib/src/storage.rs
// ============================
//! Credential store abstraction with in-memory and flat-file implementations.
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use tokio::fs as tokio_fs;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewUser, User};

/// Trait for credential store backends.
///
/// Ids are assigned by the store at insert. Email uniqueness is enforced
/// here, at the storage level, so concurrent registrations cannot both
/// slip past the flow-level existence check.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user, assigning a fresh id.
    ///
    /// Fails with `Conflict` if the email is already taken.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Look up a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

/// In-memory implementation of the `UserStore` trait.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<String, User>>,
    /// email -> id index; doubles as the uniqueness constraint
    emails: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = Uuid::new_v4().to_string();

        // Claiming the email index entry is the atomic uniqueness check.
        match self.emails.entry(new_user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(
                "email already in use".to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(id.clone());
                let user = User {
                    id: id.clone(),
                    name: new_user.name,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                };
                self.users.insert(id, user.clone());
                Ok(user)
            },
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let Some(id) = self.emails.get(email).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }
}

/// Flat-file implementation of the `UserStore` trait.
///
/// One JSON document per user under `<root>/users/<id>.json`. Email lookup
/// scans the directory; uniqueness on insert is therefore best-effort
/// (scan then write) rather than atomic.
#[derive(Clone)]
pub struct FlatFileStore {
    root: PathBuf,
}

impl FlatFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("users"))?;
        Ok(Self { root })
    }

    fn user_path(&self, id: &str) -> PathBuf {
        self.root.join("users").join(format!("{id}.json"))
    }
}

#[async_trait]
impl UserStore for FlatFileStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        if self.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::Conflict("email already in use".to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
        };

        let json = serde_json::to_string_pretty(&user)?;
        tokio_fs::write(self.user_path(&user.id), json).await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let mut dir = tokio_fs::read_dir(self.root.join("users")).await?;

        while let Some(entry) = dir.next_entry().await? {
            let content = tokio_fs::read_to_string(entry.path()).await?;
            let user: User = serde_json::from_str(&content)?;
            if user.email == email {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        // Ids are store-minted uuids; anything path-like is not ours.
        if id.chars().any(|c| c == '/' || c == '\\' || c == '.') {
            return Ok(None);
        }

        let path = self.user_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let content = tokio_fs::read_to_string(&path).await?;
        let user: User = serde_json::from_str(&content)?;

        Ok(Some(user))
    }
}
