use async_trait::async_trait;
use thiserror::Error;

use bimquote_core::domain::lead::{Lead, LeadId};

pub mod lead;
pub mod memory;
pub mod unavailable;

pub use lead::SqlLeadRepository;
pub use memory::InMemoryLeadRepository;
pub use unavailable::UnavailableLeadRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Schema-level rejections: the sparse-unique quote number, the
    /// non-empty name/country checks. These map to a client error, not a
    /// server failure.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Constraint(_) => true,
            Self::Database(sqlx::Error::Database(error)) => matches!(
                error.kind(),
                sqlx::error::ErrorKind::UniqueViolation
                    | sqlx::error::ErrorKind::CheckViolation
                    | sqlx::error::ErrorKind::NotNullViolation
            ),
            _ => false,
        }
    }

    /// Connectivity problems rather than bad requests: the caller should be
    /// told the service is temporarily unavailable.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Unavailable(_) => true,
            Self::Database(error) => matches!(
                error,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }

    /// The record addressed by the operation does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::RowNotFound))
    }
}

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, RepositoryError>;

    /// Insert a new record. Duplicate quote numbers must fail, never
    /// silently overwrite.
    async fn insert(&self, lead: &Lead) -> Result<(), RepositoryError>;

    /// Rewrite an existing record in place. `created_at` is preserved,
    /// `updated_at` is refreshed by the store.
    async fn update(&self, lead: &Lead) -> Result<(), RepositoryError>;
}
