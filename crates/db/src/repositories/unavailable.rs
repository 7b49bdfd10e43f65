use bimquote_core::domain::lead::{Lead, LeadId};

use super::{LeadRepository, RepositoryError};

/// Stand-in used when the store could not be configured at startup. Every
/// operation reports the store as unavailable, so requests fail with a
/// service-unavailable result instead of crashing the process.
pub struct UnavailableLeadRepository {
    reason: String,
}

impl UnavailableLeadRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn error(&self) -> RepositoryError {
        RepositoryError::Unavailable(self.reason.clone())
    }
}

#[async_trait::async_trait]
impl LeadRepository for UnavailableLeadRepository {
    async fn find_by_id(&self, _id: &LeadId) -> Result<Option<Lead>, RepositoryError> {
        Err(self.error())
    }

    async fn insert(&self, _lead: &Lead) -> Result<(), RepositoryError> {
        Err(self.error())
    }

    async fn update(&self, _lead: &Lead) -> Result<(), RepositoryError> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use bimquote_core::domain::lead::{Lead, LeadId};

    use crate::repositories::{LeadRepository, UnavailableLeadRepository};

    #[tokio::test]
    async fn every_operation_reports_unavailable() {
        let repo = UnavailableLeadRepository::new("database url not configured");
        let lead = Lead::intake(
            "Amy".to_string(),
            String::new(),
            "Mauritius".to_string(),
            String::new(),
            String::new(),
        );

        let find = repo.find_by_id(&LeadId("LD-any".to_string())).await.expect_err("find");
        let insert = repo.insert(&lead).await.expect_err("insert");
        let update = repo.update(&lead).await.expect_err("update");

        assert!(find.is_unavailable());
        assert!(insert.is_unavailable());
        assert!(update.is_unavailable());
    }
}
