use std::collections::HashMap;

use tokio::sync::RwLock;

use bimquote_core::domain::lead::{Lead, LeadId};

use super::{LeadRepository, RepositoryError};

/// In-memory stand-in for workflow tests. Enforces the same sparse
/// uniqueness on quote numbers as the SQL schema's partial index.
#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: RwLock<HashMap<String, Lead>>,
}

impl InMemoryLeadRepository {
    fn quote_number_taken(leads: &HashMap<String, Lead>, candidate: &Lead) -> bool {
        let Some(number) = candidate.quote_number.as_deref() else {
            return false;
        };
        leads
            .values()
            .any(|other| other.id != candidate.id && other.quote_number.as_deref() == Some(number))
    }
}

#[async_trait::async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, RepositoryError> {
        let leads = self.leads.read().await;
        Ok(leads.get(&id.0).cloned())
    }

    async fn insert(&self, lead: &Lead) -> Result<(), RepositoryError> {
        let mut leads = self.leads.write().await;
        if leads.contains_key(&lead.id.0) {
            return Err(RepositoryError::Constraint(format!(
                "lead `{}` already exists",
                lead.id.0
            )));
        }
        if Self::quote_number_taken(&leads, lead) {
            return Err(RepositoryError::Constraint(format!(
                "quote number `{}` already assigned",
                lead.quote_number.as_deref().unwrap_or_default()
            )));
        }
        leads.insert(lead.id.0.clone(), lead.clone());
        Ok(())
    }

    async fn update(&self, lead: &Lead) -> Result<(), RepositoryError> {
        let mut leads = self.leads.write().await;
        if !leads.contains_key(&lead.id.0) {
            return Err(RepositoryError::Database(sqlx::Error::RowNotFound));
        }
        if Self::quote_number_taken(&leads, lead) {
            return Err(RepositoryError::Constraint(format!(
                "quote number `{}` already assigned",
                lead.quote_number.as_deref().unwrap_or_default()
            )));
        }
        leads.insert(lead.id.0.clone(), lead.clone());
        Ok(())
    }
}
