use chrono::{DateTime, Utc};
use sqlx::Row;

use bimquote_core::domain::lead::{Lead, LeadId};

use super::{LeadRepository, RepositoryError};
use crate::DbPool;

pub struct SqlLeadRepository {
    pool: DbPool,
}

impl SqlLeadRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LeadRepository for SqlLeadRepository {
    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, quote_number, name, company_name, country, email, number, message,
                    website_type, products, insert_products, pages, design_style, features,
                    timeline, hosting, domain, currency, price, created_at, updated_at
             FROM lead WHERE id = ?",
        )
        .bind(&id.0)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_lead).transpose()
    }

    async fn insert(&self, lead: &Lead) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();
        let features = encode_features(&lead.features)?;

        sqlx::query(
            "INSERT INTO lead (
                id, quote_number, name, company_name, country, email, number, message,
                website_type, products, insert_products, pages, design_style, features,
                timeline, hosting, domain, currency, price, created_at, updated_at
             )
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&lead.id.0)
        .bind(lead.quote_number.as_deref())
        .bind(&lead.name)
        .bind(&lead.company_name)
        .bind(&lead.country)
        .bind(&lead.email)
        .bind(&lead.number)
        .bind(&lead.message)
        .bind(&lead.website_type)
        .bind(&lead.products)
        .bind(&lead.insert_products)
        .bind(&lead.pages)
        .bind(&lead.design_style)
        .bind(&features)
        .bind(&lead.timeline)
        .bind(&lead.hosting)
        .bind(&lead.domain)
        .bind(&lead.currency)
        .bind(lead.price)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, lead: &Lead) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();
        let features = encode_features(&lead.features)?;

        let result = sqlx::query(
            "UPDATE lead SET
                quote_number = ?, name = ?, company_name = ?, country = ?, email = ?,
                number = ?, message = ?, website_type = ?, products = ?, insert_products = ?,
                pages = ?, design_style = ?, features = ?, timeline = ?, hosting = ?,
                domain = ?, currency = ?, price = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(lead.quote_number.as_deref())
        .bind(&lead.name)
        .bind(&lead.company_name)
        .bind(&lead.country)
        .bind(&lead.email)
        .bind(&lead.number)
        .bind(&lead.message)
        .bind(&lead.website_type)
        .bind(&lead.products)
        .bind(&lead.insert_products)
        .bind(&lead.pages)
        .bind(&lead.design_style)
        .bind(&features)
        .bind(&lead.timeline)
        .bind(&lead.hosting)
        .bind(&lead.domain)
        .bind(&lead.currency)
        .bind(lead.price)
        .bind(&now)
        .bind(&lead.id.0)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Database(sqlx::Error::RowNotFound));
        }

        Ok(())
    }
}

fn encode_features(features: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(features)
        .map_err(|error| RepositoryError::Decode(format!("features encode failed: {error}")))
}

fn decode_lead(row: sqlx::sqlite::SqliteRow) -> Result<Lead, RepositoryError> {
    let features_raw: String = row.try_get("features")?;
    let features: Vec<String> = serde_json::from_str(&features_raw)
        .map_err(|error| RepositoryError::Decode(format!("features decode failed: {error}")))?;

    Ok(Lead {
        id: LeadId(row.try_get("id")?),
        quote_number: row.try_get("quote_number")?,
        name: row.try_get("name")?,
        company_name: row.try_get("company_name")?,
        country: row.try_get("country")?,
        email: row.try_get("email")?,
        number: row.try_get("number")?,
        message: row.try_get("message")?,
        website_type: row.try_get("website_type")?,
        products: row.try_get("products")?,
        insert_products: row.try_get("insert_products")?,
        pages: row.try_get("pages")?,
        design_style: row.try_get("design_style")?,
        features,
        timeline: row.try_get("timeline")?,
        hosting: row.try_get("hosting")?,
        domain: row.try_get("domain")?,
        currency: row.try_get("currency")?,
        price: row.try_get("price")?,
        created_at: decode_timestamp(&row, "created_at")?,
        updated_at: decode_timestamp(&row, "updated_at")?,
    })
}

fn decode_timestamp(
    row: &sqlx::sqlite::SqliteRow,
    column: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let raw: String = row.try_get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|error| RepositoryError::Decode(format!("{column} decode failed: {error}")))
}
