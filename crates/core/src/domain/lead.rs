use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn generate() -> Self {
        Self(format!("LD-{}", Uuid::new_v4().simple()))
    }
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lead/quote record: created at intake with contact fields only, enriched
/// and assigned a quote number during finalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    /// Assigned at most once, during finalization. Sparse-unique in the store.
    pub quote_number: Option<String>,
    pub name: String,
    pub company_name: String,
    pub country: String,
    pub email: String,
    pub number: String,
    pub message: String,
    pub website_type: String,
    pub products: String,
    pub insert_products: String,
    pub pages: String,
    pub design_style: String,
    pub features: Vec<String>,
    pub timeline: String,
    pub hosting: String,
    pub domain: String,
    pub currency: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    fn blank(id: LeadId) -> Self {
        let now = Utc::now();
        Self {
            id,
            quote_number: None,
            name: String::new(),
            company_name: String::new(),
            country: String::new(),
            email: String::new(),
            number: String::new(),
            message: String::new(),
            website_type: String::new(),
            products: String::new(),
            insert_products: String::new(),
            pages: String::new(),
            design_style: String::new(),
            features: Vec::new(),
            timeline: String::new(),
            hosting: String::new(),
            domain: String::new(),
            currency: "MUR".to_string(),
            price: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build an intake-stage record. No quote number is assigned here.
    pub fn intake(
        name: String,
        company_name: String,
        country: String,
        email: String,
        number: String,
    ) -> Self {
        let mut lead = Self::blank(LeadId::generate());
        lead.name = name;
        lead.company_name = company_name;
        lead.country = country;
        lead.email = email;
        lead.number = number;
        lead
    }

    pub fn is_finalized(&self) -> bool {
        self.quote_number.is_some()
    }
}

/// Incoming finalization fields with explicit present/absent markers.
///
/// `None` means the field was absent from the request and the stored value
/// stays untouched. A present string that is blank is also treated as absent:
/// the quotation form re-submits empty inputs for steps the client skipped.
/// `price` and `features`, when present, always overwrite — a zero price and
/// an explicitly cleared feature list are both expressible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub number: Option<String>,
    pub message: Option<String>,
    pub website_type: Option<String>,
    pub products: Option<String>,
    pub insert_products: Option<String>,
    pub pages: Option<String>,
    pub design_style: Option<String>,
    pub features: Option<Vec<String>>,
    pub timeline: Option<String>,
    pub hosting: Option<String>,
    pub domain: Option<String>,
    pub currency: Option<String>,
    pub price: Option<f64>,
}

fn overwrite(target: &mut String, incoming: Option<&String>) {
    if let Some(value) = incoming {
        if !value.trim().is_empty() {
            *target = value.clone();
        }
    }
}

impl LeadPatch {
    /// Non-destructive overwrite: merge the present fields over `lead`,
    /// leaving everything else as stored.
    pub fn apply(&self, lead: &mut Lead) {
        overwrite(&mut lead.name, self.name.as_ref());
        overwrite(&mut lead.company_name, self.company_name.as_ref());
        overwrite(&mut lead.country, self.country.as_ref());
        overwrite(&mut lead.email, self.email.as_ref());
        overwrite(&mut lead.number, self.number.as_ref());
        overwrite(&mut lead.message, self.message.as_ref());
        overwrite(&mut lead.website_type, self.website_type.as_ref());
        overwrite(&mut lead.products, self.products.as_ref());
        overwrite(&mut lead.insert_products, self.insert_products.as_ref());
        overwrite(&mut lead.pages, self.pages.as_ref());
        overwrite(&mut lead.design_style, self.design_style.as_ref());
        overwrite(&mut lead.timeline, self.timeline.as_ref());
        overwrite(&mut lead.hosting, self.hosting.as_ref());
        overwrite(&mut lead.domain, self.domain.as_ref());
        overwrite(&mut lead.currency, self.currency.as_ref());

        if let Some(features) = &self.features {
            lead.features = features.clone();
        }
        if let Some(price) = self.price {
            lead.price = price;
        }
    }

    /// Required fields for the no-locator finalization path, where there is
    /// no prior partial record to fall back on.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        fn blank(value: Option<&String>) -> bool {
            value.map(|v| v.trim().is_empty()).unwrap_or(true)
        }

        let mut missing = Vec::new();
        if blank(self.name.as_ref()) {
            missing.push("name");
        }
        if blank(self.country.as_ref()) {
            missing.push("country");
        }
        if blank(self.email.as_ref()) {
            missing.push("email");
        }
        if blank(self.number.as_ref()) {
            missing.push("number");
        }
        if blank(self.website_type.as_ref()) {
            missing.push("websiteType");
        }
        if blank(self.design_style.as_ref()) {
            missing.push("designStyle");
        }
        if blank(self.timeline.as_ref()) {
            missing.push("timeline");
        }
        if blank(self.hosting.as_ref()) {
            missing.push("hosting");
        }
        if blank(self.domain.as_ref()) {
            missing.push("domain");
        }
        if blank(self.currency.as_ref()) {
            missing.push("currency");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        missing
    }

    /// Build a fresh record directly from the incoming fields (no-locator
    /// finalization path).
    pub fn into_lead(self) -> Lead {
        let mut lead = Lead::blank(LeadId::generate());
        self.apply(&mut lead);
        lead
    }
}
