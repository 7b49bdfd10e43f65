//! Notification rendering: a finalized lead becomes two structured email
//! payloads (client-facing and sales-facing). Pure data transformation — no
//! I/O happens here.

use serde_json::json;
use tera::{Context, Tera};
use thiserror::Error;

use bimquote_core::display;
use bimquote_core::Lead;

const CLIENT_TEMPLATE: &str = "client_quote.html";
const ADMIN_TEMPLATE: &str = "admin_quote.html";

/// A rendered message ready for the transport. The `from` mailbox is owned
/// by the transport; the renderer only picks the display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub from_name: String,
    pub subject: String,
    pub html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedNotifications {
    pub client: OutboundEmail,
    pub admin: OutboundEmail,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

pub struct QuoteMailRenderer {
    templates: Tera,
    sales_address: String,
}

impl QuoteMailRenderer {
    pub fn new(sales_address: impl Into<String>) -> Result<Self, RenderError> {
        let mut templates = Tera::default();
        templates
            .add_raw_template(CLIENT_TEMPLATE, include_str!("../../../templates/email/client_quote.html"))?;
        templates
            .add_raw_template(ADMIN_TEMPLATE, include_str!("../../../templates/email/admin_quote.html"))?;
        Ok(Self { templates, sales_address: sales_address.into() })
    }

    pub fn render(
        &self,
        lead: &Lead,
        quote_number: &str,
    ) -> Result<RenderedNotifications, RenderError> {
        let mut context = Context::new();
        context.insert(
            "quote",
            &json!({
                "quote_number": quote_number,
                "name": lead.name,
                "company_name": lead.company_name,
                "country": lead.country,
                "email": lead.email,
                "number": lead.number,
                "message": lead.message,
                "website_type": lead.website_type,
                "show_pages": display::shows_pages(&lead.website_type, &lead.pages),
                "pages": lead.pages,
                "show_products": display::shows_products(&lead.products),
                "products": lead.products,
                "insert_products": lead.insert_products,
                "design_style": lead.design_style,
                "features_text": display::features_text(&lead.features),
                "timeline": lead.timeline,
                "hosting_text": display::provision_text(&lead.hosting),
                "domain_text": display::provision_text(&lead.domain),
                "price_text": display::price_text(&lead.currency, lead.price),
            }),
        );

        let client = OutboundEmail {
            to: lead.email.clone(),
            from_name: "BIM AFRICA".to_string(),
            subject: format!("Your Website Quotation - {quote_number}"),
            html: self.templates.render(CLIENT_TEMPLATE, &context)?,
        };

        let admin = OutboundEmail {
            to: self.sales_address.clone(),
            from_name: "BIM Africa Website".to_string(),
            subject: format!("New Quote Request - {quote_number}"),
            html: self.templates.render(ADMIN_TEMPLATE, &context)?,
        };

        Ok(RenderedNotifications { client, admin })
    }
}

#[cfg(test)]
mod tests {
    use bimquote_core::Lead;

    use super::QuoteMailRenderer;

    fn finalized_lead() -> Lead {
        let mut lead = Lead::intake(
            "Amy".to_string(),
            "Acme Ltd".to_string(),
            "Mauritius".to_string(),
            "amy@example.com".to_string(),
            "+230 5555 1234".to_string(),
        );
        lead.website_type = "business".to_string();
        lead.pages = "5-10".to_string();
        lead.design_style = "modern".to_string();
        lead.features = vec!["seo-friendly".to_string(), "blog".to_string()];
        lead.timeline = "2-weeks".to_string();
        lead.hosting = "client".to_string();
        lead.domain = "bim".to_string();
        lead.currency = "MUR".to_string();
        lead.price = 50_000.0;
        lead
    }

    fn renderer() -> QuoteMailRenderer {
        QuoteMailRenderer::new("sales@bim.africa").expect("templates should parse")
    }

    #[test]
    fn addresses_and_subjects_embed_the_quote_number() {
        let rendered =
            renderer().render(&finalized_lead(), "BIM-20260806-9FA3C1-4821").expect("render");

        assert_eq!(rendered.client.to, "amy@example.com");
        assert_eq!(rendered.client.subject, "Your Website Quotation - BIM-20260806-9FA3C1-4821");
        assert_eq!(rendered.admin.to, "sales@bim.africa");
        assert_eq!(rendered.admin.subject, "New Quote Request - BIM-20260806-9FA3C1-4821");
    }

    #[test]
    fn bodies_carry_the_derived_display_text() {
        let rendered =
            renderer().render(&finalized_lead(), "BIM-20260806-9FA3C1-4821").expect("render");

        assert!(rendered.client.html.contains("Seo friendly, Blog"));
        assert!(rendered.client.html.contains("Client to Provide"));
        assert!(rendered.client.html.contains("Bim Africa to Provide"));
        assert!(rendered.client.html.contains("MUR 50,000"));
        assert!(rendered.admin.html.contains("Amy"));
        assert!(rendered.admin.html.contains("+230 5555 1234"));
    }

    #[test]
    fn pages_line_present_for_per_page_site_types() {
        let rendered = renderer().render(&finalized_lead(), "BIM-X").expect("render");

        assert!(rendered.client.html.contains("Pages:"));
        assert!(rendered.client.html.contains("5-10"));
        assert!(!rendered.client.html.contains("Products:"));
    }

    #[test]
    fn ecommerce_shows_products_and_hides_pages() {
        let mut lead = finalized_lead();
        lead.website_type = "ecommerce".to_string();
        lead.products = "up to 50".to_string();
        lead.insert_products = "client".to_string();

        let rendered = renderer().render(&lead, "BIM-X").expect("render");

        assert!(rendered.client.html.contains("Products:"));
        assert!(rendered.client.html.contains("up to 50"));
        assert!(!rendered.client.html.contains("Pages:"));
    }

    #[test]
    fn landing_hides_pages_and_products_without_product_text() {
        let mut lead = finalized_lead();
        lead.website_type = "landing".to_string();
        lead.products = String::new();

        let rendered = renderer().render(&lead, "BIM-X").expect("render");

        assert!(!rendered.client.html.contains("Pages:"));
        assert!(!rendered.client.html.contains("Products:"));
    }

    #[test]
    fn empty_feature_set_renders_the_word_none() {
        let mut lead = finalized_lead();
        lead.features.clear();

        let rendered = renderer().render(&lead, "BIM-X").expect("render");

        assert!(rendered.client.html.contains("None"));
    }

    #[test]
    fn fractional_price_rounds_before_grouping() {
        let mut lead = finalized_lead();
        lead.price = 1234.6;

        let rendered = renderer().render(&lead, "BIM-X").expect("render");

        assert!(rendered.client.html.contains("MUR 1,235"));
    }
}
