//! Quote request endpoints and the finalization workflow.
//!
//! Endpoints:
//! - `POST /lead-intake` — persist a partial lead (name/country required)
//! - `POST /finalize`    — enrich a lead, assign its quote number once,
//!   persist, and dispatch client + sales notifications
//! - `GET  /`            — static acknowledgment payload
//!
//! The workflow holds its collaborators by trait (store, mail transport),
//! so tests drive it with in-memory fakes.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use bimquote_core::domain::lead::{Lead, LeadId, LeadPatch};
use bimquote_core::{quote_number, WorkflowError};
use bimquote_db::repositories::{
    LeadRepository, RepositoryError, SqlLeadRepository, UnavailableLeadRepository,
};
use bimquote_mail::{
    DisabledMailer, MailTransport, OutboundEmail, QuoteMailRenderer, RenderError, SmtpMailer,
};

use crate::bootstrap::Application;
use crate::deadline::{with_deadline, Outcome};

#[derive(Clone)]
pub struct QuoteApiState {
    service: Arc<QuoteService>,
}

impl QuoteApiState {
    pub fn new(service: QuoteService) -> Self {
        Self { service: Arc::new(service) }
    }
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeRequest {
    pub name: String,
    pub company_name: String,
    pub country: String,
    pub email: String,
    pub number: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalizeRequest {
    pub id: Option<String>,
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

impl FinalizeRequest {
    fn into_parts(self) -> (Option<String>, LeadPatch) {
        let locator = self.id.filter(|value| !value.trim().is_empty());
        let patch = LeadPatch {
            name: self.name,
            company_name: self.company_name,
            country: self.country,
            email: self.email,
            number: self.number,
            message: self.message,
            website_type: self.website_type,
            products: self.products,
            insert_products: self.insert_products,
            pages: self.pages,
            design_style: self.design_style,
            features: self.features,
            timeline: self.timeline,
            hosting: self.hosting,
            domain: self.domain,
            currency: self.currency,
            price: self.price,
        };
        (locator, patch)
    }
}

#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeResponse {
    pub success: bool,
    pub quote_number: String,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: QuoteApiState) -> Router {
    // The quotation form is served from a separate origin.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(service_status))
        .route("/lead-intake", post(lead_intake))
        .route("/finalize", post(finalize_quote))
        .layer(cors)
        .with_state(state)
}

pub fn state_from_application(app: &Application) -> Result<QuoteApiState, RenderError> {
    let repository: Arc<dyn LeadRepository> = match &app.db_pool {
        Some(pool) => Arc::new(SqlLeadRepository::new(pool.clone())),
        None => Arc::new(UnavailableLeadRepository::new("database url not configured")),
    };

    let mailer: Arc<dyn MailTransport> = match SmtpMailer::new(&app.config.smtp) {
        Ok(mailer) => Arc::new(mailer),
        Err(error) => {
            warn!(
                event_name = "system.bootstrap.mail_unconfigured",
                error = %error,
                "SMTP transport could not be built; notifications will fail until fixed"
            );
            Arc::new(DisabledMailer)
        }
    };

    let renderer = QuoteMailRenderer::new(app.config.smtp.sales_address())?;

    Ok(QuoteApiState::new(QuoteService::new(
        repository,
        mailer,
        renderer,
        Duration::from_secs(app.config.database.request_timeout_secs),
        Duration::from_secs(app.config.smtp.send_timeout_secs),
    )))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "api working", service: "bimquote-server" })
}

async fn lead_intake(
    State(state): State<QuoteApiState>,
    Json(body): Json<IntakeRequest>,
) -> Result<Json<IntakeResponse>, (StatusCode, Json<ApiError>)> {
    match state.service.intake(body).await {
        Ok(id) => {
            info!(event_name = "quote.intake.saved", lead_id = %id, "intake lead persisted");
            Ok(Json(IntakeResponse { success: true, id: id.0 }))
        }
        Err(error) => Err(error_response(error, "lead intake failed")),
    }
}

async fn finalize_quote(
    State(state): State<QuoteApiState>,
    Json(body): Json<FinalizeRequest>,
) -> Result<Json<FinalizeResponse>, (StatusCode, Json<ApiError>)> {
    let (locator, patch) = body.into_parts();
    match state.service.finalize(locator, patch).await {
        Ok(finalized) => {
            info!(
                event_name = "quote.finalized",
                lead_id = %finalized.id,
                quote_number = %finalized.quote_number,
                "quote finalized"
            );
            Ok(Json(FinalizeResponse {
                success: true,
                quote_number: finalized.quote_number,
                id: finalized.id.0,
            }))
        }
        Err(error) => Err(error_response(error, "quote finalization failed")),
    }
}

fn error_response(error: WorkflowError, context: &'static str) -> (StatusCode, Json<ApiError>) {
    let status = match &error {
        WorkflowError::Validation { .. } | WorkflowError::Constraint(_) => StatusCode::BAD_REQUEST,
        WorkflowError::NotFound => StatusCode::NOT_FOUND,
        WorkflowError::StoreTimeout => StatusCode::SERVICE_UNAVAILABLE,
        WorkflowError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // Full detail stays server-side; the caller gets the short message.
    match &error {
        WorkflowError::Store(_) => {
            tracing::error!(event_name = "quote.request.failed", error = %error, "{context}");
        }
        _ => warn!(event_name = "quote.request.failed", error = %error, "{context}"),
    }

    (status, Json(ApiError { success: false, error: error.user_message() }))
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct FinalizedQuote {
    pub quote_number: String,
    pub id: LeadId,
}

pub struct QuoteService {
    repository: Arc<dyn LeadRepository>,
    mailer: Arc<dyn MailTransport>,
    renderer: QuoteMailRenderer,
    store_deadline: Duration,
    mail_deadline: Duration,
}

impl QuoteService {
    pub fn new(
        repository: Arc<dyn LeadRepository>,
        mailer: Arc<dyn MailTransport>,
        renderer: QuoteMailRenderer,
        store_deadline: Duration,
        mail_deadline: Duration,
    ) -> Self {
        Self { repository, mailer, renderer, store_deadline, mail_deadline }
    }

    /// Persist a partial lead. No quote number is assigned at this stage.
    pub async fn intake(&self, request: IntakeRequest) -> Result<LeadId, WorkflowError> {
        let mut missing = Vec::new();
        if request.name.trim().is_empty() {
            missing.push("name");
        }
        if request.country.trim().is_empty() {
            missing.push("country");
        }
        if !missing.is_empty() {
            return Err(WorkflowError::validation(missing));
        }

        let lead = Lead::intake(
            request.name,
            request.company_name,
            request.country,
            request.email,
            request.number,
        );
        self.store_op(self.repository.insert(&lead)).await?;

        Ok(lead.id)
    }

    /// Look up (or create) the record, merge the incoming fields, assign the
    /// quote number exactly once, persist, then notify. Only persistence
    /// decides the caller-visible result.
    pub async fn finalize(
        &self,
        locator: Option<String>,
        patch: LeadPatch,
    ) -> Result<FinalizedQuote, WorkflowError> {
        let (mut lead, exists) = match locator {
            Some(id) => {
                let found =
                    self.store_op(self.repository.find_by_id(&LeadId(id))).await?;
                let mut lead = found.ok_or(WorkflowError::NotFound)?;
                patch.apply(&mut lead);
                (lead, true)
            }
            None => {
                let missing = patch.missing_required_fields();
                if !missing.is_empty() {
                    return Err(WorkflowError::validation(missing));
                }
                (patch.into_lead(), false)
            }
        };

        let quote_number = match &lead.quote_number {
            Some(number) => number.clone(),
            None => {
                let number = quote_number::generate();
                lead.quote_number = Some(number.clone());
                number
            }
        };

        if exists {
            self.store_op(self.repository.update(&lead)).await?;
        } else {
            self.store_op(self.repository.insert(&lead)).await?;
        }

        self.dispatch_notifications(&lead, &quote_number).await;

        Ok(FinalizedQuote { quote_number, id: lead.id })
    }

    async fn store_op<T>(
        &self,
        operation: impl std::future::Future<Output = Result<T, RepositoryError>>,
    ) -> Result<T, WorkflowError> {
        match with_deadline(self.store_deadline, operation).await {
            Outcome::Completed(value) => Ok(value),
            Outcome::TimedOut => Err(WorkflowError::StoreTimeout),
            Outcome::Failed(error) => {
                if error.is_unavailable() {
                    Err(WorkflowError::StoreTimeout)
                } else if error.is_not_found() {
                    Err(WorkflowError::NotFound)
                } else if error.is_constraint_violation() {
                    Err(WorkflowError::Constraint(error.to_string()))
                } else {
                    Err(WorkflowError::Store(error.to_string()))
                }
            }
        }
    }

    /// Both messages are dispatched concurrently, each under its own
    /// deadline. Failures never surface to the caller.
    async fn dispatch_notifications(&self, lead: &Lead, quote_number: &str) {
        let rendered = match self.renderer.render(lead, quote_number) {
            Ok(rendered) => rendered,
            Err(error) => {
                warn!(
                    event_name = "quote.notify.render_failed",
                    lead_id = %lead.id,
                    error = %error,
                    "notification rendering failed"
                );
                return;
            }
        };

        tokio::join!(
            self.send_bounded(&rendered.client, "client"),
            self.send_bounded(&rendered.admin, "sales"),
        );
    }

    async fn send_bounded(&self, email: &OutboundEmail, audience: &'static str) {
        match with_deadline(self.mail_deadline, self.mailer.send(email)).await {
            Outcome::Completed(()) => {}
            Outcome::TimedOut => warn!(
                event_name = "quote.notify.timed_out",
                audience,
                to = %email.to,
                "notification abandoned after deadline"
            ),
            Outcome::Failed(error) => warn!(
                event_name = "quote.notify.failed",
                audience,
                to = %email.to,
                error = %error,
                "notification dispatch failed"
            ),
        }
    }
}
