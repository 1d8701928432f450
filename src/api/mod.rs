use axum::{
    Router,
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::core::{
    EstimateResult, STANDARD_MIN_AGE, US_STATES, UsState, compute_estimate,
};
use crate::error::{InputError, LeadError};
use crate::leads::{
    LeadIntake, LeadPayload, MemoryLeadStore, REASON_OPTIONS, ReasonOption, StoredLead,
    WebhookForwarder,
};
use crate::validation::{EstimatePayload, estimate_inputs_from_payload};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

const LEGAL_FOOTER: &str =
    "100% Secure Data • Terms of Use • Privacy Notice • Equal Housing Lender";
const PRIVACY_DISCLAIMER: &str = "Your information is secure and will never be shared with third parties without your consent.";

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    intake: LeadIntake,
}

impl AppState {
    pub fn new(config: AppConfig, intake: LeadIntake) -> Self {
        Self {
            config: Arc::new(config),
            intake,
        }
    }

    /// In-memory store plus the configured webhook, if any.
    pub fn from_config(config: AppConfig) -> Result<Self, crate::error::WebhookError> {
        let webhook = config.webhook_url().map(WebhookForwarder::new).transpose()?;
        match &webhook {
            Some(w) => info!(url = w.url(), "Forwarding leads to webhook"),
            None => info!("No webhook configured, leads are kept in memory only"),
        }
        let intake = LeadIntake::new(Arc::new(MemoryLeadStore::new()), webhook);
        Ok(Self::new(config, intake))
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LeadAccepted {
    ok: bool,
    id: Uuid,
    estimate: EstimateResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LeadRejected {
    ok: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LegalCopy {
    footer: &'static str,
    privacy_disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteResponse<'a> {
    brand_name: &'a str,
    phone_cta: &'a str,
    phone_display: &'a str,
    nmls_id: &'a str,
    standard_min_age: u32,
    legal: LegalCopy,
    reasons: &'static [ReasonOption],
    states: &'static [UsState],
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/health", get(health_handler))
        .route("/api/site", get(site_handler))
        .route(
            "/api/estimate",
            get(estimate_get_handler).post(estimate_post_handler),
        )
        .route(
            "/api/leads",
            get(list_leads_handler).post(submit_lead_handler),
        )
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http());

    if state.config.cors_allow_any {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers([header::CONTENT_TYPE])
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS]),
        );
    }

    app.with_state(state)
}

pub async fn run_http_server(config: AppConfig) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let port = config.port;
    let state = AppState::from_config(config).map_err(std::io::Error::other)?;
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Lead intake API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn site_handler(State(state): State<AppState>) -> Response {
    let config = &state.config;
    json_response(
        StatusCode::OK,
        SiteResponse {
            brand_name: &config.brand_name,
            phone_cta: &config.phone_cta,
            phone_display: &config.phone_display,
            nmls_id: &config.nmls_id,
            standard_min_age: STANDARD_MIN_AGE,
            legal: LegalCopy {
                footer: LEGAL_FOOTER,
                privacy_disclaimer: PRIVACY_DISCLAIMER,
            },
            reasons: REASON_OPTIONS,
            states: US_STATES,
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn estimate_get_handler(
    payload: Result<Query<EstimatePayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => estimate_handler_impl(payload),
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

async fn estimate_post_handler(payload: Result<Json<EstimatePayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => estimate_handler_impl(payload),
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

fn estimate_handler_impl(payload: EstimatePayload) -> Response {
    let inputs = match estimate_inputs_from_payload(&payload) {
        Ok(inputs) => inputs,
        Err(e) => return input_error_response(&e),
    };
    let result = compute_estimate(&inputs);
    debug!(
        outcome = result.outcome(),
        effective_age = result.effective_age(),
        "Estimate computed"
    );
    json_response(StatusCode::OK, result)
}

async fn submit_lead_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LeadPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return lead_rejected(StatusCode::BAD_REQUEST, rejection.body_text(), None);
        }
    };
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match state.intake.submit(payload, user_agent).await {
        Ok(lead) => json_response(StatusCode::OK, lead_accepted(&lead)),
        Err(LeadError::Rejected) => lead_rejected(
            StatusCode::BAD_REQUEST,
            LeadError::Rejected.to_string(),
            None,
        ),
        Err(LeadError::Invalid(e)) => {
            lead_rejected(StatusCode::BAD_REQUEST, e.to_string(), Some(e.field()))
        }
        Err(e @ LeadError::Storage(_)) => {
            error!(error = %e, "Error processing lead submission");
            lead_rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                None,
            )
        }
    }
}

async fn list_leads_handler(State(state): State<AppState>) -> Response {
    match state.intake.list_all() {
        Ok(leads) => json_response(StatusCode::OK, leads),
        Err(e) => {
            error!(error = %e, "Error fetching leads");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn lead_accepted(lead: &StoredLead) -> LeadAccepted {
    LeadAccepted {
        ok: true,
        id: lead.id,
        estimate: lead.submission.estimate,
    }
}

fn lead_rejected(status: StatusCode, error: String, field: Option<&'static str>) -> Response {
    json_response(
        status,
        LeadRejected {
            ok: false,
            error,
            field,
        },
    )
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            field: None,
        },
    )
}

fn input_error_response(err: &InputError) -> Response {
    json_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse {
            error: err.to_string(),
            field: Some(err.field()),
        },
    )
}
