mod store;
mod webhook;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::{EstimateInputs, EstimateResult, compute_estimate};
use crate::error::LeadError;
use crate::validation::{
    ContactDetails, EstimatePayload, estimate_inputs_from_payload, phone_digits,
    validate_contact,
};

pub use store::{LeadStore, MemoryLeadStore};
pub use webhook::WebhookForwarder;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReasonOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub static REASON_OPTIONS: &[ReasonOption] = &[
    ReasonOption {
        value: "eliminate-mortgage",
        label: "Eliminate Mortgage Payment",
    },
    ReasonOption {
        value: "supplement-income",
        label: "Supplement Retirement Income",
    },
    ReasonOption {
        value: "pay-healthcare",
        label: "Pay for Healthcare Expenses",
    },
    ReasonOption {
        value: "home-improvements",
        label: "Fund Home Improvements",
    },
    ReasonOption {
        value: "debt-consolidation",
        label: "Consolidate Debt",
    },
    ReasonOption {
        value: "other",
        label: "Other",
    },
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaPayload {
    pub timestamp: Option<DateTime<Utc>>,
    pub user_agent: Option<String>,
}

/// Lead as posted by the calculator page. A client-side `estimate` block is
/// accepted but never stored; the estimate is recomputed from `step1`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadPayload {
    pub step1: EstimatePayload,
    pub step2: ContactDetails,
    pub estimate: Option<serde_json::Value>,
    pub meta: MetaPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMeta {
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSubmission {
    pub step1: EstimateInputs,
    pub step2: ContactDetails,
    pub estimate: EstimateResult,
    pub meta: LeadMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredLead {
    pub id: Uuid,
    #[serde(flatten)]
    pub submission: LeadSubmission,
}

/// Validates, prices, stores and forwards incoming leads.
#[derive(Clone)]
pub struct LeadIntake {
    store: Arc<dyn LeadStore>,
    webhook: Option<WebhookForwarder>,
}

impl LeadIntake {
    pub fn new(store: Arc<dyn LeadStore>, webhook: Option<WebhookForwarder>) -> Self {
        Self { store, webhook }
    }

    pub fn build_submission(
        payload: LeadPayload,
        user_agent: Option<String>,
    ) -> Result<LeadSubmission, LeadError> {
        if payload.step2.is_honeypot_tripped() {
            warn!("Bot detected via honeypot field");
            return Err(LeadError::Rejected);
        }

        let mut step1 = payload.step1;
        // The property state falls back to the mailing address state.
        if step1.state.as_deref().is_none_or(|s| s.trim().is_empty()) {
            step1.state = Some(payload.step2.state.clone());
        }
        let inputs = estimate_inputs_from_payload(&step1)?;
        validate_contact(&payload.step2)?;

        let estimate = compute_estimate(&inputs);
        let meta = LeadMeta {
            timestamp: payload.meta.timestamp.unwrap_or_else(Utc::now),
            user_agent: payload
                .meta
                .user_agent
                .or(user_agent)
                .unwrap_or_default(),
        };

        let mut step2 = payload.step2;
        step2.phone = phone_digits(&step2.phone);

        Ok(LeadSubmission {
            step1: inputs,
            step2,
            estimate,
            meta,
        })
    }

    pub async fn submit(
        &self,
        payload: LeadPayload,
        user_agent: Option<String>,
    ) -> Result<StoredLead, LeadError> {
        let submission = Self::build_submission(payload, user_agent)?;
        let lead = self.store.save(submission)?;

        info!(
            id = %lead.id,
            email = %lead.submission.step2.email,
            outcome = lead.submission.estimate.outcome(),
            "Lead submission received and stored"
        );

        match &self.webhook {
            Some(webhook) => match webhook.forward(&lead).await {
                Ok(()) => info!(id = %lead.id, "Successfully forwarded to webhook"),
                Err(e) => warn!(id = %lead.id, error = %e, "Webhook forwarding failed"),
            },
            None => debug!("No webhook configured, lead kept in memory only"),
        }

        Ok(lead)
    }

    pub fn list_all(&self) -> Result<Vec<StoredLead>, LeadError> {
        self.store.list_all()
    }
}
