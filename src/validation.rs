use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{EstimateInputs, is_known_state};
use crate::error::InputError;

pub const MIN_HOME_VALUE: f64 = 50_000.0;
pub const MIN_BORROWER_AGE: u32 = 18;
pub const MAX_BORROWER_AGE: u32 = 120;

static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}$").expect("valid regex"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
});

/// Property details as the calculator form sends them. Every field is
/// optional so that missing values surface as `InvalidInput` rather than a
/// deserializer rejection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimatePayload {
    pub home_value: Option<f64>,
    pub applicant_age: Option<f64>,
    pub existing_balance: Option<f64>,
    pub spouse_age: Option<f64>,
    pub state: Option<String>,
}

/// Contact step of the lead form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactDetails {
    pub reason: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "_botField", skip_serializing_if = "Option::is_none")]
    pub bot_field: Option<String>,
}

impl ContactDetails {
    pub fn is_honeypot_tripped(&self) -> bool {
        self.bot_field
            .as_deref()
            .is_some_and(|v| !v.is_empty())
    }
}

pub fn estimate_inputs_from_payload(payload: &EstimatePayload) -> Result<EstimateInputs, InputError> {
    let Some(home_value) = payload.home_value else {
        return Err(InputError::invalid("homeValue", "is required"));
    };
    if !home_value.is_finite() || home_value < MIN_HOME_VALUE {
        return Err(InputError::invalid(
            "homeValue",
            format!("must be at least {MIN_HOME_VALUE}"),
        ));
    }

    let Some(applicant_age) = payload.applicant_age else {
        return Err(InputError::invalid("applicantAge", "is required"));
    };
    let applicant_age = borrower_age("applicantAge", applicant_age)?;

    let existing_balance = payload.existing_balance.unwrap_or(0.0);
    if !existing_balance.is_finite() || existing_balance < 0.0 {
        return Err(InputError::invalid("existingBalance", "cannot be negative"));
    }

    // The form submits 0 when no spouse is on title.
    let spouse_age = match payload.spouse_age {
        None => None,
        Some(v) if v == 0.0 => None,
        Some(v) => Some(borrower_age("spouseAge", v)?),
    };

    let state = match payload.state.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(code) if is_known_state(code) => Some(code.to_ascii_uppercase()),
        Some(code) => {
            return Err(InputError::invalid(
                "state",
                format!("unknown state code {code:?}"),
            ));
        }
    };

    Ok(EstimateInputs {
        home_value,
        applicant_age,
        existing_balance,
        spouse_age,
        state,
    })
}

fn borrower_age(field: &'static str, value: f64) -> Result<u32, InputError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(InputError::invalid(field, "must be a whole number of years"));
    }
    if value < MIN_BORROWER_AGE as f64 || value > MAX_BORROWER_AGE as f64 {
        return Err(InputError::invalid(
            field,
            format!("must be between {MIN_BORROWER_AGE} and {MAX_BORROWER_AGE}"),
        ));
    }
    Ok(value as u32)
}

/// Keeps only the digits of a phone number as typed, e.g. `(217) 555-0100`.
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Checks the contact step. The honeypot is not checked here.
pub fn validate_contact(contact: &ContactDetails) -> Result<(), InputError> {
    for (field, value) in [
        ("reason", &contact.reason),
        ("firstName", &contact.first_name),
        ("lastName", &contact.last_name),
        ("address", &contact.address),
        ("city", &contact.city),
        ("state", &contact.state),
    ] {
        if value.trim().is_empty() {
            return Err(InputError::invalid(field, "is required"));
        }
    }

    if !is_known_state(&contact.state) {
        return Err(InputError::invalid("state", "unknown state code"));
    }
    if !ZIP_RE.is_match(contact.zip_code.trim()) {
        return Err(InputError::invalid("zipCode", "ZIP code must be 5 digits"));
    }
    if !PHONE_RE.is_match(&phone_digits(&contact.phone)) {
        return Err(InputError::invalid("phone", "Phone must be 10 digits"));
    }
    if !EMAIL_RE.is_match(contact.email.trim()) {
        return Err(InputError::invalid("email", "Invalid email address"));
    }
    Ok(())
}
