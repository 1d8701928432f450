use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Program {
    Private,
    Standard,
}

impl Program {
    pub fn label(self) -> &'static str {
        match self {
            Program::Private => "Private program",
            Program::Standard => "Standard program",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInputs {
    pub home_value: f64,
    pub applicant_age: u32,
    pub existing_balance: f64,
    pub spouse_age: Option<u32>,
    pub state: Option<String>,
}

/// Figures shared by both qualifying outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Proceeds {
    pub effective_age: u32,
    pub plf: f64,
    pub home_value: f64,
    pub existing_balance: f64,
    pub principal_limit: f64,
    pub net_proceeds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome")]
pub enum EstimateResult {
    #[serde(rename = "no-match", rename_all = "camelCase")]
    NoMatch { effective_age: u32, min_age: u32 },
    #[serde(rename = "private")]
    PrivateOffer(Proceeds),
    #[serde(rename = "estimate")]
    StandardOffer(Proceeds),
}

impl EstimateResult {
    pub fn outcome(&self) -> &'static str {
        match self {
            EstimateResult::NoMatch { .. } => "no-match",
            EstimateResult::PrivateOffer(_) => "private",
            EstimateResult::StandardOffer(_) => "estimate",
        }
    }

    pub fn effective_age(&self) -> u32 {
        match self {
            EstimateResult::NoMatch { effective_age, .. } => *effective_age,
            EstimateResult::PrivateOffer(p) | EstimateResult::StandardOffer(p) => p.effective_age,
        }
    }

    pub fn program(&self) -> Option<Program> {
        match self {
            EstimateResult::NoMatch { .. } => None,
            EstimateResult::PrivateOffer(_) => Some(Program::Private),
            EstimateResult::StandardOffer(_) => Some(Program::Standard),
        }
    }

    pub fn proceeds(&self) -> Option<&Proceeds> {
        match self {
            EstimateResult::NoMatch { .. } => None,
            EstimateResult::PrivateOffer(p) | EstimateResult::StandardOffer(p) => Some(p),
        }
    }
}
