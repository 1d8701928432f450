mod engine;
mod format;
mod jurisdiction;
mod plf;
mod types;

pub use engine::{EstimateRules, compute_estimate};
pub use format::{format_currency, format_percentage};
pub use jurisdiction::{
    DEFAULT_MIN_AGE, MIN_AGE_OVERRIDES, STANDARD_MIN_AGE, US_STATES, UsState, is_known_state,
};
pub use plf::{MAX_PLF, MAX_TABLE_AGE, PRIVATE_PLF, PlfTable, STANDARD_PLF};
pub use types::{EstimateInputs, EstimateResult, Proceeds, Program};
