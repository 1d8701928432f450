use serde::Serialize;

/// Minimum age for the private program where no override applies.
pub const DEFAULT_MIN_AGE: u32 = 55;

/// Minimum age for the standard program in every state.
pub const STANDARD_MIN_AGE: u32 = 62;

/// States whose minimum qualifying age differs from `DEFAULT_MIN_AGE`.
pub const MIN_AGE_OVERRIDES: &[(&str, u32)] = &[("NC", 60), ("MA", 60), ("TX", 62), ("MN", 62)];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsState {
    pub value: &'static str,
    pub label: &'static str,
}

const fn st(value: &'static str, label: &'static str) -> UsState {
    UsState { value, label }
}

pub static US_STATES: &[UsState] = &[
    st("AL", "Alabama"),
    st("AK", "Alaska"),
    st("AZ", "Arizona"),
    st("AR", "Arkansas"),
    st("CA", "California"),
    st("CO", "Colorado"),
    st("CT", "Connecticut"),
    st("DE", "Delaware"),
    st("FL", "Florida"),
    st("GA", "Georgia"),
    st("HI", "Hawaii"),
    st("ID", "Idaho"),
    st("IL", "Illinois"),
    st("IN", "Indiana"),
    st("IA", "Iowa"),
    st("KS", "Kansas"),
    st("KY", "Kentucky"),
    st("LA", "Louisiana"),
    st("ME", "Maine"),
    st("MD", "Maryland"),
    st("MA", "Massachusetts"),
    st("MI", "Michigan"),
    st("MN", "Minnesota"),
    st("MS", "Mississippi"),
    st("MO", "Missouri"),
    st("MT", "Montana"),
    st("NE", "Nebraska"),
    st("NV", "Nevada"),
    st("NH", "New Hampshire"),
    st("NJ", "New Jersey"),
    st("NM", "New Mexico"),
    st("NY", "New York"),
    st("NC", "North Carolina"),
    st("ND", "North Dakota"),
    st("OH", "Ohio"),
    st("OK", "Oklahoma"),
    st("OR", "Oregon"),
    st("PA", "Pennsylvania"),
    st("RI", "Rhode Island"),
    st("SC", "South Carolina"),
    st("SD", "South Dakota"),
    st("TN", "Tennessee"),
    st("TX", "Texas"),
    st("UT", "Utah"),
    st("VT", "Vermont"),
    st("VA", "Virginia"),
    st("WA", "Washington"),
    st("WV", "West Virginia"),
    st("WI", "Wisconsin"),
    st("WY", "Wyoming"),
];

/// Minimum qualifying age for a state code, case-insensitive. Unknown or
/// missing codes get `default_min_age`.
pub fn min_age_for(overrides: &[(&str, u32)], default_min_age: u32, state: Option<&str>) -> u32 {
    let Some(code) = state.map(str::trim) else {
        return default_min_age;
    };
    overrides
        .iter()
        .find(|(override_code, _)| override_code.eq_ignore_ascii_case(code))
        .map(|(_, age)| *age)
        .unwrap_or(default_min_age)
}

pub fn is_known_state(code: &str) -> bool {
    let code = code.trim();
    US_STATES.iter().any(|s| s.value.eq_ignore_ascii_case(code))
}
