use clap::{Args, Parser, Subcommand};

use crate::core::{
    EstimateResult, EstimateRules, Program, US_STATES, compute_estimate, format_currency,
    format_percentage,
};
use crate::error::CliError;
use crate::validation::{EstimatePayload, estimate_inputs_from_payload};

#[derive(Parser, Debug)]
#[command(
    name = "hecm-leads",
    about = "Reverse mortgage benefit estimator and lead intake server"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the calculator page and JSON API
    Serve {
        #[arg(long, help = "Port to listen on; overrides HECM_PORT")]
        port: Option<u16>,
    },
    /// Print a benefit estimate
    Estimate(EstimateArgs),
    /// List state codes and their minimum qualifying ages
    States,
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    #[arg(long, help = "Estimated market value of the home")]
    pub home_value: f64,
    #[arg(long, help = "Age of the primary borrower")]
    pub applicant_age: u32,
    #[arg(long, default_value_t = 0.0, help = "Current mortgage balance")]
    pub existing_balance: f64,
    #[arg(long, help = "Age of a spouse or partner on title")]
    pub spouse_age: Option<u32>,
    #[arg(long, help = "Two-letter property state code")]
    pub state: Option<String>,
    #[arg(long, default_value_t = false, help = "Print the result as JSON")]
    pub json: bool,
}

impl From<&EstimateArgs> for EstimatePayload {
    fn from(args: &EstimateArgs) -> Self {
        EstimatePayload {
            home_value: Some(args.home_value),
            applicant_age: Some(f64::from(args.applicant_age)),
            existing_balance: Some(args.existing_balance),
            spouse_age: args.spouse_age.map(f64::from),
            state: args.state.clone(),
        }
    }
}

pub fn run_estimate(args: &EstimateArgs) -> Result<String, CliError> {
    let inputs = estimate_inputs_from_payload(&EstimatePayload::from(args))?;
    let result = compute_estimate(&inputs);
    if args.json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(render_estimate_text(&result))
}

pub fn render_estimate_text(result: &EstimateResult) -> String {
    match result {
        EstimateResult::NoMatch {
            effective_age,
            min_age,
        } => format!(
            "No match: effective age {effective_age} is below the minimum qualifying age of {min_age}"
        ),
        EstimateResult::PrivateOffer(p) | EstimateResult::StandardOffer(p) => {
            let program = result.program().map(Program::label).unwrap_or_default();
            [
                format!("{program} (effective age {})", p.effective_age),
                format!("  Home value:        {}", format_currency(p.home_value)),
                format!("  Existing balance:  {}", format_currency(p.existing_balance)),
                format!("  PLF:               {}", format_percentage(p.plf)),
                format!("  Principal limit:   {}", format_currency(p.principal_limit)),
                format!("  Net proceeds:      {}", format_currency(p.net_proceeds)),
            ]
            .join("\n")
        }
    }
}

pub fn print_states() {
    let rules = EstimateRules::DEFAULT;
    println!("{:<6} {:<16} {}", "Code", "State", "Min age");
    for state in US_STATES {
        println!(
            "{:<6} {:<16} {}",
            state.value,
            state.label,
            rules.min_age(Some(state.value))
        );
    }
}
