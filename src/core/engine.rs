use super::jurisdiction::{DEFAULT_MIN_AGE, MIN_AGE_OVERRIDES, STANDARD_MIN_AGE, min_age_for};
use super::plf::{PRIVATE_PLF, PlfTable, STANDARD_PLF};
use super::types::{EstimateInputs, EstimateResult, Proceeds};

/// Lookup data behind an estimate. `EstimateRules::DEFAULT` is the schedule
/// in use; other instances only exist in tests or for what-if tooling.
#[derive(Debug, Clone, Copy)]
pub struct EstimateRules {
    pub private_table: &'static PlfTable,
    pub standard_table: &'static PlfTable,
    pub min_age_overrides: &'static [(&'static str, u32)],
    pub default_min_age: u32,
    pub standard_min_age: u32,
}

impl EstimateRules {
    pub const DEFAULT: EstimateRules = EstimateRules {
        private_table: &PRIVATE_PLF,
        standard_table: &STANDARD_PLF,
        min_age_overrides: MIN_AGE_OVERRIDES,
        default_min_age: DEFAULT_MIN_AGE,
        standard_min_age: STANDARD_MIN_AGE,
    };

    pub fn min_age(&self, state: Option<&str>) -> u32 {
        min_age_for(self.min_age_overrides, self.default_min_age, state)
    }

    /// The younger borrower sets the rate, but only when they meet the
    /// minimum age themselves. A non-qualifying spouse never disqualifies
    /// the household.
    pub fn effective_age(&self, applicant_age: u32, spouse_age: Option<u32>, min_age: u32) -> u32 {
        match spouse_age {
            Some(spouse) if spouse >= min_age && spouse < applicant_age => spouse,
            _ => applicant_age,
        }
    }

    pub fn compute(&self, inputs: &EstimateInputs) -> EstimateResult {
        let min_age = self.min_age(inputs.state.as_deref());
        let effective_age = self.effective_age(inputs.applicant_age, inputs.spouse_age, min_age);

        if effective_age < min_age {
            return EstimateResult::NoMatch {
                effective_age,
                min_age,
            };
        }

        if effective_age < self.standard_min_age {
            EstimateResult::PrivateOffer(proceeds(self.private_table, effective_age, inputs))
        } else {
            EstimateResult::StandardOffer(proceeds(self.standard_table, effective_age, inputs))
        }
    }
}

impl Default for EstimateRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Estimate with the default rules. Inputs are not range-checked here.
pub fn compute_estimate(inputs: &EstimateInputs) -> EstimateResult {
    EstimateRules::DEFAULT.compute(inputs)
}

fn proceeds(table: &PlfTable, effective_age: u32, inputs: &EstimateInputs) -> Proceeds {
    let plf = table.factor(effective_age);
    let principal_limit = inputs.home_value * plf;
    let net_proceeds = (principal_limit - inputs.existing_balance).max(0.0);
    Proceeds {
        effective_age,
        plf,
        home_value: inputs.home_value,
        existing_balance: inputs.existing_balance,
        principal_limit,
        net_proceeds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plf::MAX_PLF;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn inputs(home_value: f64, applicant_age: u32, existing_balance: f64) -> EstimateInputs {
        EstimateInputs {
            home_value,
            applicant_age,
            existing_balance,
            spouse_age: None,
            state: None,
        }
    }

    #[test]
    fn standard_offer_for_sixty_eight_year_old() {
        let result = compute_estimate(&inputs(550_000.0, 68, 180_000.0));
        let EstimateResult::StandardOffer(p) = result else {
            panic!("expected standard offer, got {result:?}");
        };
        assert_eq!(p.effective_age, 68);
        assert_approx(p.plf, STANDARD_PLF.factor(68));
        assert_eq!(p.principal_limit, 550_000.0 * p.plf);
        assert_approx(p.net_proceeds, p.principal_limit - 180_000.0);
        assert_approx(p.net_proceeds, 2_600.0);
    }

    #[test]
    fn private_offer_for_fifty_eight_year_old() {
        let result = compute_estimate(&inputs(450_000.0, 58, 125_000.0));
        let EstimateResult::PrivateOffer(p) = result else {
            panic!("expected private offer, got {result:?}");
        };
        assert_eq!(p.effective_age, 58);
        assert_approx(p.plf, 0.23);
        assert_approx(p.principal_limit, 103_500.0);
        assert_eq!(p.net_proceeds, 0.0);
    }

    #[test]
    fn no_match_below_default_minimum() {
        let result = compute_estimate(&inputs(400_000.0, 50, 0.0));
        assert_eq!(
            result,
            EstimateResult::NoMatch {
                effective_age: 50,
                min_age: 55
            }
        );
        assert!(result.proceeds().is_none());
    }

    #[test]
    fn younger_qualifying_spouse_sets_effective_age() {
        let mut i = inputs(500_000.0, 70, 0.0);
        i.spouse_age = Some(65);
        let result = compute_estimate(&i);
        assert_eq!(result.effective_age(), 65);
        assert_approx(result.proceeds().unwrap().plf, STANDARD_PLF.factor(65));
    }

    #[test]
    fn non_qualifying_spouse_is_ignored() {
        let mut i = inputs(500_000.0, 70, 0.0);
        i.spouse_age = Some(50);
        let result = compute_estimate(&i);
        assert!(matches!(result, EstimateResult::StandardOffer(_)));
        assert_eq!(result.effective_age(), 70);
    }

    #[test]
    fn older_spouse_does_not_replace_applicant() {
        let mut i = inputs(500_000.0, 64, 0.0);
        i.spouse_age = Some(80);
        assert_eq!(compute_estimate(&i).effective_age(), 64);
    }

    #[test]
    fn qualifying_spouse_can_move_household_into_private_band() {
        let mut i = inputs(500_000.0, 70, 0.0);
        i.spouse_age = Some(57);
        let result = compute_estimate(&i);
        assert!(matches!(result, EstimateResult::PrivateOffer(_)));
        assert_eq!(result.effective_age(), 57);
    }

    #[test]
    fn state_override_raises_minimum_age() {
        let mut i = inputs(500_000.0, 58, 0.0);
        i.state = Some("NC".to_string());
        assert_eq!(
            compute_estimate(&i),
            EstimateResult::NoMatch {
                effective_age: 58,
                min_age: 60
            }
        );

        i.applicant_age = 60;
        assert!(matches!(compute_estimate(&i), EstimateResult::PrivateOffer(_)));

        i.state = Some("TX".to_string());
        i.applicant_age = 61;
        assert!(matches!(compute_estimate(&i), EstimateResult::NoMatch { min_age: 62, .. }));
        i.applicant_age = 62;
        assert!(matches!(compute_estimate(&i), EstimateResult::StandardOffer(_)));
    }

    #[test]
    fn spouse_below_state_minimum_is_ignored() {
        let mut i = inputs(500_000.0, 66, 0.0);
        i.state = Some("TX".to_string());
        i.spouse_age = Some(58);
        assert_eq!(compute_estimate(&i).effective_age(), 66);
    }

    #[test]
    fn age_past_table_end_matches_age_one_hundred() {
        let at_150 = compute_estimate(&inputs(300_000.0, 150, 0.0));
        let at_100 = compute_estimate(&inputs(300_000.0, 100, 0.0));
        assert_eq!(at_150.effective_age(), 150);
        assert_eq!(at_150.proceeds().unwrap().plf, at_100.proceeds().unwrap().plf);
    }

    #[test]
    fn custom_rules_are_honored() {
        static FLAT: [f64; 2] = [0.5, 0.5];
        static FLAT_TABLE: PlfTable = PlfTable::new(99, &FLAT, MAX_PLF);
        let rules = EstimateRules {
            standard_table: &FLAT_TABLE,
            ..EstimateRules::DEFAULT
        };
        let result = rules.compute(&inputs(100_000.0, 70, 0.0));
        assert_approx(result.proceeds().unwrap().plf, MAX_PLF);
        let result = rules.compute(&inputs(100_000.0, 99, 0.0));
        assert_approx(result.proceeds().unwrap().principal_limit, 50_000.0);
    }

    #[test]
    fn result_serializes_with_outcome_tag() {
        let json = serde_json::to_value(compute_estimate(&inputs(550_000.0, 68, 180_000.0)))
            .expect("serialize");
        assert_eq!(json["outcome"], "estimate");
        assert_eq!(json["effectiveAge"], 68);
        assert!(json["netProceeds"].is_number());

        let json = serde_json::to_value(compute_estimate(&inputs(1.0, 40, 0.0))).expect("serialize");
        assert_eq!(json["outcome"], "no-match");
        assert_eq!(json["minAge"], 55);
        assert!(json.get("plf").is_none());
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(256))]

        #[test]
        fn prop_outcome_band_follows_effective_age(
            applicant_age in 0u32..130,
            spouse_age in proptest::option::of(0u32..130),
            state_idx in 0usize..6,
            home_value in 0u32..5_000_000,
        ) {
            let state = ["NC", "MA", "TX", "MN", "CA", ""][state_idx];
            let i = EstimateInputs {
                home_value: home_value as f64,
                applicant_age,
                existing_balance: 0.0,
                spouse_age,
                state: (!state.is_empty()).then(|| state.to_string()),
            };
            let rules = EstimateRules::DEFAULT;
            let min_age = rules.min_age(i.state.as_deref());
            let result = rules.compute(&i);
            let effective = result.effective_age();
            prop_assert!(effective == applicant_age || Some(effective) == spouse_age);
            prop_assert!(effective <= applicant_age);

            match result {
                EstimateResult::NoMatch { min_age: m, .. } => {
                    prop_assert_eq!(m, min_age);
                    prop_assert!(effective < min_age);
                }
                EstimateResult::PrivateOffer(_) => {
                    prop_assert!(effective >= min_age && effective < STANDARD_MIN_AGE);
                }
                EstimateResult::StandardOffer(_) => prop_assert!(effective >= STANDARD_MIN_AGE),
            }
        }

        #[test]
        fn prop_net_proceeds_never_negative(
            applicant_age in 55u32..120,
            home_value in 0u32..5_000_000,
            existing_balance in 0u32..10_000_000,
        ) {
            let result = compute_estimate(&inputs(
                home_value as f64,
                applicant_age,
                existing_balance as f64,
            ));
            let p = result.proceeds().copied().expect("qualifying age");
            prop_assert!(p.net_proceeds >= 0.0);
            prop_assert_eq!(p.principal_limit, home_value as f64 * p.plf);
            prop_assert_eq!(
                p.net_proceeds,
                (p.principal_limit - existing_balance as f64).max(0.0)
            );
        }
    }
}
