/// Factor used when an age has no entry in a table.
pub const MAX_PLF: f64 = 0.60;

/// Oldest age with its own factor; older borrowers are priced as this age.
pub const MAX_TABLE_AGE: u32 = 100;

/// Principal limit factors by attained age, starting at `first_age`.
#[derive(Debug, Clone, Copy)]
pub struct PlfTable {
    first_age: u32,
    factors: &'static [f64],
    max_factor: f64,
}

impl PlfTable {
    pub const fn new(first_age: u32, factors: &'static [f64], max_factor: f64) -> Self {
        Self {
            first_age,
            factors,
            max_factor,
        }
    }

    pub fn first_age(&self) -> u32 {
        self.first_age
    }

    pub fn last_age(&self) -> u32 {
        self.first_age + self.factors.len().saturating_sub(1) as u32
    }

    pub fn max_factor(&self) -> f64 {
        self.max_factor
    }

    /// Factor for `age`, clamped to `MAX_TABLE_AGE`. Ages without an entry
    /// get the table's max factor.
    pub fn factor(&self, age: u32) -> f64 {
        let age = age.min(MAX_TABLE_AGE);
        age.checked_sub(self.first_age)
            .and_then(|idx| self.factors.get(idx as usize))
            .copied()
            .unwrap_or(self.max_factor)
    }
}

/// Proprietary program, ages 55 to 100.
pub const PRIVATE_PLF: PlfTable = PlfTable::new(55, &PRIVATE_FACTORS, MAX_PLF);

/// Government-insured program, ages 62 to 100.
pub const STANDARD_PLF: PlfTable = PlfTable::new(62, &STANDARD_FACTORS, MAX_PLF);

const PRIVATE_FACTORS: [f64; 46] = [
    0.200, // 55
    0.210, // 56
    0.220, // 57
    0.230, // 58
    0.240, // 59
    0.250, // 60
    0.260, // 61
    0.270, // 62
    0.280, // 63
    0.290, // 64
    0.300, // 65
    0.310, // 66
    0.320, // 67
    0.330, // 68
    0.340, // 69
    0.350, // 70
    0.360, // 71
    0.370, // 72
    0.380, // 73
    0.390, // 74
    0.400, // 75
    0.410, // 76
    0.420, // 77
    0.430, // 78
    0.440, // 79
    0.450, // 80
    0.460, // 81
    0.470, // 82
    0.480, // 83
    0.490, // 84
    0.500, // 85
    0.510, // 86
    0.520, // 87
    0.530, // 88
    0.540, // 89
    0.550, // 90
    0.560, // 91
    0.570, // 92
    0.580, // 93
    0.590, // 94
    0.600, // 95
    0.600, // 96
    0.600, // 97
    0.600, // 98
    0.600, // 99
    0.600, // 100
];

const STANDARD_FACTORS: [f64; 39] = [
    0.260, // 62
    0.272, // 63
    0.284, // 64
    0.296, // 65
    0.308, // 66
    0.320, // 67
    0.332, // 68
    0.344, // 69
    0.356, // 70
    0.368, // 71
    0.380, // 72
    0.392, // 73
    0.404, // 74
    0.416, // 75
    0.428, // 76
    0.440, // 77
    0.452, // 78
    0.464, // 79
    0.476, // 80
    0.488, // 81
    0.500, // 82
    0.512, // 83
    0.524, // 84
    0.536, // 85
    0.548, // 86
    0.560, // 87
    0.572, // 88
    0.584, // 89
    0.596, // 90
    0.600, // 91
    0.600, // 92
    0.600, // 93
    0.600, // 94
    0.600, // 95
    0.600, // 96
    0.600, // 97
    0.600, // 98
    0.600, // 99
    0.600, // 100
];

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn tables_cover_their_age_bands_through_max_age() {
        assert_eq!(PRIVATE_PLF.first_age(), 55);
        assert_eq!(PRIVATE_PLF.last_age(), MAX_TABLE_AGE);
        assert_eq!(STANDARD_PLF.first_age(), 62);
        assert_eq!(STANDARD_PLF.last_age(), MAX_TABLE_AGE);
    }

    #[test]
    fn factors_are_in_unit_interval_and_non_decreasing() {
        for table in [&PRIVATE_PLF, &STANDARD_PLF] {
            let mut prev = 0.0;
            for age in table.first_age()..=table.last_age() {
                let plf = table.factor(age);
                assert!(plf > 0.0 && plf <= 1.0, "age {age}: {plf}");
                assert!(plf <= table.max_factor());
                assert!(plf >= prev, "age {age} decreased");
                prev = plf;
            }
        }
    }

    #[test]
    fn private_schedule_matches_published_points() {
        assert_approx(PRIVATE_PLF.factor(55), 0.20);
        assert_approx(PRIVATE_PLF.factor(58), 0.23);
        assert_approx(PRIVATE_PLF.factor(61), 0.26);
        assert_approx(PRIVATE_PLF.factor(95), 0.60);
    }

    #[test]
    fn standard_schedule_matches_published_points() {
        assert_approx(STANDARD_PLF.factor(62), 0.26);
        assert_approx(STANDARD_PLF.factor(68), 0.332);
        assert_approx(STANDARD_PLF.factor(90), 0.596);
        assert_approx(STANDARD_PLF.factor(91), 0.60);
    }

    #[test]
    fn ages_past_table_end_are_priced_as_max_age() {
        assert_approx(STANDARD_PLF.factor(150), STANDARD_PLF.factor(100));
        assert_approx(PRIVATE_PLF.factor(u32::MAX), PRIVATE_PLF.factor(100));
    }

    #[test]
    fn ages_before_table_start_fall_back_to_max_factor() {
        assert_approx(STANDARD_PLF.factor(40), MAX_PLF);
        assert_approx(PRIVATE_PLF.factor(0), MAX_PLF);
    }
}
