//! Basic COCOMO effort, schedule and cost estimation.

/// Person-months per KSLOC^`EFFORT_EXPONENT`.
pub const EFFORT_COEFFICIENT: f64 = 2.4;
pub const EFFORT_EXPONENT: f64 = 1.05;
pub const SCHEDULE_COEFFICIENT: f64 = 2.5;
pub const SCHEDULE_EXPONENT: f64 = 0.38;
/// Average developer salary in dollars per year.
pub const ANNUAL_SALARY: f64 = 56_286.0;
/// Overhead multiplier applied on top of salary. Shares its value with
/// `EFFORT_COEFFICIENT` but is an unrelated constant.
pub const OVERHEAD: f64 = 2.4;

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostMetrics {
    pub person_months: f64,
    pub schedule_months: f64,
    pub developers: f64,
    pub cost: f64,
}

impl CostMetrics {
    #[must_use]
    pub fn person_years(&self) -> f64 {
        self.person_months / MONTHS_PER_YEAR
    }

    #[must_use]
    pub fn schedule_years(&self) -> f64 {
        self.schedule_months / MONTHS_PER_YEAR
    }
}

/// Estimate effort for `total_sloc` physical source lines.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate(total_sloc: usize) -> CostMetrics {
    let ksloc = total_sloc as f64 / 1000.0;
    let person_months = EFFORT_COEFFICIENT * ksloc.powf(EFFORT_EXPONENT);
    let schedule_months = SCHEDULE_COEFFICIENT * person_months.powf(SCHEDULE_EXPONENT);
    let developers = if schedule_months > 0.0 {
        person_months / schedule_months
    } else {
        0.0
    };
    let cost = person_months * ANNUAL_SALARY * OVERHEAD;

    CostMetrics {
        person_months,
        schedule_months,
        developers,
        cost,
    }
}

#[cfg(test)]
#[path = "cocomo_tests.rs"]
mod tests;
