use serde::Serialize;

use crate::cocomo::CostMetrics;
use crate::error::Result;
use crate::stats::{DirectoryRow, LanguageRow, SlocReport};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    directories: &'a [DirectoryRow],
    languages: &'a [LanguageRow],
    total_sloc: usize,
    cocomo: Estimate,
}

#[derive(Serialize)]
struct Estimate {
    person_months: f64,
    person_years: f64,
    schedule_months: f64,
    schedule_years: f64,
    developers: f64,
    cost: f64,
}

impl From<&CostMetrics> for Estimate {
    fn from(metrics: &CostMetrics) -> Self {
        Self {
            person_months: metrics.person_months,
            person_years: metrics.person_years(),
            schedule_months: metrics.schedule_months,
            schedule_years: metrics.schedule_years(),
            developers: metrics.developers,
            cost: metrics.cost,
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &SlocReport) -> Result<String> {
        let output = JsonOutput {
            directories: &report.directories,
            languages: &report.languages,
            total_sloc: report.total_sloc,
            cocomo: Estimate::from(&report.cocomo),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
