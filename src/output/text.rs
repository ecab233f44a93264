use std::io::Write;

use crate::cocomo::{ANNUAL_SALARY, OVERHEAD};
use crate::error::Result;
use crate::stats::{DirectoryRow, LanguageCount, SlocReport};

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

const NO_LANGUAGES: &str = "(none)";

/// Classic sloccount report layout.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_directories(&self, directories: &[DirectoryRow], output: &mut Vec<u8>) {
        writeln!(output, "Computing results.").ok();
        writeln!(output).ok();
        writeln!(
            output,
            "{}",
            self.paint("SLOC\tDirectory\tSLOC-by-Language (Sorted)", ansi::BOLD)
        )
        .ok();

        for row in directories {
            let languages = if row.languages.is_empty() {
                self.paint(NO_LANGUAGES, ansi::YELLOW)
            } else {
                join_counts(&row.languages)
            };
            let leading = format!("{:<8}{:<16}", row.total, row.directory);
            writeln!(output, "{leading}{languages}").ok();
        }
    }

    fn write_languages(&self, report: &SlocReport, output: &mut Vec<u8>) {
        writeln!(output).ok();
        writeln!(output).ok();
        writeln!(
            output,
            "{}",
            self.paint("Totals grouped by language (dominant language first):", ansi::BOLD)
        )
        .ok();

        for row in &report.languages {
            let name = self.paint(&format!("{:<13}", row.language), ansi::CYAN);
            writeln!(output, "{name}{:>7} ({:.2}%)", row.lines, row.percent).ok();
        }
    }

    fn write_estimate(&self, report: &SlocReport, output: &mut Vec<u8>) {
        let metrics = &report.cocomo;
        let total = self.paint(&group_thousands(report.total_sloc as u64), ansi::GREEN);

        writeln!(output).ok();
        writeln!(output).ok();
        writeln!(
            output,
            "Total Physical Source Lines of Code (SLOC)                = {total}"
        )
        .ok();
        writeln!(
            output,
            "Development Effort Estimate, Person-Years (Person-Months) = {:.2} ({:.2})",
            metrics.person_years(),
            metrics.person_months
        )
        .ok();
        writeln!(
            output,
            " (Basic COCOMO model, Person-Months = 2.4 * (KSLOC**1.05))"
        )
        .ok();
        writeln!(
            output,
            "Schedule Estimate, Years (Months)                         = {:.2} ({:.2})",
            metrics.schedule_years(),
            metrics.schedule_months
        )
        .ok();
        writeln!(
            output,
            " (Basic COCOMO model, Months = 2.5 * (person-months**0.38))"
        )
        .ok();
        writeln!(
            output,
            "Estimated Average Number of Developers (Effort/Schedule)  = {:.2}",
            metrics.developers
        )
        .ok();
        writeln!(
            output,
            "Total Estimated Cost to Develop                           = $ {}",
            group_thousands(whole_dollars(metrics.cost))
        )
        .ok();
        writeln!(
            output,
            " (average salary = ${}/year, overhead = {OVERHEAD:.2}).",
            group_thousands(whole_dollars(ANNUAL_SALARY))
        )
        .ok();
    }

    fn write_footer(output: &mut Vec<u8>) {
        writeln!(output).ok();
        writeln!(output, "SLOCCount, Copyright (C) 2001-2004 David A. Wheeler").ok();
        writeln!(
            output,
            "SLOCCount is Open Source Software/Free Software, licensed under the GNU GPL."
        )
        .ok();
        writeln!(
            output,
            "Please credit this data as \"generated using David A. Wheeler's 'SLOCCount'.\""
        )
        .ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &SlocReport) -> Result<String> {
        let mut output = Vec::new();

        self.write_directories(&report.directories, &mut output);
        self.write_languages(report, &mut output);
        self.write_estimate(report, &mut output);
        Self::write_footer(&mut output);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

fn join_counts(languages: &[LanguageCount]) -> String {
    languages
        .iter()
        .map(|entry| format!("{}={}", entry.language, entry.lines))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truncates toward zero; negative and NaN inputs become 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn whole_dollars(amount: f64) -> u64 {
    amount as u64
}

/// Render `value` with `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
