//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::{IterationReport, SamplingReport};

/// Format both estimates
pub fn format_report(
    sampling: &SamplingReport,
    iteration: &IterationReport,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => json::format_report(sampling, iteration),
        OutputFormat::Cli => terminal::format_report(sampling, iteration),
    }
}
