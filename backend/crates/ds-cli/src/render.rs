use crate::CliResult;

use ds_sync::BatchReport;

pub enum ReportFormat {
    Text,
    Json,
    PrettyJson,
}

pub fn render(report: &BatchReport, format: ReportFormat) -> CliResult<String> {
    let text = match format {
        ReportFormat::Text => report.to_string(),
        ReportFormat::Json => serde_json::to_string(report)?,
        ReportFormat::PrettyJson => serde_json::to_string_pretty(report)?,
    };

    Ok(text)
}
