use anyhow::Result;

use crate::record::{ExtractedRecord, Layout};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Porcelain,
    Json,
}

/// Clearance label for an ACS clearance number.
pub fn clearance_label(level: &str) -> &'static str {
    match level {
        "1" => "unrestricted",
        "2" => "restricted",
        "3" => "confidential",
        "4" => "secret",
        "5" => "top secret",
        "6" => "cosmic top secret",
        _ => "unknown",
    }
}

pub fn render(record: &ExtractedRecord, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Human => render_human(record),
        OutputFormat::Porcelain => render_porcelain(record),
        OutputFormat::Json => render_json(record)?,
    })
}

/// Multi-line block, one template per layout.
pub fn render_human(record: &ExtractedRecord) -> String {
    let field = |f: &Option<String>| f.as_deref().unwrap_or("unknown").to_string();

    if record.is_degraded() {
        return format!("No anomaly data found ({}).", record.layout);
    }

    match record.layout {
        Layout::AcsStructured => {
            let level = field(&record.clearance_level);
            format!(
                "Information about SCP-{}:\n\
                 \tClearance Level: {}/{}\n\
                 \tContainment Class: {}\n\
                 \tSecondary Class: {}\n\
                 \tDisruption Class: {}\n\
                 \tRisk Class: {}",
                field(&record.entry_id),
                level,
                clearance_label(&level),
                field(&record.primary_class),
                field(&record.secondary_class),
                field(&record.disruption_class),
                field(&record.risk_class),
            )
        }
        _ => format!(
            "Information about SCP-{}:\n\tObject Class: {}",
            field(&record.entry_id),
            field(&record.primary_class),
        ),
    }
}

/// Single line in a fixed field order; unset fields print as `-`.
pub fn render_porcelain(record: &ExtractedRecord) -> String {
    let field = |f: &Option<String>| f.as_deref().unwrap_or("-").to_string();
    format!(
        "<SCPInfo {} {} {} {} {} {} {}>",
        field(&record.entry_id),
        field(&record.clearance_level),
        field(&record.primary_class),
        record.layout,
        field(&record.secondary_class),
        field(&record.disruption_class),
        field(&record.risk_class),
    )
}

pub fn render_json(record: &ExtractedRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}
