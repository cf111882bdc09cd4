use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::vocab::{
    capture, first_word, ACS_CLEARANCE_RE, ACS_ID_RE, ACS_PRIMARY_RE, DISRUPTION_RE, RISK_RE,
    SECONDARY_RE,
};
use crate::error::ExtractionError;
use crate::record::{ExtractedRecord, Layout};

static BANNER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".anom-bar-container").unwrap());

pub fn banners(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&BANNER_SELECTOR).collect()
}

/// The banner's class list, space-joined and lower-cased.
pub fn class_tokens(banner: ElementRef<'_>) -> String {
    banner
        .value()
        .attr("class")
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn number(re: &Regex, tokens: &str, name: &'static str) -> Result<String, ExtractionError> {
    capture(re, tokens).ok_or(ExtractionError::MalformedAcsBanner(name))
}

fn word(re: &Regex, tokens: &str, name: &'static str) -> Result<String, ExtractionError> {
    first_word(re, tokens).ok_or(ExtractionError::MalformedAcsBanner(name))
}

/// Decode all seven fields from the single ACS banner's class tokens.
pub fn extract(document: &Html) -> Result<ExtractedRecord, ExtractionError> {
    let found = banners(document);
    let banner = match found.as_slice() {
        [banner] => *banner,
        [] => return Err(ExtractionError::UnknownLayout),
        _ => return Err(ExtractionError::MultipleBanners(found.len())),
    };
    let tokens = class_tokens(banner);

    // Every pattern sees the same token string.
    Ok(ExtractedRecord {
        layout: Layout::AcsStructured,
        entry_id: Some(number(&ACS_ID_RE, &tokens, "item")?),
        clearance_level: Some(number(&ACS_CLEARANCE_RE, &tokens, "clearance")?),
        primary_class: Some(word(&ACS_PRIMARY_RE, &tokens, "containment class")?),
        secondary_class: Some(word(&SECONDARY_RE, &tokens, "secondary class")?),
        disruption_class: Some(word(&DISRUPTION_RE, &tokens, "disruption class")?),
        risk_class: Some(word(&RISK_RE, &tokens, "risk class")?),
    })
}
