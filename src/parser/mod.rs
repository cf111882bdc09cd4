pub mod acs;
pub mod classical;
pub mod dom;
pub mod vocab;

use scraper::Html;
use tracing::debug;

use crate::error::ExtractionError;
use crate::record::{ExtractedRecord, Layout};

/// What to do when a page is recognised but its fields cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Surface every failure as an `ExtractionError`.
    #[default]
    Strict,
    /// Return an all-unset record tagged with the detected layout instead.
    /// Ambiguous pages (several ACS banners) still fail.
    Degrade,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub on_error: ErrorPolicy,
}

impl ExtractOptions {
    pub fn silent() -> Self {
        Self {
            on_error: ErrorPolicy::Degrade,
        }
    }
}

/// Two passes: detect the page layout, then read that layout's fields.
pub fn extract(html: &str, options: &ExtractOptions) -> Result<ExtractedRecord, ExtractionError> {
    let document = Html::parse_document(html);

    let layout = match detect_layout(&document) {
        Ok(layout) => layout,
        Err(e) => return settle(Layout::Unknown, Err(e), options),
    };
    debug!(%layout, "detected page layout");

    let result = match layout {
        Layout::AcsStructured => acs::extract(&document),
        Layout::Classical | Layout::SemiClassical => classical::extract(&document, layout),
        Layout::Unknown => Err(ExtractionError::UnknownLayout),
    };
    settle(layout, result, options)
}

/// Layout of a parsed page; first rule that applies wins.
///
/// 1. exactly one `.anom-bar-container` element: ACS banner
/// 2. no "Item #:" text: unknown
/// 3. "Item #:" inside `<strong>`/`<b>`: classical, inside `<span>`: semi-classical
pub fn detect_layout(document: &Html) -> Result<Layout, ExtractionError> {
    match acs::banners(document).len() {
        0 => {}
        1 => return Ok(Layout::AcsStructured),
        n => return Err(ExtractionError::MultipleBanners(n)),
    }

    let Some(marker) = dom::text_containers(document, &vocab::ITEM_MARKER_RE).next() else {
        return Ok(Layout::Unknown);
    };

    match marker.value().name().to_ascii_lowercase().as_str() {
        "strong" | "b" => Ok(Layout::Classical),
        "span" => Ok(Layout::SemiClassical),
        other => Err(ExtractionError::MalformedObjectId(format!(
            "item marker inside <{other}>"
        ))),
    }
}

fn settle(
    layout: Layout,
    result: Result<ExtractedRecord, ExtractionError>,
    options: &ExtractOptions,
) -> Result<ExtractedRecord, ExtractionError> {
    match result {
        Err(e) if options.on_error == ErrorPolicy::Degrade && e.is_recoverable() => {
            debug!(%layout, error = %e, "degrading to empty record");
            Ok(ExtractedRecord::degraded(layout))
        }
        other => other,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    fn strict(html: &str) -> Result<ExtractedRecord, ExtractionError> {
        extract(html, &ExtractOptions::default())
    }

    fn silent(html: &str) -> Result<ExtractedRecord, ExtractionError> {
        extract(html, &ExtractOptions::silent())
    }

    #[test]
    fn scp_173_classical() {
        let r = strict(&fixture("scp-173")).unwrap();
        assert_eq!(r.layout, Layout::Classical);
        assert_eq!(r.entry_id.as_deref(), Some("173"));
        assert_eq!(r.primary_class.as_deref(), Some("euclid"));
        assert!(r.clearance_level.is_none());
        assert!(r.secondary_class.is_none());
        assert!(r.disruption_class.is_none());
        assert!(r.risk_class.is_none());
    }

    #[test]
    fn scp_4973_semi_classical() {
        let r = strict(&fixture("scp-4973")).unwrap();
        assert_eq!(r.layout, Layout::SemiClassical);
        assert_eq!(r.entry_id.as_deref(), Some("4973"));
        assert_eq!(r.primary_class.as_deref(), Some("keter"));
        assert!(r.clearance_level.is_none());
    }

    #[test]
    fn scp_5004_acs() {
        let r = strict(&fixture("scp-5004")).unwrap();
        assert_eq!(r.layout, Layout::AcsStructured);
        assert_eq!(r.entry_id.as_deref(), Some("5004"));
        assert_eq!(r.clearance_level.as_deref(), Some("4"));
        assert_eq!(r.primary_class.as_deref(), Some("keter"));
        assert_eq!(r.secondary_class.as_deref(), Some("none"));
        assert_eq!(r.disruption_class.as_deref(), Some("keneq"));
        assert_eq!(r.risk_class.as_deref(), Some("warning"));
    }

    #[test]
    fn classical_and_semi_classical_agree() {
        let classical = strict(
            "<p><strong>Item #:</strong> SCP-173</p><p><strong>Object Class:</strong> Safe</p>",
        )
        .unwrap();
        let semi = strict(
            "<p><span>Item #:</span> <span>SCP-173</span></p>\
             <p><span>Object Class:</span> <span>Safe</span></p>",
        )
        .unwrap();
        assert_eq!(classical.entry_id.as_deref(), Some("173"));
        assert_eq!(classical.primary_class.as_deref(), Some("safe"));
        assert_eq!(classical.entry_id, semi.entry_id);
        assert_eq!(classical.primary_class, semi.primary_class);
        assert_eq!(semi.layout, Layout::SemiClassical);
    }

    #[test]
    fn bold_tag_counts_as_classical() {
        let r = strict("<p><b>Item #:</b> SCP-002</p><p><b>Object Class:</b> Euclid</p>").unwrap();
        assert_eq!(r.layout, Layout::Classical);
        assert_eq!(r.entry_id.as_deref(), Some("002"));
    }

    #[test]
    fn banner_wins_over_free_text_labels() {
        let html = fixture("scp-5004")
            .replace("</body>", "<p><strong>Item #:</strong> SCP-1</p></body>");
        let r = strict(&html).unwrap();
        assert_eq!(r.layout, Layout::AcsStructured);
        assert_eq!(r.entry_id.as_deref(), Some("5004"));
    }

    #[test]
    fn repeated_runs_are_identical() {
        for name in ["scp-173", "scp-4973", "scp-5004"] {
            let html = fixture(name);
            assert_eq!(strict(&html), strict(&html));
        }
    }

    #[test]
    fn independent_calls_across_threads() {
        let html = fixture("scp-5004");
        let expected = strict(&html).unwrap();
        let html = html.as_str();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(move |_| s.spawn(move || strict(html).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn unknown_page_fails_when_strict() {
        let html = "<html><body><p>Nothing to see here.</p></body></html>";
        assert_eq!(strict(html).unwrap_err(), ExtractionError::UnknownLayout);
    }

    #[test]
    fn unknown_page_degrades_when_silent() {
        let html = "<html><body><p>Nothing to see here.</p></body></html>";
        let r = silent(html).unwrap();
        assert_eq!(r, ExtractedRecord::degraded(Layout::Unknown));
        assert!(r.is_degraded());
    }

    #[test]
    fn multiple_banners_fail_under_every_policy() {
        let html = r#"<div class="anom-bar-container item-1 clear-1 safe none dark notice"></div>
                      <div class="anom-bar-container item-2 clear-2 keter none vlam danger"></div>"#;
        assert_eq!(strict(html).unwrap_err(), ExtractionError::MultipleBanners(2));
        assert_eq!(silent(html).unwrap_err(), ExtractionError::MultipleBanners(2));
    }

    #[test]
    fn banner_without_risk_is_malformed() {
        let html = r#"<div class="anom-bar-container item-173 clear-3 euclid none dark"></div>"#;
        assert_eq!(
            strict(html).unwrap_err(),
            ExtractionError::MalformedAcsBanner("risk class")
        );
    }

    #[test]
    fn malformed_banner_degrades_keeping_layout() {
        let html = r#"<div class="anom-bar-container item-173 clear-3 euclid none dark"></div>"#;
        assert_eq!(silent(html).unwrap(), ExtractedRecord::degraded(Layout::AcsStructured));
    }

    #[test]
    fn malformed_classical_degrades_keeping_layout() {
        let html = "<p><strong>Item #:</strong> SCP-173</p>";
        assert!(matches!(
            strict(html).unwrap_err(),
            ExtractionError::MalformedObjectClass(_)
        ));
        assert_eq!(silent(html).unwrap(), ExtractedRecord::degraded(Layout::Classical));
    }

    #[test]
    fn marker_in_unexpected_tag() {
        let html = "<p><em>Item #:</em> SCP-173</p><p><strong>Object Class:</strong> Safe</p>";
        assert_eq!(
            strict(html).unwrap_err(),
            ExtractionError::MalformedObjectId("item marker inside <em>".into())
        );
        assert_eq!(silent(html).unwrap(), ExtractedRecord::degraded(Layout::Unknown));
    }
}
