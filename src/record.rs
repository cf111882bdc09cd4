use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Classical,
    SemiClassical,
    AcsStructured,
    Unknown,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Layout::Classical => "classical",
            Layout::SemiClassical => "semi-classical",
            Layout::AcsStructured => "acs",
            Layout::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Fields pulled from one page. Which ones are set depends on `layout`:
/// free-text layouts carry only `entry_id` and `primary_class`, the ACS
/// banner carries all of them, and a degraded record carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    pub layout: Layout,
    pub entry_id: Option<String>,
    pub primary_class: Option<String>,
    pub clearance_level: Option<String>,
    pub secondary_class: Option<String>,
    pub disruption_class: Option<String>,
    pub risk_class: Option<String>,
}

impl ExtractedRecord {
    pub fn free_text(layout: Layout, entry_id: String, primary_class: String) -> Self {
        Self {
            entry_id: Some(entry_id),
            primary_class: Some(primary_class),
            ..Self::degraded(layout)
        }
    }

    /// All-unset record tagged with whatever layout was detected.
    pub fn degraded(layout: Layout) -> Self {
        Self {
            layout,
            entry_id: None,
            primary_class: None,
            clearance_level: None,
            secondary_class: None,
            disruption_class: None,
            risk_class: None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.entry_id.is_none()
    }
}
