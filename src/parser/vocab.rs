//! Fixed vocabularies and the compiled patterns built from them.
//!
//! Free-text patterns run against lower-cased text, so only the marker
//! patterns need the case-insensitive flag.

use std::sync::LazyLock;

use regex::Regex;

/// Object classes accepted after an "Object Class:" label.
pub const CLASSICAL_PRIMARY: &[&str] = &[
    "safe",
    "euclid",
    "keter",
    "thaumiel",
    "neutralized",
    "explained",
    "esoteric",
    "decommissioned",
    "unknown",
];

/// Containment classes encoded on an ACS banner.
pub const ACS_PRIMARY: &[&str] = &[
    "safe",
    "euclid",
    "keter",
    "neutralized",
    "pending",
    "explained",
    "esoteric",
];

pub const SECONDARY: &[&str] = &[
    "none",
    "apollyon",
    "archon",
    "cernunnos",
    "hiemal",
    "tiamat",
    "ticonderoga",
    "thaumiel",
    "unknown",
];

pub const DISRUPTION: &[&str] = &["dark", "vlam", "keneq", "ekhi", "amida"];

pub const RISK: &[&str] = &["notice", "caution", "warning", "danger", "critical"];

pub static ITEM_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)item #:").unwrap());
pub static OBJECT_CLASS_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)object\sclass:").unwrap());
pub static CLASSICAL_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"scp-([0-9]+)").unwrap());
pub static CLASSICAL_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| alternation(CLASSICAL_PRIMARY));

pub static ACS_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"item-(?:scp-)?([0-9]+)").unwrap());
pub static ACS_CLEARANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"clear-([1-9][0-9]*|0)").unwrap());
pub static ACS_PRIMARY_RE: LazyLock<Regex> = LazyLock::new(|| alternation(ACS_PRIMARY));
pub static SECONDARY_RE: LazyLock<Regex> = LazyLock::new(|| alternation(SECONDARY));
pub static DISRUPTION_RE: LazyLock<Regex> = LazyLock::new(|| alternation(DISRUPTION));
pub static RISK_RE: LazyLock<Regex> = LazyLock::new(|| alternation(RISK));

fn alternation(words: &[&str]) -> Regex {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&escaped.join("|")).unwrap()
}

/// First capture group of `re` in `haystack`.
pub fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Leftmost vocabulary word of `re` in `haystack`.
pub fn first_word(re: &Regex, haystack: &str) -> Option<String> {
    re.find(haystack).map(|m| m.as_str().to_string())
}
