use scraper::Html;

use super::dom::{nth_sibling_text, text_containers};
use super::vocab::{
    capture, first_word, CLASSICAL_CLASS_RE, CLASSICAL_ID_RE, ITEM_MARKER_RE,
    OBJECT_CLASS_MARKER_RE,
};
use crate::error::ExtractionError;
use crate::record::{ExtractedRecord, Layout};

/// Sibling distance from a label's container to its value. Semi-classical
/// pages put a whitespace node before the value's own wrapper.
fn hops(layout: Layout) -> usize {
    match layout {
        Layout::SemiClassical => 2,
        _ => 1,
    }
}

/// Read "Item #:" and "Object Class:" values from a free-text page.
pub fn extract(document: &Html, layout: Layout) -> Result<ExtractedRecord, ExtractionError> {
    let n = hops(layout);

    // Only the first id counts; addenda may mention other items.
    let id_marker = text_containers(document, &ITEM_MARKER_RE)
        .next()
        .ok_or_else(|| ExtractionError::MalformedObjectId("no item marker".into()))?;
    let id_text = nth_sibling_text(id_marker, n).ok_or_else(|| {
        ExtractionError::MalformedObjectId(format!("no value {n} node(s) after marker"))
    })?;
    let entry_id = capture(&CLASSICAL_ID_RE, &id_text.to_lowercase()).ok_or_else(|| {
        ExtractionError::MalformedObjectId(format!("no scp number in {:?}", id_text.trim()))
    })?;

    let class_markers: Vec<_> = text_containers(document, &OBJECT_CLASS_MARKER_RE).collect();
    let [class_marker] = class_markers.as_slice() else {
        return Err(ExtractionError::MalformedObjectClass(format!(
            "expected one object class label, found {}",
            class_markers.len()
        )));
    };
    let class_text = nth_sibling_text(*class_marker, n).ok_or_else(|| {
        ExtractionError::MalformedObjectClass(format!("no value {n} node(s) after label"))
    })?;
    let primary_class = first_word(&CLASSICAL_CLASS_RE, &class_text.to_lowercase())
        .ok_or_else(|| {
            ExtractionError::MalformedObjectClass(format!("unrecognized class {:?}", class_text.trim()))
        })?;

    Ok(ExtractedRecord::free_text(layout, entry_id, primary_class))
}
