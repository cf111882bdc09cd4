pub mod config;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod present;
pub mod record;

pub use error::ExtractionError;
pub use parser::{extract, ErrorPolicy, ExtractOptions};
pub use record::{ExtractedRecord, Layout};
