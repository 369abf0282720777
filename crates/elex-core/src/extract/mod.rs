//! Electoral field extraction module.

mod parser;
pub mod rules;

pub use parser::{ElectoralExtractor, ExtractionDetail};
pub use rules::{Field, FieldExtractor, FieldMatch, FieldSpec, PatternRule};
