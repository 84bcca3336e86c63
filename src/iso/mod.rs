//! Reading ISO 19115/19139 metadata documents.

pub(crate) mod cursor;
mod extractor;

pub use self::extractor::{ExtractError, MetadataExtractor};
