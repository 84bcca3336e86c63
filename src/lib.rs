//! Extraction of ISO 19115/19139 dataset metadata and its projection into DCAT and
//! schema.org graphs.

pub mod classification;
pub mod graph;
pub mod iso;
pub mod model;
pub mod settings;
pub mod source;

#[cfg(test)]
mod test_utils;

pub use crate::classification::ClassificationRules;
pub use crate::graph::{project_catalog, project_structured_data, TripleSet};
pub use crate::iso::{ExtractError, MetadataExtractor};
pub use crate::model::DatasetRecord;
