//! Projection of a `DatasetRecord` into graph triples.

mod catalog;
mod geometry;
pub mod json_ld;
mod structured_data;
mod triple;
pub mod turtle;
pub mod vocab;

pub use self::catalog::project_catalog;
pub use self::structured_data::project_structured_data;
pub use self::triple::{Namespace, Object, Resource, Triple, TripleSet};

use crate::model::DatasetRecord;

/// The node that stands for the dataset: its source URI, or a blank node.
fn dataset_node(record: &DatasetRecord) -> Resource {
    Resource::iri_or_blank(record.source.as_deref(), "dataset")
}
