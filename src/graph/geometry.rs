use crate::graph::vocab::{rdf, schema};
use crate::graph::{Resource, TripleSet};
use crate::model::GeoExtent;

/// Describes `extent` on `node`: coordinates for a point, a box otherwise.
pub(crate) fn add_geometry(graph: &mut TripleSet, node: &Resource, extent: &GeoExtent) {
    if extent.is_point() {
        graph.add(node, rdf::TYPE, Resource::iri(schema::GEO_COORDINATES));
        graph.add_literal(node, schema::LATITUDE, &extent.south().to_string());
        graph.add_literal(node, schema::LONGITUDE, &extent.west().to_string());
    } else {
        graph.add(node, rdf::TYPE, Resource::iri(schema::GEO_SHAPE));
        graph.add_literal(node, schema::BOX, &extent.box_literal());
    }
}
