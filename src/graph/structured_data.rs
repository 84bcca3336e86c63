use log::debug;

use crate::graph::geometry::add_geometry;
use crate::graph::vocab::{rdf, schema, DOI_PROPERTY_ID, STRUCTURED_DATA_NAMESPACES};
use crate::graph::{dataset_node, Resource, TripleSet};
use crate::model::{DatasetRecord, KeywordGroup, Role};

/// Project a record into schema.org terms as read by search engines.
pub fn project_structured_data(record: &DatasetRecord) -> TripleSet {
    let dataset = dataset_node(record);
    let mut graph = TripleSet::new(dataset.clone(), STRUCTURED_DATA_NAMESPACES);

    graph.add(&dataset, rdf::TYPE, Resource::iri(schema::DATASET));
    graph.add_optional(&dataset, schema::NAME, record.title.as_deref());
    graph.add_optional(&dataset, schema::DESCRIPTION, record.abstract_text.as_deref());
    graph.add_optional(&dataset, schema::IDENTIFIER, record.identifier.as_deref());
    graph.add_optional(&dataset, schema::DATE_PUBLISHED, record.date_issued.as_deref());

    if let (Some(doi), Some(doi_url)) = (&record.doi, record.doi_url()) {
        let identifier = Resource::iri(doi_url.as_str());

        graph.add(&dataset, schema::IDENTIFIER, identifier.clone());
        graph.add(&identifier, rdf::TYPE, Resource::iri(schema::PROPERTY_VALUE));
        graph.add_literal(&identifier, schema::PROPERTY_ID, DOI_PROPERTY_ID);
        graph.add_literal(&identifier, schema::VALUE, &format!("doi:{}", doi));
        graph.add_literal(&identifier, schema::URL, &doi_url);
        graph.add_literal(&identifier, schema::NAME, &format!("DOI: {}", doi));
    }

    graph.add_optional(&dataset, schema::CITATION, record.citation.as_deref());

    for group in record.groups_with_role(Role::Plain) {
        for label in group.labels() {
            graph.add_literal(&dataset, schema::KEYWORDS, label);
        }
    }

    for category in &record.topic_categories {
        graph.add_literal(&dataset, schema::KEYWORDS, category);
    }

    for group in record.groups_with_role(Role::Theme) {
        add_defined_terms(&mut graph, &dataset, group);
    }

    for group in record.groups_with_role(Role::VariableMeasured) {
        add_variables(&mut graph, &dataset, group);
    }

    if let Some(start) = &record.start_date {
        let coverage = match &record.end_date {
            Some(end) => format!("{}/{}", start, end),
            None => start.clone(),
        };
        graph.add_literal(&dataset, schema::TEMPORAL_COVERAGE, &coverage);
    }

    if let Some(extent) = &record.geo_extent {
        let place = Resource::blank("spatial");
        let geometry = Resource::blank("geo");

        graph.add(&dataset, schema::SPATIAL_COVERAGE, place.clone());
        graph.add(&place, rdf::TYPE, Resource::iri(schema::PLACE));
        graph.add(&place, schema::GEO, geometry.clone());
        add_geometry(&mut graph, &geometry, extent);
    }

    debug!("Structured data projection with {} triple(s)", graph.len());

    graph
}

fn add_defined_terms(graph: &mut TripleSet, dataset: &Resource, group: &KeywordGroup) {
    let term_set = Resource::iri_or_blank(group.url(), format!("g{}", group.id()));

    graph.add(&term_set, rdf::TYPE, Resource::iri(schema::DEFINED_TERM_SET));
    graph.add_optional(&term_set, schema::NAME, group.title());
    graph.add_optional(&term_set, schema::URL, group.url());

    for term in group.terms() {
        let node = Resource::iri_or_blank(term.url(), format!("t{}", term.id()));

        graph.add(dataset, schema::KEYWORDS, node.clone());
        graph.add(&node, rdf::TYPE, Resource::iri(schema::DEFINED_TERM));
        graph.add_optional(&node, schema::NAME, term.label());
        graph.add(&node, schema::IN_DEFINED_TERM_SET, term_set.clone());
    }
}

fn add_variables(graph: &mut TripleSet, dataset: &Resource, group: &KeywordGroup) {
    for term in group.terms() {
        let node = Resource::blank(format!("pv{}", term.id()));

        graph.add(dataset, schema::VARIABLE_MEASURED, node.clone());
        graph.add(&node, rdf::TYPE, Resource::iri(schema::PROPERTY_VALUE));
        graph.add_optional(&node, schema::NAME, term.label());
        graph.add_optional(&node, schema::URL, term.url());
    }
}
