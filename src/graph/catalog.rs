use log::debug;

use crate::graph::geometry::add_geometry;
use crate::graph::vocab::{adms, dcat, dct, locn, rdf, skos, CATALOG_NAMESPACES};
use crate::graph::{dataset_node, Resource, TripleSet};
use crate::model::{DatasetRecord, KeywordGroup, Role};

/// Project a record into DCAT terms for data catalogs.
///
/// Only present fields produce triples. Ignored keyword groups never reach the graph.
pub fn project_catalog(record: &DatasetRecord) -> TripleSet {
    let dataset = dataset_node(record);
    let mut graph = TripleSet::new(dataset.clone(), CATALOG_NAMESPACES);

    graph.add(&dataset, rdf::TYPE, Resource::iri(dcat::DATASET));
    graph.add_optional(&dataset, dct::TITLE, record.title.as_deref());
    graph.add_optional(&dataset, dct::DESCRIPTION, record.abstract_text.as_deref());
    graph.add_optional(&dataset, dct::IDENTIFIER, record.identifier.as_deref());
    graph.add_optional(&dataset, dct::ISSUED, record.date_issued.as_deref());

    if let (Some(doi), Some(doi_url)) = (&record.doi, record.doi_url()) {
        let identifier = Resource::iri(doi_url.as_str());

        graph.add_literal(&dataset, dct::IDENTIFIER, doi);
        graph.add_literal(&dataset, dct::IDENTIFIER, &doi_url);
        graph.add(&dataset, adms::IDENTIFIER, identifier.clone());
        graph.add(&identifier, rdf::TYPE, Resource::iri(adms::IDENTIFIER_CLASS));
        graph.add_literal(&identifier, skos::NOTATION, &doi_url);
    }

    if let Some(start) = &record.start_date {
        let period = Resource::blank("temporal");

        graph.add(&dataset, dct::TEMPORAL, period.clone());
        graph.add(&period, rdf::TYPE, Resource::iri(dct::PERIOD_OF_TIME));
        graph.add_literal(&period, dcat::START_DATE, start);
        graph.add_optional(&period, dcat::END_DATE, record.end_date.as_deref());
    } else if record.end_date.is_some() {
        debug!("Skipping temporal extent without a start date");
    }

    for group in record
        .groups_with_role(Role::Plain)
        .chain(record.groups_with_role(Role::VariableMeasured))
    {
        for label in group.labels() {
            graph.add_literal(&dataset, dcat::KEYWORD, label);
        }
    }

    for category in &record.topic_categories {
        graph.add_literal(&dataset, dcat::KEYWORD, category);
    }

    for group in record.groups_with_role(Role::Theme) {
        add_theme(&mut graph, &dataset, group);
    }

    if let Some(extent) = &record.geo_extent {
        let location = Resource::blank("spatial");
        let geometry = Resource::blank("geo");

        graph.add(&dataset, dct::SPATIAL, location.clone());
        graph.add(&location, rdf::TYPE, Resource::iri(dct::LOCATION));
        graph.add(&location, locn::GEOMETRY, geometry.clone());
        add_geometry(&mut graph, &geometry, extent);
    }

    debug!("Catalog projection with {} triple(s)", graph.len());

    graph
}

/// Each term becomes a concept in the scheme the group stands for.
fn add_theme(graph: &mut TripleSet, dataset: &Resource, group: &KeywordGroup) {
    let scheme = Resource::iri_or_blank(group.url(), format!("g{}", group.id()));

    graph.add(&scheme, rdf::TYPE, Resource::iri(skos::CONCEPT_SCHEME));
    graph.add_optional(&scheme, skos::PREF_LABEL, group.title());

    for term in group.terms() {
        let concept = Resource::iri_or_blank(term.url(), format!("t{}", term.id()));

        graph.add(dataset, dcat::THEME, concept.clone());
        graph.add(&concept, rdf::TYPE, Resource::iri(skos::CONCEPT));
        graph.add_optional(&concept, skos::PREF_LABEL, term.label());
        graph.add(&concept, skos::IN_SCHEME, scheme.clone());
    }
}

#[cfg(test)]
mod tests {
    use crate::classification::ClassificationRules;
    use crate::graph::Object;
    use crate::iso::MetadataExtractor;
    use crate::model::{GeoExtent, KeywordTerm};
    use crate::test_utils;

    use super::*;

    fn record(xml: &str) -> DatasetRecord {
        MetadataExtractor::new(ClassificationRules::builtin())
            .extract_str(None, xml)
            .expect("Unable to extract record")
    }

    fn resource(iri: &str) -> Object {
        Object::Resource(Resource::iri(iri))
    }

    #[test]
    fn minimal_record() {
        let graph = project_catalog(&record(test_utils::MINIMAL_RECORD));
        let dataset = Resource::blank("dataset");

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.subject(), &dataset);
        assert_eq!(
            graph.objects(&dataset, rdf::TYPE).collect::<Vec<_>>(),
            vec![&resource(dcat::DATASET)]
        );
        assert_eq!(
            graph.literals(&dataset, dct::TITLE).collect::<Vec<_>>(),
            vec!["INSS INFOMAR Seabed Samples"]
        );
        assert_eq!(graph.literals(&dataset, dct::DESCRIPTION).count(), 1);
        assert_eq!(graph.objects(&dataset, dct::IDENTIFIER).count(), 0);
        assert_eq!(graph.objects(&dataset, dcat::KEYWORD).count(), 0);
        assert_eq!(graph.objects(&dataset, dct::TEMPORAL).count(), 0);
    }

    #[test]
    fn three_namespaces() {
        let graph = project_catalog(&DatasetRecord::default());

        let prefixes: Vec<&str> = graph.namespaces().iter().map(|ns| ns.prefix).collect();
        assert_eq!(prefixes, vec!["dct", "dcat", "adms"]);
    }

    #[test]
    fn empty_title_is_emitted() {
        let graph = project_catalog(&DatasetRecord {
            title: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(
            graph.literals(graph.subject(), dct::TITLE).collect::<Vec<_>>(),
            vec![""]
        );
    }

    #[test]
    fn doi_identifiers() {
        let graph = project_catalog(&DatasetRecord {
            source: Some("http://example.org/ds".into()),
            doi: Some("10.1234/x".into()),
            ..Default::default()
        });
        let dataset = Resource::iri("http://example.org/ds");
        let doi = Resource::iri("https://doi.org/10.1234/x");

        assert_eq!(
            graph.literals(&dataset, dct::IDENTIFIER).collect::<Vec<_>>(),
            vec!["10.1234/x", "https://doi.org/10.1234/x"]
        );
        assert_eq!(
            graph.objects(&dataset, adms::IDENTIFIER).collect::<Vec<_>>(),
            vec![&Object::Resource(doi.clone())]
        );
        assert_eq!(
            graph.objects(&doi, rdf::TYPE).collect::<Vec<_>>(),
            vec![&resource(adms::IDENTIFIER_CLASS)]
        );
        assert_eq!(
            graph.literals(&doi, skos::NOTATION).collect::<Vec<_>>(),
            vec!["https://doi.org/10.1234/x"]
        );
    }

    #[test]
    fn temporal_needs_start() {
        let graph = project_catalog(&DatasetRecord {
            end_date: Some("2019-12-31".into()),
            ..Default::default()
        });
        assert_eq!(graph.objects(graph.subject(), dct::TEMPORAL).count(), 0);
        assert_eq!(graph.len(), 1);

        let graph = project_catalog(&DatasetRecord {
            start_date: Some("1999-06-01".into()),
            ..Default::default()
        });
        let period = Resource::blank("temporal");
        assert_eq!(
            graph.literals(&period, dcat::START_DATE).collect::<Vec<_>>(),
            vec!["1999-06-01"]
        );
        assert_eq!(graph.literals(&period, dcat::END_DATE).count(), 0);
    }

    #[test]
    fn plain_and_theme_keywords() {
        let graph = project_catalog(&record(test_utils::MARINE_INSTITUTE_RECORD));
        let dataset = graph.subject().clone();

        assert_eq!(
            graph.literals(&dataset, dcat::KEYWORD).collect::<Vec<_>>(),
            vec![
                "Lough Feeagh",
                "Burrishoole",
                "Temperature of the water body",
                "Concentration of oxygen {O2} per unit volume of the water body",
                "inlandWaters",
            ]
        );

        let concept = Resource::iri("http://vocab.nerc.ac.uk/collection/P22/current/14/");
        let scheme = Resource::iri("http://vocab.nerc.ac.uk/collection/P22/current/");

        assert_eq!(
            graph.objects(&dataset, dcat::THEME).collect::<Vec<_>>(),
            vec![&Object::Resource(concept.clone())]
        );
        assert_eq!(
            graph.objects(&concept, rdf::TYPE).collect::<Vec<_>>(),
            vec![&resource(skos::CONCEPT)]
        );
        assert_eq!(
            graph.literals(&concept, skos::PREF_LABEL).collect::<Vec<_>>(),
            vec!["Hydrography"]
        );
        assert_eq!(
            graph.objects(&concept, skos::IN_SCHEME).collect::<Vec<_>>(),
            vec![&Object::Resource(scheme.clone())]
        );
        assert_eq!(
            graph.literals(&scheme, skos::PREF_LABEL).collect::<Vec<_>>(),
            vec!["GEMET - INSPIRE themes, version 1.0"]
        );
    }

    #[test]
    fn ignored_terms_are_absent() {
        let graph = project_catalog(&record(test_utils::MARINE_INSTITUTE_RECORD));

        assert!(graph.triples().iter().all(|triple| {
            triple.object.as_literal() != Some("2019")
                && triple.object.as_resource()
                    != Some(&Resource::iri("http://linked.marine.ie/calendar/2019"))
        }));
    }

    #[test]
    fn unidentified_theme_uses_blank_nodes() {
        let term = KeywordTerm::new(Some("Hydrography".into()), None);
        let group = KeywordGroup::new(
            Some("GemetInspireTheme".into()),
            None,
            Role::Theme,
            vec![term.clone()],
        );
        let graph = project_catalog(&DatasetRecord {
            keyword_groups: vec![group.clone()],
            ..Default::default()
        });

        let concept = Resource::blank(format!("t{}", term.id()));
        let scheme = Resource::blank(format!("g{}", group.id()));

        assert_eq!(
            graph.objects(&concept, skos::IN_SCHEME).collect::<Vec<_>>(),
            vec![&Object::Resource(scheme)]
        );
        assert_eq!(graph.literals(graph.subject(), dcat::KEYWORD).count(), 0);
    }

    #[test]
    fn point_geometry() {
        let graph = project_catalog(&DatasetRecord {
            geo_extent: Some(GeoExtent::new(-9.577527, 53.945276, 53.945276, -9.577527)),
            ..Default::default()
        });
        let location = Resource::blank("spatial");
        let geometry = Resource::blank("geo");

        assert_eq!(
            graph.objects(&location, locn::GEOMETRY).collect::<Vec<_>>(),
            vec![&Object::Resource(geometry.clone())]
        );
        assert_eq!(
            graph
                .literals(&geometry, crate::graph::vocab::schema::LATITUDE)
                .collect::<Vec<_>>(),
            vec!["53.945276"]
        );
    }

    #[test]
    fn projection_is_repeatable() {
        let record = record(test_utils::MARINE_INSTITUTE_RECORD);

        assert_eq!(project_catalog(&record), project_catalog(&record));
    }
}
