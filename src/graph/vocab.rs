//! IRIs of the vocabularies both projections write.

use crate::graph::Namespace;

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// DCMI Metadata Terms.
pub mod dct {
    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    pub const ISSUED: &str = "http://purl.org/dc/terms/issued";
    pub const TEMPORAL: &str = "http://purl.org/dc/terms/temporal";
    pub const SPATIAL: &str = "http://purl.org/dc/terms/spatial";

    pub const PERIOD_OF_TIME: &str = "http://purl.org/dc/terms/PeriodOfTime";
    pub const LOCATION: &str = "http://purl.org/dc/terms/Location";
}

/// Data Catalog Vocabulary.
pub mod dcat {
    pub const NS: &str = "http://www.w3.org/ns/dcat#";

    pub const DATASET: &str = "http://www.w3.org/ns/dcat#Dataset";
    pub const KEYWORD: &str = "http://www.w3.org/ns/dcat#keyword";
    pub const THEME: &str = "http://www.w3.org/ns/dcat#theme";
    pub const START_DATE: &str = "http://www.w3.org/ns/dcat#startDate";
    pub const END_DATE: &str = "http://www.w3.org/ns/dcat#endDate";
}

/// Asset Description Metadata Schema.
pub mod adms {
    pub const NS: &str = "http://www.w3.org/ns/adms#";

    pub const IDENTIFIER: &str = "http://www.w3.org/ns/adms#identifier";
    pub const IDENTIFIER_CLASS: &str = "http://www.w3.org/ns/adms#Identifier";
}

pub mod skos {
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
    pub const CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";
    pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const NOTATION: &str = "http://www.w3.org/2004/02/skos/core#notation";
}

/// ISA Core Location Vocabulary.
pub mod locn {
    pub const GEOMETRY: &str = "http://www.w3.org/ns/locn#geometry";
}

pub mod schema {
    pub const NS: &str = "https://schema.org/";

    pub const DATASET: &str = "https://schema.org/Dataset";
    pub const NAME: &str = "https://schema.org/name";
    pub const DESCRIPTION: &str = "https://schema.org/description";
    pub const IDENTIFIER: &str = "https://schema.org/identifier";
    pub const CITATION: &str = "https://schema.org/citation";
    pub const DATE_PUBLISHED: &str = "https://schema.org/datePublished";
    pub const KEYWORDS: &str = "https://schema.org/keywords";
    pub const TEMPORAL_COVERAGE: &str = "https://schema.org/temporalCoverage";
    pub const SPATIAL_COVERAGE: &str = "https://schema.org/spatialCoverage";
    pub const VARIABLE_MEASURED: &str = "https://schema.org/variableMeasured";
    pub const URL: &str = "https://schema.org/url";

    pub const PROPERTY_VALUE: &str = "https://schema.org/PropertyValue";
    pub const PROPERTY_ID: &str = "https://schema.org/propertyID";
    pub const VALUE: &str = "https://schema.org/value";

    pub const DEFINED_TERM: &str = "https://schema.org/DefinedTerm";
    pub const DEFINED_TERM_SET: &str = "https://schema.org/DefinedTermSet";
    pub const IN_DEFINED_TERM_SET: &str = "https://schema.org/inDefinedTermSet";

    pub const PLACE: &str = "https://schema.org/Place";
    pub const GEO: &str = "https://schema.org/geo";
    pub const GEO_COORDINATES: &str = "https://schema.org/GeoCoordinates";
    pub const GEO_SHAPE: &str = "https://schema.org/GeoShape";
    pub const LATITUDE: &str = "https://schema.org/latitude";
    pub const LONGITUDE: &str = "https://schema.org/longitude";
    pub const BOX: &str = "https://schema.org/box";
}

/// The registry entry a schema.org DOI identifier refers to.
pub const DOI_PROPERTY_ID: &str = "https://registry.identifiers.org/registry/doi";

pub const CATALOG_NAMESPACES: &[Namespace] = &[
    Namespace {
        prefix: "dct",
        iri: dct::NS,
    },
    Namespace {
        prefix: "dcat",
        iri: dcat::NS,
    },
    Namespace {
        prefix: "adms",
        iri: adms::NS,
    },
];

pub const STRUCTURED_DATA_NAMESPACES: &[Namespace] = &[Namespace {
    prefix: "schema",
    iri: schema::NS,
}];
