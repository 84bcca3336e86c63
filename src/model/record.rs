use std::fmt;

use crate::model::{GeoExtent, KeywordGroup, Role};

/// The metadata of one dataset as read from an ISO 19139 document.
///
/// Every scalar field is optional: `None` means the element never appeared, while
/// `Some("")` means it appeared with empty content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetRecord {
    pub source: Option<String>,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub identifier: Option<String>,
    pub doi: Option<String>,
    pub citation: Option<String>,
    pub date_issued: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub geo_extent: Option<GeoExtent>,
    pub topic_categories: Vec<String>,
    pub keyword_groups: Vec<KeywordGroup>,
}

impl DatasetRecord {
    /// All keyword groups with the given role, in document order.
    pub fn groups_with_role(&self, role: Role) -> impl Iterator<Item = &KeywordGroup> {
        self.keyword_groups
            .iter()
            .filter(move |group| group.role() == role)
    }

    /// The URL a DOI resolves to.
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("https://doi.org/{}", doi))
    }
}

impl fmt::Display for DatasetRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields = [
            ("Source", &self.source),
            ("Title", &self.title),
            ("Abstract", &self.abstract_text),
            ("Identifier", &self.identifier),
            ("DOI", &self.doi),
            ("Citation", &self.citation),
            ("Issued", &self.date_issued),
            ("Start", &self.start_date),
            ("End", &self.end_date),
        ];

        for (name, value) in fields.iter() {
            if let Some(value) = value {
                writeln!(f, "{}: {}", name, value)?;
            }
        }

        if let Some(extent) = &self.geo_extent {
            writeln!(f, "Extent: {}", extent)?;
        }

        if !self.topic_categories.is_empty() {
            writeln!(f, "Topic categories: {}", self.topic_categories.join(", "))?;
        }

        for group in &self.keyword_groups {
            writeln!(
                f,
                "Keywords [{}] {}:",
                group.role(),
                group.title().unwrap_or("(untitled)")
            )?;
            for term in group.terms() {
                match (term.label(), term.url()) {
                    (Some(label), Some(url)) => writeln!(f, "  - {} <{}>", label, url)?,
                    (Some(label), None) => writeln!(f, "  - {}", label)?,
                    (None, Some(url)) => writeln!(f, "  - <{}>", url)?,
                    (None, None) => {}
                }
            }
        }

        Ok(())
    }
}
