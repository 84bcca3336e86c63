use std::io::BufRead;

use failure::Fail;
use log::{debug, trace, warn};

use crate::classification::ClassificationRules;
use crate::iso::cursor::{
    capture, read_leaf, read_text, skip, walk, Cursor, Leaf, ReaderCursor, SliceCursor,
    XmlEvent,
};
use crate::model::{DatasetRecord, GeoExtent, GeoExtentBuilder, KeywordGroup, KeywordTerm, Role};

/// Wrappers around the text of a string property.
const TEXT: &[&str] = &["CharacterString", "Anchor"];
/// Wrappers around the value of a date property.
const DATE: &[&str] = &["Date", "DateTime"];
const DECIMAL: &[&str] = &["Decimal"];
const TOPIC_CATEGORY: &[&str] = &["MD_TopicCategoryCode"];

/// This extractor reads ISO 19115/19139 metadata documents into `DatasetRecord`s.
#[derive(Debug)]
pub struct MetadataExtractor<'r> {
    rules: &'r ClassificationRules,
}

impl<'r> MetadataExtractor<'r> {
    /// Create a new `MetadataExtractor` that classifies keyword groups with `rules`.
    pub fn new(rules: &'r ClassificationRules) -> Self {
        Self { rules }
    }

    /// Read a single metadata document in one pass.
    ///
    /// `source` is the URI the document was loaded from; it becomes the identity of the
    /// dataset in projected graphs. Missing fields are not errors.
    pub fn extract<B: BufRead>(
        &self,
        source: Option<&str>,
        input: B,
    ) -> Result<DatasetRecord, ExtractError> {
        let mut record = DatasetRecord {
            source: source.map(Into::into),
            ..Default::default()
        };

        self.metadata(&mut ReaderCursor::new(input), &mut record)?;

        debug!(
            "Extracted `{}` with {} keyword group(s)",
            record.title.as_deref().unwrap_or("-"),
            record.keyword_groups.len()
        );

        Ok(record)
    }

    /// Read a metadata document held in memory.
    pub fn extract_str(
        &self,
        source: Option<&str>,
        xml: &str,
    ) -> Result<DatasetRecord, ExtractError> {
        self.extract(source, xml.as_bytes())
    }

    /// The document level: only a few element names are of interest, wherever they occur.
    fn metadata<C: Cursor>(
        &self,
        cursor: &mut C,
        record: &mut DatasetRecord,
    ) -> Result<(), ExtractError> {
        let mut title_seen = false;

        loop {
            let element = match cursor.next_event()? {
                XmlEvent::Start(element) if !element.is_empty => element,
                XmlEvent::Eof => return Ok(()),
                _ => continue,
            };

            match element.name.as_str() {
                "MD_DataIdentification" => {
                    self.data_identification(cursor, record, &mut title_seen)?
                }
                "fileIdentifier" => {
                    if let Some(leaf) = read_leaf(cursor, TEXT)? {
                        record.identifier = Some(leaf.text);
                    }
                }
                "dataSetURI" => {
                    if let Some(leaf) = read_leaf(cursor, TEXT)? {
                        record.doi = Some(leaf.text);
                    }
                }
                "dateStamp" => {
                    if let Some(leaf) = read_leaf(cursor, DATE)? {
                        record.date_issued = Some(leaf.text);
                    }
                }
                "dataQualityInfo" => {
                    trace!("Skipping <{}>", element.name);
                    skip(cursor)?;
                }
                _ => {} // descend into everything else
            }
        }
    }

    fn data_identification<C: Cursor>(
        &self,
        cursor: &mut C,
        record: &mut DatasetRecord,
        title_seen: &mut bool,
    ) -> Result<(), ExtractError> {
        walk(cursor, |cursor, element| {
            if element.is_empty {
                return Ok(false);
            }

            match element.name.as_str() {
                "CI_Citation" => Self::citation(cursor, record, title_seen)?,
                "abstract" => {
                    if let Some(leaf) = read_leaf(cursor, TEXT)? {
                        record.abstract_text = Some(leaf.text);
                    }
                }
                "EX_GeographicBoundingBox" => {
                    if let Some(extent) = Self::bounding_box(cursor)? {
                        if record.geo_extent.is_none() {
                            record.geo_extent = Some(extent);
                        } else {
                            debug!("Ignoring additional bounding box {}", extent);
                        }
                    }
                }
                "EX_TemporalExtent" => Self::temporal_extent(cursor, record)?,
                "MD_Keywords" => {
                    if let Some(group) = self.keyword_group(cursor)? {
                        record.keyword_groups.push(group);
                    }
                }
                "topicCategory" => {
                    if let Some(leaf) = read_leaf(cursor, TOPIC_CATEGORY)? {
                        if !leaf.text.is_empty() {
                            record.topic_categories.push(leaf.text);
                        }
                    }
                }
                "MD_AggregateInformation" => {
                    trace!("Skipping <{}>", element.name);
                    skip(cursor)?;
                }
                _ => return Ok(false),
            }

            Ok(true)
        })
    }

    /// Only the first title element is the dataset title, even if it is nil or has no
    /// text wrapper; later ones belong to nested citations.
    fn citation<C: Cursor>(
        cursor: &mut C,
        record: &mut DatasetRecord,
        title_seen: &mut bool,
    ) -> Result<(), ExtractError> {
        walk(cursor, |cursor, element| {
            if element.name == "title" {
                let leaf = if element.is_empty {
                    None
                } else {
                    read_leaf(cursor, TEXT)?
                };
                if !*title_seen {
                    *title_seen = true;
                    record.title = leaf.map(|leaf| leaf.text);
                }
                return Ok(true);
            }

            if element.is_empty {
                return Ok(false);
            }

            match element.name.as_str() {
                "otherCitationDetails" => {
                    if let Some(leaf) = read_leaf(cursor, TEXT)? {
                        record.citation = Some(leaf.text);
                    }
                }
                "MD_Identifier" => skip(cursor)?,
                _ => return Ok(false),
            }

            Ok(true)
        })
    }

    /// A bounding box only counts if all four bounds could be read.
    fn bounding_box<C: Cursor>(
        cursor: &mut C,
    ) -> Result<Option<GeoExtent>, ExtractError> {
        let mut bounds = GeoExtentBuilder::default();

        walk(cursor, |cursor, element| {
            if element.is_empty {
                return Ok(false);
            }

            let bound = match element.name.as_str() {
                "northBoundLatitude" => &mut bounds.north,
                "southBoundLatitude" => &mut bounds.south,
                "eastBoundLongitude" => &mut bounds.east,
                "westBoundLongitude" => &mut bounds.west,
                _ => return Ok(false),
            };

            *bound = Self::decimal(cursor, &element.name)?;

            Ok(true)
        })?;

        let extent = bounds.build();
        if extent.is_none() {
            debug!("Discarding incomplete bounding box {:?}", bounds);
        }

        Ok(extent)
    }

    fn decimal<C: Cursor>(cursor: &mut C, name: &str) -> Result<Option<f64>, ExtractError> {
        let leaf = match read_leaf(cursor, DECIMAL)? {
            Some(leaf) => leaf,
            None => return Ok(None),
        };

        match leaf.text.parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Unable to parse <{}> value `{}`: {}", name, leaf.text, e);
                Ok(None)
            }
        }
    }

    /// Positions without text (e.g. an indeterminate `now`) are treated as absent.
    fn temporal_extent<C: Cursor>(
        cursor: &mut C,
        record: &mut DatasetRecord,
    ) -> Result<(), ExtractError> {
        walk(cursor, |cursor, element| {
            if element.is_empty {
                return Ok(false);
            }

            match element.name.as_str() {
                "beginPosition" => {
                    record.start_date = non_empty(read_text(cursor)?).or(record.start_date.take())
                }
                "endPosition" => {
                    record.end_date = non_empty(read_text(cursor)?).or(record.end_date.take())
                }
                "begin" => {
                    if let Some(position) = Self::time_instant(cursor)? {
                        record.start_date = Some(position);
                    }
                }
                "end" => {
                    if let Some(position) = Self::time_instant(cursor)? {
                        record.end_date = Some(position);
                    }
                }
                _ => return Ok(false),
            }

            Ok(true)
        })
    }

    fn time_instant<C: Cursor>(cursor: &mut C) -> Result<Option<String>, ExtractError> {
        let mut position = None;

        walk(cursor, |cursor, element| {
            if element.is_empty || element.name != "timePosition" {
                return Ok(false);
            }

            position = non_empty(read_text(cursor)?).or(position.take());

            Ok(true)
        })?;

        Ok(position)
    }

    /// The group is buffered so that it can be classified by its thesaurus title, which
    /// usually follows the keywords, before any keyword is read.
    fn keyword_group<C: Cursor>(&self, cursor: &mut C) -> Result<Option<KeywordGroup>, ExtractError> {
        let events = capture(cursor)?;

        let thesaurus = Self::thesaurus_title(&mut SliceCursor::new(&events))?;
        let role = thesaurus
            .as_ref()
            .map(|leaf| self.rules.classify(&leaf.text))
            .unwrap_or(Role::Plain);

        if role == Role::Ignored {
            debug!(
                "Ignoring keywords of `{}`",
                thesaurus.as_ref().map_or("", |leaf| leaf.text.as_str())
            );
            return Ok(None);
        }

        let terms = Self::keywords(&mut SliceCursor::new(&events))?;

        let (title, url) = match thesaurus {
            Some(Leaf { text, href }) => {
                let url = href.or_else(|| self.rules.thesaurus_url(&text).map(Into::into));
                (Some(text), url)
            }
            None => (None, None),
        };

        trace!("Keyword group {:?} ({}) with {} term(s)", title, role, terms.len());

        Ok(Some(KeywordGroup::new(title, url, role, terms)))
    }

    fn thesaurus_title<C: Cursor>(cursor: &mut C) -> Result<Option<Leaf>, ExtractError> {
        let mut title = None;

        walk(cursor, |cursor, element| {
            if element.is_empty || element.name != "thesaurusName" {
                return Ok(false);
            }

            walk(cursor, |cursor, element| {
                if element.is_empty {
                    return Ok(false);
                }

                match element.name.as_str() {
                    "title" => {
                        let leaf = read_leaf(cursor, TEXT)?;
                        if title.is_none() {
                            title = leaf;
                        }
                    }
                    "MD_Identifier" => skip(cursor)?,
                    _ => return Ok(false),
                }

                Ok(true)
            })?;

            Ok(true)
        })?;

        Ok(title)
    }

    fn keywords<C: Cursor>(cursor: &mut C) -> Result<Vec<KeywordTerm>, ExtractError> {
        let mut terms = Vec::new();

        walk(cursor, |cursor, element| {
            if element.is_empty {
                return Ok(false);
            }

            match element.name.as_str() {
                "keyword" => {
                    if let Some(leaf) = read_leaf(cursor, TEXT)? {
                        let label = non_empty(leaf.text);
                        if label.is_some() || leaf.href.is_some() {
                            terms.push(KeywordTerm::new(label, leaf.href));
                        }
                    }
                }
                "thesaurusName" => skip(cursor)?,
                _ => return Ok(false),
            }

            Ok(true)
        })?;

        Ok(terms)
    }
}

fn non_empty(text: String) -> Option<String> {
    Some(text).filter(|text| !text.is_empty())
}

/// Errors that abort the extraction of a document.
#[derive(Debug, Fail)]
pub enum ExtractError {
    #[fail(display = "Malformed XML at position {}: {}", position, message)]
    Malformed { position: usize, message: String },
    #[fail(display = "Unable to read XML stream: {}", _0)]
    Io(#[cause] std::io::Error),
}

impl ExtractError {
    pub(crate) fn from_xml(error: quick_xml::Error, position: usize) -> Self {
        match error {
            quick_xml::Error::Io(e) => ExtractError::Io(e),
            e => ExtractError::Malformed {
                position,
                message: e.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(error: std::io::Error) -> Self {
        ExtractError::Io(error)
    }
}
