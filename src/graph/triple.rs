use std::fmt;

/// The subject of a triple or an object that is not a literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Iri(String),
    /// A blank node with a label that is unique within its `TripleSet`.
    Blank(String),
}

impl Resource {
    pub fn iri(iri: impl Into<String>) -> Self {
        Resource::Iri(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Resource::Blank(label.into())
    }

    /// An IRI if there is one, a blank node otherwise.
    pub fn iri_or_blank(iri: Option<&str>, label: impl Into<String>) -> Self {
        match iri {
            Some(iri) => Resource::iri(iri),
            None => Resource::blank(label),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Resource::Blank(_))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Resource::Iri(iri) => write!(f, "<{}>", iri),
            Resource::Blank(label) => write!(f, "_:{}", label),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Resource(Resource),
    Literal(String),
}

impl Object {
    pub fn literal(value: impl Into<String>) -> Self {
        Object::Literal(value.into())
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Object::Literal(value) => Some(value),
            Object::Resource(_) => None,
        }
    }

    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Object::Resource(resource) => Some(resource),
            Object::Literal(_) => None,
        }
    }
}

impl From<Resource> for Object {
    fn from(resource: Resource) -> Self {
        Object::Resource(resource)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Triple {
    pub subject: Resource,
    pub predicate: &'static str,
    pub object: Object,
}

/// A prefix binding a serializer may use to compact IRIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: &'static str,
    pub iri: &'static str,
}

/// An ordered sequence of triples about one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct TripleSet {
    subject: Resource,
    namespaces: Vec<Namespace>,
    triples: Vec<Triple>,
}

impl TripleSet {
    pub fn new(subject: Resource, namespaces: &[Namespace]) -> Self {
        Self {
            subject,
            namespaces: namespaces.to_vec(),
            triples: Vec::new(),
        }
    }

    /// The dataset node all other nodes hang off.
    pub fn subject(&self) -> &Resource {
        &self.subject
    }

    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn add(&mut self, subject: &Resource, predicate: &'static str, object: impl Into<Object>) {
        self.triples.push(Triple {
            subject: subject.clone(),
            predicate,
            object: object.into(),
        });
    }

    pub fn add_literal(&mut self, subject: &Resource, predicate: &'static str, value: &str) {
        self.add(subject, predicate, Object::literal(value));
    }

    /// Adds a literal triple only for a present value.
    pub fn add_optional(&mut self, subject: &Resource, predicate: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.add_literal(subject, predicate, value);
        }
    }

    /// All objects of `subject` for `predicate`, in insertion order.
    pub fn objects<'s>(
        &'s self,
        subject: &'s Resource,
        predicate: &'s str,
    ) -> impl Iterator<Item = &'s Object> + 's {
        self.triples
            .iter()
            .filter(move |triple| &triple.subject == subject && triple.predicate == predicate)
            .map(|triple| &triple.object)
    }

    /// The literal values of `subject` for `predicate`.
    pub fn literals<'s>(
        &'s self,
        subject: &'s Resource,
        predicate: &'s str,
    ) -> impl Iterator<Item = &'s str> + 's {
        self.objects(subject, predicate).filter_map(Object::as_literal)
    }

    /// Subjects in order of their first appearance.
    pub fn subjects(&self) -> Vec<&Resource> {
        let mut subjects: Vec<&Resource> = Vec::new();
        for triple in &self.triples {
            if !subjects.contains(&&triple.subject) {
                subjects.push(&triple.subject);
            }
        }
        subjects
    }
}
