//! Compact JSON-LD for schema.org `TripleSet`s.

use std::collections::{HashMap, HashSet};

use serde_json::{json, Map, Value};

use crate::graph::vocab::{rdf, schema};
use crate::graph::{Object, Resource, TripleSet};

/// Render `graph` as a JSON-LD document with schema.org as the default vocabulary.
///
/// Nodes are nested under the first node referring to them. A blank node carries an `@id`
/// only when more than one triple refers to it.
pub fn to_json(graph: &TripleSet) -> Value {
    let mut nodes = Nodes::new(graph);

    let mut documents = vec![nodes.node(graph.subject())];
    for subject in graph.subjects() {
        if !nodes.visited.contains(subject) {
            documents.push(nodes.node(subject));
        }
    }

    let context = json!({ "@vocab": schema::NS });

    if documents.len() == 1 {
        let mut document = Map::new();
        document.insert("@context".into(), context);
        if let Value::Object(root) = documents.remove(0) {
            document.extend(root);
        }
        Value::Object(document)
    } else {
        json!({ "@context": context, "@graph": documents })
    }
}

struct Nodes<'g> {
    properties: HashMap<&'g Resource, Vec<(&'g str, &'g Object)>>,
    references: HashMap<&'g Resource, usize>,
    visited: HashSet<&'g Resource>,
}

impl<'g> Nodes<'g> {
    fn new(graph: &'g TripleSet) -> Self {
        let mut properties: HashMap<&Resource, Vec<(&str, &Object)>> = HashMap::new();
        let mut references: HashMap<&Resource, usize> = HashMap::new();

        for triple in graph.triples() {
            properties
                .entry(&triple.subject)
                .or_default()
                .push((triple.predicate, &triple.object));

            if let Object::Resource(target) = &triple.object {
                *references.entry(target).or_default() += 1;
            }
        }

        Self {
            properties,
            references,
            visited: HashSet::new(),
        }
    }

    fn node(&mut self, resource: &'g Resource) -> Value {
        self.visited.insert(resource);

        let mut object = Map::new();
        match resource {
            Resource::Iri(iri) => {
                object.insert("@id".into(), Value::String(iri.clone()));
            }
            Resource::Blank(label) if self.references.get(resource).copied().unwrap_or(0) > 1 => {
                object.insert("@id".into(), Value::String(format!("_:{}", label)));
            }
            Resource::Blank(_) => {}
        }

        let properties = self.properties.get(resource).cloned().unwrap_or_default();

        for (predicate, value) in properties {
            let (key, value) = if predicate == rdf::TYPE {
                let value = match value {
                    Object::Resource(Resource::Iri(iri)) => Value::String(term(iri)),
                    other => reference(other),
                };
                ("@type".to_string(), value)
            } else {
                let value = match value {
                    Object::Resource(target)
                        if !self.visited.contains(target)
                            && self.properties.contains_key(target) =>
                    {
                        self.node(target)
                    }
                    other => reference(other),
                };
                (term(predicate), value)
            };

            append(&mut object, key, value);
        }

        Value::Object(object)
    }
}

fn reference(object: &Object) -> Value {
    match object {
        Object::Literal(value) => Value::String(value.clone()),
        Object::Resource(Resource::Iri(iri)) => json!({ "@id": iri }),
        Object::Resource(Resource::Blank(label)) => json!({ "@id": format!("_:{}", label) }),
    }
}

/// Terms of the default vocabulary lose their namespace.
fn term(iri: &str) -> String {
    iri.strip_prefix(schema::NS).unwrap_or(iri).to_string()
}

/// A repeated key turns into an array of values.
fn append(object: &mut Map<String, Value>, key: String, value: Value) {
    match object.get_mut(&key) {
        Some(Value::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            object.insert(key, value);
        }
    }
}
