//! A small Turtle writer for `TripleSet`s.

use std::io::{self, Write};

use crate::graph::vocab::rdf;
use crate::graph::{Namespace, Object, Resource, TripleSet};

/// Write `graph` as Turtle, compacting IRIs with the graph's namespaces.
///
/// Consecutive triples about the same subject share one statement.
pub fn write<W: Write>(graph: &TripleSet, output: &mut W) -> io::Result<()> {
    let namespaces = graph.namespaces();

    for namespace in namespaces {
        writeln!(output, "@prefix {}: <{}> .", namespace.prefix, namespace.iri)?;
    }
    if !namespaces.is_empty() {
        writeln!(output)?;
    }

    let mut current: Option<&Resource> = None;

    for triple in graph.triples() {
        let predicate = if triple.predicate == rdf::TYPE {
            "a".to_string()
        } else {
            iri(triple.predicate, namespaces)
        };
        let object = object(&triple.object, namespaces);

        if current == Some(&triple.subject) {
            write!(output, " ;\n    {} {}", predicate, object)?;
        } else {
            if current.is_some() {
                writeln!(output, " .")?;
            }
            write!(
                output,
                "{} {} {}",
                resource(&triple.subject, namespaces),
                predicate,
                object
            )?;
            current = Some(&triple.subject);
        }
    }

    if current.is_some() {
        writeln!(output, " .")?;
    }

    Ok(())
}

/// Render `graph` as a Turtle document.
pub fn to_string(graph: &TripleSet) -> String {
    let mut buffer = Vec::new();
    // writing into a Vec cannot fail
    let _ = write(graph, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn object(object: &Object, namespaces: &[Namespace]) -> String {
    match object {
        Object::Resource(value) => resource(value, namespaces),
        Object::Literal(value) => format!("\"{}\"", escape(value)),
    }
}

fn resource(resource: &Resource, namespaces: &[Namespace]) -> String {
    match resource {
        Resource::Iri(value) => iri(value, namespaces),
        Resource::Blank(label) => format!("_:{}", label),
    }
}

/// A prefixed name where the local part allows it, the full IRI otherwise.
fn iri(value: &str, namespaces: &[Namespace]) -> String {
    for namespace in namespaces {
        if let Some(local) = value.strip_prefix(namespace.iri) {
            if is_local_name(local) {
                return format!("{}:{}", namespace.prefix, local);
            }
        }
    }

    format!("<{}>", escape_iri(value))
}

/// Percent-encodes the characters an IRI reference may not contain.
fn escape_iri(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c <= ' ' || "<>\"{}|^`\\".contains(c) {
            let mut bytes = [0; 4];
            for byte in c.encode_utf8(&mut bytes).bytes() {
                escaped.push_str(&format!("%{:02X}", byte));
            }
        } else {
            escaped.push(c);
        }
    }
    escaped
}

fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
