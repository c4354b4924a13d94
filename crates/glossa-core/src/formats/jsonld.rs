//! JSON-LD format.
//!
//! Writes the expanded form: an array of node objects, one per subject
//! in storage order, pretty-printed.
//!
//! Reference: <https://www.w3.org/TR/json-ld11/>

use crate::{vocab, Graph, Result, Term};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// JSON-LD format handler.
pub struct JsonLd;

impl JsonLd {
    /// Serializes the graph to pretty-printed expanded JSON-LD.
    pub fn to_string(graph: &Graph) -> Result<String> {
        let mut order: Vec<String> = Vec::new();
        let mut nodes: HashMap<String, Map<String, Value>> = HashMap::new();

        for triple in graph.triples() {
            let subject_id = match &triple.subject {
                Term::Iri(iri) => iri.clone(),
                Term::Blank(id) => format!("_:{id}"),
                Term::Literal(_) => continue,
            };

            let node = nodes.entry(subject_id.clone()).or_insert_with(|| {
                order.push(subject_id.clone());
                let mut node = Map::new();
                node.insert("@id".to_string(), Value::String(subject_id.clone()));
                node
            });

            // rdf:type with an IRI object becomes the @type keyword.
            if triple.predicate == vocab::rdf::TYPE {
                if let Some(iri) = triple.object.as_iri() {
                    push_value(node, "@type", Value::String(iri.to_string()));
                    continue;
                }
            }

            push_value(node, &triple.predicate, object_value(&triple.object));
        }

        let doc: Vec<Value> = order
            .into_iter()
            .filter_map(|id| nodes.remove(&id).map(Value::Object))
            .collect();

        Ok(serde_json::to_string_pretty(&Value::Array(doc))?)
    }
}

fn object_value(object: &Term) -> Value {
    match object {
        Term::Iri(iri) => json!({ "@id": iri }),
        Term::Blank(id) => json!({ "@id": format!("_:{id}") }),
        Term::Literal(lit) => {
            let mut value = Map::new();
            value.insert("@value".to_string(), Value::String(lit.value.clone()));
            if let Some(language) = &lit.language {
                value.insert("@language".to_string(), Value::String(language.clone()));
            } else if let Some(datatype) = &lit.datatype {
                value.insert("@type".to_string(), Value::String(datatype.clone()));
            }
            Value::Object(value)
        }
    }
}

fn push_value(node: &mut Map<String, Value>, key: &str, value: Value) {
    match node.get_mut(key) {
        Some(Value::Array(values)) => values.push(value),
        _ => {
            node.insert(key.to_string(), Value::Array(vec![value]));
        }
    }
}
