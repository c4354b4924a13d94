//! Minimal HTML pages.
//!
//! Rendered inline rather than through a template engine; these pages
//! are a thin human-readable view over the same query results the JSON
//! API serves.

use glossa_skos::{ConceptDetail, ConceptSummary};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::fmt::Write;

/// Renders the index page with an optional active search query.
pub(crate) fn index(query: Option<&str>, results: &[ConceptSummary]) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>Vocabulary</h1>\n\
         <form method=\"get\" action=\"/\">\
         <input type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Search concepts\">\
         <button type=\"submit\">Search</button></form>\n",
        escape(query.unwrap_or(""))
    );

    if results.is_empty() {
        body.push_str("<p>No concepts found.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for concept in results {
            let label = concept.pref_label.as_deref().unwrap_or(&concept.iri);
            let _ = write!(
                body,
                "<li><a href=\"/c/{}\">{}</a>",
                encode_iri(&concept.iri),
                escape(label)
            );
            if let Some(definition) = &concept.definition {
                let _ = write!(body, " <small>{}</small>", escape(definition));
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p><a href=\"/download/ttl\">Download (Turtle)</a></p>\n");
    page("Vocabulary", &body)
}

/// Renders one concept page.
pub(crate) fn concept(detail: &ConceptDetail) -> String {
    let title = detail.best_pref_label.as_deref().unwrap_or(&detail.iri);
    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>{}</h1>\n<p><code>{}</code></p>\n",
        escape(title),
        escape(&detail.iri)
    );

    if let Some(definition) = &detail.best_definition {
        let _ = write!(body, "<p>{}</p>\n", escape(definition));
    }

    literal_section(&mut body, "Preferred labels", &detail.pref_label);
    literal_section(&mut body, "Alternative labels", &detail.alt_label);
    literal_section(&mut body, "Definitions", &detail.definition);

    relation_section(&mut body, "Broader", &detail.broader);
    relation_section(&mut body, "Narrower", &detail.narrower);
    relation_section(&mut body, "Related", &detail.related);
    relation_section(&mut body, "In scheme", &detail.in_scheme);

    if !detail.notation.is_empty() {
        let _ = write!(
            body,
            "<h2>Notation</h2>\n<p>{}</p>\n",
            escape(&detail.notation.join(", "))
        );
    }

    body.push_str("<p><a href=\"/\">Back to index</a></p>\n");
    page(title, &body)
}

/// Renders the 404 page for an unknown concept IRI.
pub(crate) fn not_found(iri: &str) -> String {
    let body = format!(
        "<h1>Concept not found</h1>\n<p><code>{}</code></p>\n\
         <p><a href=\"/\">Back to index</a></p>\n",
        escape(iri)
    );
    page("Concept not found", &body)
}

fn literal_section(
    body: &mut String,
    heading: &str,
    values: &std::collections::BTreeMap<String, Vec<String>>,
) {
    if values.is_empty() {
        return;
    }
    let _ = write!(body, "<h2>{}</h2>\n<dl>\n", escape(heading));
    for (language, texts) in values {
        let _ = write!(
            body,
            "<dt>{}</dt><dd>{}</dd>\n",
            escape(language),
            escape(&texts.join("; "))
        );
    }
    body.push_str("</dl>\n");
}

fn relation_section(body: &mut String, heading: &str, iris: &[String]) {
    if iris.is_empty() {
        return;
    }
    let _ = write!(body, "<h2>{}</h2>\n<ul>\n", escape(heading));
    for iri in iris {
        let _ = write!(
            body,
            "<li><a href=\"/c/{}\">{}</a></li>\n",
            encode_iri(iri),
            escape(iri)
        );
    }
    body.push_str("</ul>\n");
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Percent-encodes an IRI for use as a single path segment.
pub(crate) fn encode_iri(iri: &str) -> String {
    utf8_percent_encode(iri, NON_ALPHANUMERIC).to_string()
}

/// Escapes text for HTML element and attribute content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
