// SPDX-License-Identifier: MPL-2.0
//! XHTML reading and writing for [`Document`].
//!
//! Pages must be well-formed enough for an XML tokenizer, with two HTML
//! allowances:
//!
//! - void elements (`<meta>`, `<img>`, `<br>`, ...) may be left unclosed
//! - attributes may be unquoted or valueless
//!
//! Text containing entities XML does not define (`&nbsp;`) is kept verbatim.

use super::dom::{Document, Node};
use crate::application::port::{DocumentAccess, ElementId};
use crate::error::{Error, Result};
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Tag of the temporary element a whole page is parsed into.
const PAGE_HOST: &str = "#page";

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}

// =============================================================================
// Reading
// =============================================================================

/// Parses a whole page. The first top-level element becomes the root.
///
/// # Errors
///
/// Returns [`Error::Markup`] on a tokenizer error or when the page has no
/// element at all.
pub fn parse(source: &str) -> Result<Document> {
    let mut document = Document::with_root(PAGE_HOST);
    let host = document.root();
    let doctype = build(&mut document, host, source)?;

    let root = document
        .child_elements(host)
        .into_iter()
        .next()
        .ok_or_else(|| Error::Markup("page has no root element".to_string()))?;
    document.set_root(root);
    document.set_doctype(doctype);
    Ok(document)
}

/// Parses `fragment` and appends the resulting nodes to `parent`.
///
/// On error, nodes parsed before the failure remain appended.
pub(crate) fn parse_fragment_into(
    document: &mut Document,
    parent: ElementId,
    fragment: &str,
) -> Result<()> {
    build(document, parent, fragment).map(|_| ())
}

/// Tokenizes `source` into children of `parent` and returns the doctype, if any.
fn build(document: &mut Document, parent: ElementId, source: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(source);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut open = vec![parent];
    let mut doctype = None;

    loop {
        let current = open.last().copied().unwrap_or(parent);
        let event = reader.read_event()?;

        match event {
            Event::Start(start) => {
                let element = open_element(document, current, &start)?;
                if !document.tag(element).is_some_and(is_void) {
                    open.push(element);
                }
            }
            Event::Empty(start) => {
                open_element(document, current, &start)?;
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                // Stray end tags are dropped; a match closes everything above it.
                let matched = open
                    .iter()
                    .skip(1)
                    .rposition(|element| document.tag(*element).is_some_and(|tag| tag.eq_ignore_ascii_case(&name)));
                if let Some(position) = matched {
                    open.truncate(position + 1);
                }
            }
            Event::Text(text) => match text.unescape() {
                Ok(unescaped) => document.append_text(current, &unescaped),
                Err(_) => document.append_raw(current, &String::from_utf8_lossy(&text)),
            },
            Event::CData(data) => {
                document.append_text(current, &String::from_utf8_lossy(&data));
            }
            Event::Comment(comment) => {
                let raw = format!("<!--{}-->", String::from_utf8_lossy(&comment));
                document.append_raw(current, &raw);
            }
            Event::DocType(declaration) => {
                doctype = Some(String::from_utf8_lossy(&declaration).trim().to_string());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(doctype)
}

fn open_element(
    document: &mut Document,
    parent: ElementId,
    start: &BytesStart<'_>,
) -> Result<ElementId> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let element = document.append_element(parent, &tag);
    for attribute in start.html_attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = match attribute.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attribute.value).into_owned(),
        };
        document.set_attribute(element, &name, &value);
    }
    Ok(element)
}

// =============================================================================
// Writing
// =============================================================================

/// Serializes the whole document, doctype first.
#[must_use]
pub fn render(document: &Document) -> String {
    let mut out = String::new();
    if let Some(doctype) = document.doctype() {
        out.push_str("<!DOCTYPE ");
        out.push_str(doctype);
        out.push_str(">\n");
    }
    render_nodes(document, &[document.root().index()], &mut out);
    out
}

/// Serializes the children of `element` (its inner markup).
#[must_use]
pub fn render_children(document: &Document, element: ElementId) -> String {
    let mut out = String::new();
    if let Some(Node::Element(data)) = document.node(element.index()) {
        render_nodes(document, &data.children, &mut out);
    }
    out
}

enum Step {
    Open(usize),
    Close(usize),
}

/// Serializes `nodes` and their subtrees with an explicit stack, so nesting
/// depth is bounded by memory rather than by the call stack.
fn render_nodes(document: &Document, nodes: &[usize], out: &mut String) {
    let mut stack: Vec<Step> = nodes.iter().rev().map(|index| Step::Open(*index)).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Close(index) => {
                if let Some(Node::Element(data)) = document.node(index) {
                    out.push_str("</");
                    out.push_str(&data.tag);
                    out.push('>');
                }
            }
            Step::Open(index) => match document.node(index) {
                Some(Node::Text(text)) => out.push_str(&partial_escape(text.as_str())),
                Some(Node::Raw(raw)) => out.push_str(raw),
                Some(Node::Element(data)) => {
                    out.push('<');
                    out.push_str(&data.tag);
                    for (name, value) in &data.attributes {
                        out.push(' ');
                        out.push_str(name);
                        out.push_str("=\"");
                        out.push_str(&escape(value.as_str()));
                        out.push('"');
                    }
                    if data.children.is_empty() && is_void(&data.tag) {
                        out.push_str(" />");
                        continue;
                    }
                    out.push('>');
                    stack.push(Step::Close(index));
                    stack.extend(data.children.iter().rev().map(|child| Step::Open(*child)));
                }
                Some(Node::Vacant) | None => {}
            },
        }
    }
}
