//! Intermediate node tree and the lenient markup layer.
//!
//! [`Node`] is the tree shape the builder emits and the parser consumes:
//! element name, ordered attributes, ordered children, optional text payload.
//! It never leaves the codec.
//!
//! This module also owns both crossings between node trees and markup text:
//!
//! - [`Node::render`] writes a tree out through [`quick_xml::Writer`];
//!   indented and compact output parse identically.
//! - [`parse_document`] reads arbitrary text through [`quick_xml::Reader`]
//!   into a best-effort tree. The reader never resolves external entities
//!   (quick-xml has no entity resolution), unknown entity references fall
//!   back to their literal text, pure-whitespace text nodes are dropped, and
//!   mismatched or unclosed tags are repaired instead of rejected. Only a
//!   document with no root element at all is a hard failure.

use crate::error::{Error, Result};
use crate::tag::DEPTH_LIMIT;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io;

/// Leaf text payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeText {
    /// Plain character data, entity-escaped on output.
    Raw(String),
    /// Character data wrapped in a CDATA section, emitted verbatim.
    CData(String),
}

impl NodeText {
    pub(crate) fn content(&self) -> &str {
        match self {
            NodeText::Raw(s) | NodeText::CData(s) => s,
        }
    }
}

/// One element of the intermediate tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub text: Option<NodeText>,
    /// A comment appeared before any text or element content. The parser
    /// reads such a node as an empty string.
    pub leading_comment: bool,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
            leading_comment: false,
        }
    }

    /// An unnamed node whose children render as top-level siblings.
    pub(crate) fn fragment() -> Self {
        Node::new("")
    }

    pub(crate) fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.push((name.to_string(), value.into()));
    }

    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Renders the tree to markup text, with an XML declaration up front.
    pub(crate) fn render(&self, pretty: bool) -> Result<String> {
        let mut buf = Vec::new();
        let mut writer = if pretty {
            Writer::new_with_indent(&mut buf, b' ', 2)
        } else {
            Writer::new(&mut buf)
        };
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(Error::render)?;
        if self.name.is_empty() {
            for child in &self.children {
                write_node(&mut writer, child)?;
            }
        } else {
            write_node(&mut writer, self)?;
        }
        drop(writer);
        String::from_utf8(buf).map_err(Error::render)
    }
}

fn write_node<W: io::Write>(writer: &mut Writer<W>, node: &Node) -> Result<()> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.children.is_empty() && node.text.is_none() {
        writer
            .write_event(Event::Empty(start))
            .map_err(Error::render)?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(Error::render)?;
    if let Some(text) = &node.text {
        match text {
            NodeText::Raw(s) => writer
                .write_event(Event::Text(BytesText::new(s)))
                .map_err(Error::render)?,
            NodeText::CData(s) => write_cdata(writer, s)?,
        }
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(Error::render)?;
    Ok(())
}

/// Writes a CDATA section, splitting around any `]]>` in the payload so the
/// section terminator never appears inside one section. The parser rejoins
/// adjacent sections, so the payload survives byte-for-byte.
fn write_cdata<W: io::Write>(writer: &mut Writer<W>, payload: &str) -> Result<()> {
    let mut rest = payload;
    while let Some(idx) = rest.find("]]>") {
        let (head, tail) = rest.split_at(idx + 2);
        writer
            .write_event(Event::CData(BytesCData::new(head)))
            .map_err(Error::render)?;
        rest = tail;
    }
    writer
        .write_event(Event::CData(BytesCData::new(rest)))
        .map_err(Error::render)?;
    Ok(())
}

/// Parses arbitrary text into a best-effort node tree.
///
/// Returns [`Error::NoRoot`] when no root element can be found and
/// [`Error::Parse`] when the reader fails before producing one; any input
/// that yields at least a root element produces a tree.
pub(crate) fn parse_document(input: &str) -> Result<Node> {
    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if stack.len() >= DEPTH_LIMIT {
                    return Err(Error::DepthLimit(DEPTH_LIMIT));
                }
                stack.push(node_from_start(&start));
            }
            Ok(Event::Empty(start)) => {
                let node = node_from_start(&start);
                attach(node, &mut stack, &mut root);
            }
            Ok(Event::End(_)) => {
                if let Some(node) = stack.pop() {
                    attach(node, &mut stack, &mut root);
                }
            }
            Ok(Event::Text(text)) => {
                let content = text
                    .decode()
                    .map(|cow| cow.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(text.as_ref()).into_owned());
                if content.trim().is_empty() {
                    continue;
                }
                if let Some(current) = stack.last_mut() {
                    append_text(current, &content, false);
                }
            }
            Ok(Event::CData(cdata)) => {
                let content = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                if let Some(current) = stack.last_mut() {
                    append_text(current, &content, true);
                }
            }
            Ok(Event::GeneralRef(reference)) => {
                // Unresolvable references stay literal; resolution never
                // touches the filesystem or network.
                let name = String::from_utf8_lossy(reference.as_ref()).into_owned();
                let content = resolve_entity(&name).unwrap_or_else(|| format!("&{};", name));
                if let Some(current) = stack.last_mut() {
                    append_text(current, &content, false);
                }
            }
            Ok(Event::Comment(_)) => {
                if let Some(current) = stack.last_mut() {
                    if current.children.is_empty() && current.text.is_none() {
                        current.leading_comment = true;
                    }
                }
            }
            Ok(Event::Decl(_)) | Ok(Event::PI(_)) | Ok(Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => {
                // Best effort: keep whatever tree exists, fail only when
                // nothing was parsed at all.
                if root.is_none() && stack.is_empty() {
                    return Err(Error::parse(e));
                }
                break;
            }
        }
    }

    // Close any elements left open by truncated input.
    while let Some(node) = stack.pop() {
        attach(node, &mut stack, &mut root);
    }

    root.ok_or(Error::NoRoot)
}

fn node_from_start(start: &BytesStart<'_>) -> Node {
    let mut node = Node::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes().with_checks(false).flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map(|cow| cow.into_owned())
            .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
        node.attributes.push((key, value));
    }
    node
}

fn attach(node: Node, stack: &mut Vec<Node>, root: &mut Option<Node>) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_none() {
        *root = Some(node);
    }
    // Content after the first root is ignored.
}

/// Captures leaf text. Text arriving after element children is mixed-content
/// tail and is dropped; adjacent text and CDATA runs are rejoined.
fn append_text(node: &mut Node, content: &str, cdata: bool) {
    if !node.children.is_empty() {
        return;
    }
    match &mut node.text {
        Some(NodeText::Raw(existing)) | Some(NodeText::CData(existing)) => {
            existing.push_str(content);
        }
        None => {
            node.text = Some(if cdata {
                NodeText::CData(content.to_string())
            } else {
                NodeText::Raw(content.to_string())
            });
        }
    }
}

fn resolve_entity(name: &str) -> Option<String> {
    match name {
        "amp" => return Some("&".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        _ => {}
    }
    let digits = name.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}
