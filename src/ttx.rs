//! Reading and writing TTX, the XML dump format of the fontTools `ttx` tool.
use std::str;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};
use crate::node::{Attributes, Declaration, Element, Node, Tree};

/// Parse a TTX document.
///
/// Comments and whitespace are kept as nodes so that writing the tree back out
/// reproduces the original layout.
pub fn parse(xml: &str) -> Result<Tree> {
    let mut reader = Reader::from_str(xml);
    let mut tree = Tree::default();
    let mut stack: Vec<Element> = vec![];

    loop {
        match reader.read_event()? {
            Event::Decl(decl) => {
                if !tree.nodes.is_empty() || !stack.is_empty() {
                    return Err(Error::MalformedDocument(
                        "XML declaration is not at the start".to_string(),
                    ));
                }
                tree.declaration = Some(declaration(&decl)?);
            }
            Event::Start(start) => stack.push(element(&start)?),
            Event::Empty(start) => {
                let e = element(&start)?;
                append(&mut tree, &mut stack, Node::Element(e));
            }
            Event::End(_) => {
                let e = stack.pop().ok_or_else(|| {
                    Error::MalformedDocument("closing tag without opening tag".to_string())
                })?;
                append(&mut tree, &mut stack, Node::Element(e));
            }
            Event::Text(text) => {
                let text = text.unescape()?.into_owned();
                append(&mut tree, &mut stack, Node::Text(text));
            }
            Event::CData(cdata) => {
                let text = str::from_utf8(&cdata)?.to_string();
                append(&mut tree, &mut stack, Node::Text(text));
            }
            Event::Comment(comment) => {
                let comment = str::from_utf8(&comment)?.to_string();
                append(&mut tree, &mut stack, Node::Comment(comment));
            }
            Event::PI(_) | Event::DocType(_) => {
                log::debug!("Dropping processing instruction or doctype");
            }
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(Error::MalformedDocument(format!(
            "<{}> is never closed",
            unclosed.name
        )));
    }
    match tree.nodes.iter().filter(|n| n.is_element()).count() {
        1 => Ok(tree),
        0 => Err(Error::MalformedDocument("no root element".to_string())),
        n => Err(Error::MalformedDocument(format!(
            "expected one root element, found {}",
            n
        ))),
    }
}

fn append(tree: &mut Tree, stack: &mut [Element], node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => tree.nodes.push(node),
    }
}

fn declaration(decl: &BytesDecl) -> Result<Declaration> {
    let version = str::from_utf8(&decl.version()?)?.to_string();
    let encoding = match decl.encoding() {
        Some(e) => Some(str::from_utf8(&e?)?.to_string()),
        None => None,
    };
    let standalone = match decl.standalone() {
        Some(s) => Some(str::from_utf8(&s?)?.to_string()),
        None => None,
    };
    Ok(Declaration {
        version,
        encoding,
        standalone,
    })
}

fn element(start: &BytesStart) -> Result<Element> {
    let name = str::from_utf8(start.name().as_ref())?.to_string();
    let mut attributes = Attributes::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attributes.insert(key, value);
    }
    Ok(Element {
        name,
        attributes,
        children: vec![],
    })
}

/// Serialize a tree back to TTX.
pub fn to_string(tree: &Tree) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    if let Some(decl) = &tree.declaration {
        writer.write_event(Event::Decl(BytesDecl::new(
            &decl.version,
            decl.encoding.as_deref(),
            decl.standalone.as_deref(),
        )))?;
    }
    for node in &tree.nodes {
        write_node(&mut writer, node)?;
    }
    String::from_utf8(writer.into_inner()).map_err(|e| Error::Utf8(e.utf8_error()))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<()> {
    match node {
        Node::Element(e) => {
            let mut start = BytesStart::new(e.name.as_str());
            for (key, value) in &e.attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }
            if e.children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for child in &e.children {
                    write_node(writer, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(e.name.as_str())))?;
            }
        }
        Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
        Node::Comment(c) => writer.write_event(Event::Comment(BytesText::from_escaped(c.as_str())))?,
    }
    Ok(())
}
