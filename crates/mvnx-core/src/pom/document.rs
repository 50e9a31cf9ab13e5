//! Minimal mutable XML tree for `pom.xml` files.
//!
//! Only what dependency editing needs is modelled: elements with ordered
//! attributes and children, text, CDATA, comments, processing instructions
//! and the doctype. Whitespace between elements is not preserved; on save the
//! whole tree is re-indented with two spaces per level.

use super::ManifestError;
use quick_xml::Reader;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

const INDENT: &str = "  ";

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Unescaped character data.
    Text(String),
    CData(String),
    Comment(String),
    /// Processing instruction or XML declaration, without `<?` and `?>`.
    Instruction(String),
    DocType(String),
}

/// An XML element: tag name, attributes in source order, and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element holding a single text child, e.g. `<version>1.0</version>`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.children.push(Node::Text(text.into()));
        element
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Child elements with the given tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |element| element.name == tag)
    }

    /// Mutable child elements with the given tag, in document order.
    pub fn children_named_mut<'a>(
        &'a mut self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        self.children.iter_mut().filter_map(move |node| match node {
            Node::Element(element) if element.name == tag => Some(element),
            _ => None,
        })
    }

    /// First child element with the given tag.
    pub fn find_child(&self, tag: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == tag)
    }

    /// First child element with the given tag, mutably.
    pub fn find_child_mut(&mut self, tag: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(element) if element.name == tag => Some(element),
            _ => None,
        })
    }

    /// Trimmed text of the first child element with the given tag.
    pub fn child_text(&self, tag: &str) -> Option<String> {
        self.find_child(tag).map(Element::text)
    }

    /// Append `child` as the last child and return it.
    pub fn push_child(&mut self, child: Element) -> &mut Element {
        self.children.push(Node::Element(child));
        let last = self.children.len() - 1;
        self.element_at(last)
    }

    /// Append a new empty element with the given tag and return it.
    pub fn create_child(&mut self, tag: impl Into<String>) -> &mut Element {
        self.push_child(Element::new(tag))
    }

    /// First child element with the given tag, appending an empty one if
    /// there is none.
    pub fn find_or_create_child(&mut self, tag: &str) -> &mut Element {
        let position = self
            .children
            .iter()
            .position(|node| matches!(node, Node::Element(element) if element.name == tag));

        match position {
            Some(index) => self.element_at(index),
            None => self.create_child(tag),
        }
    }

    /// Detach the first child element with the given tag.
    pub fn remove_child(&mut self, tag: &str) -> Option<Element> {
        self.remove_child_where(|element| element.name == tag)
    }

    /// Detach the first child element matching `predicate`.
    pub fn remove_child_where(
        &mut self,
        mut predicate: impl FnMut(&Element) -> bool,
    ) -> Option<Element> {
        let index = self
            .children
            .iter()
            .position(|node| matches!(node, Node::Element(element) if predicate(element)))?;

        match self.children.remove(index) {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text and CDATA of the direct children, trimmed.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            if let Node::Text(t) | Node::CData(t) = node {
                text.push_str(t);
            }
        }
        text.trim().to_string()
    }

    /// Replace all direct text and CDATA children with `text`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children
            .retain(|node| !matches!(node, Node::Text(_) | Node::CData(_)));
        self.children.insert(0, Node::Text(text.into()));
    }

    fn element_at(&mut self, index: usize) -> &mut Element {
        match &mut self.children[index] {
            Node::Element(element) => element,
            _ => unreachable!("child {index} of <{}> is not an element", self.name),
        }
    }
}

/// A `pom.xml` loaded into memory, bound to the path it came from.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    path: PathBuf,
    prolog: Vec<Node>,
    root: Element,
    epilog: Vec<Node>,
}

impl ManifestDocument {
    /// A document holding only `root`, to be saved at `path`.
    pub fn new(path: impl Into<PathBuf>, root: Element) -> Self {
        Self {
            path: path.into(),
            prolog: vec![Node::Instruction(
                r#"xml version="1.0" encoding="UTF-8""#.to_string(),
            )],
            root,
            epilog: Vec::new(),
        }
    }

    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if the file cannot be read and
    /// [`ManifestError::Parse`] if it is not well-formed XML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse `content`; `path` is remembered as the save target.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] on malformed XML: tokenizer errors,
    /// mismatched or unclosed tags, a missing or second root element, or text
    /// outside the root.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let fail = |message: String| ManifestError::Parse {
            path: path.clone(),
            message,
        };

        let mut reader = Reader::from_str(content);
        let mut prolog = Vec::new();
        let mut epilog = Vec::new();
        let mut root: Option<Element> = None;
        let mut open: Vec<Element> = Vec::new();

        loop {
            let event = reader.read_event().map_err(|e| {
                fail(format!(
                    "{e} (at byte {})",
                    reader.error_position()
                ))
            })?;

            let node = match event {
                Event::Start(start) => {
                    open.push(element_from_start(&start).map_err(&fail)?);
                    continue;
                }
                Event::End(end) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    let element = open
                        .pop()
                        .ok_or_else(|| fail(format!("unexpected closing tag </{name}>")))?;
                    if element.name != name {
                        return Err(fail(format!(
                            "expected </{}>, found </{name}>",
                            element.name
                        )));
                    }
                    Node::Element(element)
                }
                Event::Empty(start) => Node::Element(element_from_start(&start).map_err(&fail)?),
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| fail(e.to_string()))?;
                    Node::Text(text.into_owned())
                }
                Event::CData(data) => Node::CData(lossy(&data)),
                Event::Comment(comment) => Node::Comment(lossy(&comment)),
                Event::Decl(decl) => Node::Instruction(lossy(&decl)),
                Event::PI(pi) => Node::Instruction(lossy(&pi)),
                Event::DocType(doctype) => Node::DocType(lossy(&doctype).trim().to_string()),
                Event::Eof => break,
            };

            if let Some(parent) = open.last_mut() {
                parent.children.push(node);
                continue;
            }

            match node {
                Node::Text(text) if text.trim().is_empty() => {}
                Node::Text(text) => {
                    return Err(fail(format!(
                        "text outside the root element: {:?}",
                        text.trim()
                    )));
                }
                Node::Element(element) => {
                    if root.is_some() {
                        return Err(fail(format!(
                            "second root element <{}>",
                            element.name
                        )));
                    }
                    root = Some(element);
                }
                other if root.is_some() => epilog.push(other),
                other => prolog.push(other),
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(fail(format!("unclosed element <{}>", unclosed.name)));
        }
        let root = root.ok_or_else(|| fail("no root element".to_string()))?;

        Ok(Self {
            path,
            prolog,
            root,
            epilog,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Serialize the whole document with two-space indentation.
    ///
    /// Elements whose children are only text stay on one line, elements
    /// without content are self-closed, everything else gets one child per
    /// line.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        for node in &self.prolog {
            write_node(&mut out, node, 0);
        }
        write_element(&mut out, &self.root, 0);
        for node in &self.epilog {
            write_node(&mut out, node, 0);
        }
        out
    }

    /// Write the document back to the path it was loaded from.
    ///
    /// The file is first written to a temporary sibling and then renamed so
    /// that a failed write never truncates the existing manifest. A symlinked
    /// manifest is written through to its target, and the target's
    /// permissions carry over to the new file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if writing or renaming fails.
    pub fn save(&self) -> Result<(), ManifestError> {
        let io_err = |source| ManifestError::Io {
            path: self.path.clone(),
            source,
        };

        let target = std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let temp_path = target.with_extension("xml.tmp");
        std::fs::write(&temp_path, self.to_xml()).map_err(io_err)?;

        let replace = || -> std::io::Result<()> {
            if let Ok(metadata) = std::fs::metadata(&target) {
                std::fs::set_permissions(&temp_path, metadata.permissions())?;
            }
            std::fs::rename(&temp_path, &target)
        };
        replace().map_err(|source| {
            let _ = std::fs::remove_file(&temp_path);
            io_err(source)
        })?;

        tracing::debug!("Saved {}", self.path.display());
        Ok(())
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, String> {
    let mut element = Element::new(lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        element
            .attributes
            .push((lossy(attr.key.as_ref()), value.into_owned()));
    }
    Ok(element)
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Element(element) => write_element(out, element, depth),
        Node::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                indent(out, depth);
                out.push_str(&partial_escape(text));
                out.push('\n');
            }
        }
        Node::CData(data) => {
            indent(out, depth);
            out.push_str("<![CDATA[");
            out.push_str(data);
            out.push_str("]]>\n");
        }
        Node::Comment(comment) => {
            indent(out, depth);
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->\n");
        }
        Node::Instruction(instruction) => {
            indent(out, depth);
            out.push_str("<?");
            out.push_str(instruction);
            out.push_str("?>\n");
        }
        Node::DocType(doctype) => {
            indent(out, depth);
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype);
            out.push_str(">\n");
        }
    }
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    indent(out, depth);
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value.as_str()));
        out.push('"');
    }

    let has_structure = element
        .children
        .iter()
        .any(|node| !matches!(node, Node::Text(_) | Node::CData(_)));

    if has_structure {
        out.push_str(">\n");
        for child in &element.children {
            write_node(out, child, depth + 1);
        }
        indent(out, depth);
    } else {
        let inline = inline_content(&element.children);
        if inline.is_empty() {
            out.push_str("/>\n");
            return;
        }
        out.push('>');
        out.push_str(&inline);
    }

    out.push_str("</");
    out.push_str(&element.name);
    out.push_str(">\n");
}

fn inline_content(children: &[Node]) -> Cow<'_, str> {
    match children {
        [Node::Text(text)] => partial_escape(text.trim()),
        _ => {
            let last = children.len().saturating_sub(1);
            let mut content = String::new();
            for (i, node) in children.iter().enumerate() {
                match node {
                    Node::Text(text) => {
                        let mut text = text.as_str();
                        if i == 0 {
                            text = text.trim_start();
                        }
                        if i == last {
                            text = text.trim_end();
                        }
                        content.push_str(&partial_escape(text));
                    }
                    Node::CData(data) => {
                        content.push_str("<![CDATA[");
                        content.push_str(data);
                        content.push_str("]]>");
                    }
                    _ => {}
                }
            }
            Cow::Owned(content)
        }
    }
}
