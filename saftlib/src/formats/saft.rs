//! Загрузчик SAF-T: XML → дерево элементов.
//!
//! Имена элементов хранятся как локальные имена в нижнем регистре (префикс
//! пространства имён отбрасывается), поэтому `n1:AccountID`, `AccountID` и
//! `accountid` означают один и тот же элемент.

use crate::{
    error::{Result, SaftError},
    traits::ReadFormat,
};
use quick_xml::{events::Event, Reader};
use std::io::BufRead;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn new(local_name: &[u8]) -> Self {
        Element {
            name: String::from_utf8_lossy(local_name).to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Собственный текст элемента без пробелов по краям.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Первый потомок с таким именем, в порядке документа.
    pub fn find(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.is(name) {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// Все потомки с таким именем, в порядке документа.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect(name, &mut out);
        out
    }

    fn collect<'a>(&'a self, name: &str, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.is(name) {
                out.push(child);
            }
            child.collect(name, out);
        }
    }
}

/// Разобранный SAF-T документ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn parse(s: &str) -> Result<Document> {
        SaftXml::read(s.as_bytes())
    }

    pub fn from_reader<R: BufRead>(r: R) -> Result<Document> {
        SaftXml::read(r)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Поиск начинается с корня, сам корень тоже проверяется.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.root.is(name) {
            return Some(&self.root);
        }
        self.root.find(name)
    }
}

/// Предел вложенности: обход дерева рекурсивный.
pub const MAX_DEPTH: usize = 256;

pub struct SaftXml;

impl ReadFormat for SaftXml {
    type Output = Document;

    fn read<R: BufRead>(r: R) -> Result<Document> {
        let mut reader = Reader::from_reader(r);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    if root.is_some() {
                        return Err(SaftError::Xml("multiple root elements".into()));
                    }
                    if stack.len() >= MAX_DEPTH {
                        return Err(SaftError::Xml("nesting too deep".into()));
                    }
                    stack.push(Element::new(e.local_name().as_ref()));
                }
                Ok(Event::Empty(e)) => {
                    let el = Element::new(e.local_name().as_ref());
                    attach(&mut stack, &mut root, el)?;
                }
                Ok(Event::Text(t)) => {
                    let text = t.unescape().map_err(xml)?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(t)) => {
                    let raw = t.into_inner();
                    let text = std::str::from_utf8(&raw).map_err(xml)?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(text);
                    }
                }
                Ok(Event::End(_)) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| SaftError::Xml("unexpected closing tag".into()))?;
                    attach(&mut stack, &mut root, el)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(xml(e)),
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(SaftError::Xml(format!(
                "unexpected end of document inside <{}>",
                stack.last().map(Element::name).unwrap_or_default()
            )));
        }
        let root = root.ok_or_else(|| SaftError::Xml("document has no root element".into()))?;
        tracing::debug!(root = root.name(), "SAF-T document loaded");
        Ok(Document { root })
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => return Err(SaftError::Xml("multiple root elements".into())),
    }
    Ok(())
}

fn xml<E: std::fmt::Display>(e: E) -> SaftError {
    SaftError::Xml(e.to_string())
}
