//! Typed lookups over a parsed HTML document.
//!
//! `Query` describes what to match (class, tag, attribute substring and their
//! compositions) and compiles down to a `scraper::Selector`. `Document` and `Node`
//! expose select-all, select-first, text and attribute access on top of it.

use crate::error::{Result, ScraperError};
use scraper::{ElementRef, Html, Selector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Element carries the given class.
    Class(String),
    /// Element has the given tag name.
    Tag(String),
    /// Attribute value contains the given substring.
    AttrContains { attr: String, value: String },
    /// Both queries match the same element.
    And(Box<Query>, Box<Query>),
    /// Element does not match the inner query.
    Not(Box<Query>),
    /// Right side matches anywhere below the left side.
    Descendant(Box<Query>, Box<Query>),
    /// Right side matches a direct child of the left side.
    Child(Box<Query>, Box<Query>),
}

impl Query {
    pub fn class(name: &str) -> Self {
        Query::Class(name.to_string())
    }

    pub fn tag(name: &str) -> Self {
        Query::Tag(name.to_string())
    }

    pub fn attr_contains(attr: &str, value: &str) -> Self {
        Query::AttrContains {
            attr: attr.to_string(),
            value: value.to_string(),
        }
    }

    pub fn and(self, other: Query) -> Self {
        Query::And(Box::new(self), Box::new(other))
    }

    pub fn not(self) -> Self {
        Query::Not(Box::new(self))
    }

    pub fn descendant(self, inner: Query) -> Self {
        Query::Descendant(Box::new(self), Box::new(inner))
    }

    pub fn child(self, inner: Query) -> Self {
        Query::Child(Box::new(self), Box::new(inner))
    }

    /// Renders the query as a CSS selector string.
    pub fn to_css(&self) -> String {
        match self {
            Query::Class(name) => format!(".{}", name),
            Query::Tag(name) => name.clone(),
            Query::AttrContains { attr, value } => {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                format!("[{}*=\"{}\"]", attr, escaped)
            }
            // A tag name has to lead a compound selector
            Query::And(left, right) => match right.as_ref() {
                Query::Tag(_) => format!("{}{}", right.to_css(), left.to_css()),
                _ => format!("{}{}", left.to_css(), right.to_css()),
            },
            Query::Not(inner) => format!(":not({})", inner.to_css()),
            Query::Descendant(outer, inner) => format!("{} {}", outer.to_css(), inner.to_css()),
            Query::Child(outer, inner) => format!("{} > {}", outer.to_css(), inner.to_css()),
        }
    }

    pub fn compile(&self) -> Result<CompiledQuery> {
        let css = self.to_css();
        let selector = Selector::parse(&css).map_err(|_| ScraperError::Selector(css.clone()))?;
        Ok(CompiledQuery { css, selector })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledQuery {
    css: String,
    selector: Selector,
}

impl CompiledQuery {
    pub fn css(&self) -> &str {
        &self.css
    }
}

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    pub fn select_all(&self, query: &CompiledQuery) -> Vec<Node<'_>> {
        self.html.select(&query.selector).map(Node::new).collect()
    }

    pub fn select_first(&self, query: &CompiledQuery) -> Option<Node<'_>> {
        self.html.select(&query.selector).next().map(Node::new)
    }
}

/// An element inside a `Document`. Lookups only search below the node itself.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    pub fn select_all(&self, query: &CompiledQuery) -> Vec<Node<'a>> {
        self.element.select(&query.selector).map(Node::new).collect()
    }

    pub fn select_first(&self, query: &CompiledQuery) -> Option<Node<'a>> {
        self.element.select(&query.selector).next().map(Node::new)
    }

    /// All descendant text, concatenated as-is.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Descendant text with each fragment trimmed and empty fragments dropped.
    pub fn stripped_text(&self) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}
