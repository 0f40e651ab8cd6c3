use std::fmt::{Display, Formatter, Result as FmtResult};

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::optional::Optional;
use crate::result::Result;

/// An element held by a [`Registry`], addressable by tag and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The tag naming the kind of element.
    pub tag: String,
    /// An identifier unique within its registry, if the element carries one.
    pub id: Optional<String>,
    /// The element's content.
    pub content: String,
}

impl Element {
    /// Creates an element without an id.
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: Optional::None,
            content: content.into(),
        }
    }

    /// Sets the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Optional::Some(id.into());
        self
    }
}

/// The errors which can be returned when [parsing](Selector::parse) a selector.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("selector `{0}` is missing an id after `#`")]
    EmptyId(String),
    #[error("invalid character `{found}` in selector `{selector}`")]
    InvalidCharacter { selector: String, found: char },
}

/// A parsed element selector.
///
/// The accepted forms mirror the usual query syntax: a tag (`div`), an id
/// (`#app`), or both (`div#app`). Segments are restricted to ASCII
/// alphanumerics, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Optional<String>,
    id: Optional<String>,
}

impl Selector {
    /// Parses a selector out of its textual form.
    ///
    /// Malformed input is a domain failure, reported through the error
    /// channel rather than a panic.
    pub fn parse(raw: &str) -> Result<Self, SelectorError> {
        if raw.is_empty() {
            return Result::Err(SelectorError::Empty);
        }

        if let Some(found) = raw.chars().find(|c| !is_segment_char(*c) && *c != '#') {
            return Result::Err(SelectorError::InvalidCharacter {
                selector: raw.to_string(),
                found,
            });
        }

        match raw.split_once('#') {
            Some((_, id)) if id.is_empty() => Result::Err(SelectorError::EmptyId(raw.to_string())),
            Some((_, id)) if id.contains('#') => Result::Err(SelectorError::InvalidCharacter {
                selector: raw.to_string(),
                found: '#',
            }),
            Some((tag, id)) => Result::Ok(Self {
                tag: segment(tag),
                id: Optional::Some(id.to_string()),
            }),
            None => Result::Ok(Self {
                tag: Optional::Some(raw.to_string()),
                id: Optional::None,
            }),
        }
    }

    /// The tag constraint, if the selector has one.
    pub fn tag(&self) -> &Optional<String> {
        &self.tag
    }

    /// The id constraint, if the selector has one.
    pub fn id(&self) -> &Optional<String> {
        &self.id
    }

    /// Returns `true` if the element satisfies every constraint the
    /// selector carries.
    pub fn matches(&self, element: &Element) -> bool {
        let tag_matches = match &self.tag {
            Optional::Some(tag) => element.tag == *tag,
            Optional::None => true,
        };
        let id_matches = match &self.id {
            Optional::Some(id) => matches!(&element.id, Optional::Some(candidate) if candidate == id),
            Optional::None => true,
        };

        tag_matches && id_matches
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Optional::Some(tag) = &self.tag {
            write!(f, "{}", tag)?;
        }
        if let Optional::Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        Ok(())
    }
}

fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn segment(part: &str) -> Optional<String> {
    if part.is_empty() {
        Optional::None
    } else {
        Optional::Some(part.to_string())
    }
}

/// A source of elements the lookup convention runs against.
///
/// [`Registry`] is the in-process implementation; any other environment
/// query primitive can stand in by implementing this trait.
#[async_trait]
pub trait ElementSource {
    /// Looks up the first element matching the selector.
    async fn find_element(&self, selector: &Selector) -> Optional<Element>;
}

/// An element store safe to share across tasks.
///
/// Lookups clone the matched element out, so no lock is ever held by a
/// caller.
pub struct Registry {
    elements: RwLock<Vec<Element>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            elements: RwLock::new(Vec::new()),
        }
    }

    /// Appends an element to the registry.
    pub fn insert(&self, element: Element) {
        self.elements.write().push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Returns the first element matching the selector, or
    /// [`None`](Optional::None) if no element does.
    pub fn find(&self, selector: &Selector) -> Optional<Element> {
        let elements = self.elements.read();

        match elements.iter().find(|element| selector.matches(element)) {
            Some(element) => {
                debug!("Selector [{}] matched element [{}]", selector, element.tag);
                Optional::Some(element.clone())
            }
            None => {
                debug!("Selector [{}] matched no element", selector);
                Optional::None
            }
        }
    }

    /// Parses the selector and returns the first matching element.
    ///
    /// An absent element is not a failure; it comes back as
    /// [`Ok(None)`](Optional::None). Only a malformed selector reaches the
    /// error channel.
    pub fn query(&self, raw: &str) -> Result<Optional<Element>, SelectorError> {
        let parsed = Selector::parse(raw);
        if parsed.is_err() {
            // No selector was produced, only the error travels on.
            return parsed.transform();
        }

        Result::Ok(self.find(&parsed.value()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ElementSource for Registry {
    async fn find_element(&self, selector: &Selector) -> Optional<Element> {
        self.find(selector)
    }
}
