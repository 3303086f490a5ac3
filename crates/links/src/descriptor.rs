//! Link descriptors.
//!
//! A [`LinkDescriptor`] is the unit of data describing one navigation link. Descriptors are
//! validated when constructed and cannot be changed afterwards: every field is private and the
//! `with_*` methods consume the descriptor, so they only apply while a descriptor is being
//! built.

use crate::error::{LinkError, LinkResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use vpr_types::{Href, NonEmptyText};

/// One navigation link.
///
/// Internal links point at an application path and are navigated by the host's client-side
/// router. External links point at an absolute `http(s)` URL and open in a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLinkDescriptor")]
pub struct LinkDescriptor {
    text: NonEmptyText,
    href: Href,
    external: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<NonEmptyText>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    keywords: BTreeSet<String>,
}

impl LinkDescriptor {
    /// Creates a client-side routed link.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Text` if `text` is blank, or `LinkError::Href` if `href` is not an
    /// application path starting with `/`.
    pub fn internal(text: impl AsRef<str>, href: impl AsRef<str>) -> LinkResult<Self> {
        Ok(Self {
            text: NonEmptyText::new(text)?,
            href: Href::internal(href)?,
            external: false,
            title: None,
            keywords: BTreeSet::new(),
        })
    }

    /// Creates a link that opens outside the application.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Text` if `text` is blank, or `LinkError::Href` if `href` is not an
    /// absolute `http` or `https` URL.
    pub fn external(text: impl AsRef<str>, href: impl AsRef<str>) -> LinkResult<Self> {
        Ok(Self {
            text: NonEmptyText::new(text)?,
            href: Href::external(href)?,
            external: true,
            title: None,
            keywords: BTreeSet::new(),
        })
    }

    /// Sets the tooltip text. A blank title leaves the link without a tooltip.
    pub fn with_title(mut self, title: impl AsRef<str>) -> Self {
        self.title = NonEmptyText::new(title).ok();
        self
    }

    /// Adds keyword tags. Tags are trimmed; blank tags and duplicates are dropped.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords.extend(
            keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_owned())
                .filter(|k| !k.is_empty()),
        );
        self
    }

    pub fn text(&self) -> &NonEmptyText {
        &self.text
    }

    pub fn href(&self) -> &Href {
        &self.href
    }

    pub fn is_external(&self) -> bool {
        self.external
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(NonEmptyText::as_str)
    }

    /// Keyword tags in sorted order. Metadata only; rendering ignores them.
    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }
}

/// Unvalidated wire form of a descriptor.
#[derive(Deserialize)]
struct RawLinkDescriptor {
    text: String,
    href: String,
    #[serde(default)]
    external: bool,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
}

impl TryFrom<RawLinkDescriptor> for LinkDescriptor {
    type Error = LinkError;

    fn try_from(raw: RawLinkDescriptor) -> Result<Self, Self::Error> {
        let mut descriptor = if raw.external {
            Self::external(raw.text, raw.href)?
        } else {
            Self::internal(raw.text, raw.href)?
        };
        if let Some(title) = raw.title {
            descriptor = descriptor.with_title(title);
        }
        Ok(descriptor.with_keywords(raw.keywords))
    }
}
