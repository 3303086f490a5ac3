//! Wire types shared by the REST API and the CLI.
//!
//! These mirror the `vpr-links` domain types with plain fields so they can carry OpenAPI
//! schemas. Conversions into the domain go through the same validation as
//! `LinkDescriptor`'s constructors.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vpr_links::{LinkDescriptor, LinkError, LinkList, LinkSet, RenderedLink};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// One link descriptor on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkDto {
    pub text: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl From<&LinkDescriptor> for LinkDto {
    fn from(link: &LinkDescriptor) -> Self {
        Self {
            text: link.text().to_string(),
            href: link.href().to_string(),
            external: link.is_external(),
            title: link.title().map(str::to_owned),
            keywords: link.keywords().iter().cloned().collect(),
        }
    }
}

impl TryFrom<LinkDto> for LinkDescriptor {
    type Error = LinkError;

    fn try_from(dto: LinkDto) -> Result<Self, Self::Error> {
        let link = if dto.external {
            LinkDescriptor::external(&dto.text, &dto.href)?
        } else {
            LinkDescriptor::internal(&dto.text, &dto.href)?
        };
        let link = match dto.title {
            Some(title) => link.with_title(title),
            None => link,
        };
        Ok(link.with_keywords(dto.keywords))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListLinkSetsRes {
    pub names: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkSetRes {
    pub name: String,
    pub links: Vec<LinkDto>,
}

impl From<&LinkSet> for LinkSetRes {
    fn from(set: &LinkSet) -> Self {
        Self {
            name: set.name().to_owned(),
            links: set.links().iter().map(LinkDto::from).collect(),
        }
    }
}

/// Request to render an ad-hoc sequence of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RenderReq {
    pub links: Vec<LinkDto>,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl RenderReq {
    /// Validates every descriptor, stopping at the first invalid one.
    pub fn into_descriptors(self) -> Result<Vec<LinkDescriptor>, LinkError> {
        self.links.into_iter().map(LinkDescriptor::try_from).collect()
    }
}

/// One rendered link on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RenderedLinkDto {
    /// `routed` or `external`.
    pub kind: String,
    pub key: usize,
    pub href: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

impl From<&RenderedLink> for RenderedLinkDto {
    fn from(item: &RenderedLink) -> Self {
        let content = item.content();
        Self {
            kind: if item.is_external() { "external" } else { "routed" }.to_owned(),
            key: content.key(),
            href: content.href().to_owned(),
            label: content.label().to_owned(),
            title: content.title().map(str::to_owned),
            icon: item.icon().name().to_owned(),
            target: item.target().map(str::to_owned),
            rel: item.rel().map(str::to_owned),
        }
    }
}

/// A rendered link list, as structured items and as an HTML fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RenderRes {
    pub class: String,
    pub items: Vec<RenderedLinkDto>,
    pub html: String,
}

impl From<&LinkList> for RenderRes {
    fn from(list: &LinkList) -> Self {
        Self {
            class: list.class().to_owned(),
            items: list.items().iter().map(RenderedLinkDto::from).collect(),
            html: list.to_html(),
        }
    }
}
