//! # VPR Links
//!
//! Contextual navigation links for the VPR user interface.
//!
//! This crate contains:
//! - `LinkDescriptor`, the validated description of one navigation link
//! - a static catalog of named link sets (patient care, clinical documentation, referral
//!   management)
//! - a pure renderer turning any sequence of descriptors into a `LinkList` fragment, which can
//!   be embedded as typed data, serialised to JSON, or written out as HTML
//!
//! **No API concerns**: HTTP servers and command line handling belong in `api-rest`,
//! `api-shared`, and `cli`.

pub mod catalog;
pub mod constants;
pub mod descriptor;
pub mod error;
mod html;
pub mod render;

pub use catalog::{catalog, find_link_set, link_set, LinkCatalog, LinkContext, LinkSet};
pub use descriptor::LinkDescriptor;
pub use error::{LinkError, LinkResult};
pub use render::{render_links, Icon, LinkContent, LinkList, RenderedLink};
pub use vpr_types::{Href, HrefError, NonEmptyText, TextError};
