//! Link list rendering.
//!
//! [`render_links`] turns an ordered sequence of [`LinkDescriptor`]s into a [`LinkList`]: a
//! vertically stacked container holding one [`RenderedLink`] per descriptor, in input order.
//! Each descriptor is dispatched to one of two variants on its `external` flag:
//!
//! - `RenderedLink::Routed`: navigated by the host's client-side router, suffixed with the
//!   forward icon.
//! - `RenderedLink::External`: opened in a new browsing context with `noopener noreferrer`,
//!   suffixed with the external icon.
//!
//! Rendering is a pure function of its input. It never fails, never reorders, filters or
//! deduplicates, and leaves the input untouched.

use crate::constants::{
    EXTERNAL_ICON_NAME, EXTERNAL_REL, EXTERNAL_TARGET, FORWARD_ICON_NAME, LINK_LIST_BASE_CLASS,
};
use crate::descriptor::LinkDescriptor;
use serde::Serialize;

/// The suffix glyph requested from the host's icon capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    ExternalLink,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::ArrowRight => FORWARD_ICON_NAME,
            Icon::ExternalLink => EXTERNAL_ICON_NAME,
        }
    }
}

/// Fields shared by both link variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkContent {
    key: usize,
    href: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl LinkContent {
    /// Position of the link within its render pass.
    pub fn key(&self) -> usize {
        self.key
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Tooltip text, if the descriptor had a title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// One rendered navigable element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedLink {
    Routed(LinkContent),
    External(LinkContent),
}

impl RenderedLink {
    fn from_descriptor(key: usize, descriptor: &LinkDescriptor) -> Self {
        let content = LinkContent {
            key,
            href: descriptor.href().as_str().to_owned(),
            label: descriptor.text().as_str().to_owned(),
            title: descriptor.title().map(str::to_owned),
        };
        if descriptor.is_external() {
            RenderedLink::External(content)
        } else {
            RenderedLink::Routed(content)
        }
    }

    pub fn content(&self) -> &LinkContent {
        match self {
            RenderedLink::Routed(content) | RenderedLink::External(content) => content,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, RenderedLink::External(_))
    }

    pub fn icon(&self) -> Icon {
        match self {
            RenderedLink::Routed(_) => Icon::ArrowRight,
            RenderedLink::External(_) => Icon::ExternalLink,
        }
    }

    /// Browsing context the link opens in; `None` for routed links.
    pub fn target(&self) -> Option<&'static str> {
        self.is_external().then_some(EXTERNAL_TARGET)
    }

    /// Link relation attributes; `None` for routed links.
    pub fn rel(&self) -> Option<&'static str> {
        self.is_external().then_some(EXTERNAL_REL)
    }
}

/// A rendered, vertically stacked list of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkList {
    class: String,
    items: Vec<RenderedLink>,
}

impl LinkList {
    /// The container's class: the base class followed by the caller's class name, if any.
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn items(&self) -> &[RenderedLink] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Renders `links` into a [`LinkList`].
///
/// `class_name` is appended to the base list class; pass `""` for none. An empty `links` slice
/// yields an empty container.
pub fn render_links(links: &[LinkDescriptor], class_name: &str) -> LinkList {
    let class_name = class_name.trim();
    let class = if class_name.is_empty() {
        LINK_LIST_BASE_CLASS.to_owned()
    } else {
        format!("{LINK_LIST_BASE_CLASS} {class_name}")
    };

    let items: Vec<RenderedLink> = links
        .iter()
        .enumerate()
        .map(|(key, descriptor)| RenderedLink::from_descriptor(key, descriptor))
        .collect();

    tracing::debug!(
        count = items.len(),
        external = items.iter().filter(|item| item.is_external()).count(),
        "rendered link list"
    );

    LinkList { class, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{link_set, LinkContext};
    use proptest::prelude::*;

    fn internal(text: &str, href: &str) -> LinkDescriptor {
        LinkDescriptor::internal(text, href).expect("valid internal link")
    }

    fn external(text: &str, href: &str) -> LinkDescriptor {
        LinkDescriptor::external(text, href).expect("valid external link")
    }

    #[test]
    fn test_internal_link_is_routed_with_forward_icon() {
        let list = render_links(&[internal("X", "/a")], "");
        assert_eq!(list.len(), 1);

        let item = &list.items()[0];
        assert!(matches!(item, RenderedLink::Routed(_)));
        assert_eq!(item.content().href(), "/a");
        assert_eq!(item.content().label(), "X");
        assert_eq!(item.icon(), Icon::ArrowRight);
        assert_eq!(item.target(), None);
        assert_eq!(item.rel(), None);
        assert_eq!(item.content().title(), None);
    }

    #[test]
    fn test_external_link_opens_new_context_with_external_icon() {
        let link = external("Y", "https://ex.org").with_title("Ext");
        let list = render_links(&[link], "");
        assert_eq!(list.len(), 1);

        let item = &list.items()[0];
        assert!(matches!(item, RenderedLink::External(_)));
        assert_eq!(item.content().href(), "https://ex.org");
        assert_eq!(item.content().label(), "Y");
        assert_eq!(item.content().title(), Some("Ext"));
        assert_eq!(item.target(), Some("_blank"));
        assert_eq!(item.rel(), Some("noopener noreferrer"));
        assert_eq!(item.icon(), Icon::ExternalLink);
    }

    #[test]
    fn test_empty_input_renders_empty_container() {
        let list = render_links(&[], "");
        assert!(list.is_empty());
        assert_eq!(list.class(), LINK_LIST_BASE_CLASS);
    }

    #[test]
    fn test_class_name_is_appended_to_base() {
        let list = render_links(&[], "  sidebar-links ");
        assert_eq!(list.class(), format!("{LINK_LIST_BASE_CLASS} sidebar-links"));
    }

    #[test]
    fn test_patient_care_renders_three_routed_links_in_order() {
        let set = link_set(LinkContext::PatientCare);
        let list = render_links(set.links(), "");
        assert_eq!(list.len(), 3);
        assert!(list.items().iter().all(|item| !item.is_external()));
        for (item, descriptor) in list.items().iter().zip(set.links()) {
            assert_eq!(item.content().label(), descriptor.text().as_str());
        }
    }

    #[test]
    fn test_duplicates_are_kept() {
        let link = internal("X", "/a");
        let list = render_links(&[link.clone(), link], "");
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].content().key(), 0);
        assert_eq!(list.items()[1].content().key(), 1);
    }

    #[test]
    fn test_serialises_variant_tag() {
        let list = render_links(&[internal("X", "/a")], "");
        let json = serde_json::to_value(&list).expect("serialise");
        assert_eq!(
            json,
            serde_json::json!({
                "class": LINK_LIST_BASE_CLASS,
                "items": [{"kind": "routed", "key": 0, "href": "/a", "label": "X"}]
            })
        );
    }

    fn descriptor() -> impl Strategy<Value = LinkDescriptor> {
        (
            "[A-Za-z][A-Za-z ]{0,12}",
            "[a-z]{1,8}",
            any::<bool>(),
            proptest::option::of("[A-Za-z]{1,10}"),
        )
            .prop_map(|(text, segment, is_external, title)| {
                let link = if is_external {
                    external(&text, &format!("https://{segment}.org"))
                } else {
                    internal(&text, &format!("/{segment}"))
                };
                match title {
                    Some(title) => link.with_title(title),
                    None => link,
                }
            })
    }

    proptest! {
        #[test]
        fn prop_one_item_per_descriptor_in_order(links in proptest::collection::vec(descriptor(), 0..12)) {
            let list = render_links(&links, "");
            prop_assert_eq!(list.len(), links.len());
            for (key, (item, link)) in list.items().iter().zip(&links).enumerate() {
                prop_assert_eq!(item.content().key(), key);
                prop_assert_eq!(item.content().href(), link.href().as_str());
                prop_assert_eq!(item.content().title(), link.title());
                prop_assert_eq!(item.is_external(), link.is_external());
                let expected_icon = if link.is_external() { Icon::ExternalLink } else { Icon::ArrowRight };
                prop_assert_eq!(item.icon(), expected_icon);
            }
        }

        #[test]
        fn prop_rendering_is_idempotent(links in proptest::collection::vec(descriptor(), 0..12)) {
            let before = links.clone();
            let first = render_links(&links, "extra");
            let second = render_links(&links, "extra");
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.to_html(), second.to_html());
            prop_assert_eq!(links, before);
        }
    }
}
