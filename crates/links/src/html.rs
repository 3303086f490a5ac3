//! HTML output for rendered link lists.
//!
//! The fragment is a dioxus component tree rendered to a string with `dioxus-ssr`, which
//! escapes every text node and attribute value. Routed links are plain same-origin anchors
//! without a `target`, the form a client-side router intercepts; external links carry
//! `target` and `rel`, which routers leave to the browser.

use crate::constants::{ICON_CLASS_PREFIX, LINK_CLASS};
use crate::render::{LinkList, RenderedLink};
use dioxus::prelude::*;

impl LinkList {
    /// Writes the list as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut vdom = VirtualDom::new_with_props(
            LinkListView,
            LinkListViewProps { list: self.clone() },
        );
        vdom.rebuild_in_place();
        dioxus_ssr::render(&vdom)
    }
}

#[component]
fn LinkListView(list: LinkList) -> Element {
    rsx! {
        div { class: "{list.class()}",
            for item in list.items() {
                LinkAnchor { key: "{item.content().key()}", item: item.clone() }
            }
        }
    }
}

#[component]
fn LinkAnchor(item: RenderedLink) -> Element {
    let content = item.content();
    let icon_class = format!("{ICON_CLASS_PREFIX} {ICON_CLASS_PREFIX}-{}", item.icon().name());

    rsx! {
        a {
            class: LINK_CLASS,
            href: "{content.href()}",
            target: item.target(),
            rel: item.rel(),
            title: content.title().map(str::to_owned),
            "{content.label()}"
            span { class: "{icon_class}", aria_hidden: "true" }
        }
    }
}
