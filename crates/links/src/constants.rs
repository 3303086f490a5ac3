//! Constants used when rendering link lists.
//!
//! Class names and attribute values live here so the HTML writer, the JSON fragment and the
//! hosting shell's stylesheet agree on a single set of tokens.

/// Base class of every rendered link list. Carries the vertical stack and uniform gap tokens.
pub const LINK_LIST_BASE_CLASS: &str = "link-list stack gap-xs";

/// Class applied to each rendered link.
pub const LINK_CLASS: &str = "link-list-item";

/// Browsing context used for external links.
pub const EXTERNAL_TARGET: &str = "_blank";

/// Isolation attributes for external links.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Icon suffixed to client-side routed links.
pub const FORWARD_ICON_NAME: &str = "arrow-right";

/// Icon suffixed to external links.
pub const EXTERNAL_ICON_NAME: &str = "external-link";

/// Class prefix for icon placeholders, completed with the icon name.
pub const ICON_CLASS_PREFIX: &str = "link-icon";
