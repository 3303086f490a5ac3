//! The static link catalog.
//!
//! The catalog maps each [`LinkContext`] to an ordered [`LinkSet`]. It is built once, on first
//! access, from the tables in this module and is read-only for the rest of the process. There is
//! no way to change a catalog entry; callers needing a variant of a set clone its descriptors
//! into a new sequence.

use crate::descriptor::LinkDescriptor;
use crate::error::LinkError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The usage contexts that have a predefined link set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkContext {
    PatientCare,
    ClinicalDocumentation,
    ReferralManagement,
}

impl LinkContext {
    /// All contexts, in catalog order.
    pub const ALL: [LinkContext; 3] = [
        LinkContext::PatientCare,
        LinkContext::ClinicalDocumentation,
        LinkContext::ReferralManagement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LinkContext::PatientCare => "patient-care",
            LinkContext::ClinicalDocumentation => "clinical-documentation",
            LinkContext::ReferralManagement => "referral-management",
        }
    }

    fn entries(self) -> &'static [CatalogEntry] {
        match self {
            LinkContext::PatientCare => PATIENT_CARE,
            LinkContext::ClinicalDocumentation => CLINICAL_DOCUMENTATION,
            LinkContext::ReferralManagement => REFERRAL_MANAGEMENT,
        }
    }
}

impl std::fmt::Display for LinkContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LinkContext {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkContext::ALL
            .into_iter()
            .find(|context| context.as_str() == s)
            .ok_or_else(|| LinkError::UnknownLinkSet(s.to_owned()))
    }
}

/// A named, ordered sequence of link descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkSet {
    context: LinkContext,
    links: Vec<LinkDescriptor>,
}

impl LinkSet {
    pub fn context(&self) -> LinkContext {
        self.context
    }

    pub fn name(&self) -> &'static str {
        self.context.as_str()
    }

    /// The descriptors in presentation order.
    pub fn links(&self) -> &[LinkDescriptor] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// The full set of predefined link sets.
#[derive(Debug)]
pub struct LinkCatalog {
    sets: Vec<LinkSet>,
}

impl LinkCatalog {
    /// Builds the catalog from the static tables.
    ///
    /// # Panics
    ///
    /// Panics if a table entry fails descriptor validation. The tables are fixed at compile time
    /// and covered by tests, so this only fires on an edit that breaks an entry.
    fn build() -> Self {
        let sets = LinkContext::ALL
            .into_iter()
            .map(|context| LinkSet {
                context,
                links: context
                    .entries()
                    .iter()
                    .map(|entry| {
                        entry.to_descriptor().unwrap_or_else(|e| {
                            panic!("invalid {context} catalog entry {:?}: {e}", entry.text)
                        })
                    })
                    .collect(),
            })
            .collect();
        Self { sets }
    }

    /// The link sets in catalog order.
    pub fn sets(&self) -> &[LinkSet] {
        &self.sets
    }

    /// The names of all link sets in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sets.iter().map(LinkSet::name)
    }

    pub fn get(&self, context: LinkContext) -> &LinkSet {
        // `build` creates one set per context, in `LinkContext::ALL` order.
        &self.sets[context as usize]
    }

    /// Looks up a link set by its kebab-case name.
    pub fn find(&self, name: &str) -> Option<&LinkSet> {
        name.parse::<LinkContext>().ok().map(|context| self.get(context))
    }
}

static CATALOG: LazyLock<LinkCatalog> = LazyLock::new(LinkCatalog::build);

/// Returns the process-wide link catalog.
pub fn catalog() -> &'static LinkCatalog {
    &CATALOG
}

/// Returns the predefined link set for `context`.
pub fn link_set(context: LinkContext) -> &'static LinkSet {
    catalog().get(context)
}

/// Looks up a predefined link set by name, e.g. `"patient-care"`.
pub fn find_link_set(name: &str) -> Option<&'static LinkSet> {
    catalog().find(name)
}

struct CatalogEntry {
    text: &'static str,
    href: &'static str,
    external: bool,
    title: Option<&'static str>,
    keywords: &'static [&'static str],
}

impl CatalogEntry {
    fn to_descriptor(&self) -> crate::LinkResult<LinkDescriptor> {
        let descriptor = if self.external {
            LinkDescriptor::external(self.text, self.href)?
        } else {
            LinkDescriptor::internal(self.text, self.href)?
        };
        let descriptor = match self.title {
            Some(title) => descriptor.with_title(title),
            None => descriptor,
        };
        Ok(descriptor.with_keywords(self.keywords))
    }
}

const PATIENT_CARE: &[CatalogEntry] = &[
    CatalogEntry {
        text: "Patient list",
        href: "/patients",
        external: false,
        title: Some("Browse and search registered patients"),
        keywords: &["patients", "search"],
    },
    CatalogEntry {
        text: "Demographics",
        href: "/demographics",
        external: false,
        title: Some("View and update patient demographics"),
        keywords: &["demographics"],
    },
    CatalogEntry {
        text: "Care coordination",
        href: "/coordination",
        external: false,
        title: None,
        keywords: &["coordination", "messaging"],
    },
];

const CLINICAL_DOCUMENTATION: &[CatalogEntry] = &[
    CatalogEntry {
        text: "Clinical letters",
        href: "/clinical/letters",
        external: false,
        title: Some("Write and read clinical letters"),
        keywords: &["letters", "correspondence"],
    },
    CatalogEntry {
        text: "EHR status",
        href: "/clinical/ehr-status",
        external: false,
        title: None,
        keywords: &["ehr"],
    },
    CatalogEntry {
        text: "openEHR specifications",
        href: "https://specifications.openehr.org",
        external: true,
        title: Some("openEHR Reference Model specifications"),
        keywords: &["openehr", "standards"],
    },
    CatalogEntry {
        text: "SNOMED CT browser",
        href: "https://browser.ihtsdotools.org",
        external: true,
        title: Some("Search SNOMED CT clinical terminology"),
        keywords: &["terminology", "coding"],
    },
];

const REFERRAL_MANAGEMENT: &[CatalogEntry] = &[
    CatalogEntry {
        text: "Referrals",
        href: "/referrals",
        external: false,
        title: Some("Track outgoing and incoming referrals"),
        keywords: &["referrals"],
    },
    CatalogEntry {
        text: "NHS e-Referral Service",
        href: "https://digital.nhs.uk/services/e-referral-service",
        external: true,
        title: None,
        keywords: &["referrals", "nhs"],
    },
    CatalogEntry {
        text: "NICE guidance",
        href: "https://www.nice.org.uk/guidance",
        external: true,
        title: Some("Clinical guidelines for referral pathways"),
        keywords: &["guidelines"],
    },
];
