//! Static site copy: practice areas and legal-document text.
//!
//! Kept out of the components so the markup modules stay focused on
//! structure and interaction.

use crate::state::modal::LegalDoc;

/// One practice-area card in the expertise grid.
#[derive(Clone, Copy)]
pub struct PracticeArea {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRACTICE_AREAS: &[PracticeArea] = &[
    PracticeArea {
        icon: "scale",
        title: "Civil litigation",
        description: "Representation in civil disputes at every instance, from claim strategy to enforcement of judgments.",
    },
    PracticeArea {
        icon: "shield",
        title: "Criminal defense",
        description: "Defense from the first interrogation onward, with procedural safeguards enforced at every step.",
    },
    PracticeArea {
        icon: "users",
        title: "Family law",
        description: "Divorce, custody and maintenance matters handled with discretion and a settlement-first approach.",
    },
    PracticeArea {
        icon: "briefcase",
        title: "Corporate and commercial",
        description: "Company formation, shareholder relations and commercial contracts for operating businesses.",
    },
    PracticeArea {
        icon: "home",
        title: "Real estate",
        description: "Purchase, lease and title matters for residential and commercial property.",
    },
    PracticeArea {
        icon: "map",
        title: "Land disputes",
        description: "Boundary, allocation and registration conflicts before administrative bodies and courts.",
    },
    PracticeArea {
        icon: "globe",
        title: "Migration law",
        description: "Residence permits, work authorization and citizenship procedures for foreign nationals.",
    },
    PracticeArea {
        icon: "building",
        title: "Construction",
        description: "Contract packages, permitting and defect claims across the building lifecycle.",
    },
    PracticeArea {
        icon: "file-text",
        title: "Contract drafting",
        description: "Agreements drafted to be enforced, not merely signed, with risk allocation made explicit.",
    },
    PracticeArea {
        icon: "user-plus",
        title: "Inheritance",
        description: "Succession planning and estate disputes, including cross-border assets.",
    },
    PracticeArea {
        icon: "edit-3",
        title: "Legal opinions",
        description: "Written positions on contested questions of law, suitable for boards and counterparties.",
    },
    PracticeArea {
        icon: "search",
        title: "Due diligence",
        description: "Legal audit of companies and assets ahead of transactions and investment decisions.",
    },
];

/// One heading and body block inside a legal document.
#[derive(Clone, Copy)]
pub struct DocSection {
    pub heading: &'static str,
    pub body: &'static str,
}

#[must_use]
pub fn doc_title(doc: LegalDoc) -> &'static str {
    match doc {
        LegalDoc::Terms => "Terms of Use",
        LegalDoc::DataPolicy => "Data Processing",
        LegalDoc::Privacy => "Privacy",
    }
}

#[must_use]
pub fn doc_intro(doc: LegalDoc) -> &'static str {
    match doc {
        LegalDoc::Terms => {
            "This agreement is a legally binding contract between you and the law office of Orkhan Valiyev."
        }
        LegalDoc::DataPolicy => {
            "Personal data is processed in strict accordance with the Law of the Republic of Azerbaijan on Personal Data."
        }
        LegalDoc::Privacy => {
            "Your privacy is the foundation of advocate ethics. The same standard applies to this site."
        }
    }
}

#[must_use]
pub fn doc_sections(doc: LegalDoc) -> &'static [DocSection] {
    match doc {
        LegalDoc::Terms => &[
            DocSection {
                heading: "1. Use of the site",
                body: "The site is provided for informational purposes. Copying its materials without the owner's written consent is prohibited by the legislation of the Republic of Azerbaijan.",
            },
            DocSection {
                heading: "2. Status of the information",
                body: "Nothing published here constitutes a public offer or final legal advice. Every legal matter requires individual review.",
            },
            DocSection {
                heading: "3. Liability",
                body: "The owner of the site bears no liability for losses arising from use of information obtained here without a personal consultation.",
            },
        ],
        LegalDoc::DataPolicy => &[
            DocSection {
                heading: "1. Data collected",
                body: "No forms on this site request your name or identity documents. The only data processed are technical parameters of your visit (cookies, IP address) for web analytics.",
            },
            DocSection {
                heading: "2. Security",
                body: "All technical data travels over SSL and is stored on servers with a high level of protection.",
            },
        ],
        LegalDoc::Privacy => &[
            DocSection {
                heading: "1. Cookies",
                body: "Cookies are used to remember your theme preference and to understand which sections are read. You can disable them in your browser at any time.",
            },
            DocSection {
                heading: "2. Data sharing",
                body: "No data is passed to third parties or advertising agencies.",
            },
        ],
    }
}
