//! Navigation state.
//!
//! Not a router: the current section is a flat enum with no URL or history
//! integration and no transition guards — any section is reachable from any
//! other. The landing sections (Home through Contact) render stacked on one
//! page; FAQ, Privacy, and Admin each render alone.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Home,
    SmartLab,
    DiyHub,
    Impact,
    Contact,
    Faq,
    Privacy,
    Admin,
}

/// The landing stack in render order.
const LANDING: [Section; 5] = [
    Section::Home,
    Section::SmartLab,
    Section::DiyHub,
    Section::Impact,
    Section::Contact,
];

impl Section {
    /// Stable string code, e.g. for element ids (`smart-lab`, `diy-hub`).
    pub fn code(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::SmartLab => "smart-lab",
            Section::DiyHub => "diy-hub",
            Section::Impact => "impact",
            Section::Contact => "contact",
            Section::Faq => "faq",
            Section::Privacy => "privacy",
            Section::Admin => "admin",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "home" => Some(Section::Home),
            "smart-lab" => Some(Section::SmartLab),
            "diy-hub" => Some(Section::DiyHub),
            "impact" => Some(Section::Impact),
            "contact" => Some(Section::Contact),
            "faq" => Some(Section::Faq),
            "privacy" => Some(Section::Privacy),
            "admin" => Some(Section::Admin),
            _ => None,
        }
    }

    /// Whether this section is part of the stacked landing page.
    pub fn is_landing(self) -> bool {
        LANDING.contains(&self)
    }

    /// Pure mapping from the active section to the sections rendered:
    /// the full landing stack for landing sections, the section alone for
    /// the standalone ones.
    pub fn visible_sections(self) -> &'static [Section] {
        match self {
            Section::Faq => &[Section::Faq],
            Section::Privacy => &[Section::Privacy],
            Section::Admin => &[Section::Admin],
            _ => &LANDING,
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Section; 8] = [
        Section::Home,
        Section::SmartLab,
        Section::DiyHub,
        Section::Impact,
        Section::Contact,
        Section::Faq,
        Section::Privacy,
        Section::Admin,
    ];

    #[test]
    fn test_code_parse_round_trip() {
        for section in ALL {
            assert_eq!(Section::parse(section.code()), Some(section));
        }
        assert_eq!(Section::parse("checkout"), None);
    }

    #[test]
    fn test_landing_sections_show_the_full_stack() {
        for section in [Section::Home, Section::DiyHub, Section::Contact] {
            assert!(section.is_landing());
            assert_eq!(section.visible_sections(), &LANDING);
        }
    }

    #[test]
    fn test_standalone_sections_show_only_themselves() {
        for section in [Section::Faq, Section::Privacy, Section::Admin] {
            assert!(!section.is_landing());
            assert_eq!(section.visible_sections(), &[section]);
        }
    }

    #[test]
    fn test_serde_uses_kebab_codes() {
        let json = serde_json::to_string(&Section::SmartLab).unwrap();
        assert_eq!(json, "\"smart-lab\"");
        let back: Section = serde_json::from_str("\"diy-hub\"").unwrap();
        assert_eq!(back, Section::DiyHub);
    }
}
