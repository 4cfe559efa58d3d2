//! Site pages and route resolution.

use serde::{Deserialize, Serialize};

use crate::catalog::IconId;

/// A top-level page of the presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Architecture,
    Security,
    #[serde(rename = "cicd")]
    CiCd,
    Monitoring,
    Implementation,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Architecture,
        Page::Security,
        Page::CiCd,
        Page::Monitoring,
        Page::Implementation,
    ];

    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Architecture => 1,
            Page::Security => 2,
            Page::CiCd => 3,
            Page::Monitoring => 4,
            Page::Implementation => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Architecture => "Architecture",
            Page::Security => "Security",
            Page::CiCd => "CI/CD",
            Page::Monitoring => "Monitoring",
            Page::Implementation => "Implementation",
        }
    }

    /// Route path, as linked from the navigation bar.
    pub fn href(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Architecture => "/architecture",
            Page::Security => "/security",
            Page::CiCd => "/cicd",
            Page::Monitoring => "/monitoring",
            Page::Implementation => "/implementation",
        }
    }

    /// Short identifier used in config files and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Architecture => "architecture",
            Page::Security => "security",
            Page::CiCd => "cicd",
            Page::Monitoring => "monitoring",
            Page::Implementation => "implementation",
        }
    }

    pub fn icon(self) -> IconId {
        IconId(match self {
            Page::Home => "home",
            Page::Architecture => "layers",
            Page::Security => "shield",
            Page::CiCd => "git-branch",
            Page::Monitoring => "monitor",
            Page::Implementation => "settings",
        })
    }

    /// Resolve a route path. Trailing slashes are ignored.
    pub fn from_href(href: &str) -> Option<Self> {
        let trimmed = href.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Page::Home);
        }
        Self::ALL.into_iter().find(|p| p.href() == trimmed)
    }

    /// Resolve a slug, case-insensitively.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(slug))
    }

    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_cycle() {
        assert_eq!(Page::Home.next(), Page::Architecture);
        assert_eq!(Page::Implementation.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Implementation);
        assert_eq!(Page::Architecture.prev(), Page::Home);
    }

    #[test]
    fn page_from_index() {
        for i in 0..6 {
            let p = Page::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Page::from_index(6).is_none());
    }

    #[test]
    fn href_resolution() {
        assert_eq!(Page::from_href("/"), Some(Page::Home));
        assert_eq!(Page::from_href(""), Some(Page::Home));
        assert_eq!(Page::from_href("/cicd"), Some(Page::CiCd));
        assert_eq!(Page::from_href("/security/"), Some(Page::Security));
        assert_eq!(Page::from_href("/pricing"), None);
        for page in Page::ALL {
            assert_eq!(Page::from_href(page.href()), Some(page));
        }
    }

    #[test]
    fn slug_resolution() {
        assert_eq!(Page::from_slug("CICD"), Some(Page::CiCd));
        assert_eq!(Page::from_slug(" monitoring "), Some(Page::Monitoring));
        assert_eq!(Page::from_slug("nope"), None);
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&Page::CiCd).unwrap();
        assert_eq!(json, "\"cicd\"");
        let page: Page = serde_json::from_str("\"implementation\"").unwrap();
        assert_eq!(page, Page::Implementation);
    }
}
