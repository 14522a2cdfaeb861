//! Site configuration.
//!
//! The whole site (pages, nav, search catalog, timings) is described by
//! `site.toml`, bundled into the binary with `include_str!`. Unlike a
//! user-edited config file a broken bundle is a build mistake, so
//! [`SiteConfig::from_toml`] validates cross references and fails loudly.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;
use crate::router::{NavLink, Page, PageId, Router};
use crate::search::{Catalog, SearchEntry};
use crate::tilt::TiltConfig;
use crate::toast::ToastConfig;

const EMBEDDED: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Page shown on load.
    pub home: PageId,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub tilt: TiltConfig,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Longest query the form accepts.
    pub max_len: usize,
    /// Shortest query that produces suggestions.
    pub predictive_min_len: usize,
    /// Delay before the input takes focus after the overlay opens.
    pub focus_delay_ms: u64,
    pub entries: Vec<SearchEntry>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_len: 27,
            predictive_min_len: 3,
            focus_delay_ms: 100,
            entries: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// The configuration bundled with the crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut known = HashSet::new();
        for page in &self.pages {
            if !known.insert(page.id.as_str()) {
                return Err(ConfigError::DuplicatePage(page.id.clone()));
            }
        }

        if !known.contains(self.home.as_str()) {
            return Err(ConfigError::UnknownHome(self.home.clone()));
        }

        let check = |origin: String, page: &PageId| {
            if known.contains(page.as_str()) {
                Ok(())
            } else {
                Err(ConfigError::UnknownTarget {
                    origin,
                    page: page.clone(),
                })
            }
        };

        for link in &self.nav {
            check(format!("nav link `{}`", link.label), &link.target)?;
        }
        for entry in &self.search.entries {
            check(format!("search entry `{}`", entry.name), &entry.page)?;
        }
        for page in &self.pages {
            for card in &page.cards {
                if let Some(link) = &card.link {
                    check(format!("card `{}` on `{}`", card.title, page.id), link)?;
                }
            }
        }

        if self.search.max_len == 0 {
            return Err(ConfigError::ZeroLimit("max_len"));
        }
        if self.search.predictive_min_len == 0 {
            return Err(ConfigError::ZeroLimit("predictive_min_len"));
        }

        self.logging.level()?;
        Ok(())
    }

    pub fn router(&self) -> Router {
        Router::new(self.pages.clone(), self.home.clone())
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(
            self.search.entries.clone(),
            self.search.max_len,
            self.search.predictive_min_len,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::PageCategory;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"
home = "home"

[[pages]]
id = "home"
title = "Home"
category = "general"
"#;

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::embedded().expect("bundled site.toml");
        assert_eq!(config.home, PageId::from("home"));
        assert_eq!(config.search.entries.len(), 10);
        assert_eq!(config.search.max_len, 27);
        assert_eq!(config.toast.duration_ms, 3000);

        let solutions = config
            .nav
            .iter()
            .find(|l| l.target.as_str() == "solutions")
            .expect("solutions link");
        assert_eq!(solutions.group, Some(PageCategory::Solution));

        let sol_pages = config
            .pages
            .iter()
            .filter(|p| p.category == PageCategory::Solution)
            .count();
        assert_eq!(sol_pages, 3);
    }

    #[test]
    fn embedded_catalog_resolves_cog() {
        let config = SiteConfig::embedded().expect("bundled site.toml");
        let catalog = config.catalog();
        let hits = catalog.suggestions("cog");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page, PageId::from("prod-cogito"));
    }

    #[test]
    fn defaults_fill_missing_sections() {
        let config = SiteConfig::from_toml(MINIMAL).expect("minimal config");
        assert_eq!(config.search.max_len, 27);
        assert_eq!(config.search.predictive_min_len, 3);
        assert_eq!(config.search.focus_delay_ms, 100);
        assert_eq!(config.tilt, TiltConfig::default());
        assert_eq!(config.logging.level().ok(), Some(Level::INFO));
        assert_eq!(config.router().current(), &PageId::from("home"));
    }

    #[test]
    fn rejects_unknown_home() {
        let source = MINIMAL.replace("home = \"home\"", "home = \"landing\"");
        assert!(matches!(
            SiteConfig::from_toml(&source),
            Err(ConfigError::UnknownHome(id)) if id.as_str() == "landing"
        ));
    }

    #[test]
    fn rejects_duplicate_pages() {
        let source = format!("{MINIMAL}\n[[pages]]\nid = \"home\"\ntitle = \"Again\"\ncategory = \"general\"\n");
        assert!(matches!(
            SiteConfig::from_toml(&source),
            Err(ConfigError::DuplicatePage(_))
        ));
    }

    #[test]
    fn rejects_dangling_search_entry() {
        let source = format!(
            "{}\n[search]\nentries = [{{ name = \"Ghost\", page = \"prod-ghost\" }}]\n",
            MINIMAL.trim_end()
        );
        let err = SiteConfig::from_toml(&source).expect_err("dangling entry");
        assert_eq!(
            err.to_string(),
            "search entry `Ghost` points at unknown page `prod-ghost`"
        );
    }

    #[test]
    fn rejects_dangling_nav_link() {
        let source = format!("{MINIMAL}\n[[nav]]\nlabel = \"Blog\"\ntarget = \"blog\"\n");
        assert!(matches!(
            SiteConfig::from_toml(&source),
            Err(ConfigError::UnknownTarget { .. })
        ));
    }

    #[test]
    fn rejects_unknown_category_and_level() {
        let bad_category = MINIMAL.replace("\"general\"", "\"blog\"");
        assert!(matches!(
            SiteConfig::from_toml(&bad_category),
            Err(ConfigError::Parse(_))
        ));

        let bad_level = format!("{MINIMAL}\n[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            SiteConfig::from_toml(&bad_level),
            Err(ConfigError::LogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn rejects_zero_limits() {
        let source = format!("{MINIMAL}\n[search]\nmax_len = 0\n");
        assert!(matches!(
            SiteConfig::from_toml(&source),
            Err(ConfigError::ZeroLimit("max_len"))
        ));
    }
}
