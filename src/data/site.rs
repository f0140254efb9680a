use enum_map::Enum;
use once_cell::sync::Lazy;
use serde::Deserialize;

const SITE_SCHEMA_JSON: &str = include_str!("./content/site.json");

/// Anchor strings are the whole intra-page navigation protocol: nav entries,
/// section spawning and scroll targeting all resolve through this map.
pub static ANCHOR_TARGETS: phf::Map<&'static str, SectionId> = phf::phf_map! {
    "home" => SectionId::Home,
    "statesman" => SectionId::Statesman,
    "artist" => SectionId::Artist,
    "author" => SectionId::Author,
    "contact" => SectionId::Contact,
};

pub static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_json(SITE_SCHEMA_JSON)
        .unwrap_or_else(|error| panic!("invalid site schema: {error}"))
});

#[derive(Enum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Statesman,
    Artist,
    Author,
    Contact,
}

impl SectionId {
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        ANCHOR_TARGETS.get(anchor).copied()
    }
}

/// One ordered list feeds both the header nav row and the overlay, so the
/// two can never drift apart.
#[derive(Deserialize, Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub anchor: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardPalette {
    Ruby,
    Gold,
    Emerald,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CareerHighlight {
    pub year: String,
    pub title: String,
    pub detail: String,
    pub palette: CardPalette,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PublicationStat {
    pub value: String,
    pub caption: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Publication {
    pub title: String,
    pub blurb: String,
    pub cover: String,
    pub stats: Vec<PublicationStat>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// The whole page is data: which sections exist, what the nav shows and all
/// section copy live here. Layout variants differ only in this config, never
/// in scene code.
#[derive(Deserialize, Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub name: String,
    pub badge: String,
    pub tagline: String,
    pub portrait: String,
    pub nav: Vec<NavLink>,
    pub sections: Vec<SectionId>,
    pub career_highlights: Vec<CareerHighlight>,
    pub videos: Vec<String>,
    pub artist_blurb: String,
    pub publication: Publication,
    pub footer_blurb: String,
    pub social: Vec<SocialLink>,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<SiteConfig, serde_json::Error> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        log::debug!(
            "site schema loaded: {} sections, {} nav entries",
            config.sections.len(),
            config.nav.len()
        );
        Ok(config)
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.sections.contains(&id)
    }

    /// Nav entries whose anchor resolves to an active section, in schema
    /// order. Unknown anchors and anchors for inactive sections are dropped
    /// with a warning instead of failing the page.
    pub fn nav_entries(&self) -> Vec<(NavLink, SectionId)> {
        self.nav
            .iter()
            .filter_map(|link| {
                let Some(target) = SectionId::from_anchor(&link.anchor) else {
                    log::warn!("nav entry '{}' has unknown anchor '{}'", link.label, link.anchor);
                    return None;
                };
                if !self.is_active(target) {
                    log::warn!(
                        "nav entry '{}' targets inactive section '{}'",
                        link.label,
                        link.anchor
                    );
                    return None;
                }
                Some((link.clone(), target))
            })
            .collect()
    }
}
