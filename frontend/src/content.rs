use serde::Deserialize;

use crate::error::ContentError;

const LANDING_JSON: &str = include_str!("../content/landing.json");

/// The feature grid is laid out as two single columns and one stacked pair.
pub const FEATURE_CARD_COUNT: usize = 4;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Link {
    pub name: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub heading: Vec<String>,
    pub description: String,
    pub cta: String,
    pub trust_score: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct StatsContent {
    pub heading: Vec<String>,
    pub paragraphs: Vec<String>,
    pub items: Vec<Stat>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FeatureCard {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub image: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CaseStudy {
    pub client: String,
    pub category: String,
    pub description: String,
    pub result: String,
    pub year: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SummaryCard {
    pub title: String,
    pub body: String,
    pub cta: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FooterContent {
    pub pitch: Vec<String>,
    pub columns: Vec<FooterColumn>,
    pub socials: Vec<Link>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LandingContent {
    pub brand: String,
    pub tagline: String,
    pub nav_links: Vec<Link>,
    pub hero: HeroContent,
    pub stats: StatsContent,
    pub features: Vec<FeatureCard>,
    pub cases: Vec<CaseStudy>,
    #[serde(default)]
    pub projects_summary: Option<SummaryCard>,
    pub faqs: Vec<Faq>,
    pub footer: FooterContent,
}

impl LandingContent {
    /// Copy bundled into the binary at build time.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(LANDING_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: LandingContent = serde_json::from_str(json)?;
        if content.features.len() != FEATURE_CARD_COUNT {
            return Err(ContentError::FeatureCount {
                expected: FEATURE_CARD_COUNT,
                found: content.features.len(),
            });
        }
        Ok(content)
    }
}
