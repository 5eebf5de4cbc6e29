//! View models handed to presentation components
//!
//! Every type here is plain serializable data. Presentation code treats it
//! as read-only; nothing in a view refers back to the profile it came from.

use serde::Serialize;

use crate::schema::{Highlight, ImpactStat, Metric, Roots};

use super::countup::StatDisplay;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub hero: HeroView,
    pub highlight: Highlight,
    pub experience: Vec<TimelineEntry>,
    pub philosophy: Vec<PhilosophyView>,
    pub skills: Vec<SkillGroupView>,
    pub education: EducationView,
    /// Omitted when the profile has no volunteering entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteering: Option<Vec<VolunteeringEntry>>,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
    pub stats: Vec<StatView>,
    pub cta_links: Vec<CtaView>,
}

/// An impact stat, unchanged, plus how to display its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatView {
    #[serde(flatten)]
    pub stat: ImpactStat,
    pub display: StatDisplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Web,
    Email,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaView {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    /// e.g. `"Mar 2022 — Present"`
    pub period: String,
    pub is_current: bool,
    /// Set only for employment other than full-time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_level: Option<String>,
    pub early_career: bool,
    pub summary: String,
    pub deep_dive: DeepDiveView,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepDiveView {
    pub context: String,
    pub technical_highlights: Vec<String>,
    /// `None` when absent or empty; the block is not drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadership_highlights: Option<Vec<String>>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhilosophyView {
    pub id: String,
    pub title: String,
    pub belief: String,
    /// `"Author, Work"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

/// Visual treatment for a skill group. Categories with no known treatment
/// get `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryTreatment {
    Languages,
    Frontend,
    Backend,
    Infrastructure,
    Data,
    Leadership,
    Default,
}

impl CategoryTreatment {
    /// Theme accent token.
    pub fn accent(&self) -> &'static str {
        match self {
            CategoryTreatment::Languages => "violet",
            CategoryTreatment::Frontend => "cyan",
            CategoryTreatment::Backend => "emerald",
            CategoryTreatment::Infrastructure => "amber",
            CategoryTreatment::Data => "sky",
            CategoryTreatment::Leadership => "rose",
            CategoryTreatment::Default => "slate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroupView {
    pub category: String,
    pub treatment: CategoryTreatment,
    pub accent: &'static str,
    pub skills: Vec<SkillNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillNode {
    pub name: String,
    pub level: u8,
    /// `level` as a share of the maximum, 20..=100.
    pub percent: u8,
    pub highlight: bool,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum EducationView {
    Entries { entries: Vec<EducationCard> },
    Roots { roots: Roots },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationCard {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub focus: String,
    pub kind: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferable_insight: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteeringEntry {
    pub id: String,
    pub organization: String,
    pub role: String,
    pub period: String,
    pub is_current: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    /// RFC 3339, UTC offset as written.
    pub build_timestamp: String,
    /// e.g. `"1 May 2024"`
    pub built_on: String,
    pub bundle_size: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighthouse_score: Option<f64>,
    pub branch: FooterBranch,
}

/// Which meta content the footer shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum FooterBranch {
    #[serde(rename_all = "camelCase")]
    Enhanced {
        gas_town: GasTownView,
        polecats: Vec<NamedLine>,
        timeline: Vec<NamedLine>,
        stats: Vec<NamedLine>,
    },
    Legacy {
        agents: Vec<NamedLine>,
    },
    /// Nothing beyond the common build fields.
    Minimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasTownView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mayor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Two-column footer line: agent/contribution, time/event, key/value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedLine {
    pub name: String,
    pub detail: String,
}
