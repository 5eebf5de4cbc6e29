//! Typed profile entities
//!
//! Every value here is produced by `ProfileValidator` and never mutated
//! afterwards. Serialization writes the same camelCase field names the
//! content document uses, so a validated profile re-serialized to JSON
//! validates back to an identical value.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;

/// Root content document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "ProfileDocument")]
pub struct Profile {
    pub hero: Hero,
    pub highlight: Highlight,
    pub experience: Vec<Experience>,
    pub philosophy: Vec<Philosophy>,
    pub skills: Vec<SkillCategory>,
    pub education: EducationSource,
    pub volunteering: Option<Vec<Volunteering>>,
    pub meta: AgenticMeta,
}

/// Serialized shape of [`Profile`], with the education sum type split back
/// into its two document fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDocument {
    hero: Hero,
    highlight: Highlight,
    experience: Vec<Experience>,
    philosophy: Vec<Philosophy>,
    skills: Vec<SkillCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roots: Option<Roots>,
    #[serde(skip_serializing_if = "Option::is_none")]
    education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volunteering: Option<Vec<Volunteering>>,
    meta: AgenticMeta,
}

impl From<Profile> for ProfileDocument {
    fn from(profile: Profile) -> Self {
        let (roots, education) = profile.education.into_parts();
        Self {
            hero: profile.hero,
            highlight: profile.highlight,
            experience: profile.experience,
            philosophy: profile.philosophy,
            skills: profile.skills,
            roots,
            education,
            volunteering: profile.volunteering,
            meta: profile.meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
    pub impact_stats: Vec<ImpactStat>,
    pub cta_links: Vec<CtaLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactStat {
    pub id: String,
    /// Display string, e.g. `"€0.5M+"` or `"270+"`.
    pub value: String,
    pub unit: String,
    pub label: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaLink {
    pub label: String,
    /// Absolute http(s) URL or `mailto:` URI.
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub title: String,
    pub category: String,
    pub context: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// Start/end pair. `end == None` means ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: String,
    pub end: Option<String>,
}

impl Period {
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: Period,
    pub employment_type: EmploymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_level: Option<CareerLevel>,
    pub is_early_career: bool,
    pub summary: String,
    pub deep_dive: DeepDive,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepDive {
    pub context: String,
    pub technical_highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadership_highlights: Option<Vec<String>>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Philosophy {
    pub id: String,
    pub title: String,
    pub belief: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    pub author: String,
    pub work: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in `1..=5`.
    pub level: u8,
    pub highlight: bool,
    /// Copy of the owning group's category.
    #[serde(skip)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub focus: String,
    #[serde(rename = "type")]
    pub kind: EducationType,
    pub period: Period,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferable_insight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

/// Single academic entry from the format that predates `education[]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roots {
    pub degree: String,
    pub institution: String,
    pub focus: String,
    pub transferable_insight: String,
}

/// Where a profile's academic history comes from.
///
/// A document may carry the legacy `roots` record, a non-empty `education`
/// array, or both while it migrates between the two. It may never carry
/// neither, and [`EducationSource::from_parts`] is the only place that rule
/// is enforced.
#[derive(Debug, Clone, PartialEq)]
pub enum EducationSource {
    Roots(Roots),
    Entries(Vec<Education>),
    Both { entries: Vec<Education>, roots: Roots },
}

impl EducationSource {
    /// Combines the two document fields. An empty `education` array counts
    /// as absent.
    pub fn from_parts(roots: Option<Roots>, education: Option<Vec<Education>>) -> Option<Self> {
        let entries = education.filter(|entries| !entries.is_empty());
        match (roots, entries) {
            (Some(roots), Some(entries)) => Some(Self::Both { entries, roots }),
            (Some(roots), None) => Some(Self::Roots(roots)),
            (None, Some(entries)) => Some(Self::Entries(entries)),
            (None, None) => None,
        }
    }

    pub fn entries(&self) -> Option<&[Education]> {
        match self {
            Self::Entries(entries) | Self::Both { entries, .. } => Some(entries),
            Self::Roots(_) => None,
        }
    }

    pub fn roots(&self) -> Option<&Roots> {
        match self {
            Self::Roots(roots) | Self::Both { roots, .. } => Some(roots),
            Self::Entries(_) => None,
        }
    }

    fn into_parts(self) -> (Option<Roots>, Option<Vec<Education>>) {
        match self {
            Self::Roots(roots) => (Some(roots), None),
            Self::Entries(entries) => (None, Some(entries)),
            Self::Both { entries, roots } => (Some(roots), Some(entries)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Volunteering {
    pub id: String,
    pub organization: String,
    pub role: String,
    pub period: Period,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Build and provenance metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgenticMeta {
    pub build_timestamp: DateTime<FixedOffset>,
    pub bundle_size: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighthouse_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<Agent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_town: Option<GasTown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polecats: Option<Vec<Polecat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineEvent>>,
    /// Free-form counters, ordered by key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Map<String, Value>>,
}

/// Which historical shape a meta section has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetaVariant<'a> {
    Enhanced(EnhancedMeta<'a>),
    Legacy(Option<&'a [Agent]>),
}

/// Borrowed view of the four fields that make up the enhanced shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhancedMeta<'a> {
    pub gas_town: &'a GasTown,
    pub polecats: &'a [Polecat],
    pub timeline: &'a [TimelineEvent],
    pub stats: &'a serde_json::Map<String, Value>,
}

impl AgenticMeta {
    /// Enhanced only when all four enhanced fields are present.
    pub fn variant(&self) -> MetaVariant<'_> {
        match (&self.gas_town, &self.polecats, &self.timeline, &self.stats) {
            (Some(gas_town), Some(polecats), Some(timeline), Some(stats)) => {
                MetaVariant::Enhanced(EnhancedMeta {
                    gas_town,
                    polecats,
                    timeline,
                    stats,
                })
            }
            _ => MetaVariant::Legacy(self.agents.as_deref()),
        }
    }

    /// True when some, but not all, enhanced fields are present.
    pub fn is_partially_enhanced(&self) -> bool {
        let present = [
            self.gas_town.is_some(),
            self.polecats.is_some(),
            self.timeline.is_some(),
            self.stats.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count();
        present > 0 && present < 4
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    pub name: String,
    pub contribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasTown {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mayor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polecat {
    pub name: String,
    pub task: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    pub at: String,
    pub event: String,
}

/// Closed literal set backed by a `&'static str` table.
pub trait LiteralSet: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// Comma-separated allowed values, for violation messages.
    fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! literal_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $lit:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $lit)] $variant),+
        }

        impl LiteralSet for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $lit),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

literal_enum!(
    /// Kind of employment; defaults to full-time when omitted.
    EmploymentType {
        FullTime => "full-time",
        PartTime => "part-time",
        Contract => "contract",
        Internship => "internship",
        Freelance => "freelance",
        Apprenticeship => "apprenticeship",
    }
);

impl Default for EmploymentType {
    fn default() -> Self {
        Self::FullTime
    }
}

literal_enum!(
    CareerLevel {
        Entry => "entry",
        Junior => "junior",
        Mid => "mid",
        Senior => "senior",
        Lead => "lead",
        Principal => "principal",
        Executive => "executive",
    }
);

literal_enum!(
    EducationType {
        Bachelor => "bachelor",
        Master => "master",
        Doctorate => "doctorate",
        Associate => "associate",
        Certificate => "certificate",
        Bootcamp => "bootcamp",
        SelfTaught => "self-taught",
        Other => "other",
    }
);
