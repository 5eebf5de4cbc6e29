//! Profile to page view mapping
//!
//! Rendering is total over validated profiles: every optional field has a
//! fallback, and the same profile and options always produce the same
//! page. The only outside input is the injected [`BuildInfo`].

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::schema::{
    AgenticMeta, CareerLevel, CtaLink, DeepDive, Education, EducationSource, EducationType,
    EmploymentType, Experience, Hero, MetaVariant, Philosophy, Profile, SkillCategory,
    Volunteering,
};

use super::countup::parse_display_value;
use super::period::{format_period, MonthStyle};
use super::view::*;

/// Build metadata supplied by the build tool rather than the document.
///
/// Any field set here overrides the matching document value in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildInfo {
    #[serde(default)]
    pub build_timestamp: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub git_commit: Option<String>,
    #[serde(default)]
    pub bundle_size: Option<String>,
}

impl BuildInfo {
    pub fn is_empty(&self) -> bool {
        self.build_timestamp.is_none() && self.git_commit.is_none() && self.bundle_size.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub month_style: MonthStyle,
    pub build: BuildInfo,
}

/// Maps a validated [`Profile`] to a [`PageView`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, profile: &Profile) -> PageView {
        PageView {
            hero: self.hero(&profile.hero),
            highlight: profile.highlight.clone(),
            experience: profile.experience.iter().map(|e| self.timeline_entry(e)).collect(),
            philosophy: profile.philosophy.iter().map(philosophy_view).collect(),
            skills: profile.skills.iter().map(skill_group).collect(),
            education: self.education(&profile.education),
            volunteering: self.volunteering(profile.volunteering.as_deref()),
            footer: self.footer(&profile.meta),
        }
    }

    fn hero(&self, hero: &Hero) -> HeroView {
        HeroView {
            name: hero.name.clone(),
            headline: hero.headline.clone(),
            tagline: hero.tagline.clone(),
            location: hero.location.clone(),
            stats: hero
                .impact_stats
                .iter()
                .map(|stat| StatView {
                    display: parse_display_value(&stat.value),
                    stat: stat.clone(),
                })
                .collect(),
            cta_links: hero.cta_links.iter().map(cta_view).collect(),
        }
    }

    /// Entries keep document order.
    fn timeline_entry(&self, experience: &Experience) -> TimelineEntry {
        TimelineEntry {
            id: experience.id.clone(),
            company: experience.company.clone(),
            role: experience.role.clone(),
            period: format_period(&experience.period, self.options.month_style),
            is_current: experience.period.is_ongoing(),
            employment_badge: match experience.employment_type {
                EmploymentType::FullTime => None,
                other => Some(employment_label(other).to_string()),
            },
            career_level: experience
                .career_level
                .map(|level| career_level_label(level).to_string()),
            early_career: experience.is_early_career,
            summary: experience.summary.clone(),
            deep_dive: deep_dive_view(&experience.deep_dive),
            tags: experience.tags.clone(),
        }
    }

    /// Entries win over roots when a document carries both.
    fn education(&self, source: &EducationSource) -> EducationView {
        match source {
            EducationSource::Entries(entries) | EducationSource::Both { entries, .. } => {
                EducationView::Entries {
                    entries: entries.iter().map(|e| self.education_card(e)).collect(),
                }
            }
            EducationSource::Roots(roots) => EducationView::Roots {
                roots: roots.clone(),
            },
        }
    }

    fn education_card(&self, education: &Education) -> EducationCard {
        EducationCard {
            id: education.id.clone(),
            degree: education.degree.clone(),
            institution: education.institution.clone(),
            focus: education.focus.clone(),
            kind: education_type_label(education.kind).to_string(),
            period: format_period(&education.period, self.options.month_style),
            transferable_insight: education.transferable_insight.clone(),
            highlights: education.highlights.clone().unwrap_or_default(),
        }
    }

    fn volunteering(&self, entries: Option<&[Volunteering]>) -> Option<Vec<VolunteeringEntry>> {
        let entries = entries.filter(|entries| !entries.is_empty())?;
        Some(
            entries
                .iter()
                .map(|v| VolunteeringEntry {
                    id: v.id.clone(),
                    organization: v.organization.clone(),
                    role: v.role.clone(),
                    period: format_period(&v.period, self.options.month_style),
                    is_current: v.period.is_ongoing(),
                    description: v.description.clone(),
                    impact: v.impact.clone(),
                    highlights: v.highlights.clone().unwrap_or_default(),
                    tags: v.tags.clone().unwrap_or_default(),
                })
                .collect(),
        )
    }

    fn footer(&self, meta: &AgenticMeta) -> FooterView {
        let build = &self.options.build;
        let timestamp = build.build_timestamp.unwrap_or(meta.build_timestamp);
        FooterView {
            build_timestamp: timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            built_on: timestamp.format("%-d %b %Y").to_string(),
            bundle_size: build
                .bundle_size
                .clone()
                .unwrap_or_else(|| meta.bundle_size.clone()),
            source_url: meta.source_url.clone(),
            git_commit: build.git_commit.clone(),
            lighthouse_score: meta.lighthouse_score,
            branch: footer_branch(meta),
        }
    }
}

fn cta_view(link: &CtaLink) -> CtaView {
    CtaView {
        label: link.label.clone(),
        href: link.href.clone(),
        icon: link.icon.clone(),
        kind: if link.href.starts_with("mailto:") {
            LinkKind::Email
        } else {
            LinkKind::Web
        },
    }
}

fn deep_dive_view(deep_dive: &DeepDive) -> DeepDiveView {
    DeepDiveView {
        context: deep_dive.context.clone(),
        technical_highlights: deep_dive.technical_highlights.clone(),
        leadership_highlights: deep_dive
            .leadership_highlights
            .clone()
            .filter(|highlights| !highlights.is_empty()),
        metrics: deep_dive.metrics.clone(),
    }
}

fn philosophy_view(philosophy: &Philosophy) -> PhilosophyView {
    PhilosophyView {
        id: philosophy.id.clone(),
        title: philosophy.title.clone(),
        belief: philosophy.belief.clone(),
        attribution: philosophy
            .source
            .as_ref()
            .map(|source| format!("{}, {}", source.author, source.work)),
    }
}

/// Groups keep document order, as do the skills inside them.
fn skill_group(group: &SkillCategory) -> SkillGroupView {
    let treatment = category_treatment(&group.category);
    SkillGroupView {
        category: group.category.clone(),
        treatment,
        accent: treatment.accent(),
        skills: group
            .skills
            .iter()
            .map(|skill| SkillNode {
                name: skill.name.clone(),
                level: skill.level,
                percent: skill.level.saturating_mul(20).min(100),
                highlight: skill.highlight,
                category: skill.category.clone(),
            })
            .collect(),
    }
}

/// Matches words of the category name against keyword prefixes,
/// case-insensitively.
pub fn category_treatment(category: &str) -> CategoryTreatment {
    let category = category.to_lowercase();
    let words: Vec<&str> = category
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .filter(|w| !w.is_empty())
        .collect();
    let has = |keys: &[&str]| words.iter().any(|w| keys.iter().any(|k| w.starts_with(k)));

    if has(&["language"]) {
        CategoryTreatment::Languages
    } else if has(&["frontend", "front-end", "ui", "design"]) {
        CategoryTreatment::Frontend
    } else if has(&["backend", "back-end", "api", "server"]) {
        CategoryTreatment::Backend
    } else if has(&["cloud", "devops", "infra", "platform"]) {
        CategoryTreatment::Infrastructure
    } else if has(&["data", "machine", "ml", "ai"]) {
        CategoryTreatment::Data
    } else if has(&["leadership", "management", "people"]) {
        CategoryTreatment::Leadership
    } else {
        CategoryTreatment::Default
    }
}

/// Enhanced meta when all four enhanced fields are present, otherwise the
/// agent list, otherwise only the common build fields.
fn footer_branch(meta: &AgenticMeta) -> FooterBranch {
    match meta.variant() {
        MetaVariant::Enhanced(enhanced) => FooterBranch::Enhanced {
            gas_town: GasTownView {
                name: enhanced.gas_town.name.clone(),
                mayor: enhanced.gas_town.mayor.clone(),
                description: enhanced.gas_town.description.clone(),
            },
            polecats: enhanced
                .polecats
                .iter()
                .map(|p| NamedLine {
                    name: p.name.clone(),
                    detail: p.task.clone(),
                })
                .collect(),
            timeline: enhanced
                .timeline
                .iter()
                .map(|t| NamedLine {
                    name: t.at.clone(),
                    detail: t.event.clone(),
                })
                .collect(),
            stats: enhanced
                .stats
                .iter()
                .map(|(key, value)| NamedLine {
                    name: key.clone(),
                    detail: match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                })
                .collect(),
        },
        MetaVariant::Legacy(Some(agents)) if !agents.is_empty() => FooterBranch::Legacy {
            agents: agents
                .iter()
                .map(|a| NamedLine {
                    name: a.name.clone(),
                    detail: a.contribution.clone(),
                })
                .collect(),
        },
        MetaVariant::Legacy(_) => FooterBranch::Minimal,
    }
}

pub fn employment_label(kind: EmploymentType) -> &'static str {
    match kind {
        EmploymentType::FullTime => "Full-time",
        EmploymentType::PartTime => "Part-time",
        EmploymentType::Contract => "Contract",
        EmploymentType::Internship => "Internship",
        EmploymentType::Freelance => "Freelance",
        EmploymentType::Apprenticeship => "Apprenticeship",
    }
}

pub fn career_level_label(level: CareerLevel) -> &'static str {
    match level {
        CareerLevel::Entry => "Entry level",
        CareerLevel::Junior => "Junior",
        CareerLevel::Mid => "Mid-level",
        CareerLevel::Senior => "Senior",
        CareerLevel::Lead => "Lead",
        CareerLevel::Principal => "Principal",
        CareerLevel::Executive => "Executive",
    }
}

pub fn education_type_label(kind: EducationType) -> &'static str {
    match kind {
        EducationType::Bachelor => "Bachelor's degree",
        EducationType::Master => "Master's degree",
        EducationType::Doctorate => "Doctorate",
        EducationType::Associate => "Associate degree",
        EducationType::Certificate => "Certificate",
        EducationType::Bootcamp => "Bootcamp",
        EducationType::SelfTaught => "Self-taught",
        EducationType::Other => "Other",
    }
}
