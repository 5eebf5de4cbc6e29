//! Profile validator
//!
//! Validation semantics:
//! - Every required field is present and has the declared JSON type
//! - Optional fields may be absent; if present they must satisfy their rules
//! - Closed literal sets match exactly (case-sensitive)
//! - Array cardinality and numeric ranges are enforced
//! - Either `roots` or a non-empty `education` array must be present
//! - Undeclared fields are ignored unless strict mode is on
//!
//! Validation never stops at the first problem. Every violation in the
//! document is reported, in document order, so an author can fix them all
//! in one pass. On success, defaults are applied: `employmentType` becomes
//! `full-time`, `isEarlyCareer` and skill `highlight` become `false`.

use std::collections::HashSet;

use chrono::DateTime;
use serde_json::{Map, Value};
use url::Url;

use super::errors::{SchemaError, SchemaResult, ValidationReport, Violation, ViolationKind, ROOT_PATH};
use super::types::*;

/// Allowed `hero.impactStats` length.
pub const IMPACT_STATS_RANGE: (usize, usize) = (3, 4);
/// Allowed `philosophy` length.
pub const PHILOSOPHY_RANGE: (usize, usize) = (2, 4);
/// Allowed skill `level` values.
pub const SKILL_LEVEL_RANGE: (i64, i64) = (1, 5);

/// Validator knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Report undeclared fields as violations.
    pub strict: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Turns an untyped JSON document into a [`Profile`].
///
/// The validator holds no state between calls; the same input always
/// yields the same result.
#[derive(Debug, Clone, Default)]
pub struct ProfileValidator {
    options: ValidationOptions,
}

impl ProfileValidator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Validates a document.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Invalid` carrying every violation found.
    pub fn validate(&self, document: &Value) -> SchemaResult<Profile> {
        match self.check(document) {
            (Some(profile), report) if report.is_valid() => Ok(profile),
            (_, report) => Err(SchemaError::Invalid(report)),
        }
    }

    /// Validates a document and returns the full report alongside the
    /// profile, including warnings on a successful pass.
    pub fn check(&self, document: &Value) -> (Option<Profile>, ValidationReport) {
        let mut checker = Checker {
            report: ValidationReport::new(),
            strict: self.options.strict,
        };
        let profile = checker.profile(document);
        let profile = profile.filter(|_| checker.report.is_valid());
        (profile, checker.report)
    }
}

const PROFILE_FIELDS: &[&str] = &[
    "hero",
    "highlight",
    "experience",
    "philosophy",
    "skills",
    "roots",
    "education",
    "volunteering",
    "meta",
];
const HERO_FIELDS: &[&str] = &["name", "headline", "tagline", "location", "impactStats", "ctaLinks"];
const STAT_FIELDS: &[&str] = &["id", "value", "unit", "label", "detail", "icon"];
const CTA_FIELDS: &[&str] = &["label", "href", "icon"];
const HIGHLIGHT_FIELDS: &[&str] = &["title", "category", "context", "description", "mediaUrl"];
const PERIOD_FIELDS: &[&str] = &["start", "end"];
const EXPERIENCE_FIELDS: &[&str] = &[
    "id",
    "company",
    "role",
    "period",
    "employmentType",
    "careerLevel",
    "isEarlyCareer",
    "summary",
    "deepDive",
    "tags",
];
const DEEP_DIVE_FIELDS: &[&str] = &["context", "technicalHighlights", "leadershipHighlights", "metrics"];
const METRIC_FIELDS: &[&str] = &["value", "label"];
const PHILOSOPHY_FIELDS: &[&str] = &["id", "title", "belief", "source"];
const SOURCE_FIELDS: &[&str] = &["author", "work"];
const SKILL_CATEGORY_FIELDS: &[&str] = &["category", "skills"];
const SKILL_FIELDS: &[&str] = &["name", "level", "highlight"];
const EDUCATION_FIELDS: &[&str] = &[
    "id",
    "degree",
    "institution",
    "focus",
    "type",
    "period",
    "transferableInsight",
    "highlights",
];
const ROOTS_FIELDS: &[&str] = &["degree", "institution", "focus", "transferableInsight"];
const VOLUNTEERING_FIELDS: &[&str] = &[
    "id",
    "organization",
    "role",
    "period",
    "description",
    "impact",
    "highlights",
    "tags",
];
const META_FIELDS: &[&str] = &[
    "buildTimestamp",
    "bundleSize",
    "sourceUrl",
    "lighthouseScore",
    "agents",
    "gasTown",
    "polecats",
    "timeline",
    "stats",
];
const AGENT_FIELDS: &[&str] = &["name", "contribution"];
const GAS_TOWN_FIELDS: &[&str] = &["name", "mayor", "description"];
const POLECAT_FIELDS: &[&str] = &["name", "task"];
const TIMELINE_FIELDS: &[&str] = &["at", "event"];

type Object = Map<String, Value>;

/// Single-pass walker that records violations instead of returning early.
///
/// Every method returns `None` when the value at hand is unusable; the
/// reason has already been pushed to the report by then.
struct Checker {
    report: ValidationReport,
    strict: bool,
}

impl Checker {
    fn profile(&mut self, document: &Value) -> Option<Profile> {
        let obj = self.object(document, "", PROFILE_FIELDS)?;

        let hero = self.required(obj, "", "hero", Self::hero);
        let highlight = self.required(obj, "", "highlight", Self::highlight);
        let experience = self.required_list(obj, "", "experience", None, Self::experience);
        let philosophy =
            self.required_list(obj, "", "philosophy", Some(PHILOSOPHY_RANGE), Self::philosophy);
        let skills = self.required_list(obj, "", "skills", None, Self::skill_category);
        let roots = self.optional(obj, "", "roots", Self::roots);
        let education = self.optional_list(obj, "", "education", Self::education);
        let volunteering = self.optional_list(obj, "", "volunteering", Self::volunteering);
        let meta = self.required(obj, "", "meta", Self::meta);

        let has_roots = obj.contains_key("roots");
        let has_entries = obj
            .get("education")
            .and_then(Value::as_array)
            .map_or(false, |entries| !entries.is_empty());
        if !has_roots && !has_entries {
            self.report.push(Violation::cross_field(
                "either 'roots' or a non-empty 'education' array is required",
            ));
        }

        if let Some(meta) = &meta {
            if meta.is_partially_enhanced() {
                self.report.warn(
                    "meta carries some but not all of gasTown, polecats, timeline, stats; \
                     it will be treated as legacy meta",
                );
            }
        }

        Some(Profile {
            hero: hero?,
            highlight: highlight?,
            experience: experience?,
            philosophy: philosophy?,
            skills: skills?,
            education: EducationSource::from_parts(roots, education)?,
            volunteering,
            meta: meta?,
        })
    }

    fn hero(&mut self, value: &Value, path: &str) -> Option<Hero> {
        let obj = self.object(value, path, HERO_FIELDS)?;
        let name = self.required_string(obj, path, "name");
        let headline = self.required_string(obj, path, "headline");
        let tagline = self.required_string(obj, path, "tagline");
        let location = self.required_string(obj, path, "location");
        let impact_stats = self.required_list(
            obj,
            path,
            "impactStats",
            Some(IMPACT_STATS_RANGE),
            Self::impact_stat,
        );
        let cta_links = self.required_list(obj, path, "ctaLinks", None, Self::cta_link);

        if let Some(stats) = &impact_stats {
            let mut seen = HashSet::new();
            for (i, stat) in stats.iter().enumerate() {
                if !seen.insert(stat.id.as_str()) {
                    self.report.push(Violation::new(
                        format!("{}.impactStats[{}].id", path, i),
                        ViolationKind::DuplicateId,
                        format!("duplicate impact stat id '{}'", stat.id),
                    ));
                }
            }
        }

        Some(Hero {
            name: name?,
            headline: headline?,
            tagline: tagline?,
            location: location?,
            impact_stats: impact_stats?,
            cta_links: cta_links?,
        })
    }

    fn impact_stat(&mut self, value: &Value, path: &str) -> Option<ImpactStat> {
        let obj = self.object(value, path, STAT_FIELDS)?;
        let id = self.required_string(obj, path, "id");
        let stat_value = self.required_string(obj, path, "value");
        let unit = self.required_string(obj, path, "unit");
        let label = self.required_string(obj, path, "label");
        let detail = self.required_string(obj, path, "detail");
        let icon = self.optional(obj, path, "icon", Self::string);
        Some(ImpactStat {
            id: id?,
            value: stat_value?,
            unit: unit?,
            label: label?,
            detail: detail?,
            icon,
        })
    }

    fn cta_link(&mut self, value: &Value, path: &str) -> Option<CtaLink> {
        let obj = self.object(value, path, CTA_FIELDS)?;
        let label = self.required_string(obj, path, "label");
        let href = self.required(obj, path, "href", Self::link_href);
        let icon = self.optional(obj, path, "icon", Self::string);
        Some(CtaLink {
            label: label?,
            href: href?,
            icon,
        })
    }

    fn highlight(&mut self, value: &Value, path: &str) -> Option<Highlight> {
        let obj = self.object(value, path, HIGHLIGHT_FIELDS)?;
        let title = self.required_string(obj, path, "title");
        let category = self.required_string(obj, path, "category");
        let context = self.required_string(obj, path, "context");
        let description = self.required_string(obj, path, "description");
        let media_url = self.optional(obj, path, "mediaUrl", Self::web_url);
        Some(Highlight {
            title: title?,
            category: category?,
            context: context?,
            description: description?,
            media_url,
        })
    }

    fn experience(&mut self, value: &Value, path: &str) -> Option<Experience> {
        let obj = self.object(value, path, EXPERIENCE_FIELDS)?;
        let id = self.required_string(obj, path, "id");
        let company = self.required_string(obj, path, "company");
        let role = self.required_string(obj, path, "role");
        let period = self.required(obj, path, "period", Self::period);
        let employment_type = self.optional(obj, path, "employmentType", Self::literal::<EmploymentType>);
        let career_level = self.optional(obj, path, "careerLevel", Self::literal::<CareerLevel>);
        let is_early_career = self.optional(obj, path, "isEarlyCareer", Self::boolean);
        let summary = self.required_string(obj, path, "summary");
        let deep_dive = self.required(obj, path, "deepDive", Self::deep_dive);
        let tags = self.required_list(obj, path, "tags", None, Self::string);

        let invalid_default = (obj.contains_key("employmentType") && employment_type.is_none())
            || (obj.contains_key("isEarlyCareer") && is_early_career.is_none());
        if invalid_default {
            return None;
        }

        Some(Experience {
            id: id?,
            company: company?,
            role: role?,
            period: period?,
            employment_type: employment_type.unwrap_or_default(),
            career_level,
            is_early_career: is_early_career.unwrap_or(false),
            summary: summary?,
            deep_dive: deep_dive?,
            tags: tags?,
        })
    }

    fn deep_dive(&mut self, value: &Value, path: &str) -> Option<DeepDive> {
        let obj = self.object(value, path, DEEP_DIVE_FIELDS)?;
        let context = self.required_string(obj, path, "context");
        let technical_highlights =
            self.required_list(obj, path, "technicalHighlights", None, Self::string);
        let leadership_highlights =
            self.optional_list(obj, path, "leadershipHighlights", Self::string);
        let metrics = self.required_list(obj, path, "metrics", None, Self::metric);
        Some(DeepDive {
            context: context?,
            technical_highlights: technical_highlights?,
            leadership_highlights,
            metrics: metrics?,
        })
    }

    fn metric(&mut self, value: &Value, path: &str) -> Option<Metric> {
        let obj = self.object(value, path, METRIC_FIELDS)?;
        let metric_value = self.required_string(obj, path, "value");
        let label = self.required_string(obj, path, "label");
        Some(Metric {
            value: metric_value?,
            label: label?,
        })
    }

    fn philosophy(&mut self, value: &Value, path: &str) -> Option<Philosophy> {
        let obj = self.object(value, path, PHILOSOPHY_FIELDS)?;
        let id = self.required_string(obj, path, "id");
        let title = self.required_string(obj, path, "title");
        let belief = self.required_string(obj, path, "belief");
        let source = self.optional(obj, path, "source", Self::source);
        Some(Philosophy {
            id: id?,
            title: title?,
            belief: belief?,
            source,
        })
    }

    fn source(&mut self, value: &Value, path: &str) -> Option<Source> {
        let obj = self.object(value, path, SOURCE_FIELDS)?;
        let author = self.required_string(obj, path, "author");
        let work = self.required_string(obj, path, "work");
        Some(Source {
            author: author?,
            work: work?,
        })
    }

    fn skill_category(&mut self, value: &Value, path: &str) -> Option<SkillCategory> {
        let obj = self.object(value, path, SKILL_CATEGORY_FIELDS)?;
        let category = self.required_string(obj, path, "category");
        let skills = self.required_list(obj, path, "skills", None, Self::skill);
        let category = category?;
        let skills = skills?
            .into_iter()
            .map(|skill| Skill {
                category: category.clone(),
                ..skill
            })
            .collect();
        Some(SkillCategory { category, skills })
    }

    /// The owning category is filled in by `skill_category`.
    fn skill(&mut self, value: &Value, path: &str) -> Option<Skill> {
        let obj = self.object(value, path, SKILL_FIELDS)?;
        let name = self.required_string(obj, path, "name");
        let level = self.required(obj, path, "level", Self::skill_level);
        let highlight = self.optional(obj, path, "highlight", Self::boolean);
        if obj.contains_key("highlight") && highlight.is_none() {
            return None;
        }
        Some(Skill {
            name: name?,
            level: level?,
            highlight: highlight.unwrap_or(false),
            category: String::new(),
        })
    }

    fn education(&mut self, value: &Value, path: &str) -> Option<Education> {
        let obj = self.object(value, path, EDUCATION_FIELDS)?;
        let id = self.required_string(obj, path, "id");
        let degree = self.required_string(obj, path, "degree");
        let institution = self.required_string(obj, path, "institution");
        let focus = self.required_string(obj, path, "focus");
        let kind = self.required(obj, path, "type", Self::literal::<EducationType>);
        let period = self.required(obj, path, "period", Self::period);
        let transferable_insight = self.optional(obj, path, "transferableInsight", Self::string);
        let highlights = self.optional_list(obj, path, "highlights", Self::string);
        Some(Education {
            id: id?,
            degree: degree?,
            institution: institution?,
            focus: focus?,
            kind: kind?,
            period: period?,
            transferable_insight,
            highlights,
        })
    }

    fn roots(&mut self, value: &Value, path: &str) -> Option<Roots> {
        let obj = self.object(value, path, ROOTS_FIELDS)?;
        let degree = self.required_string(obj, path, "degree");
        let institution = self.required_string(obj, path, "institution");
        let focus = self.required_string(obj, path, "focus");
        let transferable_insight = self.required_string(obj, path, "transferableInsight");
        Some(Roots {
            degree: degree?,
            institution: institution?,
            focus: focus?,
            transferable_insight: transferable_insight?,
        })
    }

    fn volunteering(&mut self, value: &Value, path: &str) -> Option<Volunteering> {
        let obj = self.object(value, path, VOLUNTEERING_FIELDS)?;
        let id = self.required_string(obj, path, "id");
        let organization = self.required_string(obj, path, "organization");
        let role = self.required_string(obj, path, "role");
        let period = self.required(obj, path, "period", Self::period);
        let description = self.required_string(obj, path, "description");
        let impact = self.optional(obj, path, "impact", Self::string);
        let highlights = self.optional_list(obj, path, "highlights", Self::string);
        let tags = self.optional_list(obj, path, "tags", Self::string);
        Some(Volunteering {
            id: id?,
            organization: organization?,
            role: role?,
            period: period?,
            description: description?,
            impact,
            highlights,
            tags,
        })
    }

    fn period(&mut self, value: &Value, path: &str) -> Option<Period> {
        let obj = self.object(value, path, PERIOD_FIELDS)?;
        let start = self.required_string(obj, path, "start");
        let end = match obj.get("end") {
            None | Some(Value::Null) => Some(None),
            Some(end) => self.string(end, &make_path(path, "end")).map(Some),
        };
        Some(Period {
            start: start?,
            end: end?,
        })
    }

    fn meta(&mut self, value: &Value, path: &str) -> Option<AgenticMeta> {
        let obj = self.object(value, path, META_FIELDS)?;
        let build_timestamp = self.required(obj, path, "buildTimestamp", Self::timestamp);
        let bundle_size = self.required_string(obj, path, "bundleSize");
        let source_url = self.required(obj, path, "sourceUrl", Self::web_url);
        let lighthouse_score = self.optional(obj, path, "lighthouseScore", Self::score);
        let agents = self.optional_list(obj, path, "agents", Self::agent);
        let gas_town = self.optional(obj, path, "gasTown", Self::gas_town);
        let polecats = self.optional_list(obj, path, "polecats", Self::polecat);
        let timeline = self.optional_list(obj, path, "timeline", Self::timeline_event);
        let stats = self.optional(obj, path, "stats", Self::stats);
        Some(AgenticMeta {
            build_timestamp: build_timestamp?,
            bundle_size: bundle_size?,
            source_url: source_url?,
            lighthouse_score,
            agents,
            gas_town,
            polecats,
            timeline,
            stats,
        })
    }

    fn agent(&mut self, value: &Value, path: &str) -> Option<Agent> {
        let obj = self.object(value, path, AGENT_FIELDS)?;
        let name = self.required_string(obj, path, "name");
        let contribution = self.required_string(obj, path, "contribution");
        Some(Agent {
            name: name?,
            contribution: contribution?,
        })
    }

    fn gas_town(&mut self, value: &Value, path: &str) -> Option<GasTown> {
        let obj = self.object(value, path, GAS_TOWN_FIELDS)?;
        let name = self.required_string(obj, path, "name");
        let mayor = self.optional(obj, path, "mayor", Self::string);
        let description = self.optional(obj, path, "description", Self::string);
        Some(GasTown {
            name: name?,
            mayor,
            description,
        })
    }

    fn polecat(&mut self, value: &Value, path: &str) -> Option<Polecat> {
        let obj = self.object(value, path, POLECAT_FIELDS)?;
        let name = self.required_string(obj, path, "name");
        let task = self.required_string(obj, path, "task");
        Some(Polecat {
            name: name?,
            task: task?,
        })
    }

    fn timeline_event(&mut self, value: &Value, path: &str) -> Option<TimelineEvent> {
        let obj = self.object(value, path, TIMELINE_FIELDS)?;
        let at = self.required_string(obj, path, "at");
        let event = self.required_string(obj, path, "event");
        Some(TimelineEvent {
            at: at?,
            event: event?,
        })
    }

    fn stats(&mut self, value: &Value, path: &str) -> Option<Map<String, Value>> {
        let Some(obj) = value.as_object() else {
            self.report
                .push(Violation::type_mismatch(path, "object", json_type_name(value)));
            return None;
        };
        let mut ok = true;
        for (key, stat) in obj {
            if !(stat.is_number() || stat.is_string()) {
                self.report.push(Violation::type_mismatch(
                    make_path(path, key),
                    "number or string",
                    json_type_name(stat),
                ));
                ok = false;
            }
        }
        ok.then(|| obj.clone())
    }

    // --- leaf rules ---

    fn string(&mut self, value: &Value, path: &str) -> Option<String> {
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.report
                    .push(Violation::type_mismatch(path, "string", json_type_name(value)));
                None
            }
        }
    }

    fn boolean(&mut self, value: &Value, path: &str) -> Option<bool> {
        match value.as_bool() {
            Some(b) => Some(b),
            None => {
                self.report
                    .push(Violation::type_mismatch(path, "bool", json_type_name(value)));
                None
            }
        }
    }

    fn literal<T: LiteralSet>(&mut self, value: &Value, path: &str) -> Option<T> {
        let s = self.string(value, path)?;
        match T::parse(&s) {
            Some(v) => Some(v),
            None => {
                self.report
                    .push(Violation::invalid_enum(path, &s, &T::allowed()));
                None
            }
        }
    }

    fn skill_level(&mut self, value: &Value, path: &str) -> Option<u8> {
        let (min, max) = SKILL_LEVEL_RANGE;
        let message = match value {
            Value::Number(n) => match n.as_i64() {
                Some(level) if (min..=max).contains(&level) => return u8::try_from(level).ok(),
                Some(level) => format!("level must be between {} and {}, got {}", min, max, level),
                None => format!("level must be an integer between {} and {}, got {}", min, max, n),
            },
            other => {
                self.report
                    .push(Violation::type_mismatch(path, "int", json_type_name(other)));
                return None;
            }
        };
        self.report
            .push(Violation::new(path, ViolationKind::OutOfRange, message));
        None
    }

    fn score(&mut self, value: &Value, path: &str) -> Option<f64> {
        let Some(score) = value.as_f64() else {
            self.report
                .push(Violation::type_mismatch(path, "number", json_type_name(value)));
            return None;
        };
        if !(0.0..=100.0).contains(&score) {
            self.report.push(Violation::new(
                path,
                ViolationKind::OutOfRange,
                format!("score must be between 0 and 100, got {}", score),
            ));
            return None;
        }
        Some(score)
    }

    fn timestamp(&mut self, value: &Value, path: &str) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        let s = self.string(value, path)?;
        match DateTime::parse_from_rfc3339(&s) {
            Ok(ts) => Some(ts),
            Err(e) => {
                self.report.push(Violation::new(
                    path,
                    ViolationKind::InvalidTimestamp,
                    format!("'{}' is not an ISO-8601 datetime: {}", s, e),
                ));
                None
            }
        }
    }

    /// Absolute http(s) URL.
    fn web_url(&mut self, value: &Value, path: &str) -> Option<String> {
        let s = self.string(value, path)?;
        let problem = match Url::parse(&s) {
            Ok(url) if is_web_url(&url) => return Some(s),
            Ok(url) => format!("'{}' uses unsupported scheme '{}'", s, url.scheme()),
            Err(e) => format!("'{}' is not an absolute URL: {}", s, e),
        };
        self.report
            .push(Violation::new(path, ViolationKind::InvalidUrl, problem));
        None
    }

    /// Absolute http(s) URL or a `mailto:` URI.
    fn link_href(&mut self, value: &Value, path: &str) -> Option<String> {
        let s = self.string(value, path)?;
        let problem = match Url::parse(&s) {
            Ok(url) if is_web_url(&url) => return Some(s),
            Ok(url) if url.scheme() == "mailto" && !url.path().is_empty() => return Some(s),
            Ok(url) if url.scheme() == "mailto" => format!("'{}' has no address", s),
            Ok(url) => format!("'{}' uses unsupported scheme '{}'", s, url.scheme()),
            Err(e) => format!("'{}' is neither an absolute URL nor a mailto URI: {}", s, e),
        };
        self.report
            .push(Violation::new(path, ViolationKind::InvalidUrl, problem));
        None
    }

    // --- structure ---

    fn object<'v>(&mut self, value: &'v Value, path: &str, declared: &[&str]) -> Option<&'v Object> {
        let Some(obj) = value.as_object() else {
            let at = if path.is_empty() { ROOT_PATH } else { path };
            self.report
                .push(Violation::type_mismatch(at, "object", json_type_name(value)));
            return None;
        };
        if self.strict {
            for key in obj.keys() {
                if !declared.contains(&key.as_str()) {
                    self.report
                        .push(Violation::unknown_field(make_path(path, key)));
                }
            }
        }
        Some(obj)
    }

    fn required<T>(
        &mut self,
        obj: &Object,
        path: &str,
        key: &str,
        rule: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<T> {
        let field_path = make_path(path, key);
        match obj.get(key) {
            Some(value) => rule(self, value, &field_path),
            None => {
                self.report.push(Violation::missing_field(field_path));
                None
            }
        }
    }

    fn required_string(&mut self, obj: &Object, path: &str, key: &str) -> Option<String> {
        self.required(obj, path, key, Self::string)
    }

    /// Absent yields `None` without a violation.
    fn optional<T>(
        &mut self,
        obj: &Object,
        path: &str,
        key: &str,
        rule: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<T> {
        let value = obj.get(key)?;
        rule(self, value, &make_path(path, key))
    }

    fn required_list<T>(
        &mut self,
        obj: &Object,
        path: &str,
        key: &str,
        bounds: Option<(usize, usize)>,
        rule: impl FnMut(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Vec<T>> {
        self.required(obj, path, key, |this, value, field_path| {
            this.list(value, field_path, bounds, rule)
        })
    }

    fn optional_list<T>(
        &mut self,
        obj: &Object,
        path: &str,
        key: &str,
        rule: impl FnMut(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Vec<T>> {
        self.optional(obj, path, key, |this, value, field_path| {
            this.list(value, field_path, None, rule)
        })
    }

    /// Checks every element even after one fails, so each bad element gets
    /// its own violation.
    fn list<T>(
        &mut self,
        value: &Value,
        path: &str,
        bounds: Option<(usize, usize)>,
        mut rule: impl FnMut(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Vec<T>> {
        let Some(items) = value.as_array() else {
            self.report
                .push(Violation::type_mismatch(path, "array", json_type_name(value)));
            return None;
        };

        let mut ok = true;
        if let Some((min, max)) = bounds {
            if items.len() < min || items.len() > max {
                self.report
                    .push(Violation::cardinality(path, min, max, items.len()));
                ok = false;
            }
        }

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match rule(self, item, &format!("{}[{}]", path, i)) {
                Some(v) => out.push(v),
                None => ok = false,
            }
        }
        ok.then_some(out)
    }
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.has_host()
}

/// Returns the JSON type name for violation messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}
