//! Render Contract Tests
//!
//! Rendering invariants over validated profiles:
//! - Count-up parsing of hero stat values
//! - Period formatting with month names and "Present"
//! - Document order is preserved
//! - Legacy and enhanced shapes always render
//! - Same profile, same options, same page

mod common;

use chrono::DateTime;
use common::*;
use folio::render::{
    BuildInfo, EducationView, FooterBranch, MonthStyle, PageView, RenderOptions, Renderer,
    StatDisplay,
};
use folio::schema::{Profile, ProfileValidator};
use serde_json::{json, Value};

fn profile(doc: &Value) -> Profile {
    ProfileValidator::default()
        .validate(doc)
        .expect("fixture is valid")
}

fn render(doc: &Value) -> PageView {
    Renderer::default().render(&profile(doc))
}

// =============================================================================
// Hero
// =============================================================================

/// Stat values split into prefix, number and suffix.
#[test]
fn test_count_up_parsing() {
    let page = render(&sample_document());
    let displays: Vec<_> = page.hero.stats.iter().map(|s| &s.display).collect();

    match displays[0] {
        StatDisplay::CountUp(c) => {
            assert_eq!((c.prefix.as_str(), c.target, c.suffix.as_str()), ("", 270.0, "+"));
        }
        other => panic!("expected count-up, got {:?}", other),
    }
    match displays[1] {
        StatDisplay::CountUp(c) => {
            assert_eq!((c.prefix.as_str(), c.target, c.suffix.as_str()), ("€", 0.5, "M+"));
        }
        other => panic!("expected count-up, got {:?}", other),
    }
    match displays[2] {
        StatDisplay::CountUp(c) => {
            assert_eq!((c.target, c.suffix.as_str()), (99.99, "%"));
        }
        other => panic!("expected count-up, got {:?}", other),
    }
}

/// A value with no number is shown verbatim.
#[test]
fn test_non_numeric_stat_is_static() {
    let mut doc = sample_document();
    doc["hero"]["impactStats"][2]["value"] = json!("Present");

    let page = render(&doc);
    assert_eq!(
        page.hero.stats[2].display,
        StatDisplay::Static {
            text: "Present".into()
        }
    );
}

/// Stats pass through unchanged next to their display.
#[test]
fn test_stats_pass_through() {
    let doc = sample_document();
    let profile = profile(&doc);
    let page = Renderer::default().render(&profile);
    let stats: Vec<_> = page.hero.stats.iter().map(|s| s.stat.clone()).collect();
    assert_eq!(stats, profile.hero.impact_stats);

    let json = serde_json::to_value(&page.hero.stats[0]).unwrap();
    assert_eq!(json["id"], "deploys");
    assert_eq!(json["value"], "270+");
    assert_eq!(json["display"]["kind"], "countUp");
}

// =============================================================================
// Experience
// =============================================================================

/// An open-ended year period ends in "Present".
#[test]
fn test_year_period_with_open_end() {
    let mut doc = sample_document();
    doc["experience"][1]["period"] = json!({"start": "2016", "end": null});

    let page = render(&doc);
    assert_eq!(page.experience[1].period, "2016 — Present");
    assert!(page.experience[1].is_current);
}

/// Year-month periods render month names on both ends.
#[test]
fn test_month_period_localized() {
    let page = render(&sample_document());
    assert_eq!(page.experience[0].period, "Mar 2022 — Nov 2023");
    assert!(!page.experience[0].period.contains("2022-03"));

    let long = Renderer::new(RenderOptions {
        month_style: MonthStyle::Long,
        ..RenderOptions::default()
    })
    .render(&profile(&sample_document()));
    assert_eq!(long.experience[0].period, "March 2022 — November 2023");
}

/// Timeline order is document order, not date order.
#[test]
fn test_timeline_keeps_document_order() {
    let mut doc = sample_document();
    let entries = doc["experience"].as_array_mut().unwrap();
    entries.reverse();

    let page = render(&doc);
    let ids: Vec<_> = page.experience.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["northwind", "acme"]);
}

/// Only non-full-time roles get a badge; missing leadership omits the block.
#[test]
fn test_optional_experience_elements() {
    let page = render(&sample_document());
    assert_eq!(page.experience[0].employment_badge.as_deref(), Some("Contract"));
    assert!(page.experience[0].deep_dive.leadership_highlights.is_some());

    assert_eq!(page.experience[1].employment_badge, None);
    assert_eq!(page.experience[1].deep_dive.leadership_highlights, None);
}

// =============================================================================
// Skills
// =============================================================================

/// Unknown categories fall back to the default treatment.
#[test]
fn test_unknown_skill_category_renders() {
    let mut doc = sample_document();
    doc["skills"][1]["category"] = json!("Underwater Basket Weaving");

    let page = render(&doc);
    assert_eq!(page.skills.len(), 2);
    assert_eq!(page.skills[0].category, "Languages");
    assert_eq!(page.skills[1].accent, "slate");
    assert_eq!(page.skills[1].skills[0].category, "Underwater Basket Weaving");
}

/// Skill levels map onto a percentage.
#[test]
fn test_skill_percent() {
    let page = render(&sample_document());
    let levels: Vec<_> = page.skills[0]
        .skills
        .iter()
        .map(|s| (s.level, s.percent))
        .collect();
    assert_eq!(levels, vec![(5, 100), (4, 80), (3, 60)]);
}

// =============================================================================
// Education
// =============================================================================

/// Entries are used when present.
#[test]
fn test_education_entries() {
    let page = render(&sample_document());
    assert!(matches!(page.education, EducationView::Entries { ref entries } if entries.len() == 1));
}

/// Roots are used when there are no entries.
#[test]
fn test_education_roots_fallback() {
    let page = render(&roots_only_document());
    match page.education {
        EducationView::Roots { roots } => assert_eq!(roots.degree, "BSc Computer Science"),
        other => panic!("expected roots, got {:?}", other),
    }
}

/// Entries win when both are present.
#[test]
fn test_education_entries_win_over_roots() {
    let mut doc = sample_document();
    doc["roots"] = roots();
    assert!(matches!(render(&doc).education, EducationView::Entries { .. }));
}

// =============================================================================
// Volunteering
// =============================================================================

/// The section is omitted when absent or empty.
#[test]
fn test_volunteering_omitted() {
    assert!(render(&sample_document()).volunteering.is_some());

    let mut doc = sample_document();
    doc["volunteering"] = json!([]);
    let page = render(&doc);
    assert!(page.volunteering.is_none());
    assert!(serde_json::to_value(&page)
        .unwrap()
        .get("volunteering")
        .is_none());

    doc.as_object_mut().unwrap().remove("volunteering");
    assert!(render(&doc).volunteering.is_none());
}

// =============================================================================
// Footer
// =============================================================================

/// Legacy meta shows the agent list.
#[test]
fn test_footer_legacy_branch() {
    let page = render(&sample_document());
    match &page.footer.branch {
        FooterBranch::Legacy { agents } => assert_eq!(agents.len(), 2),
        other => panic!("expected legacy footer, got {:?}", other),
    }
    assert_eq!(page.footer.build_timestamp, "2024-05-01T12:30:00Z");
    assert_eq!(page.footer.built_on, "1 May 2024");
    assert_eq!(page.footer.bundle_size, "142 KB");
}

/// Enhanced meta shows the enhanced content; stats sort by key.
#[test]
fn test_footer_enhanced_branch() {
    let page = render(&enhanced_document());
    match &page.footer.branch {
        FooterBranch::Enhanced {
            gas_town, stats, ..
        } => {
            assert_eq!(gas_town.name, "Portfolio Town");
            let keys: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(keys, vec!["agents", "commits"]);
            assert_eq!(stats[1].detail, "42");
        }
        other => panic!("expected enhanced footer, got {:?}", other),
    }
}

/// Partial enhanced meta falls back to agents, then to the minimal footer.
#[test]
fn test_footer_fallbacks() {
    let mut doc = enhanced_document();
    doc["meta"].as_object_mut().unwrap().remove("timeline");
    assert!(matches!(render(&doc).footer.branch, FooterBranch::Legacy { .. }));

    doc["meta"].as_object_mut().unwrap().remove("agents");
    let page = render(&doc);
    assert_eq!(page.footer.branch, FooterBranch::Minimal);
    assert_eq!(
        serde_json::to_value(&page.footer).unwrap()["branch"]["variant"],
        "minimal"
    );
}

/// Injected build info overrides document values.
#[test]
fn test_build_info_overrides_document() {
    let renderer = Renderer::new(RenderOptions {
        build: BuildInfo {
            build_timestamp: Some(DateTime::parse_from_rfc3339("2025-02-03T04:05:06Z").unwrap()),
            git_commit: Some("abc1234".into()),
            bundle_size: None,
        },
        ..RenderOptions::default()
    });
    let page = renderer.render(&profile(&sample_document()));
    assert_eq!(page.footer.build_timestamp, "2025-02-03T04:05:06Z");
    assert_eq!(page.footer.git_commit.as_deref(), Some("abc1234"));
    assert_eq!(page.footer.bundle_size, "142 KB");
}

// =============================================================================
// Determinism
// =============================================================================

/// Rendering the same profile twice gives identical JSON.
#[test]
fn test_render_is_deterministic() {
    let profile = profile(&enhanced_document());
    let renderer = Renderer::default();
    let first = serde_json::to_string(&renderer.render(&profile)).unwrap();
    for _ in 0..10 {
        assert_eq!(serde_json::to_string(&renderer.render(&profile)).unwrap(), first);
    }
}
