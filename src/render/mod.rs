//! Page rendering
//!
//! Maps a validated profile to per-section view models. Pure and
//! synchronous: no clock, no randomness, no I/O.

mod countup;
mod period;
mod renderer;
mod view;

pub use countup::{parse_display_value, CountUp, StatDisplay, CURRENCY_GLYPHS};
pub use period::{format_period, format_point, MonthStyle, PERIOD_SEPARATOR, PRESENT};
pub use renderer::{
    career_level_label, category_treatment, education_type_label, employment_label, BuildInfo,
    RenderOptions, Renderer,
};
pub use view::{
    CategoryTreatment, CtaView, DeepDiveView, EducationCard, EducationView, FooterBranch,
    FooterView, GasTownView, HeroView, LinkKind, NamedLine, PageView, PhilosophyView,
    SkillGroupView, SkillNode, StatView, TimelineEntry, VolunteeringEntry,
};
