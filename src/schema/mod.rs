//! Profile schema
//!
//! Declares every legal shape of a profile document and turns untyped JSON
//! into typed, immutable values.
//!
//! # Design Principles
//!
//! - Validation is a pure function of its input
//! - Every violation is reported, never only the first
//! - Defaults are applied only after a document is known to be valid
//! - Undeclared fields are ignored unless strict mode is requested
//! - Legacy and current document shapes are both accepted

mod errors;
mod loader;
mod types;
mod validator;

#[cfg(test)]
pub(crate) mod fixtures;

pub use errors::{
    SchemaError, SchemaResult, ValidationReport, Violation, ViolationKind, ROOT_PATH,
};
pub use loader::ProfileLoader;
pub use types::{
    Agent, AgenticMeta, CareerLevel, CtaLink, DeepDive, Education, EducationSource,
    EducationType, EmploymentType, EnhancedMeta, Experience, GasTown, Hero, Highlight,
    ImpactStat, LiteralSet, MetaVariant, Metric, Period, Philosophy, Polecat, Profile, Roots,
    Skill, SkillCategory, Source, TimelineEvent, Volunteering,
};
pub use validator::{
    ProfileValidator, ValidationOptions, IMPACT_STATS_RANGE, PHILOSOPHY_RANGE, SKILL_LEVEL_RANGE,
};
