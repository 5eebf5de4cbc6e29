//! folio - portfolio content schema and page view model
//!
//! A single JSON document describes a person's professional profile.
//! `schema` validates it, `render` maps a validated profile to the view
//! model presentation components draw from, and `cli` runs both as a
//! build step.

pub mod cli;
pub mod config;
pub mod observability;
pub mod render;
pub mod schema;
