//! autotag - Rule-driven automatic tagging for bookmarks
//!
//! Given a work's tags and the site's trending tags, derives a bookmark's
//! tag list and visibility by applying a user-authored rule script. The
//! script is a small line-oriented DSL (exact and regex patterns, some/all
//! quantifiers, back-reference substitution into target tags); the engine
//! is a pure function of its inputs with no state between invocations.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AutotagError;
