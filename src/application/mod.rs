//! Application layer - Use cases and orchestration

pub mod autotag;

pub use autotag::{auto_tag, AutoTagService};
