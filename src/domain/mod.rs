//! Domain layer - Business logic and domain models

pub mod bookmark;
pub mod config;
pub mod rules;
pub mod tag;
pub mod work;

pub use bookmark::{Bookmark, BookmarkScope};
pub use config::Config;
pub use tag::{Tag, TagSet};
pub use work::Work;
