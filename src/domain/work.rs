//! The work being bookmarked

use crate::domain::tag::TagSet;

/// An immutable snapshot of the work a bookmark is being built for
///
/// Rule patterns always match against `tags`; the set never changes while
/// rules run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    title: String,
    tags: TagSet,
}

impl Work {
    pub fn new(title: impl Into<String>, tags: TagSet) -> Self {
        Work {
            title: title.into(),
            tags,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}
