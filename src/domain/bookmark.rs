//! Bookmark value type and visibility scope

use crate::domain::tag::TagSet;

/// Visibility of a bookmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookmarkScope {
    #[default]
    Public,
    Private,
}

/// The bookmark being constructed: comment, tags, and visibility
///
/// Immutable; `with_*`/`to_*` methods return new values with single fields
/// overridden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bookmark {
    comment: String,
    tags: TagSet,
    scope: BookmarkScope,
}

impl Bookmark {
    /// A public bookmark with no comment and no tags
    pub fn empty() -> Self {
        Bookmark::default()
    }

    pub fn new(comment: impl Into<String>, tags: TagSet, scope: BookmarkScope) -> Self {
        Bookmark {
            comment: comment.into(),
            tags,
            scope,
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn scope(&self) -> BookmarkScope {
        self.scope
    }

    pub fn with_comment(&self, comment: impl Into<String>) -> Bookmark {
        Bookmark {
            comment: comment.into(),
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: TagSet) -> Bookmark {
        Bookmark {
            tags,
            ..self.clone()
        }
    }

    pub fn to_private(&self) -> Bookmark {
        Bookmark {
            scope: BookmarkScope::Private,
            ..self.clone()
        }
    }

    pub fn to_public(&self) -> Bookmark {
        Bookmark {
            scope: BookmarkScope::Public,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.comment.is_empty() && self.tags.is_empty()
    }
}
