//! Tag and TagSet value types

use crate::domain::rules::Match;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Regex for back-reference placeholders in target tags: ~0, ~1, ...
///
/// ASCII digits only; `\d` would also match Unicode digits, which the
/// group-index parse below cannot accept.
fn reference_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"~([0-9])").unwrap())
}

/// A single tag attached to a work or bookmark
///
/// Immutable; equality is exact text equality. A tag used as a rule target
/// may embed `~N` placeholders, resolved against a match result with
/// [`Tag::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    text: String,
}

impl Tag {
    pub fn new(text: impl Into<String>) -> Self {
        Tag { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace each `~N` placeholder with group N of the match result
    ///
    /// Absent groups (and failed matches) resolve to the empty string.
    pub fn resolve(&self, found: &Match) -> Tag {
        let text = reference_regex().replace_all(&self.text, |caps: &regex::Captures| {
            let idx: usize = caps[1].parse().unwrap();
            found.group(idx).to_string()
        });
        Tag::new(text)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Tag::new(text)
    }
}

/// An immutable collection of unique tags
///
/// Uniqueness is keyed by tag text. Insertion order is preserved for
/// iteration and output formatting, but equality is set equality.
/// All operations return new sets; a constructed set is never mutated.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    /// An empty tag set
    pub fn empty() -> Self {
        TagSet { tags: Vec::new() }
    }

    /// Build a set from tags, deduplicating while preserving first-seen order
    pub fn new(tags: Vec<Tag>) -> Self {
        tags.into_iter().collect()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate tags in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Union of self and other; elements of self first
    pub fn union(&self, other: &TagSet) -> TagSet {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Elements of self that are not in other
    pub fn diff(&self, other: &TagSet) -> TagSet {
        self.iter()
            .filter(|tag| !other.contains(tag))
            .cloned()
            .collect()
    }

    /// Elements of self that are also in other
    pub fn intersect(&self, other: &TagSet) -> TagSet {
        self.iter()
            .filter(|tag| other.contains(tag))
            .cloned()
            .collect()
    }

    /// A new set with the tag added (no-op when already present)
    pub fn append(&self, tag: Tag) -> TagSet {
        self.iter().cloned().chain(std::iter::once(tag)).collect()
    }

    /// A new set with the tag removed (no-op when absent)
    pub fn remove(&self, tag: &Tag) -> TagSet {
        self.iter().filter(|t| *t != tag).cloned().collect()
    }
}

impl PartialEq for TagSet {
    /// Set equality: same size and same members, order irrelevant
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|tag| other.contains(tag))
    }
}

impl Eq for TagSet {}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut tags: Vec<Tag> = Vec::new();
        for tag in iter {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        TagSet { tags }
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TagSet {
    /// Tags joined by single spaces, in insertion order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts: Vec<&str> = self.tags.iter().map(Tag::text).collect();
        write!(f, "{}", texts.join(" "))
    }
}
