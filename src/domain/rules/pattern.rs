//! Compiled tag patterns and their match results

use crate::domain::tag::{Tag, TagSet};
use crate::error::{AutotagError, Result};
use regex::Regex;

/// A compiled matcher evaluated against tag text
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// A pattern matching exactly the given text
    ///
    /// Regex metacharacters are escaped and the expression is anchored, so
    /// the whole tag must equal `text`.
    pub fn exact(text: &str) -> Pattern {
        let regex = Regex::new(&format!("^{}$", regex::escape(text)))
            .expect("escaped pattern is a valid regex");
        Pattern { regex }
    }

    /// A pattern compiled from a regular expression
    pub fn regexp(source: &str) -> Result<Pattern> {
        let regex = Regex::new(source).map_err(|e| AutotagError::InvalidPattern {
            pattern: source.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Pattern { regex })
    }

    /// Match a single tag, capturing groups on success
    pub fn matches(&self, tag: &Tag) -> Match {
        match self.regex.captures(tag.text()) {
            Some(caps) => Match::from_captures(&caps),
            None => Match::failure(),
        }
    }

    /// Match against a tag set, returning the first success in set order
    ///
    /// Iteration order is the set's insertion order, so which tag's capture
    /// groups win is deterministic.
    pub fn match_some(&self, tags: &TagSet) -> Match {
        for tag in tags {
            let found = self.matches(tag);
            if found.succeeded() {
                return found;
            }
        }
        Match::failure()
    }
}

/// The outcome of applying a [`Pattern`] to a tag
///
/// A successful match owns a snapshot of its capture groups; group 0 is the
/// overall match. A failed match carries no group data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    groups: Option<Vec<Option<String>>>,
}

impl Match {
    /// A match that found nothing
    pub fn failure() -> Match {
        Match { groups: None }
    }

    fn from_captures(caps: &regex::Captures<'_>) -> Match {
        let groups = (0..caps.len())
            .map(|idx| caps.get(idx).map(|g| g.as_str().to_string()))
            .collect();
        Match {
            groups: Some(groups),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.groups.is_some()
    }

    pub fn failed(&self) -> bool {
        self.groups.is_none()
    }

    /// Text of capture group `idx`, or "" when the group is unset or the
    /// match failed
    pub fn group(&self, idx: usize) -> &str {
        self.groups
            .as_ref()
            .and_then(|groups| groups.get(idx))
            .and_then(|group| group.as_deref())
            .unwrap_or("")
    }
}
