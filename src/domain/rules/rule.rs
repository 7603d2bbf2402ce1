//! Rules and ordered rule sets

use crate::domain::bookmark::Bookmark;
use crate::domain::rules::pattern::{Match, Pattern};
use crate::domain::tag::{Tag, TagSet};
use crate::domain::work::Work;

/// How many of a rule's patterns must match the work's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// Any one pattern matching any tag triggers the rule
    Some,
    /// Every pattern must match some tag
    All,
}

/// What a triggered rule does to the bookmark
#[derive(Debug, Clone, PartialEq)]
pub enum RuleAction {
    /// Add the target tag (back-references resolved) to the bookmark
    Append(Tag),
    /// Remove the target tag (back-references resolved) from the bookmark
    Remove(Tag),
    /// Flip the bookmark to private
    MarkPrivate,
}

/// A single configured rule: a quantifier over patterns, driving an action
///
/// Rules are immutable once constructed. Pattern evaluation always reads the
/// work's tag set, never the bookmark being built.
#[derive(Debug, Clone)]
pub struct Rule {
    quantifier: Quantifier,
    action: RuleAction,
    patterns: Vec<Pattern>,
}

impl Rule {
    pub fn new(quantifier: Quantifier, action: RuleAction, patterns: Vec<Pattern>) -> Self {
        Rule {
            quantifier,
            action,
            patterns,
        }
    }

    pub fn append_some(tag: Tag, patterns: Vec<Pattern>) -> Self {
        Rule::new(Quantifier::Some, RuleAction::Append(tag), patterns)
    }

    pub fn append_all(tag: Tag, patterns: Vec<Pattern>) -> Self {
        Rule::new(Quantifier::All, RuleAction::Append(tag), patterns)
    }

    pub fn remove_some(tag: Tag, patterns: Vec<Pattern>) -> Self {
        Rule::new(Quantifier::Some, RuleAction::Remove(tag), patterns)
    }

    pub fn remove_all(tag: Tag, patterns: Vec<Pattern>) -> Self {
        Rule::new(Quantifier::All, RuleAction::Remove(tag), patterns)
    }

    pub fn private_some(patterns: Vec<Pattern>) -> Self {
        Rule::new(Quantifier::Some, RuleAction::MarkPrivate, patterns)
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    pub fn action(&self) -> &RuleAction {
        &self.action
    }

    /// Evaluate the quantifier against a tag set
    ///
    /// `Some`: the first pattern (in list order) that matches wins, and its
    /// captures are returned. `All`: every pattern must match some tag; the
    /// returned captures are those of the last pattern evaluated. Saved
    /// configurations depend on that last-match tie-break, so it stays.
    pub fn evaluate(&self, tags: &TagSet) -> Match {
        match self.quantifier {
            Quantifier::Some => {
                for pattern in &self.patterns {
                    let found = pattern.match_some(tags);
                    if found.succeeded() {
                        return found;
                    }
                }
                Match::failure()
            }
            Quantifier::All => {
                let mut last = Match::failure();
                for pattern in &self.patterns {
                    let found = pattern.match_some(tags);
                    if found.failed() {
                        return Match::failure();
                    }
                    last = found;
                }
                last
            }
        }
    }

    /// Apply this rule: evaluate against the work's tags and, on success,
    /// perform the action on the bookmark
    pub fn process(&self, work: &Work, bookmark: Bookmark) -> Bookmark {
        let found = self.evaluate(work.tags());
        if found.failed() {
            return bookmark;
        }

        match &self.action {
            RuleAction::Append(tag) => {
                let tags = bookmark.tags().append(tag.resolve(&found));
                bookmark.with_tags(tags)
            }
            RuleAction::Remove(tag) => {
                let tags = bookmark.tags().remove(&tag.resolve(&found));
                bookmark.with_tags(tags)
            }
            RuleAction::MarkPrivate => bookmark.to_private(),
        }
    }
}

/// An ordered sequence of rules applied as a strict left fold
///
/// Application order is significant: later rules observe the bookmark
/// produced by earlier ones, while their patterns still read the original
/// work tags.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// A new rule set with the rule appended
    pub fn append(&self, rule: Rule) -> RuleSet {
        let mut rules = self.rules.clone();
        rules.push(rule);
        RuleSet { rules }
    }

    /// Apply every rule in order, folding over the bookmark
    pub fn process(&self, work: &Work, bookmark: Bookmark) -> Bookmark {
        self.rules
            .iter()
            .fold(bookmark, |acc, rule| rule.process(work, acc))
    }
}
