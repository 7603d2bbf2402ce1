//! Automatic tagging use case
//!
//! Orchestrates the full workflow: load the rule configuration, seed a
//! bookmark from the trending tags, and fold the parsed rules over it.

use crate::domain::rules::ParseError;
use crate::domain::{Bookmark, Config, TagSet, Work};
use crate::error::{AutotagError, Result};
use crate::infrastructure::ConfigStore;

/// Derive a bookmark from a work using the given configuration
///
/// This is the pure core: no state survives a call, and equal inputs give
/// equal bookmarks. The seed tag set is the intersection of the work's tags
/// with the trending tags, which keeps rarely used tags out unless a rule
/// adds them back.
///
/// # Errors
///
/// Returns the full list of line-numbered parse errors when the rule text
/// is invalid; no partial bookmark is produced.
pub fn auto_tag(
    config: &Config,
    trending: &TagSet,
    work: &Work,
) -> std::result::Result<Bookmark, Vec<ParseError>> {
    let rules = config.rules()?;

    let seed = work.tags().intersect(trending);
    let bookmark = Bookmark::empty().with_tags(seed);

    Ok(rules.process(work, bookmark))
}

/// Service running automatic tagging against a configuration store
pub struct AutoTagService<S: ConfigStore> {
    store: S,
}

impl<S: ConfigStore> AutoTagService<S> {
    pub fn new(store: S) -> Self {
        AutoTagService { store }
    }

    /// Execute auto-tagging for a work and the site's trending tags
    ///
    /// 1. Load the stored configuration; fall back to [`Config::default`]
    ///    when nothing is stored
    /// 2. Parse the rule text; any error aborts with the collected list
    /// 3. Seed with `work.tags ∩ trending` and apply the rules
    pub fn execute(&self, trending: &TagSet, work: &Work) -> Result<Bookmark> {
        let config = self.store.load()?.unwrap_or_default();

        auto_tag(&config, trending, work).map_err(AutotagError::RuleSyntax)
    }
}
