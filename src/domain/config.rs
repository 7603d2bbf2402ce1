//! Rule configuration text

use crate::domain::rules::{ParseError, RuleParser, RuleSet};
use serde::{Deserialize, Serialize};

/// The raw, unparsed rule script
///
/// Parsing is on demand and side-effect-free; nothing is cached, so editing
/// the text and re-parsing always reflects the current content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    rule_raw: String,
}

impl Config {
    pub fn new(rule_raw: impl Into<String>) -> Self {
        Config {
            rule_raw: rule_raw.into(),
        }
    }

    pub fn rule_raw(&self) -> &str {
        &self.rule_raw
    }

    /// Parse the rule text into a rule set, or every line's error
    pub fn rules(&self) -> Result<RuleSet, Vec<ParseError>> {
        RuleParser::parse(&self.rule_raw)
    }
}

impl Default for Config {
    /// The rule set shipped to new users: hide R-18 works
    fn default() -> Self {
        Config::new("private R-18")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rule_raw(), "private R-18");
        assert_eq!(config.rules().unwrap().len(), 1);
    }

    #[test]
    fn test_rules_reparses_each_call() {
        let config = Config::new("private R-18\nmatch 卯月 うーちゃん");
        assert_eq!(config.rules().unwrap().len(), 2);
        assert_eq!(config.rules().unwrap().len(), 2);
    }

    #[test]
    fn test_rules_surfaces_parse_errors() {
        let config = Config::new("bogus");
        let errors = config.rules().unwrap_err();
        assert_eq!(errors[0].line_number(), 1);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::new("private R-18\n# comment\n");
        let text = toml::to_string(&config).unwrap();
        let loaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(loaded, config);
    }
}
