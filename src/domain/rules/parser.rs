//! Rule configuration parsing
//!
//! Turns the line-oriented rule DSL into a [`RuleSet`]. Each line is
//! classified independently; parsing never stops at the first problem, so a
//! broken configuration reports every offending line at once.
//!
//! ```
//! use autotag::domain::rules::RuleParser;
//!
//! let rules = RuleParser::parse("private R-18\nmatch 艦隊これくしょん 艦これ").unwrap();
//! assert_eq!(rules.len(), 2);
//! ```

use crate::domain::rules::pattern::Pattern;
use crate::domain::rules::rule::{Rule, RuleSet};
use crate::domain::tag::Tag;
use std::fmt;

/// A parse failure tied to a 1-based line of the configuration text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line_number: usize,
    message: String,
}

impl ParseError {
    pub fn new(line_number: usize, message: String) -> Self {
        ParseError {
            line_number,
            message,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line_number, self.message)
    }
}

/// Parser for the rule configuration DSL
///
/// Grammar, one rule per line, tokens separated by runs of whitespace:
///
/// ```text
/// <blank>                              ignored
/// # comment                            ignored
/// private <tag> ...                    mark-private rule, quantifier some
/// match       <target> <literal> ...   append/remove rule, exact patterns
/// match_all   <target> <literal> ...   same, quantifier all
/// pattern     <target> <regex> ...     append/remove rule, regex patterns
/// pattern_all <target> <regex> ...     same, quantifier all
/// addition_pattern[_all] ...           rejected (unsupported)
/// ```
///
/// A target starting with `-` selects the remove action. Commands are
/// case-insensitive.
pub struct RuleParser;

impl RuleParser {
    /// Parse configuration text into a rule set, or every line's error
    ///
    /// The produced set orders rules by bucket: private rules first, then
    /// some-quantified, then all-quantified; within a bucket, source order.
    pub fn parse(text: &str) -> Result<RuleSet, Vec<ParseError>> {
        let mut private_rules = Vec::new();
        let mut some_rules = Vec::new();
        let mut all_rules = Vec::new();
        let mut errors = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_number = idx + 1;

            let rest = line.trim_start();
            if rest.is_empty() || rest.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let command = tokens[0].to_lowercase();

            match command.as_str() {
                "private" if tokens.len() >= 2 => {
                    let patterns = tokens[1..].iter().map(|t| Pattern::exact(t)).collect();
                    private_rules.push(Rule::private_some(patterns));
                }
                "match" | "match_all" | "pattern" | "pattern_all" if tokens.len() >= 3 => {
                    let all = command.ends_with("_all");
                    let (remove, name) = match tokens[1].strip_prefix('-') {
                        Some(stripped) => (true, stripped),
                        None => (false, tokens[1]),
                    };
                    let target = Tag::new(name);
                    let operands = &tokens[2..];

                    let patterns = if command.starts_with("match") {
                        operands.iter().map(|op| Pattern::exact(op)).collect()
                    } else {
                        match compile_operands(operands, line_number, &mut errors) {
                            Some(patterns) => patterns,
                            None => continue,
                        }
                    };

                    let rule = match (remove, all) {
                        (false, false) => Rule::append_some(target, patterns),
                        (false, true) => Rule::append_all(target, patterns),
                        (true, false) => Rule::remove_some(target, patterns),
                        (true, true) => Rule::remove_all(target, patterns),
                    };
                    if all {
                        all_rules.push(rule);
                    } else {
                        some_rules.push(rule);
                    }
                }
                "addition_pattern" | "addition_pattern_all" if tokens.len() >= 3 => {
                    errors.push(ParseError::new(
                        line_number,
                        format!("addition_pattern rules are not supported: {line}"),
                    ));
                }
                _ => {
                    errors.push(ParseError::new(
                        line_number,
                        format!("invalid command or insufficient arguments: {line}"),
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let rules = private_rules
            .into_iter()
            .chain(some_rules)
            .chain(all_rules)
            .collect();
        Ok(RuleSet::new(rules))
    }
}

/// Compile regex operands, or record each failure and yield no rule
fn compile_operands(
    operands: &[&str],
    line_number: usize,
    errors: &mut Vec<ParseError>,
) -> Option<Vec<Pattern>> {
    let mut patterns = Vec::with_capacity(operands.len());
    let mut failed = false;

    for operand in operands {
        match Pattern::regexp(operand) {
            Ok(pattern) => patterns.push(pattern),
            Err(err) => {
                errors.push(ParseError::new(line_number, err.to_string()));
                failed = true;
            }
        }
    }

    if failed {
        None
    } else {
        Some(patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::rule::{Quantifier, RuleAction};

    #[test]
    fn test_parse_full_config() {
        let text = "# 非公開設定\n\
                    private R-18 R-18G R-17.9 R-15\n\
                    \n\
                    # 一般\n\
                    pattern オリジナル オリジナル\n\
                    match       -~1 艦これ\n\
                    match_all   アリス・キャロル ARIA アリス\n\
                    pattern_all ~1 ^艦これ$|^艦隊これくしょん$ ^(.+)(改|改二)$\n\
                    match 卯月 うーちゃん\n";

        let rules = RuleParser::parse(text).unwrap();
        assert_eq!(rules.len(), 6);
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let rules = RuleParser::parse("\n   \n# comment\n   # indented comment\n").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_empty_text_yields_empty_rule_set() {
        assert!(RuleParser::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_bucket_ordering() {
        // Declared all, some, private; applied private, some, all
        let text = "pattern_all ~1 ^(.+)改$\n\
                    match 艦隊これくしょん 艦これ\n\
                    private R-18\n";

        let rules = RuleParser::parse(text).unwrap();
        let shape: Vec<(Quantifier, bool)> = rules
            .iter()
            .map(|r| (r.quantifier(), matches!(r.action(), RuleAction::MarkPrivate)))
            .collect();
        assert_eq!(
            shape,
            vec![
                (Quantifier::Some, true),
                (Quantifier::Some, false),
                (Quantifier::All, false),
            ]
        );
    }

    #[test]
    fn test_remove_target_prefix() {
        let rules = RuleParser::parse("match -艦これ 艦これ\nmatch_all -アリス ARIA アリス\n").unwrap();
        let actions: Vec<&RuleAction> = rules.iter().map(|r| r.action()).collect();
        assert!(matches!(actions[0], RuleAction::Remove(tag) if tag.text() == "艦これ"));
        assert!(matches!(actions[1], RuleAction::Remove(tag) if tag.text() == "アリス"));
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let rules = RuleParser::parse("PRIVATE R-18\nMatch_All アリス ARIA アリス\n").unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_malformed_line_error() {
        let errors = RuleParser::parse("macth_all 多々良小傘 東方 小傘\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_number(), 1);
        assert_eq!(
            errors[0].message(),
            "invalid command or insufficient arguments: macth_all 多々良小傘 東方 小傘"
        );
    }

    #[test]
    fn test_too_few_arguments_is_malformed() {
        assert!(RuleParser::parse("match 艦これ\n").is_err());
        assert!(RuleParser::parse("private\n").is_err());
        assert!(RuleParser::parse("pattern_all ~1\n").is_err());
    }

    #[test]
    fn test_addition_pattern_is_rejected() {
        let errors = RuleParser::parse("addition_pattern ~1 ^アズールレーン$ ^卯月$\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message(),
            "addition_pattern rules are not supported: addition_pattern ~1 ^アズールレーン$ ^卯月$"
        );
    }

    #[test]
    fn test_invalid_regex_reports_operand() {
        let errors = RuleParser::parse("pattern ~1 (\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_number(), 1);
        assert!(errors[0]
            .message()
            .starts_with("invalid regular expression '('"));
    }

    #[test]
    fn test_invalid_regex_does_not_abort_other_lines() {
        // Line 2 is broken; lines 1 and 3 still parse, but no set is built
        let errors = RuleParser::parse("private R-18\npattern ~1 (\nmatch 卯月 うーちゃん\n")
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_number(), 2);
    }

    #[test]
    fn test_error_aggregation_reports_every_line() {
        let text = "private R-18\n\
                    bogus\n\
                    match 卯月 うーちゃん\n\
                    addition_pattern x y z\n\
                    pattern オリジナル オリジナル\n";

        let errors = RuleParser::parse(text).unwrap_err();
        let lines: Vec<usize> = errors.iter().map(ParseError::line_number).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "private R-18\npattern_all ~1 ^(.+)(改)$\n";
        let first = RuleParser::parse(text).unwrap();
        let second = RuleParser::parse(text).unwrap();
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(3, "invalid command or insufficient arguments: x".to_string());
        assert_eq!(err.to_string(), "3: invalid command or insufficient arguments: x");
    }
}
