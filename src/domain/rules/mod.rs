//! Rule system: patterns, rules, and the configuration parser

pub mod parser;
pub mod pattern;
pub mod rule;

// Re-export main types
pub use parser::{ParseError, RuleParser};
pub use pattern::{Match, Pattern};
pub use rule::{Quantifier, Rule, RuleAction, RuleSet};
