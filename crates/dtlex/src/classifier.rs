//! End-of-run symbol classification.
//!
//! A run's symbol is decided only when it is flushed. [`RULES`] is checked in
//! order and the first rule whose predicate holds wins. Two-digit runs try
//! the 12-hour pattern before the 24-hour one: every 12-hour hour with two
//! digits is also a valid 24-hour hour, so the smaller range has to go first.

use crate::patterns::FieldPattern;
use crate::run_buffer::RunKinds;
use crate::Symbol;

/// One classification rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short description, for diagnostics and tests.
    pub name: &'static str,
    pub symbol: Symbol,
    applies: fn(&str, RunKinds) -> bool,
}

impl Rule {
    pub fn applies(&self, text: &str, kinds: RunKinds) -> bool {
        (self.applies)(text, kinds)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}

/// Classification rules in precedence order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "single digit",
        symbol: Symbol::Hour12,
        applies: |text, kinds| text.len() == 1 && kinds == RunKinds::DIGIT,
    },
    Rule {
        name: "two-digit 12-hour hour",
        symbol: Symbol::Hour12,
        applies: |text, kinds| {
            text.len() == 2 && kinds == RunKinds::DIGIT && FieldPattern::Hour12.matches(text)
        },
    },
    Rule {
        name: "two-digit 24-hour hour",
        symbol: Symbol::TwoDigits,
        applies: |text, kinds| {
            text.len() == 2 && kinds == RunKinds::DIGIT && FieldPattern::Hour24.matches(text)
        },
    },
    Rule {
        name: "digit run",
        symbol: Symbol::Digits,
        applies: |_, kinds| kinds == RunKinds::DIGIT,
    },
    Rule {
        name: "fraction",
        symbol: Symbol::Fraction,
        applies: |text, kinds| {
            kinds == RunKinds::DIGIT | RunKinds::PUNCTUATION && FieldPattern::Fraction.matches(text)
        },
    },
    Rule {
        name: "meridian",
        symbol: Symbol::Meridian,
        applies: |text, kinds| {
            (kinds == RunKinds::LETTER || kinds == RunKinds::LETTER | RunKinds::PUNCTUATION)
                && FieldPattern::Meridian.matches(text)
        },
    },
];

/// Classify a completed run.
///
/// Returns `None` when no rule matches; the tokenizer turns that into
/// [`LexError::Unclassifiable`](crate::LexError::Unclassifiable).
pub fn classify(text: &str, kinds: RunKinds) -> Option<Symbol> {
    RULES
        .iter()
        .find(|rule| rule.applies(text, kinds))
        .map(|rule| rule.symbol)
}
