//! Date/time field patterns.
//!
//! The classifier uses four of these (`Hour12`, `Hour24`, `Fraction`,
//! `Meridian`) to resolve runs at flush time. The rest describe the numeric
//! fields a downstream format grammar validates once it knows which field a
//! `Digits`/`TwoDigits`/`Hour12` token stands for.
//!
//! Every pattern is a full match: `"123"` does not match `Hour12` even though
//! `"12"` does. Patterns are compiled once, on first use.

use std::sync::LazyLock;

use regex::Regex;

/// A named date/time field pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldPattern {
    /// 12-hour hour, leading zero optional: `1`-`9`, `01`-`09`, `10`-`12`.
    Hour12,
    /// 24-hour hour, two digits: `00`-`24`.
    Hour24,
    /// Two-digit minute (also used for seconds): `00`-`59`.
    TwoDigitMinute,
    /// Minute with optional leading zero (also used for seconds).
    Minute,
    /// Two-digit month: `00`-`19`.
    TwoDigitMonth,
    /// Month with optional leading zero: `0`-`12`.
    Month,
    /// Day of month with optional leading digit: `0`-`31`.
    Day,
    /// Two-digit day of month: `00`-`31`.
    TwoDigitDay,
    /// Three-digit day of year: `001`-`366`.
    DayOfYear,
    /// ISO week number.
    Week,
    /// Fractional seconds: `.` followed by one or more digits.
    Fraction,
    /// AM/PM designator: `a`/`p`, optional dot, `m`, optional dot, optional tab.
    Meridian,
}

impl FieldPattern {
    /// Every pattern, in discriminant order.
    pub const ALL: [FieldPattern; 12] = [
        FieldPattern::Hour12,
        FieldPattern::Hour24,
        FieldPattern::TwoDigitMinute,
        FieldPattern::Minute,
        FieldPattern::TwoDigitMonth,
        FieldPattern::Month,
        FieldPattern::Day,
        FieldPattern::TwoDigitDay,
        FieldPattern::DayOfYear,
        FieldPattern::Week,
        FieldPattern::Fraction,
        FieldPattern::Meridian,
    ];

    pub const SECOND: FieldPattern = FieldPattern::Minute;
    pub const TWO_DIGIT_SECOND: FieldPattern = FieldPattern::TwoDigitMinute;

    /// Unanchored regex source of the pattern.
    pub const fn source(self) -> &'static str {
        match self {
            FieldPattern::Hour12 => "0?[1-9]|1[0-2]",
            FieldPattern::Hour24 => "[01][0-9]|2[0-4]",
            FieldPattern::TwoDigitMinute => "[0-5][0-9]",
            FieldPattern::Minute => "0?[0-9]|[0-5][0-9]",
            FieldPattern::TwoDigitMonth => "[0-1][0-9]",
            FieldPattern::Month => "0?[0-9]|1[0-2]",
            FieldPattern::Day => "[0-2]?[0-9]|3[01]",
            FieldPattern::TwoDigitDay => "0[0-9]|[1-2][0-9]|3[01]",
            FieldPattern::DayOfYear => "00[1-9]|0[1-9][0-9]|[1-2][0-9][0-9]|3[0-5][0-9]|36[0-6]",
            FieldPattern::Week => "0[1-9]|[1-5][0-3]",
            FieldPattern::Fraction => r"\.[0-9]+",
            FieldPattern::Meridian => r"[AaPp]\.?[Mm]\.?\t?",
        }
    }

    /// `true` if the whole of `text` matches the pattern.
    pub fn matches(self, text: &str) -> bool {
        COMPILED[self as usize].is_match(text)
    }
}

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FieldPattern::ALL
        .iter()
        .map(|pattern| compile_anchored(pattern.source()))
        .collect()
});

#[allow(
    clippy::expect_used,
    reason = "pattern sources are constants; every one is compiled in tests"
)]
fn compile_anchored(source: &str) -> Regex {
    Regex::new(&format!("^(?:{source})$")).expect("field pattern must compile")
}

#[cfg(test)]
mod tests;
