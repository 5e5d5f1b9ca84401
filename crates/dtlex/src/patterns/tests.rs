use super::*;

#[test]
fn all_is_in_discriminant_order() {
    for (i, pattern) in FieldPattern::ALL.iter().enumerate() {
        assert_eq!(*pattern as usize, i, "{pattern:?} out of order");
    }
}

#[test]
fn every_pattern_compiles() {
    assert_eq!(COMPILED.len(), FieldPattern::ALL.len());
}

#[test]
fn matches_are_anchored() {
    assert!(FieldPattern::Hour12.matches("12"));
    assert!(!FieldPattern::Hour12.matches("123"));
    assert!(!FieldPattern::Hour12.matches("x12"));
    assert!(!FieldPattern::Fraction.matches(".5x"));
}

#[test]
fn hour12() {
    for ok in ["1", "9", "01", "09", "10", "11", "12"] {
        assert!(FieldPattern::Hour12.matches(ok), "{ok}");
    }
    for bad in ["0", "00", "13", "24", ""] {
        assert!(!FieldPattern::Hour12.matches(bad), "{bad}");
    }
}

#[test]
fn hour24() {
    for ok in ["00", "09", "13", "19", "20", "24"] {
        assert!(FieldPattern::Hour24.matches(ok), "{ok}");
    }
    for bad in ["0", "25", "30", "99"] {
        assert!(!FieldPattern::Hour24.matches(bad), "{bad}");
    }
}

#[test]
fn minute_and_second() {
    assert!(FieldPattern::TwoDigitMinute.matches("59"));
    assert!(!FieldPattern::TwoDigitMinute.matches("60"));
    assert!(!FieldPattern::TwoDigitMinute.matches("5"));
    assert!(FieldPattern::Minute.matches("5"));
    assert!(FieldPattern::Minute.matches("05"));
    assert_eq!(FieldPattern::SECOND, FieldPattern::Minute);
    assert_eq!(FieldPattern::TWO_DIGIT_SECOND, FieldPattern::TwoDigitMinute);
}

#[test]
fn month_and_day() {
    assert!(FieldPattern::Month.matches("12"));
    assert!(FieldPattern::Month.matches("7"));
    assert!(!FieldPattern::Month.matches("13"));
    assert!(FieldPattern::TwoDigitMonth.matches("09"));
    assert!(FieldPattern::Day.matches("31"));
    assert!(FieldPattern::Day.matches("7"));
    assert!(!FieldPattern::Day.matches("32"));
    assert!(FieldPattern::TwoDigitDay.matches("30"));
    assert!(!FieldPattern::TwoDigitDay.matches("3"));
}

#[test]
fn day_of_year_and_week() {
    for ok in ["001", "099", "100", "299", "359", "366"] {
        assert!(FieldPattern::DayOfYear.matches(ok), "{ok}");
    }
    for bad in ["000", "367", "400", "1"] {
        assert!(!FieldPattern::DayOfYear.matches(bad), "{bad}");
    }
    assert!(FieldPattern::Week.matches("01"));
    assert!(FieldPattern::Week.matches("53"));
    assert!(!FieldPattern::Week.matches("00"));
}

#[test]
fn fraction() {
    assert!(FieldPattern::Fraction.matches(".1"));
    assert!(FieldPattern::Fraction.matches(".123456"));
    assert!(!FieldPattern::Fraction.matches("."));
    assert!(!FieldPattern::Fraction.matches("1.5"));
}

#[test]
fn meridian() {
    for ok in ["am", "PM", "a.m", "p.m.", "P.M.", "am.", "pm\t", "Am"] {
        assert!(FieldPattern::Meridian.matches(ok), "{ok:?}");
    }
    for bad in ["m", "pmm", "p..m", "ap", "W", "pm "] {
        assert!(!FieldPattern::Meridian.matches(bad), "{bad:?}");
    }
}
