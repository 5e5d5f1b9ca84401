use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_str(), "");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("2024-01-05");
    assert_eq!(buf.len(), 10);
    assert!(!buf.is_empty());
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn utf8_multibyte_source() {
    let source = "5 h\u{e9}ures \u{1F600}";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert!(buf.encoding_issues().is_empty());
}

// === Encoding Issues ===

#[test]
fn utf8_bom_detected() {
    let buf = SourceBuffer::new("\u{FEFF}12:30");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn interior_nulls_detected() {
    let buf = SourceBuffer::new("12\u{0}30\u{0}");
    let positions: Vec<u32> = buf
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InteriorNull)
        .map(|i| i.pos)
        .collect();
    assert_eq!(positions, vec![2, 5]);
}

#[test]
fn bom_and_null_together() {
    let buf = SourceBuffer::new("\u{FEFF}\u{0}");
    let kinds: Vec<EncodingIssueKind> = buf.encoding_issues().iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![EncodingIssueKind::Utf8Bom, EncodingIssueKind::InteriorNull]
    );
}
