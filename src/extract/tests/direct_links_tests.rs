use crate::config::{ExtractStrategy, SelectorProfile};
use crate::error::ConfigError;
use crate::extract::PageExtractor;

fn direct_extractor(pattern: &str) -> PageExtractor {
    PageExtractor::new(
        &SelectorProfile::default(),
        &ExtractStrategy::DirectLinks {
            pattern: pattern.to_string(),
        },
    )
    .unwrap()
}

#[test]
fn test_collects_only_matching_anchors() {
    let html = r#"<html><body>
        <a href="/about">About us</a>
        <a href="/media/docs/guide.ashx">Loss Guide</a>
        <nav><a href="/media/docs/rates.ashx">Rate Handbook</a></nav>
        <a href="/media/docs/notes.pdf">Notes</a>
    </body></html>"#;

    let snapshot = direct_extractor(r"\.ashx$").snapshot(html);

    assert_eq!(snapshot.rows.len(), 2);
    assert_eq!(snapshot.rows[0].text, "Loss Guide");
    assert_eq!(snapshot.rows[0].href, "/media/docs/guide.ashx");
    assert_eq!(snapshot.rows[1].text, "Rate Handbook");
}

#[test]
fn test_anchor_without_text_falls_back_to_filename() {
    let html = r#"<html><body>
        <a href="/media/docs/guide.ashx?v=2"><img src="/icons/doc.png"></a>
    </body></html>"#;

    let snapshot = direct_extractor(r"\.ashx").snapshot(html);

    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.rows[0].text, "guide.ashx");
}

#[test]
fn test_pagination_state_still_comes_from_the_control() {
    let html = r#"<html><body>
        <a href="/media/docs/guide.ashx">Guide</a>
        <a id="handbookDataTable_next" class="next">Next</a>
    </body></html>"#;

    let snapshot = direct_extractor(r"\.ashx$").snapshot(html);

    assert!(snapshot.has_next);
    assert_eq!(snapshot.rows.len(), 1);
}

#[test]
fn test_invalid_pattern_is_a_config_error() {
    let err = PageExtractor::new(
        &SelectorProfile::default(),
        &ExtractStrategy::DirectLinks {
            pattern: "[unclosed".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Pattern { .. }));
}
