//! Property-based tests for certificate rendering
//!
//! Uses proptest to verify the filtering, ordering and escaping invariants
//! over arbitrary certificate collections.

use portfolio_core::template::CARD_CLASS;
use portfolio_core::{escape_html, FetchOutcome, GalleryView};
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Text that may include markup metacharacters
fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-zA-Z0-9 &<>"'/=]{1,24}"#).expect("valid regex")
}

/// A record that is valid or is missing one of its required fields
#[derive(Debug, Clone)]
enum RecordKind {
    Valid,
    NoName,
    NoIssuer,
}

fn record_strategy() -> impl Strategy<Value = (RecordKind, Value)> {
    (
        prop_oneof![
            3 => Just(RecordKind::Valid),
            1 => Just(RecordKind::NoName),
            1 => Just(RecordKind::NoIssuer),
        ],
        field_strategy(),
        field_strategy(),
        prop::collection::vec(field_strategy(), 0..3),
    )
        .prop_map(|(kind, name, issuer, skills)| {
            let record = match kind {
                RecordKind::Valid => json!({"name": name, "issuer": issuer, "skills": skills}),
                RecordKind::NoName => json!({"issuer": issuer, "skills": skills}),
                RecordKind::NoIssuer => json!({"name": name, "skills": skills}),
            };
            (kind, record)
        })
}

fn render(records: &[Value]) -> GalleryView {
    let body = json!({ "certificates": records }).to_string();
    GalleryView::from_outcome(FetchOutcome::Loaded(body))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Exactly the valid records are rendered, in source order
    #[test]
    fn valid_records_survive_in_order(records in prop::collection::vec(record_strategy(), 0..12)) {
        let values: Vec<Value> = records.iter().map(|(_, v)| v.clone()).collect();
        let valid: Vec<&Value> = records
            .iter()
            .filter(|(kind, _)| matches!(kind, RecordKind::Valid))
            .map(|(_, v)| v)
            .collect();

        let view = render(&values);
        let markup = view.markup();

        prop_assert_eq!(view.card_count(), valid.len());
        prop_assert_eq!(markup.matches(&format!(r#"class="{}""#, CARD_CLASS)).count(), valid.len());

        let mut cursor = 0;
        for record in valid {
            let heading = format!("<h3>{}</h3>", escape_html(record["name"].as_str().unwrap()));
            let found = markup[cursor..].find(&heading);
            prop_assert!(found.is_some(), "missing or out of order: {}", heading);
            cursor += found.unwrap() + heading.len();
        }
    }

    /// An empty or fully invalid list is always the empty state
    #[test]
    fn no_valid_records_means_empty_state(
        records in prop::collection::vec(record_strategy(), 0..6)
            .prop_filter("no valid records", |rs| rs.iter().all(|(k, _)| !matches!(k, RecordKind::Valid)))
    ) {
        let values: Vec<Value> = records.into_iter().map(|(_, v)| v).collect();
        prop_assert_eq!(render(&values), GalleryView::Empty);
    }

    /// No field value can inject raw markup
    #[test]
    fn fields_cannot_inject_markup(
        name in field_strategy(),
        issuer in field_strategy(),
        image in field_strategy(),
        pdf in field_strategy(),
        kind in field_strategy(),
    ) {
        let payload = "<x-injected a='1'>";
        let record = json!({
            "name": format!("{name}{payload}"),
            "issuer": format!("{issuer}{payload}"),
            "image": format!("{image}{payload}"),
            "pdf": format!("{pdf}{payload}"),
            "type": format!("{kind}{payload}"),
            "date": payload,
            "skills": [payload],
        });

        let markup = render(&[record]).markup();

        prop_assert!(!markup.contains("<x-injected"));
        prop_assert!(!markup.contains("a='1'"));
        // name twice (alt + heading), pdf twice (view + download)
        prop_assert_eq!(markup.matches("&lt;x-injected a=&#039;1&#039;&gt;").count(), 9);
    }

    /// Escaped text contains no raw metacharacters
    #[test]
    fn escape_removes_metacharacters(text in ".{0,64}") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains(&['<', '>', '"', '\''][..]));
        if !text.contains(&['&', '<', '>', '"', '\''][..]) {
            prop_assert_eq!(escaped.as_ref(), text.as_str());
        }
    }
}
