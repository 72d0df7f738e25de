use super::*;

fn parse(body: &str) -> Vec<Show> {
    serde_json::from_str::<ShowListResponse>(body)
        .expect("parse show list")
        .into_shows()
}

#[test]
fn bare_and_envelope_lists_normalize_identically() {
    let items = r#"[
        {"ID": 1, "tvdbid": 81189, "title": "Breaking Bad", "quality": "720p", "episodal": true, "last_update": 10},
        {"ID": 2, "title": "Cosmos", "episodal": false}
    ]"#;
    let bare = parse(items);
    let envelope = parse(&format!(r#"{{"Shows": {}}}"#, items));

    assert_eq!(bare, envelope);
    assert_eq!(bare.len(), 2);
    assert_eq!(bare[0].id, Some(ShowId(1)));
    assert_eq!(bare[1].quality, "");
    assert!(!bare[1].episodal);
}

#[test]
fn null_envelope_payload_is_empty() {
    assert!(parse(r#"{"Shows": null}"#).is_empty());
    assert!(parse(r#"{"Shows": []}"#).is_empty());
    assert!(parse("[]").is_empty());
}

#[test]
fn objects_without_the_shows_key_are_rejected() {
    for body in [
        r#"{"error": "database is locked"}"#,
        r#"{"shows": [{"ID": 1, "title": "A"}]}"#,
        r#"{"Shows": [], "error": "partial"}"#,
        "{}",
    ] {
        assert!(
            serde_json::from_str::<ShowListResponse>(body).is_err(),
            "{} should not parse",
            body
        );
    }
}

#[test]
fn unsaved_show_omits_identity_on_the_wire() {
    let show = Show {
        title: "Show A".to_string(),
        episodal: true,
        ..Show::default()
    };
    let v = serde_json::to_value(&show).expect("serialize");
    assert!(v.get("ID").is_none());
    assert_eq!(v["episodal"], serde_json::json!(true));

    let saved = Show {
        id: Some(ShowId(7)),
        ..show
    };
    let v = serde_json::to_value(&saved).expect("serialize");
    assert_eq!(v["ID"], serde_json::json!(7));
}
