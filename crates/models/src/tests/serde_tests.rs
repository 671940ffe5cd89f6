use crate::analyzed_feedback::{AnalyzedFeedback, NewAnalyzedFeedback};
use crate::feedback::{Model, NewFeedback};
use serde_json::json;

#[test]
fn feedback_uses_camel_case_keys() {
    let m = Model {
        id: 7,
        user_name: Some("ann".into()),
        email: Some("ann@x.com".into()),
        message: Some("great".into()),
        source: Some("Web".into()),
        created_at: None,
    };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["id"], 7);
    assert_eq!(v["userName"], "ann");
    assert_eq!(v["createdAt"], serde_json::Value::Null);
    assert!(v.get("user_name").is_none());
}

#[test]
fn new_feedback_ignores_client_id_and_defaults_missing_fields() {
    let input: NewFeedback = serde_json::from_value(json!({"id": 99, "message": "great"})).unwrap();
    assert_eq!(input.message.as_deref(), Some("great"));
    assert!(input.user_name.is_none());

    let saved = input.into_model(1);
    assert_eq!(saved.id, 1);
    assert_eq!(saved.message.as_deref(), Some("great"));
}

#[test]
fn analyzed_feedback_round_trips_client_payload() {
    let input: NewAnalyzedFeedback = serde_json::from_value(json!({
        "userName": "a",
        "email": "a@x.com",
        "message": "ok",
        "sentimentLabel": "positive",
        "sentimentScore": 0.9,
        "source": "web",
        "createdAt": "2024-01-01"
    }))
    .unwrap();
    let doc = input.into_document("abc".into());
    let v = serde_json::to_value(&doc).unwrap();
    assert_eq!(v["id"], "abc");
    assert_eq!(v["sentimentLabel"], "positive");
    assert_eq!(v["sentimentScore"], 0.9);
    assert_eq!(v["createdAt"], "2024-01-01");
}

#[test]
fn missing_score_defaults_to_zero() {
    let input: NewAnalyzedFeedback = serde_json::from_value(json!({"message": "meh"})).unwrap();
    assert_eq!(input.sentiment_score, 0.0);
    let doc: AnalyzedFeedback = serde_json::from_value(json!({"id": "x"})).unwrap();
    assert_eq!(doc.sentiment_score, 0.0);
    assert!(doc.sentiment_label.is_none());
}

#[test]
fn null_score_reads_as_zero() {
    let input: NewAnalyzedFeedback =
        serde_json::from_value(json!({"message": "meh", "sentimentScore": null})).unwrap();
    assert_eq!(input.sentiment_score, 0.0);
    let doc: AnalyzedFeedback = serde_json::from_value(json!({"id": "x", "sentimentScore": null})).unwrap();
    assert_eq!(doc.sentiment_score, 0.0);
}

#[test]
fn non_numeric_score_is_rejected() {
    let res = serde_json::from_value::<NewAnalyzedFeedback>(json!({"sentimentScore": "high"}));
    assert!(res.is_err());
}
