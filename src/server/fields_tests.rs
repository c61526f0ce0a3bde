use super::*;

fn json(body: &str) -> RequestFields {
    RequestFields::parse(body.as_bytes(), false)
}

fn form(body: &str) -> RequestFields {
    RequestFields::parse(body.as_bytes(), true)
}

#[test]
fn test_empty_body_has_no_fields() {
    assert_eq!(json(""), RequestFields::default());
    assert_eq!(json("  \n"), RequestFields::default());
    assert_eq!(form(""), RequestFields::default());
}

#[test]
fn test_malformed_json_has_no_fields() {
    assert_eq!(json("{not json"), RequestFields::default());
    assert_eq!(json("[1, 2, 3]"), RequestFields::default());
}

#[test]
fn test_json_scalars_render_as_text() {
    let fields = json(r#"{"issue_title": 5, "issue_text": true, "created_by": null}"#);
    assert_eq!(fields.text("issue_title").as_deref(), Some("5"));
    assert_eq!(fields.text("issue_text").as_deref(), Some("true"));
    assert_eq!(fields.text("created_by").as_deref(), Some(""));
    assert_eq!(fields.text("assigned_to"), None);
}

#[test]
fn test_form_body_is_decoded() {
    let fields = form("issue_title=Hello+World&created_by=Joe%20Doe&assigned_to=");
    assert_eq!(fields.text("issue_title").as_deref(), Some("Hello World"));
    assert_eq!(fields.text("created_by").as_deref(), Some("Joe Doe"));
    assert!(fields.contains("assigned_to"));
    assert_eq!(fields.text("assigned_to").as_deref(), Some(""));
}

#[test]
fn test_id_empty_is_missing() {
    assert_eq!(json(r#"{"_id": ""}"#).id(), None);
    assert_eq!(json("{}").id(), None);
    assert_eq!(json(r#"{"_id": "abc"}"#).id().as_deref(), Some("abc"));
    assert_eq!(form("_id=abc").id().as_deref(), Some("abc"));
}

#[test]
fn test_falsy_id_is_missing() {
    assert_eq!(json(r#"{"_id": 0}"#).id(), None);
    assert_eq!(json(r#"{"_id": 0.0}"#).id(), None);
    assert_eq!(json(r#"{"_id": false}"#).id(), None);
    assert_eq!(json(r#"{"_id": null}"#).id(), None);
    assert_eq!(json(r#"{"_id": "0"}"#).id().as_deref(), Some("0"));
    assert_eq!(json(r#"{"_id": 7}"#).id().as_deref(), Some("7"));
}

#[test]
fn test_falsy_create_fields_are_absent() {
    let fields = json(
        r#"{"issue_title": false, "issue_text": 0, "created_by": null,
            "assigned_to": false, "status_text": "ok"}"#,
    );
    let options = fields.create_options();
    assert_eq!(options.issue_title, None);
    assert_eq!(options.issue_text, None);
    assert_eq!(options.created_by, None);
    assert_eq!(options.assigned_to, None);
    assert_eq!(options.status_text.as_deref(), Some("ok"));
}

#[test]
fn test_update_options_keep_falsy_values_present() {
    let fields = json(r#"{"_id": "abc", "issue_text": false, "assigned_to": 0}"#);
    let options = fields.update_options();
    assert!(options.has_changes());
    assert_eq!(options.issue_text.as_deref(), Some("false"));
    assert_eq!(options.assigned_to.as_deref(), Some("0"));
}

#[test]
fn test_open_normalization() {
    assert_eq!(json(r#"{"open": false}"#).open(), Some(false));
    assert_eq!(json(r#"{"open": "false"}"#).open(), Some(false));
    assert_eq!(json(r#"{"open": true}"#).open(), Some(true));
    assert_eq!(json(r#"{"open": "true"}"#).open(), Some(true));
    assert_eq!(json(r#"{"open": "yes"}"#).open(), Some(true));
    assert_eq!(form("open=false").open(), Some(false));
    assert_eq!(json("{}").open(), None);
}

#[test]
fn test_create_options_from_fields() {
    let fields = json(
        r#"{"issue_title": "Title", "issue_text": "text",
            "created_by": "Joe", "status_text": "In QA"}"#,
    );
    let options = fields.create_options();
    assert_eq!(options.issue_title.as_deref(), Some("Title"));
    assert_eq!(options.issue_text.as_deref(), Some("text"));
    assert_eq!(options.created_by.as_deref(), Some("Joe"));
    assert_eq!(options.assigned_to, None);
    assert_eq!(options.status_text.as_deref(), Some("In QA"));
}

#[test]
fn test_update_options_only_id_has_no_changes() {
    let fields = json(r#"{"_id": "abc"}"#);
    assert!(!fields.update_options().has_changes());
}

#[test]
fn test_update_options_present_empty_value_is_a_change() {
    let fields = form("_id=abc&status_text=");
    let options = fields.update_options();
    assert!(options.has_changes());
    assert_eq!(options.status_text.as_deref(), Some(""));
}

#[test]
fn test_update_options_ignores_unknown_keys() {
    let fields = json(r#"{"_id": "abc", "priority": "high"}"#);
    assert!(!fields.update_options().has_changes());
}
