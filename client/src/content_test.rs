use super::*;

#[test]
fn embedded_content_parses() {
    let content = SiteContent::from_json(EMBEDDED_CONTENT).unwrap();
    assert!(!content.profile.name.is_empty());
    assert!(!content.projects.is_empty());
    assert_eq!(content.config.theme.storage_key, "folio-theme");
}

#[test]
fn embedded_falls_back_to_usable_content() {
    let content = SiteContent::embedded();
    assert!(!content.profile.name.is_empty());
}

#[test]
fn minimal_json_fills_defaults() {
    let content = SiteContent::from_json(r#"{"profile":{"name":"Sam","title":"Dev"}}"#).unwrap();
    assert!(content.skills.is_empty());
    assert_eq!(content.config, SiteConfig::default());
}

#[test]
fn empty_name_is_invalid() {
    let err = SiteContent::from_json(r#"{"profile":{"name":" ","title":"Dev"}}"#).unwrap_err();
    assert!(matches!(err, ContentError::Invalid(_)));
}

#[test]
fn skill_level_above_100_is_invalid() {
    let raw = r#"{
        "profile": {"name": "Sam", "title": "Dev"},
        "skills": [{"name": "Lang", "skills": [{"name": "Rust", "level": 150}]}]
    }"#;
    let err = SiteContent::from_json(raw).unwrap_err();
    assert!(err.to_string().contains("Rust"));
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(SiteContent::from_json("{"), Err(ContentError::Parse(_))));
}

#[test]
fn initials_take_first_two_words() {
    let profile = Profile {
        name: "jordan lee avery".to_owned(),
        ..Profile::default()
    };
    assert_eq!(profile.initials(), "JL");
}

#[test]
fn page_sections_are_in_document_order() {
    let ids: Vec<_> = page_sections().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["home", "about", "skills", "projects", "experience", "contact"]);
}
