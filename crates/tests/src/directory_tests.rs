use pretty_assertions::assert_eq;
use shared_types::{authenticate, directory, AppError, Directory, LoginRequest, Role};

#[test]
fn embedded_directory_has_every_role() {
    let dir = directory();
    assert_eq!(dir.len(), Role::ALL.len());
    for role in Role::ALL {
        assert!(dir.credential(role).is_some(), "no account for {role}");
    }
}

#[test]
fn custom_directory_drives_authentication() {
    let dir = Directory::from_toml(
        r#"
        [accounts.Agent]
        email = "night.shift@example.com"
        password = "owl"

        [accounts.Supervisor]
        email = "boss@example.com"
        password = "x"
        "#,
    )
    .unwrap();

    assert_eq!(dir.len(), 1);
    assert_eq!(dir.display_name(Role::Agent), Some("Agent"));

    let ok = authenticate(&LoginRequest::new("Agent", "night.shift@example.com", "owl"), &dir).unwrap();
    assert_eq!(ok.display_name, "Agent");

    let err = authenticate(&LoginRequest::new("Manager", "manager@example.com", "mgr123"), &dir).unwrap_err();
    assert!(err.is_auth());
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(Directory::from_toml("[accounts.Agent\nemail = 1").is_err());
}

#[test]
fn errors_serialize_with_kind_and_fields() {
    let err = AppError::invalid_field("email", "Please enter a valid email address");
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "ValidationError");
    assert_eq!(json["field_errors"]["email"], "Please enter a valid email address");

    let auth = serde_json::to_value(AppError::auth("nope")).unwrap();
    assert!(auth.get("field_errors").is_none());
}
