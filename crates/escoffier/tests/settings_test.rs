use escoffier::settings::{Settings, resolve_credential_from};

#[test]
fn explicit_flag_wins_over_environment_and_file() {
    let key = resolve_credential_from(Some("sk-flag"), Some("sk-env"), Some("sk-file")).unwrap();
    assert_eq!(key, "sk-flag");
}

#[test]
fn environment_wins_over_file() {
    let key = resolve_credential_from(None, Some("sk-env"), Some("sk-file")).unwrap();
    assert_eq!(key, "sk-env");
}

#[test]
fn file_is_the_last_resort() {
    let key = resolve_credential_from(None, None, Some("sk-file")).unwrap();
    assert_eq!(key, "sk-file");
}

#[test]
fn blank_values_fall_through_to_the_next_source() {
    let key = resolve_credential_from(Some("   "), Some(""), Some("sk-file")).unwrap();
    assert_eq!(key, "sk-file");
}

#[test]
fn credential_is_trimmed() {
    let key = resolve_credential_from(Some("  sk-flag \n"), None, None).unwrap();
    assert_eq!(key, "sk-flag");
}

#[test]
fn missing_everywhere_is_a_credential_error() {
    let err = resolve_credential_from(None, None, None).unwrap_err();
    assert!(err.to_string().contains("API key"));
}

#[test]
fn settings_default_to_empty() {
    let settings = Settings::default();
    assert!(settings.api_key.is_none());
    assert!(settings.model.is_none());
    assert!(settings.base_url.is_none());
}
