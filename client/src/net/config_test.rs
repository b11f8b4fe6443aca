use super::*;

#[test]
fn resolve_base_url_defaults_when_unset() {
    assert_eq!(resolve_base_url(None), "/api/v1");
}

#[test]
fn resolve_base_url_defaults_when_blank() {
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_base_url_uses_override_without_trailing_slash() {
    assert_eq!(
        resolve_base_url(Some("https://migrate.example.com/api/v2/")),
        "https://migrate.example.com/api/v2"
    );
}
