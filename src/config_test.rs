use super::*;

fn vars(url: Option<&'static str>, key: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |var| match var {
        URL_VAR => url.map(str::to_owned),
        ANON_KEY_VAR => key.map(str::to_owned),
        _ => None,
    }
}

#[test]
fn from_vars_trims_trailing_slash() {
    let cfg = BackendConfig::from_vars(vars(Some("https://demo.supabase.co/"), Some("anon"))).unwrap();
    assert_eq!(cfg.url, "https://demo.supabase.co");
    assert_eq!(cfg.anon_key, "anon");
}

#[test]
fn from_vars_missing_url_errors() {
    let err = BackendConfig::from_vars(vars(None, Some("anon"))).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: URL_VAR });
}

#[test]
fn from_vars_blank_key_counts_as_missing() {
    let err = BackendConfig::from_vars(vars(Some("https://demo.supabase.co"), Some("   "))).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: ANON_KEY_VAR });
}

#[test]
fn from_vars_rejects_relative_url() {
    let err = BackendConfig::from_vars(vars(Some("demo.supabase.co"), Some("anon"))).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { var: URL_VAR, .. }));
}

#[test]
fn from_vars_rejects_non_http_scheme() {
    let err = BackendConfig::from_vars(vars(Some("ftp://demo.supabase.co"), Some("anon"))).unwrap_err();
    assert!(err.to_string().contains("unsupported scheme 'ftp'"));
}
