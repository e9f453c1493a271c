//! Tests for the auth module

use super::*;
use std::collections::HashMap;

fn build(auth: &Authenticator) -> reqwest::Request {
    let client = reqwest::Client::new();
    auth.apply(client.get("https://example.com/api/users"))
        .build()
        .unwrap()
}

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let built = build(&auth);
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_api_key_header_with_prefix() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        header_name: Some("X-Api-Key".to_string()),
        prefix: Some("Token ".to_string()),
        value: "secret".to_string(),
    });

    let built = build(&auth);
    assert_eq!(built.headers().get("X-Api-Key").unwrap(), "Token secret");
}

#[test]
fn test_api_key_default_header() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        header_name: None,
        prefix: None,
        value: "secret".to_string(),
    });

    let built = build(&auth);
    assert_eq!(built.headers().get("Authorization").unwrap(), "secret");
}

#[test]
fn test_basic_auth() {
    let auth = Authenticator::new(AuthConfig::Basic {
        username: "user".to_string(),
        password: Some("pass".to_string()),
    });

    let built = build(&auth);
    // base64("user:pass")
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Basic dXNlcjpwYXNz"
    );
}

#[test]
fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::Bearer {
        token: "my-token".to_string(),
    });

    let built = build(&auth);
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer my-token"
    );
}

#[test]
fn test_custom_headers() {
    let mut headers = HashMap::new();
    headers.insert("X-Tenant".to_string(), "acme".to_string());
    let auth = Authenticator::new(AuthConfig::CustomHeaders { headers });

    let built = build(&auth);
    assert_eq!(built.headers().get("X-Tenant").unwrap(), "acme");
}

#[test]
fn test_auth_config_from_yaml() {
    let config: AuthConfig = serde_yaml::from_str("type: bearer\ntoken: abc").unwrap();
    assert_eq!(
        config,
        AuthConfig::Bearer {
            token: "abc".to_string()
        }
    );

    let config: AuthConfig =
        serde_yaml::from_str("type: basic\nusername: admin\npassword: pw").unwrap();
    assert!(matches!(config, AuthConfig::Basic { .. }));

    let config: AuthConfig = serde_yaml::from_str("type: none").unwrap();
    assert!(config.is_none());
}
