//! Tests for scaffolder configuration loading.

use scaffolder_github::{ConfigError, GitHubIntegrationConfig, ScaffolderConfig};
use std::io::Write;

const CONFIG: &str = r#"
integrations:
  github:
    - host: github.com
      token: ghp_public
    - host: ghe.example.com
      token: ghp_enterprise
    - host: git.internal.example
      apiBaseUrl: https://git.internal.example/rest/
"#;

#[test]
fn test_parse_integrations() {
    let config = ScaffolderConfig::from_yaml_str(CONFIG).unwrap();
    assert_eq!(config.integrations.github.len(), 3);
    assert_eq!(
        config.integrations.github[0],
        GitHubIntegrationConfig {
            host: "github.com".to_string(),
            token: Some("ghp_public".to_string()),
            api_base_url: None,
        }
    );
}

#[test]
fn test_api_base_url_defaults() {
    let config = ScaffolderConfig::from_yaml_str(CONFIG).unwrap();

    let public = config.github_integration("github.com").unwrap();
    assert_eq!(public.api_base_url(), "https://api.github.com");

    let enterprise = config.github_integration("ghe.example.com").unwrap();
    assert_eq!(enterprise.api_base_url(), "https://ghe.example.com/api/v3");

    let custom = config.github_integration("git.internal.example").unwrap();
    assert_eq!(custom.api_base_url(), "https://git.internal.example/rest");
}

#[test]
fn test_github_com_is_implicit() {
    let config = ScaffolderConfig::default();
    let integration = config.github_integration("github.com").unwrap();
    assert_eq!(integration.token, None);
    assert!(config.github_integration("ghe.example.com").is_none());
}

#[test]
fn test_empty_document_is_default() {
    let config = ScaffolderConfig::from_yaml_str("  \n").unwrap();
    assert!(config.integrations.github.is_empty());
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = ScaffolderConfig::from_yaml_str("integrations: [").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let config = ScaffolderConfig::load(file.path()).await.unwrap();
    assert!(config.github_integration("ghe.example.com").is_some());
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScaffolderConfig::load(dir.path().join("absent.yaml"))
        .await
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
