//! Tests for repository location parsing and credential resolution.

use scaffolder_github::{ClientResolver, RepoLocation, ResolveError, ScaffolderConfig};

fn config() -> ScaffolderConfig {
    ScaffolderConfig::from_yaml_str(
        r#"
integrations:
  github:
    - host: ghe.example.com
      token: ghp_enterprise
"#,
    )
    .unwrap()
}

#[test]
fn test_parse_repo_location() {
    let location: RepoLocation = "github.com?owner=acme&repo=widgets".parse().unwrap();
    assert_eq!(
        location,
        RepoLocation {
            host: "github.com".to_string(),
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
        }
    );
}

#[test]
fn test_parse_decodes_query_values() {
    let location: RepoLocation = "github.com?repo=my%2Ewidgets&owner=acme&workspace=x"
        .parse()
        .unwrap();
    assert_eq!(location.owner, "acme");
    assert_eq!(location.repo, "my.widgets");
}

#[test]
fn test_parse_rejects_missing_query() {
    let err = "github.com/acme/widgets".parse::<RepoLocation>().unwrap_err();
    assert!(matches!(err, ResolveError::InvalidRepoUrl(_)));
}

#[test]
fn test_parse_rejects_missing_repo() {
    let err = "github.com?owner=acme".parse::<RepoLocation>().unwrap_err();
    assert!(matches!(
        err,
        ResolveError::MissingParameter { param: "repo", .. }
    ));
}

#[test]
fn test_parse_rejects_empty_owner() {
    let err = "github.com?owner=&repo=widgets"
        .parse::<RepoLocation>()
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::MissingParameter { param: "owner", .. }
    ));
}

#[test]
fn test_explicit_token_wins() {
    let resolver = ClientResolver::new(config()).with_env_token(Some("ghp_env".to_string()));
    let location: RepoLocation = "ghe.example.com?owner=acme&repo=widgets".parse().unwrap();
    assert_eq!(
        resolver.token_for(&location, Some("ghp_input")).unwrap(),
        "ghp_input"
    );
}

#[test]
fn test_integration_token_before_environment() {
    let resolver = ClientResolver::new(config()).with_env_token(Some("ghp_env".to_string()));
    let location: RepoLocation = "ghe.example.com?owner=acme&repo=widgets".parse().unwrap();
    assert_eq!(resolver.token_for(&location, None).unwrap(), "ghp_enterprise");
}

#[test]
fn test_environment_token_fallback() {
    let resolver = ClientResolver::new(config()).with_env_token(Some("ghp_env".to_string()));
    let location: RepoLocation = "github.com?owner=acme&repo=widgets".parse().unwrap();
    assert_eq!(resolver.token_for(&location, None).unwrap(), "ghp_env");
}

#[test]
fn test_unconfigured_host_is_rejected() {
    let resolver = ClientResolver::new(config()).with_env_token(Some("ghp_env".to_string()));
    let location: RepoLocation = "gitlab.com?owner=acme&repo=widgets".parse().unwrap();
    let err = resolver.token_for(&location, None).unwrap_err();
    assert!(matches!(err, ResolveError::UnknownHost(host) if host == "gitlab.com"));
}

#[test]
fn test_no_token_anywhere_is_rejected() {
    let resolver = ClientResolver::new(config()).with_env_token(None);
    let location: RepoLocation = "github.com?owner=acme&repo=widgets".parse().unwrap();
    let err = resolver.token_for(&location, None).unwrap_err();
    assert!(matches!(err, ResolveError::MissingCredentials(_)));
}
