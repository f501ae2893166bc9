//! Tests for classifying the admin access principal.

use scaffolder_github::AccessGrant;

#[test]
fn test_owner_prefixed_principal_is_team() {
    assert_eq!(
        AccessGrant::for_principal("acme", Some("acme/platform")),
        AccessGrant::Team("platform".to_string())
    );
}

#[test]
fn test_owner_itself_needs_no_grant() {
    assert_eq!(
        AccessGrant::for_principal("acme", Some("acme")),
        AccessGrant::Owner
    );
    assert_eq!(AccessGrant::for_principal("acme", None), AccessGrant::Owner);
}

#[test]
fn test_other_login_is_user() {
    assert_eq!(
        AccessGrant::for_principal("acme", Some("octocat")),
        AccessGrant::User("octocat".to_string())
    );
}

#[test]
fn test_foreign_team_path_is_treated_as_username() {
    assert_eq!(
        AccessGrant::for_principal("acme", Some("other-org/platform")),
        AccessGrant::User("other-org/platform".to_string())
    );
}

#[test]
fn test_owner_prefix_without_slash_is_user() {
    assert_eq!(
        AccessGrant::for_principal("acme", Some("acmecorp/platform")),
        AccessGrant::User("acmecorp/platform".to_string())
    );
}
