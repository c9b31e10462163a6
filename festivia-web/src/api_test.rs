//! Tests for the API client.
//!
//! Validates role-scoped URL construction and client setup for the
//! three endpoint namespaces.

use super::FestiviaClient;
use festivia_shared::models::Role;

#[test]
fn test_client_creation_per_role() {
    for role in Role::ALL {
        let client = FestiviaClient::new(role, "http://localhost:8080/api");
        assert_eq!(client.role(), role);
    }
}

#[test]
fn test_urls_are_role_scoped() {
    let client = FestiviaClient::new(Role::Admin, "/api");
    assert_eq!(client.api_url("login"), "/api/admin/login");
    assert_eq!(client.api_url("users/u1/block"), "/api/admin/users/u1/block");

    let client = FestiviaClient::new(Role::Creator, "/api");
    assert_eq!(client.api_url("events"), "/api/creator/events");
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = FestiviaClient::new(Role::User, "http://localhost:8080/api/");
    assert_eq!(
        client.api_url("/subscriptions"),
        "http://localhost:8080/api/user/subscriptions"
    );
}

#[test]
fn test_namespaces_never_overlap() {
    let urls: Vec<String> = Role::ALL
        .iter()
        .map(|role| FestiviaClient::new(*role, "/api").api_url("dashboard"))
        .collect();
    assert_eq!(urls.len(), 3);
    assert!(urls.iter().all(|url| url.ends_with("/dashboard")));
    let mut deduped = urls.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), 3, "each role needs its own namespace");
}
