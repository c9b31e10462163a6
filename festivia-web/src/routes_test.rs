//! Tests for the routing system.
//!
//! Validates the three role subtrees, their path prefixes, and the
//! scoped login/dashboard targets the guard redirects to.

use super::{AdminRoute, CreatorRoute, MainRoute, ScopedRoutes, UserRoute};
use crate::session::{AdminScope, CreatorScope, UserScope};
use strum::IntoEnumIterator;
use yew_router::Routable;

#[test]
fn test_main_route_prefixes() {
    assert_eq!(MainRoute::Landing.to_path(), "/");
    assert_eq!(MainRoute::UserRoot.to_path(), "/user");
    assert_eq!(MainRoute::CreatorRoot.to_path(), "/creator");
    assert_eq!(MainRoute::AdminRoot.to_path(), "/admin");
}

#[test]
fn test_role_subtree_paths() {
    assert_eq!(UserRoute::Dashboard.to_path(), "/user/dashboard");
    assert_eq!(UserRoute::Subscriptions.to_path(), "/user/subscriptions");
    assert_eq!(CreatorRoute::EventManagement.to_path(), "/creator/eventmanagement");
    assert_eq!(AdminRoute::Approvals.to_path(), "/admin/approvals");
    assert_eq!(AdminRoute::CreatorManagement.to_path(), "/admin/creatormanagement");
    assert_eq!(AdminRoute::UsersManagement.to_path(), "/admin/usersmanagement");
}

#[test]
fn test_recognize_role_paths() {
    assert_eq!(
        UserRoute::recognize("/user/account"),
        Some(UserRoute::Account)
    );
    assert_eq!(
        AdminRoute::recognize("/admin/usersmanagement"),
        Some(AdminRoute::UsersManagement)
    );
    assert_eq!(
        CreatorRoute::recognize("/creator/subscriptions"),
        Some(CreatorRoute::Plans)
    );
}

#[test]
fn test_unknown_paths_fall_through_to_not_found() {
    assert_eq!(
        UserRoute::recognize("/user/billing"),
        Some(UserRoute::NotFound)
    );
    assert_eq!(MainRoute::recognize("/nowhere"), Some(MainRoute::NotFound));
}

#[test]
fn test_scoped_login_and_dashboard_targets() {
    assert_eq!(UserScope::login_route().to_path(), "/user/login");
    assert_eq!(UserScope::dashboard_route().to_path(), "/user/dashboard");
    assert_eq!(CreatorScope::login_route().to_path(), "/creator/login");
    assert_eq!(
        CreatorScope::dashboard_route().to_path(),
        "/creator/dashboard"
    );
    assert_eq!(AdminScope::login_route().to_path(), "/admin/login");
    assert_eq!(AdminScope::dashboard_route().to_path(), "/admin/dashboard");
}

#[test]
fn test_scoped_paths_agree_with_role_constants() {
    use festivia_shared::models::Role;

    assert_eq!(UserScope::login_route().to_path(), Role::User.login_path());
    assert_eq!(
        AdminScope::dashboard_route().to_path(),
        Role::Admin.dashboard_path()
    );
    assert_eq!(
        CreatorScope::login_route().to_path(),
        Role::Creator.login_path()
    );
}

#[test]
fn test_scoped_not_found_is_the_recognize_fallback() {
    // Foreign and unknown paths recognize as the catch-all variant, so
    // it doubles as the "no match" sentinel for callers.
    assert_eq!(
        UserRoute::recognize("/creator/dashboard"),
        Some(UserScope::not_found_route())
    );
    assert_eq!(
        CreatorRoute::recognize("/creator/void"),
        Some(CreatorScope::not_found_route())
    );
    assert_eq!(
        AdminRoute::recognize("/user/account"),
        Some(AdminScope::not_found_route())
    );
}

#[test]
fn test_nav_items_skip_login_and_not_found() {
    for (route, label) in UserScope::nav_items() {
        assert_ne!(route, UserRoute::Login);
        assert_ne!(route, UserRoute::NotFound);
        assert!(!label.is_empty());
    }
    for (route, _) in AdminScope::nav_items() {
        assert_ne!(route, AdminRoute::Login);
        assert_ne!(route, AdminRoute::NotFound);
    }
}

#[test]
fn test_every_user_route_stays_under_its_prefix() {
    for route in UserRoute::iter() {
        assert!(route.to_path().starts_with("/user"));
    }
    for route in AdminRoute::iter() {
        assert!(route.to_path().starts_with("/admin"));
    }
    for route in CreatorRoute::iter() {
        assert!(route.to_path().starts_with("/creator"));
    }
}
