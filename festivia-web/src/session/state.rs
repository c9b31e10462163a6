//! Role session state.
//!
//! One generic session type instantiated once per role. Each instance
//! is an independent yewdux store: holding a user session says nothing
//! about the creator or admin sessions in the same browser.
//!
//! The store hydrates from persisted storage when first accessed, which
//! makes storage the sole source of truth for authentication state
//! across page reloads. Exactly two transitions exist: `login` and
//! `logout`. No refreshing or expired-pending state is modeled.

use std::marker::PhantomData;

use festivia_shared::models::{Role, RoleProfile};
use yewdux::prelude::*;

use super::store;

/// Marker trait tying a session instance to one of the three roles.
pub trait RoleScope: std::fmt::Debug + Clone + PartialEq + 'static {
    const ROLE: Role;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatorScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminScope;

impl RoleScope for UserScope {
    const ROLE: Role = Role::User;
}

impl RoleScope for CreatorScope {
    const ROLE: Role = Role::Creator;
}

impl RoleScope for AdminScope {
    const ROLE: Role = Role::Admin;
}

/// In-memory session for one role, mirroring the persisted store.
///
/// Authentication is derived from token presence, so the
/// "authenticated iff a token is held" invariant cannot be violated by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState<S: RoleScope> {
    token: Option<String>,
    profile: Option<RoleProfile>,
    _scope: PhantomData<S>,
}

impl<S: RoleScope> Store for SessionState<S> {
    fn new(_cx: &yewdux::Context) -> Self {
        Self::hydrate()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl<S: RoleScope> SessionState<S> {
    /// The anonymous state: no token, no profile.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            token: None,
            profile: None,
            _scope: PhantomData,
        }
    }

    /// The authenticated state for a confirmed login.
    #[must_use]
    pub fn authenticated(profile: RoleProfile, token: String) -> Self {
        Self {
            token: Some(token),
            profile: Some(profile),
            _scope: PhantomData,
        }
    }

    /// Re-derive the session from persisted storage. A persisted token
    /// with a corrupt profile still counts as authenticated; the
    /// profile simply comes back absent.
    #[must_use]
    pub fn hydrate() -> Self {
        let persisted = store::read(S::ROLE);
        Self {
            token: persisted.token,
            profile: persisted.profile,
            _scope: PhantomData,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&RoleProfile> {
        self.profile.as_ref()
    }

    /// Anonymous -> Authenticated. The caller (the login page) has
    /// already confirmed a successful server response; no token shape
    /// validation happens here. Persists first so a reload re-derives
    /// the same state.
    pub fn login(dispatch: &Dispatch<Self>, profile: RoleProfile, token: String) {
        store::write(S::ROLE, &token, &profile);
        dispatch.set(Self::authenticated(profile, token));
    }

    /// Authenticated -> Anonymous. Idempotent; always succeeds. Clears
    /// the persisted keys and the legacy refresh-token cookie.
    pub fn logout(dispatch: &Dispatch<Self>) {
        store::clear(S::ROLE);
        store::clear_refresh_cookie();
        dispatch.set(Self::anonymous());
    }
}

impl<S: RoleScope> Default for SessionState<S> {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_profile() -> RoleProfile {
        RoleProfile {
            id: "a1".to_string(),
            name: "Root".to_string(),
            email: "root@festivia.io".to_string(),
        }
    }

    #[test]
    fn anonymous_holds_nothing() {
        let session = SessionState::<UserScope>::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn authenticated_iff_token_present() {
        let session =
            SessionState::<AdminScope>::authenticated(admin_profile(), "tok-9".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-9"));
        assert_eq!(session.profile().map(|p| p.id.as_str()), Some("a1"));
    }

    #[test]
    fn admin_login_lands_on_admin_dashboard() {
        // Valid admin credentials move the admin session from Anonymous
        // to Authenticated, then navigation targets /admin/dashboard.
        let session =
            SessionState::<AdminScope>::authenticated(admin_profile(), "tok-9".to_string());
        assert!(session.is_authenticated());
        assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    }

    #[test]
    fn scopes_are_distinct_types() {
        // Different scope parameters are different stores; nothing ties
        // their states together.
        let user = SessionState::<UserScope>::anonymous();
        let creator =
            SessionState::<CreatorScope>::authenticated(admin_profile(), "tok".to_string());
        assert!(!user.is_authenticated());
        assert!(creator.is_authenticated());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn profile() -> RoleProfile {
        RoleProfile {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn login_is_observable_through_storage() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<SessionState<UserScope>>::new(&cx);
        SessionState::<UserScope>::login(&dispatch, profile(), "tok-42".to_string());

        let persisted = store::read(Role::User);
        assert_eq!(persisted.token.as_deref(), Some("tok-42"));
        assert_eq!(persisted.profile, Some(profile()));
        assert!(SessionState::<UserScope>::hydrate().is_authenticated());

        SessionState::<UserScope>::logout(&dispatch);
    }

    #[wasm_bindgen_test]
    fn logout_resets_to_anonymous() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<SessionState<UserScope>>::new(&cx);
        SessionState::<UserScope>::login(&dispatch, profile(), "tok-43".to_string());
        SessionState::<UserScope>::logout(&dispatch);

        let persisted = store::read(Role::User);
        assert!(persisted.token.is_none());
        assert!(persisted.profile.is_none());
        assert!(!SessionState::<UserScope>::hydrate().is_authenticated());
    }
}
