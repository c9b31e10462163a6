//! Persisted session store.
//!
//! Durable key-value storage of each role's bearer token and serialized
//! profile, under role-prefixed keys so the three sessions never
//! collide. Storage is synchronous and shared across all tabs of the
//! same origin; writes are observed by other components on their next
//! read.

use festivia_shared::models::{Role, RoleProfile};
use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Refresh-token cookie cleared on logout. Nothing in the active code
/// path sets or renews it.
const REFRESH_COOKIE_NAME: &str = "festiviaRefreshToken";

/// What the store holds for one role.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedSession {
    pub token: Option<String>,
    pub profile: Option<RoleProfile>,
}

/// Persist a role's credential and profile. Subsequent reads observe
/// the new values immediately.
pub fn write(role: Role, token: &str, profile: &RoleProfile) {
    if let Err(err) = LocalStorage::set(role.token_key(), token) {
        warn(&format!("failed to persist {role} token: {err}"));
    }
    if let Err(err) = LocalStorage::set(role.profile_key(), profile) {
        warn(&format!("failed to persist {role} profile: {err}"));
    }
}

/// Read back a role's persisted session.
///
/// Malformed persisted profile text fails soft: the profile comes back
/// as `None` and the anomaly is logged, never surfaced to the user.
pub fn read(role: Role) -> PersistedSession {
    let token = LocalStorage::get::<String>(role.token_key()).ok();
    let profile = match LocalStorage::get::<RoleProfile>(role.profile_key()) {
        Ok(profile) => Some(profile),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            warn(&format!("discarding malformed {role} profile: {err}"));
            None
        }
    };
    PersistedSession { token, profile }
}

/// Remove both of a role's keys.
pub fn clear(role: Role) {
    LocalStorage::delete(role.token_key());
    LocalStorage::delete(role.profile_key());
}

/// Expire the legacy refresh-token cookie.
pub fn clear_refresh_cookie() {
    let Some(html_doc) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
    else {
        return;
    };
    let expired = format!("{REFRESH_COOKIE_NAME}=; Max-Age=0; path=/");
    if html_doc.set_cookie(&expired).is_err() {
        warn("failed to clear refresh-token cookie");
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
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
    fn write_then_read_roundtrips() {
        clear(Role::User);
        write(Role::User, "tok-1", &profile());
        let persisted = read(Role::User);
        assert_eq!(persisted.token.as_deref(), Some("tok-1"));
        assert_eq!(persisted.profile, Some(profile()));
    }

    #[wasm_bindgen_test]
    fn clear_removes_both_keys() {
        write(Role::Creator, "tok-2", &profile());
        clear(Role::Creator);
        assert_eq!(read(Role::Creator), PersistedSession::default());
    }

    #[wasm_bindgen_test]
    fn roles_do_not_observe_each_other() {
        clear(Role::User);
        clear(Role::Admin);
        write(Role::Admin, "tok-admin", &profile());
        assert!(read(Role::User).token.is_none());
        assert!(read(Role::Admin).token.is_some());
        clear(Role::Admin);
    }

    #[wasm_bindgen_test]
    fn malformed_profile_fails_soft() {
        clear(Role::User);
        write(Role::User, "tok-3", &profile());
        LocalStorage::raw()
            .set_item(Role::User.profile_key(), "{not valid json")
            .unwrap();
        let persisted = read(Role::User);
        assert_eq!(persisted.token.as_deref(), Some("tok-3"));
        assert_eq!(persisted.profile, None);
        clear(Role::User);
    }
}
