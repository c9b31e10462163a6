use serde::{Deserialize, Serialize};

use super::RoleProfile;

/// Credentials submitted by a role's login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload: an opaque bearer token plus the
/// role-scoped profile of the authenticated account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub profile: RoleProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_deserializes_backend_shape() {
        let body = r#"{
            "token": "tok-123",
            "profile": {"_id": "a9", "name": "Root", "email": "root@festivia.io"}
        }"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.token, "tok-123");
        assert_eq!(response.profile.id, "a9");
    }
}
