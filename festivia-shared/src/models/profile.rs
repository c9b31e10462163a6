use serde::{Deserialize, Serialize};

/// Role-scoped identity returned by the backend on login and persisted
/// alongside the bearer token.
///
/// The backend keys documents by `_id`; the rename keeps the wire format
/// intact while the Rust side uses `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_with_backend_field_names() {
        let profile = RoleProfile {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"_id\":\"u1\""));

        let back: RoleProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn profile_rejects_non_object_text() {
        assert!(serde_json::from_str::<RoleProfile>("not json").is_err());
    }
}
