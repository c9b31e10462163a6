use serde::{Deserialize, Serialize};

use super::ApprovalStatus;

/// An end-user account row in the admin management table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "isBlocked")]
    pub is_blocked: bool,
}

/// A creator account row in the admin management table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatorSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "isBlocked")]
    pub is_blocked: bool,
    pub status: ApprovalStatus,
}

/// Accounts the admin can block and unblock.
pub trait Moderated {
    fn id(&self) -> &str;
    fn is_blocked(&self) -> bool;
    fn set_blocked(&mut self, blocked: bool);
}

impl Moderated for UserSummary {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_blocked(&self) -> bool {
        self.is_blocked
    }

    fn set_blocked(&mut self, blocked: bool) {
        self.is_blocked = blocked;
    }
}

impl Moderated for CreatorSummary {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_blocked(&self) -> bool {
        self.is_blocked
    }

    fn set_blocked(&mut self, blocked: bool) {
        self.is_blocked = blocked;
    }
}

/// Flip the blocked flag of the entry with the given id, leaving every
/// other entry untouched. Returns the new flag, or `None` when no entry
/// matches.
pub fn toggle_blocked<T: Moderated>(entries: &mut [T], id: &str) -> Option<bool> {
    let entry = entries.iter_mut().find(|entry| entry.id() == id)?;
    let blocked = !entry.is_blocked();
    entry.set_blocked(blocked);
    Some(blocked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<UserSummary> {
        vec![
            UserSummary {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                is_blocked: false,
            },
            UserSummary {
                id: "u2".to_string(),
                name: "Ben".to_string(),
                email: "ben@example.com".to_string(),
                is_blocked: true,
            },
        ]
    }

    #[test]
    fn toggle_flips_only_the_matching_entry() {
        let mut list = users();
        assert_eq!(toggle_blocked(&mut list, "u1"), Some(true));
        assert!(list[0].is_blocked);
        assert!(list[1].is_blocked, "other entries must stay untouched");
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut list = users();
        toggle_blocked(&mut list, "u2");
        assert!(!list[1].is_blocked);
        toggle_blocked(&mut list, "u2");
        assert!(list[1].is_blocked);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut list = users();
        assert_eq!(toggle_blocked(&mut list, "u9"), None);
        assert_eq!(list, users());
    }

    #[test]
    fn user_summary_uses_backend_field_names() {
        let body = r#"{"_id":"u1","name":"Ada","email":"ada@example.com","isBlocked":false}"#;
        let user: UserSummary = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, "u1");
        assert!(!user.is_blocked);
    }
}
