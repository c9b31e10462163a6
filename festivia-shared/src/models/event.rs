use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing an approval status from text fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown approval status: {0}")]
pub struct ParseApprovalStatusError(String);

/// Moderation state of a creator-submitted event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = ParseApprovalStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseApprovalStatusError(other.to_string())),
        }
    }
}

/// Payload for submitting a new event. Starts life as `pending` until
/// an administrator approves or rejects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub venue: String,
    pub starts_at: DateTime<Utc>,
    pub price: f64,
}

/// An event as listed in dashboards and management tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub venue: String,
    pub starts_at: DateTime<Utc>,
    pub price: f64,
    pub status: ApprovalStatus,
    pub creator_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_status_roundtrip() {
        for (text, status) in [
            ("pending", ApprovalStatus::Pending),
            ("approved", ApprovalStatus::Approved),
            ("rejected", ApprovalStatus::Rejected),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(ApprovalStatus::from_str(text).unwrap(), status);
        }
        assert!(ApprovalStatus::from_str("cancelled").is_err());
    }

    #[test]
    fn event_deserializes_backend_shape() {
        let body = r#"{
            "_id": "e7",
            "title": "Midnight Jazz",
            "venue": "Blue Hall",
            "starts_at": "2026-09-01T20:00:00Z",
            "price": 45.0,
            "status": "pending",
            "creator_id": "c2"
        }"#;
        let event: EventSummary = serde_json::from_str(body).unwrap();
        assert_eq!(event.id, "e7");
        assert_eq!(event.status, ApprovalStatus::Pending);
    }
}
